mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use crate::config::{ViewerConfig, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
pub use crate::controllers::viewer::{FrameData, FrameSink, ViewerController};
pub use crate::core::actions::render_frame::{RenderFrameError, render_frame, render_frame_serial};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::fractals::mandelbrot::algorithm::{
    ESCAPE_RADIUS_SQUARED, PixelEvaluation, escape_time, evaluate_pixel, pixel_to_complex,
};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::params::FrameParams;
pub use crate::core::view::controller::ViewStateController;
pub use crate::core::view::drag_state::DragState;
pub use crate::core::view::input_event::{CursorPosition, InputEvent, ScrollDirection};
pub use crate::core::view::view_state::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_OFFSET, DEFAULT_ZOOM, ViewOffset, ViewState, ZOOM_FACTOR,
};

#[cfg(feature = "gui")]
pub use crate::input::gui::{RunGuiCommand, ViewerError};
