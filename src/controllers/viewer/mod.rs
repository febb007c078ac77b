//! Frame orchestration for the interactive viewer.
//!
//! The viewer controller sits between an input adapter and a presenter:
//! - **Input**: [`InputEvent`](crate::core::view::input_event::InputEvent)s forwarded from the window
//! - **Output**: [`FrameSink`] receiving one [`FrameData`] per rendered frame
//! - **Core**: view-state mutation and the escape-time frame renderer from `core/`

mod controller;
pub mod data;
pub mod ports;

pub use controller::ViewerController;
pub use data::frame_data::FrameData;
pub use ports::frame_sink::FrameSink;
