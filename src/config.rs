use crate::core::data::resolution::Resolution;
use crate::core::view::view_state::ViewState;

pub const WINDOW_TITLE: &str = "Mandelbrot Fractal with Mouse and Scroll Zoom";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 800;

/// Startup settings for the viewer. Fixed at compile time; there is no CLI or file layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub resolution: Resolution,
    pub initial_view: ViewState,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_owned(),
            resolution: Resolution::new(WINDOW_WIDTH, WINDOW_HEIGHT)
                .expect("default window resolution is non-zero"),
            initial_view: ViewState::default(),
        }
    }
}
