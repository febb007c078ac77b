use tracing::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::config::ViewerConfig;
use crate::controllers::viewer::ViewerController;
use crate::input::gui::app::GuiApp;
use crate::input::gui::errors::ViewerError;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens the viewer window and blocks until it is closed.
pub struct RunGuiCommand {
    config: ViewerConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), ViewerError> {
        let event_loop = EventLoop::new()?;
        let resolution = self.config.resolution;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(&self.config.title)
                .with_inner_size(LogicalSize::new(
                    f64::from(resolution.width()),
                    f64::from(resolution.height()),
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        info!(
            width = resolution.width(),
            height = resolution.height(),
            zoom = self.config.initial_view.zoom(),
            max_iterations = self.config.initial_view.max_iterations(),
            "viewer started"
        );

        let presenter = PixelsPresenter::new(window, resolution)?;
        let controller = ViewerController::new(self.config.initial_view, resolution);

        GuiApp::new(window, presenter, controller).run(event_loop)
    }
}
