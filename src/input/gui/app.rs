//! Main GUI application loop.

use tracing::{debug, error, info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{EventLoop, EventLoopWindowTarget},
    window::Window,
};

use crate::controllers::viewer::ViewerController;
use crate::core::view::input_event::InputEvent;
use crate::input::gui::errors::ViewerError;
use crate::input::gui::pointer::PointerTranslator;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct GuiApp {
    window: &'static Window,
    presenter: PixelsPresenter,
    controller: ViewerController,
    pointer: PointerTranslator,
    /// Set whenever the view or the surface changed since the last frame.
    redraw_pending: bool,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        presenter: PixelsPresenter,
        controller: ViewerController,
    ) -> Self {
        Self {
            window,
            presenter,
            controller,
            pointer: PointerTranslator::new(window.scale_factor()),
            redraw_pending: true,
        }
    }

    /// Runs until the window is closed or the presentation layer fails.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), ViewerError> {
        let mut failure: Option<ViewerError> = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                if let Err(err) = self.handle_window_event(&event, elwt) {
                    error!(%err, "presentation failed, shutting down");
                    failure = Some(err);
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                if self.redraw_pending {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })?;

        info!(
            frames = self.controller.frames_rendered(),
            "viewer closed"
        );

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        elwt: &EventLoopWindowTarget<()>,
    ) -> Result<(), ViewerError> {
        match event {
            WindowEvent::CloseRequested => {
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw_pending = false;
                self.draw()?;
            }
            WindowEvent::Resized(size) => {
                self.presenter.resize_surface(size.width, size.height)?;
                self.redraw_pending = true;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                debug!(scale_factor, "scale factor changed");
                self.pointer.set_scale_factor(*scale_factor);
                self.redraw_pending = true;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let input = self.pointer.mouse_wheel(*delta);
                self.dispatch(input);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let input = self.pointer.mouse_input(*state, *button);
                self.dispatch(input);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let input = self.pointer.cursor_moved(*position);
                self.dispatch(Some(input));
            }
            _ => {}
        }

        Ok(())
    }

    fn dispatch(&mut self, input: Option<InputEvent>) {
        if let Some(input) = input {
            if self.controller.handle_input(input) {
                self.redraw_pending = true;
            }
        }
    }

    fn draw(&mut self) -> Result<(), ViewerError> {
        // The last good frame stays on screen when this one cannot be evaluated.
        if let Err(err) = self.controller.render_frame(&mut self.presenter) {
            warn!(%err, "skipping frame");
        }

        self.presenter.render()
    }
}
