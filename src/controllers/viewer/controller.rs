use std::time::Instant;

use tracing::trace;

use crate::controllers::viewer::data::frame_data::FrameData;
use crate::controllers::viewer::ports::frame_sink::FrameSink;
use crate::core::actions::render_frame::{RenderFrameError, render_frame};
use crate::core::data::resolution::Resolution;
use crate::core::view::controller::ViewStateController;
use crate::core::view::input_event::InputEvent;
use crate::core::view::view_state::ViewState;

/// Drives the input → view → frame loop on the control thread.
///
/// Events are applied between frames only; [`render_frame`](Self::render_frame)
/// snapshots the view once up front so a frame never sees a half-applied update.
#[derive(Debug)]
pub struct ViewerController {
    view: ViewStateController,
    resolution: Resolution,
    frames_rendered: u64,
}

impl ViewerController {
    #[must_use]
    pub fn new(initial_view: ViewState, resolution: Resolution) -> Self {
        Self {
            view: ViewStateController::new(initial_view),
            resolution,
            frames_rendered: 0,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewStateController {
        &self.view
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Applies one input event. Returns `true` when a new frame is needed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.view.handle(event)
    }

    pub fn render_frame<S: FrameSink>(&mut self, sink: &mut S) -> Result<(), RenderFrameError> {
        let params = self.view.snapshot(self.resolution)?;

        let start = Instant::now();
        let pixel_buffer = render_frame(&params)?;
        let render_duration = start.elapsed();

        self.frames_rendered += 1;
        trace!(
            sequence = self.frames_rendered,
            zoom = params.zoom(),
            render_ms = render_duration.as_secs_f64() * 1000.0,
            "frame rendered"
        );

        sink.present(FrameData {
            sequence: self.frames_rendered,
            params,
            pixel_buffer,
            render_duration,
        });

        Ok(())
    }
}
