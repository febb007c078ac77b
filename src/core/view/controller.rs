use tracing::{debug, trace};

use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::FrameParams;
use crate::core::view::drag_state::DragState;
use crate::core::view::input_event::{CursorPosition, InputEvent, ScrollDirection};
use crate::core::view::view_state::{ViewState, ZOOM_FACTOR};

/// Applies input events to the view. Knows nothing about rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewStateController {
    view: ViewState,
    drag: DragState,
}

impl ViewStateController {
    #[must_use]
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            drag: DragState::default(),
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn snapshot(&self, resolution: Resolution) -> Result<FrameParams, MandelbrotError> {
        self.view.snapshot(resolution)
    }

    /// Dispatches one event. Returns `true` when the view (not just the drag) changed.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Scroll(direction) => {
                self.on_scroll(direction);
                true
            }
            InputEvent::ButtonPress(cursor) => {
                self.on_button_press(cursor);
                false
            }
            InputEvent::ButtonRelease => {
                self.on_button_release();
                false
            }
            InputEvent::CursorMove(cursor) => self.on_cursor_move(cursor),
        }
    }

    pub fn on_scroll(&mut self, direction: ScrollDirection) {
        match direction {
            ScrollDirection::Forward => self.view.scale_zoom(ZOOM_FACTOR),
            ScrollDirection::Backward => self.view.divide_zoom(ZOOM_FACTOR),
        }

        // Starting positive and only ever scaled by a positive factor; f64 division
        // bottoms out at the smallest subnormal rather than reaching zero.
        debug_assert!(self.view.zoom() > 0.0, "zoom must stay positive");
        debug!(zoom = self.view.zoom(), ?direction, "zoom changed");
    }

    pub fn on_button_press(&mut self, cursor: CursorPosition) {
        self.drag.begin(cursor);
        debug!(x = cursor.x, y = cursor.y, "drag started");
    }

    pub fn on_button_release(&mut self) {
        if self.drag.is_active() {
            debug!("drag ended");
        }
        self.drag.end();
    }

    /// Pans by the cursor travel while dragging. Screen `y` runs down while the
    /// imaginary axis runs up, hence the opposite signs.
    pub fn on_cursor_move(&mut self, cursor: CursorPosition) -> bool {
        let Some((dx, dy)) = self.drag.advance(cursor) else {
            return false;
        };

        let zoom = self.view.zoom();
        self.view.translate(-dx / zoom, dy / zoom);

        let offset = self.view.offset();
        trace!(dx, dy, offset_x = offset.x, offset_y = offset.y, "panned");
        true
    }
}
