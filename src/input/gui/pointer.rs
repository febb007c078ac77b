use winit::dpi::{LogicalPosition, PhysicalPosition};
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use crate::core::view::input_event::{CursorPosition, InputEvent, ScrollDirection};

/// Translates winit pointer events into [`InputEvent`]s.
///
/// winit reports button presses without a position, so the last cursor position is
/// tracked here and attached to the press. Positions are converted to logical pixels
/// so drag distances line up with the image grid on HiDPI displays.
#[derive(Debug, Clone, Copy)]
pub struct PointerTranslator {
    cursor: CursorPosition,
    scale_factor: f64,
}

impl PointerTranslator {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            cursor: CursorPosition::default(),
            scale_factor,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    pub fn mouse_wheel(&self, delta: MouseScrollDelta) -> Option<InputEvent> {
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        ScrollDirection::from_delta(delta_y).map(InputEvent::Scroll)
    }

    /// Only the left button drags.
    pub fn mouse_input(&self, state: ElementState, button: MouseButton) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => Some(InputEvent::ButtonPress(self.cursor)),
            ElementState::Released => Some(InputEvent::ButtonRelease),
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> InputEvent {
        let logical: LogicalPosition<f64> = position.to_logical(self.scale_factor);
        self.cursor = CursorPosition {
            x: logical.x,
            y: logical.y,
        };

        InputEvent::CursorMove(self.cursor)
    }
}
