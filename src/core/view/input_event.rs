/// Cursor position in logical window pixels, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Wheel moved up / away from the user. Zooms in.
    Forward,
    /// Wheel moved down / towards the user. Zooms out.
    Backward,
}

impl ScrollDirection {
    /// Classifies a vertical scroll delta. A zero (or NaN) delta carries no direction.
    #[must_use]
    pub fn from_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::Forward)
        } else if delta_y < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

/// Platform-independent input consumed by the view-state controller.
///
/// Windowing adapters translate their native events into this type and feed
/// them to [`ViewStateController::handle`](super::controller::ViewStateController::handle).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Scroll(ScrollDirection),
    ButtonPress(CursorPosition),
    ButtonRelease,
    CursorMove(CursorPosition),
}
