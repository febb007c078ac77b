use crate::core::view::input_event::CursorPosition;

/// Transient left-button drag tracking.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct DragState {
    active: bool,
    last_cursor: CursorPosition,
}

impl DragState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn last_cursor(&self) -> CursorPosition {
        self.last_cursor
    }

    pub fn begin(&mut self, cursor: CursorPosition) {
        self.active = true;
        self.last_cursor = cursor;
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    /// Moves the tracked cursor and returns the `(dx, dy)` travelled since the last
    /// position. Returns `None` without touching any state when no drag is active.
    pub fn advance(&mut self, cursor: CursorPosition) -> Option<(f64, f64)> {
        if !self.active {
            return None;
        }

        let dx = cursor.x - self.last_cursor.x;
        let dy = cursor.y - self.last_cursor.y;
        self.last_cursor = cursor;

        Some((dx, dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(x: f64, y: f64) -> CursorPosition {
        CursorPosition { x, y }
    }

    #[test]
    fn starts_inactive() {
        assert!(!DragState::default().is_active());
    }

    #[test]
    fn advance_reports_delta_and_updates_cursor() {
        let mut drag = DragState::default();
        drag.begin(cursor(10.0, 20.0));

        assert_eq!(drag.advance(cursor(15.0, 18.0)), Some((5.0, -2.0)));
        assert_eq!(drag.last_cursor(), cursor(15.0, 18.0));
        assert_eq!(drag.advance(cursor(15.0, 25.0)), Some((0.0, 7.0)));
    }

    #[test]
    fn advance_while_inactive_is_a_no_op() {
        let mut drag = DragState::default();
        drag.begin(cursor(1.0, 1.0));
        drag.end();
        let before = drag;

        assert_eq!(drag.advance(cursor(50.0, 50.0)), None);
        assert_eq!(drag, before);
    }

    #[test]
    fn begin_resets_last_cursor() {
        let mut drag = DragState::default();
        drag.begin(cursor(1.0, 1.0));
        drag.end();
        drag.begin(cursor(100.0, 200.0));

        assert_eq!(drag.advance(cursor(101.0, 200.0)), Some((1.0, 0.0)));
    }
}
