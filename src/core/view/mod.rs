//! Interactive view state and the controller that mutates it from input events.

pub mod controller;
pub mod drag_state;
pub mod input_event;
pub mod view_state;
