//! Input adapters for the viewer.
//!
//! Adapters receive platform input and translate it into
//! [`InputEvent`](crate::core::view::input_event::InputEvent)s.

#[cfg(feature = "gui")]
pub mod gui;
