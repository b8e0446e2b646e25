//! Terminal front end.

pub mod app;
pub mod celebration;
pub mod circle;
pub mod display;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
