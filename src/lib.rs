//! Inner Flame: a guided Tummo breathing timer for the terminal.

pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod plain;
pub mod session;
pub mod ui;
