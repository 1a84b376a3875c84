// The binary entry point is main.rs; the library target carries the puzzle
// and UI modules so integration tests can drive them headlessly.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod puzzle;
pub mod ui;
