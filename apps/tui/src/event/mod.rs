// Event module for euroalt
// Drives the draw/poll loop and the headless mode

mod loop_handler;

pub use loop_handler::{run, run_headless};
