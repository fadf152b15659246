// Configuration module for euroalt
// Env-driven settings with .env support

mod config;

pub use config::{debug_enabled, debug_log, get_data_file, init_app_config};
