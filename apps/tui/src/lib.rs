// Export our modules for use in binaries and tests
pub mod atlas;
pub mod config;
pub mod db;
pub mod domain;
pub mod filter;

pub use domain::{Alternative, Theme};
pub use filter::ActiveFilter;
