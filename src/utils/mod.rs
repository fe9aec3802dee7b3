//! Shared application plumbing.
//!
//! - [`app_data`] - user configuration (`config.json` in the app config dir)
//! - [`logging`] - `tracing` subscriber setup

pub mod app_data;
pub mod logging;

pub use app_data::*;
