//! CLI library components for the mime type settings exporter.

pub mod cli;
pub mod config;
pub mod logging;
