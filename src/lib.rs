//! Mediaclean - media library cleaner
//!
//! This library crate exposes config loading and per-file processing for the
//! `mediaclean` binary and for integration testing.

pub mod config;
pub mod process;

pub use config::{load_config, load_config_or_default, validate_config};
pub use process::{process_file, CapturedOutputs, FileReport, Outcome, ProcessOptions};
