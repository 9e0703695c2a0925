//! Logging utilities.
//!
//! This module centralizes logger initialization. It sticks to the standard
//! `log` facade; every failure path in the workspace reports through it.

mod init;

pub use init::{LoggingConfig, init_logging};
