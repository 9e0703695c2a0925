//! Fragtrace engine crate.
//!
//! This crate owns the platform + GL runtime pieces used by the viewer binary.

pub mod device;
pub mod window;
pub mod shader;
pub mod geometry;
pub mod time;
pub mod core;

pub mod logging;
