//! GL context + surface management.
//!
//! This module is responsible for:
//! - creating the GL context and window surface from a glutin config
//! - loading the GL function pointers into a `glow::Context`
//! - resizing the surface and matching the viewport to the drawable size
//! - presenting frames via buffer swap

mod gl;

pub use gl::{GlDevice, GlInit};
