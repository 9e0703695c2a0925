//! Fixed geometry for the fullscreen pass.
//!
//! One oversized triangle, uploaded once at startup and never mutated.

mod fullscreen;

pub use fullscreen::{FullscreenTriangle, VERTICES, Vertex};
