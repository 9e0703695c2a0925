//! Shader compilation and program linking.
//!
//! This module is responsible for:
//! - compiling vertex/fragment stages and capturing driver diagnostics
//! - linking the two stages into a program object
//! - releasing every stage object exactly once, on every path

mod program;

pub use program::{ShaderError, ShaderProgram, ShaderStage, StageSource};
