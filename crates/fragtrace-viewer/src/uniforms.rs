//! Uniform interface to the externally supplied shader.
//!
//! The four names below are the host's wire protocol to the GPU-resident
//! program; the shader pair must declare them with these shapes.

use glow::HasContext;

use fragtrace_engine::shader::ShaderProgram;

use crate::camera::CameraState;

/// vec2, drawable size in pixels.
pub const RESOLUTION: &str = "uResolution";
/// float, seconds since start.
pub const TIME: &str = "uTime";
/// vec3.
pub const CAMERA_POS: &str = "uCameraPos";
/// vec3.
pub const CAMERA_TARGET: &str = "uCameraTarget";

/// Uniform locations, resolved once after the program links.
///
/// A name the linker optimized out resolves to `None`; uploading through it
/// is a no-op.
pub struct Uniforms {
    resolution: Option<glow::UniformLocation>,
    time: Option<glow::UniformLocation>,
    camera_pos: Option<glow::UniformLocation>,
    camera_target: Option<glow::UniformLocation>,
}

impl Uniforms {
    pub fn resolve(gl: &glow::Context, program: &ShaderProgram) -> Self {
        Self {
            resolution: program.uniform_location(gl, RESOLUTION),
            time: program.uniform_location(gl, TIME),
            camera_pos: program.uniform_location(gl, CAMERA_POS),
            camera_target: program.uniform_location(gl, CAMERA_TARGET),
        }
    }

    /// Pushes the per-frame values. The program must be bound.
    pub fn upload(
        &self,
        gl: &glow::Context,
        width: u32,
        height: u32,
        elapsed: f32,
        camera: &CameraState,
    ) {
        unsafe {
            gl.uniform_2_f32(self.resolution.as_ref(), width as f32, height as f32);
            gl.uniform_1_f32(self.time.as_ref(), elapsed);
            gl.uniform_3_f32(
                self.camera_pos.as_ref(),
                camera.position[0],
                camera.position[1],
                camera.position[2],
            );
            gl.uniform_3_f32(
                self.camera_target.as_ref(),
                camera.target[0],
                camera.target[1],
                camera.target[2],
            );
        }
    }
}
