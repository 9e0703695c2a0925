//! The viewer application: one program, one triangle, four uniforms.

use anyhow::{Context as _, Result};

use fragtrace_engine::core::{App, AppControl, FrameCtx};
use fragtrace_engine::geometry::FullscreenTriangle;
use fragtrace_engine::shader::{ShaderProgram, StageSource};

use crate::camera::CameraState;
use crate::uniforms::Uniforms;

/// GPU resources owned for the whole process lifetime.
struct Scene {
    program: ShaderProgram,
    uniforms: Uniforms,
    triangle: FullscreenTriangle,
}

pub struct RaytracerApp {
    vertex: StageSource,
    fragment: StageSource,
    camera: CameraState,
    scene: Option<Scene>,
}

impl RaytracerApp {
    pub fn new(vertex: StageSource, fragment: StageSource) -> Self {
        Self {
            vertex,
            fragment,
            camera: CameraState::default(),
            scene: None,
        }
    }
}

impl App for RaytracerApp {
    fn on_ready(&mut self, gl: &glow::Context) -> Result<()> {
        let program = ShaderProgram::build(gl, &self.vertex, &self.fragment)
            .context("failed to create shader program")?;
        let uniforms = Uniforms::resolve(gl, &program);

        let triangle = match FullscreenTriangle::new(gl) {
            Ok(triangle) => triangle,
            Err(e) => {
                program.destroy(gl);
                return Err(e.context("failed to create fullscreen geometry"));
            }
        };

        self.scene = Some(Scene {
            program,
            uniforms,
            triangle,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let Some(scene) = &self.scene else {
            return AppControl::Exit;
        };

        scene.program.bind(ctx.gl);
        scene.uniforms.upload(
            ctx.gl,
            ctx.size.width,
            ctx.size.height,
            ctx.time.elapsed,
            &self.camera,
        );
        scene.triangle.draw(ctx.gl);

        AppControl::Continue
    }

    fn on_exit(&mut self, gl: &glow::Context) {
        if let Some(scene) = self.scene.take() {
            scene.program.destroy(gl);
            scene.triangle.destroy(gl);
        }
    }
}
