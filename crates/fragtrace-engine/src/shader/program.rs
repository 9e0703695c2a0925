use std::fmt;

use glow::HasContext;

/// One shader compilation unit of the pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Shader source text plus the label used in diagnostics (usually the file
/// path it was loaded from).
#[derive(Debug, Clone)]
pub struct StageSource {
    pub label: String,
    pub text:  String,
}

/// Errors raised while building a program, carrying the driver's info log.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("failed to create {stage} shader object: {reason}")]
    CreateStage { stage: ShaderStage, reason: String },

    #[error("failed to compile {stage} shader `{label}`:\n{log}")]
    Compile {
        stage: ShaderStage,
        label: String,
        log:   String,
    },

    #[error("failed to create program object: {0}")]
    CreateProgram(String),

    #[error("failed to link program:\n{log}")]
    Link { log: String },
}

/// Owns a stage object from creation until it has been linked into a program
/// (or compilation failed). The object is released exactly once, when the
/// guard drops.
struct StageGuard<'gl> {
    gl:  &'gl glow::Context,
    raw: glow::Shader,
}

impl Drop for StageGuard<'_> {
    fn drop(&mut self) {
        unsafe { self.gl.delete_shader(self.raw) };
    }
}

fn compile_stage<'gl>(
    gl: &'gl glow::Context,
    stage: ShaderStage,
    source: &StageSource,
) -> Result<StageGuard<'gl>, ShaderError> {
    unsafe {
        let raw = gl
            .create_shader(stage.gl_type())
            .map_err(|reason| ShaderError::CreateStage { stage, reason })?;
        let guard = StageGuard { gl, raw };

        gl.shader_source(raw, &source.text);
        gl.compile_shader(raw);

        if !gl.get_shader_compile_status(raw) {
            return Err(ShaderError::Compile {
                stage,
                label: source.label.clone(),
                log: gl.get_shader_info_log(raw),
            });
        }

        Ok(guard)
    }
}

/// A linked vertex+fragment program.
///
/// Either fully linked and usable, or never constructed; there is no
/// partially-usable state.
pub struct ShaderProgram {
    raw: glow::Program,
}

impl ShaderProgram {
    /// Compiles both stages and links them into a program.
    ///
    /// The stage objects are detached once the link has run and released
    /// whether or not it succeeded; a failed link also releases the program
    /// object.
    pub fn build(
        gl: &glow::Context,
        vertex: &StageSource,
        fragment: &StageSource,
    ) -> Result<Self, ShaderError> {
        let vert = compile_stage(gl, ShaderStage::Vertex, vertex)?;
        let frag = compile_stage(gl, ShaderStage::Fragment, fragment)?;

        unsafe {
            let raw = gl.create_program().map_err(ShaderError::CreateProgram)?;

            gl.attach_shader(raw, vert.raw);
            gl.attach_shader(raw, frag.raw);
            gl.link_program(raw);

            let linked = gl.get_program_link_status(raw);

            // The stage objects are not needed once the link has run.
            gl.detach_shader(raw, vert.raw);
            gl.detach_shader(raw, frag.raw);

            if !linked {
                let log = gl.get_program_info_log(raw);
                gl.delete_program(raw);
                return Err(ShaderError::Link { log });
            }

            Ok(Self { raw })
        }
    }

    /// Makes this program the active one. Safe to call every frame.
    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.raw)) };
    }

    /// Resolves a uniform location by name.
    ///
    /// Names the linker optimized out (or never saw) resolve to `None`;
    /// pushing a value through `None` is a no-op rather than an error.
    pub fn uniform_location(&self, gl: &glow::Context, name: &str) -> Option<glow::UniformLocation> {
        unsafe { gl.get_uniform_location(self.raw, name) }
    }

    /// Releases the program object.
    pub fn destroy(self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.raw) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── stage mapping ─────────────────────────────────────────────────────

    #[test]
    fn stage_maps_to_gl_enums() {
        assert_eq!(ShaderStage::Vertex.gl_type(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_type(), glow::FRAGMENT_SHADER);
    }

    #[test]
    fn stage_display_names() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }

    // ── diagnostics ───────────────────────────────────────────────────────

    #[test]
    fn compile_error_names_stage_and_label() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            label: "shaders/raytrace.frag".to_string(),
            log: "0:12: 'vUv' : undeclared identifier".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("fragment"));
        assert!(text.contains("shaders/raytrace.frag"));
        assert!(text.contains("undeclared identifier"));
    }

    #[test]
    fn link_error_carries_driver_log() {
        let err = ShaderError::Link {
            log: "varying vColor not written by vertex shader".to_string(),
        };
        assert!(err.to_string().contains("not written by vertex shader"));
    }
}
