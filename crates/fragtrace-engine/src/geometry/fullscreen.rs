use anyhow::{Result, anyhow};
use bytemuck::{Pod, Zeroable};
use glow::HasContext;

/// One vertex of the fullscreen triangle: clip-space position only.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

/// An oversized triangle whose clipped extent covers the whole viewport, so
/// the fragment shader runs exactly once per pixel without a quad's extra
/// vertices.
pub const VERTICES: [Vertex; 3] = [
    Vertex { position: [-1.0, -1.0] },
    Vertex { position: [3.0, -1.0] },
    Vertex { position: [-1.0, 3.0] },
];

/// GPU-resident geometry for the fullscreen pass.
pub struct FullscreenTriangle {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
}

impl FullscreenTriangle {
    /// Uploads the vertex payload and configures attribute 0 as a tightly
    /// packed vec2.
    pub fn new(gl: &glow::Context) -> Result<Self> {
        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(|e| anyhow!("failed to create vertex array: {e}"))?;
            gl.bind_vertex_array(Some(vao));

            let vbo = gl
                .create_buffer()
                .map_err(|e| anyhow!("failed to create vertex buffer: {e}"))?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&VERTICES),
                glow::STATIC_DRAW,
            );

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(
                0,
                2,
                glow::FLOAT,
                false,
                size_of::<Vertex>() as i32,
                0,
            );
            gl.bind_vertex_array(None);

            Ok(Self { vao, vbo })
        }
    }

    /// Issues the draw call: 3 vertices as a triangle list.
    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::TRIANGLES, 0, 3);
            gl.bind_vertex_array(None);
        }
    }

    /// Releases the buffer and the vertex array.
    pub fn destroy(self, gl: &glow::Context) {
        unsafe {
            gl.delete_buffer(self.vbo);
            gl.delete_vertex_array(self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(p: [f32; 2]) -> bool {
        // Barycentric sign test against the three triangle edges.
        let [a, b, c] = [VERTICES[0].position, VERTICES[1].position, VERTICES[2].position];
        let edge = |p: [f32; 2], q: [f32; 2], r: [f32; 2]| {
            (q[0] - p[0]) * (r[1] - p[1]) - (q[1] - p[1]) * (r[0] - p[0])
        };
        let (d0, d1, d2) = (edge(a, b, p), edge(b, c, p), edge(c, a, p));
        d0 >= 0.0 && d1 >= 0.0 && d2 >= 0.0
    }

    #[test]
    fn triangle_covers_clip_space() {
        for corner in [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]] {
            assert!(contains(corner), "corner {corner:?} not covered");
        }
    }

    #[test]
    fn payload_is_tightly_packed() {
        assert_eq!(size_of::<Vertex>(), 2 * size_of::<f32>());
        let bytes: &[u8] = bytemuck::cast_slice(&VERTICES);
        assert_eq!(bytes.len(), 6 * size_of::<f32>());
    }
}
