//! Camera state for the raytraced scene.

/// Position/target pair handed to the fragment shader each frame.
///
/// Held as plain mutable app state: constant today, but the upload path
/// re-pushes it every frame so per-frame updates need no further plumbing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraState {
    pub position: [f32; 3],
    pub target: [f32; 3],
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: [0.0, 0.5, 2.0],
            target: [0.0, 0.0, -1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_looks_down_negative_z() {
        let camera = CameraState::default();
        assert_eq!(camera.position, [0.0, 0.5, 2.0]);
        assert_eq!(camera.target, [0.0, 0.0, -1.0]);
        assert!(camera.target[2] < camera.position[2]);
    }
}
