use glam::Mat4;

use super::{Camera, Viewport};

/// Plain-old-data camera block for the host's rendering backend.
///
/// This is the only GPU-facing type in the crate: a byte-castable snapshot
/// of the active camera. Buffer creation and uploads are the host's job.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix, column-major.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position (origin for planar cameras).
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl CameraUniform {
    /// A uniform with an identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
        }
    }

    /// Refresh all fields from the given camera at the given viewport.
    pub fn update(&mut self, camera: &Camera, viewport: Viewport) {
        self.view_proj = camera.project(viewport).to_cols_array_2d();
        self.position = camera.eye_position().to_array();
        self.aspect = viewport.aspect();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}
