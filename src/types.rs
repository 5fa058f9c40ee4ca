use crate::traits::CameraController;

/// Camera uniform buffer data for GPU
///
/// Matrices are column-major, matching `mat4` in GLSL/WGSL.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

impl CameraUniform {
    pub fn from_camera<C: CameraController + ?Sized>(camera: &C) -> Self {
        Self {
            projection: camera.projection_matrix().to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
            position: camera.position().to_array(),
            _pad: 0.0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
