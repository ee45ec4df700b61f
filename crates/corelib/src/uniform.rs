//! Uniform block handed to the shader each frame.
//!
//! `mvp` is stored column-major: four columns of four floats, the same
//! layout as `Mat4::to_cols_array_2d`. It matches a GLSL `mat4` or a WGSL
//! `mat4x4<f32>` declared without `row_major`, uploaded with
//! `transpose = false`. `time` is the elapsed seconds.

use bytemuck::{Pod, Zeroable};

use crate::Mat4;

/// std140 / WGSL uniform compatible (80 bytes, 16-byte aligned size).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub mvp: [[f32; 4]; 4],
    pub time: f32,
    pub _pad: [f32; 3],
}

impl FrameUniforms {
    pub fn new(mvp: Mat4, time: f32) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            time,
            _pad: [0.0; 3],
        }
    }

    pub fn mvp(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.mvp)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, 0.0)
    }
}
