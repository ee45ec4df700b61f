//! Boundary errors. The matrix code itself never fails; these are raised
//! only when settings or window sizes are checked before reaching it.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoreError {
    #[error("clip planes must satisfy 0 < near < far (near={near}, far={far})")]
    InvalidClipPlanes { near: f32, far: f32 },
    #[error("vertical field of view must lie in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f32),
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}

pub type CoreResult<T> = Result<T, CoreError>;
