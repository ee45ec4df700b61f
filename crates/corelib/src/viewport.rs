use crate::error::{CoreError, CoreResult};

/// Current drawable size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Unchecked constructor. A zero height yields a non-finite aspect ratio.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Rejects empty sizes (minimised windows report 0x0).
    pub fn checked(width: u32, height: u32) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::EmptyViewport { width, height });
        }
        Ok(Self::new(width, height))
    }

    /// Clamps both sides to at least one pixel.
    #[inline]
    pub fn clamped(width: u32, height: u32) -> Self {
        Self::new(width.max(1), height.max(1))
    }

    /// width / height, computed fresh on every call.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 800)
    }
}
