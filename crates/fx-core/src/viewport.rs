use crate::error::{FxError, Result};
use glam::Vec2;

/// Size of a render surface in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero (or not a number), e.g. before layout.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width.is_nan() || self.height.is_nan() || self.width <= 0.0 || self.height <= 0.0
    }

    pub fn validate(self) -> Result<Self> {
        if self.is_degenerate() {
            return Err(FxError::DegenerateViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[inline]
    pub fn aspect(&self) -> Option<f32> {
        (!self.is_degenerate()).then(|| self.width / self.height)
    }

    /// Map a point in surface pixels (origin top-left) to NDC, y up.
    #[inline]
    pub fn to_ndc(&self, x: f32, y: f32) -> Option<Vec2> {
        if self.is_degenerate() {
            return None;
        }
        Some(Vec2::new(
            (x / self.width) * 2.0 - 1.0,
            -(y / self.height) * 2.0 + 1.0,
        ))
    }
}
