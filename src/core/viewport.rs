//! Pixel viewport that display coordinates are measured in

use crate::core::types::Vec2;

/// Rectangle of the render target a camera draws into.
///
/// Display coordinates have their origin at the bottom-left corner with y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport anchored at the display origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Map a display point to normalized device coordinates in [-1, 1].
    ///
    /// Returns `None` for a zero-sized viewport.
    pub fn display_to_ndc(&self, x: f32, y: f32) -> Option<Vec2> {
        if !self.is_valid() {
            return None;
        }
        Some(Vec2::new(
            2.0 * (x - self.x) / self.width - 1.0,
            2.0 * (y - self.y) / self.height - 1.0,
        ))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}
