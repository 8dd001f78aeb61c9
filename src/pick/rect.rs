//! Display-space pick rectangle

/// Rubber-band rectangle in display pixels, always stored with
/// `x0 <= x1` and `y0 <= y1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickRect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl PickRect {
    /// Rectangle spanned by two drag corners given in any order.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Zero-size rectangle at a click position.
    pub fn from_point(x: f32, y: f32) -> Self {
        Self::new(x, y, x, y)
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Grow each side shorter than `min_size` about its center.
    pub fn with_min_size(self, min_size: f32) -> Self {
        let grow = |lo: f32, hi: f32| {
            if hi - lo >= min_size {
                (lo, hi)
            } else {
                let mid = (lo + hi) * 0.5;
                (mid - min_size * 0.5, mid + min_size * 0.5)
            }
        };
        let (x0, x1) = grow(self.x0, self.x1);
        let (y0, y1) = grow(self.y0, self.y1);
        Self { x0, y0, x1, y1 }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_drag_direction() {
        let rect = PickRect::new(200.0, 50.0, 100.0, 150.0);
        assert_eq!(rect, PickRect { x0: 100.0, y0: 50.0, x1: 200.0, y1: 150.0 });
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 100.0);
    }

    #[test]
    fn test_click_grows_to_min_size() {
        let rect = PickRect::from_point(10.0, 20.0).with_min_size(1.0);
        assert_eq!(rect, PickRect { x0: 9.5, y0: 19.5, x1: 10.5, y1: 20.5 });
        assert!(rect.contains(10.0, 20.0));
    }

    #[test]
    fn test_large_rect_unchanged() {
        let rect = PickRect::new(0.0, 0.0, 50.0, 0.25).with_min_size(1.0);
        assert_eq!(rect.x0, 0.0);
        assert_eq!(rect.x1, 50.0);
        assert_eq!(rect.height(), 1.0);
    }
}
