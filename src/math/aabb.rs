//! Axis-aligned bounding box

use crate::core::types::{Mat4, Vec3};

/// Axis-aligned bounding box defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

/// Corner indices of the six box faces, each an ordered quad.
///
/// Corner index bits follow `x*4 + y*2 + z` (0 = min side, 1 = max side),
/// so consecutive entries of a face differ in exactly one axis.
pub const BOX_FACES: [[usize; 4]; 6] = [
    [0, 1, 3, 2], // -x
    [4, 6, 7, 5], // +x
    [0, 4, 5, 1], // -y
    [2, 3, 7, 6], // +y
    [0, 2, 6, 4], // -z
    [1, 5, 7, 3], // +z
];

impl Aabb {
    /// Create AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create AABB from `[xmin, xmax, ymin, ymax, zmin, zmax]`.
    ///
    /// No ordering is enforced; check [`Aabb::is_degenerate`] before use.
    pub fn from_bounds(bounds: [f32; 6]) -> Self {
        Self {
            min: Vec3::new(bounds[0], bounds[2], bounds[4]),
            max: Vec3::new(bounds[1], bounds[3], bounds[5]),
        }
    }

    /// Back to `[xmin, xmax, ymin, ymax, zmin, zmax]`
    pub fn to_bounds(&self) -> [f32; 6] {
        [self.min.x, self.max.x, self.min.y, self.max.y, self.min.z, self.max.z]
    }

    /// Create AABB from center and half-extents
    pub fn from_center_half_extent(center: Vec3, half_extent: Vec3) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// True if `min > max` on any axis, or any bound is NaN
    pub fn is_degenerate(&self) -> bool {
        !(self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z)
    }

    /// Get center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get size (max - min)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check if point is inside AABB
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Expand AABB to include point
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Return merged AABB containing both
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// The 8 corner vertices, index = x*4 + y*2 + z (bit set = max side)
    pub fn corners(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 4 != 0 { self.max.x } else { self.min.x },
                if i & 2 != 0 { self.max.y } else { self.min.y },
                if i & 1 != 0 { self.max.z } else { self.min.z },
            )
        })
    }

    /// The 6 faces as ordered quads of world-space vertices
    pub fn faces(&self) -> [[Vec3; 4]; 6] {
        let corners = self.corners();
        BOX_FACES.map(|face| face.map(|i| corners[i]))
    }

    /// Box around all 8 corners after transforming them by `matrix`
    pub fn transformed(&self, matrix: &Mat4) -> Aabb {
        let corners = self.corners();
        let first = matrix.transform_point3(corners[0]);
        let mut out = Aabb::new(first, first);
        for corner in &corners[1..] {
            out.expand(matrix.transform_point3(*corner));
        }
        out
    }
}
