//! Pick frustum swept by a display rectangle

use crate::core::error::Error;
use crate::core::types::{Result, Vec3};
use crate::core::view::Unproject;

/// A plane given by a unit outward normal and a point on it.
///
/// `evaluate(p) < 0` for points strictly inside the frustum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPlane {
    pub normal: Vec3,
    pub point: Vec3,
}

impl ClipPlane {
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        Self { normal, point }
    }

    /// Plane through `a`, `b`, `c` with normal `normalize((b - a) x (c - a))`.
    ///
    /// Returns `None` when the three points are collinear.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        Some(Self { normal, point: a })
    }

    /// Signed plane function `dot(normal, p - point)` (positive = outside)
    #[inline]
    pub fn evaluate(&self, p: Vec3) -> f32 {
        self.normal.dot(p - self.point)
    }

    /// Parameter `t` where segment `v0 + t * (v1 - v0)` meets the plane.
    ///
    /// `None` when the segment is parallel to the plane or has zero length.
    pub fn segment_parameter(&self, v0: Vec3, v1: Vec3) -> Option<f32> {
        let denom = self.normal.dot(v1 - v0);
        if denom.abs() <= f32::EPSILON * self.normal.length() * (v1 - v0).length() {
            return None;
        }
        Some(self.normal.dot(self.point - v0) / denom)
    }
}

/// Frustum faces, in plane storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaneId {
    Near = 0,
    Far = 1,
    Left = 2,
    Right = 3,
    Bottom = 4,
    Top = 5,
}

impl PlaneId {
    pub const ALL: [PlaneId; 6] = [
        PlaneId::Near,
        PlaneId::Far,
        PlaneId::Left,
        PlaneId::Right,
        PlaneId::Bottom,
        PlaneId::Top,
    ];

    /// Corner triple `(a, b, c)` whose winding yields the outward normal.
    ///
    /// Valid for corners indexed by [`ClipCorners::index`] with a y-up display
    /// and a right-handed world.
    pub const fn corner_triple(self) -> [usize; 3] {
        match self {
            PlaneId::Near => [6, 2, 0],
            PlaneId::Far => [1, 3, 7],
            PlaneId::Left => [0, 2, 3],
            PlaneId::Right => [7, 6, 4],
            PlaneId::Bottom => [5, 4, 0],
            PlaneId::Top => [2, 6, 7],
        }
    }
}

/// The 8 world-space corners of the pick frustum.
///
/// Stored at `index = x*4 + y*2 + z` with x: 0 left / 1 right,
/// y: 0 bottom / 1 top, z: 0 near / 1 far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipCorners(pub [Vec3; 8]);

impl ClipCorners {
    #[inline]
    pub const fn index(right: bool, top: bool, far: bool) -> usize {
        (right as usize) * 4 + (top as usize) * 2 + far as usize
    }

    pub fn get(&self, right: bool, top: bool, far: bool) -> Vec3 {
        self.0[Self::index(right, top, far)]
    }

    pub fn as_array(&self) -> &[Vec3; 8] {
        &self.0
    }

    /// Average of the 8 corners; strictly inside any non-degenerate frustum
    pub fn centroid(&self) -> Vec3 {
        self.0.iter().copied().sum::<Vec3>() / 8.0
    }
}

/// Six outward-facing clip planes plus the corners they were built from.
///
/// Immutable once built; rebuild per pick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frustum {
    corners: ClipCorners,
    planes: [ClipPlane; 6],
}

impl Frustum {
    /// Derive the 6 planes from already unprojected corners.
    pub fn from_corners(corners: ClipCorners) -> Result<Self> {
        let mut planes = [ClipPlane::new(Vec3::ZERO, Vec3::ZERO); 6];
        for id in PlaneId::ALL {
            let [a, b, c] = id.corner_triple().map(|i| corners.0[i]);
            planes[id as usize] = ClipPlane::from_points(a, b, c).ok_or_else(|| {
                Error::frustum(format!("{id:?} plane is degenerate: {a}, {b}, {c}"))
            })?;
        }
        Ok(Self { corners, planes })
    }

    /// Build the frustum swept by display rectangle `(x0, y0)-(x1, y1)`.
    ///
    /// Corners may be given in any order. Each rectangle corner is unprojected
    /// at depth 0 (near) and 1 (far).
    pub fn from_display_rect<U: Unproject + ?Sized>(
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        view: &U,
    ) -> Result<Self> {
        let xs = [x0.min(x1), x0.max(x1)];
        let ys = [y0.min(y1), y0.max(y1)];

        let mut points = [Vec3::ZERO; 8];
        for (xi, &x) in xs.iter().enumerate() {
            for (yi, &y) in ys.iter().enumerate() {
                for (zi, depth) in [0.0, 1.0].into_iter().enumerate() {
                    points[xi * 4 + yi * 2 + zi] = view.unproject_display_point(x, y, depth)?;
                }
            }
        }

        let frustum = Self::from_corners(ClipCorners(points))?;
        log::debug!(
            "Built pick frustum for ({}, {})-({}, {}), near normal {}",
            xs[0], ys[0], xs[1], ys[1], frustum.plane(PlaneId::Near).normal
        );
        Ok(frustum)
    }

    pub fn corners(&self) -> &ClipCorners {
        &self.corners
    }

    pub fn planes(&self) -> &[ClipPlane; 6] {
        &self.planes
    }

    pub fn plane(&self, id: PlaneId) -> &ClipPlane {
        &self.planes[id as usize]
    }

    /// Check if point is strictly inside all 6 planes
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.evaluate(point) < 0.0)
    }
}
