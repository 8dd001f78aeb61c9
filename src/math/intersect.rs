//! Box/frustum intersection with a near-plane ranking key
//!
//! Three tiers, cheapest first: a single plane with all 8 box corners on its
//! outer side rejects; a single corner inside all 6 planes accepts; anything
//! left is settled by clipping the box faces against the frustum.

use super::aabb::Aabb;
use super::clip::clip_face;
use super::frustum::{Frustum, PlaneId};

/// Which test settled a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntersectionPath {
    /// `min > max` on some axis; an input error, not a geometric result.
    Degenerate,
    /// All corners outside one plane.
    TrivialReject,
    /// One corner inside every plane.
    TrivialAccept,
    /// A face survived clipping against all planes.
    Clipped,
    /// No face crossed the frustum, but the frustum sits inside the box.
    FrustumEnclosed,
    /// No face survived clipping.
    ClippedAway,
}

/// Outcome of testing one candidate box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxHit {
    pub hits: bool,
    /// Ordering key among hits, larger = closer to the viewer.
    ///
    /// This is the negated deepest near-plane penetration of the box corners,
    /// not a metric distance. Misses carry [`BoxHit::MISS_DISTANCE`].
    pub near_distance: f32,
    pub path: IntersectionPath,
}

impl BoxHit {
    pub const MISS_DISTANCE: f32 = -1.0;

    fn hit(path: IntersectionPath, penetration: f32) -> Self {
        Self { hits: true, near_distance: -penetration, path }
    }

    fn miss(path: IntersectionPath) -> Self {
        Self { hits: false, near_distance: Self::MISS_DISTANCE, path }
    }

    /// The box was rejected as malformed input rather than missed.
    pub fn is_degenerate(&self) -> bool {
        self.path == IntersectionPath::Degenerate
    }
}

impl Frustum {
    /// Test whether `aabb` at least partially overlaps the frustum.
    ///
    /// Never fails: degenerate boxes come back as a miss tagged
    /// [`IntersectionPath::Degenerate`].
    pub fn intersect_box(&self, aabb: &Aabb) -> BoxHit {
        if aabb.is_degenerate() {
            return BoxHit::miss(IntersectionPath::Degenerate);
        }

        let verts = aabb.corners();
        let mut inside_all = [true; 8];
        let mut penetration = 0.0_f32;

        for (plane_index, plane) in self.planes().iter().enumerate() {
            let is_near = plane_index == PlaneId::Near as usize;
            let mut outside = 0;
            for (i, v) in verts.iter().enumerate() {
                let f = plane.evaluate(*v);
                if f >= 0.0 {
                    outside += 1;
                    inside_all[i] = false;
                } else if is_near {
                    penetration = penetration.max(-f);
                }
            }
            if outside == verts.len() {
                return BoxHit::miss(IntersectionPath::TrivialReject);
            }
        }

        if inside_all.iter().any(|&inside| inside) {
            return BoxHit::hit(IntersectionPath::TrivialAccept, penetration);
        }

        for face in aabb.faces() {
            if !clip_face(&face, self.planes()).is_empty() {
                return BoxHit::hit(IntersectionPath::Clipped, penetration);
            }
        }

        if aabb.contains_point(self.corners().centroid()) {
            return BoxHit::hit(IntersectionPath::FrustumEnclosed, penetration);
        }

        BoxHit::miss(IntersectionPath::ClippedAway)
    }
}
