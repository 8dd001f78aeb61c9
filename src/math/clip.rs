//! Sutherland-Hodgman clipping of box faces against the pick frustum
//!
//! Polygons live in a fixed-capacity inline buffer: a convex quad clipped by
//! six planes gains at most one vertex per plane, so the hot path never
//! touches the heap.

use smallvec::SmallVec;

use crate::core::types::Vec3;
use super::frustum::ClipPlane;

/// Inline capacity of a clip polygon.
pub const CLIP_CAPACITY: usize = 20;

/// Polygon produced while clipping one face.
pub type ClipPolygon = SmallVec<[Vec3; CLIP_CAPACITY]>;

/// Clip segment `v0 -> v1` against one plane, appending survivors to `out`.
///
/// The crossing point is emitted only for `0 < t < 1`; an endpoint lying
/// exactly on the plane adds no extra point. `v1` is emitted if it is strictly
/// inside (`f < 0`).
pub fn clip_edge(v0: Vec3, v1: Vec3, plane: &ClipPlane, out: &mut ClipPolygon) {
    if let Some(t) = plane.segment_parameter(v0, v1) {
        if t > 0.0 && t < 1.0 {
            out.push(v0 + (v1 - v0) * t);
        }
    }
    if plane.evaluate(v1) < 0.0 {
        out.push(v1);
    }
}

/// One Sutherland-Hodgman step: clip a closed polygon against one plane.
pub fn clip_polygon(polygon: &[Vec3], plane: &ClipPlane) -> ClipPolygon {
    let mut out = ClipPolygon::new();
    let n = polygon.len();
    for i in 0..n {
        clip_edge(polygon[i], polygon[(i + 1) % n], plane, &mut out);
    }
    out
}

/// Clip a face through every plane in order.
///
/// Stops as soon as a plane leaves nothing; the returned polygon is empty
/// when the face misses the frustum.
pub fn clip_face(face: &[Vec3], planes: &[ClipPlane]) -> ClipPolygon {
    let mut polygon: ClipPolygon = face.iter().copied().collect();
    for plane in planes {
        polygon = clip_polygon(&polygon, plane);
        if polygon.is_empty() {
            break;
        }
    }
    polygon
}
