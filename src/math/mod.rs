//! Geometry for area picking: boxes, the pick frustum, and their intersection

pub mod aabb;
pub mod frustum;
pub mod clip;
pub mod intersect;

pub use aabb::Aabb;
pub use frustum::{ClipCorners, ClipPlane, Frustum, PlaneId};
pub use intersect::{BoxHit, IntersectionPath};
