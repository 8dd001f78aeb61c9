//! Areapick - rubber-band area picking for 3D viewers
//!
//! A display rectangle and a camera sweep a view frustum; every scene object
//! whose axis-aligned bounding box touches it is picked, ranked by how close
//! it sits to the viewer.

pub mod core;
pub mod math;
pub mod scene;
pub mod pick;

pub use crate::core::{Camera, Error, Unproject, View, Viewport};
pub use crate::math::{Aabb, BoxHit, Frustum, IntersectionPath};
pub use crate::pick::{AreaPickResult, AreaPicker, PickConfig, PickRect, PickWatcher, WatchList};
pub use crate::scene::{ObjectId, Scene};
