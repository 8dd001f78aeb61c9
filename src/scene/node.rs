//! Scene object types
//!
//! Object IDs, transforms, and the pickable objects a scene holds.

use glam::{Mat4, Quat, Vec3};

use crate::math::Aabb;
use crate::pick::candidate::PickCandidate;

/// Unique identifier for a scene object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

/// Object-to-world transform.
#[derive(Clone, Debug)]
pub struct LocalTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl LocalTransform {
    /// Identity transform (no translation, rotation, or scaling).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a translation-only transform.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn is_identity(&self) -> bool {
        self.position == Vec3::ZERO && self.rotation == Quat::IDENTITY && self.scale == 1.0
    }

    /// Convert to a 4x4 matrix.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation,
            self.position,
        )
    }
}

/// A single object in the scene.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub transform: LocalTransform,
    /// Bounds in object space; `None` for objects without geometry.
    pub local_bounds: Option<Aabb>,
    pub visible: bool,
    pub pickable: bool,
}

impl SceneObject {
    /// Create a visible, pickable object.
    pub fn new(id: ObjectId, name: impl Into<String>, local_bounds: Option<Aabb>) -> Self {
        Self {
            id,
            name: name.into(),
            transform: LocalTransform::identity(),
            local_bounds,
            visible: true,
            pickable: true,
        }
    }

    /// World-space bounds: the local box re-boxed after the transform.
    ///
    /// A degenerate local box is passed through untouched so the picker can
    /// report it.
    pub fn world_bounds(&self) -> Option<Aabb> {
        let local = self.local_bounds?;
        if local.is_degenerate() || self.transform.is_identity() {
            return Some(local);
        }
        Some(local.transformed(&self.transform.to_mat4()))
    }
}

impl PickCandidate for SceneObject {
    fn object_id(&self) -> ObjectId {
        self.id
    }

    fn bounds(&self) -> Option<Aabb> {
        self.world_bounds()
    }

    fn is_pickable(&self) -> bool {
        self.pickable
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
