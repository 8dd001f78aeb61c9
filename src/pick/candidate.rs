//! What the scan driver needs from a scene object

use crate::math::Aabb;
use crate::scene::ObjectId;

/// An object the area picker can test.
pub trait PickCandidate {
    fn object_id(&self) -> ObjectId;

    /// World-space bounds, or `None` when the object has no geometry.
    fn bounds(&self) -> Option<Aabb>;

    fn is_pickable(&self) -> bool {
        true
    }

    fn is_visible(&self) -> bool {
        true
    }
}

impl<T: PickCandidate + ?Sized> PickCandidate for Box<T> {
    fn object_id(&self) -> ObjectId {
        (**self).object_id()
    }

    fn bounds(&self) -> Option<Aabb> {
        (**self).bounds()
    }

    fn is_pickable(&self) -> bool {
        (**self).is_pickable()
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
}
