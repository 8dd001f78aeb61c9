//! Flat collection of pickable scene objects.

use std::collections::HashMap;

use crate::math::Aabb;

use super::node::{ObjectId, SceneObject};

/// Objects in insertion order, addressable by [`ObjectId`].
#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    index: HashMap<ObjectId, usize>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh object ID.
    fn alloc_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a visible, pickable object. Returns its ID.
    pub fn add_object(&mut self, name: impl Into<String>, local_bounds: Option<Aabb>) -> ObjectId {
        let id = self.alloc_id();
        self.index.insert(id, self.objects.len());
        self.objects.push(SceneObject::new(id, name, local_bounds));
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.index.get(&id).map(|&i| &self.objects[i])
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.index.get(&id).map(|&i| &mut self.objects[i])
    }

    /// Remove an object, keeping the order of the rest.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let pos = self.index.remove(&id)?;
        let removed = self.objects.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// World bounds of all visible objects with valid geometry.
    pub fn bounds(&self) -> Option<Aabb> {
        self.objects
            .iter()
            .filter(|obj| obj.visible)
            .filter_map(SceneObject::world_bounds)
            .filter(|b| !b.is_degenerate())
            .reduce(|acc, b| acc.merged(&b))
    }
}
