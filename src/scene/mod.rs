//! Scene objects that feed the area picker

pub mod node;
pub mod objects;

pub use node::{LocalTransform, ObjectId, SceneObject};
pub use objects::Scene;
