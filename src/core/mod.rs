//! Core picker types and utilities

pub mod types;
pub mod error;
pub mod logging;
pub mod camera;
pub mod viewport;
pub mod view;

pub use types::*;
pub use error::Error;
pub use camera::Camera;
pub use viewport::Viewport;
pub use view::{Unproject, View};
