//! Camera + viewport pairing that turns display points back into world space

use crate::core::camera::Camera;
use crate::core::error::Error;
use crate::core::types::{Result, Vec3, Vec4};
use crate::core::viewport::Viewport;

/// Unprojects a display point at a normalized depth into world space.
///
/// `depth` is 0.0 on the near clipping plane and 1.0 on the far one. Results
/// must be deterministic for a fixed camera state.
pub trait Unproject {
    fn unproject_display_point(&self, x: f32, y: f32, depth: f32) -> Result<Vec3>;

    /// World-space eye position, if the view has one.
    fn eye_position(&self) -> Option<Vec3> {
        None
    }
}

/// A camera rendering into a viewport; the pick surface of a renderer.
#[derive(Clone, Debug)]
pub struct View {
    pub camera: Camera,
    pub viewport: Viewport,
}

impl View {
    /// Pair a camera with a viewport, matching the camera aspect to the viewport.
    pub fn new(mut camera: Camera, viewport: Viewport) -> Self {
        if viewport.is_valid() {
            camera.set_aspect(viewport.width, viewport.height);
        }
        Self { camera, viewport }
    }
}

impl Unproject for View {
    fn unproject_display_point(&self, x: f32, y: f32, depth: f32) -> Result<Vec3> {
        let ndc = self.viewport.display_to_ndc(x, y).ok_or_else(|| {
            Error::frustum(format!("viewport {:?} has no area", self.viewport))
        })?;

        if !self.camera.has_valid_clipping_range() {
            return Err(Error::frustum(format!(
                "invalid clipping range [{}, {}]",
                self.camera.near, self.camera.far
            )));
        }

        let view_proj = self.camera.view_projection();
        let det = view_proj.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(Error::frustum("view-projection matrix is singular"));
        }

        let world = view_proj.inverse() * Vec4::new(ndc.x, ndc.y, depth, 1.0);
        if world.w == 0.0 {
            return Err(Error::frustum(format!(
                "display point ({x}, {y}, {depth}) unprojects to infinity"
            )));
        }

        let point = world.truncate() / world.w;
        if !point.is_finite() {
            return Err(Error::frustum(format!(
                "display point ({x}, {y}, {depth}) unprojects to a non-finite point"
            )));
        }
        Ok(point)
    }

    fn eye_position(&self) -> Option<Vec3> {
        Some(self.camera.position)
    }
}
