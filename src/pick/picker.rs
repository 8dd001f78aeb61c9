//! Scan driver: test every candidate box against the pick frustum
//!
//! One frustum is built per call and never changes during the scan. Each
//! candidate is tested at most once; `near_distance` only orders hits.

use std::collections::HashSet;

use crate::core::types::Result;
use crate::core::view::Unproject;
use crate::math::{BoxHit, Frustum, IntersectionPath};
use crate::scene::{ObjectId, Scene};

use super::candidate::PickCandidate;
use super::config::PickConfig;
use super::rect::PickRect;
use super::watch::WatchList;

/// A candidate whose box overlaps the frustum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickedObject {
    pub id: ObjectId,
    /// Ordering key, larger = closer to the viewer.
    pub near_distance: f32,
    pub path: IntersectionPath,
}

/// Everything one area pick produced.
#[derive(Clone, Debug)]
pub struct AreaPickResult {
    /// Rectangle actually used, after normalization and growth.
    pub rect: PickRect,
    pub frustum: Frustum,
    /// Hits in scan order.
    pub picked: Vec<PickedObject>,
    /// Hit closest to the viewer; the first one wins a tie.
    pub nearest: Option<PickedObject>,
    /// Candidates skipped because their bounds had `min > max`.
    pub degenerate: Vec<ObjectId>,
    /// Number of candidates that reached the intersection test.
    pub tested: usize,
}

impl AreaPickResult {
    pub fn is_picked(&self, id: ObjectId) -> bool {
        self.picked.iter().any(|p| p.id == id)
    }

    pub fn picked_ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.picked.iter().map(|p| p.id)
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }
}

/// Rubber-band picker over scene bounding boxes.
///
/// Holds configuration and an optional pick list; no geometry survives
/// between calls.
#[derive(Clone, Debug, Default)]
pub struct AreaPicker {
    config: PickConfig,
    pick_list: HashSet<ObjectId>,
    pick_from_list: bool,
}

impl AreaPicker {
    pub fn new(config: PickConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &PickConfig {
        &self.config
    }

    /// Restrict picking to the pick list (see [`AreaPicker::add_pick_list`]).
    pub fn set_pick_from_list(&mut self, enabled: bool) {
        self.pick_from_list = enabled;
    }

    pub fn pick_from_list(&self) -> bool {
        self.pick_from_list
    }

    pub fn add_pick_list(&mut self, id: ObjectId) {
        self.pick_list.insert(id);
    }

    pub fn remove_pick_list(&mut self, id: ObjectId) -> bool {
        self.pick_list.remove(&id)
    }

    pub fn clear_pick_list(&mut self) {
        self.pick_list.clear();
    }

    /// Normalize `rect`, grow it to the configured minimum, and build its frustum.
    pub fn build_frustum<U: Unproject + ?Sized>(&self, rect: PickRect, view: &U) -> Result<(PickRect, Frustum)> {
        let rect = PickRect::new(rect.x0, rect.y0, rect.x1, rect.y1)
            .with_min_size(self.config.min_rect_size);
        let frustum = Frustum::from_display_rect(rect.x0, rect.y0, rect.x1, rect.y1, view)?;
        Ok((rect, frustum))
    }

    fn should_test<C: PickCandidate + ?Sized>(&self, candidate: &C) -> bool {
        if !self.config.include_unpickable && !candidate.is_pickable() {
            return false;
        }
        if !self.config.include_hidden && !candidate.is_visible() {
            return false;
        }
        !self.pick_from_list || self.pick_list.contains(&candidate.object_id())
    }

    /// Pick every candidate whose bounding box overlaps the frustum of `rect`.
    ///
    /// On a frustum build failure nothing is picked and watchers are left
    /// untouched. Otherwise every watcher learns whether its object was hit.
    pub fn area_pick<'c, U, C, I>(
        &self,
        rect: PickRect,
        view: &U,
        candidates: I,
        watchers: &mut WatchList<'_>,
    ) -> Result<AreaPickResult>
    where
        U: Unproject + ?Sized,
        C: PickCandidate + ?Sized + 'c,
        I: IntoIterator<Item = &'c C>,
    {
        let (rect, frustum) = self.build_frustum(rect, view).inspect_err(|e| {
            log::warn!("Area pick aborted, nothing picked: {e}");
        })?;

        let mut picked = Vec::new();
        let mut nearest: Option<PickedObject> = None;
        let mut degenerate = Vec::new();
        let mut tested = 0;

        for candidate in candidates {
            if !self.should_test(candidate) {
                continue;
            }
            let id = candidate.object_id();
            let Some(bounds) = candidate.bounds() else {
                log::trace!("{id:?} has no geometry, skipping");
                continue;
            };

            tested += 1;
            let hit: BoxHit = frustum.intersect_box(&bounds);
            if hit.is_degenerate() {
                log::warn!("{id:?} has degenerate bounds {:?}, excluded from pick", bounds.to_bounds());
                degenerate.push(id);
                continue;
            }
            if !hit.hits {
                continue;
            }

            let entry = PickedObject {
                id,
                near_distance: hit.near_distance,
                path: hit.path,
            };
            log::trace!("Picked {id:?} via {:?} (near distance {})", hit.path, hit.near_distance);
            if nearest.is_none_or(|best| entry.near_distance > best.near_distance) {
                nearest = Some(entry);
            }
            picked.push(entry);
        }

        let picked_set: HashSet<ObjectId> = picked.iter().map(|p| p.id).collect();
        watchers.notify(&picked_set);

        log::debug!(
            "Area pick ({}, {})-({}, {}): {} of {} tested, nearest {:?}",
            rect.x0, rect.y0, rect.x1, rect.y1,
            picked.len(), tested, nearest.map(|n| n.id)
        );

        Ok(AreaPickResult {
            rect,
            frustum,
            picked,
            nearest,
            degenerate,
            tested,
        })
    }

    /// [`AreaPicker::area_pick`] over every object of a [`Scene`].
    pub fn pick_scene<U: Unproject + ?Sized>(
        &self,
        rect: PickRect,
        view: &U,
        scene: &Scene,
        watchers: &mut WatchList<'_>,
    ) -> Result<AreaPickResult> {
        self.area_pick(rect, view, scene.iter(), watchers)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::core::{logging, Camera, Error, View, Viewport};
    use crate::math::Aabb;
    use crate::pick::watch::PickWatcher;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<bool>,
    }

    impl PickWatcher for Recorder {
        fn set_needs_processing(&mut self, needs_processing: bool) {
            self.calls.push(needs_processing);
        }
    }

    /// Camera at the origin looking down -Z, clipping range [1, 1000], 300x300 viewport
    fn test_view() -> View {
        let camera = Camera::new(Vec3::ZERO, 60.0, 1.0).with_clipping_range(1.0, 1000.0);
        View::new(camera, Viewport::from_size(300.0, 300.0))
    }

    fn unit_box(center: Vec3) -> Option<Aabb> {
        Some(Aabb::from_center_half_extent(center, Vec3::splat(0.5)))
    }

    #[test]
    fn test_end_to_end_rectangle_pick() {
        logging::init_for_tests();
        let mut scene = Scene::new();
        let near = scene.add_object("near", unit_box(Vec3::new(0.0, 0.0, -5.0)));
        let beyond = scene.add_object("beyond", unit_box(Vec3::new(0.0, 0.0, -5000.0)));

        let picker = AreaPicker::default();
        let result = picker
            .pick_scene(PickRect::new(100.0, 100.0, 200.0, 200.0), &test_view(), &scene, &mut WatchList::new())
            .unwrap();

        assert!(result.is_picked(near));
        assert!(!result.is_picked(beyond));
        assert_eq!(result.nearest.map(|n| n.id), Some(near));
        assert_eq!(result.tested, 2);
    }

    #[test]
    fn test_nearest_is_closest_hit() {
        let mut scene = Scene::new();
        let far = scene.add_object("far", unit_box(Vec3::new(0.0, 0.0, -40.0)));
        let close = scene.add_object("close", unit_box(Vec3::new(0.0, 0.0, -4.0)));
        let mid = scene.add_object("mid", unit_box(Vec3::new(0.0, 0.0, -12.0)));

        let result = AreaPicker::default()
            .pick_scene(PickRect::new(100.0, 100.0, 200.0, 200.0), &test_view(), &scene, &mut WatchList::new())
            .unwrap();

        let order: Vec<_> = result.picked_ids().collect();
        assert_eq!(order, [far, close, mid]);
        assert_eq!(result.nearest.unwrap().id, close);
    }

    #[test]
    fn test_watchers_learn_pick_state() {
        let mut scene = Scene::new();
        let inside = scene.add_object("inside", unit_box(Vec3::new(0.0, 0.0, -5.0)));
        let outside = scene.add_object("outside", unit_box(Vec3::new(50.0, 0.0, -5.0)));
        let not_in_scene = ObjectId(999);

        let mut inside_watch = Recorder::default();
        let mut outside_watch = Recorder::default();
        let mut stray_watch = Recorder::default();
        {
            let mut watchers = WatchList::new();
            watchers.register(inside, &mut inside_watch);
            watchers.register(outside, &mut outside_watch);
            watchers.register(not_in_scene, &mut stray_watch);

            AreaPicker::default()
                .pick_scene(PickRect::new(100.0, 100.0, 200.0, 200.0), &test_view(), &scene, &mut watchers)
                .unwrap();
        }
        assert_eq!(inside_watch.calls, [true]);
        assert_eq!(outside_watch.calls, [false]);
        assert_eq!(stray_watch.calls, [false]);
    }

    #[test]
    fn test_failed_frustum_picks_nothing_and_leaves_watchers() {
        let mut scene = Scene::new();
        let id = scene.add_object("box", unit_box(Vec3::new(0.0, 0.0, -5.0)));
        let view = View::new(Camera::new(Vec3::ZERO, 60.0, 1.0), Viewport::from_size(0.0, 0.0));

        let mut watch = Recorder::default();
        let result = {
            let mut watchers = WatchList::new();
            watchers.register(id, &mut watch);
            AreaPicker::default().pick_scene(PickRect::new(0.0, 0.0, 10.0, 10.0), &view, &scene, &mut watchers)
        };
        assert!(matches!(result, Err(Error::FrustumBuild(_))));
        assert!(watch.calls.is_empty());
    }

    #[test]
    fn test_degenerate_candidates_are_excluded_not_fatal() {
        let mut scene = Scene::new();
        let bad = scene.add_object("bad", Some(Aabb::from_bounds([0.5, -0.5, -0.5, 0.5, -5.5, -4.5])));
        let good = scene.add_object("good", unit_box(Vec3::new(0.0, 0.0, -6.0)));

        let result = AreaPicker::default()
            .pick_scene(PickRect::new(100.0, 100.0, 200.0, 200.0), &test_view(), &scene, &mut WatchList::new())
            .unwrap();

        assert_eq!(result.degenerate, [bad]);
        assert!(!result.is_picked(bad));
        assert!(result.is_picked(good));
    }

    #[test]
    fn test_objects_without_geometry_never_hit() {
        let mut scene = Scene::new();
        let empty = scene.add_object("group", None);

        let result = AreaPicker::default()
            .pick_scene(PickRect::new(0.0, 0.0, 300.0, 300.0), &test_view(), &scene, &mut WatchList::new())
            .unwrap();
        assert!(!result.is_picked(empty));
        assert!(result.is_empty());
        assert_eq!(result.tested, 0);
    }

    #[test]
    fn test_hidden_and_unpickable_filtering() {
        let mut scene = Scene::new();
        let hidden = scene.add_object("hidden", unit_box(Vec3::new(0.0, 0.0, -5.0)));
        let locked = scene.add_object("locked", unit_box(Vec3::new(0.0, 0.0, -8.0)));
        scene.get_mut(hidden).unwrap().visible = false;
        scene.get_mut(locked).unwrap().pickable = false;
        let rect = PickRect::new(100.0, 100.0, 200.0, 200.0);

        let result = AreaPicker::default()
            .pick_scene(rect, &test_view(), &scene, &mut WatchList::new())
            .unwrap();
        assert!(result.is_empty());

        let permissive = AreaPicker::new(PickConfig {
            include_hidden: true,
            include_unpickable: true,
            ..Default::default()
        });
        let result = permissive
            .pick_scene(rect, &test_view(), &scene, &mut WatchList::new())
            .unwrap();
        assert!(result.is_picked(hidden));
        assert!(result.is_picked(locked));
    }

    #[test]
    fn test_pick_from_list() {
        let mut scene = Scene::new();
        let a = scene.add_object("a", unit_box(Vec3::new(0.0, 0.0, -5.0)));
        let b = scene.add_object("b", unit_box(Vec3::new(0.0, 0.0, -9.0)));
        let rect = PickRect::new(100.0, 100.0, 200.0, 200.0);

        let mut picker = AreaPicker::default();
        picker.add_pick_list(b);
        // The list is ignored until enabled
        let result = picker.pick_scene(rect, &test_view(), &scene, &mut WatchList::new()).unwrap();
        assert!(result.is_picked(a) && result.is_picked(b));

        picker.set_pick_from_list(true);
        let result = picker.pick_scene(rect, &test_view(), &scene, &mut WatchList::new()).unwrap();
        assert!(!result.is_picked(a));
        assert!(result.is_picked(b));

        assert!(picker.remove_pick_list(b));
        let result = picker.pick_scene(rect, &test_view(), &scene, &mut WatchList::new()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_click_grows_into_a_pickable_frustum() {
        let mut scene = Scene::new();
        let id = scene.add_object("center", unit_box(Vec3::new(0.0, 0.0, -5.0)));

        let picker = AreaPicker::default();
        let result = picker
            .pick_scene(PickRect::from_point(150.0, 150.0), &test_view(), &scene, &mut WatchList::new())
            .unwrap();
        assert_eq!(result.rect.width(), 1.0);
        assert!(result.is_picked(id));
    }

    #[test]
    fn test_reversed_drag_matches_forward_drag() {
        let mut scene = Scene::new();
        scene.add_object("left", unit_box(Vec3::new(-1.0, 0.0, -5.0)));
        scene.add_object("right", unit_box(Vec3::new(3.0, 0.0, -5.0)));
        let picker = AreaPicker::default();

        let forward = picker
            .pick_scene(PickRect::new(60.0, 120.0, 150.0, 180.0), &test_view(), &scene, &mut WatchList::new())
            .unwrap();
        let backward = picker
            .pick_scene(PickRect::new(150.0, 180.0, 60.0, 120.0), &test_view(), &scene, &mut WatchList::new())
            .unwrap();
        assert_eq!(forward.picked, backward.picked);
        assert_eq!(forward.frustum, backward.frustum);
    }

    #[test]
    fn test_boxed_candidates() {
        struct Fixed(ObjectId, Aabb);
        impl PickCandidate for Fixed {
            fn object_id(&self) -> ObjectId {
                self.0
            }
            fn bounds(&self) -> Option<Aabb> {
                Some(self.1)
            }
        }

        let candidates: Vec<Box<dyn PickCandidate>> = vec![
            Box::new(Fixed(ObjectId(1), Aabb::from_center_half_extent(Vec3::new(0.0, 0.0, -3.0), Vec3::splat(0.2)))),
            Box::new(Fixed(ObjectId(2), Aabb::from_center_half_extent(Vec3::new(0.0, 0.0, 3.0), Vec3::splat(0.2)))),
        ];
        let result = AreaPicker::default()
            .area_pick(PickRect::new(100.0, 100.0, 200.0, 200.0), &test_view(), &candidates, &mut WatchList::new())
            .unwrap();
        assert_eq!(result.picked_ids().collect::<Vec<_>>(), [ObjectId(1)]);
    }
}
