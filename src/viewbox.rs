//! A pixel-space region owning exactly one active camera.
//!
//! The viewbox is where screen space and camera space meet: it holds the
//! pixel rectangle the host clips rendering to, normalizes cursor positions
//! into NDC, and owns the active [`Camera`]. Draw-time access without an
//! assigned camera is an error, never a silent fallback.

use glam::{Mat4, Vec2};

use crate::camera::{Camera, Viewport};
use crate::error::VantageError;
use crate::scene::{EntityId, SceneGraph};

/// A rectangular pixel region with exactly one active camera.
#[derive(Debug)]
pub struct ViewBox {
    origin: (u32, u32),
    viewport: Viewport,
    camera: Option<Camera>,
    /// Monotonically increasing generation; bumped on camera/extent changes.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl ViewBox {
    /// A viewbox at origin `(0,0)` with the given extents and no camera.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            origin: (0, 0),
            viewport: Viewport::new(width, height),
            camera: None,
            generation: 0,
            rendered_generation: 0,
        }
    }

    /// Move the region's pixel origin.
    #[must_use]
    pub fn with_origin(mut self, x: u32, y: u32) -> Self {
        self.origin = (x, y);
        self
    }

    /// Pixel origin of the region.
    #[must_use]
    pub fn origin(&self) -> (u32, u32) {
        self.origin
    }

    /// Current pixel extents.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether a pixel position falls inside this region.
    #[must_use]
    pub fn contains(&self, position: Vec2) -> bool {
        let (ox, oy) = (self.origin.0 as f32, self.origin.1 as f32);
        position.x >= ox
            && position.y >= oy
            && position.x < ox + self.viewport.width as f32
            && position.y < oy + self.viewport.height as f32
    }

    // -- Dirty tracking --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether camera state or extents changed since the last
    /// [`Self::mark_rendered`].
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Mark the current generation as rendered.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    /// Force the viewbox dirty.
    pub fn force_dirty(&mut self) {
        self.invalidate();
    }

    // -- Camera --

    /// Assign the active camera, replacing any previous one.
    ///
    /// Last explicit assignment always wins — there is no construction-order
    /// heuristic — and the incoming camera's pan/zoom/orbit state is taken
    /// as-is, never reset.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
        self.invalidate();
    }

    /// Remove and return the active camera.
    pub fn take_camera(&mut self) -> Option<Camera> {
        let camera = self.camera.take();
        if camera.is_some() {
            self.invalidate();
        }
        camera
    }

    /// Whether a camera is currently assigned.
    #[must_use]
    pub fn has_camera(&self) -> bool {
        self.camera.is_some()
    }

    /// The active camera, or [`VantageError::NoActiveCamera`].
    pub fn camera(&self) -> Result<&Camera, VantageError> {
        self.camera.as_ref().ok_or(VantageError::NoActiveCamera)
    }

    /// Mutable access to the active camera. Conservatively marks the
    /// viewbox dirty.
    pub fn camera_mut(&mut self) -> Result<&mut Camera, VantageError> {
        self.invalidate();
        self.camera.as_mut().ok_or(VantageError::NoActiveCamera)
    }

    // -- Geometry --

    /// Update pixel extents. The next projection/normalization query picks
    /// up the new extents; no objects are rebuilt.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.invalidate();
    }

    /// Normalize a pixel position (window coordinates) into `[-1, 1]`
    /// relative to this region. Zero-size extents are treated as one pixel
    /// so the result is always finite.
    #[must_use]
    pub fn normalize(&self, position: Vec2) -> Vec2 {
        let local = position
            - Vec2::new(self.origin.0 as f32, self.origin.1 as f32);
        let half = self.viewport.extents() / 2.0;
        local / half - Vec2::ONE
    }

    /// The active camera's projection at the current extents.
    pub fn projection(&self) -> Result<Mat4, VantageError> {
        Ok(self.camera()?.project(self.viewport))
    }

    /// Per-entity output for the rendering backend: the camera projection
    /// composed with the entity's global transform.
    pub fn entity_transform(
        &self,
        graph: &SceneGraph,
        entity: EntityId,
    ) -> Result<Mat4, VantageError> {
        Ok(self.projection()? * graph.global_transform(entity)?)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::{PerspectiveCamera, PixelCamera, PlanarCamera};
    use crate::scene::Transform;

    #[test]
    fn draw_without_camera_is_an_error() {
        let vbox = ViewBox::new(600, 600);
        assert!(matches!(
            vbox.projection(),
            Err(VantageError::NoActiveCamera)
        ));
        assert!(matches!(vbox.camera(), Err(VantageError::NoActiveCamera)));
    }

    #[test]
    fn last_explicit_assignment_wins() {
        // A pixel camera is constructed (and assigned) first; the
        // perspective camera explicitly assigned afterwards must be the
        // active one regardless of construction order.
        let mut vbox = ViewBox::new(600, 600);
        vbox.set_camera(Camera::Pixel(PixelCamera));

        let mut persp = PerspectiveCamera::new();
        persp.set_fovy(90.0).unwrap();
        vbox.set_camera(Camera::Perspective(persp));

        match vbox.camera().unwrap() {
            Camera::Perspective(p) => assert_eq!(p.fovy(), 90.0),
            other => panic!("expected perspective camera, got {}", other.variant()),
        }
    }

    #[test]
    fn set_camera_keeps_existing_state() {
        let mut planar = PlanarCamera::new();
        planar.pan(Vec2::new(0.4, -0.2));
        let pan = planar.state().pan();

        let mut vbox = ViewBox::new(600, 600);
        vbox.set_camera(Camera::Planar(planar));

        match vbox.camera().unwrap() {
            Camera::Planar(p) => assert_eq!(p.state().pan(), pan),
            other => panic!("expected planar camera, got {}", other.variant()),
        }
    }

    #[test]
    fn resize_updates_projection_without_reconstruction() {
        let mut vbox = ViewBox::new(600, 600);
        vbox.set_camera(Camera::Pixel(PixelCamera));

        let before = vbox.projection().unwrap();
        vbox.resize(1200, 600);
        let after = vbox.projection().unwrap();
        assert_ne!(before, after);

        // corner of the resized region still maps to (1, 1)
        let hi = after.transform_point3(Vec3::new(1200.0, 600.0, 0.0));
        assert!((hi.truncate() - Vec2::ONE).length() < 1e-6);
    }

    #[test]
    fn normalize_maps_center_and_corners() {
        let vbox = ViewBox::new(600, 600);
        assert!((vbox.normalize(Vec2::new(300.0, 300.0))).length() < 1e-6);
        assert_eq!(
            vbox.normalize(Vec2::ZERO),
            Vec2::new(-1.0, -1.0)
        );
        assert_eq!(
            vbox.normalize(Vec2::new(600.0, 600.0)),
            Vec2::new(1.0, 1.0)
        );
    }

    #[test]
    fn normalize_respects_origin() {
        let vbox = ViewBox::new(100, 100).with_origin(50, 50);
        assert!(vbox.normalize(Vec2::new(100.0, 100.0)).length() < 1e-6);
        assert!(vbox.contains(Vec2::new(60.0, 149.0)));
        assert!(!vbox.contains(Vec2::new(40.0, 60.0)));
        assert!(!vbox.contains(Vec2::new(150.0, 60.0)));
    }

    #[test]
    fn entity_transform_composes_projection_and_globals() {
        let mut graph = SceneGraph::new();
        let parent = graph
            .spawn(
                graph.root(),
                Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)),
            )
            .unwrap();
        let child = graph
            .spawn(parent, Transform::from_scale(Vec3::splat(2.0)))
            .unwrap();

        let mut planar = PlanarCamera::new();
        planar.pan(Vec2::new(0.5, 0.0));
        let mut vbox = ViewBox::new(600, 600);
        vbox.set_camera(Camera::Planar(planar));

        let m = vbox.entity_transform(&graph, child).unwrap();
        let expected = vbox.projection().unwrap()
            * graph.global_transform(child).unwrap();
        assert!(m.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn dirty_flag_follows_camera_and_extent_changes() {
        let mut vbox = ViewBox::new(600, 600);
        assert!(!vbox.is_dirty());

        vbox.set_camera(Camera::Pixel(PixelCamera));
        assert!(vbox.is_dirty());
        vbox.mark_rendered();

        vbox.resize(800, 600);
        assert!(vbox.is_dirty());
        vbox.mark_rendered();

        let _ = vbox.camera_mut().unwrap();
        assert!(vbox.is_dirty());
    }
}
