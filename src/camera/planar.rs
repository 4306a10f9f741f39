//! Incremental 2D pan/zoom camera.
//!
//! The pan/zoom pair is updated incrementally from input deltas rather than
//! recomputed from absolute positions, which keeps long interactive sessions
//! numerically stable: each step is a small multiplicative scale update plus
//! a pan correction that keeps the zoom anchor fixed on screen.

use glam::{Mat4, Vec2, Vec3};

/// Hard floor for the zoom scale. Keeps `1/scale` bounded.
const MIN_SCALE: f32 = 1e-6;
/// Hard ceiling, so repeated zooms can never reach infinity.
const MAX_SCALE: f32 = 1e12;

/// Reference zoom rate: scale multiplies by `exp(ZOOM_RATE * delta)`.
pub const DEFAULT_ZOOM_RATE: f32 = 2.5;

// ---------------------------------------------------------------------------
// PanZoomState
// ---------------------------------------------------------------------------

/// The `(pan, scale)` pair parameterizing a planar camera's affine
/// transform.
///
/// Only [`PlanarCamera::pan`] and [`PlanarCamera::zoom`] mutate this; the
/// derived translation is always `pan * scale` and is never stored
/// separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanZoomState {
    pan: Vec2,
    scale: Vec2,
}

impl PanZoomState {
    /// Identity state: no pan, unit scale.
    pub const IDENTITY: Self = Self {
        pan: Vec2::ZERO,
        scale: Vec2::ONE,
    };

    /// Current pan offset (world units).
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Current per-axis scale factors.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Derived translation, always `pan * scale`.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.pan * self.scale
    }
}

impl Default for PanZoomState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ---------------------------------------------------------------------------
// PlanarCamera
// ---------------------------------------------------------------------------

/// 2D pan-zoom camera over an NDC-aligned plane.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarCamera {
    state: PanZoomState,
    zoom_rate: f32,
}

impl PlanarCamera {
    /// A planar camera at the identity state with the reference zoom rate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PanZoomState::IDENTITY,
            zoom_rate: DEFAULT_ZOOM_RATE,
        }
    }

    /// Override the exponential zoom rate constant.
    #[must_use]
    pub fn with_zoom_rate(mut self, zoom_rate: f32) -> Self {
        self.zoom_rate = zoom_rate;
        self
    }

    /// Current pan/zoom state.
    #[must_use]
    pub fn state(&self) -> &PanZoomState {
        &self.state
    }

    /// The exponential zoom rate constant.
    #[must_use]
    pub fn zoom_rate(&self) -> f32 {
        self.zoom_rate
    }

    /// Projection: scale about the origin, then translate by `pan * scale`.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        let translate = self.state.translate();
        Mat4::from_translation(Vec3::new(translate.x, translate.y, 0.0))
            * Mat4::from_scale(Vec3::new(
                self.state.scale.x,
                self.state.scale.y,
                1.0,
            ))
    }

    /// Translate by a view-space delta: `pan += delta / scale` per axis, so
    /// a given cursor movement covers the same screen distance at any zoom.
    pub fn pan(&mut self, delta: Vec2) {
        self.state.pan += delta / self.state.scale;
    }

    /// Zoom by `delta` per axis, anchored at `center` (NDC).
    ///
    /// Each axis scale multiplies by `exp(zoom_rate * delta)`, and the pan is
    /// corrected so the world point under the anchor stays put. The y pan
    /// correction carries the opposite sign from x, matching the
    /// screen-down/world-up flip applied to drag deltas upstream.
    ///
    /// Scale is clamped into `[MIN_SCALE, MAX_SCALE]`; a clamped zoom leaves
    /// the result bounded rather than failing.
    pub fn zoom(&mut self, delta: Vec2, center: Vec2) {
        let old = self.state.scale;
        let unclamped = Vec2::new(
            old.x * (self.zoom_rate * delta.x).exp(),
            old.y * (self.zoom_rate * delta.y).exp(),
        );
        let new = unclamped.clamp(Vec2::splat(MIN_SCALE), Vec2::splat(MAX_SCALE));
        if new != unclamped {
            log::warn!("planar zoom clamped scale from {unclamped} to {new}");
        }

        let pan = self.state.pan;
        self.state.pan = Vec2::new(
            pan.x - center.x * (1.0 / old.x - 1.0 / new.x),
            pan.y + center.y * (1.0 / old.y - 1.0 / new.y),
        );
        self.state.scale = new;
    }
}

impl Default for PlanarCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2, tol: f32) -> bool {
        (a - b).length() < tol
    }

    #[test]
    fn pan_is_additive() {
        let d1 = Vec2::new(0.3, -0.1);
        let d2 = Vec2::new(-0.05, 0.2);

        let mut split = PlanarCamera::new();
        split.pan(d1);
        split.pan(d2);

        let mut joined = PlanarCamera::new();
        joined.pan(d1 + d2);

        assert!(close(split.state().pan(), joined.state().pan(), 1e-6));
    }

    #[test]
    fn pan_divides_by_scale() {
        let mut cam = PlanarCamera::new();
        cam.zoom(Vec2::splat(1.0), Vec2::ZERO); // scale = e^2.5 per axis
        let scale = cam.state().scale();
        cam.pan(Vec2::new(0.5, 0.5));
        assert!(close(cam.state().pan(), Vec2::splat(0.5) / scale, 1e-6));
    }

    #[test]
    fn translate_is_always_pan_times_scale() {
        let mut cam = PlanarCamera::new();
        cam.pan(Vec2::new(0.2, 0.7));
        cam.zoom(Vec2::new(0.4, -0.3), Vec2::new(0.5, -0.25));
        let s = cam.state();
        assert!(close(s.translate(), s.pan() * s.scale(), 1e-9));
    }

    #[test]
    fn zoom_round_trips() {
        for delta in [
            Vec2::new(0.5, 0.5),
            Vec2::new(-1.2, 0.8),
            Vec2::new(4.9, -4.9),
        ] {
            for center in
                [Vec2::ZERO, Vec2::new(0.7, -0.3), Vec2::new(-1.0, 1.0)]
            {
                let mut cam = PlanarCamera::new();
                cam.pan(Vec2::new(0.1, -0.2));
                let before = *cam.state();

                cam.zoom(delta, center);
                cam.zoom(-delta, center);

                assert!(
                    close(cam.state().pan(), before.pan(), 1e-6),
                    "pan drifted for delta {delta}, center {center}"
                );
                assert!(
                    close(cam.state().scale(), before.scale(), 1e-6),
                    "scale drifted for delta {delta}, center {center}"
                );
            }
        }
    }

    #[test]
    fn zoom_anchor_stays_fixed_on_x() {
        // The world point projected at the anchor's x must still project
        // there after zooming.
        let mut cam = PlanarCamera::new();
        cam.pan(Vec2::new(0.3, 0.0));
        let center = Vec2::new(0.6, 0.0);

        let world_x =
            center.x / cam.state().scale().x - cam.state().pan().x;
        cam.zoom(Vec2::new(0.8, 0.0), center);
        let ndc_x = cam.state().scale().x * (world_x + cam.state().pan().x);
        assert!((ndc_x - center.x).abs() < 1e-6);
    }

    #[test]
    fn zoom_scale_never_collapses() {
        let mut cam = PlanarCamera::new();
        // Far past the clamp threshold.
        for _ in 0..40 {
            cam.zoom(Vec2::splat(-5.0), Vec2::new(0.4, 0.4));
        }
        let s = cam.state().scale();
        assert!(s.x >= 1e-6 && s.y >= 1e-6);
        assert!(cam.state().pan().is_finite());
        assert!(cam.state().translate().is_finite());
    }

    #[test]
    fn zero_delta_zoom_is_identity() {
        let mut cam = PlanarCamera::new();
        cam.pan(Vec2::new(0.25, -0.4));
        let before = *cam.state();
        cam.zoom(Vec2::ZERO, Vec2::new(0.9, 0.9));
        assert_eq!(*cam.state(), before);
    }

    #[test]
    fn projection_applies_scale_then_translate() {
        let mut cam = PlanarCamera::new();
        cam.pan(Vec2::new(0.5, 0.0));
        let p = cam
            .projection()
            .transform_point3(Vec3::new(0.25, 0.0, 0.0));
        // scale 1, translate (0.5, 0)
        assert!((p.x - 0.75).abs() < 1e-6);
    }
}
