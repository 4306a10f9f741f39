//! Orbit and first-person perspective cameras.
//!
//! Both variants build the same `perspective_rh * look_at_rh` projection
//! (wgpu's [0,1] depth convention) and share the yaw/pitch orientation
//! model; they differ in what navigation moves. The orbit camera keeps a
//! target point and flies the eye around it; the first-person camera keeps
//! the eye and turns the look direction.

use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

use super::Viewport;
use crate::error::VantageError;

/// Pitch is kept just short of the poles so the up vector never degenerates.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 1e-3;

fn orientation(yaw: f32, pitch: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
}

fn perspective(
    fovy_deg: f32,
    viewport: Viewport,
    znear: f32,
    zfar: f32,
) -> Mat4 {
    // perspective_rh already uses [0,1] depth range (wgpu/Vulkan convention)
    Mat4::perspective_rh(fovy_deg.to_radians(), viewport.aspect(), znear, zfar)
}

fn validate_fovy(fovy_deg: f32) -> Result<(), VantageError> {
    if fovy_deg > 0.0 && fovy_deg < 179.0 {
        Ok(())
    } else {
        Err(VantageError::InvalidParameter(format!(
            "field of view must lie strictly between 0 and 179 degrees, got {fovy_deg}"
        )))
    }
}

// ---------------------------------------------------------------------------
// PerspectiveCamera
// ---------------------------------------------------------------------------

/// Orbit camera: the eye circles a target point at a given distance.
///
/// Zoom is a dolly — it changes the distance to the target, never the field
/// of view — so repeated zooms compose predictably and the projection's
/// angular coverage stays constant.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    target: Vec3,
    distance: f32,
    /// Orbit yaw in radians.
    yaw: f32,
    /// Orbit pitch in radians, clamped short of the poles.
    pitch: f32,
    fovy_deg: f32,
    znear: f32,
    zfar: f32,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
}

impl PerspectiveCamera {
    /// An orbit camera looking at the origin from the +Z axis.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 5.0,
            yaw: 0.0,
            pitch: 0.0,
            fovy_deg: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            rotate_speed: 2.0,
            pan_speed: 1.0,
            zoom_speed: 1.0,
        }
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy_deg
    }

    /// Set the vertical field of view; must lie strictly inside
    /// (0, 179) degrees.
    pub fn set_fovy(&mut self, fovy_deg: f32) -> Result<(), VantageError> {
        validate_fovy(fovy_deg)?;
        self.fovy_deg = fovy_deg;
        Ok(())
    }

    /// Set the near/far clip planes.
    pub fn set_clip_planes(
        &mut self,
        znear: f32,
        zfar: f32,
    ) -> Result<(), VantageError> {
        if znear <= 0.0 || zfar <= znear {
            return Err(VantageError::InvalidParameter(format!(
                "clip planes must satisfy 0 < near < far, got {znear}..{zfar}"
            )));
        }
        self.znear = znear;
        self.zfar = zfar;
        Ok(())
    }

    /// Set navigation sensitivities (rotate, pan, zoom).
    pub fn set_speeds(&mut self, rotate: f32, pan: f32, zoom: f32) {
        self.rotate_speed = rotate;
        self.pan_speed = pan;
        self.zoom_speed = zoom;
    }

    /// Orbit target point.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Distance from eye to target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Orbit yaw/pitch in radians.
    #[must_use]
    pub fn orbit_angles(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }

    /// Eye position derived from target, distance, and orbit angles.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.target + orientation(self.yaw, self.pitch) * Vec3::Z * self.distance
    }

    fn up(&self) -> Vec3 {
        orientation(self.yaw, self.pitch) * Vec3::Y
    }

    /// Combined view-projection matrix at the given viewport.
    #[must_use]
    pub fn projection(&self, viewport: Viewport) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, self.up());
        perspective(self.fovy_deg, viewport, self.znear, self.zfar) * view
    }

    /// Orbit around the target: yaw from the x delta, pitch from y.
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * self.rotate_speed;
        self.pitch = (self.pitch - delta.y * self.rotate_speed)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Slide the target across the current view plane.
    ///
    /// Scaled by the distance so a full-screen drag covers roughly the
    /// visible extent at any zoom level. The delta arrives with world-up
    /// positive y, and the scene should follow the cursor, so the target
    /// moves opposite to the drag.
    pub fn pan(&mut self, delta: Vec2) {
        let basis = orientation(self.yaw, self.pitch);
        let right = basis * Vec3::X;
        let up = basis * Vec3::Y;
        let step = self.distance * self.pan_speed;
        self.target += right * (-delta.x * step) + up * (-delta.y * step);
    }

    /// Dolly toward (positive) or away from (negative) the target.
    pub fn zoom(&mut self, delta: f32) {
        self.distance =
            (self.distance * (1.0 - delta * self.zoom_speed)).clamp(1e-2, 1e6);
    }

    /// Frame a point cloud: center on its centroid and back off far enough
    /// that the bounding sphere fits the vertical field of view.
    pub fn fit_points(&mut self, positions: &[Vec3]) {
        if positions.is_empty() {
            return;
        }
        let centroid: Vec3 =
            positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
        let radius = positions
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0f32, f32::max);

        self.target = centroid;
        let half_fov = self.fovy_deg.to_radians() / 2.0;
        // 1.5x padding for a comfortable margin around the sphere
        self.distance = (radius / half_fov.tan()).max(self.znear * 2.0) * 1.5;
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// FirstPersonCamera
// ---------------------------------------------------------------------------

/// First-person flight camera: a free eye with a yaw/pitch look direction.
///
/// Unlike the orbit camera there is no target point; panning flies the eye
/// along its own right/forward axes and zooming moves it along the look
/// direction.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstPersonCamera {
    eye: Vec3,
    yaw: f32,
    pitch: f32,
    fovy_deg: f32,
    znear: f32,
    zfar: f32,
    fly_speed: f32,
    rotate_speed: f32,
}

impl FirstPersonCamera {
    /// A first-person camera at the origin, looking down -Z.
    #[must_use]
    pub fn new() -> Self {
        Self {
            eye: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fovy_deg: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            fly_speed: 1.0,
            rotate_speed: 2.0,
        }
    }

    /// Place the eye at an explicit position.
    #[must_use]
    pub fn at(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Look yaw/pitch in radians.
    #[must_use]
    pub fn look_angles(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy_deg
    }

    /// Set the vertical field of view; must lie strictly inside
    /// (0, 179) degrees.
    pub fn set_fovy(&mut self, fovy_deg: f32) -> Result<(), VantageError> {
        validate_fovy(fovy_deg)?;
        self.fovy_deg = fovy_deg;
        Ok(())
    }

    /// Set fly/rotate sensitivities.
    pub fn set_speeds(&mut self, fly: f32, rotate: f32) {
        self.fly_speed = fly;
        self.rotate_speed = rotate;
    }

    /// Unit look direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        orientation(self.yaw, self.pitch) * Vec3::NEG_Z
    }

    /// Combined view-projection matrix at the given viewport.
    #[must_use]
    pub fn projection(&self, viewport: Viewport) -> Mat4 {
        let basis = orientation(self.yaw, self.pitch);
        let view = Mat4::look_at_rh(
            self.eye,
            self.eye + self.forward(),
            basis * Vec3::Y,
        );
        perspective(self.fovy_deg, viewport, self.znear, self.zfar) * view
    }

    /// Fly along local axes: x strafes right, y moves forward.
    pub fn fly(&mut self, delta: Vec2) {
        let basis = orientation(self.yaw, self.pitch);
        let right = basis * Vec3::X;
        self.eye += right * (delta.x * self.fly_speed)
            + self.forward() * (delta.y * self.fly_speed);
    }

    /// Move along the look direction (positive = forward).
    pub fn zoom(&mut self, delta: f32) {
        self.eye += self.forward() * (delta * self.fly_speed);
    }

    /// Turn the look direction: yaw from x, pitch from y.
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * self.rotate_speed;
        self.pitch = (self.pitch + delta.y * self.rotate_speed)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new()
    }
}
