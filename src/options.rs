//! Centralized runtime tuning with TOML preset support.
//!
//! All interaction and projection constants (zoom rate, wheel sensitivity,
//! orbit speeds, clip planes) live here and serialize to/from TOML so hosts
//! can ship view presets. Sub-structs use `#[serde(default)]` so partial
//! files overriding a single section work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::planar::DEFAULT_ZOOM_RATE;
use crate::camera::{FirstPersonCamera, PerspectiveCamera, PlanarCamera};
use crate::error::VantageError;
use crate::input::Dispatcher;

/// Perspective projection and orbit control parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees (strictly inside 0..179).
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Rotation sensitivity multiplier.
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier.
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            rotate_speed: 2.0,
            pan_speed: 1.0,
            zoom_speed: 1.0,
        }
    }
}

/// Pointer/wheel interaction parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InteractionOptions {
    /// Exponential zoom rate for planar cameras.
    pub zoom_rate: f32,
    /// Zoom units per wheel line.
    pub wheel_sensitivity: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            zoom_rate: DEFAULT_ZOOM_RATE,
            wheel_sensitivity: 0.1,
        }
    }
}

/// Top-level options container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Perspective projection and orbit control parameters.
    pub camera: CameraOptions,
    /// Pointer/wheel interaction parameters.
    pub interaction: InteractionOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, content)?)
    }

    /// A planar camera tuned by these options.
    #[must_use]
    pub fn planar_camera(&self) -> PlanarCamera {
        PlanarCamera::new().with_zoom_rate(self.interaction.zoom_rate)
    }

    /// An orbit perspective camera tuned by these options.
    pub fn perspective_camera(
        &self,
    ) -> Result<PerspectiveCamera, VantageError> {
        let mut camera = PerspectiveCamera::new();
        camera.set_fovy(self.camera.fovy)?;
        camera.set_clip_planes(self.camera.znear, self.camera.zfar)?;
        camera.set_speeds(
            self.camera.rotate_speed,
            self.camera.pan_speed,
            self.camera.zoom_speed,
        );
        Ok(camera)
    }

    /// A first-person camera tuned by these options.
    pub fn first_person_camera(
        &self,
    ) -> Result<FirstPersonCamera, VantageError> {
        let mut camera = FirstPersonCamera::new();
        camera.set_fovy(self.camera.fovy)?;
        camera.set_speeds(self.camera.pan_speed, self.camera.rotate_speed);
        Ok(camera)
    }

    /// A dispatcher tuned by these options.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new()
            .with_wheel_sensitivity(self.interaction.wheel_sensitivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip() {
        let mut opts = Options::default();
        opts.camera.fovy = 60.0;
        opts.interaction.wheel_sensitivity = 0.25;

        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, opts);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml_str = r"
            [interaction]
            zoom_rate = 3.0
        ";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.interaction.zoom_rate, 3.0);
        assert_eq!(opts.interaction.wheel_sensitivity, 0.1);
        assert_eq!(opts.camera, CameraOptions::default());
    }

    #[test]
    fn cameras_pick_up_tuning() {
        let mut opts = Options::default();
        opts.interaction.zoom_rate = 1.0;
        opts.camera.fovy = 75.0;

        assert_eq!(opts.planar_camera().zoom_rate(), 1.0);
        assert_eq!(opts.perspective_camera().unwrap().fovy(), 75.0);
        assert_eq!(opts.first_person_camera().unwrap().fovy(), 75.0);
    }

    #[test]
    fn invalid_fovy_surfaces_as_parameter_error() {
        let mut opts = Options::default();
        opts.camera.fovy = 200.0;
        assert!(matches!(
            opts.perspective_camera(),
            Err(VantageError::InvalidParameter(_))
        ));
    }
}
