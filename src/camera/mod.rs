//! The polymorphic camera family.
//!
//! A [`Camera`] is a tagged variant over five projection/navigation models,
//! from a flat passthrough up to first-person 3D flight. The capability set
//! is `{project, pan, zoom, rotate}`; `project` is always available, while
//! the navigation capabilities return [`Unsupported`] on variants that do
//! not implement them — there is no silently-inherited default behavior.

/// Incremental pan/zoom math for planar cameras.
pub mod planar;
/// Orbit and first-person perspective cameras.
pub mod perspective;
/// GPU-facing plain-old-data camera block.
pub mod uniform;

use std::fmt;

use glam::{Mat4, Vec2, Vec3};
pub use planar::{PanZoomState, PlanarCamera};
pub use perspective::{FirstPersonCamera, PerspectiveCamera};
pub use uniform::CameraUniform;

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Pixel extents a camera projects into.
///
/// Always passed in at query time (by the owning
/// [`ViewBox`](crate::viewbox::ViewBox)), so a resize is picked up on the
/// next projection without rebuilding the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
}

impl Viewport {
    /// A new viewport with the given pixel extents.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width/height ratio; a zero-size axis is treated as one pixel so the
    /// result is always finite.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    /// Extents as floats, zero-size axes clamped to one pixel.
    #[must_use]
    pub fn extents(&self) -> Vec2 {
        Vec2::new(self.width.max(1) as f32, self.height.max(1) as f32)
    }
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// The navigation capabilities a camera variant may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Translate the view.
    Pan,
    /// Scale the view / move toward the target.
    Zoom,
    /// Orbit or look around.
    Rotate,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pan => write!(f, "pan"),
            Self::Zoom => write!(f, "zoom"),
            Self::Rotate => write!(f, "rotate"),
        }
    }
}

/// A capability invoked on a camera variant that does not implement it.
///
/// Recoverable by design: the operation is a no-op and the caller (usually
/// the [`Dispatcher`](crate::input::Dispatcher)) carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsupported {
    /// Name of the camera variant.
    pub variant: &'static str,
    /// The capability it lacks.
    pub capability: Capability,
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} camera does not support {}", self.variant, self.capability)
    }
}

impl std::error::Error for Unsupported {}

// ---------------------------------------------------------------------------
// Fixed projections
// ---------------------------------------------------------------------------

/// Passthrough camera: entity coordinates are assumed already normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatCamera;

/// Maps pixel space `(0,0)..(w,h)` linearly onto NDC `(-1,-1)..(1,1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelCamera;

impl PixelCamera {
    /// Projection for the given extents: `x' = 2x/w - 1`, `y' = 2y/h - 1`.
    #[must_use]
    pub fn projection(viewport: Viewport) -> Mat4 {
        let extents = viewport.extents();
        Mat4::from_translation(Vec3::new(-1.0, -1.0, 0.0))
            * Mat4::from_scale(Vec3::new(
                2.0 / extents.x,
                2.0 / extents.y,
                1.0,
            ))
    }
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

/// A camera: one of five projection/navigation models.
#[derive(Debug, Clone)]
pub enum Camera {
    /// Identity projection.
    Flat(FlatCamera),
    /// Pixel-to-NDC projection.
    Pixel(PixelCamera),
    /// 2D pan-zoom projection.
    Planar(PlanarCamera),
    /// 3D orbit perspective.
    Perspective(PerspectiveCamera),
    /// 3D first-person flight.
    FirstPerson(FirstPersonCamera),
}

impl Camera {
    /// Short variant name, used in diagnostics.
    #[must_use]
    pub fn variant(&self) -> &'static str {
        match self {
            Self::Flat(_) => "flat",
            Self::Pixel(_) => "pixel",
            Self::Planar(_) => "planar",
            Self::Perspective(_) => "perspective",
            Self::FirstPerson(_) => "first-person",
        }
    }

    /// Whether this variant implements a capability.
    #[must_use]
    pub fn supports(&self, capability: Capability) -> bool {
        match self {
            Self::Flat(_) | Self::Pixel(_) => false,
            Self::Planar(_) => {
                matches!(capability, Capability::Pan | Capability::Zoom)
            }
            Self::Perspective(_) | Self::FirstPerson(_) => true,
        }
    }

    fn unsupported(&self, capability: Capability) -> Unsupported {
        Unsupported {
            variant: self.variant(),
            capability,
        }
    }

    /// Projection matrix mapping entity coordinates into NDC at the given
    /// viewport extents. Always supported.
    #[must_use]
    pub fn project(&self, viewport: Viewport) -> Mat4 {
        match self {
            Self::Flat(_) => Mat4::IDENTITY,
            Self::Pixel(_) => PixelCamera::projection(viewport),
            Self::Planar(planar) => planar.projection(),
            Self::Perspective(persp) => persp.projection(viewport),
            Self::FirstPerson(fp) => fp.projection(viewport),
        }
    }

    /// Translate the view by a normalized delta.
    ///
    /// Planar cameras translate the ground plane; perspective cameras slide
    /// the orbit target across the view plane; first-person cameras fly the
    /// eye along local right (x) and forward (y).
    pub fn pan(&mut self, delta: Vec2) -> Result<(), Unsupported> {
        match self {
            Self::Flat(_) | Self::Pixel(_) => {
                Err(self.unsupported(Capability::Pan))
            }
            Self::Planar(planar) => {
                planar.pan(delta);
                Ok(())
            }
            Self::Perspective(persp) => {
                persp.pan(delta);
                Ok(())
            }
            Self::FirstPerson(fp) => {
                fp.fly(delta);
                Ok(())
            }
        }
    }

    /// Zoom by a normalized delta, anchored at `center` (NDC).
    ///
    /// Planar cameras scale about the anchor; perspective cameras dolly
    /// toward the orbit target; first-person cameras move along the look
    /// direction. The anchor is ignored by the 3D variants.
    pub fn zoom(&mut self, delta: Vec2, center: Vec2) -> Result<(), Unsupported> {
        match self {
            Self::Flat(_) | Self::Pixel(_) => {
                Err(self.unsupported(Capability::Zoom))
            }
            Self::Planar(planar) => {
                planar.zoom(delta, center);
                Ok(())
            }
            Self::Perspective(persp) => {
                persp.zoom(delta.x + delta.y);
                Ok(())
            }
            Self::FirstPerson(fp) => {
                fp.zoom(delta.x + delta.y);
                Ok(())
            }
        }
    }

    /// Rotate by a normalized delta (yaw from x, pitch from y).
    pub fn rotate(&mut self, delta: Vec2) -> Result<(), Unsupported> {
        match self {
            Self::Flat(_) | Self::Pixel(_) | Self::Planar(_) => {
                Err(self.unsupported(Capability::Rotate))
            }
            Self::Perspective(persp) => {
                persp.rotate(delta);
                Ok(())
            }
            Self::FirstPerson(fp) => {
                fp.rotate(delta);
                Ok(())
            }
        }
    }

    /// World-space eye position, for lighting/uniform purposes.
    ///
    /// Planar variants have no meaningful eye; they report the origin.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        match self {
            Self::Flat(_) | Self::Pixel(_) | Self::Planar(_) => Vec3::ZERO,
            Self::Perspective(persp) => persp.eye(),
            Self::FirstPerson(fp) => fp.eye(),
        }
    }
}
