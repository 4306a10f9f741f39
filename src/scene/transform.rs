use glam::{Mat4, Quat, Vec3};

/// Local transform of a scene entity.
///
/// Most entities carry a translation/rotation/scale triple; entities that
/// need a shear or a pre-baked projective warp can hold a full 4x4 matrix
/// instead. Both forms compose through [`Transform::matrix`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Translation, rotation, scale — composed as `T * R * S`.
    Trs {
        /// Translation offset.
        translation: Vec3,
        /// Rotation quaternion.
        rotation: Quat,
        /// Per-axis scale factors.
        scale: Vec3,
    },
    /// An arbitrary affine/projective 4x4 matrix.
    Matrix(Mat4),
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self::Trs {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pure translation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self::Trs {
            translation,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Pure rotation.
    #[must_use]
    pub fn from_rotation(rotation: Quat) -> Self {
        Self::Trs {
            translation: Vec3::ZERO,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Pure per-axis scale.
    #[must_use]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::Trs {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale,
        }
    }

    /// Wrap a raw matrix.
    #[must_use]
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self::Matrix(matrix)
    }

    /// The transform as a column-major 4x4 matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Self::Trs {
                translation,
                rotation,
                scale,
            } => Mat4::from_scale_rotation_translation(
                scale, rotation, translation,
            ),
            Self::Matrix(m) => m,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
