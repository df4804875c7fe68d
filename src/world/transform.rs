//=========================================================================
// Transform
//=========================================================================
//
// Translation / rotation / scale in a right-handed, Y-up space where a
// node's forward is -Z and its right is +X.
//
// Composition goes through `Affine3A`, so parent * child and inverses
// behave like the matrices they stand for.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Affine3A, Mat3, Quat, Vec3};

//=== Transform ===========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    pub fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::from_translation(Vec3::new(x, y, z))
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    //--- Matrices ---------------------------------------------------------

    pub fn matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    pub fn from_matrix(matrix: Affine3A) -> Self {
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        Self { translation, rotation: rotation.normalize(), scale }
    }

    /// `self` applied after `child` (parent space ← child space).
    pub fn mul_transform(&self, child: &Transform) -> Transform {
        Self::from_matrix(self.matrix() * child.matrix())
    }

    pub fn inverse(&self) -> Transform {
        Self::from_matrix(self.matrix().inverse())
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.matrix().transform_point3(point)
    }

    //--- Basis ------------------------------------------------------------

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    //--- Rotation ---------------------------------------------------------

    /// Turns the transform so `forward()` points at `target`.
    ///
    /// Leaves the rotation untouched when `target` coincides with the
    /// translation or lies straight along `up`.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let Some(dir) = (target - self.translation).try_normalize() else {
            return;
        };
        let Some(right) = dir.cross(up).try_normalize() else {
            return;
        };
        let up = right.cross(dir);
        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, up, -dir)).normalize();
    }

    /// Rotates about a world-space axis through the transform's origin.
    pub fn rotate_world(&mut self, axis: Vec3, degrees: f32) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        self.rotation = (Quat::from_axis_angle(axis, degrees.to_radians()) * self.rotation).normalize();
    }

    /// Rotates about the transform's own Y axis.
    pub fn rotate_local_y(&mut self, degrees: f32) {
        self.rotation = (self.rotation * Quat::from_rotation_y(degrees.to_radians())).normalize();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
