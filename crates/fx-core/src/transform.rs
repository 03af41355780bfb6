use glam::{EulerRot, Mat4, Quat, Vec3};

/// Rotation (Euler XYZ, radians) and uniform scale of the book.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectTransform {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub scale: f32,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            scale: 1.0,
        }
    }
}

impl ObjectTransform {
    #[inline]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation_x, self.rotation_y, 0.0)
    }

    /// Object-to-world matrix; the object sits at the origin.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation(), Vec3::ZERO)
    }
}
