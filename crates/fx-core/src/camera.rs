//! Perspective camera shared by the book and sparkle scenes.
//!
//! Both scenes use a fixed eye on the +Z axis looking at the origin, so the
//! only state that changes at runtime is the aspect ratio.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};
use crate::viewport::Viewport;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// World-space ray with a normalized direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at `(0, 0, distance)` looking at the origin.
    pub fn looking_at_origin(distance: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio. Degenerate viewports leave the camera as is.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        match viewport.aspect() {
            Some(aspect) => {
                self.aspect = aspect;
                true
            }
            None => false,
        }
    }

    /// Height of the view frustum at `distance` in front of the eye.
    #[inline]
    pub fn visible_height_at(&self, distance: f32) -> f32 {
        2.0 * distance * (self.fovy_radians * 0.5).tan()
    }

    #[inline]
    pub fn visible_width_at(&self, distance: f32) -> f32 {
        self.visible_height_at(distance) * self.aspect
    }

    /// World-space ray through a point given in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p_far: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p_far - self.eye).normalize(),
        }
    }

    /// Project an NDC point onto the plane `z = plane_z`.
    ///
    /// Returns `None` when the ray runs parallel to the plane or the plane is
    /// behind the eye.
    pub fn project_to_plane_z(&self, ndc: Vec2, plane_z: f32) -> Option<Vec3> {
        let ray = self.ray_from_ndc(ndc);
        if ray.dir.z.abs() <= 1e-6 {
            return None;
        }
        let t = (plane_z - ray.origin.z) / ray.dir.z;
        (t >= 0.0).then(|| ray.at(t))
    }
}
