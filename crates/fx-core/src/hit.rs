use crate::camera::Ray;
use crate::transform::ObjectTransform;
use glam::Vec3;

/// Answers "does this pointer ray touch the object as currently posed?".
pub trait HitTester {
    fn hit(&self, ray: &Ray, transform: &ObjectTransform) -> bool;
}

/// Hit test against an axis-aligned box in object space, i.e. an oriented box
/// in world space once the transform is applied.
#[derive(Clone, Copy, Debug)]
pub struct BoxHitTester {
    half_extents: Vec3,
}

impl BoxHitTester {
    pub fn new(size: Vec3) -> Self {
        Self {
            half_extents: size * 0.5,
        }
    }

    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }
}

impl HitTester for BoxHitTester {
    fn hit(&self, ray: &Ray, transform: &ObjectTransform) -> bool {
        if transform.scale.is_nan() || transform.scale <= 0.0 {
            return false;
        }
        let inv = transform.model_matrix().inverse();
        let origin = inv.transform_point3(ray.origin);
        let dir = inv.transform_vector3(ray.dir);
        ray_box(origin, dir, self.half_extents).is_some()
    }
}

/// Slab test of a ray against a box centred at the origin.
///
/// Returns the entry distance along `dir` (0 when the origin is inside).
#[inline]
pub fn ray_box(origin: Vec3, dir: Vec3, half: Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let h = half[axis];
        if d.abs() < 1e-8 {
            if o < -h || o > h {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (-h - o) * inv;
        let mut t1 = (h - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    if t_max < 0.0 {
        return None;
    }
    Some(t_min.max(0.0))
}
