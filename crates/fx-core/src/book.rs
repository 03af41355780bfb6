//! Book scene controller: camera, responsive scale, hover tilt and hit
//! testing composed behind one instance.

use crate::camera::Camera;
use crate::constants::{BOOK_CAMERA_Z, BOOK_DEPTH, BOOK_HEIGHT, BOOK_WIDTH};
use crate::error::Result;
use crate::hit::{BoxHitTester, HitTester};
use crate::rotation::{RotationController, RotationMode, TiltConfig};
use crate::scale::{ScaleConfig, ScaleController};
use crate::transform::ObjectTransform;
use crate::viewport::Viewport;
use glam::{Vec2, Vec3};

#[derive(Clone, Debug)]
pub struct BookConfig {
    pub camera_z: f32,
    /// Unscaled box size in world units (width, height, depth).
    pub size: Vec3,
    pub tilt: TiltConfig,
    pub scale: ScaleConfig,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            camera_z: BOOK_CAMERA_Z,
            size: Vec3::new(BOOK_WIDTH, BOOK_HEIGHT, BOOK_DEPTH),
            tilt: TiltConfig::default(),
            scale: ScaleConfig::default(),
        }
    }
}

impl BookConfig {
    pub fn validate(&self) -> Result<()> {
        self.tilt.validate()?;
        self.scale.validate()
    }
}

pub struct BookController<H: HitTester = BoxHitTester> {
    camera: Camera,
    viewport: Viewport,
    scale: ScaleController,
    rotation: RotationController,
    hit_tester: H,
    transform: ObjectTransform,
    pointer_ndc: Vec2,
}

impl BookController<BoxHitTester> {
    pub fn new(config: BookConfig, now_s: f64) -> Result<Self> {
        let hit_tester = BoxHitTester::new(config.size);
        Self::with_hit_tester(config, hit_tester, now_s)
    }
}

impl<H: HitTester> BookController<H> {
    pub fn with_hit_tester(config: BookConfig, hit_tester: H, now_s: f64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            camera: Camera::looking_at_origin(config.camera_z, 1.0),
            viewport: Viewport::default(),
            scale: ScaleController::new(config.scale),
            rotation: RotationController::new(config.tilt, now_s),
            hit_tester,
            transform: ObjectTransform::default(),
            pointer_ndc: Vec2::ZERO,
        })
    }

    /// Apply a new container size. Returns `false` (and schedules a retry)
    /// when the container has no area yet.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if !self.camera.set_viewport(viewport) {
            self.scale.on_resize(viewport, &self.camera);
            return false;
        }
        self.viewport = viewport;
        match self.scale.on_resize(viewport, &self.camera) {
            Some(scale) => {
                self.transform.scale = scale;
                true
            }
            None => false,
        }
    }

    /// True when a previous resize was skipped and should be retried now.
    pub fn take_retry(&mut self) -> bool {
        self.scale.take_retry()
    }

    /// Pointer moved over the canvas; hit-tests against the current pose.
    pub fn pointer_move(&mut self, ndc: Vec2) -> bool {
        self.pointer_ndc = ndc;
        let ray = self.camera.ray_from_ndc(ndc);
        let hovering = self.hit_tester.hit(&ray, &self.transform);
        self.rotation.set_hovering(hovering);
        hovering
    }

    pub fn pointer_leave(&mut self) {
        self.rotation.set_hovering(false);
    }

    pub fn tick(&mut self, now_s: f64) -> ObjectTransform {
        let (x, y) = self.rotation.tick(now_s, self.pointer_ndc);
        self.transform.rotation_x = x;
        self.transform.rotation_y = y;
        self.transform
    }

    pub fn mode(&self) -> RotationMode {
        self.rotation.mode()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn transform(&self) -> ObjectTransform {
        self.transform
    }

    pub fn rotation(&self) -> &RotationController {
        &self.rotation
    }
}
