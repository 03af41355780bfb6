//! Cursor sparkle trail emitter.
//!
//! Pointer samples arrive from input events and from every animation tick
//! (re-using the last sample, so a resting cursor keeps sparkling). Each
//! sample asks the [`SpawnAccumulator`] how many particles are owed, projects
//! the pointer onto the particle plane, and lays the owed particles out along
//! the segment from the previous projected point so fast strokes leave a
//! continuous trail.

use crate::camera::Camera;
use crate::clock::Clock;
use crate::constants::*;
use crate::error::{FxError, Result};
use crate::ring::ParticleRing;
use crate::spawn::SpawnAccumulator;
use crate::viewport::Viewport;
use glam::{Vec2, Vec3};
use rand::Rng;

#[derive(Clone, Debug)]
pub struct EmitterConfig {
    pub capacity: usize,
    pub spawn_interval_ms: f64,
    pub camera_z: f32,
    /// Depth of the plane pointer samples are projected onto.
    pub plane_z: f32,
    /// Spawn-time spacing between particles emitted by the same call.
    pub order_epsilon: f32,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            capacity: SPARKLE_CAPACITY,
            spawn_interval_ms: SPARKLE_SPAWN_INTERVAL_MS,
            camera_z: SPARKLE_CAMERA_Z,
            plane_z: SPARKLE_PLANE_Z,
            order_epsilon: SPAWN_ORDER_EPSILON,
        }
    }
}

impl EmitterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(FxError::ZeroCapacity);
        }
        if self.spawn_interval_ms.is_nan() || self.spawn_interval_ms <= 0.0 {
            return Err(FxError::NonPositive {
                name: "spawn interval",
                value: self.spawn_interval_ms,
            });
        }
        Ok(())
    }
}

/// Point `i` of `n` evenly spaced along `prev -> current`, ending on
/// `current`. Without a previous point every particle lands on `current`.
#[inline]
pub fn trail_point(prev: Option<Vec3>, current: Vec3, i: usize, n: usize) -> (f32, Vec3) {
    let ratio = (i + 1) as f32 / n as f32;
    let point = match prev {
        Some(prev) => prev.lerp(current, ratio),
        None => current,
    };
    (ratio, point)
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PointerSample {
    client: Vec2,
}

pub struct ParticleEmitter<C: Clock> {
    config: EmitterConfig,
    clock: C,
    session_start_ms: f64,
    accumulator: SpawnAccumulator,
    ring: ParticleRing,
    camera: Camera,
    viewport: Viewport,
    last_sample: Option<PointerSample>,
    prev_position: Option<Vec3>,
    pointer_inside: bool,
    fresh_gesture: bool,
}

impl<C: Clock> ParticleEmitter<C> {
    pub fn new<R: Rng + ?Sized>(
        config: EmitterConfig,
        clock: C,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        let ring = ParticleRing::new(config.capacity, rng)?;
        let mut camera = Camera::looking_at_origin(config.camera_z, 1.0);
        camera.set_viewport(viewport);
        let session_start_ms = clock.now_ms();
        Ok(Self {
            accumulator: SpawnAccumulator::new(config.spawn_interval_ms),
            config,
            clock,
            session_start_ms,
            ring,
            camera,
            viewport,
            last_sample: None,
            prev_position: None,
            pointer_inside: true,
            fresh_gesture: true,
        })
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if self.camera.set_viewport(viewport) {
            self.viewport = viewport;
        }
    }

    /// Seconds since the emitter was created; the shader's time base.
    pub fn elapsed_secs(&self) -> f32 {
        ((self.clock.now_ms() - self.session_start_ms) / 1000.0) as f32
    }

    /// Feed a pointer position in client pixels. Returns how many particles
    /// were written.
    pub fn on_pointer_sample(&mut self, client_x: f32, client_y: f32, first_of_gesture: bool) -> usize {
        self.last_sample = Some(PointerSample {
            client: Vec2::new(client_x, client_y),
        });
        let owed = self.accumulator.take(self.clock.now_ms(), first_of_gesture) as usize;
        if owed == 0 || !self.pointer_inside {
            return 0;
        }
        let Some(ndc) = self.viewport.to_ndc(client_x, client_y) else {
            return 0;
        };
        let Some(position) = self.camera.project_to_plane_z(ndc, self.config.plane_z) else {
            return 0;
        };
        self.emit(position, owed)
    }

    /// Mouse move; the first one after entering the window starts a gesture.
    pub fn on_mouse_move(&mut self, client_x: f32, client_y: f32) -> usize {
        let first = std::mem::take(&mut self.fresh_gesture);
        self.on_pointer_sample(client_x, client_y, first)
    }

    pub fn on_touch_start(&mut self, client_x: f32, client_y: f32) -> usize {
        self.prev_position = None;
        self.on_pointer_sample(client_x, client_y, true)
    }

    pub fn on_touch_move(&mut self, client_x: f32, client_y: f32) -> usize {
        self.on_pointer_sample(client_x, client_y, false)
    }

    /// Finger lifted: the trail ends here and a resting touch point does not
    /// keep emitting.
    pub fn on_touch_end(&mut self) {
        self.prev_position = None;
        self.last_sample = None;
    }

    /// Pointer left the window: drop both the trail anchor and the resting
    /// sample so ticks after re-entry cannot emit at the exit point.
    pub fn on_window_leave(&mut self) {
        self.pointer_inside = false;
        self.prev_position = None;
        self.last_sample = None;
    }

    pub fn on_window_enter(&mut self) {
        self.pointer_inside = true;
        self.fresh_gesture = true;
    }

    /// Per-frame update. Re-samples the last pointer position and returns the
    /// session time for the shader's `current_time` uniform.
    pub fn on_animation_tick(&mut self) -> f32 {
        if let Some(sample) = self.last_sample {
            self.on_pointer_sample(sample.client.x, sample.client.y, false);
        }
        self.elapsed_secs()
    }

    pub fn ring(&self) -> &ParticleRing {
        &self.ring
    }

    pub fn take_dirty(&mut self) -> bool {
        self.ring.take_dirty()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    pub fn previous_position(&self) -> Option<Vec3> {
        self.prev_position
    }

    fn emit(&mut self, position: Vec3, owed: usize) -> usize {
        let now = self.elapsed_secs();
        // Anything beyond one full ring would be overwritten by this same call.
        let skipped = owed.saturating_sub(self.ring.capacity());
        if skipped > 0 {
            log::debug!("[sparkles] backlog clipped: {} of {} owed", skipped, owed);
            self.ring.skip(skipped);
        }
        for i in skipped..owed {
            let (ratio, point) = trail_point(self.prev_position, position, i, owed);
            self.ring.write(point, now + ratio * self.config.order_epsilon);
        }
        self.prev_position = Some(position);
        owed - skipped
    }
}
