//! CPU mirror of the sparkle vertex shader.
//!
//! Every per-particle random quantity is derived from the spawn time through
//! [`hash01`], so a particle's whole life can be replayed from the two values
//! the ring stores (`spawn_time`, `size`). The WGSL program evaluates the same
//! formulas on the GPU.

use crate::ring::Particle;
use glam::Vec3;

/// Shader time runs slower than session time.
pub const AGE_RATE: f32 = 0.45;
/// Seconds (in shader time) of the grow-in ease.
pub const FADE_IN: f32 = 0.18;
pub const DRIFT_RANGE: f32 = 0.35;
/// Offset that throws unused slots off screen.
pub const UNUSED_OFFSET: f32 = 9999.0;

// Seed offsets, one per derived quantity.
const LIFETIME_SEED: f32 = 10.0;
const DRIFT_SEED: f32 = 20.0;
const FLUCTUATION_SEED: f32 = 30.0;
const FLICKER_SEED: f32 = 40.0;

/// `fract(sin(seed) * 43758.5453123)`, in `[0, 1)`.
#[inline]
pub fn hash01(seed: f32) -> f32 {
    let x = seed.sin() * 43758.545_f32;
    x - x.floor()
}

#[inline]
fn remap(value: f32, min_src: f32, max_src: f32, min_dst: f32, max_dst: f32) -> f32 {
    min_dst + (value - min_src) * (max_dst - min_dst) / (max_src - min_src)
}

#[inline]
fn cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let f = 2.0 * t - 2.0;
        0.5 * f * f * f + 1.0
    }
}

/// Lifetime in shader time, within `[0.5, 1.0)`.
#[inline]
pub fn lifetime(spawn_time: f32) -> f32 {
    hash01(spawn_time + LIFETIME_SEED) * 0.5 + 0.5
}

/// Age in shader time; unused slots never age.
#[inline]
pub fn age(spawn_time: f32, now: f32) -> f32 {
    if spawn_time < 0.0 {
        0.0
    } else {
        (now - spawn_time) * AGE_RATE
    }
}

#[inline]
pub fn is_visible(spawn_time: f32, now: f32) -> bool {
    let t = age(spawn_time, now);
    t > 0.0 && t <= lifetime(spawn_time)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkleAppearance {
    /// World-space offset from the spawn position.
    pub offset: Vec3,
    /// Size multiplier before perspective and the sprite scale.
    pub size: f32,
    /// Tint pulse in `[0, 1]`.
    pub flicker: f32,
    pub visible: bool,
}

pub fn appearance(particle: &Particle, now: f32) -> SparkleAppearance {
    let spawn = particle.spawn_time;
    let life = lifetime(spawn);
    let t = age(spawn, now);

    let drift = remap(hash01(spawn + DRIFT_SEED), 0.0, 1.0, -DRIFT_RANGE, DRIFT_RANGE);
    let ease = (1.0 - t / (life * 0.7)).max(0.0);
    let drift_amount = 1.0 - ease * ease * ease;
    let unused = if t == 0.0 { UNUSED_OFFSET } else { 0.0 };
    let offset = Vec3::new(drift * drift_amount + unused, -t * t * 0.4 - t * 0.3, 0.0);

    let fluctuation = (t * 10.0 + hash01(spawn + FLUCTUATION_SEED) * 6.0).sin() * 0.25 + 0.75;
    let in_out = if t > FADE_IN {
        let r = 1.0 - remap(t, FADE_IN, life, 1.0, 0.0);
        1.0 - r * r
    } else {
        cubic_in_out(t / FADE_IN)
    };
    let visible = t > 0.0 && t <= life;
    let size = if t > life {
        0.0
    } else {
        particle.size * in_out * fluctuation
    };
    let flicker = (hash01(spawn + FLICKER_SEED) * 6.0 + t * 20.0).sin() * 0.5 + 0.5;

    SparkleAppearance {
        offset,
        size,
        flicker,
        visible,
    }
}
