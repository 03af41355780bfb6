use crate::constants::UNUSED_SPAWN_TIME;
use crate::error::{FxError, Result};
use crate::sparkle;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rand::Rng;

/// One particle slot, laid out to be uploaded as a GPU instance.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Particle {
    pub position: [f32; 3],
    pub size: f32,
    /// Session time in seconds, or [`UNUSED_SPAWN_TIME`] for a fresh slot.
    pub spawn_time: f32,
}

impl Particle {
    #[inline]
    pub fn is_spawned(&self) -> bool {
        self.spawn_time >= 0.0
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Fixed-capacity particle buffer overwritten in circular order.
#[derive(Clone, Debug)]
pub struct ParticleRing {
    slots: Vec<Particle>,
    cursor: usize,
    dirty: bool,
}

impl ParticleRing {
    /// Allocate `capacity` unused slots, each with a size drawn once from
    /// `rng` and kept for the lifetime of the ring.
    pub fn new<R: Rng + ?Sized>(capacity: usize, rng: &mut R) -> Result<Self> {
        if capacity == 0 {
            return Err(FxError::ZeroCapacity);
        }
        let slots = (0..capacity)
            .map(|_| {
                let r: f32 = rng.gen();
                Particle {
                    position: [0.0; 3],
                    size: r * r / 2.0 + 0.5,
                    spawn_time: UNUSED_SPAWN_TIME,
                }
            })
            .collect();
        Ok(Self {
            slots,
            cursor: 0,
            dirty: true,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot the next write lands in.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slots(&self) -> &[Particle] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.slots.get(index)
    }

    /// Overwrite the slot under the cursor and advance. Returns the slot.
    pub fn write(&mut self, position: Vec3, spawn_time: f32) -> usize {
        let index = self.cursor;
        let slot = &mut self.slots[index];
        slot.position = position.to_array();
        slot.spawn_time = spawn_time;
        self.cursor = (index + 1) % self.slots.len();
        self.dirty = true;
        index
    }

    /// Advance the cursor as if `count` particles had been written.
    pub fn skip(&mut self, count: usize) {
        self.cursor = (self.cursor + count % self.slots.len()) % self.slots.len();
    }

    /// True once after any write; the renderer re-uploads then.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.slots)
    }

    /// Particles still visible at session time `now`.
    pub fn live_count(&self, now: f32) -> usize {
        self.slots
            .iter()
            .filter(|p| sparkle::is_visible(p.spawn_time, now))
            .count()
    }
}
