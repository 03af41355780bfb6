// Host-side tests for the deterministic sparkle appearance model.

use fx_core::*;

fn particle(spawn_time: f32) -> Particle {
    Particle {
        position: [0.0; 3],
        size: 0.8,
        spawn_time,
    }
}

#[test]
fn hash_is_deterministic_and_in_unit_range() {
    let mut seed = -50.0_f32;
    while seed < 500.0 {
        let h = hash01(seed);
        assert!((0.0..1.0).contains(&h), "hash01({}) = {}", seed, h);
        assert_eq!(h, hash01(seed));
        seed += 0.37;
    }
}

#[test]
fn lifetime_stays_in_range() {
    for i in 0..1000 {
        let life = lifetime(i as f32 * 0.013);
        assert!((0.5..1.0).contains(&life));
    }
}

#[test]
fn unused_slot_is_hidden_off_screen() {
    let a = appearance(&particle(UNUSED_SPAWN_TIME), 42.0);
    assert!(!a.visible);
    assert_eq!(a.size, 0.0);
    assert!(a.offset.x >= UNUSED_OFFSET - 1.0);
    assert_eq!(age(UNUSED_SPAWN_TIME, 42.0), 0.0);
}

#[test]
fn young_particle_grows_in() {
    let p = particle(2.0);
    let a = appearance(&p, 2.2);
    assert!(a.visible);
    assert!(a.size > 0.0 && a.size <= p.size);
    assert!((0.0..=1.0).contains(&a.flicker));
}

#[test]
fn particle_falls_and_drifts_within_bounds() {
    let p = particle(7.25);
    let mut prev_y = 0.0;
    let mut now = 7.26;
    while is_visible(p.spawn_time, now) {
        let a = appearance(&p, now);
        assert!(a.offset.y < prev_y);
        assert!(a.offset.x.abs() <= DRIFT_RANGE + 1e-6);
        prev_y = a.offset.y;
        now += 0.05;
    }
    let dead = appearance(&p, now);
    assert!(!dead.visible);
    assert_eq!(dead.size, 0.0);
}

#[test]
fn replay_is_reproducible() {
    let p = particle(3.5);
    for step in 0..40 {
        let now = 3.5 + step as f32 * 0.04;
        assert_eq!(appearance(&p, now), appearance(&p, now));
    }
}

#[test]
fn expired_particle_is_invisible() {
    let p = particle(1.0);
    assert!(!is_visible(p.spawn_time, 1.0 + 3.0));
    assert_eq!(appearance(&p, 4.0).size, 0.0);
}
