// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn ndc_maps_rect_corners() {
    let (left, top, w, h) = (100.0, 50.0, 400.0, 200.0);
    assert_eq!(ndc_in_rect(100.0, 50.0, left, top, w, h), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(ndc_in_rect(500.0, 250.0, left, top, w, h), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(ndc_in_rect(300.0, 150.0, left, top, w, h), Some(Vec2::ZERO));
}

#[test]
fn ndc_outside_rect_exceeds_unit_range() {
    let ndc = ndc_in_rect(0.0, 0.0, 100.0, 100.0, 100.0, 100.0).unwrap();
    assert!(ndc.x < -1.0 && ndc.y > 1.0);
}

#[test]
fn ndc_rejects_empty_rect() {
    assert_eq!(ndc_in_rect(1.0, 1.0, 0.0, 0.0, 0.0, 100.0), None);
    assert_eq!(ndc_in_rect(1.0, 1.0, 0.0, 0.0, 100.0, -1.0), None);
    assert_eq!(ndc_in_rect(1.0, 1.0, 0.0, 0.0, f32::NAN, 100.0), None);
}

#[test]
fn px_formats_css_lengths() {
    assert_eq!(px(12.0), "12px");
    assert_eq!(px(12.5), "12.5px");
    assert_eq!(px(-3.0), "-3px");
}
