// Host-side tests for the web constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(ORIENTATION_SETTLE_MS > 0);
    assert!(SPARKLE_POINT_SCALE > 0.0);
    assert!(BOOK_AMBIENT > 0.0 && BOOK_AMBIENT < 1.0);
    assert!((BOOK_AMBIENT - 34.0 / 255.0).abs() < 1e-6);
}

#[test]
fn element_hooks_are_distinct() {
    let ids = [BOOK_CONTAINER_ID, SPARKLES_CONTAINER_ID, CURSOR_ELEMENT_ID];
    for id in ids {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "ids are passed without the selector prefix");
    }
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);
    assert!(!HIDDEN_CLASS.contains(' '));
}

#[test]
fn colours_are_normalized() {
    for face in BOOK_FACE_COLORS {
        for c in face {
            assert!((0.0..=1.0).contains(&c));
        }
    }
    for c in CLEAR_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
    assert_eq!(CLEAR_COLOR[3], 0.0, "canvases must stay transparent");
}

#[test]
fn light_direction_is_unit_length() {
    let [x, y, z] = BOOK_LIGHT_DIR;
    assert!(((x * x + y * y + z * z).sqrt() - 1.0).abs() < 1e-6);
}
