// Host-side tests for the book controller: camera, hit testing, scale and
// tilt composed end to end.

use fx_core::*;
use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

const DT: f64 = 1.0 / 60.0;

fn book() -> BookController {
    let mut b = BookController::new(BookConfig::default(), 0.0).unwrap();
    assert!(b.resize(Viewport::new(1000.0, 800.0)));
    b.tick(0.0);
    b
}

#[test]
fn camera_ray_through_centre_looks_down_z() {
    let camera = Camera::looking_at_origin(BOOK_CAMERA_Z, 1.5);
    let ray = camera.ray_from_ndc(Vec2::ZERO);
    assert!((ray.dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    let hit = camera.project_to_plane_z(Vec2::ZERO, 0.0).unwrap();
    assert!(hit.length() < 1e-4);
}

#[test]
fn projection_reaches_frustum_edge() {
    let camera = Camera::looking_at_origin(BOOK_CAMERA_Z, 2.0);
    let top = camera.project_to_plane_z(Vec2::new(0.0, 1.0), 0.0).unwrap();
    assert!((top.y - camera.visible_height_at(BOOK_CAMERA_Z) * 0.5).abs() < 1e-3);
    let right = camera.project_to_plane_z(Vec2::new(1.0, 0.0), 0.0).unwrap();
    assert!((right.x - camera.visible_width_at(BOOK_CAMERA_Z) * 0.5).abs() < 1e-3);
    assert_eq!(camera.project_to_plane_z(Vec2::ZERO, 10.0), None);
}

#[test]
fn box_hit_follows_rotation_and_scale() {
    let tester = BoxHitTester::new(Vec3::new(BOOK_WIDTH, BOOK_HEIGHT, BOOK_DEPTH));
    let ray = Ray {
        origin: Vec3::new(1.0, 0.0, 10.0),
        dir: Vec3::new(0.0, 0.0, -1.0),
    };
    let facing = ObjectTransform::default();
    assert!(tester.hit(&ray, &facing));

    let edge_on = ObjectTransform {
        rotation_y: FRAC_PI_2,
        ..ObjectTransform::default()
    };
    assert!(!tester.hit(&ray, &edge_on), "spine is only 0.5 wide");

    let far = Ray {
        origin: Vec3::new(3.0, 0.0, 10.0),
        dir: Vec3::new(0.0, 0.0, -1.0),
    };
    assert!(!tester.hit(&far, &facing));
    let doubled = ObjectTransform {
        scale: 2.0,
        ..ObjectTransform::default()
    };
    assert!(tester.hit(&far, &doubled));

    let collapsed = ObjectTransform {
        scale: 0.0,
        ..ObjectTransform::default()
    };
    assert!(!tester.hit(&ray, &collapsed));
}

#[test]
fn ray_box_ignores_boxes_behind_origin() {
    let half = Vec3::splat(1.0);
    assert_eq!(ray_box(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, half), None);
    assert_eq!(ray_box(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, half), Some(4.0));
    assert_eq!(ray_box(Vec3::ZERO, Vec3::X, half), Some(0.0));
}

#[test]
fn pointer_over_book_starts_tilting() {
    let mut b = book();
    assert_eq!(b.mode(), RotationMode::Autonomous);
    assert!(b.pointer_move(Vec2::ZERO));
    assert_eq!(b.mode(), RotationMode::Tilting);
    assert!(!b.pointer_move(Vec2::new(0.95, 0.95)));
    assert_eq!(b.mode(), RotationMode::Autonomous);
}

#[test]
fn enter_move_leave_decays_tilt_smoothly() {
    let mut b = book();
    assert!(b.pointer_move(Vec2::new(0.0, 0.3)));
    let mut now = 0.0;
    for _ in 0..60 {
        now += DT;
        b.tick(now);
    }
    let tilted = b.transform().rotation_x;
    assert!(tilted > 0.05);

    b.pointer_leave();
    now += DT;
    let after_one = b.tick(now).rotation_x;
    assert!(after_one > 0.0, "no snap to zero");
    assert!((after_one - tilted * (1.0 - TILT_SMOOTHING as f32)).abs() < 1e-5);

    let mut prev = after_one;
    for _ in 0..120 {
        now += DT;
        let x = b.tick(now).rotation_x;
        assert!(x < prev && x > 0.0);
        prev = x;
    }
    assert!(prev < 0.01);
}

#[test]
fn resize_to_small_mobile_uses_width_override() {
    let mut b = BookController::new(BookConfig::default(), 0.0).unwrap();
    assert!(b.resize(Viewport::new(1920.0, 1080.0)));
    let desktop = b.transform().scale;

    assert!(b.resize(Viewport::new(375.0, 700.0)));
    let visible_h = 2.0 * BOOK_CAMERA_Z * (CAMERA_FOV_DEG.to_radians() * 0.5).tan();
    let expected = SMALL_MOBILE_WIDTH_FRACTION * visible_h * (375.0 / 700.0) / BOOK_WIDTH;
    let scale = b.transform().scale;
    assert!((scale - expected).abs() < 1e-5, "{} vs {}", scale, expected);
    assert_ne!(scale, desktop);
    assert_eq!(b.viewport(), Viewport::new(375.0, 700.0));
    assert!((b.camera().aspect - 375.0 / 700.0).abs() < 1e-6);
}

#[test]
fn zero_sized_container_defers_scale() {
    let mut b = BookController::new(BookConfig::default(), 0.0).unwrap();
    assert!(!b.resize(Viewport::new(0.0, 0.0)));
    assert_eq!(b.transform().scale, 1.0);
    assert!(b.take_retry());
    assert!(!b.take_retry());
    assert!(b.resize(Viewport::new(800.0, 600.0)));
    assert!(b.transform().scale > 0.0);
    assert!(!b.take_retry());
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = BookConfig::default();
    config.tilt.angular_speed = -1.0;
    assert!(BookController::new(config, 0.0).is_err());
}
