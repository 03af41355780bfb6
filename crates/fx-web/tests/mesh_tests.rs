// Host-side tests for the book box mesh.

#![allow(dead_code)]
mod mesh {
    include!("../src/render/mesh.rs");
}

use glam::Vec3;
use mesh::*;

const COLORS: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0],
];

fn book() -> (Vec<MeshVertex>, Vec<u16>) {
    box_mesh(Vec3::new(3.5, 5.0, 0.5), &COLORS)
}

#[test]
fn four_vertices_and_two_triangles_per_face() {
    let (vertices, indices) = book();
    assert_eq!(vertices.len(), 24);
    assert_eq!(indices.len(), 36);
    assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    assert_eq!(std::mem::size_of::<MeshVertex>(), 36);
}

#[test]
fn vertices_sit_on_the_box_surface() {
    let (vertices, _) = book();
    let half = Vec3::new(1.75, 2.5, 0.25);
    for v in &vertices {
        let p = Vec3::from_array(v.position);
        assert_eq!(p.abs(), half, "{:?} is not a corner", p);
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-6);
        // The corner lies on the face the normal points out of.
        assert!((p.dot(n) - (half * n.abs()).length()).abs() < 1e-6);
    }
}

#[test]
fn triangles_wind_counter_clockwise_from_outside() {
    let (vertices, indices) = book();
    for tri in indices.chunks(3) {
        let a = Vec3::from_array(vertices[tri[0] as usize].position);
        let b = Vec3::from_array(vertices[tri[1] as usize].position);
        let c = Vec3::from_array(vertices[tri[2] as usize].position);
        let n = Vec3::from_array(vertices[tri[0] as usize].normal);
        assert!((b - a).cross(c - a).dot(n) > 0.0);
    }
}

#[test]
fn each_face_gets_its_colour() {
    let (vertices, _) = book();
    for (face, quad) in vertices.chunks(4).enumerate() {
        for v in quad {
            assert_eq!(v.color, COLORS[face]);
        }
    }
    // Front cover faces the camera.
    assert_eq!(vertices[16].normal, [0.0, 0.0, 1.0]);
}
