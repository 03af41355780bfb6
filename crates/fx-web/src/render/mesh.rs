use bytemuck::{Pod, Zeroable};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

// (outward normal, u, v) per face with u x v == normal, so each quad winds
// counter-clockwise seen from outside.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

const QUAD_CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// Axis-aligned box centred at the origin: 4 vertices and 2 triangles per
/// face, one flat colour per face.
pub fn box_mesh(size: Vec3, face_colors: &[[f32; 3]; 6]) -> (Vec<MeshVertex>, Vec<u16>) {
    let half = size * 0.5;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (face, &(normal, u, v)) in FACES.iter().enumerate() {
        let base = vertices.len() as u16;
        for &(su, sv) in &QUAD_CORNERS {
            let corner = (normal + u * su + v * sv) * half;
            vertices.push(MeshVertex {
                position: corner.to_array(),
                normal: normal.to_array(),
                color: face_colors[face],
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    (vertices, indices)
}
