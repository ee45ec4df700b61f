//! CPU-side geometry for the two demo meshes. Uploading it is up to the
//! renderer; this module only defines the data.

use bytemuck::{Pod, Zeroable};

/// Vertex: position + color, tightly packed (24 bytes).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    /// Colour is derived from position so the output is reproducible.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        let tint = |c: f32| (c * 0.5 + 0.5).clamp(0.0, 1.0);
        Self {
            pos: [x, y, z],
            color: [tint(x * 2.0), tint(y), tint(z * 2.0)],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeshKind {
    #[default]
    Cube,
    /// Flat fan of 18 triangles spanning [-1, 1] in X and Y.
    Pole,
}

impl MeshKind {
    pub fn build(self) -> MeshData {
        match self {
            MeshKind::Cube => cube(),
            MeshKind::Pole => pole(),
        }
    }

    pub const fn index_count(self) -> u32 {
        match self {
            MeshKind::Cube => 36,
            MeshKind::Pole => 54,
        }
    }
}

/// Indexed triangle list. Front faces wind clockwise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Non-empty, whole triangles, every index in range.
    pub fn is_valid(&self) -> bool {
        !self.vertices.is_empty()
            && !self.indices.is_empty()
            && self.indices.len() % 3 == 0
            && self
                .indices
                .iter()
                .all(|&i| (i as usize) < self.vertices.len())
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

fn cube() -> MeshData {
    let vertices = vec![
        Vertex::new(0.5, 0.5, 0.5),
        Vertex::new(-0.5, 0.5, -0.5),
        Vertex::new(-0.5, 0.5, 0.5),
        Vertex::new(0.5, -0.5, -0.5),
        Vertex::new(-0.5, -0.5, -0.5),
        Vertex::new(0.5, 0.5, -0.5),
        Vertex::new(0.5, -0.5, 0.5),
        Vertex::new(-0.5, -0.5, 0.5),
    ];
    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2,
        1, 3, 4,
        5, 6, 3,
        7, 3, 6,
        2, 4, 7,
        0, 7, 6,
        0, 5, 1,
        1, 5, 3,
        5, 0, 6,
        7, 4, 3,
        2, 1, 4,
        0, 2, 7,
    ];
    MeshData::new(vertices, indices)
}

fn pole() -> MeshData {
    // 0 = centre, 1..=9 top row, 10..=18 bottom row.
    let mut vertices = Vec::with_capacity(19);
    vertices.push(Vertex::new(0.0, 0.0, 0.0));
    for y in [1.0, -1.0] {
        for i in 0..9 {
            vertices.push(Vertex::new(-1.0 + 0.25 * i as f32, y, 0.0));
        }
    }

    let mut indices: Vec<u32> = Vec::with_capacity(54);
    for i in 1..9 {
        indices.extend_from_slice(&[0, i + 1, i]);
    }
    for i in 10..18 {
        indices.extend_from_slice(&[0, i, i + 1]);
    }
    // left, right
    indices.extend_from_slice(&[0, 1, 10, 0, 18, 9]);
    MeshData::new(vertices, indices)
}
