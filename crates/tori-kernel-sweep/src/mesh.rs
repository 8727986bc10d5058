//! Output buffers handed to the host.

use std::collections::HashMap;

use tori_kernel_math::{Point3, Transform};

/// A face of a [`PolyMesh`], as indices into its vertex buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Face {
    /// Cap fan triangle.
    Triangle([u32; 3]),
    /// Tube body quad.
    Quad([u32; 4]),
    /// Cap polygon covering a whole cross-section.
    Polygon(Vec<u32>),
}

impl Face {
    /// Vertex indices in winding order.
    pub fn indices(&self) -> &[u32] {
        match self {
            Face::Triangle(tri) => tri,
            Face::Quad(quad) => quad,
            Face::Polygon(poly) => poly,
        }
    }
}

/// Swept-surface mesh: a vertex buffer and faces referencing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Faces in emission order.
    pub faces: Vec<Face>,
}

/// Flat triangle buffers for renderers.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl PolyMesh {
    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// How many face corners reference each vertex.
    pub fn corner_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.vertices.len()];
        for face in &self.faces {
            for &i in face.indices() {
                counts[i as usize] += 1;
            }
        }
        counts
    }

    /// Count directed edges that lack exactly one opposite twin.
    ///
    /// Zero means the surface is closed and consistently wound.
    pub fn unpaired_edges(&self) -> usize {
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for face in &self.faces {
            let idx = face.indices();
            for (k, &from) in idx.iter().enumerate() {
                let to = idx[(k + 1) % idx.len()];
                *directed.entry((from, to)).or_default() += 1;
            }
        }
        directed
            .iter()
            .filter(|&(&(from, to), &count)| {
                count != 1 || directed.get(&(to, from)).copied() != Some(1)
            })
            .count()
    }

    /// Apply a transform to every vertex.
    pub fn transform(&mut self, t: &Transform) {
        for v in &mut self.vertices {
            *v = t.apply_point(v);
        }
    }

    /// Fan-triangulate every face into flat f32/u32 buffers.
    pub fn triangulate(&self) -> TriangleMesh {
        let vertices = self
            .vertices
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect();
        let mut indices = Vec::new();
        for face in &self.faces {
            let idx = face.indices();
            for k in 1..idx.len().saturating_sub(1) {
                indices.extend_from_slice(&[idx[0], idx[k], idx[k + 1]]);
            }
        }
        TriangleMesh { vertices, indices }
    }

    /// Signed volume enclosed by the faces (positive for outward winding).
    ///
    /// Only meaningful for closed meshes.
    pub fn signed_volume(&self) -> f64 {
        let mut vol = 0.0;
        for face in &self.faces {
            let idx = face.indices();
            let p0 = self.vertices[idx[0] as usize].coords;
            for k in 1..idx.len().saturating_sub(1) {
                let p1 = self.vertices[idx[k] as usize].coords;
                let p2 = self.vertices[idx[k + 1] as usize].coords;
                vol += p0.dot(&p1.cross(&p2));
            }
        }
        vol / 6.0
    }
}
