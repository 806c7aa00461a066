use bez_core::traits::Validate;
use bez_core::{BezError, Result};
use bez_math::aabb::Aabb3;
use bez_math::{Point2, Point3, Vector3};

/// Minimal mesh capability the tessellators and deformations build on.
pub trait MeshBuilder {
    /// Append a vertex and return its index.
    fn add_vertex(&mut self, position: Point3) -> u32;

    fn add_triangle(&mut self, a: u32, b: u32, c: u32);

    fn vertex_count(&self) -> usize;

    fn vertex_position(&self, index: usize) -> Point3;

    fn set_vertex_position(&mut self, index: usize, position: Point3);

    /// Bounds of every vertex; a zero box for an empty mesh.
    fn bounding_box(&self) -> Aabb3;
}

/// GPU-ready triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
    pub uvs: Vec<Point2>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Compute flat (face) normals from triangle indices and assign to each vertex.
    ///
    /// For shared vertices this accumulates normals from all adjacent faces
    /// and normalizes the result (smooth shading approximation). Call again
    /// after a deformation.
    pub fn compute_normals(&mut self) {
        let n = self.positions.len();
        self.normals.clear();
        self.normals.resize(n, Vector3::ZERO);

        for [i0, i1, i2] in self.triangles().collect::<Vec<_>>() {
            let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);
            let p0 = self.positions[i0];
            let normal = (self.positions[i1] - p0).cross(self.positions[i2] - p0);
            self.normals[i0] += normal;
            self.normals[i1] += normal;
            self.normals[i2] += normal;
        }

        for n in &mut self.normals {
            let len = n.length();
            if len > 1e-12 {
                *n /= len;
            }
        }
    }
}

impl MeshBuilder for TriangleMesh {
    fn add_vertex(&mut self, position: Point3) -> u32 {
        self.positions.push(position);
        (self.positions.len() - 1) as u32
    }

    fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn vertex_position(&self, index: usize) -> Point3 {
        self.positions[index]
    }

    fn set_vertex_position(&mut self, index: usize, position: Point3) {
        self.positions[index] = position;
    }

    fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

impl Validate for TriangleMesh {
    fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(BezError::InvalidArgument(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        let n = self.positions.len();
        if let Some(&bad) = self.indices.iter().find(|&&i| i as usize >= n) {
            return Err(BezError::InvalidArgument(format!(
                "triangle index {bad} out of bounds for {n} vertices"
            )));
        }
        if !self.uvs.is_empty() && self.uvs.len() != n {
            return Err(BezError::InvalidArgument(format!(
                "{} uvs for {} vertices",
                self.uvs.len(),
                n
            )));
        }
        Ok(())
    }
}
