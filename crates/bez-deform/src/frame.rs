use bez_math::{Aabb3, Axis, Point3, Vector3};
use bez_mesh::MeshBuilder;

/// Translation between world space and a mesh's local space, whose origin is
/// the centre of the mesh bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    center: Point3,
}

impl LocalFrame {
    /// The frame of `mesh` as it is now, without moving any vertex.
    pub fn of_mesh<M: MeshBuilder + ?Sized>(mesh: &M) -> Self {
        Self {
            center: mesh.bounding_box().center(),
        }
    }

    /// World-space offset of the local origin.
    pub fn offset(&self) -> Vector3 {
        self.center
    }

    pub fn to_local(&self, p: Point3) -> Point3 {
        p - self.center
    }

    pub fn to_global(&self, p: Point3) -> Point3 {
        p + self.center
    }

    pub fn coordinate_to_local(&self, value: f64, axis: Axis) -> f64 {
        value - axis.component(self.center)
    }

    pub fn box_to_local(&self, bounds: Aabb3) -> Aabb3 {
        bounds.translated(-self.center)
    }

    /// Move every vertex of `mesh` into its local frame and return the frame.
    pub fn recenter<M: MeshBuilder + ?Sized>(mesh: &mut M) -> Self {
        let frame = Self::of_mesh(mesh);
        for i in 0..mesh.vertex_count() {
            let p = mesh.vertex_position(i);
            mesh.set_vertex_position(i, frame.to_local(p));
        }
        frame
    }

    /// Undo [`LocalFrame::recenter`].
    pub fn restore<M: MeshBuilder + ?Sized>(&self, mesh: &mut M) {
        for i in 0..mesh.vertex_count() {
            let p = mesh.vertex_position(i);
            mesh.set_vertex_position(i, self.to_global(p));
        }
    }
}
