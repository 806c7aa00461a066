//! Twist: rotate cross-sections in-plane by an angle that depends on the
//! position along one axis.

use bez_core::{BezError, Result};
use bez_math::{Aabb3, Axis, Point3};
use bez_mesh::MeshBuilder;

use crate::frame::LocalFrame;

/// Default angle function: the axis coordinate itself, in radians.
pub fn identity_angle(coord: f64) -> f64 {
    coord
}

/// Rotate the components `(axis + 1) % 3` and `(axis + 2) % 3` of `p` by
/// `theta` radians.
pub fn twist_point(p: Point3, axis: Axis, theta: f64) -> Point3 {
    let (a, b) = axis.others();
    let (sin, cos) = theta.sin_cos();
    let x = p[a.index()];
    let y = p[b.index()];
    let mut out = p;
    out[a.index()] = x * cos - y * sin;
    out[b.index()] = x * sin + y * cos;
    out
}

fn twist_in_frame<M, F, P>(mesh: &mut M, frame: LocalFrame, axis: Axis, angle: F, predicate: P)
where
    M: MeshBuilder + ?Sized,
    F: Fn(f64) -> f64,
    P: Fn(Point3) -> bool,
{
    for i in 0..mesh.vertex_count() {
        let p = frame.to_local(mesh.vertex_position(i));
        mesh.set_vertex_position(i, p);
    }
    let mut moved = 0usize;
    for i in 0..mesh.vertex_count() {
        let p = mesh.vertex_position(i);
        if predicate(p) {
            mesh.set_vertex_position(i, twist_point(p, axis, angle(axis.component(p))));
            moved += 1;
        }
    }
    log::trace!("twisted {} of {} vertices", moved, mesh.vertex_count());
    frame.restore(mesh);
}

/// Twist the vertices for which `predicate` holds. Both `angle` and
/// `predicate` see local coordinates.
pub fn twist<M, F, P>(mesh: &mut M, axis: Axis, angle: F, predicate: P)
where
    M: MeshBuilder + ?Sized,
    F: Fn(f64) -> f64,
    P: Fn(Point3) -> bool,
{
    log::debug!("twist {:?} on {} vertices", axis, mesh.vertex_count());
    let frame = LocalFrame::of_mesh(mesh);
    twist_in_frame(mesh, frame, axis, angle, predicate);
}

/// Twist every vertex. Pass [`identity_angle`] for the plain helix.
pub fn global_twist<M, F>(mesh: &mut M, axis: Axis, angle: F)
where
    M: MeshBuilder + ?Sized,
    F: Fn(f64) -> f64,
{
    twist(mesh, axis, angle, |_| true);
}

/// Twist the vertices inside the world box `bounds`.
///
/// The box is moved into the mesh's local frame along with the mesh and the
/// membership test runs on local coordinates.
pub fn local_twist<M, F>(mesh: &mut M, axis: Axis, bounds: Aabb3, angle: F) -> Result<()>
where
    M: MeshBuilder + ?Sized,
    F: Fn(f64) -> f64,
{
    if !bounds.is_ordered() {
        return Err(BezError::InvalidArgument(format!(
            "twist box min {:?} exceeds max {:?}",
            bounds.min, bounds.max
        )));
    }
    let frame = LocalFrame::of_mesh(mesh);
    let local_bounds = frame.box_to_local(bounds);
    log::debug!(
        "local twist {:?} in local box {:?}..{:?}",
        axis,
        local_bounds.min,
        local_bounds.max
    );
    twist_in_frame(mesh, frame, axis, angle, |p| local_bounds.contains_point(p));
    Ok(())
}
