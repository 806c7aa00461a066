//! Surface of revolution: sweep a sampled profile curve around the Y axis.

use bez_core::{BezError, Result, Tolerance};
use bez_geometry::{BezierCurve, TessellationParams};
use bez_math::transform::Transform;
use bez_math::{Point2, Point3};

use crate::triangulate::{MeshBuilder, TriangleMesh};

const FULL_TURN: f64 = 360.0;

fn check_rotation_step(rotation_step: f64) -> Result<()> {
    if rotation_step.is_finite() && rotation_step > 0.0 && rotation_step < FULL_TURN {
        Ok(())
    } else {
        Err(BezError::InvalidStep(format!(
            "rotation step must be in (0, 360) degrees, got {rotation_step}"
        )))
    }
}

/// Number of rings at angles `0, step, 2 * step, ...` strictly below 360.
fn ring_count(rotation_step: f64) -> Result<usize> {
    let tol = Tolerance::default();
    let too_fine = || {
        BezError::InvalidStep(format!(
            "rotation step {rotation_step} yields too many rings"
        ))
    };
    let whole = tol
        .whole_steps(FULL_TURN, rotation_step)
        .ok_or_else(too_fine)?;
    if tol.divides_angle(FULL_TURN, rotation_step) {
        Ok(whole)
    } else {
        whole.checked_add(1).ok_or_else(too_fine)
    }
}

/// Revolve `curve_points` about +Y in increments of `rotation_step` degrees.
///
/// Ring `j` holds the profile rotated by `j * rotation_step`; vertex `i` of
/// ring `j` has index `j * S + i` for `S` profile samples. Each ring is joined
/// to the next with two triangles per quad and the last ring wraps back to
/// ring 0. The seam only closes exactly when the step divides 360.
pub fn surface_of_revolution(curve_points: &[Point3], rotation_step: f64) -> Result<TriangleMesh> {
    if curve_points.is_empty() {
        return Err(BezError::EmptyControlPoints(
            "surface of revolution needs at least one profile sample".into(),
        ));
    }
    check_rotation_step(rotation_step)?;
    if !Tolerance::default().divides_angle(FULL_TURN, rotation_step) {
        log::warn!(
            "rotation step {} does not divide 360 degrees, the seam will not close",
            rotation_step
        );
    }

    let rings = ring_count(rotation_step)?;
    let samples = curve_points.len();
    let vertex_count = rings
        .checked_mul(samples)
        .filter(|&n| n <= u32::MAX as usize)
        .ok_or_else(|| {
            BezError::InvalidStep(format!(
                "{rings} rings of {samples} samples exceed the u32 vertex index range"
            ))
        })?;
    log::debug!(
        "revolving {} profile samples into {} rings of {} degrees",
        samples,
        rings,
        rotation_step
    );

    let mut mesh = TriangleMesh::new();
    mesh.positions.reserve(vertex_count);
    mesh.uvs.reserve(vertex_count);
    let v_span = (samples - 1).max(1) as f64;
    for j in 0..rings {
        let rotation = Transform::rotation_y_degrees(j as f64 * rotation_step);
        for (i, &p) in curve_points.iter().enumerate() {
            mesh.add_vertex(rotation.transform_point(p));
            mesh.uvs.push(Point2::new(j as f64 / rings as f64, i as f64 / v_span));
        }
    }

    let idx = |ring: usize, sample: usize| -> u32 { (ring * samples + sample) as u32 };
    for j in 0..rings {
        let next = (j + 1) % rings;
        for i in 0..samples - 1 {
            mesh.add_triangle(idx(j, i), idx(next, i), idx(j, i + 1));
            mesh.add_triangle(idx(next, i), idx(next, i + 1), idx(j, i + 1));
        }
    }
    Ok(mesh)
}

/// Sample `curve` with `params` and revolve the samples.
pub fn revolve_curve(
    curve: &BezierCurve,
    params: &TessellationParams,
    rotation_step: f64,
) -> Result<TriangleMesh> {
    check_rotation_step(rotation_step)?;
    let profile = curve.tessellate(params.step_u, params.method)?;
    surface_of_revolution(&profile, rotation_step)
}
