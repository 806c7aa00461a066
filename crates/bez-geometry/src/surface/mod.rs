//! Surface traits and implementations.

mod bezier;

use bez_math::{Point3, Vector3};

pub use bezier::BezierSurface;

/// Sampled surface points: one row per `u` sample, one column per `v` sample.
pub type PointGrid = Vec<Vec<Point3>>;

/// Trait for parametric surfaces in 3D space.
///
/// Rows of a sampled grid follow `u`, columns follow `v`.
pub trait Surface: Send + Sync {
    /// Evaluate the surface at parameters `(u, v)`.
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// Unit normal at `(u, v)`.
    fn normal_at(&self, u: f64, v: f64) -> Vector3;

    /// Return the u-parameter domain `(u_min, u_max)`.
    fn domain_u(&self) -> (f64, f64);

    /// Return the v-parameter domain `(v_min, v_max)`.
    fn domain_v(&self) -> (f64, f64);
}
