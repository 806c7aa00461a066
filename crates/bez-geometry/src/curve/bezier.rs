//! Bezier curve over a control polygon of up to sixteen points.

use bez_core::traits::BoundingBox;
use bez_core::{BezError, Result};
use bez_math::{Aabb3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;
use crate::bernstein::{self, PowerTable};
use crate::tessellate::{parameter_samples, EvalMethod};

/// A Bezier curve of degree `control_points.len() - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point3>", into = "Vec<Point3>")]
pub struct BezierCurve {
    control_points: Vec<Point3>,
}

impl BezierCurve {
    /// Build a curve from 1 to [`MAX_CONTROL_POINTS`](crate::MAX_CONTROL_POINTS) points.
    pub fn new(control_points: Vec<Point3>) -> Result<Self> {
        bernstein::check_count(control_points.len(), "curve")?;
        Ok(Self { control_points })
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    /// Replace the whole control polygon. The current one is kept on error.
    pub fn set_control_points(&mut self, control_points: Vec<Point3>) -> Result<()> {
        bernstein::check_count(control_points.len(), "curve")?;
        self.control_points = control_points;
        Ok(())
    }

    /// `sum_i P_i * B(i, n)(u)` with a power table built for `u`.
    pub fn evaluate_analytical(&self, u: f64) -> Point3 {
        PowerTable::new(u, self.degree()).weighted_sum(&self.control_points)
    }

    pub fn evaluate_casteljau(&self, u: f64) -> Point3 {
        bernstein::casteljau(&self.control_points, u)
    }

    pub fn evaluate(&self, u: f64, method: EvalMethod) -> Point3 {
        match method {
            EvalMethod::Analytical => self.evaluate_analytical(u),
            EvalMethod::Casteljau => self.evaluate_casteljau(u),
        }
    }

    /// Derivative with respect to `u`.
    pub fn tangent(&self, u: f64) -> Vector3 {
        bernstein::hodograph(&self.control_points, u)
    }

    /// Sample the curve at `0, step, 2 * step, ...` into `out`.
    ///
    /// `out` is cleared first. On an invalid step it is left untouched.
    pub fn tessellate_into(
        &self,
        out: &mut Vec<Point3>,
        step: f64,
        method: EvalMethod,
    ) -> Result<()> {
        let samples = parameter_samples(step)?;
        log::debug!(
            "tessellating degree {} curve with step {} ({:?})",
            self.degree(),
            step,
            method
        );
        out.clear();
        out.extend(samples.map(|u| self.evaluate(u, method)));
        Ok(())
    }

    pub fn tessellate(&self, step: f64, method: EvalMethod) -> Result<Vec<Point3>> {
        let mut points = Vec::new();
        self.tessellate_into(&mut points, step, method)?;
        Ok(points)
    }

    /// Bounds of the control polygon, which contain the whole curve.
    pub fn bounds(&self) -> Aabb3 {
        Aabb3::from_points(&self.control_points)
            .unwrap_or(Aabb3::new(self.control_points[0], self.control_points[0]))
    }
}

impl TryFrom<Vec<Point3>> for BezierCurve {
    type Error = BezError;

    fn try_from(control_points: Vec<Point3>) -> Result<Self> {
        Self::new(control_points)
    }
}

impl From<BezierCurve> for Vec<Point3> {
    fn from(curve: BezierCurve) -> Self {
        curve.control_points
    }
}

impl BoundingBox for BezierCurve {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        let bounds = self.bounds();
        (bounds.min, bounds.max)
    }
}

impl Curve for BezierCurve {
    fn point_at(&self, t: f64) -> Point3 {
        self.evaluate_casteljau(t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.tangent(t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
