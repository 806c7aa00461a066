//! Tensor-product Bezier surface.

use bez_core::traits::BoundingBox;
use bez_core::{BezError, Result};
use bez_math::{Aabb3, DVec3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{PointGrid, Surface};
use crate::bernstein::{self, PowerTable};
use crate::tessellate::{parameter_samples, EvalMethod};

/// A Bezier surface over a grid of control points.
///
/// `control_points[i][j]` is row `i` (the `u` direction) and column `j` (the
/// `v` direction). Rows should all have the same length; when they do not,
/// each row is treated as a curve of its own degree in `v`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Point3>>", into = "Vec<Vec<Point3>>")]
pub struct BezierSurface {
    control_points: Vec<Vec<Point3>>,
}

fn check_net(control_points: &[Vec<Point3>]) -> Result<()> {
    bernstein::check_count(control_points.len(), "surface")?;
    for (i, row) in control_points.iter().enumerate() {
        bernstein::check_count(row.len(), &format!("surface row {i}"))?;
    }
    Ok(())
}

impl BezierSurface {
    /// Build a surface from 1 to 16 rows of 1 to 16 points each.
    pub fn new(control_points: Vec<Vec<Point3>>) -> Result<Self> {
        check_net(&control_points)?;
        Ok(Self { control_points })
    }

    pub fn control_points(&self) -> &[Vec<Point3>] {
        &self.control_points
    }

    /// Replace the whole control net. The current one is kept on error.
    pub fn set_control_points(&mut self, control_points: Vec<Vec<Point3>>) -> Result<()> {
        check_net(&control_points)?;
        self.control_points = control_points;
        Ok(())
    }

    pub fn degree_u(&self) -> usize {
        self.control_points.len() - 1
    }

    /// Degree of the longest row.
    pub fn degree_v(&self) -> usize {
        self.control_points
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(1)
            - 1
    }

    pub fn is_uniform(&self) -> bool {
        let len = self.control_points[0].len();
        self.control_points.iter().all(|row| row.len() == len)
    }

    /// `sum_i sum_j P_ij * Bu(i, n)(u) * Bv(j, m_i)(v)`.
    pub fn evaluate_analytical(&self, u: f64, v: f64) -> Point3 {
        let pu = PowerTable::new(u, self.degree_u());
        let pv = PowerTable::new(v, self.degree_v());
        self.weighted_sum(&pu, &pv)
    }

    fn weighted_sum(&self, pu: &PowerTable, pv: &PowerTable) -> Point3 {
        let n = self.degree_u();
        self.control_points
            .iter()
            .enumerate()
            .fold(DVec3::ZERO, |acc, (i, row)| {
                acc + pv.weighted_sum(row) * pu.basis(i, n)
            })
    }

    /// Reduce every row on `v`, then the resulting column on `u`.
    pub fn evaluate_casteljau(&self, u: f64, v: f64) -> Point3 {
        let column = self.column_at(v);
        bernstein::casteljau(&column, u)
    }

    fn column_at(&self, v: f64) -> Vec<Point3> {
        self.control_points
            .iter()
            .map(|row| bernstein::casteljau(row, v))
            .collect()
    }

    pub fn evaluate(&self, u: f64, v: f64, method: EvalMethod) -> Point3 {
        match method {
            EvalMethod::Analytical => self.evaluate_analytical(u, v),
            EvalMethod::Casteljau => self.evaluate_casteljau(u, v),
        }
    }

    /// Partial derivatives `(dS/du, dS/dv)`.
    pub fn partials(&self, u: f64, v: f64) -> (Vector3, Vector3) {
        let du = bernstein::hodograph(&self.column_at(v), u);

        let pu = PowerTable::new(u, self.degree_u());
        let n = self.degree_u();
        let dv = self
            .control_points
            .iter()
            .enumerate()
            .fold(DVec3::ZERO, |acc, (i, row)| {
                acc + bernstein::hodograph(row, v) * pu.basis(i, n)
            });
        (du, dv)
    }

    /// Unit normal `du x dv`, or +Z where the patch is degenerate.
    pub fn normal(&self, u: f64, v: f64) -> Vector3 {
        let (du, dv) = self.partials(u, v);
        let n = du.cross(dv);
        let len = n.length();
        if len < 1e-15 {
            DVec3::Z
        } else {
            n / len
        }
    }

    /// Sample the surface on a `u` by `v` grid into `out`.
    ///
    /// Outer rows follow `u`, columns follow `v`. `out` is cleared first and
    /// left untouched if either step is invalid.
    pub fn tessellate_into(
        &self,
        out: &mut PointGrid,
        step_u: f64,
        step_v: f64,
        method: EvalMethod,
    ) -> Result<()> {
        let us = parameter_samples(step_u)?;
        let vs = parameter_samples(step_v)?;
        log::debug!(
            "tessellating degree ({}, {}) surface with steps ({}, {}) ({:?})",
            self.degree_u(),
            self.degree_v(),
            step_u,
            step_v,
            method
        );

        out.clear();
        match method {
            EvalMethod::Analytical => {
                // The u table only changes between rows.
                for u in us {
                    let pu = PowerTable::new(u, self.degree_u());
                    let row = vs
                        .clone()
                        .map(|v| self.weighted_sum(&pu, &PowerTable::new(v, self.degree_v())))
                        .collect();
                    out.push(row);
                }
            }
            EvalMethod::Casteljau => {
                for u in us {
                    out.push(vs.clone().map(|v| self.evaluate_casteljau(u, v)).collect());
                }
            }
        }
        log::trace!("surface grid has {} rows", out.len());
        Ok(())
    }

    pub fn tessellate(&self, step_u: f64, step_v: f64, method: EvalMethod) -> Result<PointGrid> {
        let mut grid = Vec::new();
        self.tessellate_into(&mut grid, step_u, step_v, method)?;
        Ok(grid)
    }

    /// Bounds over every control point of the net.
    pub fn bounds(&self) -> Aabb3 {
        let first = self.control_points[0][0];
        Aabb3::from_point_iter(self.control_points.iter().flatten().copied())
            .unwrap_or(Aabb3::new(first, first))
    }
}

impl TryFrom<Vec<Vec<Point3>>> for BezierSurface {
    type Error = BezError;

    fn try_from(control_points: Vec<Vec<Point3>>) -> Result<Self> {
        Self::new(control_points)
    }
}

impl From<BezierSurface> for Vec<Vec<Point3>> {
    fn from(surface: BezierSurface) -> Self {
        surface.control_points
    }
}

impl BoundingBox for BezierSurface {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        let bounds = self.bounds();
        (bounds.min, bounds.max)
    }
}

impl Surface for BezierSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        self.evaluate_casteljau(u, v)
    }

    fn normal_at(&self, u: f64, v: f64) -> Vector3 {
        self.normal(u, v)
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
