//! Taper: scale cross-sections by a factor that depends on the position
//! along one axis.

use bez_core::traits::Validate;
use bez_core::{BezError, Result};
use bez_math::{Aabb3, Axis, Point3};
use bez_mesh::MeshBuilder;
use serde::{Deserialize, Serialize};

use crate::frame::LocalFrame;

/// How the scale factor moves across `[range_min, range_max]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaperBlend {
    /// `coeff + (1 - t) * coeff` for `t` in `[0, 1]` across the range: starts at
    /// `2 * coeff` on `range_min` (a jump from the factor 1 below the range)
    /// and reaches `coeff` on `range_max`.
    #[default]
    Overshoot,
    /// `1 + (coeff - 1) * t`, continuous on both ends of the range.
    Linear,
}

/// Taper parameters. The range is given in world coordinates along `axis`.
///
/// Deserializing goes through [`Taper::new`], so a loaded taper always has
/// `range_min < range_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TaperConfig")]
pub struct Taper {
    pub axis: Axis,
    pub coeff: f64,
    pub range_min: f64,
    pub range_max: f64,
    pub blend: TaperBlend,
}

/// Unchecked on-disk form of [`Taper`].
#[derive(Deserialize)]
struct TaperConfig {
    axis: Axis,
    coeff: f64,
    range_min: f64,
    range_max: f64,
    #[serde(default)]
    blend: TaperBlend,
}

impl TryFrom<TaperConfig> for Taper {
    type Error = BezError;

    fn try_from(config: TaperConfig) -> Result<Self> {
        Ok(Self::new(config.axis, config.coeff, config.range_min, config.range_max)?
            .with_blend(config.blend))
    }
}

fn check_range(range_min: f64, range_max: f64) -> Result<()> {
    if range_min.is_nan() || range_max.is_nan() || range_max <= range_min {
        return Err(BezError::DegenerateRange {
            min: range_min,
            max: range_max,
        });
    }
    Ok(())
}

impl Validate for Taper {
    fn validate(&self) -> Result<()> {
        check_range(self.range_min, self.range_max)
    }
}

impl Taper {
    pub fn new(axis: Axis, coeff: f64, range_min: f64, range_max: f64) -> Result<Self> {
        check_range(range_min, range_max)?;
        Ok(Self {
            axis,
            coeff,
            range_min,
            range_max,
            blend: TaperBlend::default(),
        })
    }

    pub fn with_blend(mut self, blend: TaperBlend) -> Self {
        self.blend = blend;
        self
    }

    /// 1 below the range, `coeff` above it, blended in between.
    ///
    /// Expects a range that passes [`Validate::validate`].
    pub fn scale_factor(&self, coord: f64) -> f64 {
        if coord < self.range_min {
            return 1.0;
        }
        if coord > self.range_max {
            return self.coeff;
        }
        let t = (coord - self.range_min) / (self.range_max - self.range_min);
        match self.blend {
            TaperBlend::Overshoot => self.coeff + (1.0 - t) * self.coeff,
            TaperBlend::Linear => 1.0 + (self.coeff - 1.0) * t,
        }
    }

    /// Scale the two coordinates other than `axis`; `p` must be local.
    pub fn apply_to_point(&self, p: Point3) -> Point3 {
        let r = self.scale_factor(self.axis.component(p));
        let (a, b) = self.axis.others();
        let mut out = p;
        out[a.index()] *= r;
        out[b.index()] *= r;
        out
    }

    fn in_frame(&self, frame: &LocalFrame) -> Self {
        Self {
            range_min: frame.coordinate_to_local(self.range_min, self.axis),
            range_max: frame.coordinate_to_local(self.range_max, self.axis),
            ..*self
        }
    }

    /// Taper every vertex. The range is read in world coordinates.
    ///
    /// Fails without touching the mesh if the range is degenerate.
    pub fn apply<M: MeshBuilder + ?Sized>(&self, mesh: &mut M) -> Result<()> {
        self.validate()?;
        log::debug!(
            "taper {:?} coeff {} over [{}, {}] on {} vertices",
            self.axis,
            self.coeff,
            self.range_min,
            self.range_max,
            mesh.vertex_count()
        );
        let frame = LocalFrame::recenter(mesh);
        let local = self.in_frame(&frame);
        for i in 0..mesh.vertex_count() {
            let p = mesh.vertex_position(i);
            mesh.set_vertex_position(i, local.apply_to_point(p));
        }
        frame.restore(mesh);
        Ok(())
    }

    /// Taper only the vertices that lie in the world-space box `bounds`.
    ///
    /// Membership is decided before the mesh is recentered.
    pub fn apply_in_box<M: MeshBuilder + ?Sized>(&self, mesh: &mut M, bounds: Aabb3) -> Result<()> {
        self.validate()?;
        if !bounds.is_ordered() {
            return Err(BezError::InvalidArgument(format!(
                "taper box min {:?} exceeds max {:?}",
                bounds.min, bounds.max
            )));
        }
        let members: Vec<usize> = (0..mesh.vertex_count())
            .filter(|&i| bounds.contains_point(mesh.vertex_position(i)))
            .collect();
        log::debug!(
            "local taper {:?} coeff {}: {} of {} vertices in box",
            self.axis,
            self.coeff,
            members.len(),
            mesh.vertex_count()
        );

        let frame = LocalFrame::recenter(mesh);
        let local = self.in_frame(&frame);
        for i in members {
            let p = mesh.vertex_position(i);
            mesh.set_vertex_position(i, local.apply_to_point(p));
        }
        frame.restore(mesh);
        Ok(())
    }
}

/// Taper the whole mesh along `axis` with the default blend.
pub fn taper<M: MeshBuilder + ?Sized>(
    mesh: &mut M,
    axis: Axis,
    coeff: f64,
    range_min: f64,
    range_max: f64,
) -> Result<()> {
    Taper::new(axis, coeff, range_min, range_max)?.apply(mesh)
}

/// Taper the vertices inside the world box `[p_min, p_max]`, blending over
/// the box extent along `axis`.
pub fn local_taper<M: MeshBuilder + ?Sized>(
    mesh: &mut M,
    axis: Axis,
    p_min: Point3,
    p_max: Point3,
    coeff: f64,
) -> Result<()> {
    let taper = Taper::new(axis, coeff, axis.component(p_min), axis.component(p_max))?;
    taper.apply_in_box(mesh, Aabb3::new(p_min, p_max))
}
