//! Bezier toolkit geometry: Bernstein basis, curves, and tensor-product surfaces.

pub mod bernstein;
pub mod curve;
pub mod surface;
pub mod tessellate;

pub use bernstein::{MAX_CONTROL_POINTS, MAX_DEGREE};
pub use curve::{BezierCurve, Curve};
pub use surface::{BezierSurface, PointGrid, Surface};
pub use tessellate::{EvalMethod, TessellationParams};
