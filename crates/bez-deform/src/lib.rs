//! One-shot deformations applied in place to a built mesh.
//!
//! Every operation moves the mesh into its local frame (bounding-box centre at
//! the origin), transforms the vertices there, and moves it back.

pub mod frame;
pub mod taper;
pub mod twist;

pub use frame::LocalFrame;
pub use taper::{local_taper, taper, Taper, TaperBlend};
pub use twist::{global_twist, identity_angle, local_twist, twist, twist_point};
