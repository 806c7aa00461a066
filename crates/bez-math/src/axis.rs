//! Coordinate axes used to parameterize deformations.

use bez_core::{BezError, Result};
use serde::{Deserialize, Serialize};

use crate::Point3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            other => Err(BezError::InvalidAxis(other)),
        }
    }

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two remaining axes in cyclic order: `(axis + 1) % 3`, `(axis + 2) % 3`.
    pub fn others(self) -> (Axis, Axis) {
        let i = self.index();
        (Self::ALL[(i + 1) % 3], Self::ALL[(i + 2) % 3])
    }

    pub fn component(self, p: Point3) -> f64 {
        p[self.index()]
    }
}

impl TryFrom<usize> for Axis {
    type Error = BezError;

    fn try_from(index: usize) -> Result<Self> {
        Self::from_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_from_index() {
        assert_eq!(Axis::from_index(0).unwrap(), Axis::X);
        assert_eq!(Axis::try_from(2).unwrap(), Axis::Z);
        assert_eq!(Axis::from_index(3), Err(BezError::InvalidAxis(3)));
    }

    #[test]
    fn test_others_cyclic() {
        assert_eq!(Axis::X.others(), (Axis::Y, Axis::Z));
        assert_eq!(Axis::Y.others(), (Axis::Z, Axis::X));
        assert_eq!(Axis::Z.others(), (Axis::X, Axis::Y));
    }

    #[test]
    fn test_component() {
        let p = dvec3(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.component(p), 1.0);
        assert_eq!(Axis::Y.component(p), 2.0);
        assert_eq!(Axis::Z.component(p), 3.0);
    }
}
