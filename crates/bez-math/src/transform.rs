use crate::{DMat4, DVec4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// 4x4 homogeneous transform, stored column-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn identity() -> Self {
        Self::from_mat4(DMat4::IDENTITY)
    }

    pub fn from_translation(t: Vector3) -> Self {
        Self::from_mat4(DMat4::from_translation(t))
    }

    /// Right-handed rotation about +Y by `degrees`.
    pub fn rotation_y_degrees(degrees: f64) -> Self {
        Self::from_mat4(DMat4::from_rotation_y(degrees.to_radians()))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    /// Apply to the homogeneous point `(p, 1)` and project back.
    pub fn transform_point(&self, p: Point3) -> Point3 {
        let h = self.transform_homogeneous(p.extend(1.0));
        if h.w == 0.0 || h.w == 1.0 {
            h.truncate()
        } else {
            h.truncate() / h.w
        }
    }

    pub fn transform_homogeneous(&self, p: DVec4) -> DVec4 {
        self.to_mat4() * p
    }

    pub fn inverse(&self) -> Option<Transform> {
        let m = self.to_mat4();
        if m.determinant().abs() < 1e-15 {
            None
        } else {
            Some(Self::from_mat4(m.inverse()))
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::dvec3;

    #[test]
    fn test_identity() {
        let t = Transform::identity();
        let p = dvec3(1.0, 2.0, 3.0);
        assert!((t.transform_point(p) - p).length() < 1e-10);
    }

    #[test]
    fn test_translation() {
        let t = Transform::from_translation(dvec3(10.0, 20.0, 30.0));
        let result = t.transform_point(dvec3(1.0, 2.0, 3.0));
        assert!((result - dvec3(11.0, 22.0, 33.0)).length() < 1e-10);
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        let t = Transform::rotation_y_degrees(90.0);
        let p = t.transform_point(dvec3(1.0, 5.0, 0.0));
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_y_full_turn_is_identity() {
        let t = Transform::rotation_y_degrees(360.0);
        let p = dvec3(0.3, -1.0, 2.5);
        assert!((t.transform_point(p) - p).length() < 1e-12);
    }

    #[test]
    fn test_inverse() {
        let t = Transform::from_translation(dvec3(10.0, 20.0, 30.0));
        let inv = t.inverse().unwrap();
        let p = dvec3(1.0, 2.0, 3.0);
        let result = inv.transform_point(t.transform_point(p));
        assert!((result - p).length() < 1e-10);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let t = Transform::from_mat4(DMat4::ZERO);
        assert!(t.inverse().is_none());
    }
}
