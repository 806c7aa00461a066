use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point3]) -> Option<Self> {
        Self::from_point_iter(points.iter().copied())
    }

    /// Component-wise min/max over every point yielded by `points`.
    pub fn from_point_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |acc, p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        }))
    }

    /// `min + (max - min) / 2`, the translation that recenters the box.
    pub fn center(&self) -> Point3 {
        self.min + (self.max - self.min) * 0.5
    }

    /// Inclusive on every face.
    pub fn contains_point(&self, p: Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// True when `min <= max` on every axis.
    pub fn is_ordered(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    pub fn translated(&self, offset: Vector3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_from_points() {
        let pts = vec![dvec3(1.0, 2.0, 3.0), dvec3(-1.0, 5.0, 0.0), dvec3(3.0, -1.0, 2.0)];
        let aabb = Aabb3::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec3(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, dvec3(3.0, 5.0, 3.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Aabb3::from_points(&[]).is_none());
    }

    #[test]
    fn test_center() {
        let aabb = Aabb3::new(dvec3(1.0, -2.0, 0.0), dvec3(3.0, 2.0, 6.0));
        assert_eq!(aabb.center(), dvec3(2.0, 0.0, 3.0));
    }

    #[test]
    fn test_contains_point_is_inclusive() {
        let aabb = Aabb3::new(dvec3(0.0, 0.0, 0.0), dvec3(1.0, 1.0, 1.0));
        assert!(aabb.contains_point(dvec3(0.5, 0.5, 0.5)));
        assert!(aabb.contains_point(dvec3(1.0, 0.0, 1.0)));
        assert!(!aabb.contains_point(dvec3(1.5, 0.5, 0.5)));
        assert!(!aabb.contains_point(dvec3(0.5, -1e-9, 0.5)));
    }

    #[test]
    fn test_is_ordered_and_translated() {
        let aabb = Aabb3::new(dvec3(0.0, 0.0, 0.0), dvec3(2.0, 2.0, 2.0));
        assert!(aabb.is_ordered());
        assert!(!Aabb3::new(dvec3(0.0, 3.0, 0.0), dvec3(1.0, 1.0, 1.0)).is_ordered());

        let moved = aabb.translated(dvec3(-1.0, -1.0, -1.0));
        assert_eq!(moved.min, dvec3(-1.0, -1.0, -1.0));
        assert_eq!(moved.max, dvec3(1.0, 1.0, 1.0));
    }
}
