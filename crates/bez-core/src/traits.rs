use crate::error::Result;

/// Check the structural invariants of a control net or mesh.
pub trait Validate {
    fn validate(&self) -> Result<()>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Axis-aligned bounds as a `(min, max)` pair.
pub trait BoundingBox {
    type Point;
    fn bounding_box(&self) -> (Self::Point, Self::Point);
}
