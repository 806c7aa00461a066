use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BezError {
    #[error("Empty control points: {0}")]
    EmptyControlPoints(String),

    #[error("Degree overflow: {count} control points, at most {max} are supported")]
    DegreeOverflow { count: usize, max: usize },

    #[error("Invalid step: {0}")]
    InvalidStep(String),

    #[error("Invalid axis index {0}, expected 0, 1 or 2")]
    InvalidAxis(usize),

    #[error("Degenerate range: max {max} must be greater than min {min}")]
    DegenerateRange { min: f64, max: f64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, BezError>;
