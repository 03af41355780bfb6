use thiserror::Error;

/// Configuration and input errors raised by the effect state machines.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FxError {
    #[error("viewport has a zero dimension ({width}x{height})")]
    DegenerateViewport { width: f32, height: f32 },
    #[error("interpolation table needs at least one control point")]
    EmptyTable,
    #[error("interpolation table widths must strictly increase (at index {index})")]
    UnorderedTable { index: usize },
    #[error("particle capacity must be non-zero")]
    ZeroCapacity,
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} must be within (0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, FxError>;
