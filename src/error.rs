use thiserror::Error;

/// Top-level error type for the edge distance calculator.
#[derive(Debug, Error)]
pub enum EdgeCalcError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised by checked constructors and operations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("coordinate {coordinate} is not finite: {value}")]
    NonFinite {
        coordinate: &'static str,
        value: f64,
    },
}

/// Convenience type alias for results using [`EdgeCalcError`].
pub type Result<T> = std::result::Result<T, EdgeCalcError>;
