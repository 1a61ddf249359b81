use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A step produced a non-finite angular acceleration, or would have
    /// pushed an angle or velocity out of the finite range.
    #[error("numerical instability: angular acceleration {acceleration:?}")]
    NumericalInstability { acceleration: [f64; 2] },

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
