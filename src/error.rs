use thiserror::Error;

// reasons a model is rejected before any ray is traced
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ModelError {
    #[error("Layer data is incorrect: layer {index} has {found} values, expected 3 (top, bottom, velocity)")]
    MalformedLayer { index: usize, found: usize },

    #[error("Input data is not integer or float: {field}")]
    NonNumericInput { field: String },

    #[error("Speed value is not correct: layer {index} has velocity {velocity}, expected > 0")]
    InvalidVelocity { index: usize, velocity: f64 },

    #[error("Source does not occur in seismic model: no layer contains depth {depth}")]
    SourceOutOfBounds { depth: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedLayer,
    NonNumericInput,
    InvalidVelocity,
    SourceOutOfBounds,
}

impl ModelError {
    pub fn kind(&self) -> ErrorKind {
	match self {
	    ModelError::MalformedLayer { .. } => ErrorKind::MalformedLayer,
	    ModelError::NonNumericInput { .. } => ErrorKind::NonNumericInput,
	    ModelError::InvalidVelocity { .. } => ErrorKind::InvalidVelocity,
	    ModelError::SourceOutOfBounds { .. } => ErrorKind::SourceOutOfBounds,
	}
    }
}
