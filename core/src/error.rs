use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Coordinate ({row}, {col}) is outside the {size}x{size} lattice")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("Seed mask holds {actual} cells, lattice needs {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Spread rate {rate} is outside (0, 1]")]
    InvalidParameter { rate: f64 },

    #[error("Lattice side length must be greater than zero")]
    ZeroSize,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
