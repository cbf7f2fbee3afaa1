use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackError {
    /// A box has a zero, negative, NaN or infinite side. `index` is the position in the caller's input.
    #[error("Invalid dimensions for box #{index}: {width}x{height} (sides must be finite and > 0)")]
    InvalidDimension {
        index: usize,
        width: String,
        height: String,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// No free space could take the box. Unreachable for validated input through the public entry points.
    #[error("Box {width}x{height} does not fit any free space")]
    Unplaceable { width: String, height: String },
    /// Placing the box would put an edge past the largest value of the coordinate type.
    #[error("Box {width}x{height} overflows the coordinate range")]
    Overflow { width: String, height: String },
}

pub type Result<T> = std::result::Result<T, PackError>;
