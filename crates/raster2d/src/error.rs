//! Contract violations raised by the kernel.
//!
//! Degenerate geometry is not an error: see the module docs of each component
//! for its empty/no-op result.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("polygon needs at least 3 vertices, got {got}")]
    TooFewVertices { got: usize },
    #[error("seed ({x}, {y}) lies outside the raster buffer")]
    SeedOutOfBounds { x: i32, y: i32 },
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
}
