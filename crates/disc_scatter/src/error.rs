//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants
//! cover invalid configuration and spatial grids that would exceed the dimension cap.
//! An empty or negative sampling region is not an error; samplers return an empty point list.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The region is too large for the requested radius.
    #[error("requested sampling grid {width}x{height} exceeds the {max} cell limit per axis")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
}
