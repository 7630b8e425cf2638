use std::path::PathBuf;

use thiserror::Error;

use crate::core_modules::region::Region;

/// The main error type for dominant-color operations.
#[derive(Debug, Error)]
pub enum DominantColorError {
    #[error("Could not open or find the image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Region {region} does not fit inside the {width}x{height} image")]
    RegionOutOfBounds {
        region: Region,
        width: u32,
        height: u32,
    },

    #[error("Expected {expected} pixels for the grid, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Unknown color category: {0}")]
    UnknownCategory(String),

    #[error("Aggregation worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
