// THEORY:
// This file is the main entry point for the `dominant_color` library crate.
// It exposes the `pipeline` module (sequential) and the `parallel_pipeline`
// module (worker-based) as the high-level interface: hand them an image and an
// optional region, get back a `Report` naming the dominant color category.
//
// The `core_modules` tree holds the layered engine underneath:
// - `D1::pixel`:      single-pixel forms and the RGB→HLS converter
// - `classifier`:     one pixel → one of nine `ColorCategory` buckets
// - `histogram`:      per-call counts and the tie-break scan
// - `region`/`hls_image`: the rectangle and the converted grid it indexes
// - `aggregator`:     region scan → histogram → dominant category

pub mod core_modules;
pub mod error;
pub mod parallel_pipeline;
pub mod pipeline;

pub use core_modules::aggregator::{dominant, dominant_color};
pub use core_modules::classifier::classify;
pub use error::DominantColorError;
pub use pipeline::{ColorCategory, HistogramCounts, Region};
