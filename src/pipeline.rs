// THEORY:
// The `pipeline` module is the top-level API for the color engine. It wires the
// two external collaborators (the image decoder and the color-space converter)
// to the regional aggregator and packages the answer as a `Report`.
//
// The boundary is strict about its inputs and the core is not: a requested
// region that does not fit the image is rejected here with
// `RegionOutOfBounds` before any pixel is touched, while the aggregator itself
// simply clips whatever it is handed.

use std::fmt;
use std::path::Path;

use image::RgbImage;
use log::debug;

use crate::core_modules::aggregator;
use crate::core_modules::hls_image::HlsImage;
use crate::error::DominantColorError;

// Re-export key data structures for the public API.
pub use crate::core_modules::color_category::ColorCategory;
pub use crate::core_modules::histogram::{HistogramCounts, PixelCount};
pub use crate::core_modules::region::Region;

/// Configuration for a dominant-color run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Region of interest. `None` means the whole image.
    pub region: Option<Region>,
    /// Number of aggregation workers. Only the parallel pipeline reads this;
    /// one worker means a plain sequential scan.
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            region: None,
            workers: 1,
        }
    }
}

impl PipelineConfig {
    /// Resolves a requested worker count, where 0 means one per logical CPU.
    pub fn workers_or_auto(requested: usize) -> usize {
        if requested == 0 {
            num_cpus::get()
        } else {
            requested
        }
    }

    /// The region to scan for an image of the given size.
    pub fn resolve_region(&self, width: u32, height: u32) -> Result<Region, DominantColorError> {
        match self.region {
            None => Ok(Region::full(width, height)),
            Some(region) if region.fits_within(width, height) => Ok(region),
            Some(region) => Err(DominantColorError::RegionOutOfBounds {
                region,
                width,
                height,
            }),
        }
    }
}

/// The outcome of one dominant-color run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub dominant: ColorCategory,
    pub histogram: HistogramCounts,
    pub region: Region,
    pub image_width: u32,
    pub image_height: u32,
}

impl Report {
    pub fn new(histogram: HistogramCounts, region: Region, image_width: u32, image_height: u32) -> Self {
        Self {
            dominant: histogram.dominant(),
            histogram,
            region,
            image_width,
            image_height,
        }
    }

    pub fn pixel_count(&self) -> PixelCount {
        self.histogram.total()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dominant color: {}", self.dominant)
    }
}

/// Decodes an image file into 8-bit RGB.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbImage, DominantColorError> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|source| DominantColorError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "decoded {} ({}x{})",
        path.display(),
        decoded.width(),
        decoded.height()
    );
    Ok(decoded.to_rgb8())
}

/// Sequential dominant-color pipeline.
#[derive(Debug, Clone, Default)]
pub struct DominantColorPipeline {
    config: PipelineConfig,
}

impl DominantColorPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, image: &RgbImage) -> Result<Report, DominantColorError> {
        let region = self.config.resolve_region(image.width(), image.height())?;
        let hls = HlsImage::from_rgb_image(image);
        Ok(self.analyze_hls(&hls, region))
    }

    pub fn analyze_hls(&self, hls: &HlsImage, region: Region) -> Report {
        let histogram = aggregator::histogram(hls, region);
        debug!("region {region}: {} pixels counted", histogram.total());
        Report::new(histogram, region, hls.width(), hls.height())
    }

    pub fn analyze_path(&self, path: impl AsRef<Path>) -> Result<Report, DominantColorError> {
        let image = load_image(path)?;
        self.analyze(&image)
    }
}
