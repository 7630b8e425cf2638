use crate::core_modules::aggregator;
use crate::core_modules::hls_image::HlsImage;
use crate::core_modules::histogram::HistogramCounts;
use crate::core_modules::region::Region;
use crate::error::DominantColorError;
use crate::pipeline::{PipelineConfig, Report, load_image};
use futures::future::join_all;
use image::RgbImage;
use log::debug;
use std::path::Path;
use std::sync::Arc;

/// Splits a region into row bands and tallies each band on its own tokio task.
/// Partial histograms are summed before the tie-break, so the result matches a
/// sequential scan exactly.
#[derive(Debug, Clone)]
pub struct ParallelAggregator {
    workers: usize,
}

impl ParallelAggregator {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub async fn histogram(
        &self,
        image: Arc<HlsImage>,
        region: Region,
    ) -> Result<HistogramCounts, DominantColorError> {
        let bands = region
            .clipped_to(image.width(), image.height())
            .split_rows(self.workers);
        debug!("aggregating {} band(s) across {} worker(s)", bands.len(), self.workers);

        let tasks = bands.into_iter().map(|band| {
            let band_image = Arc::clone(&image);
            tokio::spawn(async move { aggregator::histogram(&band_image, band) })
        });

        let mut merged = HistogramCounts::new();
        for partial in join_all(tasks).await {
            merged.merge(&partial?);
        }
        Ok(merged)
    }
}

/// Worker-based counterpart of `DominantColorPipeline`.
pub struct ParallelPipeline {
    config: PipelineConfig,
    aggregator: ParallelAggregator,
}

impl ParallelPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let aggregator = ParallelAggregator::new(PipelineConfig::workers_or_auto(config.workers));
        Self { config, aggregator }
    }

    pub fn workers(&self) -> usize {
        self.aggregator.workers()
    }

    pub async fn analyze(&self, image: &RgbImage) -> Result<Report, DominantColorError> {
        let region = self.config.resolve_region(image.width(), image.height())?;
        let hls = Arc::new(HlsImage::from_rgb_image(image));
        let histogram = self.aggregator.histogram(Arc::clone(&hls), region).await?;
        Ok(Report::new(histogram, region, hls.width(), hls.height()))
    }

    pub async fn analyze_path(&self, path: impl AsRef<Path>) -> Result<Report, DominantColorError> {
        let image = load_image(path)?;
        self.analyze(&image).await
    }
}
