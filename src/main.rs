use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dominant_color::parallel_pipeline::ParallelPipeline;
use dominant_color::pipeline::{DominantColorPipeline, PipelineConfig, Region};

/// Report the dominant color category of an image.
#[derive(Parser)]
#[command(name = "dominant_color")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Image file to analyze
    #[arg(value_name = "IMAGE")]
    image: PathBuf,

    /// Region of interest (x,y,width,height); defaults to the whole image
    #[arg(long, value_name = "X,Y,W,H")]
    roi: Option<Region>,

    /// Number of aggregation workers (0 = one per CPU, 1 = sequential)
    #[arg(short = 'j', long, value_name = "N", default_value_t = 1, env = "DOMINANT_COLOR_THREADS")]
    threads: usize,

    /// Also print the pixel count of every color category
    #[arg(long)]
    histogram: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = PipelineConfig {
        region: cli.roi,
        workers: cli.threads,
    };

    let outcome = if config.workers == 1 {
        DominantColorPipeline::new(config).analyze_path(&cli.image)
    } else {
        ParallelPipeline::new(config).analyze_path(&cli.image).await
    };
    let report = outcome.with_context(|| format!("failed to analyze {}", cli.image.display()))?;

    println!("{report}");
    if cli.histogram {
        for (category, count) in report.histogram.iter() {
            println!("{category}: {count}");
        }
    }

    Ok(())
}
