// Single-pixel (1D) representations and the color-space converter.
#[allow(non_snake_case)]
pub mod D1 {
    pub mod pixel;
}

pub mod aggregator;
pub mod classifier;
pub mod color_category;
pub mod histogram;
pub mod hls_image;
pub mod region;
