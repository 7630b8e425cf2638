// THEORY:
// `HlsImage` is the 2D grid of descaled `PixelColor`s the aggregator scans. It is
// the bridge between the decoder's RGB buffer and the classifier: building one
// runs the color-space converter on every pixel exactly once, after which
// regions can be scanned any number of times without reconverting.
//
// Storage is a flat row-major `Vec`, addressed as `y * width + x`.

use image::RgbImage;

use crate::core_modules::D1::pixel::pixel::{HlsPixel, Pixel, PixelColor};
use crate::core_modules::region::Region;
use crate::error::DominantColorError;

/// A converted image: one `PixelColor` per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct HlsImage {
    width: u32,
    height: u32,
    pixels: Vec<PixelColor>,
}

impl HlsImage {
    pub fn new(width: u32, height: u32, pixels: Vec<PixelColor>) -> Result<Self, DominantColorError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(DominantColorError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a grid from encoded converter output.
    pub fn from_hls_pixels(
        width: u32,
        height: u32,
        pixels: &[HlsPixel],
    ) -> Result<Self, DominantColorError> {
        Self::new(
            width,
            height,
            pixels.iter().copied().map(PixelColor::from).collect(),
        )
    }

    /// Converts a decoded RGB image.
    pub fn from_rgb_image(image: &RgbImage) -> Self {
        let pixels = image
            .pixels()
            .map(|rgb| PixelColor::from(Pixel::from(*rgb)))
            .collect();
        Self {
            width: image.width(),
            height: image.height(),
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn full_region(&self) -> Region {
        Region::full(self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&PixelColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize)
    }

    /// The pixels of `region` in row-major order. The region is clipped to the
    /// grid first, so out-of-bounds parts contribute nothing.
    pub fn region_pixels(&self, region: Region) -> impl Iterator<Item = &PixelColor> + '_ {
        let clipped = region.clipped_to(self.width, self.height);
        let row_stride = self.width as usize;
        let start_x = clipped.x as usize;
        let end_x = start_x + clipped.width as usize;
        let rows = clipped.y as usize..(clipped.y + clipped.height) as usize;

        rows.flat_map(move |row| {
            let row_start = row * row_stride;
            self.pixels[row_start + start_x..row_start + end_x].iter()
        })
    }
}
