// THEORY:
// The aggregator is the regional layer on top of the single-pixel classifier.
// It is a stateless utility: given a converted grid and a region, it classifies
// every pixel in the region, tallies the results in a fresh `HistogramCounts`,
// and hands back the winner. It has no memory between calls.
//
// The scan is row-major, but nothing depends on that order; only the
// histogram's leader scan decides ties. Regions reaching past the grid are
// clipped rather than trusted, so a region wholly outside the grid counts
// nothing and reports the default category.

use image::RgbImage;
use log::{debug, warn};

use crate::core_modules::classifier::classify;
use crate::core_modules::color_category::ColorCategory;
use crate::core_modules::hls_image::HlsImage;
use crate::core_modules::histogram::HistogramCounts;
use crate::core_modules::region::Region;

/// Counts the category of every pixel in `region`.
pub fn histogram(image: &HlsImage, region: Region) -> HistogramCounts {
    image
        .region_pixels(region)
        .map(|pixel| classify(*pixel))
        .collect()
}

/// The dominant category of `region`.
pub fn dominant(image: &HlsImage, region: Region) -> ColorCategory {
    let counts = histogram(image, region);
    if counts.is_empty() {
        warn!("region {region} covers no pixels, reporting {}", ColorCategory::DEFAULT);
    } else {
        debug!("region {region}: {counts:?}");
    }
    counts.dominant()
}

/// Converts a decoded RGB image and reports the dominant category of `region`.
pub fn dominant_color(image: &RgbImage, region: Region) -> ColorCategory {
    dominant(&HlsImage::from_rgb_image(image), region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::D1::pixel::pixel::{HlsPixel, PixelColor};

    const GREEN: PixelColor = PixelColor {
        hue: 100,
        lightness: 0.5,
        saturation: 0.8,
    };
    const BLUE: PixelColor = PixelColor {
        hue: 240,
        lightness: 0.5,
        saturation: 0.8,
    };
    const RED: PixelColor = PixelColor {
        hue: 0,
        lightness: 0.5,
        saturation: 0.8,
    };

    #[test]
    fn sixty_forty_green_blue_is_green() {
        let mut pixels = vec![GREEN; 6];
        pixels.extend(vec![BLUE; 4]);
        let image = HlsImage::new(5, 2, pixels).unwrap();
        assert_eq!(dominant(&image, image.full_region()), ColorCategory::Green);
    }

    #[test]
    fn red_green_tie_is_red() {
        let pixels = vec![GREEN, RED, GREEN, RED];
        let image = HlsImage::new(2, 2, pixels).unwrap();
        let counts = histogram(&image, image.full_region());
        assert_eq!(counts.count(ColorCategory::Red), 2);
        assert_eq!(counts.count(ColorCategory::Green), 2);
        assert_eq!(dominant(&image, image.full_region()), ColorCategory::Red);
    }

    #[test]
    fn zero_area_region_is_white() {
        let image = HlsImage::new(2, 2, vec![GREEN; 4]).unwrap();
        assert_eq!(dominant(&image, Region::new(0, 0, 0, 2)), ColorCategory::White);
        assert_eq!(dominant(&image, Region::new(1, 1, 2, 0)), ColorCategory::White);
    }

    #[test]
    fn region_outside_grid_is_white() {
        let image = HlsImage::new(2, 2, vec![GREEN; 4]).unwrap();
        assert_eq!(dominant(&image, Region::new(5, 5, 3, 3)), ColorCategory::White);
    }

    #[test]
    fn only_the_region_is_counted() {
        // Left column blue, right column green.
        let image = HlsImage::new(2, 3, vec![BLUE, GREEN, BLUE, GREEN, BLUE, GREEN]).unwrap();
        assert_eq!(dominant(&image, Region::new(0, 0, 1, 3)), ColorCategory::Blue);
        assert_eq!(dominant(&image, Region::new(1, 0, 1, 3)), ColorCategory::Green);
        assert_eq!(histogram(&image, Region::new(0, 1, 2, 1)).total(), 2);
    }

    #[test]
    fn encoded_two_by_two_green_image() {
        let image = HlsImage::from_hls_pixels(2, 2, &[HlsPixel::new(50, 128, 200); 4]).unwrap();
        assert_eq!(dominant(&image, image.full_region()), ColorCategory::Green);
    }

    #[test]
    fn rgb_convenience_converts_first() {
        let mut rgb = RgbImage::from_pixel(3, 1, image::Rgb([0, 0, 255]));
        rgb.put_pixel(0, 0, image::Rgb([255, 255, 255]));
        assert_eq!(dominant_color(&rgb, Region::full(3, 1)), ColorCategory::Blue);
        assert_eq!(dominant_color(&rgb, Region::new(0, 0, 1, 1)), ColorCategory::White);
    }
}
