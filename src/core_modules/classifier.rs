// THEORY:
// The classifier is a pure, total function from one `PixelColor` to one
// `ColorCategory`. It is an ordered cascade where the first matching rule wins:
//
// 1.  Lightness extremes first. Near-black and near-white pixels carry no
//     usable hue, so they are decided by lightness alone.
// 2.  Then saturation. A washed-out mid-lightness pixel reads as gray whatever
//     its hue.
// 3.  Only colorful pixels fall through to the hue table, whose ranges are
//     inclusive on both ends. Anything the five explicit ranges miss
//     (0..=20 and 321..) wraps around to red.
//
// The thresholds and breakpoints are fixed empirical constants.

use crate::core_modules::D1::pixel::pixel::{HlsPixel, PixelColor};
use crate::core_modules::color_category::ColorCategory;

pub const BLACK_LIGHTNESS_CEILING: f32 = 0.10;
pub const WHITE_LIGHTNESS_FLOOR: f32 = 0.90;
pub const GRAY_SATURATION_CEILING: f32 = 0.10;

/// Inclusive hue ranges in degrees. Hues outside all of them are red.
pub const HUE_TABLE: [(u16, u16, ColorCategory); 5] = [
    (21, 70, ColorCategory::Yellow),
    (71, 155, ColorCategory::Green),
    (156, 210, ColorCategory::Cyan),
    (211, 270, ColorCategory::Blue),
    (271, 320, ColorCategory::Magenta),
];

/// Maps one pixel to its color bucket.
pub fn classify(pixel: PixelColor) -> ColorCategory {
    if pixel.lightness <= BLACK_LIGHTNESS_CEILING {
        return ColorCategory::Black;
    }
    if pixel.lightness >= WHITE_LIGHTNESS_FLOOR {
        return ColorCategory::White;
    }
    if pixel.saturation <= GRAY_SATURATION_CEILING {
        return ColorCategory::Gray;
    }
    classify_hue(pixel.hue)
}

/// Hue-only step of the cascade, for pixels already known to be colorful.
pub fn classify_hue(hue: u16) -> ColorCategory {
    HUE_TABLE
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&hue))
        .map(|(_, _, category)| *category)
        .unwrap_or(ColorCategory::Red)
}

/// Classifies encoded converter output (half-scale hue, byte L and S).
pub fn classify_hls(hls: HlsPixel) -> ColorCategory {
    classify(PixelColor::from(hls))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colorful(hue: u16) -> PixelColor {
        PixelColor::new(hue, 0.5, 0.8)
    }

    #[test]
    fn dark_pixels_are_black_regardless_of_hue() {
        for hue in [0, 100, 300] {
            assert_eq!(classify(PixelColor::new(hue, 0.10, 1.0)), ColorCategory::Black);
            assert_eq!(classify(PixelColor::new(hue, 0.0, 0.0)), ColorCategory::Black);
        }
    }

    #[test]
    fn bright_pixels_are_white_regardless_of_hue() {
        for hue in [0, 100, 300] {
            assert_eq!(classify(PixelColor::new(hue, 0.90, 1.0)), ColorCategory::White);
            assert_eq!(classify(PixelColor::new(hue, 1.0, 0.0)), ColorCategory::White);
        }
    }

    #[test]
    fn washed_out_pixels_are_gray() {
        assert_eq!(classify(PixelColor::new(100, 0.5, 0.10)), ColorCategory::Gray);
        assert_eq!(classify(PixelColor::new(240, 0.2, 0.0)), ColorCategory::Gray);
    }

    #[test]
    fn lightness_wins_over_saturation() {
        // Dark and unsaturated is still black, not gray.
        assert_eq!(classify(PixelColor::new(0, 0.05, 0.05)), ColorCategory::Black);
        assert_eq!(classify(PixelColor::new(0, 0.95, 0.05)), ColorCategory::White);
    }

    #[test]
    fn hue_boundaries_resolve_exactly() {
        let cases = [
            (0, ColorCategory::Red),
            (20, ColorCategory::Red),
            (21, ColorCategory::Yellow),
            (70, ColorCategory::Yellow),
            (71, ColorCategory::Green),
            (155, ColorCategory::Green),
            (156, ColorCategory::Cyan),
            (210, ColorCategory::Cyan),
            (211, ColorCategory::Blue),
            (270, ColorCategory::Blue),
            (271, ColorCategory::Magenta),
            (320, ColorCategory::Magenta),
            (321, ColorCategory::Red),
            (359, ColorCategory::Red),
            (360, ColorCategory::Red),
        ];
        for (hue, expected) in cases {
            assert_eq!(classify(colorful(hue)), expected, "hue {hue}");
        }
    }

    #[test]
    fn encoded_hls_is_descaled_before_classifying() {
        // 50 * 2 = 100 degrees, L = 128/255, S = 200/255
        assert_eq!(classify_hls(HlsPixel::new(50, 128, 200)), ColorCategory::Green);
        // L = 25/255 < 0.1, L = 26/255 > 0.1
        assert_eq!(classify_hls(HlsPixel::new(50, 25, 200)), ColorCategory::Black);
        assert_eq!(classify_hls(HlsPixel::new(50, 26, 200)), ColorCategory::Green);
        // L = 230/255 > 0.9, L = 229/255 < 0.9
        assert_eq!(classify_hls(HlsPixel::new(50, 230, 200)), ColorCategory::White);
        assert_eq!(classify_hls(HlsPixel::new(50, 229, 200)), ColorCategory::Green);
    }

    #[test]
    fn classifying_twice_gives_same_answer() {
        let pixel = PixelColor::new(200, 0.4, 0.6);
        assert_eq!(classify(pixel), classify(pixel));
    }
}
