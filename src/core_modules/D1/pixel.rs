// THEORY (1D Pixel Representations):
// The `Pixel` module is the most fundamental unit of the color engine. It holds
// the three forms a single pixel passes through on its way to being classified,
// and the conversion between them. Nothing here knows about neighbors or regions;
// anything that needs more than one pixel lives in `hls_image` or `aggregator`.
//
// The three forms:
// - `Pixel`:      raw 8-bit RGB channels, as handed over by the image decoder.
// - `HlsPixel`:   the encoded output of the color-space converter. Hue is stored
//                 at half scale (0..=180) so it fits a byte; lightness and
//                 saturation are stored as 0..=255.
// - `PixelColor`: the descaled triple the classifier reasons about. Hue is an
//                 integer degree (0..=360), lightness and saturation are
//                 fractions in [0.0, 1.0].
//
// Conversion (`Pixel::to_hls`) follows the standard 8-bit RGB→HLS rules used by
// common imaging libraries, so an `HlsPixel` produced here is byte-for-byte what
// those libraries would produce:
//   L = (max + min) / 2
//   S = C / (max + min)       when L < 0.5
//   S = C / (2 - max - min)   otherwise
//   H = sector formula in degrees, halved, rounded half-to-even
// Achromatic pixels (chroma at or below f32::EPSILON) get H = 0 and S = 0.

pub mod pixel {
    pub type Byte = u8;
    pub type Channel = Byte;
    pub type NormalizedChannel = f32;
    pub type EncodedHue = u8;
    pub type EncodedLightness = u8;
    pub type EncodedSaturation = u8;
    pub type HueDegrees = u16;
    pub type Lightness = f32;
    pub type Saturation = f32;

    const HUE_SCALE: f32 = 180.0 / 360.0;

    /// A "dumb" data container representing a single decoded RGB pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
    }

    /// Encoded converter output: half-scale hue, byte lightness and saturation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct HlsPixel {
        /// Hue at half scale (0-180).
        pub hue: EncodedHue,
        /// Lightness (0-255).
        pub lightness: EncodedLightness,
        /// Saturation (0-255).
        pub saturation: EncodedSaturation,
    }

    /// The descaled hue/lightness/saturation triple of one pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct PixelColor {
        /// Hue in whole degrees, [0, 360].
        pub hue: HueDegrees,
        /// Lightness as a fraction, [0.0, 1.0].
        pub lightness: Lightness,
        /// Saturation as a fraction, [0.0, 1.0].
        pub saturation: Saturation,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Pixel { red, green, blue }
        }

        #[inline]
        fn normalized(&self) -> (NormalizedChannel, NormalizedChannel, NormalizedChannel) {
            (
                self.red as NormalizedChannel / 255.0,
                self.green as NormalizedChannel / 255.0,
                self.blue as NormalizedChannel / 255.0,
            )
        }

        /// Converts to the encoded HLS form.
        pub fn to_hls(&self) -> HlsPixel {
            let (red, green, blue) = self.normalized();
            let maximum_channel = red.max(green.max(blue));
            let minimum_channel = red.min(green.min(blue));
            let chroma = maximum_channel - minimum_channel;
            let lightness = (maximum_channel + minimum_channel) * 0.5;

            let mut hue_degrees = 0.0f32;
            let mut saturation = 0.0f32;

            if chroma > f32::EPSILON {
                saturation = if lightness < 0.5 {
                    chroma / (maximum_channel + minimum_channel)
                } else {
                    chroma / (2.0 - maximum_channel - minimum_channel)
                };

                let degrees_per_unit = 60.0 / chroma;
                hue_degrees = if maximum_channel == red {
                    (green - blue) * degrees_per_unit
                } else if maximum_channel == green {
                    (blue - red) * degrees_per_unit + 120.0
                } else {
                    (red - green) * degrees_per_unit + 240.0
                };
                if hue_degrees < 0.0 {
                    hue_degrees += 360.0;
                }
            }

            HlsPixel {
                hue: saturate_to_byte(hue_degrees * HUE_SCALE),
                lightness: saturate_to_byte(lightness * 255.0),
                saturation: saturate_to_byte(saturation * 255.0),
            }
        }
    }

    /// Rounds half-to-even and clamps into a byte.
    #[inline]
    pub(super) fn saturate_to_byte(value: f32) -> Byte {
        value.round_ties_even().clamp(0.0, 255.0) as Byte
    }

    impl HlsPixel {
        pub fn new(
            hue: EncodedHue,
            lightness: EncodedLightness,
            saturation: EncodedSaturation,
        ) -> Self {
            HlsPixel {
                hue,
                lightness,
                saturation,
            }
        }
    }

    impl PixelColor {
        pub fn new(hue: HueDegrees, lightness: Lightness, saturation: Saturation) -> Self {
            PixelColor {
                hue,
                lightness,
                saturation,
            }
        }
    }

    impl From<HlsPixel> for PixelColor {
        fn from(hls: HlsPixel) -> Self {
            PixelColor {
                hue: hls.hue as HueDegrees * 2,
                lightness: hls.lightness as Lightness / 255.0,
                saturation: hls.saturation as Saturation / 255.0,
            }
        }
    }

    impl From<Pixel> for PixelColor {
        fn from(pixel: Pixel) -> Self {
            PixelColor::from(pixel.to_hls())
        }
    }

    impl From<image::Rgb<u8>> for Pixel {
        fn from(rgb: image::Rgb<u8>) -> Self {
            let [red, green, blue] = rgb.0;
            Pixel::new(red, green, blue)
        }
    }
}
