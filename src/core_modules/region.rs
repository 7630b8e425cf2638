// THEORY:
// A `Region` is the rectangle of interest the aggregator scans. It is a plain
// value: origin plus size, in pixels. It knows how to check and clip itself
// against image bounds and how to split itself into row bands for parallel
// work, but it never touches pixel data.

use std::fmt;
use std::str::FromStr;

use crate::error::DominantColorError;

/// A rectangular region of interest, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The region covering a whole image of the given size.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge, widened so it cannot overflow.
    fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Exclusive bottom edge, widened so it cannot overflow.
    fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width as u64 && self.bottom() <= height as u64
    }

    /// Intersection with an image of the given size. May be empty.
    pub fn clipped_to(&self, width: u32, height: u32) -> Region {
        let x = self.x.min(width);
        let y = self.y.min(height);
        let right = self.right().min(width as u64) as u32;
        let bottom = self.bottom().min(height as u64) as u32;
        Region::new(x, y, right - x, bottom - y)
    }

    /// Splits into at most `parts` horizontal bands that together cover every
    /// row exactly once. Empty regions split into nothing.
    pub fn split_rows(&self, parts: usize) -> Vec<Region> {
        if self.is_empty() {
            return Vec::new();
        }
        let parts = parts.clamp(1, self.height as usize) as u32;
        let base = self.height / parts;
        let remainder = self.height % parts;

        let mut bands = Vec::with_capacity(parts as usize);
        let mut y = self.y;
        for band_index in 0..parts {
            let rows = base + u32::from(band_index < remainder);
            bands.push(Region::new(self.x, y, self.width, rows));
            y += rows;
        }
        bands
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for Region {
    type Err = DominantColorError;

    /// Parses `x,y,width,height`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(DominantColorError::InvalidRegion(format!(
                "region must be in format x,y,width,height, got: {s}"
            )));
        }

        let field = |index: usize, label: &str| -> Result<u32, DominantColorError> {
            parts[index].trim().parse::<u32>().map_err(|_| {
                DominantColorError::InvalidRegion(format!("invalid {label}: {}", parts[index]))
            })
        };

        Ok(Region::new(
            field(0, "x coordinate")?,
            field(1, "y coordinate")?,
            field(2, "width")?,
            field(3, "height")?,
        ))
    }
}
