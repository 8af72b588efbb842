//! Per-pixel luminance classification.

use image::Rgba;

/// Opaque white in the 16-bit intermediate representation.
pub const WHITE: Rgba<u16> = Rgba([u16::MAX, u16::MAX, u16::MAX, u16::MAX]);

/// Opaque black in the 16-bit intermediate representation.
pub const BLACK: Rgba<u16> = Rgba([0, 0, 0, u16::MAX]);

/// Luminance cutoff separating the two output classes.
///
/// Pixels strictly above the threshold classify white, everything else
/// black. The default is 32768, the midpoint of the 16-bit channel range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(pub u16);

impl Default for Threshold {
    fn default() -> Self {
        Threshold(32768)
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Brightness of a pixel: the unweighted mean of R, G and B.
///
/// Alpha is ignored. This is deliberately NOT a perceptual luminance
/// formula; the plain arithmetic mean is part of the pipeline contract.
pub fn luma(pixel: Rgba<u16>) -> u16 {
    let Rgba([r, g, b, _]) = pixel;
    ((r as u32 + g as u32 + b as u32) / 3) as u16
}

/// Map a brightness value to one of the two output colors.
///
/// Strictly greater than the threshold classifies white; equal or below
/// classifies black. The tie-break at equality is contractual. The result
/// is always fully opaque regardless of the source pixel's alpha.
pub fn classify(luma: u16, threshold: Threshold) -> Rgba<u16> {
    if luma > threshold.0 {
        WHITE
    } else {
        BLACK
    }
}
