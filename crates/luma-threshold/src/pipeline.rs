//! The decode → classify → encode orchestrator.

use std::fs;
use std::path::Path;

use image::{ImageBuffer, Rgba};
use thiserror::Error;

use crate::classify::{classify, luma, Threshold};
use crate::codec::{decode, encode, DecodeError, EncodeError};
use crate::format::RasterFormat;

/// The 16-bit-per-channel RGBA pixel grid used between pipeline stages.
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// A pipeline run failed. Nothing is retried; the failing stage is named
/// by the variant.
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("resource error: {0}")]
    Resource(#[from] std::io::Error),
}

/// Segment an in-memory encoded image.
///
/// Decodes `bytes` with the input codec, classifies every pixel against
/// `threshold`, and encodes the resulting black/white grid with the output
/// codec. The output grid always has exactly the input's dimensions, and
/// every coordinate is visited exactly once in row-major order.
pub fn segment_image(
    bytes: &[u8],
    input_format: RasterFormat,
    output_format: RasterFormat,
    threshold: Threshold,
) -> Result<Vec<u8>, SegmentError> {
    let src = decode(bytes, input_format)?;
    let (width, height) = src.dimensions();

    let mut out = Rgba16Image::new(width, height);
    for (dst, px) in out.pixels_mut().zip(src.pixels()) {
        *dst = classify(luma(*px), threshold);
    }

    Ok(encode(&out, output_format)?)
}

/// Segment a file on disk into another file.
///
/// Format hints for both sides are derived from the file names (see
/// [`RasterFormat::from_name`]). The input is read fully once; the output
/// is written only after the encode step has fully succeeded, so a decode
/// or encode failure leaves no output artifact behind.
pub fn segment_file(
    input: &Path,
    output: &Path,
    threshold: Threshold,
) -> Result<(), SegmentError> {
    let input_format = RasterFormat::from_path(input);
    let output_format = RasterFormat::from_path(output);

    let bytes = fs::read(input)?;
    let encoded = segment_image(&bytes, input_format, output_format, threshold)?;
    fs::write(output, &encoded)?;
    Ok(())
}
