//! Decode and encode between byte streams and the 16-bit RGBA intermediate.
//!
//! The codec is always selected explicitly via [`RasterFormat`] — there is
//! no content sniffing on the decode path, so PNG bytes under a JPEG hint
//! fail cleanly instead of being silently accepted.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use thiserror::Error;

use crate::format::RasterFormat;
use crate::pipeline::Rgba16Image;

/// Fixed quality applied on the lossy JPEG encode path.
pub const JPEG_QUALITY: u8 = 90;

/// The input bytes were not a valid stream for the selected codec.
#[derive(Debug, Error)]
#[error("decode error: {0}")]
pub struct DecodeError(#[from] image::ImageError);

/// The selected codec rejected the pixel grid.
///
/// Not expected for grids produced by this pipeline; surfaced rather than
/// retried when it does happen.
#[derive(Debug, Error)]
#[error("encode error: {0}")]
pub struct EncodeError(#[from] image::ImageError);

/// Decode `bytes` with the codec selected by `format`.
///
/// Whatever the source bit depth, the result is widened to the 16-bit
/// RGBA intermediate. Truncated or corrupt input yields [`DecodeError`];
/// no partial image is ever returned.
pub fn decode(bytes: &[u8], format: RasterFormat) -> Result<Rgba16Image, DecodeError> {
    let img = image::load_from_memory_with_format(bytes, format.image_format())?;
    Ok(img.to_rgba16())
}

/// Encode a pixel grid with the codec selected by `format`.
///
/// PNG is written as 16-bit RGBA. JPEG carries neither alpha nor 16-bit
/// samples, so that path narrows to 8-bit RGB and applies [`JPEG_QUALITY`].
pub fn encode(image: &Rgba16Image, format: RasterFormat) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Vec::new();
    match format {
        RasterFormat::Png => {
            DynamicImage::ImageRgba16(image.clone())
                .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        }
        RasterFormat::Jpeg => {
            let rgb8 = DynamicImage::ImageRgba16(image.clone()).to_rgb8();
            let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
            rgb8.write_with_encoder(encoder)?;
        }
    }
    Ok(bytes)
}
