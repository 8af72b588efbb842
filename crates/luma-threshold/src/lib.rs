//! luma-threshold: binary luminance segmentation for raster images
//!
//! This crate implements a fixed decode → classify → encode pipeline: an
//! encoded PNG or JPEG byte stream goes in, and an image of identical
//! dimensions comes out in which every pixel is either opaque white or
//! opaque black, split by a luminance threshold.
//!
//! # Quick Start
//!
//! [`segment_image`] is the in-memory entry point:
//!
//! ```
//! use luma_threshold::{segment_image, RasterFormat, Threshold};
//!
//! // A 2x2 PNG with two bright and two dark pixels.
//! let mut png = Vec::new();
//! let img = image::RgbaImage::from_fn(2, 2, |x, _| {
//!     if x == 0 { image::Rgba([250, 250, 250, 255]) } else { image::Rgba([5, 5, 5, 255]) }
//! });
//! image::DynamicImage::ImageRgba8(img)
//!     .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
//!     .unwrap();
//!
//! let out = segment_image(
//!     &png,
//!     RasterFormat::Png,
//!     RasterFormat::Png,
//!     Threshold::default(),
//! )
//! .unwrap();
//! assert_eq!(RasterFormat::sniff(&out), Some(RasterFormat::Png));
//! ```
//!
//! For file-to-file use (format hints derived from the file names), see
//! [`segment_file`].
//!
//! # Pixel Model
//!
//! All classification happens on a 16-bit-per-channel RGBA intermediate,
//! regardless of the source bit depth. Luminance is the unweighted mean of
//! the R, G and B channels; this exact arithmetic (not a perceptual
//! weighting) is part of the contract so that results are reproducible.
//! A pixel strictly above the threshold becomes white, everything else
//! (including a pixel exactly at the threshold) becomes black, and the
//! output alpha is always fully opaque.
//!
//! # Format Selection
//!
//! [`RasterFormat::from_name`] maps a file name to a codec: a `.png` suffix
//! (case-insensitive) selects PNG, anything else falls back to JPEG. The
//! fallback is deliberately permissive — an unrecognized extension is not
//! an error, the bytes are simply decoded as JPEG and fail there if they
//! are not.

mod classify;
mod codec;
mod format;
mod pipeline;


pub use classify::{classify, luma, Threshold, BLACK, WHITE};
pub use codec::{decode, encode, DecodeError, EncodeError, JPEG_QUALITY};
pub use format::RasterFormat;
pub use pipeline::{segment_file, segment_image, Rgba16Image, SegmentError};
