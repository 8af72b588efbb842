//! Raster format selection.
//!
//! The pipeline supports exactly two codecs, so format dispatch is a closed
//! enum rather than trait objects over an open codec set.

use std::path::Path;

/// The two raster encodings the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterFormat {
    /// Lossless, supports 16-bit RGBA.
    Png,
    /// Lossy, 8-bit RGB, fixed encode quality.
    Jpeg,
}

impl RasterFormat {
    /// Derive a format hint from a file name.
    ///
    /// A `.png` suffix (case-insensitive) selects [`RasterFormat::Png`];
    /// everything else, including names without any extension, falls back
    /// to [`RasterFormat::Jpeg`]. The fallback never fails — callers that
    /// need strict validation must check the extension themselves.
    pub fn from_name(name: &str) -> Self {
        if name.to_ascii_lowercase().ends_with(".png") {
            RasterFormat::Png
        } else {
            RasterFormat::Jpeg
        }
    }

    /// Derive a format hint from a filesystem path (see [`Self::from_name`]).
    pub fn from_path(path: &Path) -> Self {
        path.file_name()
            .map(|n| Self::from_name(&n.to_string_lossy()))
            .unwrap_or(RasterFormat::Jpeg)
    }

    /// Identify a format from leading magic bytes, if recognizable.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
            Some(RasterFormat::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8]) {
            Some(RasterFormat::Jpeg)
        } else {
            None
        }
    }

    /// MIME type for HTTP responses.
    pub fn content_type(&self) -> &'static str {
        match self {
            RasterFormat::Png => "image/png",
            RasterFormat::Jpeg => "image/jpeg",
        }
    }

    /// Canonical file extension (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            RasterFormat::Png => "png",
            RasterFormat::Jpeg => "jpg",
        }
    }

    /// The corresponding `image` crate format for codec dispatch.
    pub(crate) fn image_format(&self) -> image::ImageFormat {
        match self {
            RasterFormat::Png => image::ImageFormat::Png,
            RasterFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}
