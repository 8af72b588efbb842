//! Lumaseg - luminance-threshold image segmentation server
//!
//! Accepts image uploads, runs binary luminance segmentation on them, and
//! serves the resulting artifacts. This library exposes modules for
//! integration testing.

pub mod api;
pub mod error;
pub mod server;
pub mod services;
