pub mod upload;

pub use upload::{handle_upload, SegmentationResult, UploadForm, __path_handle_upload};
