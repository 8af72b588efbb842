//! Filesystem storage for uploaded originals and their segmented outputs.
//!
//! Artifacts are plain files under a single uploads directory, named
//! `original_<name>` and `segmented_<stem>.<ext>` after the client-supplied
//! file name, and served back under [`PUBLIC_PREFIX`]. Name collisions
//! between concurrent uploads of the same file name overwrite each other;
//! callers that need uniqueness must provide unique names.

use luma_threshold::RasterFormat;
use std::io;
use std::path::{Path, PathBuf};

/// URL prefix under which stored artifacts are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// A stored artifact: its location on disk and its public URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub url: String,
}

/// The original/segmented artifact pair for one upload.
#[derive(Debug, Clone)]
pub struct ArtifactPair {
    pub original: Artifact,
    pub segmented: Artifact,
}

/// Storage root for upload artifacts.
#[derive(Debug)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Open (and create if missing) the uploads directory.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory artifacts are stored in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compute the artifact pair for a client-supplied file name.
    ///
    /// Only the final path component of the name is used, so a hostile
    /// `../../etc/x.png` cannot escape the uploads directory. The
    /// segmented artifact carries the extension of the codec the pipeline
    /// actually produces for this name, so the static file server's
    /// extension-based Content-Type matches the bytes (an upload named
    /// `x.webp` segments to JPEG and is stored as `segmented_x.jpg`).
    pub fn artifacts_for(&self, client_name: &str) -> ArtifactPair {
        let name = sanitize(client_name);
        let original_name = format!("original_{name}");

        let format = RasterFormat::from_name(&name);
        let stem = match name.rsplit_once('.') {
            Some((stem, _)) => stem,
            None => name.as_str(),
        };
        let segmented_name = format!("segmented_{stem}.{}", format.extension());

        ArtifactPair {
            original: Artifact {
                path: self.root.join(&original_name),
                url: format!("{PUBLIC_PREFIX}/{original_name}"),
            },
            segmented: Artifact {
                path: self.root.join(&segmented_name),
                url: format!("{PUBLIC_PREFIX}/{segmented_name}"),
            },
        }
    }

    /// Persist the uploaded bytes as the original artifact.
    pub fn save_original(&self, artifact: &Artifact, bytes: &[u8]) -> io::Result<()> {
        std::fs::write(&artifact.path, bytes)
    }
}

/// Reduce a client-supplied name to a safe final path component.
fn sanitize(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name)
        .trim();
    match base {
        "" | "." | ".." => "upload".to_string(),
        other => other.to_string(),
    }
}
