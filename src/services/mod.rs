pub mod storage;

pub use storage::{Artifact, ArtifactPair, UploadStore, PUBLIC_PREFIX};
