use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::server::AppState;

/// Response from a successful upload: URL paths to both artifacts.
#[derive(Debug, Serialize, ToSchema)]
pub struct SegmentationResult {
    /// URL path to the stored original image
    pub original_image: String,
    /// URL path to the segmented (black/white) image
    pub segmented_image: String,
    /// Human-readable status message
    pub message: String,
}

/// Multipart form accepted by the upload endpoint (schema only).
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    /// The image file to segment (PNG or JPEG, max 10 MiB)
    #[schema(value_type = String, format = Binary)]
    image: String,
}

/// Upload an image and segment it
///
/// Persists the original, runs binary luminance segmentation on it, and
/// returns URL paths to both artifacts under the static serving prefix.
/// The output codec is chosen by the uploaded file name: `.png` keeps PNG,
/// anything else is encoded as JPEG.
#[utoipa::path(
    post,
    path = "/api/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Segmentation completed", body = SegmentationResult),
        (status = 400, description = "Malformed multipart body or missing `image` field"),
        (status = 422, description = "Uploaded bytes are not a decodable image"),
        (status = 500, description = "Storage or encode failure"),
    ),
    tag = "Segmentation"
)]
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    // Find the `image` field; other fields are ignored.
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidMultipart(e.to_string()))?
    {
        if field.name() == Some("image") {
            let client_name = field.file_name().unwrap_or("upload").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::InvalidMultipart(e.to_string()))?;
            upload = Some((client_name, bytes));
            break;
        }
    }
    let (client_name, bytes) = upload.ok_or(ApiError::MissingField("image"))?;

    tracing::debug!(
        name = %client_name,
        size = bytes.len(),
        "Upload received"
    );

    let pair = state.store.artifacts_for(&client_name);

    // Persist + segment in a blocking context to avoid stalling the async
    // runtime: segmentation is file I/O plus a CPU-bound
    // decode/classify/encode pass over up to 10 MiB of image data.
    let store = state.store.clone();
    let threshold = state.threshold;
    let task_pair = pair.clone();
    tokio::task::spawn_blocking(move || -> Result<(), ApiError> {
        store.save_original(&task_pair.original, &bytes)?;
        luma_threshold::segment_file(
            &task_pair.original.path,
            &task_pair.segmented.path,
            threshold,
        )?;
        Ok(())
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Segmentation task failed: {e}")))??;

    tracing::info!(
        original = %pair.original.url,
        segmented = %pair.segmented.url,
        threshold = %state.threshold,
        "Image segmented"
    );

    Ok(Json(SegmentationResult {
        original_image: pair.original.url,
        segmented_image: pair.segmented.url,
        message: "Image segmentation completed successfully".to_string(),
    }))
}
