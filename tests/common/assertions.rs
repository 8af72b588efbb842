//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert the upload response is valid and return (original_url, segmented_url)
pub fn assert_valid_upload_response(response: &TestResponse) -> (String, String) {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    let original = json["original_image"]
        .as_str()
        .expect("Expected original_image to be a string");
    let segmented = json["segmented_image"]
        .as_str()
        .expect("Expected segmented_image to be a string");

    assert!(
        original.starts_with("/uploads/original_"),
        "Unexpected original_image path: {original}"
    );
    assert!(
        segmented.starts_with("/uploads/segmented_"),
        "Unexpected segmented_image path: {segmented}"
    );
    assert_eq!(
        json["message"].as_str(),
        Some("Image segmentation completed successfully")
    );

    (original.to_string(), segmented.to_string())
}

/// Assert error response carries the `{status, error}` JSON shape
pub fn assert_error_body(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(expected.as_u16() as u64));
    assert!(
        json["error"].as_str().is_some_and(|e| !e.is_empty()),
        "Expected a non-empty error message, got: {}",
        response.text()
    );
}

/// Assert response is a PNG image with the right Content-Type
pub fn assert_png(response: &TestResponse) {
    assert_ok(response);
    assert!(
        response.is_png(),
        "Expected PNG image, got {} bytes starting with {:?}",
        response.body.len(),
        &response.body[..8.min(response.body.len())]
    );

    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(
        content_type,
        Some("image/png"),
        "Expected Content-Type: image/png"
    );
}

/// Assert response is a JPEG image with the right Content-Type
pub fn assert_jpeg(response: &TestResponse) {
    assert_ok(response);
    assert!(
        response.is_jpeg(),
        "Expected JPEG image, got {} bytes starting with {:?}",
        response.body.len(),
        &response.body[..4.min(response.body.len())]
    );

    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(
        content_type,
        Some("image/jpeg"),
        "Expected Content-Type: image/jpeg"
    );
}
