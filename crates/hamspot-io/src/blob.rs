//! Object-URL handles for the displayed detection result.
//!
//! The annotated image comes back from the detection endpoint as raw
//! bytes. To show it in an `<img>` element the bytes are wrapped in a
//! `Blob` and exposed through an object URL, which must be revoked
//! when the result is superseded or the page goes away.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use hamspot_core::DetectionResult;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur while creating a displayable handle.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BlobError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Create an object URL for raw bytes with the given MIME type.
///
/// The returned URL must be revoked via [`revoke_blob_url`] when no
/// longer needed to avoid accumulating blobs across submissions.
///
/// # Errors
///
/// Returns [`BlobError::JsError`] if Blob or URL creation fails.
pub fn bytes_to_blob_url(bytes: &[u8], mime_type: &str) -> Result<String, BlobError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Revoke an object URL previously created by [`bytes_to_blob_url`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked or garbage collected.
pub fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

/// A displayable, revocable handle to one detection result.
///
/// Wraps the object URL together with the payload length so the page
/// can reason about what is on screen without re-reading the blob.
/// The creator is responsible for calling [`revoke`](Self::revoke)
/// when the handle is superseded or the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionHandle {
    url: String,
    byte_len: usize,
}

impl DetectionHandle {
    /// Wrap a detection result's bytes in a Blob and mint an object
    /// URL for display.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::JsError`] if Blob or URL creation fails.
    pub fn from_result(result: &DetectionResult) -> Result<Self, BlobError> {
        let url = bytes_to_blob_url(result.bytes(), DetectionResult::MIME)?;
        Ok(Self {
            url,
            byte_len: result.len(),
        })
    }

    /// The object URL, usable as an `<img src>`.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Length of the underlying payload in bytes.
    #[must_use]
    pub const fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Release the object URL.
    ///
    /// Best-effort and idempotent, like the underlying browser call.
    pub fn revoke(&self) {
        revoke_blob_url(&self.url);
    }
}
