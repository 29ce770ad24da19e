//! Content-addressed storage publication.
//!
//! On explicit visitor request, the displayed detection result is
//! re-materialized from its object URL and published to the storage
//! network as a single named artifact. The network answers with a
//! content identifier that is a pure function of the uploaded bytes:
//! identical bytes yield the identical CID regardless of when or by
//! whom they are published.
//!
//! No retries; a failed publish leaves the displayed result valid and
//! may simply be attempted again. Requires a browser environment
//! (`wasm32-unknown-unknown` target).

use hamspot_core::{Cid, StorageConfig};
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Upload endpoint of the storage network.
pub const STORAGE_UPLOAD_URL: &str = "https://api.web3.storage/upload";

/// Artifact name the published result is filed under.
///
/// The name does not influence the CID (content-addressing), it only
/// labels the artifact for directory listings.
pub const ARTIFACT_NAME: &str = "hamspot-detection.jpg";

/// Errors that can occur while publishing.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),

    /// The storage network answered with a non-success status.
    #[error("storage network returned HTTP {code} {text}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// HTTP status text.
        text: String,
    },

    /// The receipt body could not be parsed.
    #[error("unreadable storage receipt: {0}")]
    Receipt(String),
}

impl From<JsValue> for StoreError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// The JSON receipt the upload endpoint returns.
#[derive(Debug, Deserialize)]
struct StoreReceipt {
    cid: String,
}

/// Re-materialize the displayed result's bytes from its object URL.
///
/// # Errors
///
/// Returns [`StoreError::JsError`] if the URL cannot be fetched
/// (e.g., the handle was already revoked) and [`StoreError::Status`]
/// on a non-success response.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn fetch_display_bytes(url: &str) -> Result<Vec<u8>, StoreError> {
    let window =
        web_sys::window().ok_or_else(|| StoreError::JsError("no global window".into()))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()
        .map_err(|_| StoreError::JsError("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(StoreError::Status {
            code: response.status(),
            text: response.status_text(),
        });
    }

    let buffer = JsFuture::from(response.array_buffer()?).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Publish one named artifact and return the CID the network minted.
///
/// Suspends until the upload round trip completes.
///
/// # Errors
///
/// Returns [`StoreError::JsError`] on network failure,
/// [`StoreError::Status`] when the endpoint rejects the request
/// (including an invalid access token), and [`StoreError::Receipt`]
/// when the response body is not a well-formed receipt.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn publish(
    config: &StorageConfig,
    name: &str,
    bytes: &[u8],
) -> Result<Cid, StoreError> {
    let body = js_sys::Uint8Array::from(bytes);

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from(body));

    let request = web_sys::Request::new_with_str_and_init(STORAGE_UPLOAD_URL, &opts)?;
    let headers = request.headers();
    headers.set("Authorization", &format!("Bearer {}", config.token))?;
    headers.set("X-NAME", &String::from(js_sys::encode_uri_component(name)))?;

    let window =
        web_sys::window().ok_or_else(|| StoreError::JsError("no global window".into()))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()
        .map_err(|_| StoreError::JsError("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(StoreError::Status {
            code: response.status(),
            text: response.status_text(),
        });
    }

    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| StoreError::JsError("text() did not return a string".into()))?;

    parse_receipt(&body)
}

/// Parse an upload receipt into the CID it carries.
///
/// # Errors
///
/// Returns [`StoreError::Receipt`] when the body is not valid receipt
/// JSON.
pub fn parse_receipt(body: &str) -> Result<Cid, StoreError> {
    let receipt: StoreReceipt =
        serde_json::from_str(body).map_err(|e| StoreError::Receipt(e.to_string()))?;
    Ok(Cid::new(receipt.cid))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn receipt_yields_the_network_cid() {
        let cid = parse_receipt(r#"{"cid":"bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi"}"#)
            .unwrap();
        assert_eq!(
            cid.as_str(),
            "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi",
        );
    }

    #[test]
    fn receipt_parsing_is_deterministic() {
        // Content-addressing: the same receipt (same bytes uploaded)
        // always resolves to the same identifier.
        let body = r#"{"cid":"bafyidenticalbytes"}"#;
        assert_eq!(parse_receipt(body).unwrap(), parse_receipt(body).unwrap());
    }

    #[test]
    fn extra_receipt_fields_are_ignored() {
        let cid = parse_receipt(r#"{"cid":"bafyxyz","carCid":"bagxyz"}"#).unwrap();
        assert_eq!(cid.as_str(), "bafyxyz");
    }

    #[test]
    fn malformed_receipts_are_rejected() {
        for body in ["", "not json", "{}", r#"{"cid":7}"#, r#"["bafyxyz"]"#] {
            assert!(
                matches!(parse_receipt(body), Err(StoreError::Receipt(_))),
                "{body:?}",
            );
        }
    }

    #[test]
    fn status_error_mentions_code_and_text() {
        let err = StoreError::Status {
            code: 401,
            text: "Unauthorized".to_owned(),
        };
        assert_eq!(err.to_string(), "storage network returned HTTP 401 Unauthorized");
    }
}
