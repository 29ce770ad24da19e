//! Detection endpoint client.
//!
//! Submits an encoded photo to the remote detection service and
//! returns the annotated image it sends back. The endpoint takes the
//! API key and output format as query parameters, the base64 data URL
//! as the raw request body (declared as URL-encoded form data — the
//! service's convention, not a description of the payload), and
//! responds with raw JPEG bytes.
//!
//! One request per submission; no retries. Requires a browser
//! environment (`wasm32-unknown-unknown` target).

use hamspot_core::{DetectionResult, EncodedImage, InferenceConfig};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Errors that can occur during a detection request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The fetch itself failed (network unreachable, CORS, aborted).
    #[error("browser API error: {0}")]
    JsError(String),

    /// The endpoint answered with a non-success status.
    #[error("inference endpoint returned HTTP {code} {text}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// HTTP status text.
        text: String,
    },

    /// The response body is not a recognizable image.
    #[error("inference response is not a valid image: {0}")]
    BadPayload(String),
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Submit an encoded photo for detection.
///
/// Suspends until the network round trip completes. On success the
/// response bytes are classified with [`image::guess_format`] before
/// being returned, so a malformed payload surfaces as an error rather
/// than a broken image element.
///
/// # Errors
///
/// Returns [`FetchError::JsError`] on network failure,
/// [`FetchError::Status`] on a non-success HTTP status, and
/// [`FetchError::BadPayload`] when the body is not a decodable image.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn detect(
    config: &InferenceConfig,
    image: &EncodedImage,
) -> Result<DetectionResult, FetchError> {
    let url = detect_url(&config.endpoint, &config.api_key);

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(image.as_str()));

    let request = web_sys::Request::new_with_str_and_init(&url, &opts)?;
    request
        .headers()
        .set("Content-Type", "application/x-www-form-urlencoded")?;

    let window =
        web_sys::window().ok_or_else(|| FetchError::JsError("no global window".into()))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()
        .map_err(|_| FetchError::JsError("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            code: response.status(),
            text: response.status_text(),
        });
    }

    let buffer = JsFuture::from(response.array_buffer()?).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    // The endpoint returns an annotated JPEG; anything the image
    // crate cannot classify is a malformed payload.
    image::guess_format(&bytes).map_err(|e| FetchError::BadPayload(e.to_string()))?;

    Ok(DetectionResult::new(bytes))
}

/// Build the request URL: `<endpoint>?api_key=<key>&format=image`.
fn detect_url(endpoint: &str, api_key: &str) -> String {
    let key = String::from(js_sys::encode_uri_component(api_key));
    format!("{endpoint}?api_key={key}&format=image")
}
