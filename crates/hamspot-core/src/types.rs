//! Shared types for the hamspot submission pipeline.

use serde::{Deserialize, Serialize};

/// MIME type of an accepted image submission.
///
/// Only JPEG and PNG photos are accepted by the detection demo.
/// `image/jpg` is a widespread non-standard alias and is folded into
/// [`ImageMime::Jpeg`] at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageMime {
    /// `image/jpeg` (also declared as `image/jpg`).
    Jpeg,
    /// `image/png`.
    Png,
}

impl ImageMime {
    /// Parse a declared MIME type string.
    ///
    /// Returns `None` for anything outside the accepted set
    /// {`image/jpeg`, `image/png`, `image/jpg`}.
    #[must_use]
    pub fn from_declared(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            _ => None,
        }
    }

    /// Canonical MIME string, suitable for a data URL or Blob type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

impl std::fmt::Display for ImageMime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a filename extension to the MIME type a browser would declare
/// for it.
///
/// Unknown extensions map to `application/octet-stream`, which the
/// validator rejects. The table covers the formats a visitor is
/// likely to pick so rejections carry an accurate declared type.
#[must_use]
pub fn mime_from_extension(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map_or("", |(_, ext)| ext);
    if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
        "image/jpeg"
    } else if ext.eq_ignore_ascii_case("png") {
        "image/png"
    } else if ext.eq_ignore_ascii_case("gif") {
        "image/gif"
    } else if ext.eq_ignore_ascii_case("webp") {
        "image/webp"
    } else if ext.eq_ignore_ascii_case("bmp") {
        "image/bmp"
    } else if ext.eq_ignore_ascii_case("pdf") {
        "application/pdf"
    } else {
        "application/octet-stream"
    }
}

/// Metadata of a file selection, available before the file's bytes
/// have been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    /// Display name of the selected file.
    pub name: String,
    /// MIME type declared for the selection.
    pub mime: String,
}

impl FileSelection {
    /// Build a selection from a filename, deriving the declared MIME
    /// type from its extension the way a browser would.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let mime = mime_from_extension(&name).to_owned();
        Self { name, mime }
    }
}

/// An accepted submission: validated metadata plus the file's bytes.
///
/// Owned exclusively by the submission that created it; discarded once
/// encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedFile {
    /// Display name of the file.
    pub name: String,
    /// Validated MIME type.
    pub mime: ImageMime,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

/// A base64 data URL derived from exactly one [`SubmittedFile`].
///
/// Constructed only by [`crate::encode::to_data_url`]; immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    mime: ImageMime,
    data_url: String,
}

impl EncodedImage {
    pub(crate) const fn new(mime: ImageMime, data_url: String) -> Self {
        Self { mime, data_url }
    }

    /// MIME type the data URL is tagged with.
    #[must_use]
    pub const fn mime(&self) -> ImageMime {
        self.mime
    }

    /// The full `data:<mime>;base64,<payload>` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.data_url
    }

    /// Consume the encoding and return the data URL string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.data_url
    }
}

/// Annotated image bytes returned by the detection service.
///
/// Exists only after a successful inference call. The payload is an
/// annotated JPEG; it is kept opaque here and turned into a
/// displayable resource by the I/O layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    bytes: Vec<u8>,
}

impl DetectionResult {
    /// MIME type of the annotated payload.
    pub const MIME: &'static str = "image/jpeg";

    /// Wrap the raw annotated-image bytes.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The raw payload.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Payload length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the payload is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A content identifier minted by the storage network.
///
/// Deterministic for identical bytes (content-addressing). The client
/// never computes one locally; it only carries what the network
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cid(String);

impl Cid {
    /// Wrap an identifier string returned by the storage network.
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the identifier string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Cid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors produced by the submission pipeline.
///
/// Every variant is caught at the stage that produced it and rendered
/// as a single user-visible message; none escapes to the surrounding
/// page. The validator messages match the page copy verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The selection event carried no file.
    #[error("No file selected.")]
    NoFileSelected,

    /// The declared MIME type is not an accepted image type.
    #[error("Invalid file type. Only JPEG and PNG are allowed.")]
    UnsupportedType {
        /// The MIME type the selection declared.
        declared: String,
    },

    /// Reading the selected file failed.
    #[error("failed to read the selected file: {0}")]
    Read(String),

    /// The detection request failed (network, HTTP status, or
    /// unrecognizable payload).
    #[error("detection request failed: {0}")]
    Inference(String),

    /// Publishing to the storage network failed.
    #[error("publish to storage failed: {0}")]
    Upload(String),

    /// Publish was requested without a displayed detection result.
    #[error("no detection result to publish")]
    NoResultToUpload,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // --- ImageMime tests ---

    #[test]
    fn mime_accepts_the_three_declared_forms() {
        assert_eq!(ImageMime::from_declared("image/jpeg"), Some(ImageMime::Jpeg));
        assert_eq!(ImageMime::from_declared("image/jpg"), Some(ImageMime::Jpeg));
        assert_eq!(ImageMime::from_declared("image/png"), Some(ImageMime::Png));
    }

    #[test]
    fn mime_rejects_everything_else() {
        for declared in [
            "application/pdf",
            "image/gif",
            "image/webp",
            "text/plain",
            "",
            "IMAGE/JPEG",
        ] {
            assert_eq!(ImageMime::from_declared(declared), None, "{declared:?}");
        }
    }

    #[test]
    fn mime_canonical_strings() {
        assert_eq!(ImageMime::Jpeg.as_str(), "image/jpeg");
        assert_eq!(ImageMime::Png.as_str(), "image/png");
        // The jpg alias canonicalizes to image/jpeg.
        assert_eq!(
            ImageMime::from_declared("image/jpg").unwrap().as_str(),
            "image/jpeg"
        );
    }

    #[test]
    fn extension_mapping_matches_browser_behavior() {
        assert_eq!(mime_from_extension("hamster.jpg"), "image/jpeg");
        assert_eq!(mime_from_extension("hamster.JPEG"), "image/jpeg");
        assert_eq!(mime_from_extension("cage.png"), "image/png");
        assert_eq!(mime_from_extension("doc.pdf"), "application/pdf");
        assert_eq!(mime_from_extension("archive.tar.gz"), "application/octet-stream");
        assert_eq!(mime_from_extension("noextension"), "application/octet-stream");
    }

    #[test]
    fn selection_from_name_derives_mime() {
        let selection = FileSelection::from_name("hamster.jpg");
        assert_eq!(selection.name, "hamster.jpg");
        assert_eq!(selection.mime, "image/jpeg");
    }

    // --- Cid tests ---

    #[test]
    fn cid_round_trips_the_network_string() {
        let cid = Cid::new("bafybeigdyrztxyz".to_owned());
        assert_eq!(cid.as_str(), "bafybeigdyrztxyz");
        assert_eq!(cid.to_string(), "bafybeigdyrztxyz");
        assert_eq!(cid.into_inner(), "bafybeigdyrztxyz");
    }

    #[test]
    fn cid_serde_round_trip() {
        let cid = Cid::new("bafyxyz".to_owned());
        let json = serde_json::to_string(&cid).unwrap();
        assert_eq!(json, "\"bafyxyz\"");
        let back: Cid = serde_json::from_str(&json).unwrap();
        assert_eq!(cid, back);
    }

    // --- DetectionResult tests ---

    #[test]
    fn detection_result_preserves_byte_length() {
        let payload = vec![0xFFu8; 40 * 1024];
        let result = DetectionResult::new(payload.clone());
        assert_eq!(result.len(), 40 * 1024);
        assert_eq!(result.bytes(), payload.as_slice());
        assert!(!result.is_empty());
        assert_eq!(DetectionResult::MIME, "image/jpeg");
    }

    // --- SubmitError display tests ---

    #[test]
    fn validator_messages_match_page_copy() {
        assert_eq!(SubmitError::NoFileSelected.to_string(), "No file selected.");
        assert_eq!(
            SubmitError::UnsupportedType {
                declared: "application/pdf".to_owned(),
            }
            .to_string(),
            "Invalid file type. Only JPEG and PNG are allowed.",
        );
    }

    #[test]
    fn error_messages_are_never_empty() {
        let errors = [
            SubmitError::NoFileSelected,
            SubmitError::UnsupportedType {
                declared: String::new(),
            },
            SubmitError::Read("gone".to_owned()),
            SubmitError::Inference("HTTP 500".to_owned()),
            SubmitError::Upload("unauthorized".to_owned()),
            SubmitError::NoResultToUpload,
        ];
        for err in errors {
            assert!(!err.to_string().is_empty(), "{err:?}");
        }
    }
}
