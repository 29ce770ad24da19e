//! Data-URL encoding of a submitted photo.
//!
//! The encoder's asynchronous half — reading the file's bytes — lives
//! in the component layer where the browser file API is. This module
//! holds the pure half: turning the bytes of one [`SubmittedFile`]
//! into the `data:<mime>;base64,` string the detection endpoint
//! expects as its request body.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::types::{EncodedImage, SubmittedFile};

/// Encode a submitted file as a base64 data URL.
///
/// The output is tagged with the file's canonical MIME type and is
/// never mutated after creation.
#[must_use]
pub fn to_data_url(file: &SubmittedFile) -> EncodedImage {
    let payload = STANDARD.encode(&file.bytes);
    let data_url = format!("data:{};base64,{payload}", file.mime.as_str());
    EncodedImage::new(file.mime, data_url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::ImageMime;

    fn submitted(mime: ImageMime, bytes: Vec<u8>) -> SubmittedFile {
        SubmittedFile {
            name: "hamster.jpg".to_owned(),
            mime,
            bytes,
        }
    }

    #[test]
    fn data_url_carries_the_expected_prefix() {
        let encoded = to_data_url(&submitted(ImageMime::Jpeg, vec![1, 2, 3]));
        assert!(encoded.as_str().starts_with("data:image/jpeg;base64,"));
        assert_eq!(encoded.mime(), ImageMime::Jpeg);

        let encoded = to_data_url(&submitted(ImageMime::Png, vec![9]));
        assert!(encoded.as_str().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn payload_decodes_back_to_the_original_bytes() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let encoded = to_data_url(&submitted(ImageMime::Png, bytes.clone()));
        let payload = encoded
            .as_str()
            .strip_prefix("data:image/png;base64,")
            .unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn encoded_length_matches_base64_overhead() {
        // base64 expands 3 input bytes to 4 output characters, padded
        // to a multiple of 4.
        let bytes = vec![0u8; 50 * 1024];
        let encoded = to_data_url(&submitted(ImageMime::Jpeg, bytes));
        let payload_len = encoded.as_str().len() - "data:image/jpeg;base64,".len();
        assert_eq!(payload_len, 50 * 1024 / 3 * 4 + 4);
    }

    #[test]
    fn empty_file_still_produces_a_tagged_url() {
        let encoded = to_data_url(&submitted(ImageMime::Jpeg, Vec::new()));
        assert_eq!(encoded.as_str(), "data:image/jpeg;base64,");
    }

    #[test]
    fn into_string_returns_the_same_url() {
        let encoded = to_data_url(&submitted(ImageMime::Png, vec![7, 7, 7]));
        let as_str = encoded.as_str().to_owned();
        assert_eq!(encoded.into_string(), as_str);
    }
}
