//! Input validation for photo submissions.
//!
//! Runs before the file is read and before any network activity: a
//! rejected selection never reaches the encoder or the detection
//! endpoint.

use crate::types::{FileSelection, ImageMime, SubmitError};

/// Declared MIME types accepted by the pipeline.
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg"];

/// Validate a file selection.
///
/// Accepts the selection when its declared MIME type is one of
/// [`ALLOWED_MIME_TYPES`] and returns the parsed [`ImageMime`]. The
/// file itself is passed through unchanged — no resampling and no
/// size cap.
///
/// # Errors
///
/// Returns [`SubmitError::NoFileSelected`] when `selection` is `None`
/// (the selection event carried no file), and
/// [`SubmitError::UnsupportedType`] for any other declared type.
pub fn validate_selection(selection: Option<&FileSelection>) -> Result<ImageMime, SubmitError> {
    let selection = selection.ok_or(SubmitError::NoFileSelected)?;
    ImageMime::from_declared(&selection.mime).ok_or_else(|| SubmitError::UnsupportedType {
        declared: selection.mime.clone(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_rejected() {
        let result = validate_selection(None);
        assert_eq!(result, Err(SubmitError::NoFileSelected));
    }

    #[test]
    fn jpeg_and_png_selections_pass() {
        for (name, expected) in [
            ("hamster.jpg", ImageMime::Jpeg),
            ("hamster.jpeg", ImageMime::Jpeg),
            ("cage.png", ImageMime::Png),
        ] {
            let selection = FileSelection::from_name(name);
            assert_eq!(validate_selection(Some(&selection)), Ok(expected), "{name}");
        }
    }

    #[test]
    fn jpg_alias_mime_passes() {
        let selection = FileSelection {
            name: "photo.jpg".to_owned(),
            mime: "image/jpg".to_owned(),
        };
        assert_eq!(validate_selection(Some(&selection)), Ok(ImageMime::Jpeg));
    }

    #[test]
    fn pdf_selection_is_rejected_with_its_declared_type() {
        let selection = FileSelection::from_name("doc.pdf");
        let err = validate_selection(Some(&selection)).unwrap_err();
        assert_eq!(
            err,
            SubmitError::UnsupportedType {
                declared: "application/pdf".to_owned(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Invalid file type. Only JPEG and PNG are allowed.",
        );
    }

    #[test]
    fn every_allowed_mime_parses() {
        for mime in ALLOWED_MIME_TYPES {
            assert!(ImageMime::from_declared(mime).is_some(), "{mime}");
        }
    }

    #[test]
    fn non_image_formats_are_rejected() {
        for name in ["report.gif", "clip.webp", "scan.bmp", "notes.txt", "data"] {
            let selection = FileSelection::from_name(name);
            assert!(
                matches!(
                    validate_selection(Some(&selection)),
                    Err(SubmitError::UnsupportedType { .. })
                ),
                "{name}",
            );
        }
    }
}
