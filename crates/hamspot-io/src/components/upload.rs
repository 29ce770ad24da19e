//! Photo upload component with drag-and-drop and file picker.
//!
//! The component performs the validation and file-read stages and
//! reports each step as a [`SubmitEvent`], so the page controller
//! owns every state transition and no stage is skipped.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use hamspot_core::{FileSelection, ImageMime, SubmitError, SubmittedFile, validate_selection};

/// One step of a photo submission, as reported by [`PhotoUpload`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitEvent {
    /// A selection event fired; validation is starting.
    Selected,
    /// The selection passed validation; the file read is starting.
    Validated(ImageMime),
    /// The file's bytes were read; the submission is ready to encode.
    Ready(SubmittedFile),
    /// Validation or the file read failed.
    Rejected(SubmitError),
}

/// Props for the [`PhotoUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PhotoUploadProps {
    /// Called once per pipeline step of each selection.
    on_event: EventHandler<SubmitEvent>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Accepts JPEG and PNG photos. Validation happens on the declared
/// MIME type (derived from the filename the way a browser does)
/// before the file is read; the read is the pipeline's first
/// suspension point. Every outcome is reported through `on_event` —
/// the component keeps no pipeline state of its own.
#[component]
pub fn PhotoUpload(props: PhotoUploadProps) -> Element {
    let mut dragging = use_signal(|| false);

    // Validate and read the first file from a list. Shared by the
    // file-picker and drag-and-drop paths so the pipeline's front end
    // lives in one place.
    let process_files = move |files: Vec<FileData>| async move {
        props.on_event.call(SubmitEvent::Selected);

        let selection = files.first().map(|file| FileSelection::from_name(file.name()));
        let mime = match validate_selection(selection.as_ref()) {
            Ok(mime) => mime,
            Err(e) => {
                props.on_event.call(SubmitEvent::Rejected(e));
                return;
            }
        };
        // Validation guarantees a file is present.
        let Some(file) = files.first() else {
            return;
        };

        props.on_event.call(SubmitEvent::Validated(mime));

        match file.read_bytes().await {
            Ok(bytes) => {
                props.on_event.call(SubmitEvent::Ready(SubmittedFile {
                    name: file.name(),
                    mime,
                    bytes: bytes.to_vec(),
                }));
            }
            Err(e) => {
                props
                    .on_event
                    .call(SubmitEvent::Rejected(SubmitError::Read(e.to_string())));
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "upload-zone dragging"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            p { class: "upload-hint",
                "Drop a photo here or "
            }

            label { class: "upload-button",
                input {
                    r#type: "file",
                    accept: ".png,.jpg,.jpeg",
                    class: "hidden-input",
                    onchange: handle_files,
                }
                "Choose File"
            }

            p { class: "upload-formats",
                "JPEG or PNG"
            }
        }
    }
}
