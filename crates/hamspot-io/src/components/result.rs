//! Detection result panel: annotated image, publish action, CID.

use dioxus::prelude::*;
use hamspot_core::SessionState;
use wasm_bindgen_futures::JsFuture;

use crate::blob::DetectionHandle;

/// Props for the [`ResultPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultPanelProps {
    /// Handle of the currently displayed result, if any.
    handle: Option<DetectionHandle>,
    /// Current submission state; gates the publish button and
    /// provides the CID once stored.
    state: SessionState,
    /// Called when the visitor asks to publish the displayed result.
    on_publish: EventHandler<()>,
}

/// Shows the annotated image once a detection has succeeded, with a
/// publish button and, after publication, the network-minted CID with
/// a copy-to-clipboard shortcut.
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let mut copy_error = use_signal(|| Option::<String>::None);

    // Clear a stale copy error whenever the stored CID changes.
    let cid = props.state.cid().cloned();
    {
        let cid = cid.clone();
        use_effect(move || {
            let _ = &cid;
            copy_error.set(None);
        });
    }

    let Some(ref handle) = props.handle else {
        return rsx! {};
    };

    let can_publish = props.state.can_publish();
    let uploading = matches!(props.state, SessionState::Uploading);

    let copy_click = {
        let cid = cid.clone();
        move |_| {
            let Some(ref cid) = cid else { return };
            let text = cid.as_str().to_owned();
            spawn(async move {
                match copy_text(&text).await {
                    Ok(()) => copy_error.set(None),
                    Err(e) => copy_error.set(Some(format!("Copy failed: {e}"))),
                }
            });
        }
    };

    rsx! {
        div { class: "result-panel",
            img {
                class: "result-image",
                src: "{handle.url()}",
                alt: "Annotated detection result",
            }

            if uploading {
                p { class: "status-line", "Publishing\u{2026}" }
            } else {
                button {
                    class: if can_publish { "publish-button" } else { "publish-button disabled" },
                    disabled: !can_publish,
                    onclick: move |_| props.on_publish.call(()),
                    "Publish to IPFS"
                }
            }

            if let Some(ref cid) = cid {
                p { class: "cid-line",
                    "CID: {cid}"
                    button {
                        class: "copy-button",
                        onclick: copy_click,
                        "Copy"
                    }
                }
            }

            if let Some(ref err) = copy_error() {
                p { class: "error-text", "{err}" }
            }
        }
    }
}

/// Copy `text` to the system clipboard via `navigator.clipboard`.
///
/// Requires a user-gesture context (i.e., a click handler).
#[allow(clippy::future_not_send)] // WASM is single-threaded; Clipboard is !Send
async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no global window".to_owned())?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(())
}
