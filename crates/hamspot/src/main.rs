use dioxus::prelude::*;
use hamspot_core::{
    AppConfig, Cid, ConfigError, ConfigSource, SessionState, StorageConfig, SubmitError, encode,
    ensure_publishable,
};
use hamspot_io::{
    DetectionHandle, PhotoUpload, ResultPanel, StreamPlayer, SubmitEvent, analytics, inference,
    storage,
};
use wasm_bindgen::JsValue;

fn main() {
    dioxus::launch(app);
}

/// Resolve the startup configuration from build-time values.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] naming the first absent secret.
fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_source(ConfigSource {
        detect_url: option_env!("HAMSPOT_DETECT_URL"),
        detect_api_key: option_env!("HAMSPOT_DETECT_API_KEY"),
        storage_token: option_env!("HAMSPOT_STORAGE_TOKEN"),
        stream_key: option_env!("HAMSPOT_STREAM_KEY"),
        playback_id: option_env!("HAMSPOT_PLAYBACK_ID"),
    })
}

/// Log a pipeline failure to the browser console alongside the
/// user-visible message.
fn report_error(err: &SubmitError) {
    web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
}

/// Fetch the displayed result's bytes back from its object URL and
/// publish them as one named artifact, yielding the network's CID.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
async fn publish_display(
    config: &StorageConfig,
    handle: &DetectionHandle,
) -> Result<Cid, SubmitError> {
    let bytes = storage::fetch_display_bytes(handle.url())
        .await
        .map_err(|e| SubmitError::Upload(e.to_string()))?;
    storage::publish(config, storage::ARTIFACT_NAME, &bytes)
        .await
        .map_err(|e| SubmitError::Upload(e.to_string()))
}

/// Root application component.
///
/// Owns the submission state machine, the displayed result handle,
/// and the generation counter, and wires the upload, player, and
/// result components together around the page copy.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let config = use_hook(load_config);
    let mut state = use_signal(|| SessionState::Idle);
    let mut handle = use_signal(|| Option::<DetectionHandle>::None);
    let mut generation = use_signal(|| 0u64);

    // Release the displayed result's object URL when the session ends.
    {
        let handle = handle;
        use_drop(move || {
            if let Some(ref current) = *handle.peek() {
                current.revoke();
            }
        });
    }

    // Fail fast on a missing secret: show a configuration error
    // instead of sending empty credentials to the remote services.
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            return rsx! {
                style { dangerous_inner_html: include_str!("../assets/main.css") }
                div { class: "config-error",
                    h1 { "hamspot" }
                    p { "{e}" }
                    p { "Set the missing value and rebuild the page." }
                }
            };
        }
    };

    // --- Submission pipeline handler ---
    // The upload component reports each stage; this handler owns every
    // state transition so no stage is skipped and a late result from a
    // superseded submission is discarded (last-write-wins).
    let inference_config = config.inference.clone();
    let on_submit_event = move |event: SubmitEvent| match event {
        SubmitEvent::Selected => state.set(SessionState::Validating),
        SubmitEvent::Validated(_) => state.set(SessionState::Encoding),
        SubmitEvent::Rejected(err) => {
            report_error(&err);
            state.set(SessionState::Error(err));
        }
        SubmitEvent::Ready(file) => {
            // Supersede any in-flight submission.
            generation += 1;
            let my_generation = *generation.peek();
            let config = inference_config.clone();

            state.set(SessionState::Detecting);
            spawn(async move {
                // Yield so the Detecting indicator paints before the
                // request goes out.
                gloo_timers::future::TimeoutFuture::new(0).await;

                let encoded = encode::to_data_url(&file);
                let outcome = inference::detect(&config, &encoded).await;

                if *generation.peek() != my_generation {
                    // A newer submission took over while we were in
                    // flight — discard this result silently.
                    return;
                }

                let outcome = outcome
                    .map_err(|e| SubmitError::Inference(e.to_string()))
                    .and_then(|result| {
                        DetectionHandle::from_result(&result)
                            .map_err(|e| SubmitError::Inference(e.to_string()))
                    });
                match outcome {
                    Ok(new_handle) => {
                        // Release the superseded handle exactly once.
                        if let Some(ref prev) = *handle.peek() {
                            prev.revoke();
                        }
                        handle.set(Some(new_handle));
                        analytics::track(analytics::EVENT_DETECTION);
                        state.set(SessionState::Detected);
                    }
                    Err(err) => {
                        report_error(&err);
                        state.set(SessionState::Error(err));
                    }
                }
            });
        }
    };

    // --- Publish handler ---
    let storage_config = config.storage.clone();
    let on_publish = move |()| {
        let publishable = ensure_publishable(&state.peek());
        if let Err(err) = publishable {
            state.set(SessionState::Error(err));
            return;
        }
        let Some(current) = handle.peek().as_ref().cloned() else {
            state.set(SessionState::Error(SubmitError::NoResultToUpload));
            return;
        };
        let config = storage_config.clone();
        let my_generation = *generation.peek();

        state.set(SessionState::Uploading);
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;

            let outcome = publish_display(&config, &current).await;

            if *generation.peek() != my_generation {
                // A new submission started while publishing.
                return;
            }
            match outcome {
                Ok(cid) => {
                    analytics::track(analytics::EVENT_PUBLISH);
                    state.set(SessionState::Stored(cid));
                }
                Err(err) => {
                    report_error(&err);
                    state.set(SessionState::Error(err));
                }
            }
        });
    };

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        div { class: "page",
            header { class: "masthead",
                h1 { class: "wordmark", "hamspot" }
                p { class: "tagline", "Making hamster health a public good" }
            }

            div { class: "content",
                section { class: "copy-block",
                    h2 { class: "sub-title", "Our Vision" }
                    p { class: "description",
                        "We envision a world where every pet hamster plays a role in \
                         advancing biomedicine — an ecosystem that benefits both \
                         animals and humans."
                    }

                    h2 { class: "sub-title", "Why It Matters" }
                    ul { class: "bullet-points",
                        li {
                            b { "Over 1 million pets" }
                            ": there are over a million pet hamsters in the U.S. alone, \
                             a large population that could contribute to valuable research."
                        }
                        li {
                            b { "Human-like immunity" }
                            ": hamsters have an immune system more similar to humans \
                             than mice do, making them excellent models for studying \
                             a variety of diseases."
                        }
                        li {
                            b { "Ethical considerations" }
                            ": using pet hamsters that are already in homes can reduce \
                             the number of lab rodents and promote more ethical, \
                             cost-effective research."
                        }
                    }
                }

                h2 { class: "sub-title", "Live" }
                p { class: "description",
                    "Watch the enclosure live — the stream lets owners and \
                     veterinarians monitor hamster activity, which matters most \
                     during pet clinical trials."
                }

                StreamPlayer {
                    playback_id: config.stream.playback_id.clone(),
                    title: "hamspot live stream".to_string(),
                }

                h2 { class: "sub-title", "Try the Detector" }
                p { class: "description",
                    "Take a screenshot of the livestream above and upload it below \
                     to see the hamster detection model in action. Publishing pins \
                     the annotated result to content-addressed storage for \
                     reproducible results."
                }

                div { class: "demo-block",
                    PhotoUpload {
                        on_event: on_submit_event,
                    }

                    if state().is_busy() {
                        p { class: "status-line", "Processing\u{2026}" }
                    }

                    if let Some(msg) = state().error_message() {
                        div { class: "error-banner",
                            p { "{msg}" }
                        }
                    }

                    ResultPanel {
                        handle: handle(),
                        state: state(),
                        on_publish: on_publish,
                    }
                }
            }

            footer { class: "footer" }
        }
    }
}
