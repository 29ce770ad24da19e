//! Livestream player embed.
//!
//! The streaming provider supplies a hosted playback surface; the
//! page embeds it in an iframe and shares real estate with it, and
//! nothing more — the submission pipeline never talks to it.

use dioxus::prelude::*;

/// Props for the [`StreamPlayer`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StreamPlayerProps {
    /// Provider playback identifier of the stream to embed.
    playback_id: String,
    /// Accessible title for the playback surface.
    title: String,
}

/// Embedded livestream player.
#[component]
pub fn StreamPlayer(props: StreamPlayerProps) -> Element {
    let src = format!(
        "https://lvpr.tv/?v={}&autoplay=1&muted=1",
        props.playback_id,
    );

    rsx! {
        div { class: "player-container",
            iframe {
                class: "player-frame",
                src: "{src}",
                title: "{props.title}",
                allow: "autoplay; encrypted-media; picture-in-picture",
                allowfullscreen: true,
            }
        }
    }
}
