//! Dioxus UI components for hamspot.
//!
//! Provides the photo upload zone, the detection result panel, and
//! the livestream player embed.

mod player;
mod result;
mod upload;

pub use player::StreamPlayer;
pub use result::ResultPanel;
pub use upload::{PhotoUpload, SubmitEvent};
