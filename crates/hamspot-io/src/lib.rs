//! hamspot-io: Browser I/O and Dioxus component library.
//!
//! Handles the detection fetch call, content-addressed publication,
//! object-URL lifecycle for the displayed result, analytics events,
//! and provides the UI components for the hamspot page.

pub mod analytics;
pub mod blob;
pub mod components;
pub mod inference;
pub mod storage;

pub use blob::DetectionHandle;
pub use components::{PhotoUpload, ResultPanel, StreamPlayer, SubmitEvent};
