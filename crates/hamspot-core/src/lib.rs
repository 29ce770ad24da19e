//! hamspot-core: Pure photo submission pipeline (sans-IO).
//!
//! Models the detection demo's client-side pipeline:
//! validate -> encode -> detect -> display -> publish,
//! as data types and pure functions. This crate has **no I/O
//! dependencies** -- file reading, fetch calls, and object-URL
//! handling live in `hamspot-io`.

pub mod config;
pub mod encode;
pub mod state;
pub mod types;
pub mod validate;

pub use config::{AppConfig, ConfigError, ConfigSource, InferenceConfig, StorageConfig, StreamConfig};
pub use state::{SessionState, ensure_publishable};
pub use types::{
    Cid, DetectionResult, EncodedImage, FileSelection, ImageMime, SubmitError, SubmittedFile,
};
pub use validate::{ALLOWED_MIME_TYPES, validate_selection};
