//! Domain layer - core data structures and types.

pub mod document;
pub mod session;

pub use document::{DEFAULT_FILE_NAME, DEFAULT_TEMPLATE, Document, SAVE_MIME_TYPE, SaveArtifact};
pub use session::{ScreenMode, SessionState, Theme};
