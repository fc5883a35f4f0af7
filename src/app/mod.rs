//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, SessionState)
//! - `contracts` - Traits the session drives (editor surface, file access, fullscreen)
//! - `controllers/` - Orchestration (SessionController)
//! - `syntax/` - HTML highlighting
//! - `state.rs` - FLTK-facing coordinator

pub mod buffer_utils;
pub mod contracts;
pub mod controllers;
pub mod domain;
pub mod error;
pub mod file_filters;
pub mod messages;
pub mod state;
pub mod syntax;
pub mod text_ops;

// Re-exports for convenient external access
pub use contracts::{EditorSurface, FileAccess, FullscreenHost, PickedFile};
pub use controllers::SessionController;
pub use domain::{Document, SaveArtifact, ScreenMode, SessionState, Theme};
pub use error::{AppError, Result};
pub use messages::Message;
