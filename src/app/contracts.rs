//! Contracts to the external collaborators the session drives.
//!
//! The session state machine never talks to FLTK directly; it goes through
//! these traits so the command logic in `controllers::session` stays
//! testable with mock collaborators.

use super::domain::{SaveArtifact, Theme};
use super::error::Result;

/// A file chosen and decoded by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    /// Display name (no directory components).
    pub name: String,
    pub content: String,
}

/// The pre-built text-editing surface. Change notification flows the other
/// way, as a `Message::BufferModified` from the widget's own callback.
pub trait EditorSurface {
    /// Present `buffer` with `theme`. Called after a load and after a theme
    /// toggle; implementations diff against what they already display so a
    /// theme-only change does not disturb the cursor.
    fn render(&mut self, buffer: &str, theme: Theme);

    /// Open the widget's internal search panel. Must work repeatedly,
    /// including while the panel is already open.
    fn open_search_panel(&mut self);

    /// Give the editing surface keyboard focus.
    fn focus(&mut self);
}

/// Local file capability. Pick-and-read and fire-and-forget save; the core
/// never touches the filesystem itself.
pub trait FileAccess {
    /// Prompt for a local file and decode it as text. `Ok(None)` when the
    /// user cancels. Implementations must not retain the selection, so the
    /// same path can be picked again next time.
    fn pick_and_read(&mut self) -> Result<Option<PickedFile>>;

    /// Offer `artifact` as a download/save under its suggested file name.
    /// No success confirmation.
    fn offer_download(&mut self, artifact: &SaveArtifact) -> Result<()>;
}

/// The platform's fullscreen capability. Requests may be denied; the
/// platform's own report (`is_fullscreen`) is the source of truth.
pub trait FullscreenHost {
    fn request_enter(&mut self) -> Result<()>;
    fn request_exit(&mut self);
    fn is_fullscreen(&self) -> bool;
}
