use crate::app::contracts::{EditorSurface, FileAccess, FullscreenHost};
use crate::app::domain::{Document, ScreenMode, SessionState, Theme};
use crate::app::error::Result;

/// Mediates between toolbar commands and the editor surface / file access /
/// fullscreen host. Owns the document and the session state; collaborators
/// are borrowed per command so the whole command set is testable with mocks.
pub struct SessionController {
    document: Document,
    state: SessionState,
    /// Last search epoch the editor surface was notified about. The epoch is
    /// edge-triggered: each observed change means one "open + focus".
    seen_search_epoch: u64,
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            document: Document::untitled(),
            state: SessionState::new(),
            seen_search_epoch: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    /// Initial presentation of the current document.
    pub fn render_current<E: EditorSurface>(&self, editor: &mut E) {
        editor.render(self.document.buffer(), self.state.theme());
    }

    /// Let the user pick a file and load it into the document. Returns
    /// whether a file was actually loaded (`false` on cancel). A decode
    /// failure propagates and leaves the document untouched.
    pub fn open_file<F, E>(&mut self, files: &mut F, editor: &mut E) -> Result<bool>
    where
        F: FileAccess,
        E: EditorSurface,
    {
        let Some(picked) = files.pick_and_read()? else {
            return Ok(false);
        };
        self.document.load(picked.name, picked.content);
        editor.render(self.document.buffer(), self.state.theme());
        Ok(true)
    }

    /// Serialize the current buffer verbatim and offer it for saving.
    /// No dirty tracking: every save writes the buffer as-is.
    pub fn save_file<F: FileAccess>(&mut self, files: &mut F) -> Result<()> {
        let artifact = self.document.serialize_for_save();
        files.offer_download(&artifact)
    }

    /// One change notification from the editor surface.
    pub fn buffer_edited(&mut self, new_buffer: String) {
        self.document.edit(new_buffer);
    }

    /// The user edited the displayed file name.
    pub fn rename(&mut self, new_name: String) {
        self.document.rename(new_name);
    }

    /// Flip the theme and re-render the surface with the new value.
    pub fn toggle_theme<E: EditorSurface>(&mut self, editor: &mut E) -> Theme {
        let theme = self.state.toggle_theme();
        editor.render(self.document.buffer(), theme);
        theme
    }

    /// Flip the fullscreen axis, issuing the matching platform request.
    /// Entering may be denied; the denial is logged and the follow-up
    /// [`reconcile_fullscreen`] (fed by the platform's own report) snaps
    /// the logical state back. Exit is only issued when the platform says
    /// it is actually fullscreen.
    ///
    /// [`reconcile_fullscreen`]: SessionController::reconcile_fullscreen
    pub fn toggle_fullscreen<H: FullscreenHost>(&mut self, host: &mut H) -> ScreenMode {
        match self.state.toggle_fullscreen() {
            ScreenMode::Fullscreen => {
                if let Err(e) = host.request_enter() {
                    eprintln!("WARN: fullscreen request denied: {}", e);
                }
            }
            ScreenMode::Windowed => {
                if host.is_fullscreen() {
                    host.request_exit();
                }
            }
        }
        self.state.screen()
    }

    /// Platform fullscreen-change notification: the source of truth.
    pub fn reconcile_fullscreen(&mut self, platform_fullscreen: bool) {
        self.state.reconcile_fullscreen(platform_fullscreen);
    }

    /// One user-issued "open search" command. The epoch increments once per
    /// command, and each observed increment fires exactly one open + focus
    /// on the surface, even with no other state change in between.
    pub fn trigger_search<E: EditorSurface>(&mut self, editor: &mut E) {
        let epoch = self.state.trigger_search();
        if epoch != self.seen_search_epoch {
            self.seen_search_epoch = epoch;
            editor.open_search_panel();
            editor.focus();
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::contracts::PickedFile;
    use crate::app::domain::SaveArtifact;
    use crate::app::error::AppError;

    #[derive(Default)]
    struct MockEditor {
        rendered: Vec<(String, Theme)>,
        search_opens: usize,
        focuses: usize,
    }

    impl EditorSurface for MockEditor {
        fn render(&mut self, buffer: &str, theme: Theme) {
            self.rendered.push((buffer.to_string(), theme));
        }

        fn open_search_panel(&mut self) {
            self.search_opens += 1;
        }

        fn focus(&mut self) {
            self.focuses += 1;
        }
    }

    enum PickOutcome {
        File(&'static str, &'static str),
        Cancel,
        Undecodable,
    }

    struct MockFiles {
        pick: PickOutcome,
        picks: usize,
        downloads: Vec<SaveArtifact>,
    }

    impl MockFiles {
        fn picking(pick: PickOutcome) -> Self {
            Self { pick, picks: 0, downloads: Vec::new() }
        }
    }

    impl FileAccess for MockFiles {
        fn pick_and_read(&mut self) -> Result<Option<PickedFile>> {
            self.picks += 1;
            match self.pick {
                PickOutcome::File(name, content) => Ok(Some(PickedFile {
                    name: name.to_string(),
                    content: content.to_string(),
                })),
                PickOutcome::Cancel => Ok(None),
                PickOutcome::Undecodable => Err(AppError::Decode("photo.png".to_string())),
            }
        }

        fn offer_download(&mut self, artifact: &SaveArtifact) -> Result<()> {
            self.downloads.push(artifact.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockHost {
        enter_requests: usize,
        exit_requests: usize,
        fullscreen: bool,
        deny_enter: bool,
    }

    impl FullscreenHost for MockHost {
        fn request_enter(&mut self) -> Result<()> {
            self.enter_requests += 1;
            if self.deny_enter {
                Err(AppError::Fullscreen("denied".to_string()))
            } else {
                self.fullscreen = true;
                Ok(())
            }
        }

        fn request_exit(&mut self) {
            self.exit_requests += 1;
            self.fullscreen = false;
        }

        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }
    }

    #[test]
    fn test_trigger_search_fires_once_per_command() {
        let mut ctrl = SessionController::new();
        let mut editor = MockEditor::default();

        for _ in 0..4 {
            ctrl.trigger_search(&mut editor);
        }

        assert_eq!(editor.search_opens, 4);
        assert_eq!(editor.focuses, 4);
        assert_eq!(ctrl.state().search_epoch(), 4);
    }

    #[test]
    fn test_open_file_loads_and_renders() {
        let mut ctrl = SessionController::new();
        let mut editor = MockEditor::default();
        let mut files = MockFiles::picking(PickOutcome::File("page.html", "<p>hi</p>"));

        let loaded = ctrl.open_file(&mut files, &mut editor).unwrap();
        assert!(loaded);
        assert_eq!(ctrl.document().file_name(), "page.html");
        assert_eq!(ctrl.document().buffer(), "<p>hi</p>");
        assert_eq!(editor.rendered.len(), 1);
        assert_eq!(editor.rendered[0], ("<p>hi</p>".to_string(), Theme::Dark));
    }

    #[test]
    fn test_open_cancel_is_a_no_op() {
        let mut ctrl = SessionController::new();
        let mut editor = MockEditor::default();
        let mut files = MockFiles::picking(PickOutcome::Cancel);
        let before = ctrl.document().clone();

        let loaded = ctrl.open_file(&mut files, &mut editor).unwrap();
        assert!(!loaded);
        assert_eq!(ctrl.document(), &before);
        assert!(editor.rendered.is_empty());
    }

    #[test]
    fn test_undecodable_file_leaves_document_untouched() {
        let mut ctrl = SessionController::new();
        let mut editor = MockEditor::default();
        let mut files = MockFiles::picking(PickOutcome::Undecodable);
        let before = ctrl.document().clone();

        let result = ctrl.open_file(&mut files, &mut editor);
        assert!(matches!(result, Err(AppError::Decode(_))));
        assert_eq!(ctrl.document(), &before);
        assert!(editor.rendered.is_empty());
    }

    #[test]
    fn test_save_serializes_current_buffer_verbatim() {
        let mut ctrl = SessionController::new();
        let mut files = MockFiles::picking(PickOutcome::Cancel);

        ctrl.buffer_edited("<p>draft</p>".to_string());
        ctrl.rename("draft.html".to_string());
        ctrl.save_file(&mut files).unwrap();
        // A second save re-serializes; nothing got marked clean.
        ctrl.save_file(&mut files).unwrap();

        assert_eq!(files.downloads.len(), 2);
        for artifact in &files.downloads {
            assert_eq!(artifact.file_name, "draft.html");
            assert_eq!(artifact.content, "<p>draft</p>");
            assert_eq!(artifact.mime_type, "text/html");
        }
    }

    #[test]
    fn test_toggle_theme_rerenders_current_buffer() {
        let mut ctrl = SessionController::new();
        let mut editor = MockEditor::default();

        let theme = ctrl.toggle_theme(&mut editor);
        assert_eq!(theme, Theme::Light);
        assert_eq!(editor.rendered.len(), 1);
        assert_eq!(editor.rendered[0].1, Theme::Light);
        assert_eq!(editor.rendered[0].0, ctrl.document().buffer());
    }

    #[test]
    fn test_fullscreen_issues_one_request_per_toggle() {
        let mut ctrl = SessionController::new();
        let mut host = MockHost::default();

        assert_eq!(ctrl.toggle_fullscreen(&mut host), ScreenMode::Fullscreen);
        assert_eq!(host.enter_requests, 1);
        assert_eq!(host.exit_requests, 0);

        assert_eq!(ctrl.toggle_fullscreen(&mut host), ScreenMode::Windowed);
        assert_eq!(host.enter_requests, 1);
        assert_eq!(host.exit_requests, 1);
    }

    #[test]
    fn test_exit_skipped_when_platform_never_entered() {
        let mut ctrl = SessionController::new();
        let mut host = MockHost { deny_enter: true, ..Default::default() };

        ctrl.toggle_fullscreen(&mut host);
        assert_eq!(host.enter_requests, 1);
        // Denied: platform stayed windowed, notification reconciles us.
        ctrl.reconcile_fullscreen(host.is_fullscreen());
        assert_eq!(ctrl.state().screen(), ScreenMode::Windowed);

        // Toggling again from the reconciled state asks to enter, not exit.
        ctrl.toggle_fullscreen(&mut host);
        assert_eq!(host.enter_requests, 2);
        assert_eq!(host.exit_requests, 0);
    }

    #[test]
    fn test_session_scenario() {
        // The full lifecycle: defaults, theme toggle, load, save.
        let mut ctrl = SessionController::new();
        let mut editor = MockEditor::default();
        let mut files = MockFiles::picking(PickOutcome::File("page.html", "<p>hi</p>"));

        assert_eq!(ctrl.document().file_name(), "untitled.html");
        assert_eq!(ctrl.theme(), Theme::Dark);

        ctrl.toggle_theme(&mut editor);
        assert_eq!(ctrl.theme(), Theme::Light);

        ctrl.open_file(&mut files, &mut editor).unwrap();
        assert_eq!(ctrl.document().buffer(), "<p>hi</p>");
        assert_eq!(ctrl.document().file_name(), "page.html");
        assert_eq!(ctrl.theme(), Theme::Light);

        ctrl.save_file(&mut files).unwrap();
        let artifact = files.downloads.last().unwrap();
        assert_eq!(artifact.file_name, "page.html");
        assert_eq!(artifact.content, "<p>hi</p>");
        assert_eq!(artifact.mime_type, "text/html");
    }
}
