/// All messages that can be sent through the FLTK channel.
/// Each toolbar/menu callback sends one of these; the dispatch loop in main
/// handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileOpen,
    FileSave,
    FileQuit,

    // View
    ToggleTheme,
    ToggleFullscreen,
    ShowSearch,

    // From the widgets
    BufferModified,
    FileNameEdited(String),
    /// Platform fullscreen report; reconciles the logical state.
    FullscreenChanged(bool),

    // Deferred work
    Rehighlight,
}
