/// Editor color scheme. Always exactly one of the two; there is no
/// "unset" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMode {
    Windowed,
    Fullscreen,
}

/// Per-session UI state. Three independent axes rather than one joint
/// machine, because they are orthogonal in effect.
///
/// `search_epoch` is an edge-triggered signal, not a level: the *change*
/// carries the meaning ("open the search panel now"), never the value. A
/// boolean would fail to re-fire on a second press while the panel is
/// already open.
///
/// Created once at session start; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    theme: Theme,
    screen: ScreenMode,
    search_epoch: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            theme: Theme::Dark,
            screen: ScreenMode::Windowed,
            search_epoch: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn screen(&self) -> ScreenMode {
        self.screen
    }

    pub fn search_epoch(&self) -> u64 {
        self.search_epoch
    }

    /// Flip the theme axis and return the new value. Every theme-rendering
    /// consumer must re-render afterwards.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        self.theme
    }

    /// Flip the fullscreen axis and return the new value. The caller issues
    /// the matching platform request; the platform's own change notification
    /// is the source of truth and feeds back via [`reconcile_fullscreen`].
    ///
    /// [`reconcile_fullscreen`]: SessionState::reconcile_fullscreen
    pub fn toggle_fullscreen(&mut self) -> ScreenMode {
        self.screen = match self.screen {
            ScreenMode::Windowed => ScreenMode::Fullscreen,
            ScreenMode::Fullscreen => ScreenMode::Windowed,
        };
        self.screen
    }

    /// Snap the logical fullscreen state to what the platform reports.
    /// Closes the gap left by a denied enter request.
    pub fn reconcile_fullscreen(&mut self, platform_fullscreen: bool) {
        self.screen = if platform_fullscreen {
            ScreenMode::Fullscreen
        } else {
            ScreenMode::Windowed
        };
    }

    /// One user-issued "open search" command. Strictly increments the epoch
    /// so observers see a change even on back-to-back presses.
    pub fn trigger_search(&mut self) -> u64 {
        self.search_epoch += 1;
        self.search_epoch
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
