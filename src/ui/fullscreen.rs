use fltk::{prelude::*, window::Window};

use crate::app::contracts::FullscreenHost;
use crate::app::error::Result;

/// Fullscreen capability over the main FLTK window. FLTK applies requests
/// without a grant/deny handshake, so `is_fullscreen` (the window's own
/// report) is what reconciliation reads back.
pub struct FltkFullscreenHost {
    window: Window,
}

impl FltkFullscreenHost {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FullscreenHost for FltkFullscreenHost {
    fn request_enter(&mut self) -> Result<()> {
        self.window.fullscreen(true);
        Ok(())
    }

    fn request_exit(&mut self) {
        self.window.fullscreen(false);
    }

    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen_active()
    }
}
