use fltk::{app::Sender, dialog, frame::Frame, input::Input, prelude::*, window::Window};

use super::contracts::FullscreenHost;
use super::controllers::SessionController;
use super::messages::Message;
use super::syntax::HtmlHighlighter;
use crate::ui::editor::FltkEditorSurface;
use crate::ui::file_dialogs::FltkFileAccess;
use crate::ui::fullscreen::FltkFullscreenHost;
use crate::ui::main_window::MainWidgets;

/// Seconds to wait after a keystroke before rehighlighting.
const REHIGHLIGHT_DELAY: f64 = 0.3;

/// FLTK-aware coordinator: binds the session controller to the concrete
/// widgets and handles every channel message.
pub struct AppState {
    controller: SessionController,
    surface: FltkEditorSurface,
    files: FltkFileAccess,
    fullscreen: FltkFullscreenHost,
    highlighter: HtmlHighlighter,
    window: Window,
    name_input: Input,
    footer: Frame,
    sender: Sender<Message>,
    rehighlight_pending: bool,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>) -> Self {
        let MainWidgets {
            wind,
            flex: _,
            menu,
            name_input,
            text_editor,
            text_buffer,
            style_buffer,
            footer,
        } = widgets;

        let controller = SessionController::new();
        let surface = FltkEditorSurface::new(
            text_editor,
            text_buffer,
            style_buffer,
            wind.clone(),
            menu,
            name_input.clone(),
            footer.clone(),
            sender,
        );
        let highlighter = HtmlHighlighter::new(controller.theme().is_dark());

        let mut state = Self {
            controller,
            surface,
            files: FltkFileAccess,
            fullscreen: FltkFullscreenHost::new(wind.clone()),
            highlighter,
            window: wind,
            name_input,
            footer,
            sender,
            rehighlight_pending: false,
        };

        // First paint: template document, dark defaults.
        state.controller.render_current(&mut state.surface);
        state.sync_name_input();
        state.update_window_title();
        state.update_footer();
        state.rehighlight_now();
        state
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::FileOpen => self.file_open(),
            Message::FileSave => self.file_save(),
            Message::FileQuit => fltk::app::quit(),

            Message::ToggleTheme => self.toggle_theme(),
            Message::ToggleFullscreen => self.toggle_fullscreen(),
            Message::ShowSearch => self.controller.trigger_search(&mut self.surface),

            Message::BufferModified => self.buffer_modified(),
            Message::FileNameEdited(name) => {
                self.controller.rename(name);
                self.update_window_title();
            }
            Message::FullscreenChanged(actual) => self.controller.reconcile_fullscreen(actual),

            Message::Rehighlight => {
                self.rehighlight_pending = false;
                self.rehighlight_now();
            }
        }
    }

    // --- File operations ---

    fn file_open(&mut self) {
        match self.controller.open_file(&mut self.files, &mut self.surface) {
            Ok(true) => {
                self.sync_name_input();
                self.update_window_title();
                self.update_footer();
                self.rehighlight_now();
            }
            Ok(false) => {} // picker cancelled
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    fn file_save(&mut self) {
        if let Err(e) = self.controller.save_file(&mut self.files) {
            dialog::alert_default(&format!("Error saving file: {}", e));
        }
    }

    // --- Session axes ---

    fn toggle_theme(&mut self) {
        let theme = self.controller.toggle_theme(&mut self.surface);
        self.highlighter.set_dark(theme.is_dark());
        self.rehighlight_now();
    }

    fn toggle_fullscreen(&mut self) {
        self.controller.toggle_fullscreen(&mut self.fullscreen);
        // The platform's report, not the request, settles the logical state.
        self.sender
            .send(Message::FullscreenChanged(self.fullscreen.is_fullscreen()));
    }

    // --- Editor feedback ---

    fn buffer_modified(&mut self) {
        self.controller.buffer_edited(self.surface.current_text());
        self.update_footer();
        self.schedule_rehighlight();
    }

    fn schedule_rehighlight(&mut self) {
        if self.rehighlight_pending {
            return;
        }
        self.rehighlight_pending = true;
        let s = self.sender;
        fltk::app::add_timeout3(REHIGHLIGHT_DELAY, move |_| {
            s.send(Message::Rehighlight);
        });
    }

    fn rehighlight_now(&mut self) {
        let styles = self.highlighter.highlight(self.controller.document().buffer());
        self.surface.set_highlight(&styles, self.highlighter.style_table());
    }

    // --- Chrome updates ---

    fn sync_name_input(&mut self) {
        self.name_input.set_value(self.controller.document().file_name());
    }

    fn update_window_title(&mut self) {
        self.window
            .set_label(&format!("{} - HtmlPad", self.controller.document().file_name()));
    }

    fn update_footer(&mut self) {
        let chars = self.controller.document().buffer().chars().count();
        self.footer
            .set_label(&format!("HTML  |  {} chars  |  UTF-8", chars));
    }
}
