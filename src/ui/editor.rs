use fltk::{
    app::Sender,
    frame::Frame,
    input::Input,
    menu::MenuBar,
    prelude::*,
    text::{StyleTableEntry, TextBuffer, TextEditor},
    window::Window,
};

use crate::app::buffer_utils::buffer_text_no_leak;
use crate::app::contracts::EditorSurface;
use crate::app::domain::Theme;
use crate::app::messages::Message;
use super::dialogs::FindPanel;
use super::theme::apply_theme;

/// FLTK implementation of the editor-surface contract. Holds the text
/// widget plus the chrome the theme cascades to, and owns the find panel
/// standing in for an in-editor search UI.
pub struct FltkEditorSurface {
    editor: TextEditor,
    buffer: TextBuffer,
    style_buffer: TextBuffer,
    window: Window,
    menu: MenuBar,
    name_input: Input,
    footer: Frame,
    find: Option<FindPanel>,
}

impl FltkEditorSurface {
    pub fn new(
        editor: TextEditor,
        buffer: TextBuffer,
        style_buffer: TextBuffer,
        window: Window,
        menu: MenuBar,
        name_input: Input,
        footer: Frame,
        sender: Sender<Message>,
    ) -> Self {
        // Change notification back to the dispatch loop. The style buffer is
        // padded/trimmed in lockstep so highlight data stays byte-aligned
        // between rehighlight passes.
        let mut style_buf = style_buffer.clone();
        let mut notify_buf = buffer.clone();
        notify_buf.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                if inserted > 0 {
                    let filler = "A".repeat(inserted as usize);
                    style_buf.insert(pos, &filler);
                }
                if deleted > 0 {
                    style_buf.remove(pos, pos + deleted);
                }
                sender.send(Message::BufferModified);
            }
        });

        Self {
            editor,
            buffer,
            style_buffer,
            window,
            menu,
            name_input,
            footer,
            find: None,
        }
    }

    /// Current widget text, read leak-free.
    pub fn current_text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    /// Bind a freshly computed style string and table to the widget.
    pub fn set_highlight(&mut self, styles: &str, table: Vec<StyleTableEntry>) {
        self.style_buffer.set_text(styles);
        self.editor
            .set_highlight_data(self.style_buffer.clone(), table);
        self.editor.redraw();
    }
}

impl EditorSurface for FltkEditorSurface {
    fn render(&mut self, buffer: &str, theme: Theme) {
        // Diff before replacing: a theme-only render must not reset the
        // cursor or scroll position.
        if buffer_text_no_leak(&self.buffer) != buffer {
            self.buffer.set_text(buffer);
        }
        apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.menu,
            &mut self.name_input,
            &mut self.footer,
            theme,
        );
    }

    fn open_search_panel(&mut self) {
        let panel = self.find.get_or_insert_with(|| {
            FindPanel::new(self.buffer.clone(), self.editor.clone())
        });
        panel.present();
    }

    fn focus(&mut self) {
        let _ = self.editor.take_focus();
    }
}
