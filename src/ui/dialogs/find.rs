use fltk::{
    button::{Button, CheckButton},
    dialog,
    frame::Frame,
    input::Input,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::buffer_utils::buffer_text_no_leak;
use crate::app::text_ops::{find_in_text, replace_all_in_text};

/// The editor's search panel: a small find/replace window built once and
/// re-presented on every search trigger. Presenting while already open just
/// raises the window and refocuses the query field, which is exactly the
/// repeat-fire behavior the search command needs.
pub struct FindPanel {
    win: Window,
    find_input: Input,
}

impl FindPanel {
    pub fn new(buffer: TextBuffer, editor: TextEditor) -> Self {
        let mut win = Window::default()
            .with_size(400, 190)
            .with_label("Find & Replace")
            .center_screen();

        Frame::default().with_pos(20, 20).with_size(80, 30).with_label("Find what:");
        let find_input = Input::default().with_pos(110, 20).with_size(270, 30);

        Frame::default().with_pos(20, 60).with_size(80, 30).with_label("Replace:");
        let replace_input = Input::default().with_pos(110, 60).with_size(270, 30);

        let case_check = CheckButton::default()
            .with_pos(110, 100).with_size(200, 25).with_label("Match case");

        let mut find_btn = Button::default()
            .with_pos(20, 140).with_size(100, 30).with_label("Find Next");
        let mut replace_all_btn = Button::default()
            .with_pos(130, 140).with_size(110, 30).with_label("Replace All");
        let mut close_btn = Button::default()
            .with_pos(290, 140).with_size(90, 30).with_label("Close");

        win.end();
        win.make_resizable(false);

        // Resume position for Find Next; reset when the query changes.
        let last_query = Rc::new(RefCell::new(String::new()));
        let search_pos = Rc::new(RefCell::new(0usize));

        let query_state = last_query.clone();
        let pos_state = search_pos.clone();
        let mut find_buf = buffer.clone();
        let mut find_ed = editor.clone();
        let find_query = find_input.clone();
        let find_case = case_check.clone();
        find_btn.set_callback(move |_| {
            let query = find_query.value();
            if query.is_empty() {
                dialog::message_default("Please enter text to find");
                return;
            }

            let text = buffer_text_no_leak(&find_buf);
            let case_sensitive = find_case.is_checked();

            let start_pos = if *query_state.borrow() != query {
                *query_state.borrow_mut() = query.clone();
                let cursor = find_ed.insert_position() as usize;
                *pos_state.borrow_mut() = cursor;
                cursor
            } else {
                *pos_state.borrow()
            };

            if let Some((pos, len)) = find_in_text(&text, &query, start_pos, case_sensitive) {
                find_buf.select(pos as i32, (pos + len) as i32);
                find_ed.set_insert_position((pos + len) as i32);
                find_ed.show_insert_position();
                *pos_state.borrow_mut() = pos + len;
            } else if start_pos > 0 {
                *pos_state.borrow_mut() = 0;
                dialog::message_default("No more matches. Wrapped to beginning.");
            } else {
                dialog::message_default(&format!("Cannot find '{}'", query));
            }
        });

        let mut all_buf = buffer.clone();
        let all_query = find_input.clone();
        let all_replace = replace_input.clone();
        let all_case = case_check.clone();
        replace_all_btn.set_callback(move |_| {
            let query = all_query.value();
            if query.is_empty() {
                dialog::message_default("Please enter text to find");
                return;
            }

            let text = buffer_text_no_leak(&all_buf);
            let (new_text, count) =
                replace_all_in_text(&text, &query, &all_replace.value(), all_case.is_checked());

            if count > 0 {
                all_buf.set_text(&new_text);
                dialog::message_default(&format!("Replaced {} occurrence(s)", count));
            } else {
                dialog::message_default(&format!("Cannot find '{}'", query));
            }
        });

        let mut close_win = win.clone();
        close_btn.set_callback(move |_| close_win.hide());

        Self { win, find_input }
    }

    /// Show (or re-raise) the panel and put the cursor in the query field.
    pub fn present(&mut self) {
        self.win.show();
        let _ = self.find_input.take_focus();
    }
}
