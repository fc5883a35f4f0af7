use fltk::{
    enums::Color,
    frame::Frame,
    input::Input,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::Theme;

/// Repaint the whole chrome for the given theme. The theme axis is the one
/// state whose change cascades to every visible widget.
pub fn apply_theme(
    editor: &mut TextEditor,
    window: &mut Window,
    menu: &mut MenuBar,
    name_input: &mut Input,
    footer: &mut Frame,
    theme: Theme,
) {
    if theme.is_dark() {
        editor.set_color(Color::from_rgb(30, 30, 30));
        editor.set_text_color(Color::from_rgb(220, 220, 220));
        editor.set_cursor_color(Color::from_rgb(255, 255, 255));
        editor.set_selection_color(Color::from_rgb(70, 70, 100));
        editor.set_linenumber_bgcolor(Color::from_rgb(40, 40, 40));
        editor.set_linenumber_fgcolor(Color::from_rgb(150, 150, 150));
        window.set_color(Color::from_rgb(25, 25, 25));
        window.set_label_color(Color::from_rgb(220, 220, 220));
        menu.set_color(Color::from_rgb(37, 37, 38));
        menu.set_text_color(Color::from_rgb(220, 220, 220));
        menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        name_input.set_color(Color::from_rgb(37, 37, 38));
        name_input.set_text_color(Color::from_rgb(220, 220, 220));
        name_input.set_cursor_color(Color::from_rgb(255, 255, 255));
        footer.set_color(Color::from_rgb(0, 122, 204)); // VS Code status blue
        footer.set_label_color(Color::White);
    } else {
        editor.set_color(Color::White);
        editor.set_text_color(Color::Black);
        editor.set_cursor_color(Color::Black);
        editor.set_selection_color(Color::from_rgb(173, 216, 230));
        editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
        editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));
        window.set_color(Color::from_rgb(249, 250, 251));
        window.set_label_color(Color::Black);
        menu.set_color(Color::from_rgb(240, 240, 240));
        menu.set_text_color(Color::Black);
        menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
        name_input.set_color(Color::White);
        name_input.set_text_color(Color::from_rgb(55, 65, 81));
        name_input.set_cursor_color(Color::Black);
        footer.set_color(Color::from_rgb(243, 244, 246));
        footer.set_label_color(Color::from_rgb(75, 85, 99));
    }

    editor.redraw();
    window.redraw();
    menu.redraw();
    name_input.redraw();
    footer.redraw();
}
