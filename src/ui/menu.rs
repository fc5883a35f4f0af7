use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("Edit/Find...", Shortcut::Ctrl | 'f', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowSearch) });

    // View (dark theme is the session default, so the toggle starts checked)
    menu.add("View/Toggle Dark Mode", Shortcut::None, MenuFlag::Toggle | MenuFlag::Value, { let s = *s; move |_| s.send(Message::ToggleTheme) });
    menu.add("View/Fullscreen", Shortcut::None | Key::F11, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ToggleFullscreen) });
}
