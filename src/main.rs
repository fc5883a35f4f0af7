use fltk::{app, prelude::*};

use html_pad::app::messages::Message;
use html_pad::app::state::AppState;
use html_pad::ui::main_window::build_main_window;
use html_pad::ui::menu::build_menu;

fn main() {
    let fl_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender);
    widgets.wind.end();
    widgets.wind.show();

    let mut state = AppState::new(widgets, sender);

    while fl_app.wait() {
        if let Some(msg) = receiver.recv() {
            state.handle(msg);
        }
    }
}
