use fltk::{
    app::Sender,
    button::Button,
    enums::{CallbackTrigger, Color, Font, FrameType},
    frame::Frame,
    group::Flex,
    input::Input,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::DEFAULT_FILE_NAME;
use crate::app::messages::Message;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub name_input: Input,
    pub text_editor: TextEditor,
    pub text_buffer: TextBuffer,
    pub style_buffer: TextBuffer,
    pub footer: Frame,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 900, 600, "untitled.html - HtmlPad");
    wind.set_xclass("HtmlPad");

    let mut flex = Flex::new(0, 0, 900, 600, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Header: editable file name on the left, Open/Save on the right.
    let mut header = Flex::default().row();
    flex.fixed(&header, 38);
    header.set_margin(4);

    let mut name_input = Input::default();
    name_input.set_value(DEFAULT_FILE_NAME);
    name_input.set_text_font(Font::Courier);
    name_input.set_frame(FrameType::FlatBox);
    name_input.set_trigger(CallbackTrigger::Changed);
    let s = *sender;
    name_input.set_callback(move |i| s.send(Message::FileNameEdited(i.value())));

    let mut open_btn = Button::default().with_label("Open");
    header.fixed(&open_btn, 80);
    let s = *sender;
    open_btn.set_callback(move |_| s.send(Message::FileOpen));

    let mut save_btn = Button::default().with_label("Save");
    header.fixed(&save_btn, 80);
    save_btn.set_color(Color::from_rgb(37, 99, 235));
    save_btn.set_label_color(Color::White);
    let s = *sender;
    save_btn.set_callback(move |_| s.send(Message::FileSave));

    header.end();

    let text_buffer = TextBuffer::default();
    let style_buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(text_buffer.clone());
    text_editor.set_text_font(Font::Courier);
    text_editor.set_text_size(15);
    text_editor.set_linenumber_width(40);
    text_editor.wrap_mode(WrapMode::AtBounds, 0);

    // Status bar: language | char count | declared encoding.
    let mut footer = Frame::default().with_label("HTML  |  0 chars  |  UTF-8");
    footer.set_frame(FrameType::FlatBox);
    footer.set_label_size(12);
    flex.fixed(&footer, 22);

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        name_input,
        text_editor,
        text_buffer,
        style_buffer,
        footer,
    }
}
