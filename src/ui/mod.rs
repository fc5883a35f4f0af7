//! FLTK presentation layer: widgets, dialogs, and the concrete
//! implementations of the contracts in `app::contracts`.

pub mod dialogs;
pub mod editor;
pub mod file_dialogs;
pub mod fullscreen;
pub mod main_window;
pub mod menu;
pub mod theme;
