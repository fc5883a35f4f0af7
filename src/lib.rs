//! HtmlPad - a lightweight single-file HTML editor.
//!
//! The core is the editor session state machine in [`app`]: theme and
//! fullscreen axes plus an edge-triggered search counter, driving the FLTK
//! widgets in [`ui`] through the contracts in [`app::contracts`].

pub mod app;
pub mod ui;
