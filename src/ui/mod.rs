//! Presentation layer: the quote screen and its two surfaces, the
//! interactive terminal UI and the headless plain-text output.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod layout;
pub mod mvi;
pub mod plain;
pub mod quote;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod view;
