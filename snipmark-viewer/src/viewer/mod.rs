//! Interactive viewer for extracted snippets
//!
//! Split into application state (`app`), rendering (`ui`), and the terminal
//! event loop (`viewer`).

pub mod app;
pub mod ui;
pub mod viewer;
