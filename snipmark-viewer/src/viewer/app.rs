//! Application state for the snippet viewer
//!
//! `App` owns the extracted snippet and the interaction state (active tab
//! and scroll offset). It knows nothing about terminals; rendering lives in
//! `ui` and the event loop in `viewer`.

use crossterm::event::{KeyCode, KeyEvent};
use snipmark_parser::snipmark::extraction::ParsedContent;
use snipmark_parser::snipmark::file_type::{FileType, PreviewKind};

/// Lines scrolled per PageUp/PageDown press
const PAGE_SCROLL_LINES: u16 = 10;

/// Which tab is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Code,
    Preview,
}

impl Tab {
    /// Switch to the other tab
    pub fn toggle(&self) -> Tab {
        match self {
            Tab::Code => Tab::Preview,
            Tab::Preview => Tab::Code,
        }
    }
}

/// Viewer application state
pub struct App {
    pub file_type: FileType,
    pub parsed: ParsedContent,
    pub active_tab: Tab,
    pub scroll: u16,
}

impl App {
    pub fn new(file_type: FileType, parsed: ParsedContent) -> App {
        App {
            file_type,
            parsed,
            active_tab: Tab::Code,
            scroll: 0,
        }
    }

    /// Whether the preview tab has renderable content of its own.
    ///
    /// Only markup previews render directly; component previews need a
    /// bundler and everything else has no preview at all, so both fall back
    /// to the code view.
    pub fn preview_available(&self) -> bool {
        self.file_type.preview_kind() == PreviewKind::Markup
    }

    /// The text shown on the active tab
    pub fn active_content(&self) -> &str {
        match self.active_tab {
            Tab::Code => &self.parsed.code_for_display,
            Tab::Preview if self.preview_available() => &self.parsed.renderable_preview_content,
            Tab::Preview => &self.parsed.code_for_display,
        }
    }

    /// Notice shown when the preview tab falls back to the code view
    pub fn preview_notice(&self) -> Option<String> {
        match self.active_tab {
            Tab::Preview if !self.preview_available() => Some(format!(
                "Preview not available for {} files. Showing code instead.",
                self.file_type.tag()
            )),
            _ => None,
        }
    }

    /// Switch tabs and reset the scroll position
    pub fn toggle_tab(&mut self) {
        self.active_tab = self.active_tab.toggle();
        self.scroll = 0;
    }

    /// Handle a navigation key; returns whether the state changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Right => {
                self.toggle_tab();
                true
            }
            KeyCode::Up => {
                self.scroll_up(1);
                true
            }
            KeyCode::Down => {
                self.scroll_down(1);
                true
            }
            KeyCode::PageUp => {
                self.scroll_up(PAGE_SCROLL_LINES);
                true
            }
            KeyCode::PageDown => {
                self.scroll_down(PAGE_SCROLL_LINES);
                true
            }
            _ => false,
        }
    }

    fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    /// Largest useful scroll offset: the last content line at the top
    fn max_scroll(&self) -> u16 {
        let line_count = self.active_content().lines().count();
        line_count.saturating_sub(1).min(u16::MAX as usize) as u16
    }
}
