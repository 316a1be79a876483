//! UI rendering logic
//!
//! Handles layout and rendering of the application using Ratatui.
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Tab bar (1 line, fixed)
//! - Snippet content (responsive height)
//! - Status line (1 line, fixed)

use super::app::{App, Tab};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 40;
/// Height of the tab bar
const TAB_BAR_HEIGHT: u16 = 1;
/// Height of the status line
const STATUS_LINE_HEIGHT: u16 = 1;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App, file_name: &str) {
    let size = frame.area();

    // Check minimum width
    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    // Split layout vertically: title, tabs, content, status line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // Title bar
            Constraint::Length(TAB_BAR_HEIGHT),     // Tab bar
            Constraint::Min(1), // Content - expand to fill available space
            Constraint::Length(STATUS_LINE_HEIGHT), // Status line
        ])
        .split(size);

    render_title_bar(frame, chunks[0], file_name);
    render_tab_bar(frame, chunks[1], app);
    render_content(frame, chunks[2], app);
    render_status_line(frame, chunks[3], app);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, file_name: &str) {
    let title = format!("snipv:: {}", file_name);
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let active = Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::DarkGray);

    let (code_style, preview_style) = match app.active_tab {
        Tab::Code => (active, inactive),
        Tab::Preview => (inactive, active),
    };

    let tabs = Line::from(vec![
        Span::styled(" Code ", code_style),
        Span::raw(" "),
        Span::styled(" Preview ", preview_style),
    ]);
    frame.render_widget(Paragraph::new(tabs), area);
}

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.active_tab {
        Tab::Code => "Code",
        Tab::Preview => "Preview",
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    // Get inner area for content (inside the border)
    let inner_area = block.inner(area);

    // Render the border
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(notice) = app.preview_notice() {
        lines.push(Line::from(Span::styled(
            notice,
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }
    for line in app.active_content().split('\n') {
        lines.push(Line::from(line.to_string()));
    }

    let paragraph = Paragraph::new(lines).scroll((app.scroll, 0));
    frame.render_widget(paragraph, inner_area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let mut parts = Vec::new();

    parts.push(Span::styled("Type: ", Style::default().fg(Color::Yellow)));
    parts.push(Span::raw(app.file_type.tag()));
    parts.push(Span::raw(" | "));
    parts.push(Span::styled("Preview: ", Style::default().fg(Color::Yellow)));
    parts.push(Span::raw(if app.preview_available() {
        "renderable"
    } else {
        "code only"
    }));
    parts.push(Span::raw(" | "));
    parts.push(Span::raw("q quit, Tab switch, Up/Down scroll"));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
