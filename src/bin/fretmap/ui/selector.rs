//! Sidebar widget - one column of fret options per string

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use fretmap::query::SELECTOR_OPTIONS;
use fretmap::STRING_COUNT;

use super::SelectionState;

/// Render the per-string selectors
pub fn render_selectors(frame: &mut Frame, area: Rect, labels: &[String], state: &SelectionState) {
    let block = Block::default()
        .title(" Select frets ")
        .title_bottom(Line::from(" ? any  x muted ").style(Style::default().fg(Color::DarkGray)))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, STRING_COUNT as u32); STRING_COUNT])
        .split(inner);

    for (string, column) in columns.iter().enumerate() {
        let selected = state.query().get(string);
        let is_cursor = string == state.cursor();

        let mut lines = Vec::with_capacity(SELECTOR_OPTIONS.len() + 1);
        let label = labels.get(string).map(String::as_str).unwrap_or("?|");
        lines.push(Line::from(Span::styled(
            format!(" {}", label),
            if is_cursor {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            },
        )));

        for option in SELECTOR_OPTIONS {
            let marker = if option == selected { "●" } else { "○" };
            let style = match (option == selected, is_cursor) {
                (true, true) => Style::default().fg(Color::Black).bg(Color::Yellow),
                (true, false) => Style::default().fg(Color::Cyan),
                (false, _) => Style::default().fg(Color::DarkGray),
            };
            lines.push(Line::from(Span::styled(format!("{}{:>3}", marker, option.to_string()), style)));
        }

        frame.render_widget(Paragraph::new(lines), *column);
    }
}
