//! Header bar widget - match count, active query and last action

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use fretmap::FretQuery;

/// Counts shown in the header
pub struct MatchStats {
    pub matched: usize,
    pub total: usize,
    pub skipped: usize,
}

/// Render the header bar
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    query: &FretQuery,
    stats: &MatchStats,
    status: Option<&str>,
) {
    let block = Block::default()
        .title(" Guitar Chord Data Explorer ")
        .borders(Borders::ALL);

    let mut spans = vec![
        Span::styled(
            format!(" {}/{} chords  ", stats.matched, stats.total),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(format!("{}  ", query), Style::default().fg(Color::White)),
    ];
    if stats.skipped > 0 {
        spans.push(Span::styled(
            format!("{} rows skipped  ", stats.skipped),
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(status) = status {
        spans.push(Span::styled(status.to_string(), Style::default().fg(Color::Green)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
