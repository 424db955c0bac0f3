//! Chord table widget - frets, hand span, root, type and structure of the matches

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use fretmap::DerivedChord;

/// Render the filtered chords, starting `offset` rows down
pub fn render_chord_table(frame: &mut Frame, area: Rect, chords: &[&DerivedChord], offset: usize) {
    let block = Block::default()
        .title(format!(" Chords ({}) ", chords.len()))
        .borders(Borders::ALL);

    let header = Row::new(["FRETS", "SPAN", "CHORD_ROOT", "CHORD_TYPE", "CHORD_STRUCTURE"])
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x00, 0x2d, 0x72))
                .add_modifier(Modifier::BOLD),
        );

    let rows = chords.iter().skip(offset).map(|chord| {
        Row::new([
            Cell::from(chord.frets.to_string()),
            Cell::from(chord.frets.span().map_or_else(String::new, |span| span.to_string())),
            Cell::from(chord.record.root.as_str()),
            Cell::from(chord.record.chord_type.as_str()),
            Cell::from(chord.record.structure.as_str()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Min(15),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
