//! Root distribution widget - share of each chord root among the matches

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use fretmap::query::RootShare;

/// Slice colours, reused in order when there are more roots than colours
const PALETTE: [Color; 6] = [
    Color::Rgb(0x68, 0xac, 0xe5),
    Color::Rgb(0xcf, 0x45, 0x20),
    Color::Rgb(0xcb, 0xa0, 0x52),
    Color::Rgb(0xff, 0x9e, 0x1b),
    Color::Rgb(0xff, 0x69, 0x00),
    Color::Rgb(0x9e, 0x53, 0x30),
];

/// Render the chord-root distribution as labelled bars
pub fn render_distribution(frame: &mut Frame, area: Rect, shares: &[RootShare]) {
    let block = Block::default()
        .title(" Chord roots ")
        .borders(Borders::ALL);

    let bars: Vec<Bar> = shares
        .iter()
        .enumerate()
        .map(|(i, share)| {
            let color = PALETTE[i % PALETTE.len()];
            Bar::default()
                .value(share.count as u64)
                .label(Line::from(share.root.clone()))
                .text_value(format!("{:.0}%", share.fraction() * 100.0))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1);

    frame.render_widget(chart, area);
}
