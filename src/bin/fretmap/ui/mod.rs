//! TUI module for fretmap
//!
//! Sidebar selectors on the left, root distribution and chord table on the right.

mod chord_table;
mod distribution;
mod header;
mod selector;
pub mod state;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::warn;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};

use fretmap::{
    io::save_chords,
    query::{root_distribution, StringConstraint},
    ChordTable, DerivedChord, STRING_COUNT,
};

pub use state::SelectionState;

use chord_table::render_chord_table;
use distribution::render_distribution;
use header::{render_header, MatchStats};
use selector::render_selectors;

/// Where `s` writes the filtered rows
const EXPORT_PATH: &str = "filtered-chords.csv";

/// Rows moved per PageUp/PageDown
const PAGE_ROWS: usize = 10;

/// Sidebar width: a label plus a 4-char option per string, and the border
const SIDEBAR_WIDTH: u16 = STRING_COUNT as u16 * 5 + 2;

/// UI application state
pub struct UiApp {
    /// Derived chord table, read-only for the whole session
    table: ChordTable,
    /// Per-string tab labels ("E|", "A|", ...)
    labels: Vec<String>,
    /// Current sidebar selection
    selection: SelectionState,
    /// First chord row shown in the table
    scroll: usize,
    /// Outcome of the last save, shown in the header
    status: Option<String>,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    /// Create a new UI application over a loaded table
    pub fn new(table: ChordTable) -> Self {
        let labels = table.fretboard().tuning().labels().to_vec();
        Self {
            table,
            labels,
            selection: SelectionState::new(),
            scroll: 0,
            status: None,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            // Nothing animates, so block until the next key
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }

        Ok(())
    }

    /// Chords matching the current selection
    fn matches(&self) -> Vec<&DerivedChord> {
        self.selection.query().apply(self.table.chords())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        let before = *self.selection.query();

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => self.selection.move_left(),
            KeyCode::Right | KeyCode::Char('l') => self.selection.move_right(),
            KeyCode::Down | KeyCode::Char('j') => self.selection.next_option(),
            KeyCode::Up | KeyCode::Char('k') => self.selection.previous_option(),
            KeyCode::Char('?') => self.selection.set_current(StringConstraint::Any),
            KeyCode::Char('x') | KeyCode::Char('X') => {
                self.selection.set_current(StringConstraint::Muted)
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(fret) = c.to_digit(10) {
                    self.selection.set_current(StringConstraint::Fret(fret as u8));
                }
            }
            KeyCode::Char('c') | KeyCode::Char('C') => self.selection.clear(),
            KeyCode::PageDown => {
                let last_row = self.matches().len().saturating_sub(1);
                self.scroll = (self.scroll + PAGE_ROWS).min(last_row);
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_ROWS),
            KeyCode::Char('s') | KeyCode::Char('S') => self.save_matches(),
            _ => {}
        }

        if *self.selection.query() != before {
            self.scroll = 0;
        }
    }

    /// Write the current matches to `EXPORT_PATH`
    fn save_matches(&mut self) {
        let matches = self.matches();
        let count = matches.len();
        self.status = Some(match save_chords(EXPORT_PATH, matches) {
            Ok(()) => format!("saved {} chords to {}", count, EXPORT_PATH),
            Err(err) => {
                warn!("save failed: {}", err);
                format!("save failed: {}", err)
            }
        });
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let matches = self.matches();
        let scroll = self.scroll.min(matches.len().saturating_sub(1));

        // Main layout: header, body, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header bar
                Constraint::Min(10),   // Sidebar + results
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let stats = MatchStats {
            matched: matches.len(),
            total: self.table.len(),
            skipped: self.table.skipped().len(),
        };
        render_header(
            frame,
            chunks[0],
            self.selection.query(),
            &stats,
            self.status.as_deref(),
        );

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(30)])
            .split(chunks[1]);
        render_selectors(frame, body[0], &self.labels, &self.selection);

        let results = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(5)])
            .split(body[1]);
        render_distribution(frame, results[0], &root_distribution(matches.iter().copied()));
        render_chord_table(frame, results[1], &matches, scroll);

        // Help bar
        let help = Paragraph::new(
            " [←/→] String  [↑/↓] Option  [?/x/0-9] Set  [C] Clear  [PgUp/PgDn] Scroll  [S] Save  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[2]);
    }
}
