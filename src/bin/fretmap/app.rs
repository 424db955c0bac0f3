//! Explorer - application builder and runner

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use std::path::PathBuf;

use fretmap::{
    io::{load_table, LoadOptions},
    ChordTable, Fretboard, PitchCycle, Tuning,
};

use super::ui::UiApp;

/// How many skipped rows are listed before the banner just counts them
const SKIPPED_ROWS_SHOWN: usize = 5;

/// Main application builder
pub struct Explorer {
    data_path: PathBuf,
    cycle: PitchCycle,
    tuning: Tuning,
    options: LoadOptions,
}

impl Explorer {
    /// Create a new explorer over `chord-fingers.csv` in the working directory
    pub fn new() -> Self {
        Self {
            data_path: PathBuf::from("chord-fingers.csv"),
            cycle: PitchCycle::CHROMATIC,
            tuning: Tuning::STANDARD,
            options: LoadOptions::default(),
        }
    }

    /// Set the chord file to load
    pub fn data(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set the tuning frets are resolved against
    pub fn tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Run the application (loads the table, then takes over the terminal)
    pub fn run(self) -> EyreResult<()> {
        let table = self.load()?;

        let mut terminal = ratatui::init();
        let result = UiApp::new(table).run(&mut terminal);
        ratatui::restore();
        result
    }

    /// Build the derived chord table and print a load summary
    fn load(&self) -> EyreResult<ChordTable> {
        let fretboard =
            Fretboard::new(self.cycle, self.tuning).wrap_err("tuning does not fit the pitch cycle")?;
        let table = load_table(fretboard, &self.data_path, &self.options)
            .wrap_err_with(|| format!("failed to load chords from {}", self.data_path.display()))?;

        println!("=== fretmap ===");
        println!("Data: {}", self.data_path.display());
        println!("Tuning: {}", self.tuning.strings().join(" "));
        println!("Chords: {}", table.len());

        if !table.skipped().is_empty() {
            println!("Skipped rows: {}", table.skipped().len());
            for skipped in table.skipped().iter().take(SKIPPED_ROWS_SHOWN) {
                println!("  row {}: {}", skipped.row, skipped.error);
            }
            if table.skipped().len() > SKIPPED_ROWS_SHOWN {
                println!("  ... set RUST_LOG=warn for the full list");
            }
        }
        println!();

        if table.is_empty() {
            return Err(eyre!(
                "no playable chords in {}",
                self.data_path.display()
            ));
        }

        Ok(table)
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}
