use std::fs::File;
use std::path::Path;

use log::info;

use super::DataError;
use crate::chords::{ChordError, ChordRecord, ChordTable};
use crate::fretboard::Fretboard;

/// Columns every chord file must carry
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "CHORD_ROOT",
    "CHORD_TYPE",
    "CHORD_STRUCTURE",
    "NOTE_NAMES",
];

/// Per-string finger positions; optional unless `LoadOptions::require_positions` is set
pub const POSITIONS_COLUMN: &str = "FINGER_POSITIONS";

/// How a chord file is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    delimiter: u8,
    require_positions: bool,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            require_positions: false,
        }
    }

    /// Field delimiter (default: `,`)
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reject files without a `FINGER_POSITIONS` column
    pub fn require_positions(mut self, require: bool) -> Self {
        self.require_positions = require;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a chord table from any CSV source
pub fn read_table<R: std::io::Read>(
    fretboard: Fretboard,
    source: R,
    options: &LoadOptions,
) -> Result<ChordTable, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);

    for column in REQUIRED_COLUMNS {
        if !has_column(column) {
            return Err(DataError::MissingColumn(column));
        }
    }
    if options.require_positions && !has_column(POSITIONS_COLUMN) {
        return Err(DataError::MissingColumn(POSITIONS_COLUMN));
    }

    let rows = reader.deserialize::<ChordRecord>().map(|row| {
        row.map_err(|err| ChordError::Unreadable {
            message: err.to_string(),
        })
    });

    Ok(ChordTable::from_rows(fretboard, rows))
}

/// Read a chord table from a CSV file on disk
pub fn load_table(
    fretboard: Fretboard,
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<ChordTable, DataError> {
    let path = path.as_ref();
    info!("loading chords from {}", path.display());

    let file = File::open(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(fretboard, file, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_semicolon_files() {
        let data = "CHORD_ROOT;CHORD_TYPE;CHORD_STRUCTURE;FINGER_POSITIONS;NOTE_NAMES\n\
                    C;major;1,3,5;x,3,2,0,1,0;C,E,G,C,E\n";
        let options = LoadOptions::new().delimiter(b';');
        let table = read_table(Fretboard::standard(), data.as_bytes(), &options).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.chords()[0].frets.to_string(), "x,3,2,0,1,0");
    }

    #[test]
    fn missing_note_column_fails_the_load() {
        let data = "CHORD_ROOT,CHORD_TYPE,CHORD_STRUCTURE\nE,major,135\n";
        let err = read_table(Fretboard::standard(), data.as_bytes(), &LoadOptions::new()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn("NOTE_NAMES")));
    }

    #[test]
    fn positions_column_can_be_required() {
        let data = "CHORD_ROOT,CHORD_TYPE,CHORD_STRUCTURE,NOTE_NAMES\nE,major,135,\"E,B,E,G#,B,E\"\n";
        let options = LoadOptions::new().require_positions(true);
        let err = read_table(Fretboard::standard(), data.as_bytes(), &options).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(POSITIONS_COLUMN)));

        let table = read_table(Fretboard::standard(), data.as_bytes(), &LoadOptions::new()).unwrap();
        assert_eq!(table.chords()[0].frets.to_string(), "0,2,2,1,0,0");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_table(
            Fretboard::standard(),
            "definitely/not/here.csv",
            &LoadOptions::new(),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("cannot open definitely/not/here.csv"));
    }
}
