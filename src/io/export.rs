use std::fs::File;
use std::path::Path;

use serde::Serialize;

use super::DataError;
use crate::chords::DerivedChord;
use crate::fretboard::Fret;

/// Column order of exported files, matching `ExportRow`
pub const EXPORT_COLUMNS: [&str; 10] = [
    "CHORD_ROOT",
    "CHORD_TYPE",
    "CHORD_STRUCTURE",
    "FRETS",
    "FRETS_0",
    "FRETS_1",
    "FRETS_2",
    "FRETS_3",
    "FRETS_4",
    "FRETS_5",
];

/// One exported row: the chord's labels plus its derived fret columns
#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "CHORD_ROOT")]
    root: &'a str,
    #[serde(rename = "CHORD_TYPE")]
    chord_type: &'a str,
    #[serde(rename = "CHORD_STRUCTURE")]
    structure: &'a str,
    #[serde(rename = "FRETS")]
    frets: String,
    #[serde(rename = "FRETS_0")]
    frets_0: Option<Fret>,
    #[serde(rename = "FRETS_1")]
    frets_1: Option<Fret>,
    #[serde(rename = "FRETS_2")]
    frets_2: Option<Fret>,
    #[serde(rename = "FRETS_3")]
    frets_3: Option<Fret>,
    #[serde(rename = "FRETS_4")]
    frets_4: Option<Fret>,
    #[serde(rename = "FRETS_5")]
    frets_5: Option<Fret>,
}

impl<'a> From<&'a DerivedChord> for ExportRow<'a> {
    fn from(chord: &'a DerivedChord) -> Self {
        let [frets_0, frets_1, frets_2, frets_3, frets_4, frets_5] = *chord.frets.frets();
        Self {
            root: &chord.record.root,
            chord_type: &chord.record.chord_type,
            structure: &chord.record.structure,
            frets: chord.frets.to_string(),
            frets_0,
            frets_1,
            frets_2,
            frets_3,
            frets_4,
            frets_5,
        }
    }
}

/// Write chords with their `FRETS` and `FRETS_0`..`FRETS_5` columns; muted strings are left blank
pub fn write_chords<'a, W: std::io::Write>(
    sink: W,
    chords: impl IntoIterator<Item = &'a DerivedChord>,
) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_writer(sink);
    let mut written = 0;
    for chord in chords {
        writer.serialize(ExportRow::from(chord))?;
        written += 1;
    }
    // serialize only emits the header with the first row
    if written == 0 {
        writer.write_record(EXPORT_COLUMNS)?;
    }
    writer
        .flush()
        .map_err(|err| DataError::Csv(csv::Error::from(err)))?;
    Ok(())
}

/// Write chords to a file, replacing it if it exists
pub fn save_chords<'a>(
    path: impl AsRef<Path>,
    chords: impl IntoIterator<Item = &'a DerivedChord>,
) -> Result<(), DataError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_chords(file, chords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chords::{ChordRecord, ChordTable};
    use crate::fretboard::Fretboard;

    #[test]
    fn writes_derived_columns() {
        let table = ChordTable::from_records(
            Fretboard::standard(),
            vec![ChordRecord::new("C", "major", "1;3;5", "C,E,G,C,E").with_positions("x,3,2,0,1,0")],
        );

        let mut out = Vec::new();
        write_chords(&mut out, table.chords()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "CHORD_ROOT,CHORD_TYPE,CHORD_STRUCTURE,FRETS,FRETS_0,FRETS_1,FRETS_2,FRETS_3,FRETS_4,FRETS_5\n\
             C,major,1;3;5,\"x,3,2,0,1,0\",,3,2,0,1,0\n"
        );
    }

    #[test]
    fn empty_export_keeps_the_header() {
        let mut out = Vec::new();
        write_chords(&mut out, Vec::<&DerivedChord>::new()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, format!("{}\n", EXPORT_COLUMNS.join(",")));
    }
}
