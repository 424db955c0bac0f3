use std::path::PathBuf;

/// Errors that stop a chord file from being read or written as a whole
///
/// Problems confined to one row never surface here; they are reported as
/// skipped rows on the table.
#[derive(Debug)]
pub enum DataError {
    /// The file could not be opened or created
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The CSV layer failed (bad header, I/O while streaming, write failure)
    Csv(csv::Error),
    /// A column the table needs is absent from the header
    MissingColumn(&'static str),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Open { path, source } => {
                write!(f, "cannot open {}: {}", path.display(), source)
            }
            DataError::Csv(err) => write!(f, "csv error: {}", err),
            DataError::MissingColumn(column) => write!(f, "missing column {}", column),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Open { source, .. } => Some(source),
            DataError::Csv(err) => Some(err),
            DataError::MissingColumn(_) => None,
        }
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::Csv(err)
    }
}
