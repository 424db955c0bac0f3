// Purpose - external interfaces, chord table files in and out

mod error;
pub mod export;
pub mod reader;

pub use error::DataError;
pub use export::{save_chords, write_chords};
pub use reader::{load_table, read_table, LoadOptions};
