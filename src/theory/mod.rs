// Purpose - musical vocabulary shared by the fretboard and the chord table

pub mod note_name;
pub mod pitch_cycle;
pub mod tuning;

pub use note_name::{NoteName, NoteNameError};
pub use pitch_cycle::PitchCycle;
pub use tuning::Tuning;
