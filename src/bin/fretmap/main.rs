//! fretmap - Guitar chord data explorer
//!
//! Run with: cargo run -- [path/to/chord-fingers.csv]

mod app;
mod ui;

use app::Explorer;
use fretmap::Tuning;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let mut explorer = Explorer::new().tuning(Tuning::STANDARD);
    if let Some(path) = std::env::args().nth(1) {
        explorer = explorer.data(path);
    }

    explorer.run()
}
