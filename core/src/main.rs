//! # altitrace
//!
//! Reads a kite altimeter recording (raw little-endian f32 pairs of
//! temperature °C and pressure hPa), derives barometric altitude and writes a
//! dual-axis PNG.
//!
//! ```bash
//! # D5.bin -> altitude.png, 4 readings per second
//! altitrace
//!
//! # other recording, CSV of the derived series, open the figure
//! altitrace D4.bin -o d4.png --csv d4.csv --show
//! ```
//!
//! The recorder dumps hex; convert it first: `xxd -r -p D5.hex > D5.bin`.

use anyhow::{Context, Result};
use clap::Parser;

use altitrace_core::cli::{init_logging, run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.resolve_config().context("Failed to resolve configuration")?;
    run(&config).with_context(|| {
        format!(
            "Failed to render {} from {}",
            config.output_path.display(),
            config.input_path.display()
        )
    })?;
    Ok(())
}
