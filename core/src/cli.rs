use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::analysis::analyze_trace;
use crate::config::{load_config, RenderConfig};
use crate::display::show_image;
use crate::error::Result;
use crate::export::write_csv;
use crate::models::TraceAnalysis;
use crate::render::render_chart;
use crate::trace::read_trace;

/// Plot temperature and barometric altitude from a kite altimeter recording.
#[derive(Parser, Debug, Default)]
#[command(name = "altitrace")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Raw recording (little-endian f32 pairs: temperature, pressure)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// PNG to write
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Readings per second in the recording
    #[arg(long, value_name = "HZ")]
    pub rate: Option<f64>,

    /// Also write the derived series as CSV
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Open the figure after saving
    #[arg(long)]
    pub show: bool,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default → config-fil → flagg.
    pub fn resolve_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RenderConfig::default(),
        };
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(rate) = self.rate {
            config.samples_per_second = rate;
        }
        if let Some(csv) = &self.csv {
            config.csv_output = Some(csv.clone());
        }
        if self.show {
            config.display = true;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// load → compute → render → save → [export] → [display]
pub fn run(config: &RenderConfig) -> Result<TraceAnalysis> {
    let trace = read_trace(&config.input_path)?;
    let analysis = analyze_trace(&trace, config.samples_per_second)?;
    info!(
        "{} readings, max altitude delta {:.2} m",
        analysis.len(),
        analysis.max_altitude_delta_m
    );

    render_chart(&analysis, config)?;

    if let Some(csv_path) = &config.csv_output {
        write_csv(&analysis, csv_path)?;
    }
    if config.display {
        show_image(&config.output_path)?;
    }
    Ok(analysis)
}
