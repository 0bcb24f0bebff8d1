pub mod analysis;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod physics;
pub mod render;
pub mod trace;

pub use analysis::{analyze_trace, time_axis};
pub use config::{load_config, save_config, FigureConfig, RenderConfig};
pub use error::TraceError;
pub use models::{Reading, Trace, TraceAnalysis};
pub use physics::{altitude_m, altitude_range, altitude_series};
pub use render::{render_chart, ChartLayout};
pub use trace::{decode_trace, read_trace, split_channels};
