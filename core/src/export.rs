use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::{Result, TraceError};
use crate::models::TraceAnalysis;
use crate::physics::RoundTo;

#[derive(Debug, Serialize)]
struct Row {
    time_s: f64,
    temperature_c: f64,
    pressure_hpa: f64,
    altitude_m: f64,
}

/// CSV med avledet serie, én rad per måling.
/// Tid og høyde rundes til ms/mm; sensorverdier skrives som lest.
pub fn write_csv(analysis: &TraceAnalysis, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| TraceError::Export(format!("{}: {e}", path.display())))?;

    for i in 0..analysis.len() {
        wtr.serialize(Row {
            time_s: analysis.time_s[i].round_to(3),
            temperature_c: analysis.temperature_c[i],
            pressure_hpa: analysis.pressure_hpa[i],
            altitude_m: analysis.altitude_m[i].round_to(3),
        })
        .map_err(|e| TraceError::Export(e.to_string()))?;
    }
    wtr.flush().map_err(|e| TraceError::io(path, e))?;

    info!("Wrote {} rows to {}", analysis.len(), path.display());
    Ok(())
}
