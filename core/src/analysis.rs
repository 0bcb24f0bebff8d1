use log::{debug, warn};

use crate::error::{Result, TraceError};
use crate::models::{Trace, TraceAnalysis};
use crate::physics::{altitude_range, altitude_series};
use crate::trace::split_channels;

/// Evenly spaced time stamps from 0 to `len / samples_per_second`, both ends
/// included. One sample gives `[0.0]`, none gives an empty vector.
pub fn time_axis(len: usize, samples_per_second: f64) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let stop = n as f64 / samples_per_second;
            let step = stop / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// Høyde, tidsakse og Max Altitude Delta for et opptak.
pub fn analyze_trace(trace: &Trace, samples_per_second: f64) -> Result<TraceAnalysis> {
    if !(samples_per_second.is_finite() && samples_per_second > 0.0) {
        return Err(TraceError::InvalidConfig(format!(
            "samples_per_second must be positive, got {samples_per_second}"
        )));
    }
    if trace.is_empty() {
        return Err(TraceError::EmptyTrace);
    }

    let (temps, pressures) = split_channels(trace);
    let altitude_m = altitude_series(&temps, &pressures);

    let non_finite = altitude_m.iter().filter(|a| !a.is_finite()).count();
    if non_finite > 0 {
        warn!("{non_finite} reading(s) gave a non-finite altitude (pressure <= 0?)");
    }
    let max_altitude_delta_m = altitude_range(&altitude_m).ok_or(TraceError::NoFiniteAltitude)?;

    let time_s = time_axis(trace.len(), samples_per_second);
    debug!(
        "Analysed {} readings over {:.2} s, max altitude delta {:.2} m",
        trace.len(),
        time_s.last().copied().unwrap_or(0.0),
        max_altitude_delta_m
    );

    Ok(TraceAnalysis {
        time_s,
        temperature_c: temps.into_iter().map(f64::from).collect(),
        pressure_hpa: pressures.into_iter().map(f64::from).collect(),
        altitude_m,
        max_altitude_delta_m,
    })
}
