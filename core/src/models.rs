/// One temperature/pressure pair as written by the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reading {
    pub temperature_c: f32, // °C
    pub pressure_hpa: f32,  // hPa
}

/// Decoded trace. Diagnostics count what the decoder had to leave out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    pub readings: Vec<Reading>,
    /// Trailing f32 that had no pressure partner (0 or 1).
    pub dropped_values: usize,
    /// Trailing bytes that did not make up a whole f32 (0..=3).
    pub dropped_bytes: usize,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Everything the chart needs. All series have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceAnalysis {
    pub time_s: Vec<f64>,
    pub temperature_c: Vec<f64>,
    pub pressure_hpa: Vec<f64>,
    pub altitude_m: Vec<f64>,
    /// max - min of the finite altitudes
    pub max_altitude_delta_m: f64,
}

impl TraceAnalysis {
    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }
}
