use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use log::{info, warn};

use crate::error::{Result, TraceError};
use crate::models::{Reading, Trace};

const F32_BYTES: usize = 4;

/// Leser rå opptaksfil fra disk (ingen header, little-endian f32).
pub fn read_trace(path: impl AsRef<Path>) -> Result<Trace> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| TraceError::io(path, e))?;
    let trace = decode_trace(&bytes);
    info!(
        "Loaded {} readings from {} ({} bytes)",
        trace.len(),
        path.display(),
        bytes.len()
    );
    Ok(trace)
}

/// Decodes interleaved `temperature, pressure, temperature, ...` values.
///
/// Bytes past the last whole f32 are ignored, and so is a final temperature
/// without a pressure partner. Both are counted on the returned [`Trace`].
pub fn decode_trace(bytes: &[u8]) -> Trace {
    let whole = bytes.len() / F32_BYTES;
    let dropped_bytes = bytes.len() % F32_BYTES;

    let mut values = vec![0.0f32; whole];
    LittleEndian::read_f32_into(&bytes[..whole * F32_BYTES], &mut values);

    let dropped_values = values.len() % 2;
    let readings: Vec<Reading> = values
        .chunks_exact(2)
        .map(|pair| Reading { temperature_c: pair[0], pressure_hpa: pair[1] })
        .collect();

    if dropped_bytes > 0 {
        warn!("Ignoring {dropped_bytes} trailing byte(s) that do not form a whole f32");
    }
    if dropped_values > 0 {
        warn!("Odd number of values ({whole}); dropping the unpaired last value");
    }

    Trace { readings, dropped_values, dropped_bytes }
}

/// Temperature and pressure channels, equal length.
pub fn split_channels(trace: &Trace) -> (Vec<f32>, Vec<f32>) {
    trace
        .readings
        .iter()
        .map(|r| (r.temperature_c, r.pressure_hpa))
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le_bytes(values: &[f32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn pairs_even_and_odd_positions() {
        let trace = decode_trace(&le_bytes(&[20.0, 1000.0, 21.0, 999.5]));
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.readings[1], Reading { temperature_c: 21.0, pressure_hpa: 999.5 });
        assert_eq!(trace.dropped_values, 0);
        assert_eq!(trace.dropped_bytes, 0);
    }

    #[test]
    fn partial_f32_is_ignored() {
        let mut bytes = le_bytes(&[20.0, 1000.0]);
        bytes.extend_from_slice(&[0xAB, 0xCD]);
        let trace = decode_trace(&bytes);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.dropped_bytes, 2);
    }

    #[test]
    fn empty_input_gives_empty_trace() {
        let trace = decode_trace(&[]);
        assert!(trace.is_empty());
        assert_eq!(trace, Trace::default());
    }
}
