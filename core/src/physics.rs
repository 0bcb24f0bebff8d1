// core/src/physics.rs
use ordered_float::OrderedFloat;

pub const SEA_LEVEL_PRESSURE_HPA: f64 = 1013.25; // reference pressure (hPa)
pub const PRESSURE_EXPONENT: f64 = 5.257;        // 1 / 0.190223
pub const KELVIN_OFFSET: f64 = 273.15;           // °C → K
pub const LAPSE_RATE_K_PER_M: f64 = 0.0065;      // standard atmosphere (K/m)

// --- RoundTo trait (public, used by export.rs) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Altitude (m) above the 1013.25 hPa reference level, international
/// barometric formula with a fixed lapse rate.
///
/// `((p0 / p)^(1/5.257) - 1) * (T + 273.15) / 0.0065`
///
/// Pure: no clamping, so `p <= 0` yields a non-finite result.
#[inline]
pub fn altitude_m(temperature_c: f64, pressure_hpa: f64) -> f64 {
    let ratio = (SEA_LEVEL_PRESSURE_HPA / pressure_hpa).powf(1.0 / PRESSURE_EXPONENT);
    (ratio - 1.0) * (temperature_c + KELVIN_OFFSET) / LAPSE_RATE_K_PER_M
}

/// Elementvis [`altitude_m`]. Stopper ved korteste input.
pub fn altitude_series(temperatures_c: &[f32], pressures_hpa: &[f32]) -> Vec<f64> {
    temperatures_c
        .iter()
        .zip(pressures_hpa.iter())
        .map(|(&t, &p)| altitude_m(t as f64, p as f64))
        .collect()
}

/// `max - min` over the finite values; `None` if there are none.
pub fn altitude_range(values: &[f64]) -> Option<f64> {
    let finite = || values.iter().copied().filter(|v| v.is_finite()).map(OrderedFloat);
    let max = finite().max()?;
    let min = finite().min()?;
    Some(max.into_inner() - min.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_two_decimals() {
        assert_eq!(1010.8267_f64.round_to(2), 1010.83);
        assert_eq!(2.5_f64.round_to(0), 3.0);
    }

    #[test]
    fn non_positive_pressure_is_not_finite() {
        assert!(!altitude_m(15.0, 0.0).is_finite());
        assert!(altitude_m(15.0, -10.0).is_nan());
    }
}
