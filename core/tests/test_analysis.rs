use altitrace_core::{analyze_trace, time_axis, Reading, Trace, TraceError};

fn trace_of(pressures: &[f32]) -> Trace {
    Trace {
        readings: pressures
            .iter()
            .map(|&p| Reading { temperature_c: 15.0, pressure_hpa: p })
            .collect(),
        ..Default::default()
    }
}

#[test]
fn test_time_axis_endpoints() {
    let t = time_axis(9, 4.0);
    assert_eq!(t.len(), 9);
    assert_eq!(t[0], 0.0);
    assert_eq!(t[8], 9.0 / 4.0);
    assert!(t.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_time_axis_small_inputs() {
    assert!(time_axis(0, 4.0).is_empty());
    assert_eq!(time_axis(1, 4.0), vec![0.0]);
    assert_eq!(time_axis(2, 4.0), vec![0.0, 0.5]);
}

#[test]
fn test_time_axis_follows_rate() {
    let t = time_axis(101, 10.0);
    assert_eq!(*t.last().unwrap(), 10.1);
}

#[test]
fn test_analysis_series_have_same_length() {
    let analysis = analyze_trace(&trace_of(&[1013.25, 1000.0, 990.0, 1005.0]), 4.0).unwrap();
    assert_eq!(analysis.len(), 4);
    assert_eq!(analysis.temperature_c.len(), 4);
    assert_eq!(analysis.pressure_hpa.len(), 4);
    assert_eq!(analysis.altitude_m.len(), 4);
    assert_eq!(analysis.time_s[0], 0.0);
}

#[test]
fn test_max_altitude_delta_is_range() {
    let analysis = analyze_trace(&trace_of(&[1013.25, 1000.0, 990.0, 1005.0]), 4.0).unwrap();
    let max = analysis.altitude_m.iter().cloned().fold(f64::MIN, f64::max);
    let min = analysis.altitude_m.iter().cloned().fold(f64::MAX, f64::min);
    assert_eq!(analysis.max_altitude_delta_m, max - min);
    assert!(analysis.max_altitude_delta_m > 0.0);
}

#[test]
fn test_empty_trace_is_rejected() {
    let err = analyze_trace(&Trace::default(), 4.0).unwrap_err();
    assert!(matches!(err, TraceError::EmptyTrace));
}

#[test]
fn test_no_finite_altitude_is_rejected() {
    let err = analyze_trace(&trace_of(&[-1.0, -2.0]), 4.0).unwrap_err();
    assert!(matches!(err, TraceError::NoFiniteAltitude));
}

#[test]
fn test_bad_rate_is_rejected() {
    for rate in [0.0, -4.0, f64::NAN] {
        let err = analyze_trace(&trace_of(&[1000.0]), rate).unwrap_err();
        assert!(matches!(err, TraceError::InvalidConfig(_)));
    }
}
