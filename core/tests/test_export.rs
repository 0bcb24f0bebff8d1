use altitrace_core::export::write_csv;
use altitrace_core::{analyze_trace, Reading, Trace};
use std::fs;

#[test]
fn test_csv_has_header_and_one_row_per_reading() {
    let trace = Trace {
        readings: vec![
            Reading { temperature_c: 15.0, pressure_hpa: 1013.25 },
            Reading { temperature_c: 15.0, pressure_hpa: 900.0 },
        ],
        ..Default::default()
    };
    let analysis = analyze_trace(&trace, 4.0).unwrap();

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("series.csv");
    write_csv(&analysis, &path).expect("write_csv failed");

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "time_s,temperature_c,pressure_hpa,altitude_m");
    assert!(lines[1].starts_with("0.0,15.0,1013.25,0.0"), "got {}", lines[1]);
    assert!(lines[2].starts_with("0.5,15.0,900.0,1010.827"), "got {}", lines[2]);
}
