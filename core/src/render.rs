use std::ops::Range;
use std::path::Path;

use log::{debug, info};
use ordered_float::OrderedFloat;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use crate::config::{parse_hex_color, RenderConfig};
use crate::error::{Result, TraceError};
use crate::models::TraceAnalysis;

pub const TIME_DESC: &str = "Time (s)";
pub const ALTITUDE_DESC: &str = "Altitude (m)";
pub const TEMPERATURE_DESC: &str = "Temperature (ºC)";

const AXIS_PAD: f64 = 0.05;
const TITLE_SCALE: f64 = 1.2;

/// Resolved geometry and styling of the figure, computed without I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub size_px: (u32, u32),
    pub font_px: f64,
    pub time_range: Range<f64>,
    pub time_label_decimals: usize,
    pub altitude_range: Range<f64>,
    pub temperature_range: Range<f64>,
    pub altitude_color: (u8, u8, u8),
    pub temperature_color: (u8, u8, u8),
    pub line_width: u32,
}

impl ChartLayout {
    pub fn from_analysis(analysis: &TraceAnalysis, config: &RenderConfig) -> Result<Self> {
        Ok(Self {
            title: chart_title(&config.title, analysis.max_altitude_delta_m),
            size_px: config.figure.pixel_size(),
            font_px: config.figure.px(config.figure.font_pt),
            time_range: padded_range(&analysis.time_s),
            time_label_decimals: tick_decimals(&padded_range(&analysis.time_s)),
            altitude_range: padded_range(&analysis.altitude_m),
            temperature_range: padded_range(&analysis.temperature_c),
            altitude_color: parse_hex_color(&config.altitude_color)?,
            temperature_color: parse_hex_color(&config.temperature_color)?,
            line_width: config.line_width.max(1),
        })
    }
}

/// `"<title> | Max Altitude Delta = 12.34 m"`
pub fn chart_title(title: &str, max_altitude_delta_m: f64) -> String {
    format!("{title} | Max Altitude Delta = {max_altitude_delta_m:.2} m")
}

/// Finite min..max widened by 5 % each side. A flat series gets ±1 so the
/// axis still has extent; a series with no finite value gets 0..1.
pub fn padded_range(values: &[f64]) -> Range<f64> {
    let finite = || values.iter().copied().filter(|v| v.is_finite()).map(OrderedFloat);
    let (min, max) = match (finite().min(), finite().max()) {
        (Some(lo), Some(hi)) => (lo.into_inner(), hi.into_inner()),
        _ => return 0.0..1.0,
    };
    let span = max - min;
    if span <= 0.0 {
        return (min - 1.0)..(max + 1.0);
    }
    (min - span * AXIS_PAD)..(max + span * AXIS_PAD)
}

/// Decimals for tick labels so ~10 ticks over `range` stay distinct.
/// 0.8 s of data → 2, a minute → 0.
pub fn tick_decimals(range: &Range<f64>) -> usize {
    let span = range.end - range.start;
    if !(span.is_finite() && span > 0.0) {
        return 0;
    }
    let step = span / 10.0;
    (-step.log10().floor()).clamp(0.0, 6.0) as usize
}

/// Splits a series into runs of finite points, so the line breaks at NaN
/// (erased flash reads back as 0xFF) instead of bridging it.
pub fn finite_segments(xs: &[f64], ys: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for (&x, &y) in xs.iter().zip(ys) {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Draws the dual-axis figure and writes it as PNG to `config.output_path`.
///
/// Altitude owns the left scale, temperature the right one; both share the
/// time axis.
pub fn render_chart(analysis: &TraceAnalysis, config: &RenderConfig) -> Result<ChartLayout> {
    config.validate()?;
    let layout = ChartLayout::from_analysis(analysis, config)?;
    debug!(
        "Figure {}x{} px, time {:?}, altitude {:?}, temperature {:?}",
        layout.size_px.0,
        layout.size_px.1,
        layout.time_range,
        layout.altitude_range,
        layout.temperature_range
    );

    draw_png(analysis, &layout, &config.output_path)
        .map_err(|e| TraceError::Render(e.to_string()))?;

    info!(
        "Figure written to {} ({} dpi)",
        config.output_path.display(),
        config.figure.dpi
    );
    Ok(layout)
}

fn draw_png(
    analysis: &TraceAnalysis,
    layout: &ChartLayout,
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (ar, ag, ab) = layout.altitude_color;
    let (tr, tg, tb) = layout.temperature_color;
    let altitude_color = RGBColor(ar, ag, ab);
    let temperature_color = RGBColor(tr, tg, tb);
    let font = layout.font_px;
    let px = |scale: f64| (font * scale).round() as u32;

    let root = BitMapBackend::new(path, layout.size_px).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&layout.title, ("sans-serif", font * TITLE_SCALE).into_font())
        .margin(px(1.0))
        .x_label_area_size(px(3.0))
        .y_label_area_size(px(4.5))
        .right_y_label_area_size(px(4.5))
        .build_cartesian_2d(layout.time_range.clone(), layout.altitude_range.clone())?
        .set_secondary_coord(layout.time_range.clone(), layout.temperature_range.clone());

    // Shared time axis in the default text colour.
    let decimals = layout.time_label_decimals;
    chart
        .configure_mesh()
        .disable_mesh()
        .disable_y_axis()
        .x_desc(TIME_DESC)
        .x_label_formatter(&|t| format!("{:.*}", decimals, t))
        .label_style(("sans-serif", font).into_font())
        .axis_desc_style(("sans-serif", font).into_font())
        .draw()?;

    // Altitude scale, left.
    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc(ALTITUDE_DESC)
        .y_label_formatter(&|a| format!("{:.0}", a))
        .label_style(("sans-serif", font).into_font().color(&altitude_color))
        .axis_desc_style(("sans-serif", font).into_font().color(&altitude_color))
        .draw()?;

    // Temperature scale, right. Description drawn by hand below: plotters
    // rotates the secondary one the other way.
    chart
        .configure_secondary_axes()
        .y_label_formatter(&|t| format!("{:.0}", t))
        .label_style(("sans-serif", font).into_font().color(&temperature_color))
        .draw()?;

    let temperature_style = temperature_color.stroke_width(layout.line_width);
    chart.draw_secondary_series(
        finite_segments(&analysis.time_s, &analysis.temperature_c)
            .into_iter()
            .map(|seg| PathElement::new(seg, temperature_style)),
    )?;

    let altitude_style = altitude_color.stroke_width(layout.line_width);
    chart.draw_series(
        finite_segments(&analysis.time_s, &analysis.altitude_m)
            .into_iter()
            .map(|seg| PathElement::new(seg, altitude_style)),
    )?;

    let (xr, yr) = chart.plotting_area().get_pixel_range();
    let desc_x = xr.end + px(4.5) as i32 - px(0.6) as i32;
    let desc_y = (yr.start + yr.end) / 2;
    root.draw(&Text::new(
        TEMPERATURE_DESC,
        (desc_x, desc_y),
        ("sans-serif", font)
            .into_font()
            .transform(FontTransform::Rotate270)
            .color(&temperature_color)
            .pos(Pos::new(HPos::Center, VPos::Center)),
    ))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_series_gets_unit_padding() {
        assert_eq!(padded_range(&[5.0, 5.0]), 4.0..6.0);
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let r = padded_range(&[f64::NAN, 0.0, 10.0, f64::INFINITY]);
        assert!((r.start + 0.5).abs() < 1e-12);
        assert!((r.end - 10.5).abs() < 1e-12);
    }

    #[test]
    fn nothing_finite_falls_back_to_unit_range() {
        assert_eq!(padded_range(&[]), 0.0..1.0);
        assert_eq!(padded_range(&[f64::NAN]), 0.0..1.0);
    }
}
