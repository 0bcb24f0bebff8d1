use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::error::{Result, TraceError};

/// Figure geometry. Sizes in inches, fonts in points, like a print figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FigureConfig {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub font_pt: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_in: 6.4,
            height_in: 4.8,
            dpi: 300,
            font_pt: 10.0,
        }
    }
}

impl FigureConfig {
    /// Pixel size of the PNG: inches × dpi.
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }

    /// Points → pixels at the configured dpi.
    pub fn px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }
}

/// Everything one run needs. Defaults reproduce the field setup:
/// `D5.bin` in, `altitude.png` out, 4 readings per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub csv_output: Option<PathBuf>,
    /// Recorder sample rate; the recorder sleeps 250 ms between readings.
    pub samples_per_second: f64,
    pub title: String,
    pub temperature_color: String, // "#rrggbb"
    pub altitude_color: String,    // "#rrggbb"
    pub line_width: u32,
    /// Hand the PNG to the system viewer after saving.
    pub display: bool,
    pub figure: FigureConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("D5.bin"),
            output_path: PathBuf::from("altitude.png"),
            csv_output: None,
            samples_per_second: 4.0,
            title: "Kite Altimeter - 1st Flight".to_string(),
            temperature_color: "#ff00ff".to_string(),
            altitude_color: "#50fa7b".to_string(),
            line_width: 1,
            display: false,
            figure: FigureConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Parses JSON; errors carry the path of the offending field.
    pub fn from_json_str(contents: &str) -> std::result::Result<Self, String> {
        let de = &mut serde_json::Deserializer::from_str(contents);
        spte::deserialize(de).map_err(|e| {
            let path = e.path().to_string();
            format!("{} (at {})", e.into_inner(), path)
        })
    }

    /// Checks the values serde cannot: rates, colours, geometry.
    pub fn validate(&self) -> Result<()> {
        if !(self.samples_per_second.is_finite() && self.samples_per_second > 0.0) {
            return Err(TraceError::InvalidConfig(format!(
                "samples_per_second must be positive, got {}",
                self.samples_per_second
            )));
        }
        parse_hex_color(&self.temperature_color)?;
        parse_hex_color(&self.altitude_color)?;

        let f = &self.figure;
        if f.dpi == 0 {
            return Err(TraceError::InvalidConfig("figure.dpi must be > 0".into()));
        }
        if !(f.width_in > 0.0 && f.height_in > 0.0 && f.font_pt > 0.0) {
            return Err(TraceError::InvalidConfig(
                "figure width, height and font size must be > 0".into(),
            ));
        }
        let (w, h) = f.pixel_size();
        if w == 0 || h == 0 {
            return Err(TraceError::InvalidConfig(format!("figure is {w}x{h} px")));
        }
        Ok(())
    }
}

/// Leser inn config fra disk (JSON) og validerer.
pub fn load_config(path: impl AsRef<Path>) -> Result<RenderConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| TraceError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let config = RenderConfig::from_json_str(&contents).map_err(|message| TraceError::Config {
        path: path.to_path_buf(),
        message,
    })?;
    config.validate()?;
    info!("Config loaded from {}", path.display());
    Ok(config)
}

/// Lagrer config til disk som JSON (pretty-print).
pub fn save_config(config: &RenderConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(config).map_err(|e| TraceError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, json).map_err(|e| TraceError::io(path, e))?;
    info!("Config saved to {}", path.display());
    Ok(())
}

/// `"#rrggbb"` (leading `#` optional) → RGB triple.
pub fn parse_hex_color(s: &str) -> Result<(u8, u8, u8)> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let bad = || TraceError::InvalidConfig(format!("colour {s:?} is not #rrggbb"));
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_figure_is_1920_by_1440() {
        assert_eq!(FigureConfig::default().pixel_size(), (1920, 1440));
    }

    #[test]
    fn hex_colours() {
        assert_eq!(parse_hex_color("#50fa7b").unwrap(), (0x50, 0xfa, 0x7b));
        assert_eq!(parse_hex_color("FF00FF").unwrap(), (255, 0, 255));
        assert!(parse_hex_color("#50fa7").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
    }
}
