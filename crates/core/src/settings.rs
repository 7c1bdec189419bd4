//! Persisted user preferences, stored as JSON.

use crate::error::SwatchError;
use crate::filter::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// How swatches are laid out in a grid view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridMode {
    #[default]
    FitToArea,
    MaintainSize,
}

impl GridMode {
    /// Parses `fit-to-area` or `maintain-size`, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, SwatchError> {
        match name.to_ascii_lowercase().as_str() {
            "fit-to-area" => Ok(GridMode::FitToArea),
            "maintain-size" => Ok(GridMode::MaintainSize),
            _ => Err(SwatchError::UnknownName {
                kind: "grid mode",
                name: name.to_string(),
            }),
        }
    }

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            GridMode::FitToArea => "fit-to-area",
            GridMode::MaintainSize => "maintain-size",
        }
    }

    /// Every canonical name.
    pub fn list_names() -> &'static [&'static str] {
        &["fit-to-area", "maintain-size"]
    }
}

/// The colour space values are shown and edited in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorSpace {
    #[default]
    Argb,
    Cmyk,
    Hsv,
}

impl ColorSpace {
    /// Parses `argb` (or `rgb`), `cmyk` or `hsv`, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, SwatchError> {
        match name.to_ascii_lowercase().as_str() {
            "argb" | "rgb" => Ok(ColorSpace::Argb),
            "cmyk" => Ok(ColorSpace::Cmyk),
            "hsv" => Ok(ColorSpace::Hsv),
            _ => Err(SwatchError::UnknownName {
                kind: "colour space",
                name: name.to_string(),
            }),
        }
    }

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Argb => "argb",
            ColorSpace::Cmyk => "cmyk",
            ColorSpace::Hsv => "hsv",
        }
    }

    /// Every canonical name.
    pub fn list_names() -> &'static [&'static str] {
        &["argb", "cmyk", "hsv"]
    }
}

const KEYS: &[&str] = &[
    "grid_mode",
    "columns",
    "color_space",
    "keep_in_foreground",
    "max_alpha_on_preview",
    "dominance_threshold",
];

/// User preferences. Missing fields take their defaults on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_mode: GridMode,
    pub columns: u32,
    pub color_space: ColorSpace,
    pub keep_in_foreground: bool,
    pub max_alpha_on_preview: bool,
    pub dominance_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_mode: GridMode::FitToArea,
            columns: 3,
            color_space: ColorSpace::Argb,
            keep_in_foreground: false,
            max_alpha_on_preview: true,
            dominance_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SwatchError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let settings: Settings = serde_json::from_str(&text)
            .map_err(|e| SwatchError::Settings(format!("{}: {e}", path.display())))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Writes pretty-printed JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), SwatchError> {
        self.validate()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SwatchError::Settings(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Checks that `columns` is at least 1 and the dominance threshold lies
    /// in [0, 1].
    pub fn validate(&self) -> Result<(), SwatchError> {
        if self.columns == 0 {
            return Err(SwatchError::Settings("columns must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.dominance_threshold) {
            return Err(SwatchError::Settings(format!(
                "dominance_threshold {} is outside 0.0 - 1.0",
                self.dominance_threshold
            )));
        }
        Ok(())
    }

    /// Updates one setting from its string form. The settings are left
    /// unchanged when the value is rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SwatchError> {
        let mut next = self.clone();
        match key {
            "grid_mode" => next.grid_mode = GridMode::from_name(value)?,
            "columns" => next.columns = parse(key, value)?,
            "color_space" => next.color_space = ColorSpace::from_name(value)?,
            "keep_in_foreground" => next.keep_in_foreground = parse(key, value)?,
            "max_alpha_on_preview" => next.max_alpha_on_preview = parse(key, value)?,
            "dominance_threshold" => next.dominance_threshold = parse(key, value)?,
            _ => {
                return Err(SwatchError::UnknownName {
                    kind: "setting",
                    name: key.to_string(),
                })
            }
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Keys accepted by [`set`](Self::set), in file order.
    pub fn keys() -> &'static [&'static str] {
        KEYS
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, SwatchError> {
    value
        .trim()
        .parse()
        .map_err(|_| SwatchError::Settings(format!("invalid value for {key}: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.columns, 3);
        assert_eq!(s.dominance_threshold, 0.4);
        assert_eq!(s.grid_mode, GridMode::FitToArea);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let s = Settings::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut s = Settings::default();
        s.set("columns", "7").unwrap();
        s.set("color_space", "hsv").unwrap();
        s.set("keep_in_foreground", "true").unwrap();
        s.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), s);
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"color_space\": \"hsv\""), "{text}");
    }

    #[test]
    fn malformed_file_is_a_settings_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(SwatchError::Settings(_))
        ));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"grid_mode": "maintain-size"}"#).unwrap();
        let s = Settings::load(&path).unwrap();
        assert_eq!(s.grid_mode, GridMode::MaintainSize);
        assert_eq!(s.columns, 3);
    }

    #[test]
    fn zero_columns_in_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"columns": 0}"#).unwrap();
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn set_rejects_bad_values_without_changing_anything() {
        let mut s = Settings::default();
        assert!(s.set("columns", "0").is_err());
        assert!(s.set("columns", "many").is_err());
        assert!(s.set("dominance_threshold", "1.2").is_err());
        assert!(s.set("grid_mode", "sideways").is_err());
        assert!(matches!(
            s.set("volume", "11"),
            Err(SwatchError::UnknownName { .. })
        ));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn every_key_is_settable() {
        let mut s = Settings::default();
        let values = ["maintain-size", "4", "cmyk", "true", "false", "0.25"];
        for (key, value) in Settings::keys().iter().zip(values) {
            s.set(key, value).unwrap();
        }
        assert_eq!(s.grid_mode, GridMode::MaintainSize);
        assert_eq!(s.columns, 4);
        assert_eq!(s.color_space, ColorSpace::Cmyk);
        assert!(s.keep_in_foreground);
        assert!(!s.max_alpha_on_preview);
        assert_eq!(s.dominance_threshold, 0.25);
    }

    #[test]
    fn enum_names_round_trip() {
        for name in GridMode::list_names() {
            assert_eq!(GridMode::from_name(name).unwrap().name(), *name);
        }
        for name in ColorSpace::list_names() {
            assert_eq!(ColorSpace::from_name(name).unwrap().name(), *name);
        }
    }
}
