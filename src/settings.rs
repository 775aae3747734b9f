//! Runtime settings
//!
//! Persisted as JSON next to the binary (or wherever the caller points).
//! Missing or malformed files fall back to defaults.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sensor::GravityMapping;
use crate::sim::{Field, FieldError};

/// Tilt ball settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    /// Field width (pixels)
    pub field_width: f32,
    /// Field height (pixels)
    pub field_height: f32,
    /// Ball diameter (pixels)
    pub ball_size: f32,

    // === Sensor ===
    /// Gravity-to-acceleration mapping
    pub sensor: GravityMapping,
    /// Synthetic sample rate used by the demo driver
    pub sample_rate_hz: f32,

    // === Diagnostics ===
    /// Log every wall contact at info level
    pub log_contacts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            ball_size: DEFAULT_BALL_SIZE,

            sensor: GravityMapping::default(),
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,

            log_contacts: false,
        }
    }
}

impl Settings {
    /// Validated field geometry
    pub fn field(&self) -> Result<Field, FieldError> {
        Field::new(self.field_width, self.field_height, self.ball_size)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings to `path` as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = self.to_json().map_err(io::Error::other)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tilt_ball_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults_form_valid_field() {
        let settings = Settings::default();
        let field = settings.field().unwrap();
        assert_eq!(field.ball_size(), DEFAULT_BALL_SIZE);
        assert_eq!(settings.sensor.scale, SENSOR_SCALE);
        assert!(settings.sensor.invert_x);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "field_width": 300, "field_height": 300 }"#).unwrap();
        assert_eq!(settings.field_width, 300.0);
        assert_eq!(settings.ball_size, DEFAULT_BALL_SIZE);
        assert_eq!(settings.sensor, GravityMapping::default());
    }

    #[test]
    fn test_invalid_geometry_reported() {
        let settings = Settings {
            ball_size: 5000.0,
            ..Default::default()
        };
        assert!(matches!(settings.field(), Err(FieldError::BallTooLarge { .. })));
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("save_load");
        let settings = Settings {
            field_width: 640.0,
            field_height: 480.0,
            ball_size: 32.0,
            log_contacts: true,
            ..Default::default()
        };

        settings.save(&path).unwrap();
        let loaded = Settings::load(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file() {
        let loaded = Settings::load(temp_path("does_not_exist"));
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_load_malformed_file() {
        let path = temp_path("malformed");
        fs::write(&path, "{ not json").unwrap();
        let loaded = Settings::load(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, Settings::default());
    }
}
