//! Trainer configuration resource.
//!
//! Manages motion, feedback, and audio settings loaded from an INI file.
//! Provides defaults for safe startup and a loader that keeps defaults for
//! any missing key.
//!
//! # Configuration File Format
//!
//! ```ini
//! [motion]
//! distance = 0.25
//! duration = 1.5
//! spin_rate = 540.0
//!
//! [feedback]
//! flash_delay = 0.35
//! neutral = 200,200,200
//! hover = 255,230,90
//! success = 80,220,80
//! error = 230,60,60
//!
//! [audio]
//! success_fx = assets/sfx/ratchet.ogg
//! error_fx = assets/sfx/clank.ogg
//! volume = 0.8
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::color::Color;
use crate::math::Vec3;

/// Default safe values for startup
const DEFAULT_DISTANCE: f32 = 0.25;
const DEFAULT_DURATION: f32 = 1.5;
const DEFAULT_SPIN_RATE: f32 = 540.0;
const DEFAULT_FLASH_DELAY: f32 = 0.35;
const DEFAULT_NEUTRAL: Color = Color::rgb(200, 200, 200);
const DEFAULT_HOVER: Color = Color::rgb(255, 230, 90);
const DEFAULT_SUCCESS: Color = Color::rgb(80, 220, 80);
const DEFAULT_ERROR: Color = Color::rgb(230, 60, 60);
const DEFAULT_SUCCESS_FX: &str = "assets/sfx/ratchet.ogg";
const DEFAULT_ERROR_FX: &str = "assets/sfx/clank.ogg";
const DEFAULT_VOLUME: f32 = 0.8;
const DEFAULT_CONFIG_PATH: &str = "./trainer.ini";

/// Clip identifiers used with the audio bridge.
pub const FX_SUCCESS: &str = "success";
pub const FX_ERROR: &str = "error";

/// Trainer configuration resource.
///
/// Stores the tighten-motion parameters, the four feedback colors, the
/// error-flash delay, and the sound clip paths/volume.
#[derive(Resource, Debug, Clone)]
pub struct TrainerConfig {
    /// Travel distance of the tighten motion.
    pub distance: f32,
    /// Duration of the tighten motion in seconds.
    pub duration: f32,
    /// Spin rate of the tighten motion in degrees per second.
    pub spin_rate: f32,
    /// Local axis nuts travel and spin about.
    pub axis: Vec3,
    /// Seconds before a wrong-selection flash reverts.
    pub flash_delay: f32,
    /// Color of an untouched nut.
    pub neutral: Color,
    /// Color applied while the pointer is over a nut.
    pub hover: Color,
    /// Color of a completed nut.
    pub success: Color,
    /// Transient color of a wrongly selected nut.
    pub error: Color,
    /// Path of the success sound clip.
    pub success_fx: String,
    /// Path of the error sound clip.
    pub error_fx: String,
    /// Effect volume in [0, 1].
    pub volume: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainerConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            duration: DEFAULT_DURATION,
            spin_rate: DEFAULT_SPIN_RATE,
            axis: Vec3::Z,
            flash_delay: DEFAULT_FLASH_DELAY,
            neutral: DEFAULT_NEUTRAL,
            hover: DEFAULT_HOVER,
            success: DEFAULT_SUCCESS,
            error: DEFAULT_ERROR,
            success_fx: DEFAULT_SUCCESS_FX.to_string(),
            error_fx: DEFAULT_ERROR_FX.to_string(),
            volume: DEFAULT_VOLUME,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. `volume` is
    /// clamped to [0, 1]. Returns an error if the file cannot be read or
    /// parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [motion] section
        if let Some(distance) = config.getfloat("motion", "distance").ok().flatten() {
            self.distance = distance as f32;
        }
        if let Some(duration) = config.getfloat("motion", "duration").ok().flatten() {
            self.duration = duration as f32;
        }
        if let Some(spin_rate) = config.getfloat("motion", "spin_rate").ok().flatten() {
            self.spin_rate = spin_rate as f32;
        }

        // [feedback] section
        if let Some(delay) = config.getfloat("feedback", "flash_delay").ok().flatten() {
            self.flash_delay = delay as f32;
        }
        for (key, slot) in [
            ("neutral", &mut self.neutral),
            ("hover", &mut self.hover),
            ("success", &mut self.success),
            ("error", &mut self.error),
        ] {
            if let Some(value) = config.get("feedback", key)
                && let Some(color) = Color::parse_rgb(&value)
            {
                *slot = color;
            }
        }

        // [audio] section
        if let Some(path) = config.get("audio", "success_fx") {
            self.success_fx = path;
        }
        if let Some(path) = config.get("audio", "error_fx") {
            self.error_fx = path;
        }
        if let Some(volume) = config.getfloat("audio", "volume").ok().flatten() {
            self.volume = (volume as f32).clamp(0.0, 1.0);
        }

        info!(
            "Loaded config: distance={} duration={}s spin={}deg/s flash={}s volume={}",
            self.distance, self.duration, self.spin_rate, self.flash_delay, self.volume
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_defaults() {
        let cfg = TrainerConfig::new();
        assert!(approx_eq(cfg.distance, DEFAULT_DISTANCE));
        assert!(approx_eq(cfg.duration, DEFAULT_DURATION));
        assert!(approx_eq(cfg.spin_rate, DEFAULT_SPIN_RATE));
        assert!(approx_eq(cfg.flash_delay, DEFAULT_FLASH_DELAY));
        assert_eq!(cfg.neutral, DEFAULT_NEUTRAL);
        assert_eq!(cfg.hover, DEFAULT_HOVER);
        assert_eq!(cfg.success, DEFAULT_SUCCESS);
        assert_eq!(cfg.error, DEFAULT_ERROR);
        assert!(approx_eq(cfg.volume, DEFAULT_VOLUME));
        assert_eq!(cfg.axis, Vec3::Z);
    }

    #[test]
    fn test_load_keeps_defaults_for_missing_keys_and_clamps_volume() {
        let dir = std::env::temp_dir();
        let path = dir.join("nutrunner_test_trainer.ini");
        {
            let mut f = std::fs::File::create(&path).unwrap();
            writeln!(f, "[motion]").unwrap();
            writeln!(f, "distance = 0.5").unwrap();
            writeln!(f, "[feedback]").unwrap();
            writeln!(f, "error = 1,2,3").unwrap();
            writeln!(f, "[audio]").unwrap();
            writeln!(f, "volume = 3.5").unwrap();
        }

        let mut cfg = TrainerConfig::with_path(&path);
        cfg.load_from_file().unwrap();

        assert!(approx_eq(cfg.distance, 0.5));
        // Missing keys keep defaults.
        assert!(approx_eq(cfg.duration, DEFAULT_DURATION));
        assert_eq!(cfg.neutral, DEFAULT_NEUTRAL);
        assert_eq!(cfg.error, Color::rgb(1, 2, 3));
        // Out-of-range volume clamps.
        assert!(approx_eq(cfg.volume, 1.0));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let mut cfg = TrainerConfig::with_path("/nonexistent/trainer.ini");
        assert!(cfg.load_from_file().is_err());
    }
}
