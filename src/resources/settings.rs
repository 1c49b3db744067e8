//! Persisted user settings.
//!
//! One user-facing knob: when the outro track "drops". The record is stored
//! in a small INI file, loaded once at startup and rewritten wholesale on
//! save. A missing, unreadable, or unrecognized value silently falls back to
//! the default; there is no migration and no partial merge.
//!
//! # Settings File Format
//!
//! ```ini
//! [drop]
//! timing = year
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::debug;
use std::path::PathBuf;

const DEFAULT_SETTINGS_PATH: &str = "./settings.ini";

/// Granularity of the drop instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropTiming {
    /// Every minute, at the target second.
    Minute,
    /// Every hour, at minute 59 and the target second.
    Hour,
    /// New Year's Eve: December 31st, 23:59 at the target second.
    #[default]
    Year,
}

impl DropTiming {
    /// Parse the persisted token. Unrecognized input yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "minute" => Some(Self::Minute),
            "hour" => Some(Self::Hour),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    /// Token written to the settings file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Year => "year",
        }
    }

    /// The next granularity in the cycle minute → hour → year → minute.
    pub fn next(self) -> Self {
        match self {
            Self::Minute => Self::Hour,
            Self::Hour => Self::Year,
            Self::Year => Self::Minute,
        }
    }
}

/// User settings resource.
#[derive(Resource, Debug, Clone)]
pub struct Settings {
    /// When the outro track should drop.
    pub drop_timing: DropTiming,
    /// Path to the settings file.
    pub settings_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            drop_timing: DropTiming::default(),
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults on any problem.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut settings = Settings {
            settings_path: path.clone(),
            ..Settings::default()
        };

        let mut ini = Ini::new();
        match ini.load(&path) {
            Ok(_) => {
                if let Some(timing) = ini
                    .get("drop", "timing")
                    .and_then(|v| DropTiming::parse(&v))
                {
                    settings.drop_timing = timing;
                }
            }
            Err(e) => {
                debug!("No usable settings at {:?} ({}), using defaults", path, e);
            }
        }

        settings
    }

    /// Overwrite the settings file wholesale with the current record.
    pub fn save(&self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.set("drop", "timing", Some(self.drop_timing.as_str().to_string()));
        ini.write(&self.settings_path)
            .map_err(|e| format!("Failed to save settings file: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("skyclock-{}-{}.ini", name, std::process::id()));
        path
    }

    #[test]
    fn parse_accepts_known_tokens_only() {
        assert_eq!(DropTiming::parse("minute"), Some(DropTiming::Minute));
        assert_eq!(DropTiming::parse("hour"), Some(DropTiming::Hour));
        assert_eq!(DropTiming::parse("year"), Some(DropTiming::Year));
        assert_eq!(DropTiming::parse("decade"), None);
        assert_eq!(DropTiming::parse(""), None);
    }

    #[test]
    fn next_cycles_through_all_granularities() {
        assert_eq!(DropTiming::Minute.next(), DropTiming::Hour);
        assert_eq!(DropTiming::Hour.next(), DropTiming::Year);
        assert_eq!(DropTiming::Year.next(), DropTiming::Minute);
    }

    #[test]
    fn load_missing_file_defaults_to_year() {
        let settings = Settings::load(temp_path("missing"));
        assert_eq!(settings.drop_timing, DropTiming::Year);
    }

    #[test]
    fn load_corrupt_value_defaults_to_year() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "[drop]\ntiming = banana\n").unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.drop_timing, DropTiming::Year);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("roundtrip");
        let settings = Settings {
            drop_timing: DropTiming::Hour,
            settings_path: path.clone(),
        };
        settings.save().unwrap();

        let loaded = Settings::load(&path);
        assert_eq!(loaded.drop_timing, DropTiming::Hour);
        let _ = std::fs::remove_file(&path);
    }
}
