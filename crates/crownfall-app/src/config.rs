//! Host settings read from the environment.
//!
//! Every variable is optional. The match itself is described by a preset,
//! optionally replaced by a JSON document on disk, with the seed applied last.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crownfall_core::config::MatchConfig;
use crownfall_core::enums::FighterClass;

use crate::error::AppError;

/// Default frame budget: five minutes at 60 Hz.
pub const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Overrides the seed of the selected match config.
    pub seed: Option<u64>,
    pub class: FighterClass,
    pub preset: String,
    /// JSON match config; replaces the preset when set.
    pub config_path: Option<PathBuf>,
    /// Give up and report no result after this many frames.
    pub max_frames: u64,
    /// Pace frames against the wall clock instead of running flat out.
    pub realtime: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            class: FighterClass::default(),
            preset: "classic".to_string(),
            config_path: None,
            max_frames: DEFAULT_MAX_FRAMES,
            realtime: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            seed: parsed(&lookup, "CROWNFALL_SEED")?,
            class: match lookup("CROWNFALL_CLASS") {
                Some(value) => FighterClass::from_str(&value)?,
                None => defaults.class,
            },
            preset: lookup("CROWNFALL_PRESET").unwrap_or(defaults.preset),
            config_path: lookup("CROWNFALL_CONFIG").map(PathBuf::from),
            max_frames: parsed(&lookup, "CROWNFALL_MAX_FRAMES")?.unwrap_or(defaults.max_frames),
            realtime: parsed_flag(&lookup, "CROWNFALL_REALTIME")?.unwrap_or(defaults.realtime),
        })
    }

    /// Resolve the match config: file if given, preset otherwise.
    pub fn match_config(&self) -> Result<MatchConfig, AppError> {
        let mut config = match &self.config_path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
                    path: path.clone(),
                    source,
                })?;
                MatchConfig::from_json(&json)?
            }
            None => MatchConfig::preset(&self.preset)?,
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

fn parsed<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, AppError> {
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::Env { var, value }),
        None => Ok(None),
    }
}

fn parsed_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<bool>, AppError> {
    match lookup(var) {
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" | "" => Ok(Some(false)),
            _ => Err(AppError::Env { var, value }),
        },
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crownfall_core::config::PlayerMovement;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        let m = config.match_config().unwrap();
        assert_eq!(m.seed, MatchConfig::classic().seed);
        assert_eq!(m.player_lives, 0);
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CROWNFALL_SEED", "99"),
            ("CROWNFALL_CLASS", "Axe Thrower"),
            ("CROWNFALL_PRESET", "skirmish"),
            ("CROWNFALL_MAX_FRAMES", "600"),
            ("CROWNFALL_REALTIME", "yes"),
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.class, FighterClass::AxeThrower);
        assert_eq!(config.max_frames, 600);
        assert!(config.realtime);

        let m = config.match_config().unwrap();
        assert_eq!(m.seed, 99);
        assert!(matches!(m.player_movement, PlayerMovement::Accelerated { .. }));
    }

    #[test]
    fn test_bad_values_are_reported() {
        let err = AppConfig::from_lookup(lookup_from(&[("CROWNFALL_SEED", "abc")])).unwrap_err();
        assert!(matches!(err, AppError::Env { var: "CROWNFALL_SEED", .. }));

        let err = AppConfig::from_lookup(lookup_from(&[("CROWNFALL_REALTIME", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Env { var: "CROWNFALL_REALTIME", .. }));

        let err = AppConfig::from_lookup(lookup_from(&[("CROWNFALL_CLASS", "bard")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_unknown_preset_fails_at_resolution() {
        let config = AppConfig::from_lookup(lookup_from(&[("CROWNFALL_PRESET", "chaos")])).unwrap();
        assert!(matches!(config.match_config(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let config = AppConfig {
            config_path: Some(PathBuf::from("/nonexistent/crownfall.json")),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.match_config(),
            Err(AppError::ReadConfig { .. })
        ));
    }

    #[test]
    fn test_config_file_with_seed_override() {
        let path = std::env::temp_dir().join(format!("crownfall-test-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "ai_count": 2, "seed": 5 }"#).unwrap();
        let config = AppConfig {
            seed: Some(77),
            config_path: Some(path.clone()),
            ..AppConfig::default()
        };
        let m = config.match_config().unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(m.ai_count, 2);
        assert_eq!(m.seed, 77);
    }
}
