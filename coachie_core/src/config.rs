//! Configuration file support for Coachie.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/coachie/config.toml`.

use crate::{Error, Goals, Result, ScoreWeights};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub goals: Goals,

    #[serde(default)]
    pub score: ScoreConfig,

    #[serde(default)]
    pub habits: HabitsConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Score blending and streak configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreConfig {
    #[serde(default = "default_health_weight")]
    pub health_weight: f64,

    #[serde(default = "default_wellness_weight")]
    pub wellness_weight: f64,

    #[serde(default = "default_habits_weight")]
    pub habits_weight: f64,

    /// Minimum daily score that keeps a streak alive
    #[serde(default = "default_streak_threshold")]
    pub streak_threshold: u8,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            health_weight: default_health_weight(),
            wellness_weight: default_wellness_weight(),
            habits_weight: default_habits_weight(),
            streak_threshold: default_streak_threshold(),
        }
    }
}

impl ScoreConfig {
    pub fn weights(&self) -> ScoreWeights {
        ScoreWeights {
            health: self.health_weight,
            wellness: self.wellness_weight,
            habits: self.habits_weight,
        }
    }
}

/// Habits the user is tracking
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct HabitsConfig {
    #[serde(default)]
    pub tracked: Vec<String>,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".local/share"))
            .unwrap_or_else(|| PathBuf::from("."))
    });
    base.join("coachie")
}

fn default_health_weight() -> f64 {
    ScoreWeights::default().health
}

fn default_wellness_weight() -> f64 {
    ScoreWeights::default().wellness
}

fn default_habits_weight() -> f64 {
    ScoreWeights::default().habits
}

fn default_streak_threshold() -> u8 {
    60
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from("."))
        });
        base.join("coachie").join("config.toml")
    }

    /// Reject goals and weights that cannot be meaningful
    pub fn validate(&self) -> Result<()> {
        let goals = &self.goals;
        for (name, value) in [
            ("goals.calories", goals.calories),
            ("goals.water_ml", goals.water_ml),
            ("goals.sleep_hours", goals.sleep_hours),
            ("score.health_weight", self.score.health_weight),
            ("score.wellness_weight", self.score.wellness_weight),
            ("score.habits_weight", self.score.habits_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.score.streak_threshold > 100 {
            return Err(Error::Config(format!(
                "score.streak_threshold must be at most 100, got {}",
                self.score.streak_threshold
            )));
        }

        Ok(())
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.goals.calories, 2000.0);
        assert_eq!(config.goals.steps, 10_000);
        assert_eq!(config.score.streak_threshold, 60);
        assert!(config.habits.tracked.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.goals.water_ml = 2500.0;
        config.habits.tracked = vec!["morning stretch".into()];
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.goals.water_ml, 2500.0);
        assert_eq!(loaded.habits.tracked, vec!["morning stretch".to_string()]);
        assert_eq!(loaded.score.weights(), config.score.weights());
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[goals]
sleep_hours = 7.5

[habits]
tracked = ["floss", "read"]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.goals.sleep_hours, 7.5);
        assert_eq!(config.goals.calories, 2000.0); // default
        assert_eq!(config.score.health_weight, 0.5); // default
        assert_eq!(config.habits.tracked.len(), 2);
    }

    #[test]
    fn test_negative_goal_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[goals]\ncalories = -5.0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
