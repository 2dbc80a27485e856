use crate::core::data::{CoffeeIntake, SleepAmount};
use crate::utils::error::{AppError, AppResult};
use crate::utils::time_format;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub color: bool,
    pub clock: ClockStyle,
    /// Defaults applied when the predict command omits an input
    pub default_wake: String,
    pub default_sleep: f64,
    pub default_coffee: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Artifact file overriding the bundled model; None uses the bundled one
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockStyle {
    H12,
    H24,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig {
                color: true,
                clock: ClockStyle::H24,
                // The original form's defaults: wake 07:00, 8 hours, 2 cups
                default_wake: "07:00".to_string(),
                default_sleep: 8.0,
                default_coffee: 2,
            },
            model: ModelConfig { path: None },
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &std::path::Path) -> AppResult<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::System(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        time_format::parse_time_of_day(&self.general.default_wake)?;
        SleepAmount::new(self.general.default_sleep)?;
        CoffeeIntake::new(self.general.default_coffee)?;

        if let Some(path) = &self.model.path
            && path.as_os_str().is_empty()
        {
            return Err(AppError::System(
                "Model path cannot be empty when set".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_file_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bedtimer")
            .join("config.toml")
    }
}
