//! Form Configuration
//!
//! Label text, flash timing and indicator binding for the screen.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aggregate::IndicatorMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed form config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("flash_reset_ms must be greater than zero")]
    ZeroFlashDelay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub header_title: String,
    pub select_all_label: String,
    pub submit_label: String,
    /// Delay before the submit acknowledgment flash is cleared
    pub flash_reset_ms: u32,
    pub indicator_mode: IndicatorMode,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            header_title: "CheckBoxes".to_string(),
            select_all_label: "Выбрать все".to_string(),
            submit_label: "Отправить".to_string(),
            flash_reset_ms: 500,
            indicator_mode: IndicatorMode::default(),
        }
    }
}

impl FormConfig {
    /// Parse a config document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(json)?;
        if config.flash_reset_ms == 0 {
            return Err(ConfigError::ZeroFlashDelay);
        }
        Ok(config)
    }
}
