use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::TesseractConfig;
use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OcrSettings {
    #[serde(default = "default_engine_path")]
    pub engine_path: PathBuf,
    #[serde(default)]
    pub default_image_path: Option<PathBuf>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub page_segmentation_mode: Option<u8>,
    #[serde(default)]
    pub engine_mode: Option<u8>,
    #[serde(default)]
    pub dpi: Option<u32>,
    #[serde(default)]
    pub config_variables: BTreeMap<String, String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_engine_path() -> PathBuf {
    PathBuf::from(global_constants::DEFAULT_ENGINE_PATH)
}

fn default_timeout_seconds() -> u64 {
    global_constants::DEFAULT_ENGINE_TIMEOUT_SECONDS
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            engine_path: default_engine_path(),
            default_image_path: None,
            language: None,
            page_segmentation_mode: None,
            engine_mode: None,
            dpi: None,
            config_variables: BTreeMap::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl OcrSettings {
    /// Loads from the per-user config directory, writing defaults on first run.
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(&settings_path)?;
            return Ok(default_settings);
        }

        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read settings file {:?}", settings_path))?;
        let settings: OcrSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", settings_path))?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Engine path: {:?}", settings.engine_path);
        log::debug!("[SETTINGS] Engine timeout: {}s", settings.timeout_seconds);

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)
            .with_context(|| format!("Failed to write settings file {:?}", settings_path))?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn tesseract_config(&self) -> TesseractConfig {
        let timeout_seconds = if self.timeout_seconds == 0 {
            log::warn!(
                "[SETTINGS] timeout_seconds of 0 would fail every recognition, using {}s",
                global_constants::DEFAULT_ENGINE_TIMEOUT_SECONDS
            );
            global_constants::DEFAULT_ENGINE_TIMEOUT_SECONDS
        } else {
            self.timeout_seconds
        };

        TesseractConfig {
            engine_path: self.engine_path.clone(),
            language: self.language.clone(),
            page_segmentation_mode: self.page_segmentation_mode,
            engine_mode: self.engine_mode,
            dpi: self.dpi,
            config_variables: self.config_variables.clone(),
            timeout: Duration::from_secs(timeout_seconds),
        }
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
