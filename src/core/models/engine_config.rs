use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::global_constants;

/// Everything needed to invoke the Tesseract binary.
#[derive(Debug, Clone, PartialEq)]
pub struct TesseractConfig {
    pub engine_path: PathBuf,
    pub language: Option<String>,
    pub page_segmentation_mode: Option<u8>,
    pub engine_mode: Option<u8>,
    pub dpi: Option<u32>,
    pub config_variables: BTreeMap<String, String>,
    pub timeout: Duration,
}

impl Default for TesseractConfig {
    fn default() -> Self {
        Self {
            engine_path: PathBuf::from(global_constants::DEFAULT_ENGINE_PATH),
            language: None,
            page_segmentation_mode: None,
            engine_mode: None,
            dpi: None,
            config_variables: BTreeMap::new(),
            timeout: Duration::from_secs(global_constants::DEFAULT_ENGINE_TIMEOUT_SECONDS),
        }
    }
}

impl TesseractConfig {
    /// Arguments placed after `<input> stdout` on the engine command line.
    pub fn recognition_arguments(&self) -> Vec<String> {
        let mut arguments = Vec::new();

        if let Some(language) = &self.language {
            arguments.push("-l".to_string());
            arguments.push(language.clone());
        }
        if let Some(psm) = self.page_segmentation_mode {
            arguments.push("--psm".to_string());
            arguments.push(psm.to_string());
        }
        if let Some(oem) = self.engine_mode {
            arguments.push("--oem".to_string());
            arguments.push(oem.to_string());
        }
        if let Some(dpi) = self.dpi {
            arguments.push("--dpi".to_string());
            arguments.push(dpi.to_string());
        }
        for (key, value) in &self.config_variables {
            arguments.push("-c".to_string());
            arguments.push(format!("{}={}", key, value));
        }

        arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_extra_arguments() {
        let config = TesseractConfig::default();

        assert_eq!(config.engine_path, PathBuf::from("tesseract"));
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.recognition_arguments().is_empty());
    }

    #[test]
    fn test_recognition_arguments_include_every_configured_option() {
        let mut config_variables = BTreeMap::new();
        config_variables.insert("preserve_interword_spaces".to_string(), "1".to_string());
        config_variables.insert("load_system_dawg".to_string(), "0".to_string());

        let config = TesseractConfig {
            language: Some("eng+deu".to_string()),
            page_segmentation_mode: Some(6),
            engine_mode: Some(1),
            dpi: Some(300),
            config_variables,
            ..TesseractConfig::default()
        };

        assert_eq!(
            config.recognition_arguments(),
            vec![
                "-l",
                "eng+deu",
                "--psm",
                "6",
                "--oem",
                "1",
                "--dpi",
                "300",
                "-c",
                "load_system_dawg=0",
                "-c",
                "preserve_interword_spaces=1",
            ]
        );
    }
}
