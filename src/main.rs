mod adapters;
mod core;
mod global_constants;

#[cfg(test)]
mod pipeline_tests;

use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::{FileImageLoader, TesseractOcrService};
use crate::core::models::OcrSettings;
use crate::core::orchestrators::ExtractionOrchestrator;
use crate::global_constants::LOG_TAG_MAIN;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!(
        "{} Starting {}",
        LOG_TAG_MAIN,
        global_constants::APPLICATION_NAME
    );

    let settings = OcrSettings::load().unwrap_or_else(|error| {
        log::warn!(
            "{} Failed to load settings, using defaults: {:#}",
            LOG_TAG_MAIN,
            error
        );
        OcrSettings::default()
    });

    let image_path = resolve_image_path(std::env::args().nth(1), &settings);

    let ocr_service = Arc::new(TesseractOcrService::build(settings.tesseract_config())?);
    probe_engine(&ocr_service).await;

    let orchestrator = ExtractionOrchestrator::new(Arc::new(FileImageLoader::new()), ocr_service);

    match orchestrator.extract(&image_path).await {
        Ok(result) => {
            if result.is_blank() {
                log::warn!("{} No text recognized in {:?}", LOG_TAG_MAIN, image_path);
            }
            println!("{} {}", global_constants::USER_MESSAGE_EXTRACTED_TEXT, result.full_text);
        }
        Err(error) => {
            let stage = if error.is_load() { "load" } else { "recognition" };
            log::error!("{} Extraction failed at {} stage", LOG_TAG_MAIN, stage);
            println!("{} {}", global_constants::USER_MESSAGE_EXTRACTION_FAILED, error);
        }
    }

    Ok(())
}

/// Positional argument wins over the configured default; empty when neither is set.
fn resolve_image_path(argument: Option<String>, settings: &OcrSettings) -> PathBuf {
    argument
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .or_else(|| settings.default_image_path.clone())
        .unwrap_or_default()
}

async fn probe_engine(ocr_service: &TesseractOcrService) {
    match ocr_service.engine_version().await {
        Ok(version) => log::debug!("{} Using OCR engine {}", LOG_TAG_MAIN, version),
        Err(error) => {
            log::warn!("{} Could not query OCR engine version: {:#}", LOG_TAG_MAIN, error);
            return;
        }
    }

    let Some(language) = &ocr_service.config().language else {
        return;
    };

    match ocr_service.available_languages().await {
        Ok(languages) => {
            for requested in language.split('+') {
                if !languages.iter().any(|available| available == requested) {
                    log::warn!(
                        "{} Language '{}' is not installed for the OCR engine",
                        LOG_TAG_MAIN,
                        requested
                    );
                }
            }
        }
        Err(error) => {
            log::warn!("{} Could not list OCR engine languages: {:#}", LOG_TAG_MAIN, error);
        }
    }
}
