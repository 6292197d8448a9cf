use std::path::Path;
use std::sync::Arc;

use anyhow::anyhow;

use crate::core::interfaces::adapters::{ImageLoader, OcrService};
use crate::core::models::{ExtractionError, ExtractionResult};
use crate::global_constants::LOG_TAG_EXTRACTOR;

/// Runs load then recognize for one image, stopping at the first failure.
pub struct ExtractionOrchestrator {
    image_loader: Arc<dyn ImageLoader>,
    ocr_service: Arc<dyn OcrService>,
}

impl ExtractionOrchestrator {
    pub fn new(image_loader: Arc<dyn ImageLoader>, ocr_service: Arc<dyn OcrService>) -> Self {
        Self {
            image_loader,
            ocr_service,
        }
    }

    pub async fn extract(&self, path: impl AsRef<Path>) -> ExtractionResult {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            log::error!("{} Refusing to extract from an empty image path", LOG_TAG_EXTRACTOR);
            return Err(ExtractionError::load(path, anyhow!("image path is empty")));
        }

        log::info!("{} Extracting text from {:?}", LOG_TAG_EXTRACTOR, path);

        let image = self
            .image_loader
            .load_image(path)
            .await
            .map_err(|error| ExtractionError::load(path, error))?;

        log::debug!(
            "{} Loaded {}x{} image, handing to OCR service",
            LOG_TAG_EXTRACTOR,
            image.width(),
            image.height()
        );

        let result = self
            .ocr_service
            .extract_text_from_image(&image)
            .await
            .map_err(ExtractionError::recognition)?;

        log::info!(
            "{} Extraction complete, {} characters recognized",
            LOG_TAG_EXTRACTOR,
            result.full_text.chars().count()
        );

        Ok(result)
    }
}
