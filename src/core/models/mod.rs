mod engine_config;
mod extraction_error;
mod ocr;
mod ocr_settings;

pub use engine_config::TesseractConfig;
pub use extraction_error::{ExtractionError, ExtractionResult};
pub use ocr::OcrResult;
pub use ocr_settings::OcrSettings;
