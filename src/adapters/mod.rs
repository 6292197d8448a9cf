mod file_image_loader;
mod tesseract_ocr_service;

pub use file_image_loader::FileImageLoader;
pub use tesseract_ocr_service::TesseractOcrService;
