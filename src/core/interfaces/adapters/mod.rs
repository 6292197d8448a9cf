mod image_loader;
mod ocr_service;

pub use image_loader::ImageLoader;
pub use ocr_service::OcrService;
