use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use image::{DynamicImage, ImageReader};

use crate::core::interfaces::adapters::ImageLoader;

/// Decodes images from local files, sniffing the format from file content.
pub struct FileImageLoader;

impl FileImageLoader {
    pub fn new() -> Self {
        Self
    }

    fn decode_file(path: &Path) -> Result<DynamicImage> {
        let reader = ImageReader::open(path)
            .with_context(|| format!("Failed to open image file {:?}", path))?
            .with_guessed_format()
            .with_context(|| format!("Failed to read image header from {:?}", path))?;

        if reader.format().is_none() {
            anyhow::bail!("Unrecognized image format in {:?}", path);
        }

        // ImageError's Display already includes its source.
        reader
            .decode()
            .map_err(|error| anyhow::anyhow!("Failed to decode image {:?}: {}", path, error))
    }
}

impl Default for FileImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageLoader for FileImageLoader {
    async fn load_image(&self, path: &Path) -> Result<DynamicImage> {
        log::info!("[IMAGE_LOADER] Loading image from {:?}", path);

        let owned_path = path.to_path_buf();
        let image = tokio::task::spawn_blocking(move || Self::decode_file(&owned_path))
            .await
            .context("Image decoding task was aborted")??;

        log::debug!(
            "[IMAGE_LOADER] Decoded {}x{} image ({:?})",
            image.width(),
            image.height(),
            image.color()
        );

        Ok(image)
    }
}
