use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use image::DynamicImage;

/// Image Loader: decodes the image stored at `path`.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load_image(&self, path: &Path) -> Result<DynamicImage>;
}
