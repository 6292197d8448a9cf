use std::borrow::Cow;
use std::process::{Output, Stdio};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use image::DynamicImage;
use tokio::process::Command;

use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{OcrResult, TesseractConfig};
use crate::global_constants;

/// Runs the Tesseract binary as a subprocess, one process per image.
pub struct TesseractOcrService {
    config: TesseractConfig,
}

impl TesseractOcrService {
    pub fn build(config: TesseractConfig) -> Result<Self> {
        log::info!(
            "[TESSERACT_OCR] Initializing Tesseract OCR service with engine {:?}",
            config.engine_path
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &TesseractConfig {
        &self.config
    }

    /// First line of `tesseract --version`, e.g. `tesseract 5.3.4`.
    pub async fn engine_version(&self) -> Result<String> {
        let output = self
            .run_engine(&[global_constants::ENGINE_VERSION_FLAG])
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Tesseract 3.x printed its version banner on stderr.
        stdout
            .lines()
            .chain(stderr.lines())
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .ok_or_else(|| anyhow!("OCR engine reported no version"))
    }

    pub async fn available_languages(&self) -> Result<Vec<String>> {
        let output = self
            .run_engine(&[global_constants::ENGINE_LIST_LANGUAGES_FLAG])
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(Self::parse_language_list(&stdout))
    }

    fn parse_language_list(listing: &str) -> Vec<String> {
        listing
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| !line.starts_with("List of available languages"))
            .map(str::to_string)
            .collect()
    }

    fn convert_to_tesseract_compatible_format(image: &DynamicImage) -> Result<Vec<u8>> {
        log::debug!("[TESSERACT_OCR] Converting image to compatible format");

        let encodable: Cow<'_, DynamicImage> = match image {
            DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
                log::debug!("[TESSERACT_OCR] Converting float image to RGBA8");
                Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
            }
            _ => Cow::Borrowed(image),
        };

        let mut buffer = Vec::new();
        encodable
            .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
            .context("Failed to convert image to PNG format")?;
        Ok(buffer)
    }

    async fn run_engine(&self, arguments: &[&str]) -> Result<Output> {
        let engine_path = &self.config.engine_path;
        log::debug!(
            "[TESSERACT_OCR] Running {:?} with arguments {:?}",
            engine_path,
            arguments
        );

        let child = Command::new(engine_path)
            .args(arguments)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to invoke OCR engine at {:?}", engine_path))?;

        let output = tokio::time::timeout(self.config.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                anyhow!(
                    "OCR engine {:?} timed out after {:?}",
                    engine_path,
                    self.config.timeout
                )
            })?
            .with_context(|| format!("Failed to read output of OCR engine {:?}", engine_path))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "OCR engine {:?} exited with {}: {}",
                engine_path,
                output.status,
                stderr.trim()
            ));
        }

        Ok(output)
    }
}

#[async_trait]
impl OcrService for TesseractOcrService {
    async fn extract_text_from_image(&self, image: &DynamicImage) -> Result<OcrResult> {
        log::info!("[TESSERACT_OCR] Starting text extraction");
        log::debug!(
            "[TESSERACT_OCR] Image dimensions: {}x{}",
            image.width(),
            image.height()
        );

        let image_data = Self::convert_to_tesseract_compatible_format(image)
            .context("Failed to prepare image for OCR")?;

        // Removed from disk when dropped at the end of this call.
        let input_file = tempfile::Builder::new()
            .prefix(global_constants::TEMP_IMAGE_PREFIX)
            .suffix(global_constants::TEMP_IMAGE_SUFFIX)
            .tempfile()
            .context("Failed to create temporary image file")?;
        tokio::fs::write(input_file.path(), &image_data)
            .await
            .context("Failed to write temporary image file")?;

        let input_path = input_file.path().to_string_lossy().into_owned();
        let recognition_arguments = self.config.recognition_arguments();

        let mut arguments = vec![input_path.as_str(), global_constants::ENGINE_OUTPUT_TARGET];
        arguments.extend(recognition_arguments.iter().map(String::as_str));

        let output = self
            .run_engine(&arguments)
            .await
            .context("Failed to extract text from image")?;

        let extracted_text = String::from_utf8(output.stdout)
            .context("OCR engine produced output that is not valid UTF-8")?;

        log::info!(
            "[TESSERACT_OCR] Text extraction complete. Extracted {} characters",
            extracted_text.chars().count()
        );
        log::debug!("[TESSERACT_OCR] Extracted text: {}", extracted_text);

        Ok(OcrResult::new(extracted_text))
    }
}
