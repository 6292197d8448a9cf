#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    use image::{GrayImage, Luma};

    use crate::adapters::{FileImageLoader, TesseractOcrService};
    use crate::core::models::{ExtractionError, TesseractConfig};
    use crate::core::orchestrators::ExtractionOrchestrator;
    use crate::global_constants;

    const PRINTED_TEXT_FIXTURE: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/hello_world.png");

    fn orchestrator_with_engine(engine_path: impl Into<PathBuf>) -> ExtractionOrchestrator {
        let ocr_service = TesseractOcrService::build(TesseractConfig {
            engine_path: engine_path.into(),
            ..TesseractConfig::default()
        })
        .unwrap();

        ExtractionOrchestrator::new(Arc::new(FileImageLoader::new()), Arc::new(ocr_service))
    }

    fn write_white_png(dir: &Path) -> PathBuf {
        let png_path = dir.join("page.png");
        GrayImage::from_pixel(40, 20, Luma([255]))
            .save(&png_path)
            .unwrap();
        png_path
    }

    #[cfg(unix)]
    fn write_fake_engine(dir: &Path, script_body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script_path = dir.join("fake-tesseract");
        std::fs::write(&script_path, format!("#!/bin/sh\n{}\n", script_body)).unwrap();
        std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755)).unwrap();
        script_path
    }

    #[tokio::test]
    async fn test_missing_engine_fails_every_call_with_recognition_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let png_path = write_white_png(temp_dir.path());
        let orchestrator = orchestrator_with_engine(temp_dir.path().join("nope"));

        for _ in 0..2 {
            let error = orchestrator.extract(&png_path).await.unwrap_err();

            assert!(matches!(error, ExtractionError::Recognition { .. }));
            assert!(error.to_string().contains("Failed to invoke OCR engine"));
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_valid_png_through_fake_engine_returns_its_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let png_path = write_white_png(temp_dir.path());
        let engine = write_fake_engine(temp_dir.path(), r"printf 'Hello World\n\014'");
        let orchestrator = orchestrator_with_engine(engine);

        let first = orchestrator.extract(&png_path).await.unwrap();
        let second = orchestrator.extract(&png_path).await.unwrap();

        assert_eq!(first.full_text, "Hello World\n\u{c}");
        assert_eq!(first, second);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_text_file_named_png_fails_to_load_and_never_reaches_engine() {
        let temp_dir = tempfile::tempdir().unwrap();
        let marker = temp_dir.path().join("engine-invoked");
        let engine = write_fake_engine(
            temp_dir.path(),
            &format!("touch '{}'\nprintf 'text'", marker.display()),
        );
        let fake_image_path = temp_dir.path().join("notes.png");
        std::fs::write(&fake_image_path, "meeting notes, not a picture\n").unwrap();
        let orchestrator = orchestrator_with_engine(engine);

        let error = orchestrator.extract(&fake_image_path).await.unwrap_err();

        assert!(error.is_load());
        assert!(error.to_string().contains("notes.png"));
        assert!(!marker.exists());
    }

    #[tokio::test]
    async fn test_nonexistent_path_fails_to_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let orchestrator = orchestrator_with_engine(global_constants::DEFAULT_ENGINE_PATH);

        let error = orchestrator
            .extract(temp_dir.path().join("missing.png"))
            .await
            .unwrap_err();

        assert!(error.is_load());
        assert!(error.to_string().contains("Failed to open image file"));
    }

    #[tokio::test]
    async fn test_printed_text_fixture_with_installed_tesseract_contains_words() {
        let engine_check = TesseractOcrService::build(TesseractConfig::default()).unwrap();
        let has_english = match engine_check.available_languages().await {
            Ok(languages) => languages.iter().any(|language| language == "eng"),
            Err(_) => false,
        };
        if !has_english {
            log::warn!("tesseract with English data not installed, skipping");
            return;
        }

        let orchestrator = orchestrator_with_engine(global_constants::DEFAULT_ENGINE_PATH);

        let result = orchestrator.extract(PRINTED_TEXT_FIXTURE).await.unwrap();

        let normalized: String = result
            .full_text
            .to_uppercase()
            .replace('0', "O")
            .chars()
            .filter(|character| !character.is_whitespace())
            .collect();
        assert!(normalized.contains("HELLO"), "got {:?}", result.full_text);
        assert!(normalized.contains("WORLD"), "got {:?}", result.full_text);
    }
}
