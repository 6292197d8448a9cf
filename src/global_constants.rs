pub const APPLICATION_NAME: &str = "ocr-extract";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_EXTRACTOR: &str = "[EXTRACTOR]";

pub const DEFAULT_ENGINE_PATH: &str = "tesseract";
pub const DEFAULT_ENGINE_TIMEOUT_SECONDS: u64 = 60;

pub const ENGINE_OUTPUT_TARGET: &str = "stdout";
pub const ENGINE_VERSION_FLAG: &str = "--version";
pub const ENGINE_LIST_LANGUAGES_FLAG: &str = "--list-langs";

pub const TEMP_IMAGE_PREFIX: &str = "ocr-extract-";
pub const TEMP_IMAGE_SUFFIX: &str = ".png";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const USER_MESSAGE_EXTRACTED_TEXT: &str = "Extracted Text:";
pub const USER_MESSAGE_EXTRACTION_FAILED: &str = "Error during OCR extraction:";
