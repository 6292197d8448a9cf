#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrResult {
    /// Text exactly as the engine printed it, trailing whitespace included.
    pub full_text: String,
}

impl OcrResult {
    pub fn new(full_text: String) -> Self {
        Self { full_text }
    }

    pub fn is_blank(&self) -> bool {
        self.full_text.trim().is_empty()
    }
}
