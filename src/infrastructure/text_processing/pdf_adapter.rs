use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_sanitizer::clean_page_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Page-by-page PDF text extraction.
///
/// Pages yielding no text are skipped; accumulation stops once the
/// configured character budget is exceeded, so a thousand-page upload
/// costs no more than the budget allows. The caller applies the exact
/// final cap.
pub struct PdfAdapter {
    max_chars: usize,
}

impl PdfAdapter {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    fn extract_pages(path: &std::path::Path, max_chars: usize) -> Result<String, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut accumulated = String::new();

        for page_index in 0..page_count {
            let text = doc.extract_text(page_index).unwrap_or_default();
            let cleaned = clean_page_text(&text);

            if cleaned.is_empty() {
                continue;
            }

            if !accumulated.is_empty() {
                accumulated.push('\n');
            }
            accumulated.push_str(&cleaned);

            if accumulated.chars().count() > max_chars {
                break;
            }
        }

        Ok(accumulated)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();
        let max_chars = self.max_chars;

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path, max_chars)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(chars = text.len(), "PDF text extraction complete");

        if text.trim().is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(text)
    }
}
