//! Document extraction: decodes an uploaded file into the single UTF-8
//! text blob the parsing engine consumes. PDF via `pdf-extract`; plain
//! text and markdown pass through. Everything else is an input-level
//! failure surfaced to the client before the engine runs.

use std::path::Path;

use tracing::warn;

use crate::errors::AppError;

const PLAIN_TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md", "markdown"];

/// Decodes `bytes` according to the filename extension. Returns
/// `UnsupportedFormat` for undecodable formats and `EmptyDocument` when
/// the decoded text is empty or whitespace-only.
pub fn extract_document(filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let text = match extension.as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            warn!("PDF extraction failed for '{filename}': {e}");
            AppError::UnsupportedFormat(
                "Failed to extract text from PDF. The file may be corrupted or contain only images."
                    .to_string(),
            )
        })?,
        ext if PLAIN_TEXT_EXTENSIONS.contains(&ext) => {
            String::from_utf8_lossy(bytes).into_owned()
        }
        "docx" => {
            return Err(AppError::UnsupportedFormat(
                "DOCX decoding is not supported. Please upload a PDF or plain-text export."
                    .to_string(),
            ))
        }
        other => {
            return Err(AppError::UnsupportedFormat(format!(
                "Unsupported file format '{other}'. Please upload a PDF or plain-text file."
            )))
        }
    };

    if text.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_plain_text_passthrough() {
        let text = extract_document("resume.txt", b"Jane Doe\njane@example.com").unwrap();
        assert_eq!(text, "Jane Doe\njane@example.com");
    }

    #[test]
    fn test_markdown_passthrough() {
        assert!(extract_document("resume.md", b"# Jane Doe").is_ok());
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(extract_document("RESUME.TXT", b"Jane Doe").is_ok());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = extract_document("resume.odt", b"whatever").err().unwrap();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_extension_rejected() {
        let err = extract_document("resume", b"whatever").err().unwrap();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_docx_rejected_with_guidance() {
        let err = extract_document("resume.docx", b"PK...").err().unwrap();
        match err {
            AppError::UnsupportedFormat(msg) => assert!(msg.contains("DOCX")),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_only_is_empty_document() {
        let err = extract_document("resume.txt", b"  \n \t ").err().unwrap();
        assert!(matches!(err, AppError::EmptyDocument));
    }

    #[test]
    fn test_invalid_pdf_bytes_rejected() {
        let err = extract_document("resume.pdf", b"not a pdf").err().unwrap();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_reads_upload_written_to_disk() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"Jane Doe\nAustin, TX").unwrap();
        let bytes = std::fs::read(file.path()).unwrap();
        let name = file.path().file_name().unwrap().to_string_lossy().into_owned();
        let text = extract_document(&name, &bytes).unwrap();
        assert!(text.contains("Austin, TX"));
    }
}
