//! Resume text extraction. PDF goes through `pdf-extract`; plain text is
//! decoded as UTF-8 with a latin-1 fallback.

use anyhow::anyhow;

use crate::errors::AppError;

/// Extracts raw text from an uploaded resume, dispatching on the file
/// extension.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    let lowered = filename.to_lowercase();
    if lowered.ends_with(".pdf") {
        extract_pdf(bytes)
    } else if lowered.ends_with(".txt") {
        Ok(extract_txt(bytes))
    } else {
        Err(AppError::UnsupportedMediaType(format!(
            "Unsupported file type: '{filename}'. Please upload PDF or TXT."
        )))
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Internal(anyhow!("failed to read PDF: {e}")))?;
    Ok(text.trim().to_string())
}

fn extract_txt(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.trim().to_string(),
        // latin-1: every byte maps 1:1 to the same code point
        Err(_) => bytes
            .iter()
            .map(|&b| b as char)
            .collect::<String>()
            .trim()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txt_utf8() {
        let text = extract_text("resume.txt", "  Python and SQL  ".as_bytes()).unwrap();
        assert_eq!(text, "Python and SQL");
    }

    #[test]
    fn test_txt_latin1_fallback() {
        // 0xE9 is 'é' in latin-1 and invalid standalone UTF-8
        let bytes = vec![b'r', b'\xE9', b's', b'u', b'm', b'\xE9'];
        let text = extract_text("cv.TXT", &bytes).unwrap();
        assert_eq!(text, "résumé");
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let err = extract_text("resume.docx", b"PK").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType(_)));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(extract_text("RESUME.TXT", b"hello").is_ok());
    }
}
