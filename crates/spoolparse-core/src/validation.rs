//! Boundary validation performed before invoking the parser.

use crate::error::InputError;
use crate::models::config::LimitsConfig;

/// MIME type accepted for uploads.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Reject pasted text too short to contain a line item.
pub fn validate_text(text: &str, limits: &LimitsConfig) -> Result<(), InputError> {
    let len = text.chars().count();
    if len < limits.min_text_chars {
        return Err(InputError::TextTooShort {
            len,
            min: limits.min_text_chars,
        });
    }
    Ok(())
}

/// Reject uploads that are not PDFs or fall outside the size limits.
///
/// Either a `.pdf` filename or an `application/pdf` content type is enough.
pub fn validate_upload(
    filename: &str,
    content_type: Option<&str>,
    data: &[u8],
    limits: &LimitsConfig,
) -> Result<(), InputError> {
    let pdf_name = filename.to_ascii_lowercase().ends_with(".pdf");
    let pdf_type = content_type
        .map(|ct| ct.split(';').next().unwrap_or("").trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
        .unwrap_or(false);
    if !pdf_name && !pdf_type {
        return Err(InputError::NotPdf(filename.to_string()));
    }

    let size = data.len();
    if size < limits.min_upload_bytes {
        return Err(InputError::PayloadTooSmall {
            size,
            min: limits.min_upload_bytes,
        });
    }
    if size > limits.max_upload_bytes {
        return Err(InputError::PayloadTooLarge {
            size,
            max: limits.max_upload_bytes,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_text() {
        let limits = LimitsConfig::default();
        assert_eq!(
            validate_text("PLA SKU:", &limits),
            Err(InputError::TextTooShort { len: 8, min: 10 })
        );
        assert!(validate_text("PLA Basic SKU: A00", &limits).is_ok());
        // Counted in characters, not bytes
        assert!(validate_text("€€€€€€€€€", &limits).is_err());
    }

    #[test]
    fn test_validate_upload_format() {
        let limits = LimitsConfig::default();
        let data = vec![0u8; 1024];

        assert!(validate_upload("invoice.PDF", None, &data, &limits).is_ok());
        assert!(validate_upload("upload", Some("application/pdf; charset=binary"), &data, &limits).is_ok());
        assert_eq!(
            validate_upload("invoice.txt", Some("text/plain"), &data, &limits),
            Err(InputError::NotPdf("invoice.txt".to_string()))
        );
    }

    #[test]
    fn test_validate_upload_size() {
        let limits = LimitsConfig::default();

        assert_eq!(
            validate_upload("a.pdf", None, &[0u8; 99], &limits),
            Err(InputError::PayloadTooSmall { size: 99, min: 100 })
        );
        assert!(validate_upload("a.pdf", None, &[0u8; 100], &limits).is_ok());

        let big = vec![0u8; limits.max_upload_bytes + 1];
        assert!(matches!(
            validate_upload("a.pdf", None, &big, &limits),
            Err(InputError::PayloadTooLarge { .. })
        ));
    }
}
