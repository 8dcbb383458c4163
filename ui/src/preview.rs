use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// MIME type used when the platform does not know the file's type.
const FALLBACK_MIME: &str = "application/octet-stream";

/// Encodes file contents as a `data:` URI suitable for an `<img src>`.
pub fn to_data_uri(content_type: Option<&str>, bytes: &[u8]) -> String {
    let mime = content_type
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(FALLBACK_MIME);
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_with_declared_type() {
        assert_eq!(
            to_data_uri(Some("image/png"), b"hello"),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[test]
    fn unknown_type_falls_back_to_octet_stream() {
        assert_eq!(
            to_data_uri(None, &[0xff]),
            "data:application/octet-stream;base64,/w=="
        );
        assert_eq!(
            to_data_uri(Some(""), &[]),
            "data:application/octet-stream;base64,"
        );
    }
}
