use std::sync::Arc;

use reqwest::multipart::{Form, Part};

/// Multipart field the feedback service reads the image from.
pub const FILE_FIELD: &str = "file";

/// A user-selected image, fully read into memory.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ImageUpload {
    name: String,
    content_type: Option<String>,
    bytes: Arc<[u8]>,
}

impl ImageUpload {
    pub fn new(
        name: impl Into<String>,
        content_type: Option<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            // browsers report "" for unknown types.
            content_type: content_type.filter(|ct| !ct.trim().is_empty()),
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    // paired with `len` for clippy::len_without_is_empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Builds the `multipart/form-data` body: one part under [`FILE_FIELD`].
    pub fn to_form(&self) -> Form {
        Form::new().part(FILE_FIELD, self.file_part())
    }

    fn file_part(&self) -> Part {
        let plain = || Part::bytes(self.bytes.to_vec()).file_name(self.name.clone());

        match self.content_type() {
            Some(mime) => plain().mime_str(mime).unwrap_or_else(|e| {
                dioxus_logger::tracing::warn!("ignoring content type {mime:?}: {e}");
                plain()
            }),
            None => plain(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_type_is_unknown() {
        let upload = ImageUpload::new("a.png", Some(String::new()), vec![1u8, 2, 3]);
        assert_eq!(upload.content_type(), None);
        assert_eq!(upload.len(), 3);
        assert!(!upload.is_empty());
        assert!(ImageUpload::new("blank.png", None, Vec::new()).is_empty());
    }

    #[test]
    fn clones_share_the_bytes() {
        let upload = ImageUpload::new("a.png", Some("image/png".to_string()), vec![9u8; 16]);
        let copy = upload.clone();
        assert_eq!(copy, upload);
        assert_eq!(copy.bytes().as_ptr(), upload.bytes().as_ptr());
    }
}
