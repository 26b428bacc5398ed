//! Binary payloads: the uploaded batch spreadsheet and the downloaded template.

/// A file picked by the user for batch prediction.
///
/// Contents are forwarded untouched; parsing is the service's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// The CSV template served for batch uploads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub content_type: String,
    pub bytes: Vec<u8>,
}
