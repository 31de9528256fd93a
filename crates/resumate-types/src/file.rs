use std::fmt;
use std::path::Path;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// File chosen by the user, held in memory until submitted
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first()
            .map(|m| m.to_string())
            .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Uses the last path component as the file name
    pub fn from_path(path: &Path, bytes: Vec<u8>) -> Self {
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Self::new(file_name, bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Keep file contents out of logs
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
