use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// A user-selected file, held for the duration of one OCR attempt.
///
/// The bytes stay on disk; the worker reads them right before building the
/// multipart body. Replaced wholesale when the user picks a new file.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    /// MIME type declared by the platform. Native pickers and drops usually
    /// declare none, which is why intake also carries a size heuristic.
    pub mime: String,
    pub size: u64,
    pub last_modified: Option<SystemTime>,
    pub path: PathBuf,
}

impl UploadedFile {
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let meta = std::fs::metadata(path)?;
        Ok(Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            mime: String::new(),
            size: meta.len(),
            last_modified: meta.modified().ok(),
            path: path.to_path_buf(),
        })
    }

    /// Lowercase extension taken from the file name.
    pub fn extension(&self) -> String {
        Path::new(&self.name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }
}

/// Text extracted by the OCR service for the current file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrResult {
    pub text: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("response body was not valid JSON")]
    InvalidBody,
    #[error("no text found in response")]
    NoText,
    #[error("worker failed to start: {0}")]
    Runtime(#[from] std::io::Error),
}

impl UploadError {
    /// Arabic message shown in the result area.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Status(code) => {
                format!("حدث خطأ أثناء معالجة الملف: رمز الحالة {code}")
            }
            UploadError::NoText => "لم يتم العثور على نص في الملف المُحمّل".to_string(),
            UploadError::InvalidBody => {
                "حدث خطأ أثناء معالجة الملف: استجابة غير صالحة من الخادم".to_string()
            }
            UploadError::Read { .. } | UploadError::Transport(_) | UploadError::Runtime(_) => {
                format!("حدث خطأ أثناء معالجة الملف: {self}")
            }
        }
    }
}
