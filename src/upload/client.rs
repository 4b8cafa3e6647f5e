use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{info, warn};

use super::types::{OcrResult, UploadError, UploadedFile};

/// Request hints forwarded to the OCR service.
#[derive(Debug, Clone, Copy, Default)]
pub struct OcrHints {
    /// Tell the service to expect Arabic and English in one document.
    pub mixed_language: bool,
}

/// The response body varies by backend revision: either a list of pages or
/// a single top-level text.
#[derive(Debug, Deserialize)]
struct OcrResponse {
    #[serde(default)]
    pages: Vec<OcrPage>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OcrPage {
    #[serde(default)]
    text: String,
}

impl OcrResponse {
    fn into_result(self) -> Result<OcrResult, UploadError> {
        let text = self
            .pages
            .into_iter()
            .next()
            .map(|page| page.text)
            .filter(|text| !text.is_empty())
            .or(self.text.filter(|text| !text.is_empty()))
            .ok_or(UploadError::NoText)?;
        Ok(OcrResult {
            text,
            image_url: self.image_url,
        })
    }
}

/// Thin client for the OCR endpoint. One POST per submission, no retry.
#[derive(Clone)]
pub struct OcrClient {
    base_url: String,
    http: reqwest::Client,
}

impl OcrClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Reads the file from disk and submits it.
    pub async fn recognize(
        &self,
        file: &UploadedFile,
        hints: OcrHints,
    ) -> Result<OcrResult, UploadError> {
        let bytes = std::fs::read(&file.path).map_err(|source| UploadError::Read {
            path: file.path.clone(),
            source,
        })?;
        self.recognize_bytes(&file.name, &file.mime, bytes, hints)
            .await
    }

    pub async fn recognize_bytes(
        &self,
        name: &str,
        mime: &str,
        bytes: Vec<u8>,
        hints: OcrHints,
    ) -> Result<OcrResult, UploadError> {
        let mut part = Part::bytes(bytes).file_name(name.to_string());
        if !mime.is_empty() {
            part = part.mime_str(mime)?;
        }
        let mut form = Form::new().part("file", part);
        if hints.mixed_language {
            form = form
                .text("mixed_language", "true")
                .text("languages", "ara+eng");
        }

        let url = format!("{}/api/ocr", self.base_url.trim_end_matches('/'));
        info!("Sending request to: {}", url);

        let response = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Server error: {} {}", status, body);
            return Err(UploadError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: OcrResponse =
            serde_json::from_str(&body).map_err(|_| UploadError::InvalidBody)?;
        parsed.into_result()
    }
}
