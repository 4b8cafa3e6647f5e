use egui::Color32;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use crate::utils::color::ColorExt;

/// Fixed production origin. Local runs point elsewhere via `OCR_API_URL`
/// or `config.toml`.
const DEFAULT_API_BASE_URL: &str =
    "https://arabic-ocr-backend-staging-09589497d137.herokuapp.com";

const CONFIG_FILE: &str = "config.toml";
const API_URL_ENV: &str = "OCR_API_URL";

const DEFAULT_ACCENT: Color32 = Color32::from_rgb(0, 113, 227);

/// Everything that varied between the page variants of the product: the
/// endpoint, the accent color, and the user-facing copy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub theme: Theme,
    pub copy: PageCopy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// CSS-style hex color for buttons, highlights, and the progress bar.
    pub accent: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageCopy {
    pub title: String,
    pub tagline: String,
    pub drop_hint: String,
    pub pick_label: String,
    pub submit_label: String,
    pub busy_label: String,
    pub result_heading: String,
    pub copy_label: String,
    pub close_label: String,
    pub reset_label: String,
    pub mixed_hint_label: String,
    pub contact: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            theme: Theme::default(),
            copy: PageCopy::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: "#0071e3".to_string(),
        }
    }
}

impl Default for PageCopy {
    fn default() -> Self {
        Self {
            title: "Arabic Books OCR".to_string(),
            tagline: "حوّل الكتب والمستندات الممسوحة ضوئياً إلى نصوص رقمية".to_string(),
            drop_hint: "اسحب وأفلت الملف هنا أو انقر للتحميل".to_string(),
            pick_label: "اختر ملفاً".to_string(),
            submit_label: "استخراج النص".to_string(),
            busy_label: "جارِ المعالجة...".to_string(),
            result_heading: "النتيجة".to_string(),
            copy_label: "نسخ النص".to_string(),
            close_label: "إغلاق".to_string(),
            reset_label: "بدء من جديد".to_string(),
            mixed_hint_label: "نص مختلط (عربي وإنجليزي)".to_string(),
            contact: "info@arabic-books-ocr.com".to_string(),
        }
    }
}

impl AppConfig {
    /// `config.toml` from the working directory first, then the environment
    /// override, then built-in defaults. Resolved once at startup.
    pub fn load() -> Self {
        let mut config = Self::from_file(Path::new(CONFIG_FILE)).unwrap_or_default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                info!("Using OCR endpoint from {}: {}", API_URL_ENV, url);
                config.api_base_url = url;
            }
        }
        config
    }

    fn from_file(path: &Path) -> Option<Self> {
        let raw = std::fs::read_to_string(path).ok()?;
        match Self::parse(&raw) {
            Some(config) => {
                info!("Loaded configuration from {}", path.display());
                Some(config)
            }
            None => {
                warn!("Ignoring malformed {}", path.display());
                None
            }
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        toml::from_str(raw).ok()
    }

    pub fn accent_color(&self) -> Color32 {
        Color32::from_hex(&self.theme.accent).unwrap_or(DEFAULT_ACCENT)
    }
}
