mod client;
mod intake;
mod types;

pub use client::{OcrClient, OcrHints};
pub use intake::{classify, picker_extensions, Verdict, IMAGE_EXTENSIONS, REJECT_MESSAGE};
pub use types::{OcrResult, UploadError, UploadedFile};
