use super::types::UploadedFile;

/// Image formats the picker offers and validation accepts.
pub const IMAGE_EXTENSIONS: [&str; 13] = [
    "jpg", "jpeg", "png", "heif", "heic", "webp", "bmp", "gif", "tiff", "tif", "raw", "img", "svg",
];

pub const PDF_EXTENSION: &str = "pdf";

/// Upper bound for the untyped-file fallback. Mobile exports (HEIC in
/// particular) often arrive with no declared MIME type at all.
const UNTYPED_MAX_BYTES: u64 = 20 * 1024 * 1024;

pub const REJECT_MESSAGE: &str = "يرجى تحميل ملف صورة (JPG, PNG, HEIC, الخ) أو PDF";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Acceptable,
    Rejected(String),
}

/// Classifies a candidate by extension, declared MIME type, and the size
/// heuristic for files with no declared type.
pub fn classify(file: &UploadedFile) -> Verdict {
    let ext = file.extension();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) || ext == PDF_EXTENSION {
        return Verdict::Acceptable;
    }
    if file.mime.starts_with("image/") || file.mime == "application/pdf" {
        return Verdict::Acceptable;
    }
    if file.mime.is_empty() && (1..=UNTYPED_MAX_BYTES).contains(&file.size) {
        return Verdict::Acceptable;
    }
    Verdict::Rejected(REJECT_MESSAGE.to_string())
}

/// Extension list for the native file dialog filter.
pub fn picker_extensions() -> Vec<&'static str> {
    IMAGE_EXTENSIONS
        .iter()
        .copied()
        .chain(std::iter::once(PDF_EXTENSION))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(name: &str, mime: &str, size: u64) -> UploadedFile {
        UploadedFile {
            name: name.to_string(),
            mime: mime.to_string(),
            size,
            last_modified: None,
            path: PathBuf::from(name),
        }
    }

    #[test]
    fn accepts_every_listed_image_extension() {
        for ext in IMAGE_EXTENSIONS {
            let candidate = file(&format!("scan.{ext}"), "", 1024);
            assert_eq!(
                classify(&candidate),
                Verdict::Acceptable,
                "extension {ext} should be acceptable"
            );
        }
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert_eq!(classify(&file("BOOK.JPG", "", 1024)), Verdict::Acceptable);
        assert_eq!(classify(&file("Book.Pdf", "", 1024)), Verdict::Acceptable);
    }

    #[test]
    fn accepts_pdf_extension() {
        assert_eq!(classify(&file("book.pdf", "", 1024)), Verdict::Acceptable);
    }

    #[test]
    fn accepts_by_declared_image_mime_even_with_odd_extension() {
        assert_eq!(
            classify(&file("photo.dat", "image/x-custom", 1024)),
            Verdict::Acceptable
        );
    }

    #[test]
    fn accepts_by_declared_pdf_mime() {
        assert_eq!(
            classify(&file("export.bin", "application/pdf", 1024)),
            Verdict::Acceptable
        );
    }

    #[test]
    fn untyped_file_within_size_bound_is_acceptable() {
        assert_eq!(classify(&file("photo", "", 1)), Verdict::Acceptable);
        assert_eq!(
            classify(&file("photo", "", 20 * 1024 * 1024)),
            Verdict::Acceptable
        );
    }

    #[test]
    fn untyped_file_over_size_bound_is_rejected() {
        let verdict = classify(&file("photo", "", 20 * 1024 * 1024 + 1));
        assert!(matches!(verdict, Verdict::Rejected(_)));
    }

    #[test]
    fn empty_untyped_file_is_rejected() {
        assert!(matches!(classify(&file("photo", "", 0)), Verdict::Rejected(_)));
    }

    #[test]
    fn unsupported_extension_with_foreign_mime_is_rejected() {
        let verdict = classify(&file("notes.txt", "text/plain", 1024));
        match verdict {
            Verdict::Rejected(reason) => assert_eq!(reason, REJECT_MESSAGE),
            Verdict::Acceptable => panic!("text file should be rejected"),
        }
    }

    #[test]
    fn picker_filter_covers_images_and_pdf() {
        let exts = picker_extensions();
        assert!(exts.contains(&"jpg"));
        assert!(exts.contains(&"pdf"));
        assert_eq!(exts.len(), IMAGE_EXTENSIONS.len() + 1);
    }
}
