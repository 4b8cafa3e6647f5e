use egui::Color32;

/// Parses theme accent colors given as CSS-style hex strings.
pub trait ColorExt {
    fn from_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');

        let (r, g, b) = match hex.len() {
            6 => (
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            ),
            // Shorthand "#abc" expands each digit.
            3 => {
                let digit = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v * 17);
                (
                    digit(&hex[0..1])?,
                    digit(&hex[1..2])?,
                    digit(&hex[2..3])?,
                )
            }
            _ => return None,
        };

        Some(Color32::from_rgb(r, g, b))
    }
}
