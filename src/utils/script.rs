//! Per-line and per-word script classification for the result view.
//!
//! OCR output from scanned Arabic books regularly mixes Arabic and Latin
//! text in one document, so each line is laid out in the direction of its
//! dominant script.

/// Rendering direction for a line or word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rtl,
    Ltr,
}

fn is_arabic_letter(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Majority vote: more Arabic-block letters than Latin letters means RTL.
/// Ties, digits, and punctuation-only text fall back to LTR.
pub fn dominant_direction(text: &str) -> Direction {
    let mut arabic = 0usize;
    let mut latin = 0usize;
    for c in text.chars() {
        if is_arabic_letter(c) {
            arabic += 1;
        } else if is_latin_letter(c) {
            latin += 1;
        }
    }
    if arabic > latin {
        Direction::Rtl
    } else {
        Direction::Ltr
    }
}

/// Consecutive words sharing one direction, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub direction: Direction,
}

/// Groups the words of a line into direction runs. The caller lays the runs
/// out in the line's dominant direction; each run stays internally ordered.
pub fn split_runs(line: &str) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for word in line.split_whitespace() {
        let direction = dominant_direction(word);
        match runs.last_mut() {
            Some(run) if run.direction == direction => {
                run.text.push(' ');
                run.text.push_str(word);
            }
            _ => runs.push(Run {
                text: word.to_string(),
                direction,
            }),
        }
    }
    runs
}
