//! Body text layout
//!
//! Wrapping is a plain character count, not word-aware: a paragraph is cut
//! every `max_chars` characters, even in the middle of a word. Vertical
//! placement is a cursor that steps down one line height per line and asks
//! for a page break once it drops below the threshold.

use crate::geometry::{BODY_TOP_Y, LINE_HEIGHT, MAX_CHARS_PER_LINE, PAGE_BREAK_Y};

/// Split body text into output lines.
///
/// Each `\n`-separated paragraph that is blank (whitespace only) gives one
/// empty line. Any other paragraph gives its chunks followed by one empty
/// separator line.
pub fn wrap_body(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let chars: Vec<char> = paragraph.chars().collect();
        for chunk in chars.chunks(max_chars) {
            lines.push(chunk.iter().collect());
        }
        lines.push(String::new());
    }
    lines
}

/// Wrap with the fixed layout width
pub fn wrap_body_default(text: &str) -> Vec<String> {
    wrap_body(text, MAX_CHARS_PER_LINE)
}

/// Vertical position of the next body line on the current page
#[derive(Debug, Clone)]
pub struct LineCursor {
    top: f64,
    step: f64,
    threshold: f64,
    y: f64,
}

impl LineCursor {
    pub fn new(top: f64, step: f64, threshold: f64) -> Self {
        Self {
            top,
            step,
            threshold,
            y: top,
        }
    }

    /// Baseline for the next line
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Move past a drawn line. Returns true when the page is full; the cursor
    /// is then already back at the top for the next page.
    pub fn advance(&mut self) -> bool {
        self.y -= self.step;
        if self.y < self.threshold {
            self.y = self.top;
            return true;
        }
        false
    }
}

impl Default for LineCursor {
    fn default() -> Self {
        Self::new(BODY_TOP_Y, LINE_HEIGHT, PAGE_BREAK_Y)
    }
}

/// How many lines fit on a page before a break is forced
pub fn lines_per_page() -> usize {
    let mut cursor = LineCursor::default();
    let mut count = 1;
    while !cursor.advance() {
        count += 1;
    }
    count
}

/// Page count for a body of `line_count` lines. A break after the final
/// line still opens a fresh page for the footer and signatures.
pub fn page_count(line_count: usize) -> usize {
    line_count / lines_per_page() + 1
}
