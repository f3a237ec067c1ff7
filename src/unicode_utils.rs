//! Unicode utilities for PDF text rendering
//!
//! The built-in Type1 faces are declared with WinAnsiEncoding, so text has to
//! be converted to single-byte WinAnsi codes before it goes into a content
//! stream.

/// WinAnsi codes 0x80-0x9F, which differ from Latin-1
const WINANSI_HIGH: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

/// Convert a single character. Control characters have no glyph and give
/// `None`; other unmappable characters become '?'.
pub fn char_to_winansi(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x00..=0x1F | 0x7F..=0x9F => None,
        0x20..=0x7E => Some(code as u8),
        0xA0..=0xFF => Some(code as u8),
        _ => Some(
            WINANSI_HIGH
                .iter()
                .find(|(c, _)| *c == ch)
                .map(|(_, byte)| *byte)
                .unwrap_or(b'?'),
        ),
    }
}

/// Convert Unicode string to WinAnsiEncoding bytes for PDF text rendering
pub fn unicode_to_winansi(text: &str) -> Vec<u8> {
    text.chars().filter_map(char_to_winansi).collect()
}
