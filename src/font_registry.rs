//! Font registry for the built-in Type1 faces used by the layout
//!
//! Only the standard 14 Helvetica faces are needed, so nothing is embedded.
//! Widths come from the Adobe AFM files and are used to centre text.

use std::collections::BTreeMap;

use pdf_writer::{Name, Pdf, Ref};

use crate::types::RefAllocator;
use crate::unicode_utils::unicode_to_winansi;

/// Helvetica advance widths for codes 0x20..=0x7E, in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

/// Width of the copyright sign in both faces
const COPYRIGHT_WIDTH: u16 = 737;
const FALLBACK_WIDTH: u16 = 556;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl BuiltinFont {
    pub const ALL: [BuiltinFont; 3] = [
        BuiltinFont::Helvetica,
        BuiltinFont::HelveticaBold,
        BuiltinFont::HelveticaOblique,
    ];

    /// Resource name inside page dictionaries
    pub fn resource_name(&self) -> Name<'static> {
        match self {
            BuiltinFont::Helvetica => Name(b"F1"),
            BuiltinFont::HelveticaBold => Name(b"F2"),
            BuiltinFont::HelveticaOblique => Name(b"F3"),
        }
    }

    pub fn base_font(&self) -> Name<'static> {
        match self {
            BuiltinFont::Helvetica => Name(b"Helvetica"),
            BuiltinFont::HelveticaBold => Name(b"Helvetica-Bold"),
            BuiltinFont::HelveticaOblique => Name(b"Helvetica-Oblique"),
        }
    }

    /// Advance width of a WinAnsi code in 1/1000 em
    pub fn char_width(&self, code: u8) -> u16 {
        let table = match self {
            // The oblique face shares the upright metrics
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => &HELVETICA_WIDTHS,
            BuiltinFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        match code {
            0x20..=0x7E => table[(code - 0x20) as usize],
            0xA9 => COPYRIGHT_WIDTH,
            _ => FALLBACK_WIDTH,
        }
    }

    /// Width of `text` in points at `size`
    pub fn text_width(&self, text: &str, size: f64) -> f64 {
        let units: u32 = unicode_to_winansi(text)
            .into_iter()
            .map(|code| self.char_width(code) as u32)
            .sum();
        units as f64 * size / 1000.0
    }
}

pub struct FontRegistry {
    fonts: BTreeMap<BuiltinFont, Ref>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self {
            fonts: BTreeMap::new(),
        }
    }

    /// Get or register a built-in PDF font (Type1)
    /// Returns font resource name (e.g., Name(b"F1"))
    pub fn get_or_builtin(
        &mut self,
        pdf: &mut Pdf,
        refs: &mut RefAllocator,
        font: BuiltinFont,
    ) -> Name<'static> {
        if self.fonts.contains_key(&font) {
            return font.resource_name();
        }

        let font_id = refs.next_ref();
        pdf.type1_font(font_id)
            .base_font(font.base_font())
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        self.fonts.insert(font, font_id);

        font.resource_name()
    }

    /// Register every face the layout uses
    pub fn register_all(&mut self, pdf: &mut Pdf, refs: &mut RefAllocator) {
        for font in BuiltinFont::ALL {
            self.get_or_builtin(pdf, refs, font);
        }
    }

    pub fn write_resources(&self, resources: &mut pdf_writer::writers::Resources<'_>) {
        if self.fonts.is_empty() {
            return;
        }
        let mut dict = resources.fonts();
        for (font, id) in &self.fonts {
            dict.pair(font.resource_name(), *id);
        }
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}
