//! Page geometry for the fixed document layout
//!
//! All values are PDF points with the origin at the bottom-left corner of a
//! US Letter page.

use pdf_writer::Rect as PdfRect;

use crate::types::{Rect, SignatureSlot};

pub const PAGE_WIDTH: f64 = 612.0;
pub const PAGE_HEIGHT: f64 = 792.0;

pub const HEADER_HEIGHT: f64 = 120.0;
pub const LOGO_SIZE: f64 = 100.0;
pub const BRANDING_Y: f64 = PAGE_HEIGHT - HEADER_HEIGHT - 15.0;
pub const UPPER_RULE_Y: f64 = PAGE_HEIGHT - HEADER_HEIGHT - 25.0;
pub const UPPER_RULE_INSET: f64 = 40.0;
pub const SUBJECT_Y: f64 = PAGE_HEIGHT - HEADER_HEIGHT - 50.0;
pub const LOWER_RULE_Y: f64 = PAGE_HEIGHT - HEADER_HEIGHT - 60.0;
pub const LOWER_RULE_INSET: f64 = 50.0;

pub const BODY_MARGIN_X: f64 = 50.0;
pub const BODY_TOP_Y: f64 = PAGE_HEIGHT - HEADER_HEIGHT - 80.0;
pub const LINE_HEIGHT: f64 = 15.0;
/// A page is closed once the cursor drops below this
pub const PAGE_BREAK_Y: f64 = 200.0;
pub const MAX_CHARS_PER_LINE: usize = 90;

pub const FOOTER_Y: f64 = 40.0;
pub const QR_SIZE: f64 = 100.0;
pub const QR_X: f64 = PAGE_WIDTH - 150.0;
pub const QR_Y: f64 = 20.0;
pub const QR_CAPTION_X: f64 = PAGE_WIDTH - 100.0;
pub const QR_CAPTION_Y: f64 = 15.0;

pub const SIGNATURE_Y: f64 = 150.0;
pub const SIGNATURE_BOX_WIDTH: f64 = 120.0;
pub const SIGNATURE_BOX_HEIGHT: f64 = 60.0;
pub const SIGNATURE_GAP: f64 = 50.0;
pub const SIGNATURE_LABEL_OFFSET: f64 = 15.0;

/// Full page box for the page MediaBox
pub fn page_media_box() -> PdfRect {
    rect_to_pdf(&Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT))
}

/// Convert our Rect to pdf-writer Rect (corner form)
pub fn rect_to_pdf(rect: &Rect) -> PdfRect {
    PdfRect::new(
        rect.x as f32,
        rect.y as f32,
        rect.right() as f32,
        rect.top() as f32,
    )
}

/// Logo box, centred horizontally at the top of the header band
pub fn logo_rect() -> Rect {
    Rect::new(
        PAGE_WIDTH / 2.0 - LOGO_SIZE / 2.0,
        PAGE_HEIGHT - HEADER_HEIGHT,
        LOGO_SIZE,
        LOGO_SIZE,
    )
}

pub fn qr_rect() -> Rect {
    Rect::new(QR_X, QR_Y, QR_SIZE, QR_SIZE)
}

/// Box for a signature slot; the three boxes are centred as a group
pub fn signature_box(slot: SignatureSlot) -> Rect {
    let count = SignatureSlot::ALL.len() as f64;
    let total_width = count * SIGNATURE_BOX_WIDTH + (count - 1.0) * SIGNATURE_GAP;
    let start_x = (PAGE_WIDTH - total_width) / 2.0;
    let x = start_x + slot.index() as f64 * (SIGNATURE_BOX_WIDTH + SIGNATURE_GAP);
    Rect::new(x, SIGNATURE_Y, SIGNATURE_BOX_WIDTH, SIGNATURE_BOX_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_boxes_are_centred() {
        let first = signature_box(SignatureSlot::Party1);
        let last = signature_box(SignatureSlot::Guarantor);
        assert_eq!(first.x, 76.0);
        assert_eq!(PAGE_WIDTH - last.right(), first.x);
        assert_eq!(signature_box(SignatureSlot::Party2).x, 246.0);
    }

    #[test]
    fn test_header_positions() {
        let logo = logo_rect();
        assert_eq!((logo.x, logo.y), (256.0, 672.0));
        assert_eq!(BODY_TOP_Y, 592.0);
        assert_eq!(BRANDING_Y, 657.0);
    }
}
