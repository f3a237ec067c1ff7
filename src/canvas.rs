//! Page drawing surface over a pdf-writer content stream
//!
//! Provides the handful of drawing calls the document layout needs: rules,
//! rectangles, left-aligned and centred strings, transforms, images and
//! opacity states.

use pdf_writer::{Content, Name, Str};

use crate::font_registry::BuiltinFont;
use crate::types::{Color, Rect};
use crate::unicode_utils::unicode_to_winansi;

/// Text state restored together with each `q`/`Q` pair. Fonts are selected
/// inside every text object, so the content stream alone does not carry it.
#[derive(Clone)]
pub struct CanvasState {
    pub font: BuiltinFont,
    pub font_size: f64,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            font: BuiltinFont::Helvetica,
            font_size: 12.0,
        }
    }
}

/// Drawing surface for one page
pub struct PdfCanvas {
    content: Content,
    state: CanvasState,
    state_stack: Vec<CanvasState>,
}

impl PdfCanvas {
    pub fn new() -> Self {
        Self {
            content: Content::new(),
            state: CanvasState::default(),
            state_stack: Vec::new(),
        }
    }

    /// Serialized content stream
    pub fn finish(self) -> Vec<u8> {
        self.content.finish()
    }

    // ===== State Management =====

    pub fn save_state(&mut self) {
        self.state_stack.push(self.state.clone());
        self.content.save_state();
    }

    pub fn restore_state(&mut self) {
        if let Some(state) = self.state_stack.pop() {
            self.state = state;
            self.content.restore_state();
        }
    }

    // ===== Colors =====

    pub fn set_fill_color(&mut self, color: Color) {
        self.content
            .set_fill_rgb(color.r as f32, color.g as f32, color.b as f32);
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.content
            .set_stroke_rgb(color.r as f32, color.g as f32, color.b as f32);
    }

    /// Select a registered ExtGState (used for opacity)
    pub fn set_ext_graphics_state(&mut self, name: Name<'_>) {
        self.content.set_parameters(name);
    }

    // ===== Drawing =====

    pub fn rect(&mut self, rect: Rect, fill: bool, stroke: bool) {
        self.content.rect(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
        );
        match (fill, stroke) {
            (true, true) => {
                self.content.fill_nonzero_and_stroke();
            }
            (true, false) => {
                self.content.fill_nonzero();
            }
            (false, true) => {
                self.content.stroke();
            }
            (false, false) => {
                self.content.end_path();
            }
        }
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.content.move_to(x1 as f32, y1 as f32);
        self.content.line_to(x2 as f32, y2 as f32);
        self.content.stroke();
    }

    // ===== Text =====

    pub fn set_font(&mut self, font: BuiltinFont, size: f64) {
        self.state.font = font;
        self.state.font_size = size;
    }

    /// Draw text with its baseline starting at (x, y)
    pub fn draw_string(&mut self, x: f64, y: f64, text: &str) {
        self.content.begin_text();
        self.content
            .set_font(self.state.font.resource_name(), self.state.font_size as f32);
        self.content.next_line(x as f32, y as f32);
        let winansi_bytes = unicode_to_winansi(text);
        self.content.show(Str(&winansi_bytes));
        self.content.end_text();
    }

    /// Draw text horizontally centred on x
    pub fn draw_centred_string(&mut self, x: f64, y: f64, text: &str) {
        let width = self.state.font.text_width(text, self.state.font_size);
        self.draw_string(x - width / 2.0, y, text);
    }

    // ===== Transformations =====

    pub fn translate(&mut self, x: f64, y: f64) {
        self.content
            .transform([1.0, 0.0, 0.0, 1.0, x as f32, y as f32]);
    }

    pub fn rotate(&mut self, angle_degrees: f64) {
        let angle_rad = angle_degrees.to_radians();
        let cos_a = angle_rad.cos() as f32;
        let sin_a = angle_rad.sin() as f32;
        self.content.transform([cos_a, sin_a, -sin_a, cos_a, 0.0, 0.0]);
    }

    // ===== Line Styles =====

    pub fn set_line_width(&mut self, width: f64) {
        self.content.set_line_width(width as f32);
    }

    // ===== Images =====

    /// Paint an image XObject so it fills `rect` (images are 1x1 units in PDF)
    pub fn draw_image(&mut self, image_name: Name<'_>, rect: Rect) {
        self.content.save_state();
        self.content.transform([
            rect.width as f32,
            0.0,
            0.0,
            rect.height as f32,
            rect.x as f32,
            rect.y as f32,
        ]);
        self.content.x_object(image_name);
        self.content.restore_state();
    }
}

impl Default for PdfCanvas {
    fn default() -> Self {
        Self::new()
    }
}
