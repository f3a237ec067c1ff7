//! Main PDF renderer implementation
//!
//! ## Page sequence
//!
//! ```text
//! header → watermark (first page only) → body lines, breaking pages as needed
//!        → footer + QR stamp → signature boxes (last page only)
//! ```
//!
//! Every page gets the same header. The renderer owns the `Pdf` writer, opens
//! and finalizes pages, and keeps the font and image registries so each
//! resource object is written once and referenced from every page using it.

use log::{debug, error, info};
use pdf_writer::{Finish, Name, Pdf, Ref, TextStr};
use std::collections::BTreeMap;
use std::path::Path;

use crate::canvas::PdfCanvas;
use crate::config::RenderConfig;
use crate::error::{RendererError, RendererResult};
use crate::font_registry::{BuiltinFont, FontRegistry};
use crate::geometry::{self, PAGE_HEIGHT, PAGE_WIDTH};
use crate::image_registry::{ImageHandle, ImageRegistry};
use crate::qr::generate_qr_image;
use crate::text_layout::{wrap_body_default, LineCursor};
use crate::types::{Color, RefAllocator, RenderRequest, SignatureSlot};

const LOGO_KEY: &str = "logo";
const QR_KEY: &str = "qr";
const WATERMARK_STATE: &str = "GS1";
const WATERMARK_ALPHA: f32 = 0.3;
const WATERMARK_FONT_SIZE: f64 = 60.0;
const WATERMARK_GRAY: f64 = 0.9;
const WATERMARK_ANGLE: f64 = 45.0;

/// Render a request into PDF bytes
pub fn render(request: &RenderRequest, config: &RenderConfig) -> RendererResult<Vec<u8>> {
    let logo = resolve_logo(request, config)?;
    let lines = wrap_body_default(&request.body);
    debug!(
        "rendering '{}': {} body lines, logo={}",
        request.subject,
        lines.len(),
        logo.is_some()
    );

    let mut renderer = DocumentRenderer::new(config);
    renderer.set_title(&request.subject);
    let logo = match logo {
        Some(bytes) => Some(renderer.register_image_bytes(LOGO_KEY, &bytes)?),
        None => None,
    };

    renderer.new_page();
    renderer.draw_header(logo.as_ref(), &request.subject)?;
    renderer.draw_watermark(&request.watermark)?;
    renderer.draw_body(&lines, logo.as_ref(), &request.subject)?;
    renderer.draw_footer()?;
    renderer.draw_signatures(request)?;
    renderer.save()
}

/// Original contract: never fails, an empty vector signals a failed render
pub fn render_or_empty(request: &RenderRequest, config: &RenderConfig) -> Vec<u8> {
    match render(request, config) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Error generating PDF: {}", e);
            Vec::new()
        }
    }
}

/// Custom logo if supplied, else the bundled default if present on disk
fn resolve_logo(request: &RenderRequest, config: &RenderConfig) -> RendererResult<Option<Vec<u8>>> {
    if let Some(logo) = request.logo.as_ref().filter(|bytes| !bytes.is_empty()) {
        return Ok(Some(logo.clone()));
    }
    match config.default_logo_path.as_deref() {
        Some(path) if Path::new(path).exists() => {
            debug!("using bundled logo {}", path.display());
            Ok(Some(std::fs::read(path)?))
        }
        Some(path) => {
            debug!("bundled logo {} not found, header drawn without logo", path.display());
            Ok(None)
        }
        None => Ok(None),
    }
}

pub struct DocumentRenderer<'a> {
    config: &'a RenderConfig,
    pdf: Pdf,
    refs: RefAllocator,
    page_tree_id: Ref,
    current_page: Option<(Ref, Ref, PdfCanvas)>, // (page_id, content_id, canvas)
    pages: Vec<Ref>,
    fonts_registry: FontRegistry,
    images_registry: ImageRegistry,
    ext_graphics_states: BTreeMap<String, Ref>,
    ext_graphics_states_used_on_current_page: BTreeMap<String, Ref>,
}

impl<'a> DocumentRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        let mut pdf = Pdf::new();
        let mut refs = RefAllocator::new(1);

        let catalog_id = refs.next_ref();
        let page_tree_id = refs.next_ref();
        pdf.catalog(catalog_id).pages(page_tree_id);

        let mut fonts_registry = FontRegistry::new();
        fonts_registry.register_all(&mut pdf, &mut refs);

        Self {
            config,
            pdf,
            refs,
            page_tree_id,
            current_page: None,
            pages: Vec::new(),
            fonts_registry,
            images_registry: ImageRegistry::new(),
            ext_graphics_states: BTreeMap::new(),
            ext_graphics_states_used_on_current_page: BTreeMap::new(),
        }
    }

    /// Document info title; no dates so output stays reproducible
    pub fn set_title(&mut self, title: &str) {
        let info_id = self.refs.next_ref();
        self.pdf
            .document_info(info_id)
            .title(TextStr(title))
            .producer(TextStr("legal-docgen"));
    }

    pub fn register_image_bytes(&mut self, key: &str, data: &[u8]) -> RendererResult<ImageHandle> {
        self.images_registry
            .get_or_create_from_bytes(&mut self.pdf, &mut self.refs, key, data)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Finalize the current page (if any) and open a new one
    pub fn new_page(&mut self) {
        self.finish_page();

        let page_id = self.refs.next_ref();
        let content_id = self.refs.next_ref();
        self.pages.push(page_id);
        self.current_page = Some((page_id, content_id, PdfCanvas::new()));
        debug!("opened page {}", self.pages.len());
    }

    fn finish_page(&mut self) {
        let Some((page_id, content_id, canvas)) = self.current_page.take() else {
            return;
        };
        let content_bytes = canvas.finish();
        self.pdf.stream(content_id, &content_bytes);

        debug!(
            "Finalizing page {}: {} images, {} graphics states",
            self.pages.len(),
            self.images_registry.used_on_current_page(),
            self.ext_graphics_states_used_on_current_page.len()
        );

        let mut page = self.pdf.page(page_id);
        page.media_box(geometry::page_media_box());
        page.parent(self.page_tree_id);
        page.contents(content_id);
        {
            let mut resources = page.resources();
            self.fonts_registry.write_resources(&mut resources);
            self.images_registry.write_resources(&mut resources);
            if !self.ext_graphics_states_used_on_current_page.is_empty() {
                let mut ext_states = resources.ext_g_states();
                for (name, gs_ref) in &self.ext_graphics_states_used_on_current_page {
                    ext_states.pair(Name(name.as_bytes()), *gs_ref);
                }
            }
        }
        page.finish();
        self.ext_graphics_states_used_on_current_page.clear();
    }

    fn canvas(&mut self) -> RendererResult<&mut PdfCanvas> {
        match self.current_page {
            Some((_, _, ref mut canvas)) => Ok(canvas),
            None => Err(RendererError::PdfError("No current page".to_string())),
        }
    }

    /// Logo, branding line, rules and subject, identical on every page
    pub fn draw_header(&mut self, logo: Option<&ImageHandle>, subject: &str) -> RendererResult<()> {
        if let Some(logo) = logo {
            self.images_registry.mark_used(logo);
        }
        let branding = self.config.branding.clone();
        let canvas = self.canvas()?;

        if let Some(logo) = logo {
            canvas.draw_image(logo.resource_name(), geometry::logo_rect());
        }

        canvas.set_fill_color(Color::black());
        canvas.set_stroke_color(Color::black());
        canvas.set_font(BuiltinFont::HelveticaBold, 14.0);
        canvas.draw_centred_string(PAGE_WIDTH / 2.0, geometry::BRANDING_Y, &branding);

        canvas.set_line_width(1.5);
        canvas.line(
            geometry::UPPER_RULE_INSET,
            geometry::UPPER_RULE_Y,
            PAGE_WIDTH - geometry::UPPER_RULE_INSET,
            geometry::UPPER_RULE_Y,
        );

        canvas.set_font(BuiltinFont::HelveticaBold, 16.0);
        canvas.draw_centred_string(PAGE_WIDTH / 2.0, geometry::SUBJECT_Y, subject);
        canvas.set_line_width(1.0);
        canvas.line(
            geometry::LOWER_RULE_INSET,
            geometry::LOWER_RULE_Y,
            PAGE_WIDTH - geometry::LOWER_RULE_INSET,
            geometry::LOWER_RULE_Y,
        );
        Ok(())
    }

    fn watermark_state(&mut self) -> Ref {
        if let Some(gs_ref) = self.ext_graphics_states.get(WATERMARK_STATE) {
            return *gs_ref;
        }
        let gs_ref = self.refs.next_ref();
        self.pdf
            .ext_graphics(gs_ref)
            .non_stroking_alpha(WATERMARK_ALPHA)
            .stroking_alpha(WATERMARK_ALPHA);
        self.ext_graphics_states
            .insert(WATERMARK_STATE.to_string(), gs_ref);
        gs_ref
    }

    /// Large translucent diagonal text through the page centre
    pub fn draw_watermark(&mut self, text: &str) -> RendererResult<()> {
        let gs_ref = self.watermark_state();
        self.ext_graphics_states_used_on_current_page
            .insert(WATERMARK_STATE.to_string(), gs_ref);

        let canvas = self.canvas()?;
        canvas.save_state();
        canvas.set_ext_graphics_state(Name(WATERMARK_STATE.as_bytes()));
        canvas.set_fill_color(Color::gray(WATERMARK_GRAY));
        canvas.set_font(BuiltinFont::Helvetica, WATERMARK_FONT_SIZE);
        canvas.translate(PAGE_WIDTH / 2.0, PAGE_HEIGHT / 2.0);
        canvas.rotate(WATERMARK_ANGLE);
        canvas.draw_centred_string(0.0, 0.0, text);
        canvas.restore_state();
        Ok(())
    }

    /// Draw body lines, opening continuation pages (header, no watermark)
    pub fn draw_body(
        &mut self,
        lines: &[String],
        logo: Option<&ImageHandle>,
        subject: &str,
    ) -> RendererResult<()> {
        let mut cursor = LineCursor::default();
        self.canvas()?.set_font(BuiltinFont::Helvetica, 12.0);

        for line in lines {
            let y = cursor.y();
            self.canvas()?.draw_string(geometry::BODY_MARGIN_X, y, line);
            if cursor.advance() {
                self.new_page();
                self.draw_header(logo, subject)?;
                self.canvas()?.set_font(BuiltinFont::Helvetica, 12.0);
            }
        }
        Ok(())
    }

    /// Attribution line, QR stamp and its caption
    pub fn draw_footer(&mut self) -> RendererResult<()> {
        let qr_image = generate_qr_image(
            &self.config.verification_url,
            self.config.qr_module_pixels,
            self.config.qr_quiet_zone,
        )?;
        let qr = self.images_registry.get_or_create_from_image(
            &mut self.pdf,
            &mut self.refs,
            QR_KEY,
            &qr_image,
        )?;
        self.images_registry.mark_used(&qr);

        let footer_text = self.config.footer_text.clone();
        let caption = self.config.qr_caption.clone();
        let canvas = self.canvas()?;
        canvas.set_fill_color(Color::black());
        canvas.set_font(BuiltinFont::HelveticaOblique, 10.0);
        canvas.draw_centred_string(PAGE_WIDTH / 2.0, geometry::FOOTER_Y, &footer_text);

        canvas.draw_image(qr.resource_name(), geometry::qr_rect());
        canvas.set_font(BuiltinFont::Helvetica, 8.0);
        canvas.draw_centred_string(geometry::QR_CAPTION_X, geometry::QR_CAPTION_Y, &caption);
        Ok(())
    }

    /// Three boxes; a supplied image fills its box, outline and label always drawn
    pub fn draw_signatures(&mut self, request: &RenderRequest) -> RendererResult<()> {
        for slot in SignatureSlot::ALL {
            let rect = geometry::signature_box(slot);
            let image = match request.signature(slot) {
                Some(bytes) => {
                    let key = format!("signature:{}", slot.key());
                    let handle = self.register_image_bytes(&key, bytes)?;
                    self.images_registry.mark_used(&handle);
                    Some(handle)
                }
                None => None,
            };

            let canvas = self.canvas()?;
            canvas.set_line_width(1.0);
            canvas.rect(rect, false, true);
            if let Some(handle) = &image {
                canvas.draw_image(handle.resource_name(), rect);
            }
            canvas.set_font(BuiltinFont::Helvetica, 10.0);
            canvas.draw_centred_string(
                rect.center_x(),
                rect.y - geometry::SIGNATURE_LABEL_OFFSET,
                slot.label(),
            );
        }
        Ok(())
    }

    /// Finalize the last page, write the page tree and return the PDF bytes
    pub fn save(mut self) -> RendererResult<Vec<u8>> {
        self.finish_page();
        if self.pages.is_empty() {
            return Err(RendererError::PdfError("document has no pages".to_string()));
        }

        let page_count = self.pages.len() as i32;
        self.pdf
            .pages(self.page_tree_id)
            .kids(self.pages.iter().copied())
            .count(page_count);

        let pdf_bytes = self.pdf.finish();
        info!(
            "PDF generated: {} pages, {} bytes ({:.2} MB)",
            page_count,
            pdf_bytes.len(),
            pdf_bytes.len() as f64 / 1_048_576.0
        );
        Ok(pdf_bytes)
    }
}
