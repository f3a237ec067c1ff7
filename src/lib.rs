//! Legal document generator
//!
//! Turns legal-form field values into a watermarked, QR-stamped PDF with a
//! three-slot signature block. `documents` validates the form and assembles
//! the body text; `renderer` lays the PDF out with pdf-writer.

mod canvas;
pub mod config;
pub mod documents;
pub mod error;
mod font_registry;
pub mod geometry;
mod image_registry;
mod image_utils;
mod qr;
pub mod renderer;
pub mod session;
pub mod text_layout;
pub mod types;
mod unicode_utils;
pub mod validation;

pub use config::RenderConfig;
pub use documents::{DocumentForm, DocumentType};
pub use error::{DocError, RendererError, RendererResult};
pub use renderer::{render, render_or_empty};
pub use session::FormSession;
pub use types::{RenderRequest, SignatureSlot, DEFAULT_WATERMARK};
pub use validation::{validate_date, validate_number, ValidationError, ValidationErrors};
