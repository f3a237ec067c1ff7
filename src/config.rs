//! Renderer configuration
//!
//! Text constants and asset locations the renderer draws with. Geometry is
//! fixed (see `geometry`); everything here can be overridden from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::RendererResult;

pub const DEFAULT_BRANDING: &str = "Made By Tech 99";
pub const DEFAULT_FOOTER: &str = "\u{a9} Made By Tech 99 | Official Document";
pub const DEFAULT_VERIFICATION_URL: &str = "https://your-verification-page.com/verify?docid=12345";
pub const DEFAULT_QR_CAPTION: &str = "Scan to Verify";
pub const DEFAULT_LOGO_PATH: &str = "assets/default_logo.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Line printed under the logo on every page
    pub branding: String,
    pub footer_text: String,
    /// Encoded into the QR stamp. Placeholder, not tied to any backend.
    pub verification_url: String,
    pub qr_caption: String,
    /// Logo used when the request carries none. Missing file means no logo.
    pub default_logo_path: Option<PathBuf>,
    /// Raster size of one QR module in pixels
    pub qr_module_pixels: u32,
    /// Surround the QR code with the standard four-module quiet zone
    pub qr_quiet_zone: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            branding: DEFAULT_BRANDING.to_string(),
            footer_text: DEFAULT_FOOTER.to_string(),
            verification_url: DEFAULT_VERIFICATION_URL.to_string(),
            qr_caption: DEFAULT_QR_CAPTION.to_string(),
            default_logo_path: Some(PathBuf::from(DEFAULT_LOGO_PATH)),
            qr_module_pixels: 10,
            qr_quiet_zone: true,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> RendererResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> RendererResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Same settings without any bundled logo lookup
    pub fn without_default_logo(mut self) -> Self {
        self.default_logo_path = None;
        self
    }
}
