//! QR verification stamp
//!
//! Encodes the verification URL and rasterises it into a grayscale image
//! that is embedded like any other picture.

use image::{DynamicImage, Luma};
use log::debug;
use qrcode::QrCode;

use crate::error::{RendererError, RendererResult};

/// Quiet zone the qrcode renderer adds on each side, in modules
const QUIET_ZONE_MODULES: u32 = 4;

/// Largest raster side accepted, in pixels
pub const MAX_QR_SIDE: u32 = 4096;

/// Generate a QR image with `module_pixels` pixels per module, optionally
/// surrounded by the standard quiet zone
pub fn generate_qr_image(
    data: &str,
    module_pixels: u32,
    quiet_zone: bool,
) -> RendererResult<DynamicImage> {
    if module_pixels == 0 {
        return Err(RendererError::QrError(
            "module size must be at least one pixel".to_string(),
        ));
    }

    let code = QrCode::new(data.as_bytes()).map_err(|e| RendererError::QrError(e.to_string()))?;
    let modules = code.width() as u32;
    let border = if quiet_zone { 2 * QUIET_ZONE_MODULES } else { 0 };

    let side = (modules + border)
        .checked_mul(module_pixels)
        .filter(|side| *side <= MAX_QR_SIDE)
        .ok_or_else(|| {
            RendererError::QrError(format!(
                "{} modules at {} px each exceed the {} px raster limit",
                modules + border,
                module_pixels,
                MAX_QR_SIDE
            ))
        })?;

    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(quiet_zone)
        .module_dimensions(module_pixels, module_pixels)
        .build();

    debug!(
        "QR code generated: {} modules, {}x{} pixels",
        modules, side, side
    );
    Ok(DynamicImage::ImageLuma8(image))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DARK: Luma<u8> = Luma([0]);
    const LIGHT: Luma<u8> = Luma([255]);

    #[test]
    fn test_size_includes_quiet_zone() {
        let url = "https://your-verification-page.com/verify?docid=12345";
        let code = QrCode::new(url.as_bytes()).unwrap();
        let img = generate_qr_image(url, 10, true).unwrap();
        let expected = (code.width() as u32 + 8) * 10;
        assert_eq!(img.width(), expected);
        assert_eq!(img.height(), expected);
    }

    #[test]
    fn test_no_quiet_zone() {
        let code = QrCode::new(b"hello").unwrap();
        let img = generate_qr_image("hello", 3, false).unwrap();
        assert_eq!(img.width(), code.width() as u32 * 3);
        assert_eq!(img.to_luma8().get_pixel(0, 0), &DARK);
    }

    #[test]
    fn test_quiet_zone_is_light_and_finder_is_dark() {
        let img = generate_qr_image("hello", 2, true).unwrap().to_luma8();
        assert_eq!(img.get_pixel(0, 0), &LIGHT);
        // top-left finder pattern starts right after the quiet zone
        assert_eq!(img.get_pixel(8, 8), &DARK);
    }

    #[test]
    fn test_zero_module_size_rejected() {
        assert!(matches!(
            generate_qr_image("x", 0, true),
            Err(RendererError::QrError(_))
        ));
    }

    #[test]
    fn test_huge_module_size_rejected_before_allocation() {
        assert!(matches!(
            generate_qr_image("x", 200_000_000, true),
            Err(RendererError::QrError(_))
        ));
        assert!(matches!(
            generate_qr_image("x", u32::MAX, false),
            Err(RendererError::QrError(_))
        ));
    }

    #[test]
    fn test_side_at_limit_is_accepted() {
        let code = QrCode::new(b"x").unwrap();
        let modules = code.width() as u32 + 8;
        let px = MAX_QR_SIDE / modules;
        let img = generate_qr_image("x", px, true).unwrap();
        assert!(img.width() <= MAX_QR_SIDE);
        assert!(generate_qr_image("x", px + 1, true).is_err());
    }

    #[test]
    fn test_oversized_payload_is_qr_error() {
        let data = "x".repeat(8000);
        assert!(matches!(
            generate_qr_image(&data, 1, false),
            Err(RendererError::QrError(_))
        ));
    }
}
