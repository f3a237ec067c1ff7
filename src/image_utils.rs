//! Image utilities for PDF rendering

use std::io::{Cursor, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::io::Reader as ImageReader;
use image::DynamicImage;
use log::debug;
use pdf_writer::{Filter, Pdf, Ref};

use crate::error::{RendererError, RendererResult};
use crate::types::RefAllocator;

/// Pixel data split the way PDF wants it: color samples plus an optional
/// separate alpha channel for the soft mask
pub struct ImageSamples {
    pub width: u32,
    pub height: u32,
    pub gray: bool,
    pub color: Vec<u8>,
    pub alpha: Option<Vec<u8>>,
}

/// Decode PNG/JPEG (or any format the image crate can sniff) from memory
pub fn load_image_from_bytes(data: &[u8]) -> RendererResult<DynamicImage> {
    if data.is_empty() {
        return Err(RendererError::ImageError("empty image data".to_string()));
    }
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| {
            RendererError::ImageError(format!("Failed to detect image format from stream: {}", e))
        })?;
    let format = reader.format();
    let img = reader
        .decode()
        .map_err(|e| RendererError::ImageError(format!("Failed to decode image: {}", e)))?;
    debug!(
        "decoded {:?} image {}x{} ({} bytes)",
        format,
        img.width(),
        img.height(),
        data.len()
    );
    Ok(img)
}

/// Split an image into color samples and alpha
pub fn split_samples(image: &DynamicImage) -> ImageSamples {
    let (width, height) = (image.width(), image.height());
    if image.color().has_alpha() {
        let rgba = image.to_rgba8().into_raw();
        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        let mut alpha = Vec::with_capacity((width * height) as usize);
        for chunk in rgba.chunks_exact(4) {
            rgb.extend_from_slice(&chunk[..3]);
            alpha.push(chunk[3]);
        }
        return ImageSamples {
            width,
            height,
            gray: false,
            color: rgb,
            alpha: Some(alpha),
        };
    }

    match image {
        DynamicImage::ImageLuma8(luma) => ImageSamples {
            width,
            height,
            gray: true,
            color: luma.as_raw().clone(),
            alpha: None,
        },
        _ => ImageSamples {
            width,
            height,
            gray: false,
            color: image.to_rgb8().into_raw(),
            alpha: None,
        },
    }
}

fn deflate(data: &[u8]) -> RendererResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Write an image XObject (and its SMask when the image has alpha)
pub fn add_image_to_pdf(
    pdf: &mut Pdf,
    image: &DynamicImage,
    image_id: Ref,
    refs: &mut RefAllocator,
) -> RendererResult<()> {
    let samples = split_samples(image);
    if samples.width == 0 || samples.height == 0 {
        return Err(RendererError::ImageError("image has no pixels".to_string()));
    }

    // SMask first so the image can reference it
    let smask_id = match &samples.alpha {
        Some(alpha) => {
            let smask_id = refs.next_ref();
            let compressed = deflate(alpha)?;
            let mut smask = pdf.image_xobject(smask_id, &compressed);
            smask.filter(Filter::FlateDecode);
            smask.width(samples.width as i32);
            smask.height(samples.height as i32);
            smask.color_space().device_gray();
            smask.bits_per_component(8);
            Some(smask_id)
        }
        None => None,
    };

    let compressed = deflate(&samples.color)?;
    let mut xobject = pdf.image_xobject(image_id, &compressed);
    xobject.filter(Filter::FlateDecode);
    xobject.width(samples.width as i32);
    xobject.height(samples.height as i32);
    if samples.gray {
        xobject.color_space().device_gray();
    } else {
        xobject.color_space().device_rgb();
    }
    xobject.bits_per_component(8);
    if let Some(smask_id) = smask_id {
        xobject.s_mask(smask_id);
    }

    debug!(
        "image XObject {} written: {}x{}, {} compressed bytes, smask={}",
        image_id.get(),
        samples.width,
        samples.height,
        compressed.len(),
        smask_id.is_some()
    );
    Ok(())
}
