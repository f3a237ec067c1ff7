//! Image registry for managing image XObjects and page resources
//!
//! Each distinct image (logo, QR stamp, signatures) is written once and can
//! be painted on any number of pages. Resources are written in key order so
//! repeated renders produce identical bytes.

use std::collections::BTreeMap;

use image::DynamicImage;
use log::debug;
use pdf_writer::{Name, Pdf, Ref};

use crate::error::RendererResult;
use crate::image_utils::{add_image_to_pdf, load_image_from_bytes};
use crate::types::RefAllocator;

/// A written image XObject and the resource name pages refer to it by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    pub id: Ref,
    pub name: String,
}

impl ImageHandle {
    pub fn resource_name(&self) -> Name<'_> {
        Name(self.name.as_bytes())
    }
}

pub struct ImageRegistry {
    // unique key → written XObject
    images: BTreeMap<String, ImageHandle>,
    // resource name → object id, reset per page
    used_on_current_page: BTreeMap<String, Ref>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self {
            images: BTreeMap::new(),
            used_on_current_page: BTreeMap::new(),
        }
    }

    /// Get or create an Image XObject from encoded image bytes (PNG, JPEG, ...)
    pub fn get_or_create_from_bytes(
        &mut self,
        pdf: &mut Pdf,
        refs: &mut RefAllocator,
        key: &str,
        data: &[u8],
    ) -> RendererResult<ImageHandle> {
        if let Some(handle) = self.images.get(key) {
            return Ok(handle.clone());
        }
        let image = load_image_from_bytes(data)?;
        self.get_or_create_from_image(pdf, refs, key, &image)
    }

    /// Get or create an Image XObject from an already decoded image
    pub fn get_or_create_from_image(
        &mut self,
        pdf: &mut Pdf,
        refs: &mut RefAllocator,
        key: &str,
        image: &DynamicImage,
    ) -> RendererResult<ImageHandle> {
        if let Some(handle) = self.images.get(key) {
            return Ok(handle.clone());
        }

        let image_id = refs.next_ref();
        add_image_to_pdf(pdf, image, image_id, refs)?;
        let handle = ImageHandle {
            id: image_id,
            name: format!("Im{}", image_id.get()),
        };
        debug!("ImageRegistry: registered {} as {}", key, handle.name);
        self.images.insert(key.to_string(), handle.clone());
        Ok(handle)
    }

    /// Record that the current page paints this image
    pub fn mark_used(&mut self, handle: &ImageHandle) {
        self.used_on_current_page
            .insert(handle.name.clone(), handle.id);
    }

    pub fn used_on_current_page(&self) -> usize {
        self.used_on_current_page.len()
    }

    /// Write images used on the current page into its Resources and reset
    pub fn write_resources(&mut self, resources: &mut pdf_writer::writers::Resources<'_>) {
        if self.used_on_current_page.is_empty() {
            return;
        }
        {
            let mut dict = resources.x_objects();
            for (name, id) in &self.used_on_current_page {
                dict.pair(Name(name.as_bytes()), *id);
            }
        }
        self.used_on_current_page.clear();
    }
}

impl Default for ImageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
