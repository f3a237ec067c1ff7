//! Type definitions for PDF rendering

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use pdf_writer::Ref;

use crate::error::RendererError;

/// Watermark used when the caller does not supply one
pub const DEFAULT_WATERMARK: &str = "Verified Legal Document";

/// Rectangle with position and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Color representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn gray(level: f64) -> Self {
        Self { r: level, g: level, b: level }
    }

    pub fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0 }
    }
}

/// Sequential object id allocator shared by the registries
#[derive(Debug)]
pub struct RefAllocator {
    next_ref_id: i32,
}

impl RefAllocator {
    pub fn new(start_ref: i32) -> Self {
        Self { next_ref_id: start_ref }
    }

    pub fn next_ref(&mut self) -> Ref {
        let r = Ref::new(self.next_ref_id);
        self.next_ref_id += 1;
        r
    }
}

/// One of the three fixed signature positions on the last page.
///
/// Ordering follows the drawing order left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SignatureSlot {
    #[serde(rename = "Party 1")]
    Party1,
    #[serde(rename = "Party 2")]
    Party2,
    #[serde(rename = "Guarantor")]
    Guarantor,
}

impl SignatureSlot {
    pub const ALL: [SignatureSlot; 3] = [
        SignatureSlot::Party1,
        SignatureSlot::Party2,
        SignatureSlot::Guarantor,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SignatureSlot::Party1 => "Party 1",
            SignatureSlot::Party2 => "Party 2",
            SignatureSlot::Guarantor => "Guarantor",
        }
    }

    /// Caption printed under the signature box
    pub fn label(&self) -> &'static str {
        match self {
            SignatureSlot::Party1 => "Signature 1",
            SignatureSlot::Party2 => "Signature 2",
            SignatureSlot::Guarantor => "Signature 3",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SignatureSlot::Party1 => 0,
            SignatureSlot::Party2 => 1,
            SignatureSlot::Guarantor => 2,
        }
    }
}

impl fmt::Display for SignatureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SignatureSlot {
    type Err = RendererError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignatureSlot::ALL
            .into_iter()
            .find(|slot| slot.key() == s)
            .ok_or_else(|| RendererError::InvalidRequest(format!("unknown signature slot: {}", s)))
    }
}

/// Everything needed to produce one PDF. Built per submission, consumed once.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub body: String,
    pub subject: String,
    pub logo: Option<Vec<u8>>,
    pub watermark: String,
    pub signatures: BTreeMap<SignatureSlot, Option<Vec<u8>>>,
}

impl RenderRequest {
    pub fn new(body: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            subject: subject.into(),
            logo: None,
            watermark: DEFAULT_WATERMARK.to_string(),
            signatures: BTreeMap::new(),
        }
    }

    pub fn with_logo(mut self, logo: Vec<u8>) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn with_watermark(mut self, watermark: impl Into<String>) -> Self {
        self.watermark = watermark.into();
        self
    }

    pub fn with_signature(mut self, slot: SignatureSlot, image: Option<Vec<u8>>) -> Self {
        self.signatures.insert(slot, image);
        self
    }

    /// Image bytes for a slot; absent and empty uploads both count as "no image"
    pub fn signature(&self, slot: SignatureSlot) -> Option<&[u8]> {
        self.signatures
            .get(&slot)
            .and_then(|image| image.as_deref())
            .filter(|bytes| !bytes.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_keys_round_trip() {
        for slot in SignatureSlot::ALL {
            assert_eq!(slot.key().parse::<SignatureSlot>().unwrap(), slot);
        }
        assert!("Witness".parse::<SignatureSlot>().is_err());
    }

    #[test]
    fn test_slot_labels_follow_order() {
        let labels: Vec<_> = SignatureSlot::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Signature 1", "Signature 2", "Signature 3"]);
    }

    #[test]
    fn test_empty_signature_is_absent() {
        let request = RenderRequest::new("body", "subject")
            .with_signature(SignatureSlot::Party1, Some(Vec::new()))
            .with_signature(SignatureSlot::Party2, None);
        assert!(request.signature(SignatureSlot::Party1).is_none());
        assert!(request.signature(SignatureSlot::Party2).is_none());
        assert!(request.signature(SignatureSlot::Guarantor).is_none());
        assert_eq!(request.watermark, DEFAULT_WATERMARK);
    }
}
