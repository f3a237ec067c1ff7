//! Helpers for inspecting generated PDFs

#![allow(dead_code)]

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object};

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([20, 40, 200, 255])));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

/// Decoded operations of every page, in page order
pub fn page_operations(pdf: &[u8]) -> Vec<Vec<Operation>> {
    let doc = Document::load_mem(pdf).unwrap();
    doc.get_pages()
        .values()
        .map(|page_id| {
            let data = doc.get_page_content(*page_id).unwrap();
            Content::decode(&data).unwrap().operations
        })
        .collect()
}

pub fn number(obj: &Object) -> f64 {
    match obj {
        Object::Integer(i) => *i as f64,
        Object::Real(r) => *r as f64,
        other => panic!("not a number: {:?}", other),
    }
}

pub fn count_op(ops: &[Operation], operator: &str) -> usize {
    ops.iter().filter(|op| op.operator == operator).count()
}

/// (font resource, size, text) for every `Tj`
pub fn shown_text(ops: &[Operation]) -> Vec<(String, f64, String)> {
    let mut font = String::new();
    let mut size = 0.0;
    let mut shown = Vec::new();
    for op in ops {
        match op.operator.as_str() {
            "Tf" => {
                if let Object::Name(name) = &op.operands[0] {
                    font = String::from_utf8_lossy(name).into_owned();
                }
                size = number(&op.operands[1]);
            }
            "Tj" => {
                if let Object::String(bytes, _) = &op.operands[0] {
                    shown.push((font.clone(), size, String::from_utf8_lossy(bytes).into_owned()));
                }
            }
            _ => {}
        }
    }
    shown
}

/// Body lines are the only text set in Helvetica 12
pub fn body_lines(ops: &[Operation]) -> Vec<String> {
    shown_text(ops)
        .into_iter()
        .filter(|(font, size, _)| font == "F1" && *size == 12.0)
        .map(|(_, _, text)| text)
        .collect()
}

/// Operations up to and including the rule under the subject
pub fn header_operations(ops: &[Operation]) -> Vec<String> {
    let mut strokes = 0;
    let mut header = Vec::new();
    for op in ops {
        header.push(format!("{:?}", op));
        if op.operator == "S" {
            strokes += 1;
            if strokes == 2 {
                break;
            }
        }
    }
    header
}
