#![allow(dead_code)]

use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};
use std::io::Read;
use std::path::Path;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Gray PNG with a horizontal ramp, so the file is not constant.
pub fn write_png(path: &Path, width: u32, height: u32) {
    GrayImage::from_fn(width, height, |x, _| Luma([(x % 256) as u8]))
        .save(path)
        .unwrap();
}

pub fn write_rgb_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 7]))
        .save(path)
        .unwrap();
}

/// Single-channel 16-bit TIFF, one row.
pub fn write_tiff_u16(path: &Path, samples: Vec<u16>) {
    let width = samples.len() as u32;
    let buf: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_raw(width, 1, samples).unwrap();
    buf.save(path).unwrap();
}

/// Three-channel 16-bit TIFF, one row, from interleaved samples.
pub fn write_tiff_rgb16(path: &Path, interleaved: Vec<u16>) {
    let width = (interleaved.len() / 3) as u32;
    let buf: ImageBuffer<Rgb<u16>, Vec<u16>> =
        ImageBuffer::from_raw(width, 1, interleaved).unwrap();
    buf.save(path).unwrap();
}

/// Single-channel 32-bit float TIFF, one row.
pub fn write_tiff_f32(path: &Path, samples: &[f32]) {
    use tiff::encoder::{TiffEncoder, colortype};
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = TiffEncoder::new(file).unwrap();
    encoder
        .write_image::<colortype::Gray32Float>(samples.len() as u32, 1, samples)
        .unwrap();
}

pub fn zip_entry_names(pptx: &Path) -> Vec<String> {
    let file = std::fs::File::open(pptx).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    archive.file_names().map(str::to_string).collect()
}

pub fn read_zip_entry(pptx: &Path, name: &str) -> String {
    let file = std::fs::File::open(pptx).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut text = String::new();
    entry.read_to_string(&mut text).unwrap();
    text
}

/// Parse the whole document, panicking on malformed XML.
pub fn assert_well_formed(xml: &str) {
    let mut reader = quick_xml::Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(quick_xml::events::Event::Eof) => break,
            Ok(_) => {},
            Err(e) => panic!("malformed XML at {}: {e}", reader.buffer_position()),
        }
    }
}
