use std::io::Cursor;

use image::{DynamicImage, ImageBuffer, ImageFormat, Luma, LumaA, Rgb, Rgba};

use super::*;

fn png_bytes(img: DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

fn approx(a: [f32; 4], b: [f32; 4]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-6)
}

#[test]
fn rgba8_is_scaled_to_unit_range() {
    let img = ImageBuffer::from_pixel(2, 1, Rgba([200u8, 100, 50, 128]));
    let decoded = decode_png(&png_bytes(DynamicImage::ImageRgba8(img))).unwrap();

    assert_eq!(decoded.raster.width(), 2);
    assert_eq!(decoded.raster.height(), 1);
    assert_eq!(decoded.source_space, SourceSpace::Srgb);
    assert!(decoded.source_had_alpha);
    assert!(decoded.icc_profile.is_none());
    assert!(approx(
        decoded.raster.pixel(1, 0).unwrap(),
        [200.0 / 255.0, 100.0 / 255.0, 50.0 / 255.0, 128.0 / 255.0]
    ));
}

#[test]
fn rgb8_gets_opaque_alpha() {
    let img = ImageBuffer::from_pixel(1, 1, Rgb([10u8, 20, 30]));
    let decoded = decode_png(&png_bytes(DynamicImage::ImageRgb8(img))).unwrap();

    assert!(!decoded.source_had_alpha);
    assert!(approx(
        decoded.raster.pixel(0, 0).unwrap(),
        [10.0 / 255.0, 20.0 / 255.0, 30.0 / 255.0, 1.0]
    ));
}

#[test]
fn gray_is_replicated_into_rgb() {
    let img = ImageBuffer::from_pixel(1, 1, Luma([51u8]));
    let decoded = decode_png(&png_bytes(DynamicImage::ImageLuma8(img))).unwrap();

    assert_eq!(decoded.source_space, SourceSpace::Gray);
    assert!(!decoded.source_had_alpha);
    let g = 51.0 / 255.0;
    assert!(approx(decoded.raster.pixel(0, 0).unwrap(), [g, g, g, 1.0]));
}

#[test]
fn gray_alpha_keeps_its_alpha() {
    let img = ImageBuffer::from_pixel(1, 1, LumaA([255u8, 0]));
    let decoded = decode_png(&png_bytes(DynamicImage::ImageLumaA8(img))).unwrap();

    assert_eq!(decoded.source_space, SourceSpace::Gray);
    assert!(decoded.source_had_alpha);
    assert!(approx(
        decoded.raster.pixel(0, 0).unwrap(),
        [1.0, 1.0, 1.0, 0.0]
    ));
}

#[test]
fn sixteen_bit_is_normalized() {
    let img = ImageBuffer::from_pixel(1, 1, Rgba([65535u16, 0, 65535, 65535]));
    let decoded = decode_png(&png_bytes(DynamicImage::ImageRgba16(img))).unwrap();
    assert!(approx(
        decoded.raster.pixel(0, 0).unwrap(),
        [1.0, 0.0, 1.0, 1.0]
    ));
}

#[test]
fn non_png_bytes_fail() {
    assert!(decode_png(b"definitely not a png").is_err());
    assert!(decode_png(&[]).is_err());
}

#[test]
fn read_png_missing_file_names_the_path() {
    let path = Path::new("target/decode_unit/does_not_exist.png");
    let err = read_png(path).unwrap_err();
    match &err {
        ColorizeError::Load { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected load error, got {other:?}"),
    }
    assert!(err.to_string().contains("does_not_exist.png"));
}

#[test]
fn read_png_truncated_file_is_a_load_error() {
    let dir = Path::new("target").join("decode_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("truncated.png");

    let img = ImageBuffer::from_pixel(8, 8, Rgba([1u8, 2, 3, 4]));
    let bytes = png_bytes(DynamicImage::ImageRgba8(img));
    std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    assert!(matches!(read_png(&path), Err(ColorizeError::Load { .. })));
}
