use super::*;

fn chunk_types(png: &[u8]) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 8;
    while pos + 8 <= png.len() {
        let len = u32::from_be_bytes([png[pos], png[pos + 1], png[pos + 2], png[pos + 3]]) as usize;
        out.push(String::from_utf8_lossy(&png[pos + 4..pos + 8]).into_owned());
        pos += 12 + len;
    }
    out
}

fn sample_raster() -> Raster {
    let pixels = (0..16u32)
        .map(|i| {
            let v = i as f32 / 15.0;
            [v, 1.0 - v, 0.25, 1.0]
        })
        .collect();
    Raster::new(4, 4, pixels).unwrap()
}

#[test]
fn quantize_rounds_and_clamps() {
    assert_eq!(quantize_channel(0.0), 0);
    assert_eq!(quantize_channel(1.0), 255);
    assert_eq!(quantize_channel(0.5), 128);
    assert_eq!(quantize_channel(100.0 / 255.0), 100);
    assert_eq!(quantize_channel(-0.5), 0);
    assert_eq!(quantize_channel(1.5), 255);
    assert_eq!(quantize_channel(f32::NAN), 0);
}

#[test]
fn encoded_pixels_decode_back_exactly_in_8_bit() {
    let raster = Raster::new(
        2,
        1,
        vec![[200.0 / 255.0, 100.0 / 255.0, 0.0, 1.0], [0.0, 0.0, 1.0, 0.5]],
    )
    .unwrap();
    let png = encode_png(&raster).unwrap();
    let back = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(back.as_raw().as_slice(), &[200, 100, 0, 255, 0, 0, 255, 128]);
}

#[test]
fn encoding_is_deterministic() {
    let raster = sample_raster();
    assert_eq!(encode_png(&raster).unwrap(), encode_png(&raster).unwrap());
}

#[test]
fn output_carries_no_metadata_chunks() {
    let png = encode_png(&sample_raster()).unwrap();
    let types = chunk_types(&png);
    assert_eq!(types.first().map(String::as_str), Some("IHDR"));
    assert_eq!(types.last().map(String::as_str), Some("IEND"));
    assert!(
        types
            .iter()
            .all(|t| matches!(t.as_str(), "IHDR" | "IDAT" | "IEND")),
        "{types:?}"
    );
}

#[test]
fn write_into_missing_directory_is_a_save_error() {
    let path = Path::new("target/encode_unit/no/such/dir/out.png");
    let err = write_png(&sample_raster(), path).unwrap_err();
    assert!(matches!(err, ColorizeError::Save { .. }));
    assert!(err.to_string().contains("out.png"));
}
