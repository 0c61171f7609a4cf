use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use super::*;

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "avagen_decode_{tag}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn decode_layer_premultiplies_png() {
    let dir = scratch_dir("premul");
    let path = dir.join("layer.png");

    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50, 200, 128]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    fs::write(&path, &buf).unwrap();

    let layer = decode_layer(&path).unwrap();
    assert_eq!(layer.width, 1);
    assert_eq!(layer.height, 1);
    assert_eq!(
        layer.rgba8_premul,
        vec![
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128,
        ]
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn decode_layer_missing_file_errors() {
    let path = std::env::temp_dir().join(format!(
        "avagen_decode_missing_{}.png",
        std::process::id()
    ));
    assert!(decode_layer(&path).is_err());
}

#[test]
fn decode_layer_garbage_bytes_error() {
    let dir = scratch_dir("garbage");
    let path = dir.join("layer.png");
    fs::write(&path, b"not a png").unwrap();

    assert!(decode_layer(&path).is_err());

    fs::remove_dir_all(&dir).ok();
}
