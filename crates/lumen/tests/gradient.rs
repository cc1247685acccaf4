use std::{fs, path::PathBuf};

use lumen::{
    framebuffer::color_to_rgb8,
    linalg::{vec3, Vec3f},
    ppm, render,
    resolution::Resolution,
};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lumen-test-{}-{}", std::process::id(), name))
}

/// Splits a `P6` file into its (width, height, max value) header and the pixel bytes.
fn parse(data: &[u8]) -> ((u32, u32, u32), &[u8]) {
    let mut fields = Vec::new();
    let mut pos = 0;
    while fields.len() < 4 {
        let start = pos;
        while !data[pos].is_ascii_whitespace() {
            pos += 1;
        }
        fields.push(std::str::from_utf8(&data[start..pos]).unwrap().to_string());
        pos += 1; // exactly one separator
    }
    assert_eq!(fields[0], "P6");
    let num = |i: usize| fields[i].parse::<u32>().unwrap();
    ((num(1), num(2), num(3)), &data[pos..])
}

#[test]
fn gradient_file() {
    let (w, h) = (64, 48);
    let path = temp_path("gradient.ppm");
    let fb = render::gradient(Resolution::new(w, h));
    ppm::save(&path, &fb).unwrap();

    let data = fs::read(&path).unwrap();
    fs::remove_file(&path).ok();

    let (header, pixels) = parse(&data);
    assert_eq!(header, (w, h, 255));
    assert_eq!(pixels.len(), (w * h * 3) as usize);

    let pixel = |i: u32, j: u32| {
        let at = ((i + j * w) * 3) as usize;
        [pixels[at], pixels[at + 1], pixels[at + 2]]
    };
    assert_eq!(pixel(0, 0), [0, 0, 0]);
    // (47/48 * 255, 63/64 * 255, 0), truncated
    assert_eq!(pixel(w - 1, h - 1), [249, 251, 0]);
    // red follows the row, green the column
    assert_eq!(pixel(w - 1, 0), [0, 251, 0]);
    assert_eq!(pixel(0, h - 1), [249, 0, 0]);
    assert_eq!(pixel(32, 24), [127, 127, 0]);
}

#[test]
fn bottom_right_approaches_254() {
    let (w, h) = (1280, 720);
    let fb = render::gradient(Resolution::new(w, h));
    assert_eq!(color_to_rgb8(fb.get(w - 1, h - 1)), vec3(254, 254, 0));

    let mut out = Vec::new();
    ppm::write(&mut out, &fb).unwrap();
    let (header, pixels) = parse(&out);
    assert_eq!(header, (w, h, 255));
    assert_eq!(pixels.len(), 1280 * 720 * 3);
    assert_eq!(&pixels[pixels.len() - 3..], &[254, 254, 0]);
}

#[test]
fn overwrites_existing_file() {
    let path = temp_path("overwrite.ppm");
    fs::write(&path, vec![0xaa; 4096]).unwrap();

    let fb = render::gradient(Resolution::new(2, 2));
    ppm::save(&path, &fb).unwrap();
    let data = fs::read(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(data.len(), "P6 2 2 255 ".len() + 2 * 2 * 3);
}

#[test]
fn half_intensity_truncates() {
    let c: Vec3f = vec3(0.5, 0.25, 0.0);
    assert_eq!(color_to_rgb8(c), vec3(127, 63, 0));
}
