//! Binary pixel map (`P6` PPM) output.
//!
//! The format is a short ASCII header `P6 <width> <height> 255` followed by a single whitespace
//! byte and `width * height` RGB triplets of one byte per channel, row by row from the top left.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::framebuffer::Framebuffer;

/// Maximum channel value declared in the header.
pub const MAX_VALUE: u8 = 255;

/// Returns the header for a `P6` image of the framebuffer's size, including the trailing
/// separator before the pixel data.
pub fn header(fb: &Framebuffer) -> String {
    format!("P6 {} {} {} ", fb.width(), fb.height(), MAX_VALUE)
}

/// Encodes `fb` as a `P6` image and writes it to `writer`.
///
/// Colors are converted to bytes with [`color_to_rgb8`][crate::framebuffer::color_to_rgb8].
pub fn write<W: Write>(mut writer: W, fb: &Framebuffer) -> io::Result<()> {
    writer.write_all(header(fb).as_bytes())?;
    let pixels = fb.to_rgb8();
    writer.write_all(bytemuck::cast_slice(&pixels))?;
    Ok(())
}

/// Saves `fb` to the file system as a `P6` image.
///
/// The file is created if it does not exist, and truncated if it does.
pub fn save<P: AsRef<Path>>(path: P, fb: &Framebuffer) -> io::Result<()> {
    save_impl(path.as_ref(), fb)
}

fn save_impl(path: &Path, fb: &Framebuffer) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer, fb)?;
    writer.flush()?;
    log::trace!("wrote {} pixels to {}", fb.pixels().len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use lumen_linalg::vec3;

    use crate::resolution::Resolution;

    use super::*;

    #[test]
    fn encode() {
        let mut fb = Framebuffer::new(Resolution::new(2, 1));
        fb.set(0, 0, vec3(1.0, 0.5, 0.0));
        fb.set(1, 0, vec3(0.0, 0.25, 2.0));

        let mut out = Vec::new();
        write(&mut out, &fb).unwrap();
        assert_eq!(out, b"P6 2 1 255 \xff\x7f\x00\x00\x3f\xff");
    }

    #[test]
    fn header_format() {
        let fb = Framebuffer::new(Resolution::RES_720P);
        assert_eq!(header(&fb), "P6 1280 720 255 ");
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let fb = Framebuffer::new(Resolution::new(1, 1));
        let path = std::env::temp_dir()
            .join("lumen-does-not-exist")
            .join("nested")
            .join("out.ppm");
        assert!(save(&path, &fb).is_err());
    }
}
