//! An in-memory image of floating-point colors.

use lumen_linalg::{Vec3, Vec3f, Vector};

use crate::resolution::Resolution;

/// A row-major buffer of linear RGB colors, one [`Vec3f`] per pixel.
///
/// Color channels are nominally in the range `[0.0, 1.0]`, but the buffer stores whatever it is
/// given. Out-of-range values are only clamped when converting to bytes (see [`color_to_rgb8`]).
#[derive(Clone)]
pub struct Framebuffer {
    res: Resolution,
    pixels: Vec<Vec3f>,
}

impl Framebuffer {
    /// Creates a black framebuffer of the given size.
    pub fn new(res: Resolution) -> Self {
        Self {
            res,
            pixels: vec![Vec3f::ZERO; res.num_pixels() as usize],
        }
    }

    /// Creates a framebuffer by invoking `color` with the `(x, y)` coordinates of every pixel.
    ///
    /// Pixels are visited row by row, starting at the top left.
    pub fn from_fn(res: Resolution, mut color: impl FnMut(u32, u32) -> Vec3f) -> Self {
        let mut pixels = Vec::with_capacity(res.num_pixels() as usize);
        for y in 0..res.height() {
            for x in 0..res.width() {
                pixels.push(color(x, y));
            }
        }
        Self { res, pixels }
    }

    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.res
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.res.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.res.height()
    }

    /// Returns all pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Vec3f] {
        &self.pixels
    }

    /// Returns the color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside of the framebuffer.
    #[track_caller]
    pub fn get(&self, x: u32, y: u32) -> Vec3f {
        self.pixels[self.index(x, y)]
    }

    /// Sets the color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside of the framebuffer.
    #[track_caller]
    pub fn set(&mut self, x: u32, y: u32, color: Vec3f) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Converts every pixel to 8-bit RGB using [`color_to_rgb8`].
    pub fn to_rgb8(&self) -> Vec<Vec3<u8>> {
        self.pixels.iter().copied().map(color_to_rgb8).collect()
    }

    #[track_caller]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width() && y < self.height(),
            "pixel ({x}, {y}) is out of bounds for {} framebuffer",
            self.res,
        );
        x as usize + y as usize * self.width() as usize
    }
}

/// Converts a color with channels in `[0.0, 1.0]` to 8-bit channels.
///
/// Each channel is clamped to `[0.0, 1.0]`, multiplied by 255 and then truncated (not rounded),
/// so `0.5` becomes `127`. `NaN` channels become `0`.
pub fn color_to_rgb8(color: Vec3f) -> Vec3<u8> {
    let clamped = color.clamp(Vector::ZERO, Vector::splat(1.0));
    (clamped * 255.0).cast()
}

#[cfg(test)]
mod tests {
    use lumen_linalg::vec3;

    use super::*;

    #[test]
    fn new_is_black() {
        let fb = Framebuffer::new(Resolution::new(4, 3));
        assert_eq!(fb.pixels().len(), 12);
        assert!(fb.pixels().iter().all(|p| *p == Vec3f::ZERO));
    }

    #[test]
    fn sized_from_resolution() {
        let res = Resolution::new(5, 7);
        let fb = Framebuffer::from_fn(res, |_, _| Vec3f::ZERO);
        assert_eq!(fb.resolution(), res);
        assert_eq!(fb.pixels().len() as u64, res.num_pixels());
        assert_eq!(Framebuffer::new(res).pixels().len(), fb.pixels().len());
    }

    #[test]
    fn from_fn_is_row_major() {
        let fb = Framebuffer::from_fn(Resolution::new(3, 2), |x, y| {
            vec3(x as f32, y as f32, 0.0)
        });
        assert_eq!(fb.pixels()[1], vec3(1.0, 0.0, 0.0));
        assert_eq!(fb.pixels()[3], vec3(0.0, 1.0, 0.0));
        assert_eq!(fb.get(2, 1), vec3(2.0, 1.0, 0.0));
    }

    #[test]
    fn set_get() {
        let mut fb = Framebuffer::new(Resolution::new(2, 2));
        fb.set(1, 0, vec3(0.1, 0.2, 0.3));
        assert_eq!(fb.get(1, 0), vec3(0.1, 0.2, 0.3));
        assert_eq!(fb.pixels()[1], vec3(0.1, 0.2, 0.3));
        assert_eq!(fb.get(0, 1), Vec3f::ZERO);
    }

    #[test]
    #[should_panic(expected = "pixel (2, 0) is out of bounds for 2x2 framebuffer")]
    fn get_out_of_bounds() {
        Framebuffer::new(Resolution::new(2, 2)).get(2, 0);
    }

    #[test]
    fn rgb8() {
        assert_eq!(color_to_rgb8(vec3(0.5, 0.25, 0.0)), vec3(127, 63, 0));
        assert_eq!(color_to_rgb8(vec3(1.0, 2.0, -3.0)), vec3(255, 255, 0));
        assert_eq!(color_to_rgb8(vec3(f32::NAN, 0.999, 0.002)), vec3(0, 254, 0));
    }
}
