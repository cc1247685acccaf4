//! Per-pixel color computations.

use lumen_linalg::vec3;

use crate::{framebuffer::Framebuffer, resolution::Resolution};

/// Renders a two-axis gradient.
///
/// The red channel grows from top to bottom and the green channel from left to right: the pixel
/// in column `i` and row `j` gets the color `(j / height, i / width, 0)`. The top left pixel is
/// black, and the bottom right one approaches yellow without quite reaching it.
pub fn gradient(res: Resolution) -> Framebuffer {
    log::debug!("rendering {} gradient", res);

    let (width, height) = (res.width() as f32, res.height() as f32);
    Framebuffer::from_fn(res, |i, j| vec3(j as f32 / height, i as f32 / width, 0.0))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use lumen_linalg::{Vec3f, Vector};

    use super::*;

    #[test]
    fn corners() {
        let fb = gradient(Resolution::new(4, 2));
        assert_eq!(fb.get(0, 0), Vec3f::ZERO);
        assert_eq!(fb.get(3, 0), vec3(0.0, 0.75, 0.0));
        assert_eq!(fb.get(0, 1), vec3(0.5, 0.0, 0.0));
        assert_eq!(fb.get(3, 1), vec3(0.5, 0.75, 0.0));
    }

    #[test]
    fn channels_stay_below_one() {
        let res = Resolution::new(7, 5);
        let fb = gradient(res);
        let max = fb
            .pixels()
            .iter()
            .fold(Vec3f::ZERO, |acc, p| acc.max(*p));
        assert_relative_eq!(max, vec3(4.0 / 5.0, 6.0 / 7.0, 0.0));
        assert!(fb.pixels().iter().all(|p| *p == p.clamp(Vector::ZERO, Vector::splat(1.0))));
    }
}
