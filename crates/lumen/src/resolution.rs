//! Framebuffer resolutions.

use std::{fmt, str::FromStr};

/// Resolution (`width x height`) of a framebuffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// 1080p resolution: `1920x1080`
    pub const RES_1080P: Self = Self {
        width: 1920,
        height: 1080,
    };

    /// 720p resolution: `1280x720`
    pub const RES_720P: Self = Self {
        width: 1280,
        height: 720,
    };

    /// Creates a new [`Resolution`] of `width x height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the width of this [`Resolution`].
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of this [`Resolution`].
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn num_pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::RES_720P
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Parses `WIDTHxHEIGHT`, eg. `640x480`. Zero-sized resolutions are rejected.
impl FromStr for Resolution {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once('x')
            .ok_or_else(|| format!("invalid resolution '{s}' (expected WIDTHxHEIGHT)"))?;
        let width: u32 = width
            .trim()
            .parse()
            .map_err(|e| format!("invalid width in resolution '{s}': {e}"))?;
        let height: u32 = height
            .trim()
            .parse()
            .map_err(|e| format!("invalid height in resolution '{s}': {e}"))?;
        if width == 0 || height == 0 {
            return Err(format!("resolution '{s}' has no pixels").into());
        }
        Ok(Self::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Resolution::RES_720P.to_string(), "1280x720");
        assert_eq!(format!("{:?}", Resolution::new(3, 2)), "3x2");
        assert_eq!(Resolution::default(), Resolution::RES_720P);
    }

    #[test]
    fn num_pixels() {
        assert_eq!(Resolution::RES_1080P.num_pixels(), 1920 * 1080);
        assert_eq!(
            Resolution::new(u32::MAX, 2).num_pixels(),
            u64::from(u32::MAX) * 2
        );
    }

    #[test]
    fn parse() {
        assert_eq!("640x480".parse::<Resolution>().unwrap(), Resolution::new(640, 480));
        assert_eq!(" 4 x 3 ".parse::<Resolution>().unwrap(), Resolution::new(4, 3));
        assert_eq!(
            Resolution::RES_1080P.to_string().parse::<Resolution>().unwrap(),
            Resolution::RES_1080P
        );
    }

    #[test]
    fn parse_errors() {
        for bad in ["", "640", "640x", "x480", "-1x2", "axb", "0x10", "10x0", "1x2x3"] {
            assert!(bad.parse::<Resolution>().is_err(), "'{bad}' should not parse");
        }
    }
}
