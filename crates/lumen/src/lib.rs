//! Lumen: fills a framebuffer with one color per pixel and writes it out as a binary pixel map.
//!
//! All numeric work is done with the vectors from [`lumen_linalg`], which is re-exported as
//! [`linalg`].
//!
//! # Environment Variables
//!
//! The `lumen` binary can be configured with these environment variables:
//!
//! * `LUMEN_RESOLUTION`: Framebuffer size as `WIDTHxHEIGHT` (for example `640x480`). Defaults to
//!   [`Resolution::RES_720P`].
//! * `RUST_LOG`: Log filter, see the [`env_logger`] documentation.
//!
//! [`Resolution::RES_720P`]: resolution::Resolution::RES_720P

use log::LevelFilter;

pub use lumen_linalg as linalg;

pub mod framebuffer;
pub mod ppm;
pub mod render;
pub mod resolution;
pub mod timer;

pub type Error = Box<dyn std::error::Error + Sync + Send>;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and Lumen will log at *debug* level. `RUST_LOG` can override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
