//! Fixed-dimension vector math for Lumen.
//!
//! The only type of this library is [`Vector`], an `N`-element vector storing elements of some
//! numeric type `T`. 2-, 3- and 4-dimensional vectors get named-field access (`x`, `y`, `z`, `w`)
//! on top of the positional indexing every vector supports.
//!
//! # Goals & Non-Goals
//!
//! - Vector dimensions are const generics. There are no dynamically-sized vectors.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types.
//! - Operations that only make sense in 3 dimensions ([`Vector::cross`], [`Vector::norm`] and
//!   normalization) only exist on [`Vec3`], so misuse is a compile error.
//! - Numeric conversions are always explicit (see [`Cast`] and [`Vector::cast`]).
//! - Misuse that can be detected at runtime is handled as follows: indexing out of bounds panics,
//!   normalizing a zero-length vector returns [`MathError::DivisionByZero`] and normalizing a
//!   vector with infinite or `NaN` elements returns [`MathError::NonFinite`].

mod error;
mod traits;
mod vector;

pub use error::*;
pub use traits::*;
pub use vector::*;
