//! Named-field access for 2-, 3- and 4-dimensional vectors.
//!
//! Each view type is `#[repr(C)]` with the same number of `T` fields as the vector it views, so it
//! has the same layout as `[T; N]` (the trailing `()` field takes up no space). The vector derefs
//! to its view, which means `v.x` reads and writes the very same memory as `v[0]`.

use std::ops::{Deref, DerefMut};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

// Color channel aliases, reached through a second deref step.

#[repr(C)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (), // prevent external construction
}

/// Implements `Deref` and `DerefMut` from `$from` to `$to`, which must have identical layouts.
macro_rules! view {
    ($from:ty => $to:ident) => {
        impl<T> Deref for $from {
            type Target = $to<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // SAFETY: both types consist of the same number of `T`s, laid out contiguously.
                unsafe { &*(self as *const Self as *const Self::Target) }
            }
        }

        impl<T> DerefMut for $from {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // SAFETY: see `deref`.
                unsafe { &mut *(self as *mut Self as *mut Self::Target) }
            }
        }
    };
}

view!(Vector<T, 2> => XY);
view!(Vector<T, 3> => XYZ);
view!(Vector<T, 4> => XYZW);
view!(XYZ<T> => RGB);
view!(XYZW<T> => RGBA);

#[cfg(test)]
mod tests {
    use std::mem;

    use crate::*;

    use super::*;

    #[test]
    fn layout() {
        assert_eq!(mem::size_of::<XY<f64>>(), mem::size_of::<Vec2<f64>>());
        assert_eq!(mem::size_of::<XYZ<u8>>(), mem::size_of::<Vec3<u8>>());
        assert_eq!(mem::size_of::<XYZW<f32>>(), mem::size_of::<Vec4f>());
        assert_eq!(mem::size_of::<RGB<u8>>(), 3);
        assert_eq!(mem::align_of::<XYZ<f32>>(), mem::align_of::<Vec3f>());
    }

    #[test]
    fn fields_alias_indices() {
        let mut v = vec4(1, 2, 3, 4);
        assert_eq!([v.x, v.y, v.z, v.w], v.into_array());
        assert_eq!([v.r, v.g, v.b, v.a], v.into_array());

        for i in 0..4 {
            v[i] *= 10;
        }
        assert_eq!((v.x, v.y, v.z, v.w), (10, 20, 30, 40));

        v.z = -1;
        assert_eq!(v[2], -1);
        assert_eq!(v.b, -1);
    }
}
