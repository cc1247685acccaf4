use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support the arithmetic needed by [`Vector`][crate::Vector]
/// operations like [`dot`][crate::Vector::dot] and [`cross`][crate::Vector::cross].
///
/// Negation and division are not required, so unsigned integers are [`Number`]s too.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point types: numbers that support division and computing their square root.
pub trait Float:
    Number + ops::Div<Output = Self> + ops::Neg<Output = Self> + PartialOrd + MinMax
{
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    /// Returns `false` for infinities and `NaN`.
    fn is_finite(self) -> bool;
}

macro_rules! impl_float {
    ($($types:ty),+) => {
        $(
            impl Float for $types {
                #[inline]
                fn sqrt(self) -> Self {
                    self.sqrt()
                }

                #[inline]
                fn abs(self) -> Self {
                    self.abs()
                }

                #[inline]
                fn is_finite(self) -> bool {
                    self.is_finite()
                }
            }
        )+
    };
}
impl_float!(f32, f64);

/// Lossy-by-design numeric conversion with the semantics of an `as` cast.
///
/// Float to integer conversions truncate towards zero and saturate at the bounds of the target
/// type. `NaN` converts to `0`.
///
/// This is implemented between every pair of primitive numeric types.
pub trait Cast<U> {
    fn cast(self) -> U;
}

macro_rules! impl_cast {
    (@from $src:ty => ($($dst:ty),+)) => {
        $(
            impl Cast<$dst> for $src {
                #[inline]
                fn cast(self) -> $dst {
                    self as $dst
                }
            }
        )+
    };
    ($($src:ty),+ => $dsts:tt) => {
        $( impl_cast!(@from $src => $dsts); )+
    };
}
impl_cast!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
        => (u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64)
);

/// Multiplication by a scalar of a possibly different numeric type.
///
/// Both operands are promoted to a common type, multiplied there, and only the product is
/// converted back to `Self` (with [`Cast`] semantics):
///
/// - integer × integer is computed in 128 bits and wraps when narrowed back,
/// - integer × float is computed in the float type, then truncated and saturated,
/// - float × integer converts the integer to `Self`,
/// - float × float is computed in [`f64`], which is exact for two [`f32`] operands.
///
/// This is what [`Vector::scale`][crate::Vector::scale] uses for each element.
pub trait ScaleBy<S> {
    fn scale_by(self, scalar: S) -> Self;
}

macro_rules! impl_scale_by {
    (@int_by_int $t:ty => ($($s:ty),+)) => {
        $(
            impl ScaleBy<$s> for $t {
                #[inline]
                fn scale_by(self, scalar: $s) -> Self {
                    (self as i128).wrapping_mul(scalar as i128) as Self
                }
            }
        )+
    };
    (@int_by_float $t:ty => ($($s:ty),+)) => {
        $(
            impl ScaleBy<$s> for $t {
                #[inline]
                fn scale_by(self, scalar: $s) -> Self {
                    (self as $s * scalar) as Self
                }
            }
        )+
    };
    (@float_by_int $t:ty => ($($s:ty),+)) => {
        $(
            impl ScaleBy<$s> for $t {
                #[inline]
                fn scale_by(self, scalar: $s) -> Self {
                    self * scalar as Self
                }
            }
        )+
    };
    (@float_by_float $t:ty => ($($s:ty),+)) => {
        $(
            impl ScaleBy<$s> for $t {
                #[inline]
                fn scale_by(self, scalar: $s) -> Self {
                    (self as f64 * scalar as f64) as Self
                }
            }
        )+
    };
    ($kind:ident: $($t:ty),+ => $ss:tt) => {
        $( impl_scale_by!(@$kind $t => $ss); )+
    };
}
impl_scale_by!(
    int_by_int: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
        => (u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize)
);
impl_scale_by!(
    int_by_float: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize => (f32, f64)
);
impl_scale_by!(
    float_by_int: f32, f64 => (u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize)
);
impl_scale_by!(float_by_float: f32, f64 => (f32, f64));

/// Types whose values can be promoted to a floating-point type for computations like
/// [`Vector::norm`][crate::Vector::norm].
///
/// Floats promote to themselves, integers promote to [`f64`].
pub trait ToFloat: Copy {
    type Promoted: Float;

    fn to_float(self) -> Self::Promoted;
}

impl ToFloat for f32 {
    type Promoted = f32;

    #[inline]
    fn to_float(self) -> f32 {
        self
    }
}

impl ToFloat for f64 {
    type Promoted = f64;

    #[inline]
    fn to_float(self) -> f64 {
        self
    }
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

macro_rules! integers {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl ToFloat for $types {
                type Promoted = f64;

                #[inline]
                fn to_float(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}
integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! floats {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }
        )+
    };
}
floats!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_truncates() {
        assert_eq!(Cast::<u8>::cast(127.5f32), 127);
        assert_eq!(Cast::<u8>::cast(255.9f32), 255);
        assert_eq!(Cast::<i32>::cast(-1.7f64), -1);
    }

    #[test]
    fn cast_saturates() {
        assert_eq!(Cast::<u8>::cast(300.0f32), 255);
        assert_eq!(Cast::<u8>::cast(-4.0f32), 0);
        assert_eq!(Cast::<u8>::cast(f32::NAN), 0);
    }

    #[test]
    fn cast_widens() {
        assert_eq!(Cast::<f64>::cast(3i32), 3.0);
        assert_eq!(Cast::<f32>::cast(0.5f64), 0.5);
        assert_eq!(Cast::<i64>::cast(-3i8), -3);
    }

    #[test]
    fn scale_by_promotes() {
        assert_eq!(3i32.scale_by(2.9f32), 8);
        assert_eq!(2u8.scale_by(0.5f64), 1);
        assert_eq!((-3i16).scale_by(2.9f64), -8);
        assert_eq!(0.5f32.scale_by(3i64), 1.5);
        assert_eq!(0.1f32.scale_by(3.0f64), (0.1f32 as f64 * 3.0) as f32);
        assert_eq!(0.1f64.scale_by(3.0f32), 0.1 * 3.0);
    }

    #[test]
    fn scale_by_wraps_integers() {
        assert_eq!(200u8.scale_by(2u8), 144);
        assert_eq!(100i8.scale_by(3i64), 44);
        assert_eq!(7u32.scale_by(-1i32), u32::MAX - 6);
        assert_eq!(i64::MAX.scale_by(2u8), -2);
    }

    #[test]
    fn scale_by_saturates_float_products() {
        assert_eq!(100u8.scale_by(3.0f32), 255);
        assert_eq!(5u8.scale_by(-1.0f64), 0);
    }

    #[test]
    fn float_helpers() {
        assert_eq!(Float::abs(-2.5f32), 2.5);
        assert!(Float::is_finite(f64::MAX));
        assert!(!Float::is_finite(f32::INFINITY));
        assert!(!Float::is_finite(f64::NAN));
    }

    #[test]
    fn to_float() {
        assert_eq!(3u8.to_float(), 3.0f64);
        assert_eq!((-2i64).to_float(), -2.0f64);
        assert_eq!(0.25f32.to_float(), 0.25f32);
    }

    #[test]
    fn clamp() {
        assert_eq!(MinMax::clamp(1.5f32, 0.0, 1.0), 1.0);
        assert_eq!(MinMax::clamp(-0.5f32, 0.0, 1.0), 0.0);
        assert_eq!(MinMax::clamp(7u8, 2, 5), 5);
        // `f32::max` returns the non-NaN operand
        assert_eq!(MinMax::clamp(f32::NAN, 0.0, 1.0), 0.0);
    }
}
