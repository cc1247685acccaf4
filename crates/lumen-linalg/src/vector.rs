use std::{array, fmt};

use crate::{Cast, Float, MathError, MinMax, Number, One, ScaleBy, ToFloat, Zero};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element vector storing elements of type `T`.
///
/// [`Vector`] is a plain value: it is [`Copy`] whenever `T` is, and owns no heap memory.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] copies a value into each element, [`Vector::from_fn`] invokes a closure with
///   the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - The [`Default`] implementation and [`Vector::ZERO`] create a vector of zeroes.
/// - [`Vector::cast`] converts a vector to a different element type. There are no implicit
///   conversions between element types.
///
/// # Element Access
///
/// - Vectors with 2, 3 or 4 dimensions have named fields `x`, `y`, `z` and `w`. They alias the
///   positional elements 0 to 3, so `v.y` and `v[1]` always refer to the same value. 3- and
///   4-dimensional vectors additionally offer the color aliases `r`, `g`, `b` and `a`.
/// - The [`Index`] and [`IndexMut`] impls work like on arrays. Indexing with `i >= N` panics, in
///   debug and release builds alike.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`] expose the underlying
///   elements.
///
/// # Formatting
///
/// The [`Display`][fmt::Display] impl prints the elements separated by single spaces
/// (`1 2 3`), while [`Debug`][fmt::Debug] prints a tuple (`(1, 2, 3)`).
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec2(1, 2).zip(vec2("a", "b"));
    /// assert_eq!(v, vec2((1, "a"), (2, "b")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        self.map(|elem| match other.next() {
            Some(o) => (elem, o),
            None => unreachable!("both vectors have {N} elements"),
        })
    }

    /// Converts each element to `U` using [`Cast`], which has the semantics of an `as` cast.
    ///
    /// Float to integer conversions truncate towards zero and saturate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v: Vec3<u8> = vec3(127.5, 63.75, 300.0).cast();
    /// assert_eq!(v, vec3(127, 63, 255));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Multiplies each element with `scalar`, which may be of a different numeric type than the
    /// elements.
    ///
    /// Each product is computed in the promoted type of both operands and only then converted back
    /// to `T` (see [`ScaleBy`]), so scaling an integer vector by a float truncates the products,
    /// not the scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec2(1.0f32, 0.5).scale(4.0f64);
    /// assert_eq!(v, vec2(4.0f32, 2.0));
    ///
    /// let w = vec3(1, 2, 3).scale(2.5);
    /// assert_eq!(w, vec3(2, 5, 7));
    /// ```
    pub fn scale<S>(self, scalar: S) -> Self
    where
        T: ScaleBy<S>,
        S: Copy,
    {
        self.map(|elem| elem.scale_by(scalar))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec3(-0.5, 0.25, 7.0).clamp(Vector::ZERO, Vector::splat(1.0));
    /// assert_eq!(v, vec3(0.0, 0.25, 1.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both `self` and `other`. Swapping the arguments inverts the
    /// direction of the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Returns the Euclidean length of this vector.
    ///
    /// The computation is always carried out in floating point: integer vectors are promoted to
    /// [`f64`] first (see [`ToFloat`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_eq!(vec3(2, 3, 6).norm(), 7.0);
    /// assert_eq!(vec3(0.0f32, 3.0, 4.0).norm(), 5.0);
    /// ```
    pub fn norm(self) -> T::Promoted
    where
        T: ToFloat,
    {
        let [x, y, z] = self.into_array().map(ToFloat::to_float);
        (x * x + y * y + z * z).sqrt()
    }

    /// Rescales `self` in place so that its [norm][Self::norm] becomes `len`.
    ///
    /// Returns `self` for chaining. On error, `self` is left unchanged:
    ///
    /// - A vector of length zero cannot be rescaled and yields [`MathError::DivisionByZero`].
    /// - An infinite or `NaN` element, or a non-finite `len`, yields [`MathError::NonFinite`].
    ///
    /// The vector is divided by its largest absolute element before its length is computed, so
    /// vectors whose squared length would overflow or underflow `T` are still rescaled correctly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let mut v = vec3(0.0, 0.0, 4.0);
    /// v.normalize_to(2.0)?;
    /// assert_eq!(v, vec3(0.0, 0.0, 2.0));
    ///
    /// let mut zero = Vec3f::ZERO;
    /// assert_eq!(zero.normalize_to(2.0), Err(MathError::DivisionByZero));
    /// # Ok::<_, MathError>(())
    /// ```
    pub fn normalize_to(&mut self, len: T) -> Result<&mut Self, MathError>
    where
        T: Float + ToFloat<Promoted = T>,
    {
        if !len.is_finite() || !self.0.iter().all(|elem| elem.is_finite()) {
            return Err(MathError::NonFinite);
        }
        let largest = self.0.iter().fold(T::ZERO, |acc, elem| acc.max(elem.abs()));
        if largest == T::ZERO {
            return Err(MathError::DivisionByZero);
        }
        // `unit` has elements in [-1, 1] and at least one at +-1, so its norm is in [1, sqrt(3)].
        let unit = self.map(|elem| elem / largest);
        *self = unit * (len / unit.norm());
        Ok(self)
    }

    /// Rescales `self` in place to unit length.
    ///
    /// Equivalent to `self.normalize_to(1.0)`.
    pub fn normalize(&mut self) -> Result<&mut Self, MathError>
    where
        T: Float + ToFloat<Promoted = T>,
    {
        self.normalize_to(T::ONE)
    }

    /// Returns a unit-length copy of `self`, leaving `self` untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = vec3(0.0, -4.0, 0.0);
    /// assert_eq!(v.normalized(), Ok(vec3(0.0, -1.0, 0.0)));
    /// ```
    pub fn normalized(mut self) -> Result<Self, MathError>
    where
        T: Float + ToFloat<Promoted = T>,
    {
        self.normalize()?;
        Ok(self)
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            // Forwards width and precision to each element.
            fmt::Display::fmt(elem, f)?;
        }
        Ok(())
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
