//! The Measure Type: Numeric Value with Compile-Time Units
//!
//! `Measure<N, U>` represents a numeric value of type `N` with unit `U`.
//! Unit checking is performed at compile time, preventing dimensional errors.
//!
//! Multiplication and division compute the result unit
//! ([`Product`], [`Quotient`], [`Inverse`]). Addition, subtraction,
//! comparison and conversion between unit types require the two units to be
//! assignable; anything else fails to compile.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::dimension::Dimension;
use super::unit::{Assignable, Inverse, Product, Quotient, Scalar, Unit};

// =============================================================================
// Plain arithmetic types
// =============================================================================

mod sealed {
    pub trait Sealed {}
}

/// Primitive arithmetic types a measure can wrap
pub trait Arithmetic:
    Copy + PartialOrd + Default + fmt::Debug + fmt::Display + Send + Sync + 'static + sealed::Sealed
{
    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity, used by increment and decrement
    const ONE: Self;
}

macro_rules! impl_arithmetic {
    ($($t:ty => $zero:literal, $one:literal);* $(;)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Arithmetic for $t {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )*
    };
}

impl_arithmetic! {
    i8 => 0, 1;
    i16 => 0, 1;
    i32 => 0, 1;
    i64 => 0, 1;
    i128 => 0, 1;
    isize => 0, 1;
    u8 => 0, 1;
    u16 => 0, 1;
    u32 => 0, 1;
    u64 => 0, 1;
    u128 => 0, 1;
    usize => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}

// =============================================================================
// Measure
// =============================================================================

/// A numeric value with compile-time unit checking
///
/// # Type Parameters
///
/// * `N` - The numeric type (f64, f32, i32, ...)
/// * `U` - The unit type (must implement `Unit`)
///
/// # Examples
///
/// ```
/// use sipp::Measure;
/// use sipp::si::{Meter, MeterPerSecond, Second};
///
/// let distance: Measure<f64, Meter> = Measure::new(100.0);
/// let time: Measure<f64, Second> = Measure::new(20.0);
///
/// // Derived units come out of multiplication/division:
/// let speed: Measure<f64, MeterPerSecond> = (distance / time).into_unit();
/// assert_eq!(*speed.value(), 5.0);
/// ```
#[repr(transparent)]
pub struct Measure<N, U: Unit> {
    value: N,
    _unit: PhantomData<U>,
}

impl<N, U: Unit> Measure<N, U> {
    /// Create a new measure with the given value
    #[inline]
    pub const fn new(value: N) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// Get a reference to the raw numeric value
    #[inline]
    pub fn value(&self) -> &N {
        &self.value
    }

    /// Get the raw numeric value (consuming)
    #[inline]
    pub fn into_value(self) -> N {
        self.value
    }

    /// Convert the raw value into another plain numeric type
    #[inline]
    pub fn value_into<M>(self) -> M
    where
        N: Into<M>,
    {
        self.value.into()
    }

    /// Convert a measure of an assignable unit
    ///
    /// Fails to compile if `V` does not reduce to the same canonical
    /// dimension as `U`.
    #[inline]
    pub fn from_unit<M, V: Unit>(other: Measure<M, V>) -> Self
    where
        M: Into<N>,
    {
        let () = Assignable::<U, V>::CHECK;
        Self::new(other.value.into())
    }

    /// Re-type this measure as an assignable unit
    #[inline]
    pub fn into_unit<V: Unit>(self) -> Measure<N, V> {
        let () = Assignable::<V, U>::CHECK;
        Measure::new(self.value)
    }

    /// Overwrite with a measure of an assignable unit
    #[inline]
    pub fn assign<M, V: Unit>(&mut self, other: Measure<M, V>) -> &mut Self
    where
        M: Into<N>,
    {
        let () = Assignable::<U, V>::CHECK;
        self.value = other.value.into();
        self
    }

    /// Reinterpret the value as belonging to `V`, without any check
    #[inline]
    pub fn cast_unit<V: Unit>(self) -> Measure<N, V> {
        Measure::new(self.value)
    }

    /// Apply `f` to the value, keeping the unit
    #[inline]
    pub fn map<M>(self, f: impl FnOnce(N) -> M) -> Measure<M, U> {
        Measure::new(f(self.value))
    }

    /// Get the unit symbol
    #[inline]
    pub fn symbol() -> &'static str {
        U::SYMBOL
    }

    /// Get the unit name
    #[inline]
    pub fn unit_name() -> &'static str {
        U::NAME
    }

    /// Get the dimension
    #[inline]
    pub fn dimension() -> Dimension {
        U::DIMENSION
    }
}

/// Reinterpret a measure as belonging to `V`, bypassing the assignability
/// check
///
/// ```
/// use sipp::{unit_cast, Measure};
/// use sipp::si::{Meter, Second};
///
/// let d: Measure<f64, Meter> = Measure::new(3.0);
/// let t: Measure<f64, Second> = unit_cast::<Second, _, _>(d);
/// assert_eq!(*t.value(), 3.0);
/// ```
#[inline]
pub fn unit_cast<V: Unit, N, U: Unit>(measure: Measure<N, U>) -> Measure<N, V> {
    measure.cast_unit()
}

impl<N: Arithmetic, U: Unit> Measure<N, U> {
    /// The zero measure
    pub const ZERO: Self = Self::new(N::ZERO);

    /// Add one to the value; returns the updated measure
    #[inline]
    pub fn increment(&mut self) -> &mut Self
    where
        N: AddAssign,
    {
        self.value += N::ONE;
        self
    }

    /// Add one to the value; returns the previous measure
    #[inline]
    pub fn post_increment(&mut self) -> Self
    where
        N: AddAssign,
    {
        let previous = *self;
        self.value += N::ONE;
        previous
    }

    /// Subtract one from the value; returns the updated measure
    #[inline]
    pub fn decrement(&mut self) -> &mut Self
    where
        N: SubAssign,
    {
        self.value -= N::ONE;
        self
    }

    /// Subtract one from the value; returns the previous measure
    #[inline]
    pub fn post_decrement(&mut self) -> Self
    where
        N: SubAssign,
    {
        let previous = *self;
        self.value -= N::ONE;
        previous
    }
}

// =============================================================================
// Unit × Unit
// =============================================================================

impl<N, M, U: Unit, V: Unit> Mul<Measure<M, V>> for Measure<N, U>
where
    N: Mul<M>,
{
    type Output = Measure<<N as Mul<M>>::Output, Product<U, V>>;

    #[inline]
    fn mul(self, rhs: Measure<M, V>) -> Self::Output {
        Measure::new(self.value * rhs.value)
    }
}

impl<N, M, U: Unit, V: Unit> Div<Measure<M, V>> for Measure<N, U>
where
    N: Div<M>,
{
    type Output = Measure<<N as Div<M>>::Output, Quotient<U, V>>;

    #[inline]
    fn div(self, rhs: Measure<M, V>) -> Self::Output {
        Measure::new(self.value / rhs.value)
    }
}

// =============================================================================
// Assignable-Unit Arithmetic
// =============================================================================

/// Addition: assignable units only; the result keeps the left unit
impl<N, M, U: Unit, V: Unit> Add<Measure<M, V>> for Measure<N, U>
where
    N: Add<M>,
{
    type Output = Measure<<N as Add<M>>::Output, U>;

    #[inline]
    fn add(self, rhs: Measure<M, V>) -> Self::Output {
        let () = Assignable::<U, V>::CHECK;
        Measure::new(self.value + rhs.value)
    }
}

/// Subtraction: assignable units only; the result keeps the left unit
impl<N, M, U: Unit, V: Unit> Sub<Measure<M, V>> for Measure<N, U>
where
    N: Sub<M>,
{
    type Output = Measure<<N as Sub<M>>::Output, U>;

    #[inline]
    fn sub(self, rhs: Measure<M, V>) -> Self::Output {
        let () = Assignable::<U, V>::CHECK;
        Measure::new(self.value - rhs.value)
    }
}

impl<N, M, U: Unit, V: Unit> AddAssign<Measure<M, V>> for Measure<N, U>
where
    N: AddAssign<M>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Measure<M, V>) {
        let () = Assignable::<U, V>::CHECK;
        self.value += rhs.value;
    }
}

impl<N, M, U: Unit, V: Unit> SubAssign<Measure<M, V>> for Measure<N, U>
where
    N: SubAssign<M>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Measure<M, V>) {
        let () = Assignable::<U, V>::CHECK;
        self.value -= rhs.value;
    }
}

/// Negation
impl<N: Neg, U: Unit> Neg for Measure<N, U> {
    type Output = Measure<N::Output, U>;

    #[inline]
    fn neg(self) -> Self::Output {
        Measure::new(-self.value)
    }
}

impl<N: Add<Output = N> + Default, U: Unit> Sum for Measure<N, U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Measure::new(iter.fold(N::default(), |acc, m| acc + m.value))
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl<N, M, U: Unit, V: Unit> PartialEq<Measure<M, V>> for Measure<N, U>
where
    N: PartialEq<M>,
{
    #[inline]
    fn eq(&self, other: &Measure<M, V>) -> bool {
        let () = Assignable::<U, V>::CHECK;
        self.value == other.value
    }
}

impl<N: Eq, U: Unit> Eq for Measure<N, U> {}

impl<N, M, U: Unit, V: Unit> PartialOrd<Measure<M, V>> for Measure<N, U>
where
    N: PartialOrd<M>,
{
    #[inline]
    fn partial_cmp(&self, other: &Measure<M, V>) -> Option<Ordering> {
        let () = Assignable::<U, V>::CHECK;
        self.value.partial_cmp(&other.value)
    }
}

impl<N: Ord, U: Unit> Ord for Measure<N, U> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// =============================================================================
// Scalar Arithmetic
// =============================================================================

macro_rules! impl_scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            /// Multiplication by scalar (right)
            impl<U: Unit> Mul<$t> for Measure<$t, U> {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: $t) -> Self {
                    Measure::new(self.value * rhs)
                }
            }

            /// Division by scalar
            impl<U: Unit> Div<$t> for Measure<$t, U> {
                type Output = Self;

                #[inline]
                fn div(self, rhs: $t) -> Self {
                    Measure::new(self.value / rhs)
                }
            }

            impl<U: Unit> MulAssign<$t> for Measure<$t, U> {
                #[inline]
                fn mul_assign(&mut self, rhs: $t) {
                    self.value *= rhs;
                }
            }

            impl<U: Unit> DivAssign<$t> for Measure<$t, U> {
                #[inline]
                fn div_assign(&mut self, rhs: $t) {
                    self.value /= rhs;
                }
            }

            /// Multiplication by scalar (left)
            impl<U: Unit> Mul<Measure<$t, U>> for $t {
                type Output = Measure<$t, U>;

                #[inline]
                fn mul(self, rhs: Measure<$t, U>) -> Measure<$t, U> {
                    Measure::new(self * rhs.value)
                }
            }

            /// Scalar divided by a measure: the inverse unit
            impl<U: Unit> Div<Measure<$t, U>> for $t {
                type Output = Measure<$t, Inverse<U>>;

                #[inline]
                fn div(self, rhs: Measure<$t, U>) -> Measure<$t, Inverse<U>> {
                    Measure::new(self / rhs.value)
                }
            }

            impl<U: Unit> Add<$t> for Measure<$t, U> {
                type Output = Self;

                #[inline]
                fn add(self, rhs: $t) -> Self {
                    let () = Scalar::<U>::CHECK;
                    Measure::new(self.value + rhs)
                }
            }

            impl<U: Unit> Sub<$t> for Measure<$t, U> {
                type Output = Self;

                #[inline]
                fn sub(self, rhs: $t) -> Self {
                    let () = Scalar::<U>::CHECK;
                    Measure::new(self.value - rhs)
                }
            }

            impl<U: Unit> Add<Measure<$t, U>> for $t {
                type Output = Measure<$t, U>;

                #[inline]
                fn add(self, rhs: Measure<$t, U>) -> Measure<$t, U> {
                    let () = Scalar::<U>::CHECK;
                    Measure::new(self + rhs.value)
                }
            }

            impl<U: Unit> Sub<Measure<$t, U>> for $t {
                type Output = Measure<$t, U>;

                #[inline]
                fn sub(self, rhs: Measure<$t, U>) -> Measure<$t, U> {
                    let () = Scalar::<U>::CHECK;
                    Measure::new(self - rhs.value)
                }
            }

            impl<U: Unit> AddAssign<$t> for Measure<$t, U> {
                #[inline]
                fn add_assign(&mut self, rhs: $t) {
                    let () = Scalar::<U>::CHECK;
                    self.value += rhs;
                }
            }

            impl<U: Unit> SubAssign<$t> for Measure<$t, U> {
                #[inline]
                fn sub_assign(&mut self, rhs: $t) {
                    let () = Scalar::<U>::CHECK;
                    self.value -= rhs;
                }
            }

            impl<U: Unit> PartialEq<$t> for Measure<$t, U> {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    let () = Scalar::<U>::CHECK;
                    self.value == *other
                }
            }

            impl<U: Unit> PartialOrd<$t> for Measure<$t, U> {
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    let () = Scalar::<U>::CHECK;
                    self.value.partial_cmp(other)
                }
            }

            impl<U: Unit> PartialEq<Measure<$t, U>> for $t {
                #[inline]
                fn eq(&self, other: &Measure<$t, U>) -> bool {
                    let () = Scalar::<U>::CHECK;
                    *self == other.value
                }
            }

            impl<U: Unit> PartialOrd<Measure<$t, U>> for $t {
                #[inline]
                fn partial_cmp(&self, other: &Measure<$t, U>) -> Option<Ordering> {
                    let () = Scalar::<U>::CHECK;
                    self.partial_cmp(&other.value)
                }
            }

            /// Explicit conversion back to a plain number
            impl<U: Unit> From<Measure<$t, U>> for $t {
                #[inline]
                fn from(measure: Measure<$t, U>) -> $t {
                    measure.value
                }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// =============================================================================
// Float Operations
// =============================================================================

macro_rules! impl_float_ops {
    ($($t:ty),*) => {
        $(
            impl<U: Unit> Measure<$t, U> {
                /// Absolute value
                #[inline]
                pub fn abs(self) -> Self {
                    Measure::new(self.value.abs())
                }

                /// Check if NaN
                #[inline]
                pub fn is_nan(&self) -> bool {
                    self.value.is_nan()
                }

                /// Check if finite
                #[inline]
                pub fn is_finite(&self) -> bool {
                    self.value.is_finite()
                }

                /// Minimum
                #[inline]
                pub fn min(self, other: Self) -> Self {
                    Measure::new(self.value.min(other.value))
                }

                /// Maximum
                #[inline]
                pub fn max(self, other: Self) -> Self {
                    Measure::new(self.value.max(other.value))
                }

                /// Clamp to range
                #[inline]
                pub fn clamp(self, min: Self, max: Self) -> Self {
                    Measure::new(self.value.clamp(min.value, max.value))
                }
            }
        )*
    };
}

impl_float_ops!(f32, f64);

// =============================================================================
// Standard traits
// =============================================================================

impl<N: Clone, U: Unit> Clone for Measure<N, U> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<N: Copy, U: Unit> Copy for Measure<N, U> {}

impl<N: Default, U: Unit> Default for Measure<N, U> {
    fn default() -> Self {
        Self::new(N::default())
    }
}

impl<N: Hash, U: Unit> Hash for Measure<N, U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<N: fmt::Display, U: Unit> fmt::Display for Measure<N, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !U::SYMBOL.is_empty() {
            write!(f, "{} {}", self.value, U::SYMBOL)
        } else if U::DIMENSION.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, U::DIMENSION)
        }
    }
}

impl<N: fmt::Debug, U: Unit> fmt::Debug for Measure<N, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Measure")
            .field("value", &self.value)
            .field("unit", &U::default())
            .field("dimension", &U::DIMENSION)
            .finish()
    }
}

impl<N, U: Unit> From<N> for Measure<N, U> {
    fn from(value: N) -> Self {
        Self::new(value)
    }
}

#[cfg(feature = "serde")]
impl<N: serde::Serialize, U: Unit> serde::Serialize for Measure<N, U> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, N: serde::Deserialize<'de>, U: Unit> serde::Deserialize<'de> for Measure<N, U> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        N::deserialize(deserializer).map(Self::new)
    }
}

// =============================================================================
// Extension Trait for Creating Measures
// =============================================================================

/// Extension trait for creating measures from numeric values
///
/// ```
/// use sipp::prelude::*;
/// use sipp::si::Kilogram;
///
/// let mass = 70.0_f64.with_unit::<Kilogram>();
/// assert_eq!(*mass.value(), 70.0);
/// ```
pub trait WithUnit: Arithmetic {
    /// Create a measure with the specified unit
    fn with_unit<U: Unit>(self) -> Measure<Self, U> {
        Measure::new(self)
    }
}

impl<T: Arithmetic> WithUnit for T {}

/// A dimensionless scalar measure
pub type Ratio<N = f64> = Measure<N, super::unit::Dimensionless>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{Dimensionless, Power};

    crate::basic_unit! {
        Time: "s"
    }
    crate::basic_unit! {
        Distance: "m"
    }
    crate::basic_unit! {
        Mass: "kg"
    }
    crate::unit! {
        Velocity = [Distance^1, Time^-1]
    }
    crate::unit! {
        Acceleration = [Velocity^1, Time^-1]
    }
    crate::unit! {
        Force: "N" = [Acceleration^1, Mass^1]
    }

    #[test]
    fn test_measure_creation() {
        let mass: Measure<f64, Mass> = Measure::new(70.0);
        assert_eq!(*mass.value(), 70.0);
        assert_eq!(Measure::<f64, Mass>::symbol(), "kg");
        assert_eq!(Measure::<f64, Force>::unit_name(), "Force");
    }

    #[test]
    fn test_default_is_zero() {
        let t: Measure<f64, Time> = Measure::default();
        assert_eq!(t.into_value(), 0.0);
        assert_eq!(Measure::<i32, Time>::ZERO.into_value(), 0);
    }

    #[test]
    fn test_same_unit_addition() {
        let m1: Measure<f64, Mass> = Measure::new(50.0);
        let m2: Measure<f64, Mass> = Measure::new(20.0);
        let sum = m1 + m2;
        assert_eq!(*sum.value(), 70.0);
        assert_eq!(*(m1 - m2).value(), 30.0);
    }

    #[test]
    fn test_assignable_addition_keeps_left_unit() {
        let f: Measure<f64, Force> = Measure::new(2.0);
        let a: Measure<f64, Acceleration> = Measure::new(1.0);
        let m: Measure<f64, Mass> = Measure::new(3.0);
        let total: Measure<f64, Force> = f + a * m;
        assert_eq!(*total.value(), 5.0);
    }

    #[test]
    fn test_f32_values() {
        let a: Measure<f32, Distance> = Measure::new(1.5);
        let b: Measure<f32, Distance> = Measure::new(2.5);
        let c: Measure<f32, Distance> = a + b;
        assert_eq!(c.value_into::<f64>(), 4.0);
    }

    #[test]
    fn test_scalar_multiplication() {
        let mass: Measure<f64, Mass> = Measure::new(10.0);
        assert_eq!(*(mass * 2.0).value(), 20.0);
        assert_eq!(*(0.5 * mass).value(), 5.0);
        assert_eq!(*(mass / 4.0).value(), 2.5);

        let mut t: Measure<f64, Time> = Measure::new(2.0);
        t *= 1.5;
        t /= 3.0;
        assert_eq!(*t.value(), 1.0);
    }

    #[test]
    fn test_scalar_over_measure_is_inverse() {
        let t: Measure<f64, Time> = Measure::new(4.0);
        let freq = 1.0 / t;
        assert_eq!(*freq.value(), 0.25);
        assert!(is_inverse_time(&freq));
        assert!((freq * t).into_unit::<Dimensionless>() == 1.0);
    }

    fn is_inverse_time<N, U: Unit>(_: &Measure<N, U>) -> bool {
        U::DIMENSION == Power::<Time, { -1 }>::DIMENSION
    }

    #[test]
    fn test_cancellation() {
        let a: Measure<f64, Acceleration> = Measure::new(1.0);
        let m: Measure<f64, Mass> = Measure::new(4.0);

        let f: Measure<f64, Force> = Measure::from_unit(a * m);
        assert_eq!(f, Measure::<f64, Force>::new(4.0));

        let m2: Measure<f64, Mass> = (f / a).into_unit();
        assert_eq!(m2, m);
    }

    #[test]
    fn test_assign() {
        let d: Measure<f64, Distance> = Measure::new(6.0);
        let t: Measure<f64, Time> = Measure::new(2.0);
        let mut v: Measure<f64, Velocity> = Measure::default();
        v.assign(d / t);
        assert_eq!(*v.value(), 3.0);

        let narrow: Measure<f32, Velocity> = Measure::new(1.5);
        v.assign(narrow);
        assert_eq!(*v.value(), 1.5);
    }

    #[test]
    fn test_unit_cast_ignores_dimension() {
        let v: Measure<f64, Velocity> = Measure::new(7.0);
        let t: Measure<f64, Time> = unit_cast::<Time, _, _>(v * v);
        assert_eq!(*t.value(), 49.0);
        assert_eq!(*v.cast_unit::<Mass>().value(), 7.0);
    }

    #[test]
    fn test_increment_decrement() {
        let mut a: Measure<f64, Acceleration> = Measure::new(2.0);
        assert_eq!(*a.increment().value(), 3.0);
        let before = a.post_decrement();
        assert_eq!(*before.value(), 3.0);
        assert_eq!(*a.value(), 2.0);
        let before = a.post_increment();
        assert_eq!(*before.value(), 2.0);
        a.decrement();
        assert_eq!(*a.value(), 2.0);
    }

    #[test]
    fn test_negation() {
        let v: Measure<f64, Velocity> = Measure::new(2.0);
        let neg = -v;
        assert_eq!(*neg.value(), -2.0);
        assert!(neg < v);
    }

    #[test]
    fn test_comparison() {
        let m1: Measure<f64, Mass> = Measure::new(50.0);
        let m2: Measure<f64, Mass> = Measure::new(70.0);
        assert!(m1 < m2);
        assert!(m2 > m1);
        assert!(m2 >= m1);

        let m3: Measure<f64, Mass> = Measure::new(50.0);
        assert_eq!(m1, m3);
        assert_ne!(m1, m2);
    }

    #[test]
    fn test_cross_unit_comparison() {
        let a: Measure<f64, Acceleration> = Measure::new(2.0);
        let t: Measure<f64, Time> = Measure::new(3.0);
        let v: Measure<f64, Velocity> = Measure::new(6.0);
        assert!(a * t == v);
        assert!(a * t <= v);
    }

    #[test]
    fn test_dimensionless_scalar_ops() {
        let d: Measure<f64, Distance> = Measure::new(6.0);
        let ratio = d / Measure::<f64, Distance>::new(3.0);
        assert!(ratio == 2.0);
        assert!(ratio + 1.0 == 3.0);
        assert!(5.0 - ratio == 3.0);
        assert!(ratio > 1.0);

        let mut s: Ratio = Measure::new(1.0);
        s += 2.0;
        s -= 0.5;
        assert_eq!(f64::from(s), 2.5);
    }

    #[test]
    fn test_sum() {
        let total: Measure<f64, Mass> = [1.0, 2.0, 3.5].into_iter().map(Measure::new).sum();
        assert_eq!(*total.value(), 6.5);
    }

    #[test]
    fn test_float_operations() {
        let mass: Measure<f64, Mass> = Measure::new(-10.0);
        assert_eq!(*mass.abs().value(), 10.0);
        let lo = Measure::new(0.0);
        let hi = Measure::new(5.0);
        assert_eq!(*mass.clamp(lo, hi).value(), 0.0);
        assert_eq!(*mass.max(hi).value(), 5.0);
        assert!(mass.is_finite());
    }

    #[test]
    fn test_with_unit() {
        let mass = 70.0_f64.with_unit::<Mass>();
        assert_eq!(*mass.value(), 70.0);
        let count = 3i32.with_unit::<Time>();
        assert_eq!(count.into_value(), 3);
    }

    #[test]
    fn test_display() {
        let f: Measure<f64, Force> = Measure::new(70.0);
        assert_eq!(format!("{}", f), "70 N");

        let v: Measure<f64, Velocity> = Measure::new(3.0);
        assert_eq!(format!("{}", v), "3 m / s");

        let s: Ratio = Measure::new(0.5);
        assert_eq!(format!("{}", s), "0.5");
    }

    #[test]
    fn test_debug() {
        let t: Measure<f64, Time> = Measure::new(1.0);
        let debug = format!("{:?}", t);
        assert!(debug.starts_with("Measure { value: 1.0, unit: Time"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_is_transparent() {
        let v: Measure<f64, Velocity> = Measure::new(12.5);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "12.5");
        let back: Measure<f64, Velocity> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_is_zero_sized_wrapper() {
        assert_eq!(std::mem::size_of::<Measure<f64, Force>>(), std::mem::size_of::<f64>());
    }
}
