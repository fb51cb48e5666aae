//! Units and the quantities that define them
//!
//! A unit is a zero-sized marker type. Its dimension is declared as a list
//! of [`Quantity`] entries (another unit raised to a non-zero power) and
//! reduced to a canonical [`Dimension`] during constant evaluation:
//!
//! 1. every quantity is unfolded into factors over basic dimensions, with
//!    exponents multiplied through ([`unfold`]);
//! 2. the unfolded bag is simplified, merging factors of the same basic
//!    dimension and dropping those that cancel ([`Unfolded::simplify`]).
//!
//! A referenced unit's canonical form is itself an associated constant, so
//! each unit is unfolded once no matter how many units refer to it. Unit
//! definitions must not form a cycle; `rustc` rejects one as a cycle in
//! constant evaluation.

use std::fmt;
use std::marker::PhantomData;

use super::dimension::{scale_power, BaseDimension, Dimension, Unfolded};

// =============================================================================
// Quantity
// =============================================================================

/// A unit raised to a non-zero integer power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantity {
    unit: Dimension,
    power: i8,
}

impl Quantity {
    /// `U` raised to `power`
    pub const fn of<U: Unit>(power: i8) -> Self {
        Self::new(U::DIMENSION, power)
    }

    /// A basic dimension raised to `power`
    pub const fn basic(base: BaseDimension, power: i8) -> Self {
        Self::new(Dimension::basic(base), power)
    }

    /// A canonical dimension raised to `power`
    pub const fn new(unit: Dimension, power: i8) -> Self {
        assert!(power != 0, "quantity power must be non-zero");
        Self { unit, power }
    }

    /// Canonical form of the referenced unit
    pub const fn unit(&self) -> &Dimension {
        &self.unit
    }

    /// The exponent
    pub const fn power(&self) -> i8 {
        self.power
    }
}

/// Unfold `quantities`, multiplying every exponent by `power`
pub const fn unfold(quantities: &[Quantity], power: i8) -> Unfolded {
    let mut bag = Unfolded::EMPTY;
    let mut i = 0;
    while i < quantities.len() {
        let quantity = &quantities[i];
        bag = bag.extend(&quantity.unit, scale_power(quantity.power, power));
        i += 1;
    }
    bag
}

/// Canonical form of a quantity list: unfold, then simplify
pub const fn canonical(quantities: &[Quantity]) -> Dimension {
    unfold(quantities, 1).simplify()
}

// =============================================================================
// Unit traits
// =============================================================================

/// Trait for all units of measure
///
/// Implement it by hand or through [`basic_unit!`](crate::basic_unit) and
/// [`unit!`](crate::unit):
///
/// ```
/// use sipp::{Quantity, Unit};
/// use sipp::si::{Meter, Second};
///
/// #[derive(Debug, Clone, Copy, Default)]
/// struct Speed;
///
/// impl Unit for Speed {
///     const QUANTITIES: &'static [Quantity] = &[Quantity::of::<Meter>(1), Quantity::of::<Second>(-1)];
///     const SYMBOL: &'static str = "m/s";
/// }
///
/// assert_eq!(Speed::DIMENSION.len(), 2);
/// ```
pub trait Unit: Copy + Clone + Default + fmt::Debug + 'static {
    /// Declared quantities, in any order
    const QUANTITIES: &'static [Quantity];

    /// Canonical form
    const DIMENSION: Dimension = canonical(Self::QUANTITIES);

    /// Unit symbol (e.g., "N", "m"); empty if the unit has none
    const SYMBOL: &'static str = "";

    /// Full name
    const NAME: &'static str = "";

    /// Get dimension at runtime
    fn dimension() -> Dimension {
        Self::DIMENSION
    }

    /// Get symbol at runtime
    fn symbol() -> &'static str {
        Self::SYMBOL
    }

    /// Get name at runtime
    fn name() -> &'static str {
        Self::NAME
    }
}

/// A unit that is itself a basic dimension
pub trait BasicUnit: Unit {
    /// The basic dimension this unit measures
    const BASE: BaseDimension;
}

/// Check whether measures of `A` and `B` may be converted, assigned, added,
/// subtracted and compared
///
/// ```
/// use sipp::is_assignable;
/// use sipp::si::{Joule, Meter, Newton};
/// use sipp::unit::Product;
///
/// const _: () = assert!(is_assignable::<Joule, Product<Meter, Newton>>());
/// const _: () = assert!(!is_assignable::<Joule, Newton>());
/// ```
pub const fn is_assignable<A: Unit, B: Unit>() -> bool {
    A::DIMENSION.is_assignable(&B::DIMENSION)
}

/// Compile-time gate for conversions and additive operators
pub(crate) struct Assignable<A, B>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Assignable<A, B> {
    pub(crate) const CHECK: () = assert!(
        is_assignable::<A, B>(),
        "units are not assignable: their canonical dimensions differ"
    );
}

/// Compile-time gate for mixing a measure with a plain number
pub(crate) struct Scalar<U>(PhantomData<U>);

impl<U: Unit> Scalar<U> {
    pub(crate) const CHECK: () = assert!(
        U::DIMENSION.is_dimensionless(),
        "plain numbers only combine with dimensionless measures"
    );
}

// =============================================================================
// Unit combinators
// =============================================================================

/// Dimensionless unit (pure number)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dimensionless;

impl Unit for Dimensionless {
    const QUANTITIES: &'static [Quantity] = &[];
    const NAME: &'static str = "dimensionless";
}

macro_rules! marker {
    ($(#[$meta:meta])* $name:ident<$($param:ident),+ $(; const $c:ident: $ct:ty)?>) => {
        $(#[$meta])*
        pub struct $name<$($param),+ $(, const $c: $ct)?>(PhantomData<($($param,)+)>);

        impl<$($param),+ $(, const $c: $ct)?> Clone for $name<$($param),+ $(, $c)?> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($param),+ $(, const $c: $ct)?> Copy for $name<$($param),+ $(, $c)?> {}

        impl<$($param),+ $(, const $c: $ct)?> Default for $name<$($param),+ $(, $c)?> {
            fn default() -> Self {
                Self(PhantomData)
            }
        }
    };
}

marker! {
    /// `A × B`, the unit of a product of measures
    Product<A, B>
}

marker! {
    /// `A / B`, the unit of a quotient of measures
    Quotient<A, B>
}

marker! {
    /// `1 / A`, the unit of a number divided by a measure
    Inverse<A>
}

marker! {
    /// `A` raised to the integer power `P`
    Power<A; const P: i8>
}

impl<A: Unit, B: Unit> Unit for Product<A, B> {
    const QUANTITIES: &'static [Quantity] = &[Quantity::of::<A>(1), Quantity::of::<B>(1)];
}

impl<A: Unit, B: Unit> Unit for Quotient<A, B> {
    const QUANTITIES: &'static [Quantity] = &[Quantity::of::<A>(1), Quantity::of::<B>(-1)];
}

impl<A: Unit> Unit for Inverse<A> {
    const QUANTITIES: &'static [Quantity] = &[Quantity::of::<A>(-1)];
}

impl<A: Unit, const P: i8> Unit for Power<A, P> {
    const QUANTITIES: &'static [Quantity] = &[Quantity::of::<A>(P)];
}

impl<A: Unit, B: Unit> fmt::Debug for Product<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product({:?}, {:?})", A::default(), B::default())
    }
}

impl<A: Unit, B: Unit> fmt::Debug for Quotient<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quotient({:?}, {:?})", A::default(), B::default())
    }
}

impl<A: Unit> fmt::Debug for Inverse<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Inverse({:?})", A::default())
    }
}

impl<A: Unit, const P: i8> fmt::Debug for Power<A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Power({:?}, {})", A::default(), P)
    }
}
