//! Declaration macros for basic and derived units

/// Declare a basic (primitive, non-decomposable) dimension and its unit
///
/// The identity key is `module_path!()::Name`, so two declarations never
/// collide even if they share a symbol.
///
/// ```
/// sipp::basic_unit! {
///     /// Elapsed time
///     pub Tick: "tick"
/// }
///
/// use sipp::{BasicUnit, Unit};
/// assert_eq!(Tick::SYMBOL, "tick");
/// assert_eq!(Tick::DIMENSION.power_of(&Tick::BASE), 1);
/// ```
#[macro_export]
macro_rules! basic_unit {
    ($(#[$meta:meta])* $vis:vis $name:ident : $symbol:literal $(, $full:literal)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::BasicUnit for $name {
            const BASE: $crate::BaseDimension = $crate::BaseDimension::new(
                concat!(module_path!(), "::", stringify!($name)),
                $symbol,
            );
        }

        impl $crate::Unit for $name {
            const QUANTITIES: &'static [$crate::Quantity] =
                &[$crate::Quantity::basic(<$name as $crate::BasicUnit>::BASE, 1)];
            const SYMBOL: &'static str = $symbol;
            const NAME: &'static str = $crate::__unit_name!($name $(, $full)?);
        }
    };
}

/// Declare a derived unit from powers of previously declared units
///
/// Terms are written `Unit^power` with a non-zero integer power; their
/// order does not matter. An optional symbol follows the name.
///
/// ```
/// use sipp::si::{Kilogram, Meter, Second};
///
/// sipp::unit! {
///     /// Linear momentum
///     pub Momentum: "kg·m/s" = [Kilogram^1, Meter^1, Second^-1]
/// }
///
/// use sipp::Unit;
/// assert_eq!(Momentum::DIMENSION.len(), 3);
/// assert_eq!(Momentum::SYMBOL, "kg·m/s");
/// ```
#[macro_export]
macro_rules! unit {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident $(: $symbol:literal $(, $full:literal)?)? = [$($unit:ident ^ $power:literal),* $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::Unit for $name {
            const QUANTITIES: &'static [$crate::Quantity] =
                &[$($crate::Quantity::of::<$unit>($power)),*];
            $(const SYMBOL: &'static str = $symbol;)?
            const NAME: &'static str = $crate::__unit_name!($name $($(, $full)?)?);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __unit_name {
    ($name:ident) => {
        stringify!($name)
    };
    ($name:ident, $full:literal) => {
        $full
    };
}
