//! Dimensional analysis checked at compile time
//!
//! Units are zero-sized marker types. Each declares its dimension as a list
//! of other units raised to non-zero integer powers; the compiler unfolds
//! that list down to basic dimensions and simplifies it into a canonical
//! form. Two units whose canonical forms match are *assignable*: their
//! measures convert, add, subtract and compare freely. Everything else is a
//! compile error.
//!
//! # Key Features
//!
//! - **User-defined basic dimensions**: no fixed set of base quantities
//! - **Nested derived units**: `Force = Acceleration × Mass` where
//!   `Acceleration = Velocity / Time`
//! - **Declaration order is irrelevant**: `[Time^-2, Mass^1, Distance^1]`
//!   and `[Acceleration^1, Mass^1]` are the same unit
//! - **Zero-cost**: a `Measure<f64, U>` is an `f64` at runtime
//! - **Runtime fallback**: the `dynamic` module checks units read at runtime
//!
//! # Example
//!
//! ```
//! use sipp::Measure;
//!
//! sipp::basic_unit! { pub Time: "t" }
//! sipp::basic_unit! { pub Distance: "d" }
//! sipp::basic_unit! { pub Mass: "m" }
//! sipp::unit! { pub Velocity = [Distance^1, Time^-1] }
//! sipp::unit! { pub Acceleration = [Velocity^1, Time^-1] }
//! sipp::unit! { pub Force = [Acceleration^1, Mass^1] }
//!
//! let a: Measure<f64, Acceleration> = Measure::new(1.0);
//! let m: Measure<f64, Mass> = Measure::new(4.0);
//!
//! // The product's unit is computed; it reduces to Force.
//! let f: Measure<f64, Force> = Measure::from_unit(a * m);
//! assert_eq!(f, Measure::<f64, Force>::new(4.0));
//!
//! // The cancelled Time factor makes this a plain Distance.
//! let d: Measure<f64, Distance> = (Measure::<f64, Velocity>::new(3.0) * Measure::<f64, Time>::new(2.0)).into_unit();
//! assert_eq!(*d.value(), 6.0);
//! ```
//!
//! # Rejected at compile time
//!
//! Adding measures of different dimensions:
//!
//! ```compile_fail
//! use sipp::Measure;
//! use sipp::si::{Meter, Second};
//!
//! let d: Measure<f64, Meter> = Measure::new(1.0);
//! let t: Measure<f64, Second> = Measure::new(1.0);
//! let _ = d + t;
//! ```
//!
//! Converting between units that are not assignable:
//!
//! ```compile_fail
//! use sipp::Measure;
//! use sipp::si::{Joule, Newton};
//!
//! let f: Measure<f64, Newton> = Measure::new(1.0);
//! let _: Measure<f64, Joule> = Measure::from_unit(f);
//! ```
//!
//! Comparing a dimensioned measure with a plain number:
//!
//! ```compile_fail
//! use sipp::Measure;
//! use sipp::si::Meter;
//!
//! let d: Measure<f64, Meter> = Measure::new(1.0);
//! let _ = d < 2.0;
//! ```
//!
//! A quantity raised to the power zero:
//!
//! ```compile_fail
//! use sipp::si::Meter;
//!
//! sipp::unit! { Nothing = [Meter^0] }
//!
//! const D: sipp::Dimension = <Nothing as sipp::Unit>::DIMENSION;
//! ```
//!
//! Units defined in terms of each other:
//!
//! ```compile_fail
//! use sipp::{Quantity, Unit};
//!
//! #[derive(Debug, Clone, Copy, Default)]
//! struct Ping;
//! #[derive(Debug, Clone, Copy, Default)]
//! struct Pong;
//!
//! impl Unit for Ping {
//!     const QUANTITIES: &'static [Quantity] = &[Quantity::of::<Pong>(1)];
//! }
//! impl Unit for Pong {
//!     const QUANTITIES: &'static [Quantity] = &[Quantity::of::<Ping>(1)];
//! }
//!
//! const D: sipp::Dimension = Ping::DIMENSION;
//! ```
//!
//! Mixing numeric types without an explicit conversion:
//!
//! ```compile_fail
//! use sipp::Measure;
//! use sipp::si::Meter;
//!
//! let a: Measure<f64, Meter> = Measure::new(1.0);
//! let b: Measure<f32, Meter> = Measure::new(1.0);
//! let _ = a + b;
//! ```

#[macro_use]
mod macros;

pub mod dimension;
pub mod measure;
pub mod si;
pub mod unit;

#[cfg(feature = "dynamic")]
pub mod dynamic;

// Re-exports
pub use dimension::{BaseDimension, Dimension, Factor, Unfolded};
pub use measure::{unit_cast, Arithmetic, Measure, Ratio, WithUnit};
pub use unit::{
    canonical, is_assignable, unfold, BasicUnit, Dimensionless, Inverse, Power, Product,
    Quantity, Quotient, Unit,
};

/// Commonly used items
pub mod prelude {
    pub use crate::measure::{unit_cast, Measure, Ratio, WithUnit};
    pub use crate::unit::{is_assignable, BasicUnit, Dimensionless, Unit};
}
