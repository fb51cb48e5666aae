//! Runtime-checked dimensions
//!
//! The static layer rejects dimensional errors while compiling. Units that
//! only become known while the program runs (read from a configuration
//! file, typed by a user) go through this module instead: a
//! [`UnitRegistry`] unfolds and simplifies their definitions into
//! [`Signature`]s, and [`DynamicMeasure`] checks every operation, reporting
//! failures as [`UnitError`] diagnostics.
//!
//! ```
//! use sipp::dynamic::UnitRegistry;
//!
//! let mut registry = UnitRegistry::with_si();
//! registry.define("speed", "m/s")?;
//!
//! let distance = registry.measure(100.0, "m")?;
//! let time = registry.measure(9.58, "s")?;
//! let speed = distance.checked_div(&time)?;
//! assert_eq!(speed.signature(), registry.lookup("speed").unwrap());
//!
//! assert!(distance.checked_add(&time).is_err());
//! # Ok::<(), sipp::dynamic::UnitError>(())
//! ```

mod error;
mod measure;
mod parse;
mod registry;
mod signature;

pub use error::{ArithmeticOp, UnitError};
pub use measure::DynamicMeasure;
pub use registry::UnitRegistry;
pub use signature::Signature;
