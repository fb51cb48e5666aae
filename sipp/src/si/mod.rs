//! The International System of Units
//!
//! Seven basic units and the common coherent derived units, each with a
//! `Measure` alias defaulting to `f64`.

mod base;
mod derived;

pub use base::{Ampere, Candela, Kelvin, Kilogram, Meter, Mole, Second};
pub use derived::{
    Coulomb, CubicMeter, Hertz, Joule, MeterPerSecond, MeterPerSecondSquared, Newton, Ohm,
    Pascal, SquareMeter, Volt, Watt,
};

use crate::Measure;

pub type Length<N = f64> = Measure<N, Meter>;
pub type Mass<N = f64> = Measure<N, Kilogram>;
pub type Time<N = f64> = Measure<N, Second>;
pub type Current<N = f64> = Measure<N, Ampere>;
pub type Temperature<N = f64> = Measure<N, Kelvin>;
pub type Amount<N = f64> = Measure<N, Mole>;
pub type Luminosity<N = f64> = Measure<N, Candela>;

pub type Frequency<N = f64> = Measure<N, Hertz>;
pub type Area<N = f64> = Measure<N, SquareMeter>;
pub type Volume<N = f64> = Measure<N, CubicMeter>;
pub type Velocity<N = f64> = Measure<N, MeterPerSecond>;
pub type Acceleration<N = f64> = Measure<N, MeterPerSecondSquared>;
pub type Force<N = f64> = Measure<N, Newton>;
pub type Pressure<N = f64> = Measure<N, Pascal>;
pub type Energy<N = f64> = Measure<N, Joule>;
pub type Power<N = f64> = Measure<N, Watt>;
pub type Charge<N = f64> = Measure<N, Coulomb>;
pub type Voltage<N = f64> = Measure<N, Volt>;
pub type Resistance<N = f64> = Measure<N, Ohm>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{Product, Quotient};
    use crate::{is_assignable, Unit};

    #[test]
    fn test_base_units_are_distinct() {
        const _: () = assert!(!is_assignable::<Meter, Second>());
        const _: () = assert!(!is_assignable::<Kilogram, Mole>());
        assert_eq!(Meter::DIMENSION.len(), 1);
        assert_eq!(Candela::SYMBOL, "cd");
    }

    #[test]
    fn test_derived_dimensions() {
        assert_eq!(format!("{}", Newton::DIMENSION), "kg m / s²");
        assert_eq!(format!("{}", Pascal::DIMENSION), "kg / m s²");
        assert_eq!(format!("{}", Hertz::DIMENSION), "1 / s");
    }

    #[test]
    fn test_derived_relations() {
        const _: () = assert!(is_assignable::<Joule, Product<Newton, Meter>>());
        const _: () = assert!(is_assignable::<Watt, Quotient<Joule, Second>>());
        const _: () = assert!(is_assignable::<Ohm, Quotient<Volt, Ampere>>());
        const _: () = assert!(is_assignable::<Coulomb, Product<Ampere, Second>>());
        const _: () = assert!(is_assignable::<Pascal, Quotient<Joule, CubicMeter>>());
        const _: () = assert!(!is_assignable::<Joule, Watt>());
    }

    #[test]
    fn test_power_from_force_and_velocity() {
        let force: Force = Measure::new(10.0);
        let velocity: Velocity = Measure::new(3.0);
        let power: Power = (force * velocity).into_unit();
        assert_eq!(*power.value(), 30.0);
        assert_eq!(format!("{}", power), "30 W");
    }

    #[test]
    fn test_ohms_law() {
        let current: Current = Measure::new(2.0);
        let resistance: Resistance = Measure::new(5.0);
        let voltage: Voltage = Measure::from_unit(current * resistance);
        assert_eq!(*voltage.value(), 10.0);
    }
}
