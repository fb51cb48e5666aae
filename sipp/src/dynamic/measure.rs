//! Measures whose dimension is checked while the program runs

use std::cmp::Ordering;
use std::fmt;

use super::error::{ArithmeticOp, UnitError};
use super::signature::Signature;
use crate::{Measure, Unit};

/// An `f64` value tagged with a runtime signature
///
/// Every operation that the static [`Measure`] rejects at compile time is
/// rejected here with a [`UnitError`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicMeasure {
    value: f64,
    signature: Signature,
}

impl DynamicMeasure {
    pub fn new(value: f64, signature: Signature) -> Self {
        Self { value, signature }
    }

    /// A dimensionless value
    pub fn scalar(value: f64) -> Self {
        Self::new(value, Signature::dimensionless())
    }

    /// Erase the static unit of a measure
    pub fn from_static<N: Into<f64>, U: Unit>(measure: Measure<N, U>) -> Self {
        Self::new(measure.into_value().into(), Signature::from(U::DIMENSION))
    }

    /// Recover a static measure; fails unless the signature matches `U`
    ///
    /// ```
    /// use sipp::dynamic::UnitRegistry;
    /// use sipp::si::Newton;
    ///
    /// let registry = UnitRegistry::with_si();
    /// let force = registry.measure(9.81, "kg*m/s^2")?;
    /// assert_eq!(*force.into_static::<Newton>()?.value(), 9.81);
    /// # Ok::<(), sipp::dynamic::UnitError>(())
    /// ```
    pub fn into_static<U: Unit>(&self) -> Result<Measure<f64, U>, UnitError> {
        let target = Signature::from(U::DIMENSION);
        if self.signature != target {
            return Err(UnitError::DimensionMismatch {
                op: ArithmeticOp::Convert,
                left: self.signature.clone(),
                right: target,
            });
        }
        Ok(Measure::new(self.value))
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn is_dimensionless(&self) -> bool {
        self.signature.is_dimensionless()
    }

    pub fn into_parts(self) -> (f64, Signature) {
        (self.value, self.signature)
    }

    pub fn checked_add(&self, other: &DynamicMeasure) -> Result<DynamicMeasure, UnitError> {
        self.same_signature(other, ArithmeticOp::Add)?;
        Ok(Self::new(self.value + other.value, self.signature.clone()))
    }

    pub fn checked_sub(&self, other: &DynamicMeasure) -> Result<DynamicMeasure, UnitError> {
        self.same_signature(other, ArithmeticOp::Sub)?;
        Ok(Self::new(self.value - other.value, self.signature.clone()))
    }

    /// Compare values; `Ok(None)` if either is NaN
    pub fn checked_cmp(&self, other: &DynamicMeasure) -> Result<Option<Ordering>, UnitError> {
        self.same_signature(other, ArithmeticOp::Compare)?;
        Ok(self.value.partial_cmp(&other.value))
    }

    pub fn checked_mul(&self, other: &DynamicMeasure) -> Result<DynamicMeasure, UnitError> {
        let signature = self.signature.mul(&other.signature)?;
        Ok(Self::new(self.value * other.value, signature))
    }

    pub fn checked_div(&self, other: &DynamicMeasure) -> Result<DynamicMeasure, UnitError> {
        let signature = self.signature.div(&other.signature)?;
        Ok(Self::new(self.value / other.value, signature))
    }

    pub fn recip(&self) -> Result<DynamicMeasure, UnitError> {
        Ok(Self::new(self.value.recip(), self.signature.recip()?))
    }

    pub fn powi(&self, n: i32) -> Result<DynamicMeasure, UnitError> {
        Ok(Self::new(self.value.powi(n), self.signature.pow(n)?))
    }

    /// Multiply the value by a plain number
    pub fn scale(&self, factor: f64) -> DynamicMeasure {
        Self::new(self.value * factor, self.signature.clone())
    }

    fn same_signature(&self, other: &DynamicMeasure, op: ArithmeticOp) -> Result<(), UnitError> {
        if self.signature == other.signature {
            Ok(())
        } else {
            Err(UnitError::DimensionMismatch {
                op,
                left: self.signature.clone(),
                right: other.signature.clone(),
            })
        }
    }
}

impl<N: Into<f64>, U: Unit> From<Measure<N, U>> for DynamicMeasure {
    fn from(measure: Measure<N, U>) -> Self {
        Self::from_static(measure)
    }
}

impl fmt::Display for DynamicMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.signature)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::UnitRegistry;
    use crate::si::{Kilogram, Meter, MeterPerSecondSquared, Newton, Second};
    use crate::{BasicUnit, Product};

    crate::basic_unit! { Distance: "m" }
    crate::basic_unit! { Minute: "m" }

    #[test]
    fn test_from_static_round_trip() {
        let a: Measure<f64, MeterPerSecondSquared> = Measure::new(2.0);
        let m: Measure<f64, Kilogram> = Measure::new(3.0);
        let f = DynamicMeasure::from_static(a * m);
        assert_eq!(f.value(), 6.0);
        assert_eq!(*f.into_static::<Newton>().unwrap().value(), 6.0);
    }

    #[test]
    fn test_into_static_mismatch() {
        let d = DynamicMeasure::from(Measure::<f32, Meter>::new(1.0));
        let err = d.into_static::<Second>().unwrap_err();
        assert!(matches!(
            err,
            UnitError::DimensionMismatch {
                op: ArithmeticOp::Convert,
                ..
            }
        ));
    }

    #[test]
    fn test_shared_symbol_is_not_a_conversion() {
        let d = DynamicMeasure::from_static(Measure::<f64, Distance>::new(2.0));
        assert!(d.into_static::<Meter>().is_err());
        assert!(d.into_static::<Minute>().is_err());
        assert_eq!(*d.into_static::<Distance>().unwrap().value(), 2.0);

        let m = DynamicMeasure::from_static(Measure::<f64, Minute>::new(3.0));
        let product = d.checked_mul(&m).unwrap();
        assert_eq!(product.signature().len(), 2);
        assert_eq!(product.to_string(), "6 m m");
        assert_eq!(
            *product.into_static::<Product<Distance, Minute>>().unwrap().value(),
            6.0
        );
        assert!(d.checked_add(&m).is_err());
    }

    #[test]
    fn test_additive_checks() {
        let registry = UnitRegistry::with_si();
        let a = registry.measure(2.0, "m").unwrap();
        let b = registry.measure(3.0, "m").unwrap();
        let t = registry.measure(1.0, "s").unwrap();

        assert_eq!(a.checked_add(&b).unwrap().value(), 5.0);
        assert_eq!(a.checked_sub(&b).unwrap().value(), -1.0);
        assert_eq!(a.checked_cmp(&b).unwrap(), Some(Ordering::Less));

        let err = a.checked_add(&t).unwrap_err();
        assert_eq!(err.to_string(), "dimension mismatch in addition: `m` vs `s`");
        assert!(a.checked_cmp(&t).is_err());
    }

    #[test]
    fn test_multiplicative_ops() {
        let registry = UnitRegistry::with_si();
        let d = registry.measure(10.0, "m").unwrap();
        let t = registry.measure(2.0, "s").unwrap();

        let v = d.checked_div(&t).unwrap();
        assert_eq!(v.value(), 5.0);
        assert_eq!(v.signature(), &registry.parse("m/s").unwrap());

        let area = d.powi(2).unwrap();
        assert_eq!(area.signature().power_of(Meter::BASE.key()), 2);

        let freq = t.recip().unwrap();
        assert_eq!(freq.value(), 0.5);
        assert_eq!(freq.signature(), registry.lookup("Hz").unwrap());

        let ratio = d.checked_mul(&d.recip().unwrap()).unwrap();
        assert!(ratio.is_dimensionless());
        assert_eq!(ratio.to_string(), "1");
    }

    #[test]
    fn test_display() {
        let registry = UnitRegistry::with_si();
        let f = registry.measure(9.5, "N").unwrap();
        assert_eq!(f.to_string(), "9.5 kg m / s²");
        assert_eq!(DynamicMeasure::scalar(2.0).scale(1.5).to_string(), "3");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let registry = UnitRegistry::with_si();
        let v = registry.measure(1.5, "m/s").unwrap();
        let json = serde_json::to_string(&v).unwrap();
        let expected = format!(
            r#"{{"value":1.5,"signature":{{"{}":{{"symbol":"m","power":1}},"{}":{{"symbol":"s","power":-1}}}}}}"#,
            Meter::BASE.key(),
            Second::BASE.key(),
        );
        assert_eq!(json, expected);
        let back: DynamicMeasure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
        assert_eq!(back.to_string(), "1.5 m / s");
    }
}
