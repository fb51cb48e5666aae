//! Unit registry for dimensions declared at runtime

use rustc_hash::FxHashMap;
use tracing::debug;

use super::error::UnitError;
use super::measure::DynamicMeasure;
use super::parse::{self, is_valid_name};
use super::signature::Signature;
use crate::dimension::Dimension;
use crate::si;
use crate::Unit;

/// Name → canonical signature table
///
/// Derived units may only refer to units that are already registered, so
/// the table can never contain a cyclic definition. Each unit is unfolded
/// once, when it is registered.
///
/// Basic dimensions registered by name are keyed by that name. Units taken
/// from static types keep their [`BaseDimension::key`], so expressions over
/// them agree with [`Measure`](crate::Measure) types.
///
/// [`BaseDimension::key`]: crate::BaseDimension::key
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: FxHashMap<String, Signature>,
}

impl UnitRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the SI basic and derived units
    pub fn with_si() -> Self {
        let mut registry = Self::new();
        let units: [(&str, Dimension); 22] = [
            ("m", si::Meter::DIMENSION),
            ("kg", si::Kilogram::DIMENSION),
            ("s", si::Second::DIMENSION),
            ("A", si::Ampere::DIMENSION),
            ("K", si::Kelvin::DIMENSION),
            ("mol", si::Mole::DIMENSION),
            ("cd", si::Candela::DIMENSION),
            ("Hz", si::Hertz::DIMENSION),
            ("N", si::Newton::DIMENSION),
            ("Pa", si::Pascal::DIMENSION),
            ("J", si::Joule::DIMENSION),
            ("W", si::Watt::DIMENSION),
            ("C", si::Coulomb::DIMENSION),
            ("V", si::Volt::DIMENSION),
            ("Ω", si::Ohm::DIMENSION),
            ("ohm", si::Ohm::DIMENSION),
            (si::SquareMeter::SYMBOL, si::SquareMeter::DIMENSION),
            (si::CubicMeter::SYMBOL, si::CubicMeter::DIMENSION),
            ("m2", si::SquareMeter::DIMENSION),
            ("m3", si::CubicMeter::DIMENSION),
            ("mps", si::MeterPerSecond::DIMENSION),
            ("mps2", si::MeterPerSecondSquared::DIMENSION),
        ];
        for (name, dimension) in units {
            registry.insert(name, Signature::from(dimension));
        }
        registry
    }

    /// Register a new basic dimension
    pub fn register_basic(&mut self, name: &str) -> Result<Signature, UnitError> {
        self.check_new_name(name)?;
        let sig = Signature::basic(name);
        self.insert(name, sig.clone());
        Ok(sig)
    }

    /// Register the canonical form of a static unit under `name`
    ///
    /// ```
    /// use sipp::dynamic::{DynamicMeasure, UnitRegistry};
    /// use sipp::Measure;
    ///
    /// sipp::basic_unit! { pub Furlong: "fur" }
    ///
    /// let mut registry = UnitRegistry::new();
    /// registry.register_static::<Furlong>("fur")?;
    /// let parsed = registry.measure(3.0, "fur")?;
    /// assert_eq!(parsed, DynamicMeasure::from(Measure::<f64, Furlong>::new(3.0)));
    /// # Ok::<(), sipp::dynamic::UnitError>(())
    /// ```
    pub fn register_static<U: Unit>(&mut self, name: &str) -> Result<Signature, UnitError> {
        self.check_new_name(name)?;
        let sig = Signature::from(U::DIMENSION);
        self.insert(name, sig.clone());
        Ok(sig)
    }

    /// Register a derived unit from powers of registered units
    ///
    /// ```
    /// use sipp::dynamic::UnitRegistry;
    ///
    /// let mut registry = UnitRegistry::new();
    /// registry.register_basic("m")?;
    /// registry.register_basic("s")?;
    /// registry.register_derived("v", &[("m", 1), ("s", -1)])?;
    /// let a = registry.register_derived("a", &[("v", 1), ("s", -1)])?;
    /// assert_eq!(a.power_of("s"), -2);
    /// # Ok::<(), sipp::dynamic::UnitError>(())
    /// ```
    pub fn register_derived(
        &mut self,
        name: &str,
        quantities: &[(&str, i32)],
    ) -> Result<Signature, UnitError> {
        self.check_new_name(name)?;
        let unfolded = self.unfold(quantities)?;
        let sig = Signature::from_factors(unfolded)?;
        self.insert(name, sig.clone());
        Ok(sig)
    }

    /// Register a derived unit from a unit expression such as `kg*m/s^2`
    pub fn define(&mut self, name: &str, expr: &str) -> Result<Signature, UnitError> {
        self.check_new_name(name)?;
        let sig = self.parse(expr)?;
        self.insert(name, sig.clone());
        Ok(sig)
    }

    /// Evaluate a unit expression
    pub fn parse(&self, expr: &str) -> Result<Signature, UnitError> {
        parse::parse(self, expr)
    }

    /// A measure of `value` in the unit described by `expr`
    pub fn measure(&self, value: f64, expr: &str) -> Result<DynamicMeasure, UnitError> {
        Ok(DynamicMeasure::new(value, self.parse(expr)?))
    }

    pub fn lookup(&self, name: &str) -> Option<&Signature> {
        self.units.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.units.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Expand every referenced unit into its basic factors, scaling powers
    fn unfold(&self, quantities: &[(&str, i32)]) -> Result<Vec<(String, String, i32)>, UnitError> {
        let mut bag = Vec::new();
        for &(unit, power) in quantities {
            if power == 0 {
                return Err(UnitError::ZeroPower {
                    name: unit.to_string(),
                });
            }
            let sig = self.lookup(unit).ok_or_else(|| UnitError::UnknownUnit {
                name: unit.to_string(),
            })?;
            for (key, symbol, base_power) in sig.iter() {
                let scaled =
                    base_power
                        .checked_mul(power)
                        .ok_or_else(|| UnitError::ExponentOverflow {
                            dimension: symbol.to_string(),
                        })?;
                bag.push((key.to_string(), symbol.to_string(), scaled));
            }
        }
        Ok(bag)
    }

    fn check_new_name(&self, name: &str) -> Result<(), UnitError> {
        if !is_valid_name(name) {
            return Err(UnitError::InvalidName {
                name: name.to_string(),
            });
        }
        if self.contains(name) {
            return Err(UnitError::DuplicateUnit {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn insert(&mut self, name: &str, sig: Signature) {
        debug!(unit = name, signature = %sig, "registered unit");
        self.units.insert(name.to_string(), sig);
    }
}
