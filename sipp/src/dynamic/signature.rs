//! Owned canonical forms for dimensions only known at runtime

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::UnitError;
use crate::dimension::{write_factors, Dimension};

/// One basic dimension of a signature
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Term {
    symbol: String,
    power: i32,
}

/// A canonical dimension: basic-dimension keys mapped to non-zero powers
///
/// Keys identify a basic dimension; symbols are only used for display.
/// Static dimensions convert with [`BaseDimension::key`] as the key, so two
/// basic units that share a symbol stay apart. Keys are kept sorted, so two
/// signatures are equal exactly when they contain the same factors.
///
/// [`BaseDimension::key`]: crate::BaseDimension::key
#[derive(Debug, Clone, Default)]
pub struct Signature {
    terms: BTreeMap<String, Term>,
}

impl Signature {
    /// The empty signature
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// A single basic dimension to the first power, keyed and shown by `name`
    pub fn basic(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::keyed(name.clone(), name)
    }

    /// A single basic dimension with a key distinct from its symbol
    pub fn keyed(key: impl Into<String>, symbol: impl Into<String>) -> Self {
        let mut terms = BTreeMap::new();
        terms.insert(
            key.into(),
            Term {
                symbol: symbol.into(),
                power: 1,
            },
        );
        Self { terms }
    }

    /// Simplify an unfolded list of `(name, power)` pairs, each name being
    /// both key and symbol
    pub fn from_powers<I, S>(factors: I) -> Result<Self, UnitError>
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Self::from_factors(factors.into_iter().map(|(name, power)| {
            let name = name.into();
            (name.clone(), name, power)
        }))
    }

    /// Simplify an unfolded list of `(key, symbol, power)` triples
    pub fn from_factors<I, K, S>(factors: I) -> Result<Self, UnitError>
    where
        I: IntoIterator<Item = (K, S, i32)>,
        K: Into<String>,
        S: Into<String>,
    {
        let mut sig = Self::default();
        for (key, symbol, power) in factors {
            sig.combine(key.into(), symbol.into(), power)?;
        }
        Ok(sig)
    }

    /// True if no basic dimension is left
    pub fn is_dimensionless(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of distinct basic dimensions
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Same as [`Signature::is_dimensionless`]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Power of the basic dimension with this key; zero if absent
    pub fn power_of(&self, key: &str) -> i32 {
        self.terms.get(key).map_or(0, |term| term.power)
    }

    /// Display symbol of the basic dimension with this key
    pub fn symbol_of(&self, key: &str) -> Option<&str> {
        self.terms.get(key).map(|term| term.symbol.as_str())
    }

    /// `(key, symbol, power)` factors in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, i32)> + '_ {
        self.terms
            .iter()
            .map(|(key, term)| (key.as_str(), term.symbol.as_str(), term.power))
    }

    /// Product: powers of shared keys add, cancelled keys disappear
    pub fn mul(&self, other: &Signature) -> Result<Signature, UnitError> {
        let mut result = self.clone();
        for (key, term) in &other.terms {
            result.combine(key.clone(), term.symbol.clone(), term.power)?;
        }
        Ok(result)
    }

    /// Quotient, `self * other⁻¹`
    pub fn div(&self, other: &Signature) -> Result<Signature, UnitError> {
        self.mul(&other.recip()?)
    }

    /// Reciprocal: every power negated
    pub fn recip(&self) -> Result<Signature, UnitError> {
        self.pow(-1)
    }

    /// Raise every factor to `n`; `n == 0` gives the empty signature
    pub fn pow(&self, n: i32) -> Result<Signature, UnitError> {
        let mut terms = BTreeMap::new();
        if n == 0 {
            return Ok(Self { terms });
        }
        for (key, term) in &self.terms {
            let power = term
                .power
                .checked_mul(n)
                .ok_or_else(|| UnitError::ExponentOverflow {
                    dimension: term.symbol.clone(),
                })?;
            terms.insert(
                key.clone(),
                Term {
                    symbol: term.symbol.clone(),
                    power,
                },
            );
        }
        Ok(Self { terms })
    }

    fn powers(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.terms
            .iter()
            .map(|(key, term)| (key.as_str(), term.power))
    }

    fn combine(&mut self, key: String, symbol: String, power: i32) -> Result<(), UnitError> {
        if power == 0 {
            return Ok(());
        }
        match self.terms.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(Term { symbol, power });
            }
            Entry::Occupied(mut slot) => {
                let merged = slot
                    .get()
                    .power
                    .checked_add(power)
                    .ok_or(UnitError::ExponentOverflow { dimension: symbol })?;
                if merged == 0 {
                    slot.remove();
                } else {
                    slot.get_mut().power = merged;
                }
            }
        }
        Ok(())
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.powers().eq(other.powers())
    }
}

impl Eq for Signature {}

impl Hash for Signature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.terms.len().hash(state);
        for (key, power) in self.powers() {
            key.hash(state);
            power.hash(state);
        }
    }
}

impl From<Dimension> for Signature {
    fn from(dimension: Dimension) -> Self {
        Self::from(&dimension)
    }
}

impl From<&Dimension> for Signature {
    fn from(dimension: &Dimension) -> Self {
        let terms = dimension
            .factors()
            .iter()
            .map(|fac| {
                let term = Term {
                    symbol: fac.base.symbol().to_string(),
                    power: i32::from(fac.power),
                };
                (fac.base.key().to_string(), term)
            })
            .collect();
        Self { terms }
    }
}

// Serialized as a map from key to `{ symbol, power }`.
#[cfg(feature = "serde")]
impl serde::Serialize for Signature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.terms, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Signature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut terms: BTreeMap<String, Term> = serde::Deserialize::deserialize(deserializer)?;
        terms.retain(|_, term| term.power != 0);
        Ok(Self { terms })
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_factors(
            f,
            self.terms
                .values()
                .map(|term| (term.symbol.as_str(), term.power)),
        )
    }
}
