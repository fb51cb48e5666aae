//! Canonical dimension signatures
//!
//! A [`Dimension`] is the simplified, fully unfolded form of a unit: a
//! multiset of basic dimensions, each raised to a non-zero integer power.
//! Every operation here is a `const fn`, so a unit type can compute its
//! canonical form once, as an associated constant, while the program is
//! being compiled.
//!
//! Derived dimensions are products of powers of basic ones:
//! - Velocity = L T⁻¹
//! - Force = M L T⁻²
//! - Dimensionless = the empty multiset

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maximum number of distinct basic dimensions in one canonical form
pub const MAX_FACTORS: usize = 16;

/// Entries an unfolded bag holds before it compacts itself
///
/// A full bag merges its entries in place, so only the simplified result is
/// bounded (by [`MAX_FACTORS`]), not the number of quantities unfolded.
pub const MAX_UNFOLDED: usize = 64;

// =============================================================================
// Basic dimensions
// =============================================================================

/// Identity of a basic, non-decomposable dimension (time, length, mass, ...)
///
/// Two basic dimensions are the same if and only if their keys are equal.
/// The [`basic_unit!`](crate::basic_unit) macro derives the key from the
/// module path and type name, which makes it unique per declaration.
#[derive(Clone, Copy)]
pub struct BaseDimension {
    key: &'static str,
    symbol: &'static str,
}

impl BaseDimension {
    /// Placeholder filling unused slots of fixed-capacity storage
    const VACANT: Self = Self { key: "", symbol: "" };

    /// Create a basic dimension from a unique key and a display symbol
    pub const fn new(key: &'static str, symbol: &'static str) -> Self {
        assert!(!key.is_empty(), "basic dimension key must not be empty");
        Self { key, symbol }
    }

    /// The identity key
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// The display symbol
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Identity comparison usable in constant evaluation
    pub const fn same(&self, other: &BaseDimension) -> bool {
        matches!(compare_keys(self.key, other.key), Ordering::Equal)
    }

    const fn order(&self, other: &BaseDimension) -> Ordering {
        compare_keys(self.key, other.key)
    }
}

impl PartialEq for BaseDimension {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for BaseDimension {}

impl Hash for BaseDimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for BaseDimension {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BaseDimension {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(other.key)
    }
}

impl fmt::Debug for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.key)
    }
}

/// Byte-wise key ordering, the same order `str::cmp` produces
const fn compare_keys(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] < b[i] {
            return Ordering::Less;
        }
        if a[i] > b[i] {
            return Ordering::Greater;
        }
        i += 1;
    }
    if a.len() < b.len() {
        Ordering::Less
    } else if a.len() > b.len() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Multiply two exponents, failing constant evaluation on overflow
pub(crate) const fn scale_power(power: i8, by: i8) -> i8 {
    match power.checked_mul(by) {
        Some(p) => p,
        None => panic!("dimension exponent overflows i8"),
    }
}

const fn add_power(a: i8, b: i8) -> i8 {
    match a.checked_add(b) {
        Some(p) => p,
        None => panic!("dimension exponent overflows i8"),
    }
}

// =============================================================================
// Factors
// =============================================================================

/// A basic dimension raised to an integer power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Factor {
    /// The basic dimension
    pub base: BaseDimension,
    /// Its exponent
    pub power: i8,
}

impl Factor {
    const VACANT: Self = Self {
        base: BaseDimension::VACANT,
        power: 0,
    };

    /// Create a factor
    pub const fn new(base: BaseDimension, power: i8) -> Self {
        Self { base, power }
    }
}

// =============================================================================
// Unfolded bag
// =============================================================================

/// Output of unfolding: factors over basic dimensions, duplicates allowed
///
/// Consolidate with [`Unfolded::simplify`] before comparing anything. When
/// the bag runs out of room it merges its entries first, which leaves the
/// simplified form unchanged.
#[derive(Clone, Copy)]
pub struct Unfolded {
    entries: [Factor; MAX_UNFOLDED],
    len: usize,
}

impl Unfolded {
    /// The empty bag
    pub const EMPTY: Self = Self {
        entries: [Factor::VACANT; MAX_UNFOLDED],
        len: 0,
    };

    /// Append one factor; zero powers are ignored
    pub const fn push(self, factor: Factor) -> Self {
        if factor.power == 0 {
            return self;
        }
        let mut bag = if self.len == MAX_UNFOLDED {
            self.compacted()
        } else {
            self
        };
        bag.entries[bag.len] = factor;
        bag.len += 1;
        bag
    }

    /// Append every factor of `dimension`, each power multiplied by `power`
    pub const fn extend(self, dimension: &Dimension, power: i8) -> Self {
        let mut bag = self;
        let mut i = 0;
        while i < dimension.len {
            let factor = dimension.factors[i];
            bag = bag.push(Factor::new(factor.base, scale_power(factor.power, power)));
            i += 1;
        }
        bag
    }

    /// Number of entries, duplicates included unless the bag was compacted
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if nothing was unfolded
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The raw entries
    pub fn entries(&self) -> &[Factor] {
        &self.entries[..self.len]
    }

    /// Merge entries with the same basic dimension, dropping zero sums
    ///
    /// The result does not depend on the order of the entries.
    pub const fn simplify(&self) -> Dimension {
        let mut out = Dimension::DIMENSIONLESS;
        let mut i = 0;
        while i < self.len {
            out = out.merge(self.entries[i]);
            i += 1;
        }
        out.sorted()
    }

    // At most MAX_FACTORS entries survive, so a compacted bag always has room.
    const fn compacted(&self) -> Self {
        let dim = self.simplify();
        let mut bag = Self::EMPTY;
        while bag.len < dim.len {
            bag.entries[bag.len] = dim.factors[bag.len];
            bag.len += 1;
        }
        bag
    }
}

impl fmt::Debug for Unfolded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}

// =============================================================================
// Canonical form
// =============================================================================

/// Canonical dimension: each basic dimension at most once, no zero powers,
/// factors sorted by key
#[derive(Clone, Copy)]
pub struct Dimension {
    factors: [Factor; MAX_FACTORS],
    len: usize,
}

impl Dimension {
    /// Dimensionless (pure number)
    pub const DIMENSIONLESS: Self = Self {
        factors: [Factor::VACANT; MAX_FACTORS],
        len: 0,
    };

    /// A single basic dimension to the first power
    pub const fn basic(base: BaseDimension) -> Self {
        let mut dim = Self::DIMENSIONLESS;
        dim.factors[0] = Factor::new(base, 1);
        dim.len = 1;
        dim
    }

    /// Number of distinct basic dimensions
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`Dimension::is_dimensionless`]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if dimensionless
    pub const fn is_dimensionless(&self) -> bool {
        self.len == 0
    }

    /// The factors, sorted by key
    pub fn factors(&self) -> &[Factor] {
        &self.factors[..self.len]
    }

    /// Exponent of `base`, zero if absent
    pub const fn power_of(&self, base: &BaseDimension) -> i8 {
        let mut i = 0;
        while i < self.len {
            if self.factors[i].base.same(base) {
                return self.factors[i].power;
            }
            i += 1;
        }
        0
    }

    /// True if `factor` appears with exactly this base and power
    pub const fn contains(&self, factor: &Factor) -> bool {
        self.power_of(&factor.base) == factor.power && factor.power != 0
    }

    // ==========================================================================
    // Operations
    // ==========================================================================

    /// Multiply dimensions (add exponents)
    pub const fn mul(&self, other: &Dimension) -> Dimension {
        Unfolded::EMPTY.extend(self, 1).extend(other, 1).simplify()
    }

    /// Divide dimensions (subtract exponents)
    pub const fn div(&self, other: &Dimension) -> Dimension {
        Unfolded::EMPTY.extend(self, 1).extend(other, -1).simplify()
    }

    /// Reciprocal (negate all exponents)
    pub const fn recip(&self) -> Dimension {
        Unfolded::EMPTY.extend(self, -1).simplify()
    }

    /// Raise to an integer power (multiply all exponents)
    pub const fn pow(&self, n: i8) -> Dimension {
        Unfolded::EMPTY.extend(self, n).simplify()
    }

    // ==========================================================================
    // Predicates
    // ==========================================================================

    /// The assignability predicate
    ///
    /// Equal cardinality, and every factor of `other` appears with the same
    /// base and power in `self`. Declaration order never matters.
    pub const fn is_assignable(&self, other: &Dimension) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut i = 0;
        while i < other.len {
            if !self.contains(&other.factors[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    // ==========================================================================
    // Internal
    // ==========================================================================

    const fn merge(self, factor: Factor) -> Self {
        let mut dim = self;
        let mut i = 0;
        while i < dim.len {
            if dim.factors[i].base.same(&factor.base) {
                let power = add_power(dim.factors[i].power, factor.power);
                if power == 0 {
                    return dim.remove(i);
                }
                dim.factors[i].power = power;
                return dim;
            }
            i += 1;
        }
        assert!(dim.len < MAX_FACTORS, "unit has too many basic dimensions");
        dim.factors[dim.len] = factor;
        dim.len += 1;
        dim
    }

    const fn remove(self, index: usize) -> Self {
        let mut dim = self;
        let mut i = index;
        while i + 1 < dim.len {
            dim.factors[i] = dim.factors[i + 1];
            i += 1;
        }
        dim.len -= 1;
        dim.factors[dim.len] = Factor::VACANT;
        dim
    }

    /// Insertion sort by key; canonical forms are tiny
    const fn sorted(self) -> Self {
        let mut dim = self;
        let mut i = 1;
        while i < dim.len {
            let current = dim.factors[i];
            let mut j = i;
            while j > 0 && matches!(dim.factors[j - 1].base.order(&current.base), Ordering::Greater)
            {
                dim.factors[j] = dim.factors[j - 1];
                j -= 1;
            }
            dim.factors[j] = current;
            i += 1;
        }
        dim
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.is_assignable(other)
    }
}

impl Eq for Dimension {}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.factors().hash(state);
    }
}

impl fmt::Debug for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.factors().iter().map(|fac| (fac.base.symbol(), fac.power)))
            .finish()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_factors(
            f,
            self.factors()
                .iter()
                .map(|fac| (fac.base.symbol(), i32::from(fac.power))),
        )
    }
}

/// Render factors as `num / den`, e.g. `M L / T²`; `1` when empty
pub(crate) fn write_factors<'a>(
    f: &mut fmt::Formatter<'_>,
    factors: impl Iterator<Item = (&'a str, i32)>,
) -> fmt::Result {
    let mut num: Vec<String> = Vec::new();
    let mut den: Vec<String> = Vec::new();

    let add_dim = |parts: &mut Vec<String>, name: &str, exp: i32| {
        if exp == 1 {
            parts.push(name.to_string());
        } else {
            parts.push(format!("{}{}", name, superscript(exp)));
        }
    };

    for (name, exp) in factors {
        if exp > 0 {
            add_dim(&mut num, name, exp);
        } else if exp < 0 {
            add_dim(&mut den, name, -exp);
        }
    }

    let num_str = if num.is_empty() {
        "1".to_string()
    } else {
        num.join(" ")
    };

    if den.is_empty() {
        write!(f, "{}", num_str)
    } else {
        write!(f, "{} / {}", num_str, den.join(" "))
    }
}

/// Convert integer to superscript string
fn superscript(n: i32) -> String {
    let digits: Vec<char> = n.unsigned_abs().to_string().chars().collect();
    let mut result = String::new();

    for d in digits {
        result.push(match d {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            _ => d,
        });
    }

    if n < 0 {
        format!("⁻{}", result)
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASS: BaseDimension = BaseDimension::new("test::mass", "M");
    const LENGTH: BaseDimension = BaseDimension::new("test::length", "L");
    const TIME: BaseDimension = BaseDimension::new("test::time", "T");

    const VELOCITY: Dimension = Dimension::basic(LENGTH).div(&Dimension::basic(TIME));
    const ACCELERATION: Dimension = VELOCITY.div(&Dimension::basic(TIME));
    const FORCE: Dimension = ACCELERATION.mul(&Dimension::basic(MASS));

    #[test]
    fn test_dimension_mul() {
        assert_eq!(FORCE.len(), 3);
        assert_eq!(FORCE.power_of(&MASS), 1);
        assert_eq!(FORCE.power_of(&LENGTH), 1);
        assert_eq!(FORCE.power_of(&TIME), -2);
    }

    #[test]
    fn test_dimension_div() {
        let mass = FORCE.div(&ACCELERATION);
        assert_eq!(mass, Dimension::basic(MASS));
    }

    #[test]
    fn test_recip() {
        let freq = Dimension::basic(TIME).recip();
        assert_eq!(freq.power_of(&TIME), -1);
        assert!(freq.mul(&Dimension::basic(TIME)).is_dimensionless());
    }

    #[test]
    fn test_power() {
        let volume = Dimension::basic(LENGTH).pow(3);
        assert_eq!(volume.power_of(&LENGTH), 3);
        assert!(VELOCITY.pow(0).is_dimensionless());
    }

    #[test]
    fn test_zero_power_elimination() {
        let bag = Unfolded::EMPTY
            .push(Factor::new(LENGTH, 1))
            .push(Factor::new(TIME, -1))
            .push(Factor::new(LENGTH, -1));
        assert_eq!(bag.len(), 3);

        let simplified = bag.simplify();
        assert_eq!(simplified.len(), 1);
        assert_eq!(simplified.power_of(&LENGTH), 0);
        assert_eq!(simplified.power_of(&TIME), -1);
    }

    #[test]
    fn test_simplify_is_order_independent() {
        let a = Unfolded::EMPTY
            .push(Factor::new(TIME, -2))
            .push(Factor::new(MASS, 1))
            .push(Factor::new(LENGTH, 1))
            .simplify();
        let b = Unfolded::EMPTY
            .push(Factor::new(LENGTH, 1))
            .push(Factor::new(TIME, -1))
            .push(Factor::new(MASS, 1))
            .push(Factor::new(TIME, -1))
            .simplify();
        assert_eq!(a, b);
        assert_eq!(a, FORCE);
        // Sorted by key: length < mass < time
        let symbols: Vec<&str> = a.factors().iter().map(|f| f.base.symbol()).collect();
        assert_eq!(symbols, ["L", "M", "T"]);
    }

    #[test]
    fn test_full_bag_compacts() {
        const WIDE: Dimension = Dimension::basic(LENGTH)
            .mul(&Dimension::basic(MASS))
            .div(&Dimension::basic(TIME));
        let mut bag = Unfolded::EMPTY;
        for _ in 0..MAX_UNFOLDED {
            bag = bag.extend(&WIDE, 1);
        }
        assert!(bag.len() <= MAX_UNFOLDED);

        let dim = bag.simplify();
        assert_eq!(dim.len(), 3);
        assert_eq!(dim.power_of(&LENGTH), MAX_UNFOLDED as i8);
        assert_eq!(dim.power_of(&TIME), -(MAX_UNFOLDED as i8));
    }

    #[test]
    fn test_assignability() {
        assert!(FORCE.is_assignable(&FORCE));
        assert!(!FORCE.is_assignable(&ACCELERATION));
        assert!(!VELOCITY.is_assignable(&Dimension::basic(LENGTH)));
        assert!(Dimension::DIMENSIONLESS.is_assignable(&VELOCITY.div(&VELOCITY)));
    }

    #[test]
    fn test_same_symbol_different_key() {
        let other_length = BaseDimension::new("elsewhere::length", "L");
        assert!(!Dimension::basic(LENGTH).is_assignable(&Dimension::basic(other_length)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", VELOCITY), "L / T");
        assert_eq!(format!("{}", FORCE), "L M / T²");
        assert_eq!(format!("{}", Dimension::basic(TIME).recip()), "1 / T");
        assert_eq!(format!("{}", Dimension::DIMENSIONLESS), "1");
    }

    #[test]
    fn test_superscript() {
        assert_eq!(superscript(2), "²");
        assert_eq!(superscript(-12), "⁻¹²");
    }
}
