//! Coherent SI derived units

use super::base::{Ampere, Kilogram, Meter, Second};

crate::unit! {
    pub Hertz: "Hz", "hertz" = [Second^-1]
}

crate::unit! {
    pub SquareMeter: "m²", "square metre" = [Meter^2]
}

crate::unit! {
    pub CubicMeter: "m³", "cubic metre" = [Meter^3]
}

crate::unit! {
    pub MeterPerSecond: "m/s", "metre per second" = [Meter^1, Second^-1]
}

crate::unit! {
    pub MeterPerSecondSquared: "m/s²", "metre per second squared" = [MeterPerSecond^1, Second^-1]
}

crate::unit! {
    /// Force: kg·m/s²
    pub Newton: "N", "newton" = [Kilogram^1, MeterPerSecondSquared^1]
}

crate::unit! {
    /// Pressure: N/m²
    pub Pascal: "Pa", "pascal" = [Newton^1, SquareMeter^-1]
}

crate::unit! {
    /// Energy: N·m
    pub Joule: "J", "joule" = [Newton^1, Meter^1]
}

crate::unit! {
    /// Power: J/s
    pub Watt: "W", "watt" = [Joule^1, Second^-1]
}

crate::unit! {
    /// Electric charge: A·s
    pub Coulomb: "C", "coulomb" = [Ampere^1, Second^1]
}

crate::unit! {
    /// Electric potential: W/A
    pub Volt: "V", "volt" = [Watt^1, Ampere^-1]
}

crate::unit! {
    /// Electrical resistance: V/A
    pub Ohm: "Ω", "ohm" = [Volt^1, Ampere^-1]
}
