//! SI basic units

crate::basic_unit! {
    /// Length
    pub Meter: "m", "metre"
}

crate::basic_unit! {
    /// Mass
    pub Kilogram: "kg", "kilogram"
}

crate::basic_unit! {
    /// Time
    pub Second: "s", "second"
}

crate::basic_unit! {
    /// Electric current
    pub Ampere: "A", "ampere"
}

crate::basic_unit! {
    /// Thermodynamic temperature
    pub Kelvin: "K", "kelvin"
}

crate::basic_unit! {
    /// Amount of substance
    pub Mole: "mol", "mole"
}

crate::basic_unit! {
    /// Luminous intensity
    pub Candela: "cd", "candela"
}
