//! Length unit conversion and display rounding
//!
//! Meters are the canonical unit; every other unit converts through a
//! fixed multiplicative factor.

/// Meters per kilometer
pub const METERS_KILOMETERS: f64 = 1000.0;
/// Meters per foot
pub const METERS_FEET: f64 = 0.3048;
/// Meters per yard
pub const METERS_YARDS: f64 = 0.9144;
/// Meters per statute mile
pub const METERS_MILES: f64 = 1609.344;
/// Meters per nautical mile
pub const METERS_NAUTICAL_MILES: f64 = 1852.0;

/// Fractional digits kept when rounding coordinates for display
///
/// Six digits give about 0.11 m of resolution, which is precise enough
/// for any display use in the application.
pub const DECIMAL_PRECISION: usize = 6;

/// A unit a measurement magnitude can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Meters,
    Kilometers,
    Feet,
    Yards,
    Miles,
    NauticalMiles,
}

impl LengthUnit {
    /// Meters per one of this unit
    pub fn factor(&self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Kilometers => METERS_KILOMETERS,
            LengthUnit::Feet => METERS_FEET,
            LengthUnit::Yards => METERS_YARDS,
            LengthUnit::Miles => METERS_MILES,
            LengthUnit::NauticalMiles => METERS_NAUTICAL_MILES,
        }
    }

    /// Name used for this unit in user-facing text
    pub fn name(&self) -> &'static str {
        match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Kilometers => "kilometers",
            LengthUnit::Feet => "feet",
            LengthUnit::Yards => "yards",
            LengthUnit::Miles => "miles",
            LengthUnit::NauticalMiles => "nautical miles",
        }
    }

    /// Resolve a unit name, treating anything unrecognized as meters
    ///
    /// Unknown names fall back to the canonical unit so values pass
    /// through conversion unchanged.
    pub fn from_name(name: &str) -> LengthUnit {
        match name {
            "kilometers" => LengthUnit::Kilometers,
            "feet" => LengthUnit::Feet,
            "yards" => LengthUnit::Yards,
            "miles" => LengthUnit::Miles,
            "nautical miles" => LengthUnit::NauticalMiles,
            _ => LengthUnit::Meters,
        }
    }

    /// Convert a magnitude in this unit to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        value * self.factor()
    }

    /// Convert a magnitude in meters to this unit
    pub fn from_meters(&self, meters: f64) -> f64 {
        meters / self.factor()
    }
}

/// Round an altitude to the nearest whole meter
pub fn round_altitude(value: f64) -> f64 {
    value.round()
}

/// Round a coordinate component to display precision
///
/// Goes through a formatted string and back to strip the floating-point
/// noise a plain multiply-round-divide would leave behind.
pub fn round_coordinate(value: f64) -> f64 {
    format!("{:.*}", DECIMAL_PRECISION, value)
        .parse()
        .unwrap_or(value)
}
