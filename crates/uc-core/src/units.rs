// uc-core/src/units.rs

use core::fmt;

use uom::si::f64::{
    Energy as UomEnergy, Length as UomLength, Mass as UomMass,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
    Volume as UomVolume,
};
use uom::si::{energy, length, mass, thermodynamic_temperature, velocity, volume};

use crate::{UcResult, UnitError};

/// Floating point type used for every magnitude.
pub type Real = f64;

// Public canonical quantity types (SI, f64)
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Temperature = UomThermodynamicTemperature;
pub type Volume = UomVolume;
pub type Velocity = UomVelocity;
pub type Energy = UomEnergy;

/// Physical dimension a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Length,
    Mass,
    Temperature,
    Volume,
    Velocity,
    Energy,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::Mass => write!(f, "mass"),
            Self::Temperature => write!(f, "temperature"),
            Self::Volume => write!(f, "volume"),
            Self::Velocity => write!(f, "velocity"),
            Self::Energy => write!(f, "energy"),
        }
    }
}

/// Every unit the resolver knows how to hand to uom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Meter,
    Foot,
    Inch,
    Mile,
    Kilometer,
    LightYear,
    Kilogram,
    Gram,
    Pound,
    Ounce,
    Ton,
    Celsius,
    Fahrenheit,
    Kelvin,
    Liter,
    Gallon,
    CubicMeter,
    CubicInch,
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    Joule,
    Calorie,
    Btu,
    ElectronVolt,
}

impl Unit {
    /// Catalog entry for this unit.
    pub fn def(self) -> &'static UnitDef {
        // UNIT_CATALOG holds exactly one entry per variant, in declaration order
        &UNIT_CATALOG[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.def().id
    }

    pub fn dimension(self) -> Dimension {
        self.def().dimension
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitDef {
    pub unit: Unit,
    pub dimension: Dimension,
    /// Identifier used by the category registry (e.g. "mile_per_hour").
    pub id: &'static str,
    pub symbol: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

impl UnitDef {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.to_lowercase().contains(&query)
            || self.symbol.to_lowercase().contains(&query)
            || self.display_name.to_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase().contains(&query))
    }
}

pub static UNIT_CATALOG: [UnitDef; 25] = [
    UnitDef {
        unit: Unit::Meter,
        dimension: Dimension::Length,
        id: "meter",
        symbol: "m",
        display_name: "Meter",
        aliases: &["meters", "metre", "metres"],
    },
    UnitDef {
        unit: Unit::Foot,
        dimension: Dimension::Length,
        id: "foot",
        symbol: "ft",
        display_name: "Foot",
        aliases: &["feet"],
    },
    UnitDef {
        unit: Unit::Inch,
        dimension: Dimension::Length,
        id: "inch",
        symbol: "in",
        display_name: "Inch",
        aliases: &["inches"],
    },
    UnitDef {
        unit: Unit::Mile,
        dimension: Dimension::Length,
        id: "mile",
        symbol: "mi",
        display_name: "Mile",
        aliases: &["miles"],
    },
    UnitDef {
        unit: Unit::Kilometer,
        dimension: Dimension::Length,
        id: "kilometer",
        symbol: "km",
        display_name: "Kilometer",
        aliases: &["kilometers", "kilometre", "kilometres"],
    },
    UnitDef {
        unit: Unit::LightYear,
        dimension: Dimension::Length,
        id: "light_year",
        symbol: "ly",
        display_name: "Light Year",
        aliases: &["light_years", "lightyear"],
    },
    UnitDef {
        unit: Unit::Kilogram,
        dimension: Dimension::Mass,
        id: "kilogram",
        symbol: "kg",
        display_name: "Kilogram",
        aliases: &["kilograms", "kilo"],
    },
    UnitDef {
        unit: Unit::Gram,
        dimension: Dimension::Mass,
        id: "gram",
        symbol: "g",
        display_name: "Gram",
        aliases: &["grams"],
    },
    UnitDef {
        unit: Unit::Pound,
        dimension: Dimension::Mass,
        id: "pound",
        symbol: "lb",
        display_name: "Pound",
        aliases: &["pounds", "lbs"],
    },
    UnitDef {
        unit: Unit::Ounce,
        dimension: Dimension::Mass,
        id: "ounce",
        symbol: "oz",
        display_name: "Ounce",
        aliases: &["ounces"],
    },
    UnitDef {
        unit: Unit::Ton,
        dimension: Dimension::Mass,
        id: "ton",
        symbol: "ton",
        display_name: "Ton (short)",
        aliases: &["tons", "short_ton"],
    },
    UnitDef {
        unit: Unit::Celsius,
        dimension: Dimension::Temperature,
        id: "celsius",
        symbol: "°C",
        display_name: "Celsius",
        aliases: &["degc", "degree_celsius"],
    },
    UnitDef {
        unit: Unit::Fahrenheit,
        dimension: Dimension::Temperature,
        id: "fahrenheit",
        symbol: "°F",
        display_name: "Fahrenheit",
        aliases: &["degf", "degree_fahrenheit"],
    },
    UnitDef {
        unit: Unit::Kelvin,
        dimension: Dimension::Temperature,
        id: "kelvin",
        symbol: "K",
        display_name: "Kelvin",
        aliases: &["kelvins"],
    },
    UnitDef {
        unit: Unit::Liter,
        dimension: Dimension::Volume,
        id: "liter",
        symbol: "L",
        display_name: "Liter",
        aliases: &["liters", "litre", "litres"],
    },
    UnitDef {
        unit: Unit::Gallon,
        dimension: Dimension::Volume,
        id: "gallon",
        symbol: "gal",
        display_name: "Gallon (US)",
        aliases: &["gallons"],
    },
    UnitDef {
        unit: Unit::CubicMeter,
        dimension: Dimension::Volume,
        id: "cubic_meter",
        symbol: "m³",
        display_name: "Cubic Meter",
        aliases: &["cubic_meters", "m^3", "m3"],
    },
    UnitDef {
        unit: Unit::CubicInch,
        dimension: Dimension::Volume,
        id: "cubic_inch",
        symbol: "in³",
        display_name: "Cubic Inch",
        aliases: &["cubic_inches", "in^3", "in3"],
    },
    UnitDef {
        unit: Unit::MeterPerSecond,
        dimension: Dimension::Velocity,
        id: "meter_per_second",
        symbol: "m/s",
        display_name: "Meter per Second",
        aliases: &["meters_per_second", "mps"],
    },
    UnitDef {
        unit: Unit::KilometerPerHour,
        dimension: Dimension::Velocity,
        id: "kilometer_per_hour",
        symbol: "km/h",
        display_name: "Kilometer per Hour",
        aliases: &["kilometers_per_hour", "kph", "kmh"],
    },
    UnitDef {
        unit: Unit::MilePerHour,
        dimension: Dimension::Velocity,
        id: "mile_per_hour",
        symbol: "mph",
        display_name: "Mile per Hour",
        aliases: &["miles_per_hour", "mi/h"],
    },
    UnitDef {
        unit: Unit::Joule,
        dimension: Dimension::Energy,
        id: "joule",
        symbol: "J",
        display_name: "Joule",
        aliases: &["joules"],
    },
    UnitDef {
        unit: Unit::Calorie,
        dimension: Dimension::Energy,
        id: "calorie",
        symbol: "cal",
        display_name: "Calorie",
        aliases: &["calories"],
    },
    UnitDef {
        unit: Unit::Btu,
        dimension: Dimension::Energy,
        id: "btu",
        symbol: "BTU",
        display_name: "British Thermal Unit",
        aliases: &["btus", "british_thermal_unit"],
    },
    UnitDef {
        unit: Unit::ElectronVolt,
        dimension: Dimension::Energy,
        id: "electron_volt",
        symbol: "eV",
        display_name: "Electron Volt",
        aliases: &["electron_volts"],
    },
];

/// A magnitude paired with its unit, stored as a uom quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    Length(Length),
    Mass(Mass),
    Temperature(Temperature),
    Volume(Volume),
    Velocity(Velocity),
    Energy(Energy),
}

impl Measure {
    pub fn new(value: Real, unit: Unit) -> Self {
        match unit {
            Unit::Meter => Self::Length(Length::new::<length::meter>(value)),
            Unit::Foot => Self::Length(Length::new::<length::foot>(value)),
            Unit::Inch => Self::Length(Length::new::<length::inch>(value)),
            Unit::Mile => Self::Length(Length::new::<length::mile>(value)),
            Unit::Kilometer => Self::Length(Length::new::<length::kilometer>(value)),
            Unit::LightYear => Self::Length(Length::new::<length::light_year>(value)),
            Unit::Kilogram => Self::Mass(Mass::new::<mass::kilogram>(value)),
            Unit::Gram => Self::Mass(Mass::new::<mass::gram>(value)),
            Unit::Pound => Self::Mass(Mass::new::<mass::pound>(value)),
            Unit::Ounce => Self::Mass(Mass::new::<mass::ounce>(value)),
            Unit::Ton => Self::Mass(Mass::new::<mass::ton_short>(value)),
            Unit::Celsius => Self::Temperature(Temperature::new::<
                thermodynamic_temperature::degree_celsius,
            >(value)),
            Unit::Fahrenheit => Self::Temperature(Temperature::new::<
                thermodynamic_temperature::degree_fahrenheit,
            >(value)),
            Unit::Kelvin => {
                Self::Temperature(Temperature::new::<thermodynamic_temperature::kelvin>(value))
            }
            Unit::Liter => Self::Volume(Volume::new::<volume::liter>(value)),
            Unit::Gallon => Self::Volume(Volume::new::<volume::gallon>(value)),
            Unit::CubicMeter => Self::Volume(Volume::new::<volume::cubic_meter>(value)),
            Unit::CubicInch => Self::Volume(Volume::new::<volume::cubic_inch>(value)),
            Unit::MeterPerSecond => {
                Self::Velocity(Velocity::new::<velocity::meter_per_second>(value))
            }
            Unit::KilometerPerHour => {
                Self::Velocity(Velocity::new::<velocity::kilometer_per_hour>(value))
            }
            Unit::MilePerHour => Self::Velocity(Velocity::new::<velocity::mile_per_hour>(value)),
            Unit::Joule => Self::Energy(Energy::new::<energy::joule>(value)),
            Unit::Calorie => Self::Energy(Energy::new::<energy::calorie>(value)),
            Unit::Btu => Self::Energy(Energy::new::<energy::btu_it>(value)),
            Unit::ElectronVolt => Self::Energy(Energy::new::<energy::electronvolt>(value)),
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Length(_) => Dimension::Length,
            Self::Mass(_) => Dimension::Mass,
            Self::Temperature(_) => Dimension::Temperature,
            Self::Volume(_) => Dimension::Volume,
            Self::Velocity(_) => Dimension::Velocity,
            Self::Energy(_) => Dimension::Energy,
        }
    }

    /// Magnitude of this quantity expressed in `unit`.
    pub fn get(&self, unit: Unit) -> UcResult<Real> {
        let value = match (self, unit) {
            (Self::Length(q), Unit::Meter) => q.get::<length::meter>(),
            (Self::Length(q), Unit::Foot) => q.get::<length::foot>(),
            (Self::Length(q), Unit::Inch) => q.get::<length::inch>(),
            (Self::Length(q), Unit::Mile) => q.get::<length::mile>(),
            (Self::Length(q), Unit::Kilometer) => q.get::<length::kilometer>(),
            (Self::Length(q), Unit::LightYear) => q.get::<length::light_year>(),
            (Self::Mass(q), Unit::Kilogram) => q.get::<mass::kilogram>(),
            (Self::Mass(q), Unit::Gram) => q.get::<mass::gram>(),
            (Self::Mass(q), Unit::Pound) => q.get::<mass::pound>(),
            (Self::Mass(q), Unit::Ounce) => q.get::<mass::ounce>(),
            (Self::Mass(q), Unit::Ton) => q.get::<mass::ton_short>(),
            (Self::Temperature(q), Unit::Celsius) => {
                q.get::<thermodynamic_temperature::degree_celsius>()
            }
            (Self::Temperature(q), Unit::Fahrenheit) => {
                q.get::<thermodynamic_temperature::degree_fahrenheit>()
            }
            (Self::Temperature(q), Unit::Kelvin) => q.get::<thermodynamic_temperature::kelvin>(),
            (Self::Volume(q), Unit::Liter) => q.get::<volume::liter>(),
            (Self::Volume(q), Unit::Gallon) => q.get::<volume::gallon>(),
            (Self::Volume(q), Unit::CubicMeter) => q.get::<volume::cubic_meter>(),
            (Self::Volume(q), Unit::CubicInch) => q.get::<volume::cubic_inch>(),
            (Self::Velocity(q), Unit::MeterPerSecond) => q.get::<velocity::meter_per_second>(),
            (Self::Velocity(q), Unit::KilometerPerHour) => {
                q.get::<velocity::kilometer_per_hour>()
            }
            (Self::Velocity(q), Unit::MilePerHour) => q.get::<velocity::mile_per_hour>(),
            (Self::Energy(q), Unit::Joule) => q.get::<energy::joule>(),
            (Self::Energy(q), Unit::Calorie) => q.get::<energy::calorie>(),
            (Self::Energy(q), Unit::Btu) => q.get::<energy::btu_it>(),
            (Self::Energy(q), Unit::ElectronVolt) => q.get::<energy::electronvolt>(),
            _ => {
                return Err(UnitError::IncompatibleDimensions {
                    from: self.dimension(),
                    to: unit.dimension(),
                });
            }
        };
        Ok(value)
    }
}
