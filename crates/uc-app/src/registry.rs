//! Fixed category -> unit registry.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uc_core::{Dimension, UNIT_CATALOG, UnitDef};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCategory {
    Length,
    Mass,
    Temperature,
    Volume,
    Speed,
    Energy,
}

static CATEGORIES: [UnitCategory; 6] = [
    UnitCategory::Length,
    UnitCategory::Mass,
    UnitCategory::Temperature,
    UnitCategory::Volume,
    UnitCategory::Speed,
    UnitCategory::Energy,
];

/// A worked example shown in the reference text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryExample {
    pub caption: &'static str,
    pub value: f64,
    pub from_unit: &'static str,
    pub to_unit: &'static str,
}

const fn example(
    caption: &'static str,
    value: f64,
    from_unit: &'static str,
    to_unit: &'static str,
) -> CategoryExample {
    CategoryExample {
        caption,
        value,
        from_unit,
        to_unit,
    }
}

static LENGTH_EXAMPLES: [CategoryExample; 2] = [
    example("5 feet to meters", 5.0, "foot", "meter"),
    example("10 kilometers to miles", 10.0, "kilometer", "mile"),
];
static MASS_EXAMPLES: [CategoryExample; 2] = [
    example("10 kg to pounds", 10.0, "kilogram", "pound"),
    example("150 grams to ounces", 150.0, "gram", "ounce"),
];
static TEMPERATURE_EXAMPLES: [CategoryExample; 2] = [
    example("32 celsius to fahrenheit", 32.0, "celsius", "fahrenheit"),
    example("100 kelvin to celsius", 100.0, "kelvin", "celsius"),
];
static VOLUME_EXAMPLES: [CategoryExample; 2] = [
    example("1 gallon to liters", 1.0, "gallon", "liter"),
    example("5 cubic meters to gallons", 5.0, "cubic_meter", "gallon"),
];
static SPEED_EXAMPLES: [CategoryExample; 2] = [
    example("60 mph to km/h", 60.0, "mile_per_hour", "kilometer_per_hour"),
    example("10 m/s to km/h", 10.0, "meter_per_second", "kilometer_per_hour"),
];
static ENERGY_EXAMPLES: [CategoryExample; 2] = [
    example("1000 joules to calories", 1000.0, "joule", "calorie"),
    example("500 BTU to joules", 500.0, "btu", "joule"),
];

impl UnitCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Mass => "Mass",
            Self::Temperature => "Temperature",
            Self::Volume => "Volume",
            Self::Speed => "Speed",
            Self::Energy => "Energy",
        }
    }

    /// Unit identifiers in display order.
    pub fn units(self) -> &'static [&'static str] {
        match self {
            Self::Length => &[
                "meter",
                "foot",
                "inch",
                "mile",
                "kilometer",
                "light_year",
            ],
            Self::Mass => &["kilogram", "gram", "pound", "ounce", "ton"],
            Self::Temperature => &["celsius", "fahrenheit", "kelvin"],
            Self::Volume => &["liter", "gallon", "cubic_meter", "cubic_inch"],
            Self::Speed => &["meter_per_second", "kilometer_per_hour", "mile_per_hour"],
            Self::Energy => &["joule", "calorie", "btu", "electron_volt"],
        }
    }

    pub fn dimension(self) -> Dimension {
        match self {
            Self::Length => Dimension::Length,
            Self::Mass => Dimension::Mass,
            Self::Temperature => Dimension::Temperature,
            Self::Volume => Dimension::Volume,
            Self::Speed => Dimension::Velocity,
            Self::Energy => Dimension::Energy,
        }
    }

    pub fn examples(self) -> &'static [CategoryExample] {
        match self {
            Self::Length => &LENGTH_EXAMPLES,
            Self::Mass => &MASS_EXAMPLES,
            Self::Temperature => &TEMPERATURE_EXAMPLES,
            Self::Volume => &VOLUME_EXAMPLES,
            Self::Speed => &SPEED_EXAMPLES,
            Self::Energy => &ENERGY_EXAMPLES,
        }
    }

    pub fn contains(self, unit_id: &str) -> bool {
        self.units().contains(&unit_id)
    }

    /// First unit of the category, used as the picker default.
    pub fn first_unit(self) -> &'static str {
        self.units()[0]
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UnitCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CATEGORIES
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::UnknownCategory(s.to_string()))
    }
}

pub fn list_categories() -> &'static [UnitCategory] {
    &CATEGORIES
}

pub fn list_units(category: UnitCategory) -> &'static [&'static str] {
    category.units()
}

/// Category a registered unit identifier belongs to.
pub fn category_of(unit_id: &str) -> Option<UnitCategory> {
    CATEGORIES.iter().copied().find(|c| c.contains(unit_id))
}

pub fn unit_info(unit_id: &str) -> Option<&'static UnitDef> {
    UNIT_CATALOG.iter().find(|def| def.id == unit_id)
}

/// Units of `category` matching a free-text query, in display order.
pub fn filter_units(category: UnitCategory, query: &str) -> Vec<&'static UnitDef> {
    category
        .units()
        .iter()
        .filter_map(|id| unit_info(id))
        .filter(|def| def.matches_query(query))
        .collect()
}
