//! Unit identifier resolution and conversion.
//!
//! The resolver is the only way the rest of the workspace reaches uom. It is
//! constructed once at startup and shared by reference.

use std::collections::HashMap;

use crate::units::{Measure, UNIT_CATALOG, Unit, UnitDef};
use crate::units::Real;
use crate::{UcResult, UnitError};

#[derive(Debug, Clone)]
pub struct UnitResolver {
    /// Exact ids and symbols
    exact: HashMap<&'static str, Unit>,
    /// Lowercased ids, symbols and aliases
    folded: HashMap<String, Unit>,
}

impl Default for UnitResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitResolver {
    pub fn new() -> Self {
        let mut exact = HashMap::new();
        let mut folded = HashMap::new();

        for def in &UNIT_CATALOG {
            exact.insert(def.id, def.unit);
            exact.insert(def.symbol, def.unit);
        }
        for def in &UNIT_CATALOG {
            let names = [def.id, def.symbol].into_iter().chain(def.aliases.iter().copied());
            for name in names {
                // First writer wins on case-folded collisions
                folded.entry(name.to_lowercase()).or_insert(def.unit);
            }
        }

        Self { exact, folded }
    }

    /// Resolve an identifier, symbol or alias to a unit.
    pub fn resolve(&self, token: &str) -> UcResult<Unit> {
        let trimmed = token.trim();
        let unit = self
            .exact
            .get(trimmed)
            .or_else(|| self.folded.get(&trimmed.to_lowercase()))
            .copied()
            .ok_or_else(|| UnitError::UnknownUnit {
                unit: token.to_string(),
            })?;
        tracing::trace!(token, unit = unit.id(), "resolved unit");
        Ok(unit)
    }

    pub fn lookup(&self, token: &str) -> Option<&'static UnitDef> {
        self.resolve(token).ok().map(Unit::def)
    }

    /// Build a quantity of `value` in the unit named by `unit`.
    pub fn quantity(&self, value: Real, unit: &str) -> UcResult<Measure> {
        let value = ensure_finite(value, "input value")?;
        Ok(Measure::new(value, self.resolve(unit)?))
    }

    /// Convert `value` from one named unit to another.
    pub fn convert(&self, value: Real, from_unit: &str, to_unit: &str) -> UcResult<Real> {
        let quantity = self.quantity(value, from_unit)?;
        let target = self.resolve(to_unit)?;
        ensure_finite(quantity.get(target)?, "converted value")
    }
}

fn ensure_finite(value: Real, what: &'static str) -> UcResult<Real> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(UnitError::NonFinite { what, value })
    }
}

/// Absolute plus relative closeness, shared by the test modules below.
#[cfg(test)]
fn close(a: Real, b: Real, abs: Real, rel: Real) -> bool {
    let diff = (a - b).abs();
    diff <= abs || diff <= rel * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Dimension;

    fn approx(a: Real, b: Real) -> bool {
        close(a, b, 1e-4, 1e-6)
    }

    #[test]
    fn resolves_ids_symbols_and_aliases() {
        let r = UnitResolver::new();
        assert_eq!(r.resolve("foot").unwrap(), Unit::Foot);
        assert_eq!(r.resolve("ft").unwrap(), Unit::Foot);
        assert_eq!(r.resolve("Feet").unwrap(), Unit::Foot);
        assert_eq!(r.resolve(" mph ").unwrap(), Unit::MilePerHour);
        assert_eq!(r.resolve("°F").unwrap(), Unit::Fahrenheit);
        assert_eq!(r.resolve("degC").unwrap(), Unit::Celsius);
    }

    #[test]
    fn exact_symbols_beat_case_folding() {
        let r = UnitResolver::new();
        assert_eq!(r.resolve("K").unwrap(), Unit::Kelvin);
        assert_eq!(r.resolve("L").unwrap(), Unit::Liter);
        assert_eq!(r.resolve("m").unwrap(), Unit::Meter);
    }

    #[test]
    fn unknown_unit_is_reported() {
        let r = UnitResolver::new();
        assert_eq!(
            r.resolve("furlong").unwrap_err(),
            UnitError::UnknownUnit {
                unit: "furlong".to_string()
            }
        );
        assert!(r.lookup("").is_none());
    }

    #[test]
    fn reference_conversions() {
        let r = UnitResolver::new();
        assert!(approx(r.convert(5.0, "foot", "meter").unwrap(), 1.524));
        assert!(approx(r.convert(32.0, "celsius", "fahrenheit").unwrap(), 89.6));
        assert!(approx(r.convert(100.0, "kelvin", "celsius").unwrap(), -173.15));
        assert!(approx(r.convert(1.0, "gallon", "liter").unwrap(), 3.785_411_784));
        assert!(approx(
            r.convert(60.0, "mile_per_hour", "kilometer_per_hour").unwrap(),
            96.560_64
        ));
        assert!(approx(r.convert(1.0, "btu", "joule").unwrap(), 1055.056));
        assert!(approx(r.convert(1.0, "calorie", "joule").unwrap(), 4.184));
        assert!(approx(r.convert(1.0, "ton", "pound").unwrap(), 2000.0));
    }

    #[test]
    fn incompatible_dimensions_fail() {
        let r = UnitResolver::new();
        assert_eq!(
            r.convert(1.0, "meter", "kilogram").unwrap_err(),
            UnitError::IncompatibleDimensions {
                from: Dimension::Length,
                to: Dimension::Mass,
            }
        );
    }

    #[test]
    fn non_finite_input_fails() {
        let r = UnitResolver::new();
        assert!(matches!(
            r.convert(Real::NAN, "meter", "foot"),
            Err(UnitError::NonFinite { .. })
        ));
        assert!(matches!(
            r.convert(Real::INFINITY, "meter", "foot"),
            Err(UnitError::NonFinite { .. })
        ));
    }

    #[test]
    fn electron_volt_resolves_and_converts() {
        let r = UnitResolver::new();
        assert_eq!(r.resolve("eV").unwrap(), Unit::ElectronVolt);
        assert_eq!(r.resolve("electron_volts").unwrap(), Unit::ElectronVolt);
        let joules = r.convert(1.0, "electron_volt", "joule").unwrap();
        assert!(close(joules, 1.602_176_634e-19, 0.0, 1e-9), "{joules}");
    }

    #[test]
    fn finite_values_pass_through() {
        assert_eq!(ensure_finite(-40.0, "input value").unwrap(), -40.0);
        let err = ensure_finite(Real::NEG_INFINITY, "input value").unwrap_err();
        assert!(err.to_string().starts_with("Non-finite numeric value for input value"));
    }

    #[test]
    fn closeness_scales_with_magnitude() {
        assert!(close(9.46e15, 9.46e15 + 1.0, 1e-12, 1e-9));
        assert!(!close(-173.15, -173.0, 1e-12, 1e-9));
        assert!(close(0.0, 1e-13, 1e-12, 0.0));
    }

    #[test]
    fn overflowing_result_fails() {
        let r = UnitResolver::new();
        assert!(matches!(
            r.convert(Real::MAX, "light_year", "inch"),
            Err(UnitError::NonFinite {
                what: "converted value",
                ..
            })
        ));
    }
}
