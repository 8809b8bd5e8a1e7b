//! Conversion invoker.
//!
//! Hands a value and two unit identifiers to the dimensional resolver and
//! folds every failure into [`ConversionResult::Failed`]. Nothing here panics
//! or propagates: each request resolves to something displayable.

use uc_core::{Real, UnitError, UnitResolver};

/// One conversion as read from the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest<'a> {
    pub value: Real,
    pub from_unit: &'a str,
    pub to_unit: &'a str,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(value: Real, from_unit: &'a str, to_unit: &'a str) -> Self {
        Self {
            value,
            from_unit,
            to_unit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConversionResult {
    Converted(Real),
    /// The reason is kept for logs and machine output; banners ignore it.
    Failed(UnitError),
}

impl ConversionResult {
    pub fn magnitude(&self) -> Option<Real> {
        match self {
            Self::Converted(v) => Some(*v),
            Self::Failed(_) => None,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted(_))
    }

    pub fn failure(&self) -> Option<&UnitError> {
        match self {
            Self::Converted(_) => None,
            Self::Failed(err) => Some(err),
        }
    }
}

impl From<Result<Real, UnitError>> for ConversionResult {
    fn from(result: Result<Real, UnitError>) -> Self {
        match result {
            Ok(v) => Self::Converted(v),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Stateless invoker holding the resolver built at startup.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    resolver: UnitResolver,
}

impl Converter {
    pub fn new(resolver: UnitResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &UnitResolver {
        &self.resolver
    }

    pub fn convert(&self, value: Real, from_unit: &str, to_unit: &str) -> ConversionResult {
        let result: ConversionResult = self.resolver.convert(value, from_unit, to_unit).into();
        match &result {
            ConversionResult::Converted(magnitude) => {
                tracing::debug!(value, from_unit, to_unit, magnitude, "converted");
            }
            ConversionResult::Failed(reason) => {
                tracing::debug!(value, from_unit, to_unit, %reason, "conversion failed");
            }
        }
        result
    }

    pub fn run(&self, request: &ConversionRequest<'_>) -> ConversionResult {
        self.convert(request.value, request.from_unit, request.to_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uc_core::Dimension;

    fn close(result: &ConversionResult, expected: Real) -> bool {
        result
            .magnitude()
            .is_some_and(|got| (got - expected).abs() < 1e-4)
    }

    #[test]
    fn foot_to_meter() {
        let c = Converter::default();
        assert!(close(&c.convert(5.0, "foot", "meter"), 1.524));
    }

    #[test]
    fn celsius_to_fahrenheit() {
        let c = Converter::default();
        assert!(close(&c.convert(32.0, "celsius", "fahrenheit"), 89.6));
    }

    #[test]
    fn kelvin_to_celsius() {
        let c = Converter::default();
        assert!(close(&c.convert(100.0, "kelvin", "celsius"), -173.15));
    }

    #[test]
    fn gallon_to_liter() {
        let c = Converter::default();
        let got = c.convert(1.0, "gallon", "liter").magnitude().unwrap();
        assert_eq!(format!("{got:.4}"), "3.7854");
    }

    #[test]
    fn mph_to_kmh() {
        let c = Converter::default();
        let request = ConversionRequest::new(60.0, "mile_per_hour", "kilometer_per_hour");
        let got = c.run(&request).magnitude().unwrap();
        assert_eq!(format!("{got:.4}"), "96.5606");
    }

    #[test]
    fn meter_to_kilogram_fails() {
        let c = Converter::default();
        let result = c.convert(1.0, "meter", "kilogram");
        assert!(!result.is_converted());
        assert_eq!(
            result.failure(),
            Some(&UnitError::IncompatibleDimensions {
                from: Dimension::Length,
                to: Dimension::Mass,
            })
        );
    }

    #[test]
    fn unknown_unit_fails_without_panicking() {
        let c = Converter::default();
        assert!(matches!(
            c.convert(1.0, "parsec", "meter"),
            ConversionResult::Failed(UnitError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn negative_and_zero_inputs_pass_through() {
        let c = Converter::default();
        assert!(close(&c.convert(-40.0, "celsius", "fahrenheit"), -40.0));
        assert!(close(&c.convert(0.0, "mile", "kilometer"), 0.0));
        // The resolver does not police physically meaningless negatives
        assert!(c.convert(-10.0, "kelvin", "celsius").is_converted());
    }
}
