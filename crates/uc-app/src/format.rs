//! Banner text and machine-readable reports.

use serde::Serialize;
use uc_core::{Real, UnitError};

use crate::converter::{ConversionRequest, ConversionResult};
use crate::error::AppResult;

pub const INVALID_CONVERSION: &str = "Invalid conversion. Please check your units.";

/// What the form shows after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Render an input value the way a float literal is echoed back: whole
/// numbers keep one decimal place (`5.0`), very large or very small
/// magnitudes switch to exponent form (`1e+16`, `2.5e-07`), and everything
/// else uses the shortest round-trip form.
pub fn format_input_value(value: Real) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() || value == 0.0 {
        return format!("{value:?}");
    }

    let magnitude = value.abs();
    if magnitude >= 1e16 || magnitude < 1e-4 {
        return exponent_form(value);
    }

    let text = format!("{value}");
    if text.contains('.') { text } else { format!("{text}.0") }
}

/// Shortest mantissa with a signed exponent of at least two digits.
fn exponent_form(value: Real) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

pub fn render_banner(
    request: &ConversionRequest<'_>,
    result: &ConversionResult,
    precision: usize,
) -> Banner {
    match result {
        ConversionResult::Converted(magnitude) => Banner::Success(format!(
            "{} {} = {:.*} {}",
            format_input_value(request.value),
            request.from_unit,
            precision,
            magnitude,
            request.to_unit
        )),
        ConversionResult::Failed(_) => Banner::Error(INVALID_CONVERSION.to_string()),
    }
}

/// Serializable summary of one conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    pub value: Real,
    pub from_unit: String,
    pub to_unit: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Real>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ConversionReport {
    pub fn new(
        request: &ConversionRequest<'_>,
        result: &ConversionResult,
        precision: usize,
    ) -> Self {
        let banner = render_banner(request, result, precision);
        Self {
            value: request.value,
            from_unit: request.from_unit.to_string(),
            to_unit: request.to_unit.to_string(),
            ok: result.is_converted(),
            result: result.magnitude(),
            message: banner.text().to_string(),
            reason: result.failure().map(UnitError::to_string),
        }
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uc_core::Dimension;

    #[test]
    fn whole_numbers_keep_one_decimal() {
        assert_eq!(format_input_value(5.0), "5.0");
        assert_eq!(format_input_value(-173.0), "-173.0");
        assert_eq!(format_input_value(0.1), "0.1");
        assert_eq!(format_input_value(2.5), "2.5");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_input_value(1e16), "1e+16");
        assert_eq!(format_input_value(1e-5), "1e-05");
        assert_eq!(format_input_value(2.5e-7), "2.5e-07");
        assert_eq!(format_input_value(-1.5e20), "-1.5e+20");
        assert_eq!(format_input_value(1e100), "1e+100");
    }

    #[test]
    fn exponent_thresholds() {
        assert_eq!(format_input_value(1e15), "1000000000000000.0");
        assert_eq!(format_input_value(0.0001), "0.0001");
        assert_eq!(format_input_value(0.0), "0.0");
        assert_eq!(format_input_value(-0.0), "-0.0");
        assert_eq!(format_input_value(Real::INFINITY), "inf");
        assert_eq!(format_input_value(Real::NAN), "nan");
    }

    #[test]
    fn exponent_form_reaches_banner() {
        let request = ConversionRequest::new(1e-5, "meter", "foot");
        let banner = render_banner(&request, &ConversionResult::Converted(3.28084e-5), 4);
        assert_eq!(banner.text(), "1e-05 meter = 0.0000 foot");
    }

    #[test]
    fn success_banner_uses_four_decimals() {
        let request = ConversionRequest::new(5.0, "foot", "meter");
        let banner = render_banner(&request, &ConversionResult::Converted(1.524), 4);
        assert_eq!(banner, Banner::Success("5.0 foot = 1.5240 meter".to_string()));
    }

    #[test]
    fn precision_is_respected() {
        let request = ConversionRequest::new(100.0, "kelvin", "celsius");
        let banner = render_banner(&request, &ConversionResult::Converted(-173.15), 1);
        assert_eq!(banner.text(), "100.0 kelvin = -173.2 celsius");
    }

    #[test]
    fn failure_banner_hides_reason() {
        let request = ConversionRequest::new(1.0, "meter", "kilogram");
        let result = ConversionResult::Failed(UnitError::IncompatibleDimensions {
            from: Dimension::Length,
            to: Dimension::Mass,
        });
        let banner = render_banner(&request, &result, 4);
        assert!(!banner.is_success());
        assert_eq!(banner.text(), INVALID_CONVERSION);
    }

    #[test]
    fn report_carries_reason_on_failure() {
        let request = ConversionRequest::new(1.0, "meter", "kilogram");
        let result = ConversionResult::Failed(UnitError::IncompatibleDimensions {
            from: Dimension::Length,
            to: Dimension::Mass,
        });
        let report = ConversionReport::new(&request, &result, 4);
        assert!(!report.ok);
        assert_eq!(report.result, None);
        assert_eq!(
            report.reason.as_deref(),
            Some("Cannot convert from length to mass")
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ok"], false);
        assert!(json.get("result").is_none());
    }

    #[test]
    fn pretty_json_report_on_success() {
        let request = ConversionRequest::new(5.0, "foot", "meter");
        let report = ConversionReport::new(&request, &ConversionResult::Converted(1.524), 4);
        let text = report.to_json_pretty().unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["message"], "5.0 foot = 1.5240 meter");
        assert!(json.get("reason").is_none());
    }
}
