//! Form session: current selections plus the banner of the last submit.
//!
//! Every interaction recomputes from scratch. Editing any input clears the
//! banner, and submitting renders a new one from the inputs as they stand.

use uc_core::Real;

use crate::config::ConverterConfig;
use crate::converter::{ConversionRequest, Converter};
use crate::error::{AppError, AppResult};
use crate::format::{Banner, render_banner};
use crate::registry::UnitCategory;

/// Values currently held by the form widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormInputs {
    pub value: Real,
    pub category: UnitCategory,
    pub from_unit: &'static str,
    pub to_unit: &'static str,
}

impl FormInputs {
    pub fn request(&self) -> ConversionRequest<'static> {
        ConversionRequest::new(self.value, self.from_unit, self.to_unit)
    }
}

/// Pure recomputation from inputs to banner.
pub fn render(converter: &Converter, inputs: &FormInputs, precision: usize) -> Banner {
    let request = inputs.request();
    let result = converter.run(&request);
    render_banner(&request, &result, precision)
}

#[derive(Debug, Clone)]
pub struct ConverterForm {
    inputs: FormInputs,
    precision: usize,
    step: Real,
    banner: Option<Banner>,
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new(&ConverterConfig::default())
    }
}

impl ConverterForm {
    pub fn new(config: &ConverterConfig) -> Self {
        let category = config.default_category;
        Self {
            inputs: FormInputs {
                value: config.default_value,
                category,
                from_unit: category.first_unit(),
                to_unit: category.first_unit(),
            },
            precision: config.precision,
            step: config.step,
            banner: None,
        }
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn step(&self) -> Real {
        self.step
    }

    pub fn set_value(&mut self, value: Real) {
        if value != self.inputs.value {
            self.inputs.value = value;
            self.banner = None;
        }
    }

    /// Switch category, repopulating both pickers.
    pub fn select_category(&mut self, category: UnitCategory) {
        if category == self.inputs.category {
            return;
        }
        self.inputs.category = category;
        if !category.contains(self.inputs.from_unit) {
            self.inputs.from_unit = category.first_unit();
        }
        if !category.contains(self.inputs.to_unit) {
            self.inputs.to_unit = category.first_unit();
        }
        self.banner = None;
    }

    pub fn select_from(&mut self, unit_id: &str) -> AppResult<()> {
        let unit = self.member(unit_id)?;
        if unit != self.inputs.from_unit {
            self.inputs.from_unit = unit;
            self.banner = None;
        }
        Ok(())
    }

    pub fn select_to(&mut self, unit_id: &str) -> AppResult<()> {
        let unit = self.member(unit_id)?;
        if unit != self.inputs.to_unit {
            self.inputs.to_unit = unit;
            self.banner = None;
        }
        Ok(())
    }

    pub fn swap_units(&mut self) {
        if self.inputs.from_unit != self.inputs.to_unit {
            std::mem::swap(&mut self.inputs.from_unit, &mut self.inputs.to_unit);
            self.banner = None;
        }
    }

    pub fn submit(&mut self, converter: &Converter) -> &Banner {
        self.banner.insert(render(converter, &self.inputs, self.precision))
    }

    fn member(&self, unit_id: &str) -> AppResult<&'static str> {
        let category = self.inputs.category;
        category
            .units()
            .iter()
            .copied()
            .find(|id| *id == unit_id)
            .ok_or_else(|| AppError::UnitNotInCategory {
                unit: unit_id.to_string(),
                category: category.label().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_units() {
        let form = ConverterForm::default();
        let inputs = form.inputs();
        assert_eq!(inputs.value, 1.0);
        assert_eq!(inputs.category, UnitCategory::Length);
        assert_eq!(inputs.from_unit, "meter");
        assert_eq!(inputs.to_unit, "meter");
        assert!(form.banner().is_none());
    }

    #[test]
    fn category_change_resets_units() {
        let mut form = ConverterForm::default();
        form.select_from("foot").unwrap();
        form.select_category(UnitCategory::Temperature);
        assert_eq!(form.inputs().from_unit, "celsius");
        assert_eq!(form.inputs().to_unit, "celsius");
    }

    #[test]
    fn rejects_units_outside_category() {
        let mut form = ConverterForm::default();
        let err = form.select_to("kilogram").unwrap_err();
        assert!(matches!(err, AppError::UnitNotInCategory { .. }));
        assert_eq!(form.inputs().to_unit, "meter");
    }

    #[test]
    fn submit_renders_banner() {
        let converter = Converter::default();
        let mut form = ConverterForm::default();
        form.set_value(5.0);
        form.select_from("foot").unwrap();
        let banner = form.submit(&converter).clone();
        assert_eq!(banner, Banner::Success("5.0 foot = 1.5240 meter".to_string()));
        assert_eq!(form.banner(), Some(&banner));
    }

    #[test]
    fn editing_clears_banner() {
        let converter = Converter::default();
        let mut form = ConverterForm::default();
        form.submit(&converter);
        assert!(form.banner().is_some());
        form.set_value(2.0);
        assert!(form.banner().is_none());

        form.submit(&converter);
        form.select_category(UnitCategory::Mass);
        assert!(form.banner().is_none());
    }

    #[test]
    fn swap_units_reverses_direction() {
        let converter = Converter::default();
        let mut form = ConverterForm::default();
        form.select_category(UnitCategory::Temperature);
        form.set_value(212.0);
        form.select_to("fahrenheit").unwrap();
        form.swap_units();
        assert_eq!(form.inputs().from_unit, "fahrenheit");
        assert_eq!(form.inputs().to_unit, "celsius");
        assert_eq!(form.submit(&converter).text(), "212.0 fahrenheit = 100.0000 celsius");
    }

    #[test]
    fn render_is_deterministic() {
        let converter = Converter::default();
        let inputs = FormInputs {
            value: 60.0,
            category: UnitCategory::Speed,
            from_unit: "mile_per_hour",
            to_unit: "kilometer_per_hour",
        };
        let first = render(&converter, &inputs, 4);
        assert_eq!(first, render(&converter, &inputs, 4));
        assert_eq!(
            first.text(),
            "60.0 mile_per_hour = 96.5606 kilometer_per_hour"
        );
    }
}
