use crate::views::{FormView, ReferenceAction, ReferenceView};
use uc_app::{AppResult, CategoryExample, Converter, ConverterConfig, ConverterForm, UnitCategory};
use uc_core::UnitResolver;

pub struct UnitConverterApp {
    converter: Converter,
    form: ConverterForm,
    form_view: FormView,
    reference_view: ReferenceView,
    show_reference: bool,
}

impl UnitConverterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ConverterConfig) -> Self {
        Self {
            converter: Converter::new(UnitResolver::new()),
            form: ConverterForm::new(&config),
            form_view: FormView::default(),
            reference_view: ReferenceView,
            show_reference: true,
        }
    }

    fn try_example(&mut self, category: UnitCategory, example: &CategoryExample) {
        if let Err(e) = load_example(&mut self.form, category, example) {
            tracing::warn!(error = %e, example = example.caption, "could not load example");
            return;
        }
        self.form.submit(&self.converter);
    }
}

/// Put a worked example into the form inputs.
fn load_example(
    form: &mut ConverterForm,
    category: UnitCategory,
    example: &CategoryExample,
) -> AppResult<()> {
    form.select_category(category);
    form.set_value(example.value);
    form.select_from(example.from_unit)?;
    form.select_to(example.to_unit)?;
    Ok(())
}

impl eframe::App for UnitConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.checkbox(&mut self.show_reference, "Show reference");
            });
        });

        let mut action = None;
        if self.show_reference {
            egui::SidePanel::right("reference")
                .default_width(340.0)
                .show(ctx, |ui| {
                    action = self.reference_view.show(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.form_view.show(ui, &mut self.form, &self.converter);
        });

        if let Some(ReferenceAction::TryExample { category, example }) = action {
            self.try_example(category, &example);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uc_app::Banner;

    #[test]
    fn example_loads_into_form() {
        let converter = Converter::default();
        let mut form = ConverterForm::default();
        let example = UnitCategory::Volume.examples()[0];
        load_example(&mut form, UnitCategory::Volume, &example).unwrap();
        assert_eq!(form.inputs().from_unit, "gallon");
        assert_eq!(form.inputs().to_unit, "liter");
        assert_eq!(
            form.submit(&converter),
            &Banner::Success("1.0 gallon = 3.7854 liter".to_string())
        );
    }
}
