use egui::{Color32, RichText};
use uc_app::{Banner, Converter, ConverterForm, list_categories};

use crate::unit_picker::SearchableUnitPicker;

pub const ACCENT: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
const ERROR_FILL: Color32 = Color32::from_rgb(0xC6, 0x28, 0x28);

#[derive(Default)]
pub struct FormView {
    from_picker: SearchableUnitPicker,
    to_picker: SearchableUnitPicker,
}

impl FormView {
    pub fn show(&mut self, ui: &mut egui::Ui, form: &mut ConverterForm, converter: &Converter) {
        ui.heading(RichText::new("Unit Converter").color(ACCENT));
        ui.label(
            "Convert any unit to another in real-time. Supports length, mass, temperature, \
             volume, speed, and energy.",
        );
        ui.add_space(12.0);

        ui.columns(3, |columns| {
            columns[0].label("Enter value:");
            let mut value = form.inputs().value;
            if columns[0]
                .add(egui::DragValue::new(&mut value).speed(form.step()))
                .changed()
            {
                form.set_value(value);
            }

            columns[1].label("Select unit category:");
            let current = form.inputs().category;
            egui::ComboBox::from_id_salt("unit_category")
                .selected_text(current.label())
                .show_ui(&mut columns[1], |ui| {
                    for category in list_categories() {
                        if ui
                            .selectable_label(*category == current, category.label())
                            .clicked()
                        {
                            form.select_category(*category);
                        }
                    }
                });

            columns[2].label("Select from unit:");
            let inputs = *form.inputs();
            let picked = self.from_picker.show(
                &mut columns[2],
                "from_unit",
                inputs.category,
                inputs.from_unit,
            );
            if let Some(unit) = picked {
                if let Err(e) = form.select_from(unit) {
                    tracing::warn!(error = %e, "ignored from-unit pick");
                }
            }
        });

        ui.add_space(8.0);
        ui.label("Select target unit:");
        ui.horizontal(|ui| {
            let inputs = *form.inputs();
            if let Some(unit) = self
                .to_picker
                .show(ui, "to_unit", inputs.category, inputs.to_unit)
            {
                if let Err(e) = form.select_to(unit) {
                    tracing::warn!(error = %e, "ignored to-unit pick");
                }
            }
            if ui.button("⇄ Swap").clicked() {
                form.swap_units();
            }
        });

        ui.add_space(12.0);
        let convert = egui::Button::new(RichText::new("Convert").color(Color32::WHITE).size(16.0))
            .fill(ACCENT)
            .rounding(8.0);
        if ui.add(convert).clicked() {
            form.submit(converter);
        }

        if let Some(banner) = form.banner() {
            ui.add_space(12.0);
            show_banner(ui, banner);
        }
    }
}

fn show_banner(ui: &mut egui::Ui, banner: &Banner) {
    let (fill, text) = match banner {
        Banner::Success(text) => (ACCENT, format!("✅ {}", text)),
        Banner::Error(text) => (ERROR_FILL, format!("❌ {}", text)),
    };
    egui::Frame::none()
        .fill(fill)
        .rounding(4.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(Color32::WHITE).italics().strong());
        });
}
