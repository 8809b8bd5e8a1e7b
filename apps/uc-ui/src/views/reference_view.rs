use egui::RichText;
use uc_app::{CategoryExample, UnitCategory, how_it_works, list_categories, unit_info};

use super::form_view::ACCENT;

pub enum ReferenceAction {
    /// Load a worked example into the form and convert it.
    TryExample {
        category: UnitCategory,
        example: CategoryExample,
    },
}

#[derive(Default)]
pub struct ReferenceView;

impl ReferenceView {
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<ReferenceAction> {
        let mut action = None;

        ui.heading(RichText::new("Supported Units and Examples").color(ACCENT));
        egui::ScrollArea::vertical()
            .id_salt("reference_scroll")
            .show(ui, |ui| {
                for category in list_categories() {
                    ui.add_space(6.0);
                    ui.label(RichText::new(category.label()).strong().color(ACCENT));

                    let units: Vec<String> = category
                        .units()
                        .iter()
                        .map(|id| match unit_info(id) {
                            Some(def) => format!("{} ({})", id, def.symbol),
                            None => id.to_string(),
                        })
                        .collect();
                    ui.label(RichText::new(units.join(", ")).italics());

                    for ex in category.examples() {
                        ui.horizontal(|ui| {
                            ui.label(format!("Example: {}", ex.caption));
                            if ui.small_button("Try").clicked() {
                                action = Some(ReferenceAction::TryExample {
                                    category: *category,
                                    example: *ex,
                                });
                            }
                        });
                    }
                }

                ui.add_space(12.0);
                ui.label(RichText::new("How It Works").strong().color(ACCENT));
                for (i, step) in how_it_works().iter().enumerate() {
                    ui.label(format!("{}. {}", i + 1, step));
                }
            });

        action
    }
}
