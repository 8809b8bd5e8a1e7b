use uc_app::{UnitCategory, filter_units, unit_info};

/// Label shown for a unit id in the pickers.
pub fn unit_label(unit_id: &str) -> String {
    unit_info(unit_id)
        .map(|def| format!("{} ({})", def.id, def.symbol))
        .unwrap_or_else(|| unit_id.to_string())
}

#[derive(Debug, Default)]
pub struct SearchableUnitPicker {
    search_query: String,
}

impl SearchableUnitPicker {
    /// Returns the newly picked unit id, if the user picked one.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        id_salt: impl std::hash::Hash,
        category: UnitCategory,
        selected: &str,
    ) -> Option<&'static str> {
        let mut picked = None;

        egui::ComboBox::from_id_salt(id_salt)
            .selected_text(unit_label(selected))
            .width(240.0)
            .show_ui(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Search:");
                    ui.text_edit_singleline(&mut self.search_query)
                        .on_hover_text("Filter by name, symbol or alias");
                    if ui.small_button("Clear").clicked() {
                        self.search_query.clear();
                    }
                });

                ui.separator();

                let filtered = filter_units(category, &self.search_query);
                if filtered.is_empty() {
                    ui.label("No units found");
                    return;
                }

                for def in filtered {
                    let label = format!("{} ({}) - {}", def.id, def.symbol, def.display_name);
                    if ui.selectable_label(def.id == selected, label).clicked() {
                        picked = Some(def.id);
                    }
                }
            });

        if picked.is_some() {
            self.search_query.clear();
        }
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_includes_symbol() {
        assert_eq!(unit_label("cubic_meter"), "cubic_meter (m³)");
        assert_eq!(unit_label("mystery"), "mystery");
    }
}
