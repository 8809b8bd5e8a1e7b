//! Reference text shown next to the form.

use std::fmt::Write;

use crate::registry::{list_categories, unit_info};

/// "Supported Units and Examples" section, one block per category.
pub fn supported_units_reference() -> String {
    let mut out = String::from("Supported Units and Examples\n");

    for category in list_categories() {
        let units: Vec<String> = category
            .units()
            .iter()
            .map(|id| match unit_info(id) {
                Some(def) => format!("{} ({})", id, def.symbol),
                None => id.to_string(),
            })
            .collect();
        let examples: Vec<&str> = category.examples().iter().map(|ex| ex.caption).collect();

        let _ = writeln!(out, "\n{}", category.label());
        let _ = writeln!(out, "  - {}", units.join(", "));
        let _ = writeln!(out, "  - Example: {}", examples.join(", "));
    }

    out
}

pub fn how_it_works() -> &'static [&'static str] {
    &[
        "Enter a value.",
        "Select the unit category (e.g., Length, Mass).",
        "Select the source unit (e.g., feet).",
        "Select the target unit (e.g., meters).",
        "Click Convert to see the result.",
    ]
}
