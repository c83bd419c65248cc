//! Column visibility dropdown.

use egui::Ui;
use roster_business::users::VisibleColumns;

pub const COLUMNS_BUTTON_TEXT: &str = "Columns";

/// A "Columns" menu with one checkbox per field.
pub fn column_picker(columns: &mut VisibleColumns, ui: &mut Ui) {
    ui.menu_button(COLUMNS_BUTTON_TEXT, |ui| {
        let entries: Vec<_> = columns.entries().collect();
        for (field, visible) in entries {
            let mut checked = visible;
            if ui.checkbox(&mut checked, field.label()).changed() {
                columns.set(field, checked);
            }
        }
    });
}
