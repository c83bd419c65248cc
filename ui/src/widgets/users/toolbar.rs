//! Toolbar above the users table: add button, search box, filters and columns.

use chrono::{DateTime, Local, Utc};
use egui::{ComboBox, TextEdit, Ui};
use roster_business::{Role, Status, UsersTable};

use super::column_picker::column_picker;

pub const ADD_USER_TEXT: &str = "Add User";
pub const SEARCH_HINT: &str = "Search...";

pub fn toolbar(table: &mut UsersTable, now: DateTime<Utc>, ui: &mut Ui) {
    ui.horizontal_wrapped(|ui| {
        if ui.button(ADD_USER_TEXT).clicked() {
            table.open_create(Local::now().date_naive());
        }

        ui.separator();

        let search = ui.add(
            TextEdit::singleline(table.search_input_mut())
                .hint_text(SEARCH_HINT)
                .desired_width(200.0),
        );
        if search.changed() {
            table.search_changed(now);
        }

        status_filter(table, ui);
        role_filter(table, ui);
        column_picker(table.columns_mut(), ui);

        if table.is_fetching() {
            ui.spinner();
            ui.label("Loading...");
        } else if table.is_deleting() {
            ui.spinner();
            ui.label("Deleting...");
        }
    });
}

fn status_filter(table: &mut UsersTable, ui: &mut Ui) {
    let current = table.query().filters.status;
    let mut selected = current;

    ComboBox::from_id_salt("status_filter")
        .selected_text(current.map_or("Filter by Status", Status::as_str))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, None, "Filter by Status");
            for status in Status::ALL {
                ui.selectable_value(&mut selected, Some(status), status.as_str());
            }
        });

    if selected != current {
        table.set_status_filter(selected);
    }
}

fn role_filter(table: &mut UsersTable, ui: &mut Ui) {
    let current = table.query().filters.role.clone();
    let mut selected = current.clone();

    ComboBox::from_id_salt("role_filter")
        .selected_text(current.as_ref().map_or("Filter by Role", Role::as_str))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, None, "Filter by Role");
            for role in Role::KNOWN {
                let label = role.as_str().to_owned();
                ui.selectable_value(&mut selected, Some(role), label);
            }
        });

    if selected != current {
        table.set_role_filter(selected);
    }
}
