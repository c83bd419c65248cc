//! Pagination bar: "Showing N of M entries", page size and page navigation.

use egui::{Button, ComboBox, Ui};
use roster_business::users::PAGE_SIZES;
use roster_business::UsersTable;

pub fn pagination_bar(table: &mut UsersTable, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label(table.page_result().summary());

        ui.separator();

        let current = table.query().page_size;
        let mut selected = current;
        ComboBox::from_id_salt("page_size")
            .selected_text(format!("{current} per page"))
            .show_ui(ui, |ui| {
                for size in PAGE_SIZES {
                    ui.selectable_value(&mut selected, size, format!("{size} per page"));
                }
            });
        if selected != current {
            table.set_page_size(selected);
        }

        ui.separator();

        let can_previous = table.can_go_previous();
        let can_next = table.can_go_next();

        if ui.add_enabled(can_previous, Button::new("First")).clicked() {
            table.first_page();
        }
        if ui.add_enabled(can_previous, Button::new("Previous")).clicked() {
            table.previous_page();
        }
        ui.label(table.page_result().page_label());
        if ui.add_enabled(can_next, Button::new("Next")).clicked() {
            table.next_page();
        }
        if ui.add_enabled(can_next, Button::new("Last")).clicked() {
            table.last_page();
        }
    });
}
