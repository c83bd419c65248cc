//! Sortable header for the users table.

use egui::{Button, Ui};
use egui_extras::TableRow;
use roster_business::users::{SortConfig, SortDirection};
use roster_business::UserField;

/// Header label with the sort indicator for its current direction.
pub fn header_text(field: UserField, direction: SortDirection) -> String {
    let indicator = match direction {
        SortDirection::None => "↕",
        SortDirection::Asc => "⬆",
        SortDirection::Desc => "⬇",
    };
    format!("{} {indicator}", field.label())
}

/// Renders one clickable header per visible field plus the actions header.
///
/// Returns the field whose header was clicked.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    fields: &[UserField],
    sort: &SortConfig,
) -> Option<UserField> {
    let mut clicked = None;

    for field in fields {
        header.col(|ui| {
            if render_sort_button(ui, *field, sort.direction_for(*field)) {
                clicked = Some(*field);
            }
        });
    }

    header.col(|ui| {
        ui.strong("Actions");
    });

    clicked
}

#[inline]
fn render_sort_button(ui: &mut Ui, field: UserField, direction: SortDirection) -> bool {
    ui.add(Button::new(egui::RichText::new(header_text(field, direction)).strong()).frame(false))
        .on_hover_text(format!("Sort by {}", field.label()))
        .clicked()
}
