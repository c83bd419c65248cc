//! Cell rendering functions for the users table.

use egui::{RichText, Ui};
use roster_business::{Status, User, UserField};

use crate::utils::colors::status_color;

use super::row::RowAction;

/// Renders the cell for `field` of `user`.
#[inline]
pub fn render_field_cell(ui: &mut Ui, user: &User, field: UserField) {
    match field {
        UserField::Status => render_status_cell(ui, user.status),
        UserField::JoinDate => {
            ui.label(RichText::new(field.text_of(user).into_owned()).monospace());
        }
        _ => {
            ui.label(field.text_of(user).into_owned());
        }
    }
}

/// Active users in green, inactive in red.
#[inline]
pub fn render_status_cell(ui: &mut Ui, status: Status) {
    ui.label(RichText::new(status.as_str()).color(status_color(status)));
}

#[inline]
pub fn render_action_buttons(ui: &mut Ui) -> Option<RowAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("Edit").on_hover_text("Edit user").clicked() {
            action = Some(RowAction::Edit);
        }
        if ui.button("Delete").on_hover_text("Delete user").clicked() {
            action = Some(RowAction::Delete);
        }
    });
    action
}
