//! Row rendering for the users table.

use egui_extras::TableRow;
use roster_business::{User, UserField};

use super::cells::{render_action_buttons, render_field_cell};

/// Shown in place of rows when the page is empty.
pub const EMPTY_TEXT: &str = "No users found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

/// Renders one user: a cell per visible field, then the action buttons.
#[inline]
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    user: &User,
    fields: &[UserField],
) -> Option<RowAction> {
    for field in fields {
        row.col(|ui| {
            render_field_cell(ui, user, *field);
        });
    }

    let mut action = None;
    row.col(|ui| {
        action = render_action_buttons(ui);
    });
    action
}

/// Fills a row with the empty-table message in its first cell.
#[inline]
pub fn render_empty_row(row: &mut TableRow<'_, '_>, column_count: usize) {
    row.col(|ui| {
        ui.weak(EMPTY_TEXT);
    });
    for _ in 1..column_count {
        row.col(|_| {});
    }
}
