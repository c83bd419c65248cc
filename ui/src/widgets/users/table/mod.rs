//! Table components for the users table.
//!
//! - `columns`: column definitions and widths
//! - `header`: sortable header rendering
//! - `row`: individual row rendering with cells
//! - `cells`: cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use roster_business::{User, UserField, UsersTable};

use self::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use self::header::render_table_header;
use self::row::{RowAction, render_empty_row, render_user_row};

/// Something the user asked for while the table was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    Sort(UserField),
    Edit(User),
    Delete(User),
}

/// Renders the current page; returns the first action clicked this frame.
pub fn users_table(table: &UsersTable, ui: &mut Ui) -> Option<TableAction> {
    let fields = table.columns().fields();
    let sort = table.query().sort;
    let users = table.users();
    let mut action = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns(&fields) {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            if let Some(field) = render_table_header(&mut header, &fields, &sort) {
                action = Some(TableAction::Sort(field));
            }
        })
        .body(|mut body| {
            if users.is_empty() {
                body.row(ROW_HEIGHT, |mut row| {
                    render_empty_row(&mut row, fields.len() + 1);
                });
                return;
            }

            for user in users {
                body.row(ROW_HEIGHT, |mut row| {
                    match render_user_row(&mut row, user, &fields) {
                        Some(RowAction::Edit) => action = Some(TableAction::Edit(user.clone())),
                        Some(RowAction::Delete) => {
                            action = Some(TableAction::Delete(user.clone()));
                        }
                        None => {}
                    }
                });
            }
        });

    action
}
