//! Main panel for users management.

use chrono::{DateTime, Utc};
use egui::{Frame, Margin, ScrollArea, Stroke, Ui};
use roster_business::UsersTable;

use super::modals::{show_delete_user_modal, show_user_form_modal};
use super::pagination::pagination_bar;
use super::table::{TableAction, users_table};
use super::toolbar::toolbar;
use crate::utils::colors::COLOR_RED;

/// Border color for the table frame (subtle gray)
const TABLE_BORDER_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 200, 200);

/// Displays the users panel: toolbar, table, pagination and any open modal.
pub fn users_panel(table: &mut UsersTable, now: DateTime<Utc>, ui: &mut Ui) {
    ui.vertical(|ui| {
        toolbar(table, now, ui);

        if let Some(error) = table.action_error() {
            ui.colored_label(COLOR_RED, error);
        }

        ui.add_space(8.0);

        // A failed fetch replaces the table
        if let Some(error) = table.error() {
            ui.colored_label(COLOR_RED, error);
            if ui.button("Retry").clicked() {
                table.refresh();
            }
            return;
        }

        let action = Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::symmetric(4, 4))
            .show(ui, |ui| {
                ScrollArea::horizontal()
                    .show(ui, |ui| users_table(table, ui))
                    .inner
            })
            .inner;

        match action {
            Some(TableAction::Sort(field)) => table.toggle_sort(field),
            Some(TableAction::Edit(user)) => table.open_edit(&user),
            Some(TableAction::Delete(user)) => table.request_delete(&user),
            None => {}
        }

        ui.add_space(8.0);
        pagination_bar(table, ui);
    });

    show_user_form_modal(table, ui);
    show_delete_user_modal(table, ui);
}
