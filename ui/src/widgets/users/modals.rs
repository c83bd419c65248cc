//! Modal dialogs: the create/edit form and the delete confirmation.

use egui::{Button, ComboBox, Grid, Id, TextEdit, Ui, Window};
use roster_business::users::FormField;
use roster_business::{Role, Status, UserForm, UsersTable};

use crate::utils::colors::COLOR_RED;

pub const DELETE_CONFIRM_TEXT: &str = "Are you sure you want to delete this user?";
pub const CONFIRM_DELETE_TEXT: &str = "Confirm Delete";

/// Shows the create/edit form when one is open.
pub fn show_user_form_modal(table: &mut UsersTable, ui: &mut Ui) {
    let Some(form) = table.form_mut() else {
        return;
    };

    let mut open = true;
    let mut submit = false;
    let mut cancel = false;

    Window::new(form.title())
        .id(Id::new("user_form_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(error) = form.errors().submit() {
                ui.colored_label(COLOR_RED, error);
                ui.add_space(4.0);
            }

            Grid::new("user_form_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.vertical(|ui| {
                        if ui.text_edit_singleline(&mut form.data.name).changed() {
                            form.field_edited(FormField::Name);
                        }
                        field_error(ui, form, FormField::Name);
                    });
                    ui.end_row();

                    ui.label("Email");
                    ui.vertical(|ui| {
                        if ui.text_edit_singleline(&mut form.data.email).changed() {
                            form.field_edited(FormField::Email);
                        }
                        field_error(ui, form, FormField::Email);
                    });
                    ui.end_row();

                    ui.label("Role");
                    ui.vertical(|ui| {
                        role_select(ui, form);
                        field_error(ui, form, FormField::Role);
                    });
                    ui.end_row();

                    ui.label("Status");
                    status_select(ui, form);
                    ui.end_row();

                    ui.label("Join Date");
                    ui.vertical(|ui| {
                        let edit = TextEdit::singleline(&mut form.data.join_date)
                            .hint_text("YYYY-MM-DD");
                        if ui.add(edit).changed() {
                            form.field_edited(FormField::JoinDate);
                        }
                        field_error(ui, form, FormField::JoinDate);
                    });
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
                let submit_button = Button::new(form.submit_label());
                if ui.add_enabled(!form.is_submitting(), submit_button).clicked() {
                    submit = true;
                }
            });
        });

    if submit {
        table.submit_form();
    } else if cancel || !open {
        table.close_form();
    }
}

fn field_error(ui: &mut Ui, form: &UserForm, field: FormField) {
    if let Some(message) = form.error(field) {
        ui.colored_label(COLOR_RED, message);
    }
}

fn role_select(ui: &mut Ui, form: &mut UserForm) {
    let current = form.data.role.clone();
    let mut selected = current.clone();

    ComboBox::from_id_salt("user_form_role")
        .selected_text(current.as_ref().map_or("Select Role", Role::as_str))
        .show_ui(ui, |ui| {
            // Keep a role the server sent that the form does not offer
            if let Some(other @ Role::Other(_)) = &current {
                let label = other.as_str().to_owned();
                ui.selectable_value(&mut selected, Some(other.clone()), label);
            }
            for role in Role::KNOWN {
                let label = role.as_str().to_owned();
                ui.selectable_value(&mut selected, Some(role), label);
            }
        });

    if selected != current {
        form.set_role(selected);
    }
}

fn status_select(ui: &mut Ui, form: &mut UserForm) {
    let mut selected = form.data.status;

    ComboBox::from_id_salt("user_form_status")
        .selected_text(selected.as_str())
        .show_ui(ui, |ui| {
            for status in Status::ALL {
                ui.selectable_value(&mut selected, status, status.as_str());
            }
        });

    if selected != form.data.status {
        form.set_status(selected);
    }
}

/// Shows the delete confirmation for the user awaiting it.
pub fn show_delete_user_modal(table: &mut UsersTable, ui: &mut Ui) {
    let Some(user) = table.pending_delete() else {
        return;
    };
    let name = user.name.clone();

    let mut open = true;
    let mut confirm = false;
    let mut cancel = false;

    Window::new("Delete User")
        .id(Id::new("delete_user_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(DELETE_CONFIRM_TEXT);
            ui.strong(&name);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
                if ui.button(CONFIRM_DELETE_TEXT).clicked() {
                    confirm = true;
                }
            });
        });

    if confirm {
        table.confirm_delete();
    } else if cancel || !open {
        table.cancel_delete();
    }
}
