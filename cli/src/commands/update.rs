//! Update user command.

use anyhow::{Context as _, Result};
use roster_business::{User, UserForm, UserId, UsersApi};
use tracing::instrument;

use crate::cli::UpdateArgs;
use crate::commands::show::print_user;
use crate::commands::{parse_role, parse_status, validated};
use crate::output::Output;

/// Applies the given fields on top of an edit form for `user`.
pub fn edit_form(user: &User, fields: &UpdateArgs) -> Result<UserForm> {
    let mut form = UserForm::edit(user);
    if let Some(name) = &fields.name {
        form.set_name(name.as_str());
    }
    if let Some(email) = &fields.email {
        form.set_email(email.as_str());
    }
    if let Some(role) = &fields.role {
        form.set_role(parse_role(role)?);
    }
    if let Some(status) = &fields.status {
        form.set_status(parse_status(status)?);
    }
    if let Some(join_date) = &fields.join_date {
        form.set_join_date(join_date.as_str());
    }
    Ok(form)
}

/// Loads the record, applies the changes, validates and saves the whole record.
#[instrument(skip_all, name = "update", fields(user_id = %id))]
pub async fn run_update(api: &UsersApi, id: &str, fields: &UpdateArgs) -> Result<User> {
    let out = Output::new();
    let id = UserId::from(id);

    let current = api
        .get(&id)
        .await
        .with_context(|| format!("Failed to fetch user {id}"))?;

    let mut form = edit_form(&current, fields)?;
    let input = validated(&mut form).context("Invalid user")?;

    let user = api
        .update(&id, &input)
        .await
        .with_context(|| format!("Failed to update user {id}"))?;

    out.success(format!("User updated: {}", user.id));
    print_user(&out, &user);
    Ok(user)
}
