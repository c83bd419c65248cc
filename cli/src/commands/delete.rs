//! Delete user command.

use anyhow::{Context as _, Result};
use inquire::Confirm;
use roster_business::{UserId, UsersApi};
use tracing::instrument;

use crate::output::Output;

/// Deletes the user, asking first unless `yes` is set.
///
/// Returns whether the record was deleted.
#[instrument(skip_all, name = "delete", fields(user_id = %id, yes))]
pub async fn run_delete(api: &UsersApi, id: &str, yes: bool) -> Result<bool> {
    let out = Output::new();
    let id = UserId::from(id);

    if !yes {
        let user = api
            .get(&id)
            .await
            .with_context(|| format!("Failed to fetch user {id}"))?;

        let confirmed = Confirm::new(&format!(
            "Are you sure you want to delete {} ({})?",
            user.name, user.email
        ))
        .with_default(false)
        .prompt()
        .context("Failed to read confirmation")?;

        if !confirmed {
            out.warning("Delete cancelled");
            return Ok(false);
        }
    }

    api.delete(&id)
        .await
        .with_context(|| format!("Failed to delete user {id}"))?;

    out.success(format!("User deleted: {id}"));
    Ok(true)
}
