//! Show a single user command.

use anyhow::{Context as _, Result};
use roster_business::{Status, User, UserId, UsersApi};
use tracing::instrument;

use crate::output::Output;

/// Prints every field of a user, one per line.
pub fn print_user(out: &Output, user: &User) {
    out.header(&user.name);
    out.divider(40);
    out.labeled_indent("ID", &user.id, 2);
    out.labeled_indent("Email", &user.email, 2);
    out.labeled_indent("Role", &user.role, 2);
    out.status("Status", user.status == Status::Active, user.status, 2);
    let join_date = user
        .join_date
        .map_or_else(|| "-".to_owned(), |date| date.to_string());
    out.labeled_indent("Join Date", join_date, 2);
}

#[instrument(skip_all, name = "show", fields(user_id = %id))]
pub async fn run_show(api: &UsersApi, id: &str) -> Result<User> {
    let out = Output::new();
    let id = UserId::from(id);

    let user = api
        .get(&id)
        .await
        .with_context(|| format!("Failed to fetch user {id}"))?;

    print_user(&out, &user);
    Ok(user)
}
