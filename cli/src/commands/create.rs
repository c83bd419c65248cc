//! Create user command.

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use roster_business::{User, UserForm, UsersApi};
use tracing::instrument;

use crate::cli::CreateArgs;
use crate::commands::show::print_user;
use crate::commands::{parse_role, parse_status, validated};
use crate::output::Output;

/// Fills a create form from the arguments; unset optional fields keep the form defaults.
pub fn create_form(args: &CreateArgs, today: NaiveDate) -> Result<UserForm> {
    let mut form = UserForm::create(today);
    form.set_name(args.name.as_str());
    form.set_email(args.email.as_str());
    form.set_role(parse_role(&args.role)?);
    if let Some(status) = &args.status {
        form.set_status(parse_status(status)?);
    }
    if let Some(join_date) = &args.join_date {
        form.set_join_date(join_date.as_str());
    }
    Ok(form)
}

/// Validates locally first; nothing is sent unless every field passes.
#[instrument(skip_all, name = "create", fields(name = %args.name))]
pub async fn run_create(api: &UsersApi, args: &CreateArgs, today: NaiveDate) -> Result<User> {
    let out = Output::new();

    let mut form = create_form(args, today)?;
    let input = validated(&mut form).context("Invalid user")?;

    let user = api.create(&input).await.context("Failed to create user")?;

    out.success(format!("User created: {}", user.id));
    print_user(&out, &user);
    Ok(user)
}
