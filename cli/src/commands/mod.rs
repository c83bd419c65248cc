//! Command implementations for the roster CLI.
//!
//! Each subcommand is implemented in its own module. Commands return what they
//! printed so workflows can be checked without scraping stdout.

pub mod completions;
pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

pub use completions::generate_completions;
pub use create::run_create;
pub use delete::run_delete;
pub use list::run_list;
pub use show::run_show;
pub use update::run_update;

use anyhow::{Result, anyhow};
use roster_business::{Role, Status, UserForm, UserInput};

/// Parses `Active`/`Inactive` in any case.
pub fn parse_status(value: &str) -> Result<Status> {
    Status::parse(value)
        .ok_or_else(|| anyhow!("Unknown status '{value}' (expected Active or Inactive)"))
}

/// Known role names match in any case. A blank value means no role.
pub fn parse_role(value: &str) -> Result<Option<Role>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    Role::KNOWN
        .into_iter()
        .find(|role| role.as_str().eq_ignore_ascii_case(value))
        .map(Some)
        .ok_or_else(|| {
            let known = Role::KNOWN.map(|role| role.to_string()).join(", ");
            anyhow!("Unknown role '{value}' (expected one of {known})")
        })
}

/// Runs form validation and turns field errors into one message.
fn validated(form: &mut UserForm) -> Result<UserInput> {
    match form.validate() {
        Some(input) => Ok(input),
        None => Err(anyhow!(form.errors().messages().join("; "))),
    }
}
