//! Create/edit form for a single user.
//!
//! The form owns the raw field values the UI binds to, the per-field errors and the
//! submit state. Field rules are declared with `validator`; a failed validation
//! never reaches the network. The async create/update call itself is issued by the
//! table controller, which reports back through [`UserForm::finish_submit`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use log::debug;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::users::model::{Role, Status, User, UserId, UserInput};

pub const SUBMIT_FAILED_MESSAGE: &str = "An error occurred. Please try again.";

const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

fn message(code: &'static str, text: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(text))
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(message("required", "Name is required"));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(message("required", "Email is required"));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(message("email", "Email is not valid"));
    }
    Ok(())
}

fn validate_join_date(join_date: &str) -> Result<(), ValidationError> {
    if join_date.trim().is_empty() {
        return Err(message("required", "Join Date is required"));
    }
    if NaiveDate::parse_from_str(join_date.trim(), DATE_FORMAT).is_err() {
        return Err(message("date", "Join Date is not a valid date"));
    }
    Ok(())
}

/// A role outside the fixed set is only accepted when it is `kept`, the unchanged
/// role of the record being edited.
fn validate_role(role: &Role, kept: Option<&Role>) -> Result<(), ValidationError> {
    if role.is_known() || kept == Some(role) {
        return Ok(());
    }
    Err(message("role", "Role is not valid"))
}

/// Raw values as typed or picked by the user.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UserFormData {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[validate(required(message = "Role is required"))]
    pub role: Option<Role>,
    pub status: Status,
    /// `YYYY-MM-DD`
    #[validate(custom(function = "validate_join_date"))]
    pub join_date: String,
}

impl UserFormData {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: None,
            status: Status::Active,
            join_date: today.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: Some(user.role.clone()),
            status: user.status,
            join_date: user
                .join_date
                .map_or_else(String::new, |date| date.format(DATE_FORMAT).to_string()),
        }
    }

    /// Payload for a valid form; `None` when a required value is missing or malformed.
    fn to_input(&self) -> Option<UserInput> {
        Some(UserInput {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            role: self.role.clone()?,
            status: self.status,
            join_date: NaiveDate::parse_from_str(self.join_date.trim(), DATE_FORMAT).ok()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Role,
    JoinDate,
}

impl FormField {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "role" => Some(Self::Role),
            "join_date" => Some(Self::JoinDate),
            _ => None,
        }
    }
}

/// Field-level messages plus the form-wide submit failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: HashMap<FormField, String>,
    submit: Option<String>,
}

impl FormErrors {
    fn from_validation(errors: &ValidationErrors) -> Self {
        let mut fields = HashMap::new();
        for (key, errs) in errors.field_errors() {
            let Some(field) = FormField::from_key(&key) else {
                continue;
            };
            if let Some(err) = errs.first() {
                let text = err
                    .message
                    .as_ref()
                    .map_or_else(|| err.code.to_string(), ToString::to_string);
                fields.insert(field, text);
            }
        }
        Self {
            fields,
            submit: None,
        }
    }

    pub fn field(&self, field: FormField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn submit(&self) -> Option<&str> {
        self.submit.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.submit.is_none()
    }

    /// All field messages, in form order.
    pub fn messages(&self) -> Vec<&str> {
        [
            FormField::Name,
            FormField::Email,
            FormField::Role,
            FormField::JoinDate,
        ]
        .into_iter()
        .filter_map(|field| self.field(field))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(UserId),
}

/// A validated submission ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub mode: FormMode,
    pub input: UserInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    mode: FormMode,
    pub data: UserFormData,
    /// Unknown role the edited record already had; it may be saved back unchanged.
    kept_role: Option<Role>,
    errors: FormErrors,
    submitting: bool,
}

impl UserForm {
    /// Empty form; status defaults to Active and the join date to `today`.
    pub fn create(today: NaiveDate) -> Self {
        Self {
            mode: FormMode::Create,
            data: UserFormData::blank(today),
            kept_role: None,
            errors: FormErrors::default(),
            submitting: false,
        }
    }

    /// Form pre-populated from `user`.
    pub fn edit(user: &User) -> Self {
        Self {
            mode: FormMode::Edit(user.id),
            data: UserFormData::from_user(user),
            kept_role: Some(user.role.clone()).filter(|role| !role.is_known()),
            errors: FormErrors::default(),
            submitting: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create User",
            FormMode::Edit(_) => "Edit User",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.mode, self.submitting) {
            (FormMode::Create, false) => "Create",
            (FormMode::Create, true) => "Creating...",
            (FormMode::Edit(_), false) => "Update",
            (FormMode::Edit(_), true) => "Updating...",
        }
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.field(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Clears the error shown under `field`; call whenever its value changes.
    pub fn field_edited(&mut self, field: FormField) {
        self.errors.fields.remove(&field);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.data.name = name.into();
        self.field_edited(FormField::Name);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.data.email = email.into();
        self.field_edited(FormField::Email);
    }

    pub fn set_role(&mut self, role: Option<Role>) {
        self.data.role = role;
        self.field_edited(FormField::Role);
    }

    pub fn set_status(&mut self, status: Status) {
        self.data.status = status;
    }

    pub fn set_join_date(&mut self, join_date: impl Into<String>) {
        self.data.join_date = join_date.into();
        self.field_edited(FormField::JoinDate);
    }

    /// Runs every field rule, replacing the field errors. Returns the payload when valid.
    pub fn validate(&mut self) -> Option<UserInput> {
        let mut result = self.data.validate();
        if let Some(role) = &self.data.role
            && let Err(err) = validate_role(role, self.kept_role.as_ref())
        {
            let mut errors = result.err().unwrap_or_else(ValidationErrors::new);
            errors.add("role", err);
            result = Err(errors);
        }

        match result {
            Ok(()) => {
                self.errors.fields.clear();
                self.data.to_input()
            }
            Err(errors) => {
                let submit = self.errors.submit.take();
                self.errors = FormErrors::from_validation(&errors);
                self.errors.submit = submit;
                None
            }
        }
    }

    /// Starts a submit. `None` while another submit is in flight or when validation fails.
    pub fn begin_submit(&mut self) -> Option<FormSubmission> {
        if self.submitting {
            debug!("Ignoring submit while a previous one is in flight");
            return None;
        }
        let input = self.validate()?;
        self.submitting = true;
        self.errors.submit = None;
        Some(FormSubmission {
            mode: self.mode,
            input,
        })
    }

    /// Ends the in-flight submit; a failure keeps the form open with a retry message.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if !succeeded {
            self.errors.submit = Some(SUBMIT_FAILED_MESSAGE.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    fn filled() -> UserForm {
        let mut form = UserForm::create(today());
        form.set_name("Ada Lovelace");
        form.set_email("ada@example.com");
        form.set_role(Some(Role::Developer));
        form
    }

    #[test]
    fn create_form_defaults() {
        let form = UserForm::create(today());
        assert_eq!(form.data.status, Status::Active);
        assert_eq!(form.data.join_date, "2025-06-30");
        assert_eq!(form.data.role, None);
        assert_eq!(form.title(), "Create User");
        assert_eq!(form.submit_label(), "Create");
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let mut form = UserForm::create(today());
        form.set_join_date("");

        assert_eq!(form.validate(), None);
        assert_eq!(
            form.errors().messages(),
            [
                "Name is required",
                "Email is required",
                "Role is required",
                "Join Date is required",
            ]
        );
    }

    #[test]
    fn invalid_email_is_rejected() {
        for email in ["ada", "ada@example", "ada @example.com", "@example.com", "ada@@x.io"] {
            let mut form = filled();
            form.set_email(email);
            assert_eq!(form.validate(), None, "{email} should be rejected");
            assert_eq!(form.error(FormField::Email), Some("Email is not valid"));
        }
    }

    #[test]
    fn malformed_join_date_is_rejected() {
        let mut form = filled();
        form.set_join_date("30/06/2025");
        assert_eq!(form.validate(), None);
        assert_eq!(
            form.error(FormField::JoinDate),
            Some("Join Date is not a valid date")
        );
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = UserForm::create(today());
        assert_eq!(form.validate(), None);
        assert!(form.error(FormField::Name).is_some());

        form.set_name("Grace");
        assert_eq!(form.error(FormField::Name), None);
        assert_eq!(form.error(FormField::Email), Some("Email is required"));
    }

    #[test]
    fn valid_form_builds_trimmed_payload() {
        let mut form = filled();
        form.set_name("  Ada Lovelace ");
        let input = form.validate().unwrap();

        assert_eq!(input.name, "Ada Lovelace");
        assert_eq!(input.role, Role::Developer);
        assert_eq!(input.join_date, today());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = filled();
        let first = form.begin_submit();
        assert!(first.is_some());
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Creating...");

        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn failed_submit_shows_retry_message_and_allows_resubmit() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        form.finish_submit(false);

        assert!(!form.is_submitting());
        assert_eq!(form.errors().submit(), Some(SUBMIT_FAILED_MESSAGE));
        assert!(form.begin_submit().is_some());
        assert_eq!(form.errors().submit(), None);
    }

    #[test]
    fn edit_form_keeps_unknown_role() {
        let user = User {
            id: UserId::Number(9),
            name: "Linus".to_owned(),
            email: "linus@kernel.org".to_owned(),
            role: Role::Other("Maintainer".to_owned()),
            status: Status::Inactive,
            join_date: NaiveDate::from_ymd_opt(2020, 2, 29),
        };
        let mut form = UserForm::edit(&user);

        assert_eq!(form.title(), "Edit User");
        assert_eq!(form.mode(), FormMode::Edit(UserId::Number(9)));
        let submission = form.begin_submit().unwrap();
        assert_eq!(Some(submission.input), user.to_input());
    }

    #[test]
    fn create_form_rejects_role_outside_known_set() {
        let mut form = filled();
        form.set_role(Some(Role::Other("Astronaut".to_owned())));

        assert_eq!(form.validate(), None);
        assert_eq!(form.error(FormField::Role), Some("Role is not valid"));
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn edit_form_rejects_switching_to_another_unknown_role() {
        let user = User {
            id: UserId::Number(4),
            name: "Linus".to_owned(),
            email: "linus@kernel.org".to_owned(),
            role: Role::Other("Maintainer".to_owned()),
            status: Status::Active,
            join_date: NaiveDate::from_ymd_opt(2020, 2, 29),
        };
        let mut form = UserForm::edit(&user);
        form.set_role(Some(Role::Other("Astronaut".to_owned())));
        assert_eq!(form.validate(), None);
        assert_eq!(form.error(FormField::Role), Some("Role is not valid"));

        form.set_role(Some(Role::Designer));
        assert!(form.validate().is_some());
    }

    #[test]
    fn edit_form_without_join_date_asks_for_one() {
        let user = User {
            id: UserId::Number(5),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            role: Role::Developer,
            status: Status::Active,
            join_date: None,
        };
        let mut form = UserForm::edit(&user);

        assert_eq!(form.validate(), None);
        assert_eq!(form.error(FormField::JoinDate), Some("Join Date is required"));
    }
}
