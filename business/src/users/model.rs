//! User records as exchanged with the `/users` resource.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

/// Record identity.
///
/// The backend decides whether ids are numbers or strings (json-server hands out
/// either); the id is kept exactly as received so it round-trips into URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserId {
    Number(u64),
    Text(Ustr),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s.as_str()),
        }
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for UserId {
    /// Numeric strings become [`UserId::Number`] so CLI arguments match JSON ids.
    fn from(value: &str) -> Self {
        value
            .parse::<u64>()
            .map_or_else(|_| Self::Text(Ustr::from(value)), Self::Number)
    }
}

impl Serialize for UserId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serializer.serialize_u64(*n),
            Self::Text(s) => serializer.serialize_str(s.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self::Number(n),
            RawId::Text(s) => Self::Text(Ustr::from(&s)),
        })
    }
}

/// Job role. The form only offers the known roles; anything else the server
/// returns is kept verbatim in [`Role::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Developer,
    Designer,
    Manager,
    QaEngineer,
    ProductManager,
    Other(String),
}

impl Role {
    pub const KNOWN: [Self; 5] = [
        Self::Developer,
        Self::Designer,
        Self::Manager,
        Self::QaEngineer,
        Self::ProductManager,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Developer => "Developer",
            Self::Designer => "Designer",
            Self::Manager => "Manager",
            Self::QaEngineer => "QA Engineer",
            Self::ProductManager => "Product Manager",
            Self::Other(other) => other,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Exact-match lookup against the known roles.
    pub fn parse_known(value: &str) -> Option<Self> {
        Self::KNOWN.into_iter().find(|role| role.as_str() == value)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::parse_known(&value).unwrap_or(Self::Other(value))
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One managed user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    /// `None` when the backend sent no join date or one that is not a date.
    #[serde(default, deserialize_with = "lenient_date")]
    pub join_date: Option<NaiveDate>,
}

impl User {
    /// Payload carrying this record's editable fields; `None` without a join date.
    pub fn to_input(&self) -> Option<UserInput> {
        Some(UserInput {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            status: self.status,
            join_date: self.join_date?,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Reads `YYYY-MM-DD`, RFC 3339 timestamps and anything starting with a date.
/// Other values become `None` so one odd record cannot fail a whole page.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<RawDate>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let RawDate::Text(text) = raw else {
        debug!("Ignoring non-text joinDate");
        return Ok(None);
    };
    let date = parse_date(text.trim());
    if date.is_none() {
        debug!("Ignoring unreadable joinDate {text:?}");
    }
    Ok(date)
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.date_naive());
    }
    let prefix = text.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Body of `POST /users` and `PUT /users/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    pub join_date: NaiveDate,
}
