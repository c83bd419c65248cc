//! Query state for the users table and the page it produces.

use std::borrow::Cow;

use crate::users::model::{Role, Status, User};

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZES: [usize; 4] = [5, 10, 25, 50];

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A displayable, sortable field of a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserField {
    Name,
    Email,
    Role,
    Status,
    JoinDate,
}

impl UserField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Role,
        Self::Status,
        Self::JoinDate,
    ];

    /// JSON field name, also used for `_sort`.
    pub const fn api_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::Status => "status",
            Self::JoinDate => "joinDate",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
            Self::Status => "Status",
            Self::JoinDate => "Join Date",
        }
    }

    /// Accepts the JSON name in any case, plus `join-date` / `join_date`.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.api_name().to_ascii_lowercase() == normalized)
    }

    /// Text of this field on `user`, as shown in the table.
    pub fn text_of(self, user: &User) -> Cow<'_, str> {
        match self {
            Self::Name => Cow::Borrowed(user.name.as_str()),
            Self::Email => Cow::Borrowed(user.email.as_str()),
            Self::Role => Cow::Borrowed(user.role.as_str()),
            Self::Status => Cow::Borrowed(user.status.as_str()),
            Self::JoinDate => user.join_date.map_or(Cow::Borrowed(""), |date| {
                Cow::Owned(date.format("%Y-%m-%d").to_string())
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Asc,
    Desc,
}

impl SortDirection {
    /// none -> asc -> desc -> none
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::Asc,
            Self::Asc => Self::Desc,
            Self::Desc => Self::None,
        }
    }

    /// `_order` value; `None` when unsorted.
    pub const fn api_name(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Asc => Some("asc"),
            Self::Desc => Some("desc"),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            "none" | "" => Some(Self::None),
            _ => None,
        }
    }
}

/// Current sort column and direction. An unsorted config has no field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    field: Option<UserField>,
    direction: SortDirection,
}

impl SortConfig {
    pub fn new(field: UserField, direction: SortDirection) -> Self {
        match direction {
            SortDirection::None => Self::default(),
            direction => Self {
                field: Some(field),
                direction,
            },
        }
    }

    /// Advances the sort cycle for `field`. A different column starts at ascending.
    pub fn toggle(&mut self, field: UserField) {
        if self.field == Some(field) {
            *self = Self::new(field, self.direction.next());
        } else {
            *self = Self::new(field, SortDirection::Asc);
        }
    }

    pub fn field(&self) -> Option<UserField> {
        self.field
    }

    /// Field and direction when the table is actually sorted.
    pub fn active(&self) -> Option<(UserField, SortDirection)> {
        self.field.map(|field| (field, self.direction))
    }

    pub fn direction_for(&self, field: UserField) -> SortDirection {
        if self.field == Some(field) {
            self.direction
        } else {
            SortDirection::None
        }
    }
}

/// Column filters; `None` means "any".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    pub status: Option<Status>,
    pub role: Option<Role>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.role.is_none()
    }

    pub fn matches(&self, user: &User) -> bool {
        self.status.is_none_or(|status| user.status == status)
            && self.role.as_ref().is_none_or(|role| &user.role == role)
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        if let Some(role) = &self.role {
            pairs.push(("role", role.as_str().to_owned()));
        }
        pairs
    }
}

/// Everything that decides which rows the table shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub sort: SortConfig,
    pub search: String,
    pub filters: Filters,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortConfig::default(),
            search: String::new(),
            filters: Filters::default(),
        }
    }
}

impl UserQuery {
    /// Trimmed search text, or `None` when there is nothing to search for.
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }

    /// Index of the first row of the current page.
    pub fn offset(&self) -> usize {
        self.page.max(1).saturating_sub(1) * self.page_size.max(1)
    }

    /// Parameters for a server-side paged request.
    pub fn server_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("_page", self.page.max(1).to_string()),
            ("_limit", self.page_size.max(1).to_string()),
        ];
        if let Some((field, direction)) = self.sort.active()
            && let Some(order) = direction.api_name()
        {
            pairs.push(("_sort", field.api_name().to_owned()));
            pairs.push(("_order", order.to_owned()));
        }
        pairs.extend(self.filters.query_pairs());
        pairs
    }
}

/// One page of users plus the totals needed for the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageResult {
    pub users: Vec<User>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
}

impl PageResult {
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size.max(1))
    }

    /// Highest page the navigation may go to; at least 1.
    pub fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Number of rows up to and including this page; 0 for an empty page.
    pub fn shown_through(&self) -> usize {
        if self.users.is_empty() {
            0
        } else {
            self.page.max(1).saturating_sub(1) * self.page_size + self.users.len()
        }
    }

    /// e.g. `Showing 6 of 6 entries`
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} entries",
            self.shown_through(),
            self.total_count
        )
    }

    /// e.g. `Page 2 of 2`
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.last_page())
    }
}
