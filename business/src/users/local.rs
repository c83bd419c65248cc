//! Client-side search, sort and paging over a fully fetched collection.
//!
//! Used when a free-text search is active: the backend cannot be trusted to search,
//! so the whole (filtered) collection is fetched and narrowed here with the same
//! page arithmetic the server path uses.

use std::cmp::Ordering;

use crate::users::model::User;
use crate::users::query::{PageResult, SortConfig, SortDirection, UserField, UserQuery};

/// Fields searched by free text.
const SEARCH_FIELDS: [UserField; 4] = [
    UserField::Name,
    UserField::Email,
    UserField::Role,
    UserField::Status,
];

/// Case-insensitive substring match over name, email, role and status.
pub fn matches_search(user: &User, term: &str) -> bool {
    let needle = term.to_lowercase();
    SEARCH_FIELDS
        .iter()
        .any(|field| field.text_of(user).to_lowercase().contains(&needle))
}

fn compare(a: &User, b: &User, field: UserField) -> Ordering {
    match field {
        UserField::JoinDate => a.join_date.cmp(&b.join_date),
        field => field
            .text_of(a)
            .to_lowercase()
            .cmp(&field.text_of(b).to_lowercase()),
    }
}

/// Stable sort by the active sort config; no-op when unsorted.
pub fn sort_users(users: &mut [User], sort: SortConfig) {
    let Some((field, direction)) = sort.active() else {
        return;
    };
    match direction {
        SortDirection::Asc => users.sort_by(|a, b| compare(a, b, field)),
        SortDirection::Desc => users.sort_by(|a, b| compare(b, a, field)),
        SortDirection::None => {}
    }
}

/// Narrows `all` to the requested page of `query`.
pub fn search_page(all: Vec<User>, query: &UserQuery) -> PageResult {
    let term = query.search_term().unwrap_or_default();
    let mut matched: Vec<User> = all
        .into_iter()
        .filter(|user| query.filters.matches(user))
        .filter(|user| matches_search(user, term))
        .collect();

    sort_users(&mut matched, query.sort);

    let total_count = matched.len();
    let page_size = query.page_size.max(1);
    let users = matched
        .into_iter()
        .skip(query.offset())
        .take(page_size)
        .collect();

    PageResult {
        users,
        total_count,
        page: query.page.max(1),
        page_size,
    }
}
