//! Controller behind the users table.
//!
//! All interactive state lives here so the UI only reads it and calls commands.
//! Network calls run on background tasks and report back through a `flume`
//! channel; [`UsersTable::sync`] drains it once per frame, applies results, settles
//! the debounced search and starts a fetch when the query changed.
//!
//! Every list fetch is stamped with a generation. Only the response for the most
//! recent generation is applied, so a slow response for an old query can never
//! overwrite a newer page.

use chrono::{DateTime, NaiveDate, Utc};
use flume::{Receiver, Sender};
use log::{debug, info, warn};

use crate::task;
use crate::users::api::{ApiResult, UsersApi};
use crate::users::columns::VisibleColumns;
use crate::users::debounce::Debounced;
use crate::users::form::{FormMode, UserForm};
use crate::users::model::{Role, Status, User, UserId};
use crate::users::query::{PAGE_SIZES, PageResult, UserField, UserQuery};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete user.";

/// Results coming back from background tasks.
#[derive(Debug)]
enum UsersEvent {
    Loaded {
        generation: u64,
        result: ApiResult<PageResult>,
    },
    Deleted {
        id: UserId,
        rows_before: usize,
        page_before: usize,
        result: ApiResult<()>,
    },
    Saved {
        form_token: u64,
        mode: FormMode,
        result: ApiResult<User>,
    },
}

#[derive(Debug)]
pub struct UsersTable {
    api: UsersApi,
    query: UserQuery,
    /// Search box contents; the query only sees it once debounced.
    search_input: String,
    search: Debounced,
    columns: VisibleColumns,
    page: PageResult,
    generation: u64,
    needs_fetch: bool,
    is_fetching: bool,
    error: Option<String>,
    action_error: Option<String>,
    last_fetch: Option<DateTime<Utc>>,
    form: Option<UserForm>,
    /// Bumped whenever a form opens; a save only settles the form it came from.
    form_token: u64,
    pending_delete: Option<User>,
    is_deleting: bool,
    tx: Sender<UsersEvent>,
    rx: Receiver<UsersEvent>,
}

impl UsersTable {
    /// A controller that fetches the first page on its first [`sync`](Self::sync).
    pub fn new(api: UsersApi) -> Self {
        let (tx, rx) = flume::unbounded();
        let query = UserQuery::default();
        let page = PageResult {
            page: query.page,
            page_size: query.page_size,
            ..PageResult::default()
        };
        Self {
            api,
            query,
            search_input: String::new(),
            search: Debounced::default(),
            columns: VisibleColumns::default(),
            page,
            generation: 0,
            needs_fetch: true,
            is_fetching: false,
            error: None,
            action_error: None,
            last_fetch: None,
            form: None,
            form_token: 0,
            pending_delete: None,
            is_deleting: false,
            tx,
            rx,
        }
    }

    // ---- reading ----

    pub fn query(&self) -> &UserQuery {
        &self.query
    }

    pub fn page_result(&self) -> &PageResult {
        &self.page
    }

    pub fn users(&self) -> &[User] {
        &self.page.users
    }

    pub fn columns(&self) -> &VisibleColumns {
        &self.columns
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// Fetch failure; the table shows this instead of rows.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Failure of a row action such as delete.
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.last_fetch
    }

    pub fn form(&self) -> Option<&UserForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut UserForm> {
        self.form.as_mut()
    }

    pub fn pending_delete(&self) -> Option<&User> {
        self.pending_delete.as_ref()
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Whether anything is still expected to change without user input.
    pub fn is_busy(&self) -> bool {
        self.is_fetching
            || self.is_deleting
            || self.needs_fetch
            || self.search.is_pending()
            || self.form.as_ref().is_some_and(UserForm::is_submitting)
    }

    pub fn can_go_previous(&self) -> bool {
        self.query.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.query.page < self.page.last_page()
    }

    // ---- frame loop ----

    /// Applies finished background work, settles the search box and fetches if needed.
    pub fn sync(&mut self, now: DateTime<Utc>) {
        while let Ok(event) = self.rx.try_recv() {
            self.apply(event, now);
        }

        if let Some(search) = self.search.settle(now)
            && search != self.query.search
        {
            debug!("Search settled on {search:?}");
            self.query.search = search;
            self.query.page = 1;
            self.needs_fetch = true;
        }

        if self.needs_fetch {
            self.needs_fetch = false;
            self.start_fetch();
        }
    }

    /// Forces a refetch of the current page on the next [`sync`](Self::sync).
    pub fn refresh(&mut self) {
        self.needs_fetch = true;
    }

    fn start_fetch(&mut self) {
        self.generation += 1;
        self.is_fetching = true;

        let generation = self.generation;
        let query = self.query.clone();
        let api = self.api.clone();
        let tx = self.tx.clone();
        info!(
            "Fetching users page {} (size {}, generation {generation})",
            query.page, query.page_size
        );

        task::spawn(async move {
            let result = api.list(&query).await;
            if tx.send(UsersEvent::Loaded { generation, result }).is_err() {
                debug!("Users table dropped before page {} arrived", query.page);
            }
        });
    }

    fn apply(&mut self, event: UsersEvent, now: DateTime<Utc>) {
        match event {
            UsersEvent::Loaded { generation, result } => {
                if generation != self.generation {
                    debug!(
                        "Discarding stale page (generation {generation}, current {})",
                        self.generation
                    );
                    return;
                }
                self.is_fetching = false;
                self.last_fetch = Some(now);
                match result {
                    Ok(page) => {
                        debug!(
                            "Loaded {} users of {} on page {}",
                            page.users.len(),
                            page.total_count,
                            page.page
                        );
                        self.page = page;
                        self.error = None;
                    }
                    Err(err) => {
                        warn!("Fetching users failed: {err}");
                        self.error = Some(FETCH_FAILED_MESSAGE.to_owned());
                    }
                }
            }
            UsersEvent::Deleted {
                id,
                rows_before,
                page_before,
                result,
            } => {
                self.is_deleting = false;
                match result {
                    Ok(()) => {
                        info!("Deleted user {id}");
                        self.action_error = None;
                        if rows_before == 1 && page_before > 1 && self.query.page == page_before {
                            self.query.page -= 1;
                        }
                        self.needs_fetch = true;
                    }
                    Err(err) => {
                        warn!("Deleting user {id} failed: {err}");
                        self.action_error = Some(DELETE_FAILED_MESSAGE.to_owned());
                    }
                }
            }
            UsersEvent::Saved {
                form_token,
                mode,
                result,
            } => {
                let same_form = form_token == self.form_token;
                match result {
                    Ok(user) => {
                        info!("Saved user {} ({mode:?})", user.id);
                        if same_form {
                            self.form = None;
                        }
                        self.needs_fetch = true;
                    }
                    Err(err) => {
                        warn!("Saving user failed ({mode:?}): {err}");
                        if let Some(form) = self.form.as_mut().filter(|_| same_form) {
                            form.finish_submit(false);
                        }
                    }
                }
            }
        }
    }

    // ---- query commands ----

    /// Moves to `page`, clamped to the known page range.
    pub fn set_page(&mut self, page: usize) {
        let page = page.clamp(1, self.page.last_page());
        if page != self.query.page {
            self.query.page = page;
            self.needs_fetch = true;
        }
    }

    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.query.page.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.set_page(self.query.page + 1);
    }

    pub fn last_page(&mut self) {
        self.set_page(self.page.last_page());
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if !PAGE_SIZES.contains(&page_size) {
            debug!("Non-standard page size {page_size}");
        }
        self.query.page_size = page_size;
        self.query.page = 1;
        self.needs_fetch = true;
    }

    /// Advances the sort cycle for `field` and returns to the first page.
    pub fn toggle_sort(&mut self, field: UserField) {
        self.query.sort.toggle(field);
        self.query.page = 1;
        self.needs_fetch = true;
    }

    pub fn set_status_filter(&mut self, status: Option<Status>) {
        if self.query.filters.status != status {
            self.query.filters.status = status;
            self.query.page = 1;
            self.needs_fetch = true;
        }
    }

    pub fn set_role_filter(&mut self, role: Option<Role>) {
        if self.query.filters.role != role {
            self.query.filters.role = role;
            self.query.page = 1;
            self.needs_fetch = true;
        }
    }

    /// Search box contents for direct binding; call [`search_changed`](Self::search_changed) after edits.
    pub fn search_input_mut(&mut self) -> &mut String {
        &mut self.search_input
    }

    /// Restarts the debounce with the current search box contents.
    pub fn search_changed(&mut self, now: DateTime<Utc>) {
        self.search.input(self.search_input.clone(), now);
    }

    pub fn set_search(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.search_input = text.into();
        self.search_changed(now);
    }

    pub fn toggle_column(&mut self, field: UserField) {
        self.columns.toggle(field);
    }

    pub fn columns_mut(&mut self) -> &mut VisibleColumns {
        &mut self.columns
    }

    // ---- delete ----

    /// Asks for confirmation before deleting `user`.
    pub fn request_delete(&mut self, user: &User) {
        self.pending_delete = Some(user.clone());
        self.action_error = None;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the user awaiting confirmation.
    pub fn confirm_delete(&mut self) {
        if self.is_deleting {
            return;
        }
        let Some(user) = self.pending_delete.take() else {
            return;
        };

        self.is_deleting = true;
        let id = user.id;
        let rows_before = self.page.users.len();
        let page_before = self.query.page;
        let api = self.api.clone();
        let tx = self.tx.clone();
        info!("Deleting user {id}");

        task::spawn(async move {
            let result = api.delete(&id).await;
            let event = UsersEvent::Deleted {
                id,
                rows_before,
                page_before,
                result,
            };
            if tx.send(event).is_err() {
                debug!("Users table dropped before delete of {id} finished");
            }
        });
    }

    // ---- form ----

    pub fn open_create(&mut self, today: NaiveDate) {
        self.form_token += 1;
        self.form = Some(UserForm::create(today));
    }

    pub fn open_edit(&mut self, user: &User) {
        self.form_token += 1;
        self.form = Some(UserForm::edit(user));
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Validates the open form and sends it. Invalid or duplicate submits do nothing.
    pub fn submit_form(&mut self) {
        let Some(submission) = self.form.as_mut().and_then(UserForm::begin_submit) else {
            return;
        };

        let api = self.api.clone();
        let tx = self.tx.clone();
        let mode = submission.mode;
        let form_token = self.form_token;
        info!("Submitting user form ({mode:?})");

        task::spawn(async move {
            let result = match &mode {
                FormMode::Create => api.create(&submission.input).await,
                FormMode::Edit(id) => api.update(id, &submission.input).await,
            };
            let event = UsersEvent::Saved {
                form_token,
                mode,
                result,
            };
            if tx.send(event).is_err() {
                debug!("Users table dropped before save finished");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BusinessConfig;

    fn table() -> UsersTable {
        // Nothing here reaches the network: no sync() call is made.
        UsersTable::new(UsersApi::new(BusinessConfig::new("http://127.0.0.1:9")))
    }

    fn with_total(table: &mut UsersTable, total_count: usize) {
        table.page.total_count = total_count;
        table.needs_fetch = false;
    }

    #[test]
    fn starts_on_first_page_wanting_a_fetch() {
        let table = table();
        assert_eq!(table.query().page, 1);
        assert_eq!(table.query().page_size, 5);
        assert!(table.is_busy());
    }

    #[test]
    fn page_navigation_is_clamped() {
        let mut table = table();
        with_total(&mut table, 12);

        table.last_page();
        assert_eq!(table.query().page, 3);
        table.next_page();
        assert_eq!(table.query().page, 3);
        assert!(!table.can_go_next());

        table.set_page(0);
        assert_eq!(table.query().page, 1);
        table.previous_page();
        assert_eq!(table.query().page, 1);
        assert!(!table.can_go_previous());
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut table = table();
        with_total(&mut table, 40);
        table.set_page(4);

        table.set_page_size(10);
        assert_eq!(table.query().page, 1);
        assert_eq!(table.query().page_size, 10);
        assert!(table.needs_fetch);
    }

    #[test]
    fn sort_and_filters_reset_to_first_page() {
        let mut table = table();
        with_total(&mut table, 40);

        table.set_page(3);
        table.toggle_sort(UserField::Email);
        assert_eq!(table.query().page, 1);

        table.set_page(3);
        table.set_status_filter(Some(Status::Inactive));
        assert_eq!(table.query().page, 1);

        table.set_page(3);
        table.set_role_filter(Some(Role::Manager));
        assert_eq!(table.query().page, 1);
        assert_eq!(table.query().filters.role, Some(Role::Manager));
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut table = table();
        table.generation = 2;
        table.is_fetching = true;
        let now = Utc::now();

        let stale = PageResult {
            total_count: 99,
            page: 1,
            page_size: 5,
            ..PageResult::default()
        };
        table.apply(
            UsersEvent::Loaded {
                generation: 1,
                result: Ok(stale),
            },
            now,
        );
        assert_eq!(table.page_result().total_count, 0);
        assert!(table.is_fetching());

        let fresh = PageResult {
            total_count: 3,
            page: 1,
            page_size: 5,
            ..PageResult::default()
        };
        table.apply(
            UsersEvent::Loaded {
                generation: 2,
                result: Ok(fresh),
            },
            now,
        );
        assert_eq!(table.page_result().total_count, 3);
        assert!(!table.is_fetching());
        assert_eq!(table.last_fetch(), Some(now));
    }

    #[test]
    fn deleting_last_row_steps_back_a_page() {
        let mut table = table();
        with_total(&mut table, 6);
        table.set_page(2);

        table.apply(
            UsersEvent::Deleted {
                id: UserId::Number(6),
                rows_before: 1,
                page_before: 2,
                result: Ok(()),
            },
            Utc::now(),
        );
        assert_eq!(table.query().page, 1);
        assert!(table.needs_fetch);
    }

    #[test]
    fn delete_after_moving_to_another_page_keeps_that_page() {
        let mut table = table();
        with_total(&mut table, 15);
        table.set_page(3);
        table.page.users = vec![user(11)];
        let page_before = table.query().page;

        // Confirmed on page 3, then the user went back before the delete finished.
        table.set_page(2);
        table.apply(
            UsersEvent::Deleted {
                id: UserId::Number(11),
                rows_before: 1,
                page_before,
                result: Ok(()),
            },
            Utc::now(),
        );
        assert_eq!(table.query().page, 2);
        assert!(table.needs_fetch);
    }

    #[test]
    fn failed_delete_keeps_page_and_reports() {
        let mut table = table();
        with_total(&mut table, 6);
        table.set_page(2);
        table.needs_fetch = false;

        table.apply(
            UsersEvent::Deleted {
                id: UserId::Number(6),
                rows_before: 1,
                page_before: 2,
                result: Err(crate::users::api::UsersApiError::Status(500)),
            },
            Utc::now(),
        );
        assert_eq!(table.query().page, 2);
        assert_eq!(table.action_error(), Some(DELETE_FAILED_MESSAGE));
        assert!(!table.needs_fetch);
    }

    fn user(id: u64) -> User {
        User {
            id: UserId::Number(id),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            role: Role::Developer,
            status: Status::Active,
            join_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        }
    }

    #[test]
    fn cancel_delete_clears_confirmation() {
        let mut table = table();
        let user = user(1);
        table.request_delete(&user);
        assert_eq!(table.pending_delete(), Some(&user));

        table.cancel_delete();
        assert_eq!(table.pending_delete(), None);
        assert!(!table.is_deleting());
    }

    #[test]
    fn invalid_form_submit_stays_local() {
        let mut table = table();
        table.open_create(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        table.submit_form();

        let form = table.form().unwrap();
        assert!(!form.is_submitting());
        assert_eq!(
            form.error(crate::users::form::FormField::Name),
            Some("Name is required")
        );
    }

    #[test]
    fn late_save_leaves_a_newer_form_open() {
        let mut table = table();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        table.open_create(today);
        let first = table.form_token;
        table.close_form();
        table.open_create(today);

        table.apply(
            UsersEvent::Saved {
                form_token: first,
                mode: FormMode::Create,
                result: Ok(user(9)),
            },
            Utc::now(),
        );
        assert!(table.form().is_some());
        assert!(table.needs_fetch);

        let current = table.form_token;
        table.apply(
            UsersEvent::Saved {
                form_token: current,
                mode: FormMode::Create,
                result: Ok(user(10)),
            },
            Utc::now(),
        );
        assert!(table.form().is_none());
    }
}
