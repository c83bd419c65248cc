//! User records management: REST client, table controller, record form and
//! column visibility.

pub mod api;
pub mod columns;
pub mod debounce;
pub mod form;
pub mod local;
pub mod model;
pub mod query;
pub mod table;

pub use api::{ApiResult, UsersApi, UsersApiError};
pub use columns::VisibleColumns;
pub use form::{FormErrors, FormField, FormMode, FormSubmission, UserForm, UserFormData};
pub use model::{Role, Status, User, UserId, UserInput};
pub use query::{
    DEFAULT_PAGE_SIZE, Filters, PAGE_SIZES, PageResult, SortConfig, SortDirection, UserField,
    UserQuery,
};
pub use table::UsersTable;
