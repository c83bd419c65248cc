//! Business layer for the roster user-management tools.
//!
//! Everything here is UI-free: the egui app and the CLI both drive these types and
//! only render what they expose.

pub mod config;
pub mod http;
pub mod task;
pub mod users;

pub use config::{BusinessConfig, ConfigError, DEFAULT_API_BASE_URL};
pub use users::{
    PageResult, Role, Status, User, UserField, UserForm, UserId, UserInput, UserQuery, UsersApi,
    UsersApiError, UsersTable,
};
