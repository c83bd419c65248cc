//! Users management module.
//!
//! - `panel`: main panel wiring toolbar, table, pagination and modals together
//! - `toolbar`: add button, search box and filters
//! - `column_picker`: column visibility dropdown
//! - `table`: table rendering components (columns, header, row, cells)
//! - `pagination`: summary line, page-size selector and page navigation
//! - `modals`: record form and delete confirmation

pub mod column_picker;
mod modals;
pub mod pagination;
mod panel;
pub mod table;
mod toolbar;

pub use panel::users_panel;
