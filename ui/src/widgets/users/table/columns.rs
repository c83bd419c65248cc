//! Column definitions for the users table.

use egui_extras::Column;
use roster_business::UserField;

pub const ROLE_WIDTH: f32 = 130.0;
pub const STATUS_WIDTH: f32 = 80.0;
pub const JOIN_DATE_WIDTH: f32 = 100.0;
pub const ACTIONS_WIDTH: f32 = 120.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Column for one field; name and email share the flexible space.
#[inline]
pub fn field_column(field: UserField) -> Column {
    match field {
        UserField::Name => Column::auto().at_least(120.0).clip(true),
        UserField::Email => Column::remainder().at_least(160.0).clip(true),
        UserField::Role => Column::exact(ROLE_WIDTH),
        UserField::Status => Column::exact(STATUS_WIDTH),
        UserField::JoinDate => Column::exact(JOIN_DATE_WIDTH),
    }
}

/// Columns for the visible fields in order, followed by the actions column.
#[inline]
pub fn table_columns(fields: &[UserField]) -> Vec<Column> {
    fields
        .iter()
        .map(|field| field_column(*field))
        .chain(std::iter::once(Column::exact(ACTIONS_WIDTH)))
        .collect()
}
