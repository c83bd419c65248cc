//! Which user fields the table renders. Purely presentational; never affects queries.

use std::collections::BTreeMap;

use crate::users::query::UserField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleColumns {
    visible: BTreeMap<UserField, bool>,
}

impl Default for VisibleColumns {
    fn default() -> Self {
        Self {
            visible: UserField::ALL.into_iter().map(|field| (field, true)).collect(),
        }
    }
}

impl VisibleColumns {
    pub fn is_visible(&self, field: UserField) -> bool {
        self.visible.get(&field).copied().unwrap_or(true)
    }

    pub fn set(&mut self, field: UserField, visible: bool) {
        self.visible.insert(field, visible);
    }

    pub fn toggle(&mut self, field: UserField) {
        let visible = self.is_visible(field);
        self.set(field, !visible);
    }

    /// Visible fields in table order.
    pub fn fields(&self) -> Vec<UserField> {
        UserField::ALL
            .into_iter()
            .filter(|field| self.is_visible(*field))
            .collect()
    }

    /// Every field with its flag, in table order.
    pub fn entries(&self) -> impl Iterator<Item = (UserField, bool)> + '_ {
        UserField::ALL
            .into_iter()
            .map(|field| (field, self.is_visible(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_columns_start_visible() {
        let columns = VisibleColumns::default();
        assert_eq!(columns.fields(), UserField::ALL);
    }

    #[test]
    fn toggles_are_independent() {
        let mut columns = VisibleColumns::default();
        columns.toggle(UserField::Email);
        columns.toggle(UserField::JoinDate);

        assert_eq!(
            columns.fields(),
            [UserField::Name, UserField::Role, UserField::Status]
        );

        columns.toggle(UserField::Email);
        assert!(columns.is_visible(UserField::Email));
        assert!(!columns.is_visible(UserField::JoinDate));
    }

    #[test]
    fn every_column_may_be_hidden() {
        let mut columns = VisibleColumns::default();
        for field in UserField::ALL {
            columns.set(field, false);
        }
        assert!(columns.fields().is_empty());
        assert!(columns.entries().all(|(_, visible)| !visible));
    }
}
