//! Picker container
//!
//! A picker is usually several independent columns (year / month / day). The
//! container is an explicit registry: columns are added and removed through
//! its API and coordinate only by being owned side by side, never through
//! shared state. Columns hold no back-reference to the container.

use slotmap::{new_key_type, SlotMap};

use crate::column::Column;

new_key_type! {
    /// Unique identifier for a registered column
    pub struct ColumnId;
}

/// Registry of independently owned picker columns
#[derive(Default)]
pub struct PickerContainer {
    columns: SlotMap<ColumnId, Column>,
}

impl PickerContainer {
    pub fn new() -> Self {
        Self {
            columns: SlotMap::with_key(),
        }
    }

    /// Register a column and return its handle
    pub fn add_column(&mut self, column: Column) -> ColumnId {
        self.columns.insert(column)
    }

    /// Deregister a column, returning it if it was present
    pub fn remove_column(&mut self, id: ColumnId) -> Option<Column> {
        self.columns.remove(id)
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    pub fn column_mut(&mut self, id: ColumnId) -> Option<&mut Column> {
        self.columns.get_mut(id)
    }

    /// Iterate over all registered columns
    pub fn iter(&self) -> impl Iterator<Item = (ColumnId, &Column)> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnConfig;
    use drumroll_core::PickerOption;

    fn column(labels: &[&str]) -> Column {
        let options = labels.iter().map(|l| PickerOption::text(*l)).collect();
        Column::new(ColumnConfig::new(options).item_height(40.0)).unwrap()
    }

    #[test]
    fn registers_and_removes_columns() {
        let mut container = PickerContainer::new();
        assert!(container.is_empty());

        let hours = container.add_column(column(&["10", "11", "12"]));
        let minutes = container.add_column(column(&["00", "30"]));
        assert_eq!(container.len(), 2);

        container.column_mut(minutes).unwrap().set_index(1, false);
        assert_eq!(container.column(minutes).unwrap().current_index(), 1);
        // Sibling columns are untouched
        assert_eq!(container.column(hours).unwrap().current_index(), 0);

        let removed = container.remove_column(hours).unwrap();
        assert_eq!(removed.options().len(), 3);
        assert_eq!(container.len(), 1);
        assert!(container.column(hours).is_none());
    }

    #[test]
    fn iterates_registered_columns() {
        let mut container = PickerContainer::new();
        container.add_column(column(&["a"]));
        container.add_column(column(&["b"]));
        assert_eq!(container.iter().count(), 2);
    }
}
