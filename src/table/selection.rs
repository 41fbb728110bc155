// src/table/selection.rs - Row selection keyed by row identity

use super::column::{row_key_of, RowKey, TableRecord};

/// Tri-state of the "select all" checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

impl HeaderCheckState {
    pub fn is_checked(&self) -> bool {
        matches!(self, Self::Checked)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Indeterminate)
    }
}

pub fn row_keys<T: TableRecord>(rows: &[T], key: &RowKey<T>) -> Vec<String> {
    rows.iter().map(|row| row_key_of(key, row)).collect()
}

/// Adds or removes exactly `key`; every other membership is untouched
pub fn toggle_row(selected: &[String], key: &str) -> Vec<String> {
    if selected.iter().any(|k| k == key) {
        selected.iter().filter(|k| *k != key).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(key.to_string());
        next
    }
}

/// Header toggle: everything selected → nothing, otherwise → everything
pub fn toggle_all(selected: &[String], all_keys: &[String]) -> Vec<String> {
    if all_selected(selected, all_keys) {
        Vec::new()
    } else {
        all_keys.to_vec()
    }
}

pub fn header_state(selected: &[String], all_keys: &[String]) -> HeaderCheckState {
    let count = selected_count(selected, all_keys);
    let total = all_keys.len();

    if total > 0 && count == total {
        HeaderCheckState::Checked
    } else if count > 0 {
        HeaderCheckState::Indeterminate
    } else {
        HeaderCheckState::Unchecked
    }
}

pub fn is_selected(selected: &[String], key: &str) -> bool {
    selected.iter().any(|k| k == key)
}

fn all_selected(selected: &[String], all_keys: &[String]) -> bool {
    !all_keys.is_empty() && selected_count(selected, all_keys) == all_keys.len()
}

fn selected_count(selected: &[String], all_keys: &[String]) -> usize {
    all_keys
        .iter()
        .filter(|key| is_selected(selected, key))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::tests::row;

    fn keys(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn select_all_then_clear() {
        let all = keys(&["a", "b", "c"]);

        let everything = toggle_all(&[], &all);
        assert_eq!(everything.len(), 3);
        assert_eq!(header_state(&everything, &all), HeaderCheckState::Checked);

        let nothing = toggle_all(&everything, &all);
        assert!(nothing.is_empty());
        assert_eq!(header_state(&nothing, &all), HeaderCheckState::Unchecked);

        // Partially selected → select all
        let partial = keys(&["b"]);
        assert_eq!(toggle_all(&partial, &all), all);
    }

    #[test]
    fn row_toggle_only_touches_its_row() {
        let selected = keys(&["a", "c"]);

        let removed = toggle_row(&selected, "a");
        assert_eq!(removed, keys(&["c"]));

        let added = toggle_row(&selected, "b");
        assert!(is_selected(&added, "a"));
        assert!(is_selected(&added, "b"));
        assert!(is_selected(&added, "c"));
        assert_eq!(added.len(), 3);
    }

    #[test]
    fn indeterminate_only_for_partial_selection() {
        let all = keys(&["a", "b", "c"]);
        assert_eq!(header_state(&keys(&["a"]), &all), HeaderCheckState::Indeterminate);
        assert_eq!(
            header_state(&keys(&["a", "b"]), &all),
            HeaderCheckState::Indeterminate
        );
        assert_eq!(header_state(&[], &all), HeaderCheckState::Unchecked);

        // Empty data is never checked
        assert_eq!(header_state(&[], &[]), HeaderCheckState::Unchecked);
        assert!(toggle_all(&[], &[]).is_empty());
    }

    #[test]
    fn stale_keys_do_not_count() {
        let all = keys(&["a", "b"]);
        let selected = keys(&["a", "gone"]);
        assert_eq!(header_state(&selected, &all), HeaderCheckState::Indeterminate);
    }

    #[test]
    fn keys_come_from_the_row_key_accessor() {
        let rows = vec![row("1", "x", 1.0), row("2", "y", 2.0)];
        assert_eq!(row_keys(&rows, &RowKey::default()), keys(&["1", "2"]));
        assert_eq!(row_keys(&rows, &RowKey::Field("name")), keys(&["x", "y"]));
    }
}
