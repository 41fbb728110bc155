// src/table/sort.rs - Single-column sort state and the click cycle

use serde::{Deserialize, Serialize};

use super::column::{Column, TableRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Value for the `aria-sort` attribute
    pub fn aria(&self) -> &'static str {
        match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        }
    }
}

/// The active sort: at most one column at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Builds a state from the controlled `sort_by` / `sort_direction` pair
    pub fn from_parts(column: Option<&str>, direction: Option<SortDirection>) -> Option<Self> {
        match (column, direction) {
            (Some(column), Some(direction)) if !column.is_empty() => {
                Some(Self::new(column, direction))
            }
            _ => None,
        }
    }

    pub fn direction_for(current: Option<&SortState>, column: &str) -> Option<SortDirection> {
        current
            .filter(|s| s.column == column)
            .map(|s| s.direction)
    }
}

/// Sort state after a header click on `column`:
/// other/none → Asc → Desc → none.
pub fn next_sort(current: Option<&SortState>, column: &str) -> Option<SortState> {
    match current {
        Some(state) if state.column == column => match state.direction {
            SortDirection::Asc => Some(SortState::new(column, SortDirection::Desc)),
            SortDirection::Desc => None,
        },
        _ => Some(SortState::new(column, SortDirection::Asc)),
    }
}

/// What a header click asks a controlled table's owner to apply.
/// `direction: None` means the sort was cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortChange {
    pub column: String,
    pub direction: Option<SortDirection>,
}

impl SortChange {
    /// Header click on `column` given the current sort
    pub fn after_click(current: Option<&SortState>, column: &str) -> Self {
        Self {
            column: column.to_string(),
            direction: next_sort(current, column).map(|s| s.direction),
        }
    }

    pub fn state(&self) -> Option<SortState> {
        self.direction
            .map(|direction| SortState::new(self.column.clone(), direction))
    }
}

/// Rows in display order. Stable, so ties keep their input order; without an
/// active sort (or for an unknown column) the input order is returned.
pub fn sort_rows<T: TableRecord>(
    rows: &[T],
    columns: &[Column<T>],
    sort: Option<&SortState>,
) -> Vec<T> {
    let mut sorted = rows.to_vec();

    let Some(state) = sort else {
        return sorted;
    };
    let Some(column) = columns.iter().find(|c| c.key == state.column) else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let ord = column.value(a).compare(&column.value(b));
        match state.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::tests::{row, Row};

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::field("name", "Name").sortable(),
            Column::field("amount", "Amount").sortable(),
        ]
    }

    #[test]
    fn click_cycle_returns_to_unsorted() {
        let first = next_sort(None, "name");
        assert_eq!(first, Some(SortState::new("name", SortDirection::Asc)));

        let second = next_sort(first.as_ref(), "name");
        assert_eq!(second, Some(SortState::new("name", SortDirection::Desc)));

        let third = next_sort(second.as_ref(), "name");
        assert_eq!(third, None);

        assert_eq!(
            next_sort(third.as_ref(), "name"),
            Some(SortState::new("name", SortDirection::Asc))
        );
    }

    #[test]
    fn clicking_another_column_replaces_the_sort() {
        let desc = SortState::new("name", SortDirection::Desc);
        let next = next_sort(Some(&desc), "amount").unwrap();
        assert_eq!(next.column, "amount");
        assert_eq!(next.direction, SortDirection::Asc);
        assert_eq!(SortState::direction_for(Some(&next), "name"), None);
    }

    #[test]
    fn rows_sort_stably_in_both_directions() {
        let rows = vec![
            row("1", "b", 10.0),
            row("2", "a", 5.0),
            row("3", "c", 10.0),
        ];
        let cols = columns();

        let asc = sort_rows(&rows, &cols, Some(&SortState::new("amount", SortDirection::Asc)));
        let ids: Vec<_> = asc.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);

        let desc = sort_rows(&rows, &cols, Some(&SortState::new("amount", SortDirection::Desc)));
        let ids: Vec<_> = desc.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2"]);

        assert_eq!(sort_rows(&rows, &cols, None), rows);
        assert_eq!(
            sort_rows(&rows, &cols, Some(&SortState::new("missing", SortDirection::Asc))),
            rows
        );
    }

    #[test]
    fn controlled_parts() {
        assert_eq!(SortState::from_parts(Some("name"), None), None);
        assert_eq!(
            SortState::from_parts(Some("name"), Some(SortDirection::Desc)),
            Some(SortState::new("name", SortDirection::Desc))
        );
    }

    #[test]
    fn controlled_change_reports_cleared_sort() {
        let desc = SortState::new("name", SortDirection::Desc);
        let change = SortChange::after_click(Some(&desc), "name");
        assert_eq!(change.column, "name");
        assert_eq!(change.direction, None);
        assert_eq!(change.state(), None);

        let change = SortChange::after_click(Some(&desc), "amount");
        assert_eq!(change.state(), Some(SortState::new("amount", SortDirection::Asc)));
    }
}
