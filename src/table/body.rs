// src/table/body.rs - What the table body shows

/// Placeholder rows rendered while loading
pub const SKELETON_ROWS: usize = 5;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No records found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyState {
    Loading { rows: usize, cells: usize },
    Error(String),
    Empty(String),
    Rows,
}

/// Loading wins over an error, an error over the empty message
pub fn body_state(
    loading: bool,
    error: Option<&str>,
    row_count: usize,
    empty_message: Option<&str>,
    cells: usize,
) -> BodyState {
    if loading {
        return BodyState::Loading {
            rows: SKELETON_ROWS,
            cells,
        };
    }

    if let Some(message) = error.filter(|m| !m.trim().is_empty()) {
        return BodyState::Error(message.to_string());
    }

    if row_count == 0 {
        let message = empty_message
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_EMPTY_MESSAGE);
        return BodyState::Empty(message.to_string());
    }

    BodyState::Rows
}

/// Cells per row: one per column, plus the selection and action cells
pub fn cell_count(columns: usize, selectable: bool, has_actions: bool) -> usize {
    columns + usize::from(selectable) + usize::from(has_actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence() {
        assert_eq!(
            body_state(true, Some("boom"), 3, None, 4),
            BodyState::Loading { rows: 5, cells: 4 }
        );
        assert_eq!(
            body_state(false, Some("boom"), 3, None, 4),
            BodyState::Error("boom".to_string())
        );
        assert_eq!(
            body_state(false, Some(""), 0, None, 4),
            BodyState::Empty(DEFAULT_EMPTY_MESSAGE.to_string())
        );
        assert_eq!(
            body_state(false, None, 0, Some("No orders yet"), 4),
            BodyState::Empty("No orders yet".to_string())
        );
        assert_eq!(body_state(false, None, 2, None, 4), BodyState::Rows);
    }

    #[test]
    fn skeleton_includes_extra_cells() {
        assert_eq!(cell_count(4, false, false), 4);
        assert_eq!(cell_count(4, true, true), 6);
    }
}
