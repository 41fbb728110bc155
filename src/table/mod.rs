// src/table/mod.rs - Headless data table: columns, sorting, selection, paging

//! Everything the data table decides lives here as plain functions over plain
//! data; `ui::components::data_table` only renders the results.

pub mod action;
pub mod body;
pub mod column;
pub mod pagination;
pub mod selection;
pub mod sort;

pub use action::{ButtonVariant, RowAction};
pub use body::{body_state, cell_count, BodyState, DEFAULT_EMPTY_MESSAGE, SKELETON_ROWS};
pub use column::{row_key_of, Accessor, CellRenderer, CellValue, Column, RowKey, TableRecord};
pub use pagination::{clamp_page, page_window, range_label, total_pages, PageInfo, PAGE_SIZE_OPTIONS};
pub use selection::{header_state, is_selected, row_keys, toggle_all, toggle_row, HeaderCheckState};
pub use sort::{next_sort, sort_rows, SortChange, SortDirection, SortState};
