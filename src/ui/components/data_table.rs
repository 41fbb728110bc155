// src/ui/components/data_table.rs - Generic data table component

use dioxus::prelude::*;

use super::pagination::{Pagination, TablePagination};
use crate::table::{
    body_state, cell_count, header_state, is_selected, next_sort, row_key_of, row_keys,
    sort_rows, toggle_all, toggle_row, BodyState, Column, HeaderCheckState, RowAction, RowKey,
    SortChange, SortDirection, SortState, TableRecord,
};

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps<T: TableRecord> {
    pub data: Vec<T>,
    pub columns: Vec<Column<T>>,
    #[props(default)]
    pub actions: Vec<RowAction<T>>,
    #[props(default)]
    pub selectable: bool,
    /// Row keys of the selected rows
    #[props(default)]
    pub selected_rows: Vec<String>,
    /// Receives the complete new selection
    #[props(default)]
    pub on_selection_change: Option<EventHandler<Vec<String>>>,
    #[props(default)]
    pub sort_by: Option<String>,
    #[props(default)]
    pub sort_direction: Option<SortDirection>,
    /// Makes sorting controlled: the table reports header clicks and shows
    /// `sort_by`/`sort_direction`
    #[props(default)]
    pub on_sort: Option<EventHandler<SortChange>>,
    #[props(default)]
    pub pagination: Option<TablePagination>,
    #[props(default)]
    pub loading: bool,
    #[props(default)]
    pub error_message: Option<String>,
    #[props(default)]
    pub empty_message: Option<String>,
    #[props(default)]
    pub row_key: RowKey<T>,
    #[props(default)]
    pub on_row_click: Option<EventHandler<T>>,
    #[props(default)]
    pub caption: Option<String>,
}

/// Table over any [`TableRecord`]: sortable headers, row selection, per-row
/// actions, loading/error/empty states and an optional pagination bar.
#[allow(non_snake_case)]
pub fn DataTable<T: TableRecord>(props: DataTableProps<T>) -> Element {
    let internal_sort = use_signal(|| None::<SortState>);
    let select_all_id = use_hook(|| format!("select-all-{}", uuid::Uuid::new_v4().simple()));

    let controlled = props.on_sort.is_some();
    let active_sort = if controlled {
        SortState::from_parts(props.sort_by.as_deref(), props.sort_direction)
    } else {
        internal_sort()
    };

    let rows = sort_rows(&props.data, &props.columns, active_sort.as_ref());
    let has_actions = !props.actions.is_empty();
    let cells = cell_count(props.columns.len(), props.selectable, has_actions);
    let body = body_state(
        props.loading,
        props.error_message.as_deref(),
        rows.len(),
        props.empty_message.as_deref(),
        cells,
    );

    let all_keys = row_keys(&props.data, &props.row_key);
    let header_check = header_state(&props.selected_rows, &all_keys);
    // `indeterminate` is a DOM property with no HTML attribute
    let indeterminate = header_check.is_indeterminate();
    let checkbox_id = select_all_id.clone();
    use_effect(use_reactive!(|(checkbox_id, indeterminate)| {
        let _ = document::eval(&indeterminate_script(&checkbox_id, indeterminate));
    }));
    let header_aria = match header_check {
        HeaderCheckState::Checked => "true",
        HeaderCheckState::Indeterminate => "mixed",
        HeaderCheckState::Unchecked => "false",
    };

    let header_cells = props.columns.iter().map(|column| {
        let direction = SortState::direction_for(active_sort.as_ref(), &column.key);
        let aria_sort = direction.map(|d| d.aria()).unwrap_or("none");
        let indicator = match direction {
            Some(SortDirection::Asc) => "▲",
            Some(SortDirection::Desc) => "▼",
            None => "",
        };
        let sortable = column.sortable;
        let change = SortChange::after_click(active_sort.as_ref(), &column.key);
        let next = next_sort(active_sort.as_ref(), &column.key);
        let on_sort = props.on_sort;
        let style = column
            .width
            .as_ref()
            .map(|w| format!("width: {}", w))
            .unwrap_or_default();

        rsx! {
            th {
                key: "{column.key}",
                scope: "col",
                class: format!(
                    "px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400 {} {}",
                    if sortable { "cursor-pointer select-none hover:text-gray-700 dark:hover:text-gray-200" } else { "" },
                    column.class.as_deref().unwrap_or("")
                ),
                style: "{style}",
                aria_sort: aria_sort,
                onclick: move |_| {
                    if !sortable {
                        return;
                    }
                    match on_sort {
                        Some(handler) => handler.call(change.clone()),
                        None => {
                            let mut sort = internal_sort;
                            sort.set(next.clone());
                        }
                    }
                },
                span { class: "inline-flex items-center gap-1",
                    "{column.title}"
                    if sortable {
                        span { class: "text-gray-400 w-3", "{indicator}" }
                    }
                }
            }
        }
    });

    let on_selection_change = props.on_selection_change;

    let body_rows = match &body {
        BodyState::Loading { rows: count, cells } => {
            let skeleton = (0..*count).map(|i| {
                rsx! {
                    tr { key: "skeleton-{i}", class: "animate-pulse",
                        for c in 0..*cells {
                            td { key: "{c}", class: "px-4 py-3",
                                div { class: "h-4 bg-gray-200 dark:bg-gray-700 rounded" }
                            }
                        }
                    }
                }
            });
            rsx! { {skeleton} }
        }
        BodyState::Error(message) => rsx! {
            tr {
                td { colspan: "{cells}", class: "px-4 py-8",
                    div { class: "rounded-md bg-red-50 dark:bg-red-900/30 border border-red-200 dark:border-red-800 p-4 text-sm text-red-700 dark:text-red-300",
                        role: "alert",
                        "{message}"
                    }
                }
            }
        },
        BodyState::Empty(message) => rsx! {
            tr {
                td { colspan: "{cells}", class: "px-4 py-8 text-center text-sm text-gray-500 dark:text-gray-400",
                    "{message}"
                }
            }
        },
        BodyState::Rows => {
            let rendered = rows.iter().map(|row| {
                render_row(
                    row,
                    &props.columns,
                    &props.actions,
                    &props.row_key,
                    props.selectable,
                    &props.selected_rows,
                    on_selection_change,
                    props.on_row_click,
                )
            });
            rsx! { {rendered} }
        }
    };

    let all_selected = {
        let selected = props.selected_rows.clone();
        let keys = all_keys.clone();
        move |_: FormEvent| {
            if let Some(handler) = on_selection_change {
                handler.call(toggle_all(&selected, &keys));
            }
        }
    };

    rsx! {
        div {
            class: "bg-white dark:bg-gray-800 shadow rounded-lg overflow-hidden",
            div {
                class: "overflow-x-auto",
                table {
                    class: "min-w-full divide-y divide-gray-200 dark:divide-gray-700",
                    if let Some(text) = &props.caption {
                        caption { class: "sr-only", "{text}" }
                    }
                    thead {
                        class: "bg-gray-50 dark:bg-gray-900",
                        tr {
                            if props.selectable {
                                th { scope: "col", class: "w-10 px-4 py-3",
                                    input {
                                        r#type: "checkbox",
                                        class: "rounded border-gray-300",
                                        aria_label: "Select all rows",
                                        id: "{select_all_id}",
                                        aria_checked: header_aria,
                                        checked: header_check.is_checked(),
                                        disabled: props.loading || all_keys.is_empty(),
                                        onchange: all_selected,
                                    }
                                }
                            }
                            {header_cells}
                            if has_actions {
                                th { scope: "col", class: "px-4 py-3 text-right text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400",
                                    "Actions"
                                }
                            }
                        }
                    }
                    tbody {
                        class: "divide-y divide-gray-200 dark:divide-gray-700",
                        {body_rows}
                    }
                }
            }
            if let Some(pagination) = props.pagination.clone() {
                Pagination { pagination }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
/// Sets the mixed state of the select-all checkbox `id`
fn indeterminate_script(id: &str, indeterminate: bool) -> String {
    format!(
        r#"const box = document.getElementById("{id}");
if (box) {{ box.indeterminate = {indeterminate}; }}"#
    )
}

fn render_row<T: TableRecord>(
    row: &T,
    columns: &[Column<T>],
    actions: &[RowAction<T>],
    row_key: &RowKey<T>,
    selectable: bool,
    selected_rows: &[String],
    on_selection_change: Option<EventHandler<Vec<String>>>,
    on_row_click: Option<EventHandler<T>>,
) -> Element {
    let key = row_key_of(row_key, row);
    let selected = is_selected(selected_rows, &key);

    let toggle = {
        let key = key.clone();
        let current = selected_rows.to_vec();
        move |_: FormEvent| {
            if let Some(handler) = on_selection_change {
                handler.call(toggle_row(&current, &key));
            }
        }
    };

    let click = {
        let row = row.clone();
        move |_: MouseEvent| {
            if let Some(handler) = on_row_click {
                handler.call(row.clone());
            }
        }
    };

    let cells = columns.iter().map(|column| {
        let content = match &column.render {
            Some(render) => render(row),
            None => {
                let text = column.value(row).to_string();
                rsx! { "{text}" }
            }
        };
        rsx! {
            td {
                key: "{column.key}",
                class: format!(
                    "px-4 py-3 whitespace-nowrap text-sm text-gray-900 dark:text-gray-100 {}",
                    column.class.as_deref().unwrap_or("")
                ),
                {content}
            }
        }
    });

    let buttons = actions.iter().enumerate().map(|(i, action)| {
        let disabled = action.is_disabled(row);
        let action_for_click = action.clone();
        let row = row.clone();
        rsx! {
            button {
                key: "{i}",
                r#type: "button",
                class: format!(
                    "inline-flex items-center gap-1 px-2.5 py-1.5 border text-xs font-medium rounded-md focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed {}",
                    action.variant.classes()
                ),
                disabled: disabled,
                title: "{action.label}",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    action_for_click.invoke(&row);
                },
                if let Some(icon) = &action.icon {
                    span { aria_hidden: "true", "{icon}" }
                }
                "{action.label}"
            }
        }
    });

    rsx! {
        tr {
            key: "{key}",
            class: format!(
                "{} {}",
                if selected { "bg-blue-50 dark:bg-blue-900/30" } else { "hover:bg-gray-50 dark:hover:bg-gray-700/50" },
                if on_row_click.is_some() { "cursor-pointer" } else { "" }
            ),
            aria_selected: selectable && selected,
            onclick: click,
            if selectable {
                td { class: "w-10 px-4 py-3",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    input {
                        r#type: "checkbox",
                        class: "rounded border-gray-300",
                        aria_label: "Select row {key}",
                        checked: selected,
                        onchange: toggle,
                    }
                }
            }
            {cells}
            if !actions.is_empty() {
                td { class: "px-4 py-3 whitespace-nowrap text-right",
                    div { class: "inline-flex gap-2", {buttons} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_state_is_set_as_a_property() {
        let script = indeterminate_script("select-all-1", true);
        assert!(script.contains(r#"getElementById("select-all-1")"#));
        assert!(script.contains("box.indeterminate = true;"));

        let cleared = indeterminate_script("select-all-1", false);
        assert!(cleared.contains("box.indeterminate = false;"));
    }
}
