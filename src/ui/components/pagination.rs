// src/ui/components/pagination.rs - Pagination bar under the data table

use dioxus::prelude::*;

use crate::table::{PageInfo, PAGE_SIZE_OPTIONS};

/// Pagination inputs for the data table. The table renders the bar only;
/// slicing the rows is the owner's job.
#[derive(Clone, PartialEq)]
pub struct TablePagination {
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub on_page_change: EventHandler<usize>,
    pub on_page_size_change: EventHandler<usize>,
}

impl TablePagination {
    pub fn info(&self) -> PageInfo {
        PageInfo::new(self.page, self.page_size, self.total)
    }
}

#[component]
pub fn Pagination(pagination: TablePagination) -> Element {
    let info = pagination.info();
    let total_pages = info.total_pages();
    let on_page_change = pagination.on_page_change;
    let on_page_size_change = pagination.on_page_size_change;

    let nav_button = |label: &'static str, target: usize, disabled: bool| {
        rsx! {
            button {
                r#type: "button",
                class: "px-2 py-1 text-sm rounded-md border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700 disabled:opacity-50 disabled:cursor-not-allowed",
                disabled: disabled,
                aria_label: label,
                onclick: move |_| on_page_change.call(target),
                "{label}"
            }
        }
    };

    rsx! {
        div {
            class: "flex flex-col sm:flex-row items-center justify-between gap-3 px-4 py-3 border-t border-gray-200 dark:border-gray-700",

            div {
                class: "flex items-center gap-2 text-sm text-gray-600 dark:text-gray-300",
                span { "{info.range_label()}" }
                label {
                    class: "ml-4",
                    r#for: "page-size",
                    "Rows per page"
                }
                select {
                    id: "page-size",
                    class: "border-gray-300 rounded-md text-sm dark:bg-gray-800 dark:border-gray-600",
                    value: "{info.page_size}",
                    onchange: move |evt: FormEvent| {
                        if let Ok(size) = evt.value().parse::<usize>() {
                            on_page_size_change.call(size);
                        }
                    },
                    for size in PAGE_SIZE_OPTIONS {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == info.page_size,
                            "{size}"
                        }
                    }
                }
            }

            nav {
                class: "flex items-center gap-1",
                aria_label: "Pagination",
                {nav_button("First", 1, info.first_disabled())}
                {nav_button("Previous", info.page.saturating_sub(1).max(1), info.first_disabled())}
                for page in info.window() {
                    button {
                        key: "{page}",
                        r#type: "button",
                        class: if page == info.page {
                            "px-3 py-1 text-sm rounded-md bg-blue-600 text-white"
                        } else {
                            "px-3 py-1 text-sm rounded-md text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700"
                        },
                        aria_current: if page == info.page { "page" } else { "false" },
                        onclick: move |_| on_page_change.call(page),
                        "{page}"
                    }
                }
                {nav_button("Next", (info.page + 1).min(total_pages.max(1)), info.last_disabled())}
                {nav_button("Last", total_pages.max(1), info.last_disabled())}
            }
        }
    }
}
