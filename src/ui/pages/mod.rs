// src/ui/pages/mod.rs - Page components module

use dioxus::prelude::*;

use crate::ui::components::PageHeader;

mod dashboard;
mod inventory;
mod login;
mod not_found;
mod order_detail;
mod orders;
mod payments;

pub use dashboard::Dashboard;
pub use inventory::Inventory;
pub use login::Login;
pub use not_found::NotFound;
pub use order_detail::OrderDetail;
pub use orders::Orders;
pub use payments::Payments;

/// Common page wrapper component
#[component]
pub fn PageWrapper(
    #[props(default = "".to_string())] title: String,
    #[props(default = None)] subtitle: Option<String>,
    #[props(default = None)] actions: Option<Element>,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: format!("space-y-6 {}", class),
            if !title.is_empty() {
                PageHeader { title, subtitle, actions }
            }
            {children}
        }
    }
}

/// Free-text filter box above a table
#[component]
pub fn SearchInput(
    value: String,
    on_change: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
    #[props(default = "search".to_string())] id: String,
) -> Element {
    rsx! {
        div {
            class: "relative w-full sm:w-72",
            label { r#for: "{id}", class: "sr-only", "{placeholder}" }
            input {
                id: "{id}",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                class: "block w-full pl-9 pr-3 py-2 border border-gray-300 rounded-md text-sm focus:ring-blue-500 focus:border-blue-500 dark:bg-gray-800 dark:border-gray-600 dark:text-gray-100",
                oninput: move |evt: FormEvent| on_change.call(evt.value()),
            }
            span {
                class: "absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none text-gray-400",
                aria_hidden: "true",
                "🔍"
            }
        }
    }
}

/// Single-value status filter; the empty option means every status
#[component]
pub fn StatusFilter(
    value: String,
    options: Vec<(String, String)>,
    on_change: EventHandler<String>,
    #[props(default = "status-filter".to_string())] id: String,
) -> Element {
    rsx! {
        div {
            label { r#for: "{id}", class: "sr-only", "Status" }
            select {
                id: "{id}",
                class: "block w-full sm:w-56 py-2 pl-3 pr-8 border border-gray-300 rounded-md text-sm dark:bg-gray-800 dark:border-gray-600 dark:text-gray-100",
                value: "{value}",
                onchange: move |evt: FormEvent| on_change.call(evt.value()),
                option { value: "", selected: value.is_empty(), "All statuses" }
                for (code, label) in options {
                    option {
                        key: "{code}",
                        value: "{code}",
                        selected: code == value,
                        "{label}"
                    }
                }
            }
        }
    }
}
