// src/ui/components/mod.rs - Reusable UI components

use dioxus::prelude::*;

use crate::table::ButtonVariant;

pub mod data_table;
pub mod modal;
pub mod pagination;
pub mod status;

pub use data_table::{DataTable, DataTableProps};
pub use modal::{next_focus_index, ConfirmDialog, Modal, ModalSize};
pub use pagination::{Pagination, TablePagination};
pub use status::{
    InventoryStatusBadge, OrderStatusBadge, PaymentStatusBadge, StockBadge, Tone,
};

/// Button component with consistent styling
#[component]
pub fn Button(
    #[props(default = "button".to_string())] button_type: String,
    #[props(default)] variant: ButtonVariant,
    #[props(default = "md".to_string())] size: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] loading: bool,
    #[props(default = "".to_string())] class: String,
    #[props(default = None)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let base_classes = "inline-flex items-center justify-center border font-medium rounded-md focus:outline-none focus:ring-2 focus:ring-offset-2 transition-colors";

    let size_classes = match size.as_str() {
        "xs" => "px-2.5 py-1.5 text-xs",
        "sm" => "px-3 py-2 text-sm leading-4",
        "lg" => "px-4 py-2 text-base",
        _ => "px-4 py-2 text-sm",
    };

    let disabled_classes = if disabled || loading {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    rsx! {
        button {
            r#type: "{button_type}",
            class: format!("{} {} {} {} {}", base_classes, variant.classes(), size_classes, disabled_classes, class),
            disabled: disabled || loading,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },

            if loading {
                Spinner { size: "sm".to_string(), class: "-ml-1 mr-2".to_string() }
            }

            {children}
        }
    }
}

/// Input component with consistent styling
#[component]
pub fn Input(
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = "".to_string())] class: String,
    #[props(default = None)] step: Option<String>,
    #[props(default = None)] oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let base_classes = "block w-full border-gray-300 rounded-md shadow-sm focus:ring-blue-500 focus:border-blue-500 sm:text-sm dark:bg-gray-900 dark:border-gray-600 dark:text-gray-100";
    let disabled_classes = if disabled { "bg-gray-50 text-gray-500" } else { "" };

    rsx! {
        input {
            r#type: "{input_type}",
            id: "{id}",
            placeholder: "{placeholder}",
            value: "{value}",
            required: required,
            disabled: disabled,
            step: step.unwrap_or_default(),
            class: format!("{} {} {}", base_classes, disabled_classes, class),
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

/// Form field wrapper: label, control, then the field's error or help text
#[component]
pub fn FormField(
    #[props(default = "".to_string())] label: String,
    #[props(default = "".to_string())] id: String,
    #[props(default = false)] required: bool,
    #[props(default = None)] error: Option<String>,
    #[props(default = None)] help_text: Option<String>,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: format!("space-y-1 {}", class),

            if !label.is_empty() {
                label {
                    r#for: "{id}",
                    class: "block text-sm font-medium text-gray-700 dark:text-gray-200",
                    "{label}"
                    if required {
                        span { class: "text-red-500 ml-1", "*" }
                    }
                }
            }

            {children}

            {match (error, help_text) {
                (Some(error_msg), _) => rsx! {
                    p { class: "text-sm text-red-600", role: "alert", "{error_msg}" }
                },
                (None, Some(help)) => rsx! {
                    p { class: "text-sm text-gray-500", "{help}" }
                },
                (None, None) => rsx! {},
            }}
        }
    }
}

/// Alert/Banner component
#[component]
pub fn Alert(
    #[props(default)] tone: Tone,
    #[props(default = "".to_string())] title: String,
    #[props(default = None)] on_dismiss: Option<EventHandler<()>>,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let icon = match tone {
        Tone::Green => "✅",
        Tone::Yellow => "⚠️",
        Tone::Red => "❌",
        Tone::Blue | Tone::Indigo => "ℹ️",
        Tone::Gray => "📌",
    };

    rsx! {
        div {
            class: format!("rounded-md p-4 {} {}", tone.classes(), class),
            role: if tone == Tone::Red { "alert" } else { "status" },
            div {
                class: "flex",
                span { class: "flex-shrink-0 text-lg", aria_hidden: "true", "{icon}" }
                div {
                    class: "ml-3 flex-1 text-sm",
                    if !title.is_empty() {
                        h3 { class: "font-medium", "{title}" }
                    }
                    div { {children} }
                }
                if let Some(handler) = on_dismiss {
                    button {
                        r#type: "button",
                        class: "ml-auto pl-3 rounded-md p-1.5 hover:bg-black/5 focus:outline-none focus:ring-2",
                        onclick: move |_| handler.call(()),
                        span { class: "sr-only", "Dismiss" }
                        "✕"
                    }
                }
            }
        }
    }
}

/// Badge component
#[component]
pub fn Badge(
    #[props(default)] tone: Tone,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        span {
            class: format!("inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {} {}", tone.classes(), class),
            {children}
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    #[props(default = "md".to_string())] size: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let size_classes = match size.as_str() {
        "sm" => "h-4 w-4",
        "lg" => "h-8 w-8",
        "xl" => "h-12 w-12",
        _ => "h-6 w-6",
    };

    rsx! {
        svg {
            class: format!("animate-spin {} {}", size_classes, class),
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            circle {
                class: "opacity-25",
                cx: "12",
                cy: "12",
                r: "10",
                stroke: "currentColor",
                stroke_width: "4"
            }
            path {
                class: "opacity-75",
                fill: "currentColor",
                d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            }
        }
    }
}

/// Card component
#[component]
pub fn Card(
    #[props(default = "".to_string())] title: String,
    #[props(default = None)] subtitle: Option<String>,
    #[props(default = None)] actions: Option<Element>,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: format!("bg-white dark:bg-gray-800 overflow-hidden shadow rounded-lg {}", class),

            if !title.is_empty() || actions.is_some() {
                div {
                    class: "px-4 py-5 sm:px-6 border-b border-gray-200 dark:border-gray-700",
                    div {
                        class: "flex items-center justify-between",
                        div {
                            h3 {
                                class: "text-lg leading-6 font-medium text-gray-900 dark:text-gray-100",
                                "{title}"
                            }
                            if let Some(sub) = subtitle {
                                p { class: "mt-1 max-w-2xl text-sm text-gray-500 dark:text-gray-400", "{sub}" }
                            }
                        }
                        if let Some(actions_el) = actions {
                            div { class: "flex space-x-3", {actions_el} }
                        }
                    }
                }
            }

            div {
                class: "px-4 py-5 sm:p-6",
                {children}
            }
        }
    }
}

/// One figure on a dashboard-style summary row
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default = "".to_string())] icon: String,
    #[props(default = None)] hint: Option<String>,
    #[props(default)] tone: Tone,
) -> Element {
    rsx! {
        div {
            class: "bg-white dark:bg-gray-800 overflow-hidden shadow rounded-lg p-5",
            div {
                class: "flex items-center",
                if !icon.is_empty() {
                    div {
                        class: format!("flex-shrink-0 rounded-md p-3 text-xl {}", tone.classes()),
                        aria_hidden: "true",
                        "{icon}"
                    }
                }
                div {
                    class: "ml-5 w-0 flex-1",
                    dl {
                        dt { class: "text-sm font-medium text-gray-500 dark:text-gray-400 truncate", "{label}" }
                        dd { class: "text-2xl font-semibold text-gray-900 dark:text-gray-100", "{value}" }
                        if let Some(hint) = hint {
                            dd { class: "text-xs text-gray-500 dark:text-gray-400", "{hint}" }
                        }
                    }
                }
            }
        }
    }
}

/// Page title row with optional actions on the right
#[component]
pub fn PageHeader(
    title: String,
    #[props(default = None)] subtitle: Option<String>,
    #[props(default = None)] actions: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: "md:flex md:items-center md:justify-between mb-6",
            div {
                class: "min-w-0 flex-1",
                h1 { class: "text-2xl font-bold leading-7 text-gray-900 dark:text-gray-100 sm:truncate sm:text-3xl", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "mt-1 text-sm text-gray-500 dark:text-gray-400", "{subtitle}" }
                }
            }
            if let Some(actions) = actions {
                div { class: "mt-4 flex gap-3 md:ml-4 md:mt-0", {actions} }
            }
        }
    }
}

/// Full-width failure panel with a retry button
#[component]
pub fn ErrorPanel(message: String, #[props(default = None)] on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        Alert {
            tone: Tone::Red,
            title: "Something went wrong".to_string(),
            p { "{message}" }
            if let Some(retry) = on_retry {
                button {
                    r#type: "button",
                    class: "mt-2 text-sm font-medium underline",
                    onclick: move |_| retry.call(()),
                    "Try again"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_component() {
        let _button = rsx! {
            Button {
                variant: ButtonVariant::Primary,
                "Click me"
            }
        };
    }

    #[test]
    fn test_alert_component() {
        let _alert = rsx! {
            Alert {
                tone: Tone::Green,
                title: "Success".to_string(),
                "Operation completed"
            }
        };
    }

    #[test]
    fn test_stat_card_component() {
        let _card = rsx! {
            StatCard {
                label: "Revenue".to_string(),
                value: "R$ 10,00".to_string(),
                icon: "💰".to_string(),
            }
        };
    }
}
