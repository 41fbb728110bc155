// src/ui/layout/main_layout.rs - App chrome around the authenticated pages

use dioxus::prelude::*;

use super::{Header, Sidebar};
use crate::ui::{
    components::{Alert, Tone},
    state::{
        ui::{use_mobile_menu, use_sidebar},
        use_app_dispatch, use_app_state, AppAction,
    },
};

/// Header, sidebar and the page content. A session-level error set through
/// `AppAction::SetError` shows as a dismissible banner above the page.
#[component]
pub fn Layout(children: Element) -> Element {
    let app_state = use_app_state();
    let dispatch = use_app_dispatch();
    let (sidebar_collapsed, toggle_sidebar) = use_sidebar();
    let (mobile_open, toggle_mobile, set_mobile_open) = use_mobile_menu();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-gray-100",

            Header {
                on_menu_toggle: toggle_mobile,
                on_sidebar_toggle: toggle_sidebar,
            }

            Sidebar {
                collapsed: sidebar_collapsed,
                mobile_open: mobile_open,
                on_close: move |_| set_mobile_open(false),
            }

            main {
                class: format!(
                    "pt-16 transition-all duration-200 ease-in-out {}",
                    if sidebar_collapsed { "lg:pl-16" } else { "lg:pl-64" }
                ),
                div {
                    class: "py-6 px-4 sm:px-6 lg:px-8",
                    if let Some(message) = app_state.error_message.clone() {
                        Alert {
                            tone: Tone::Red,
                            class: "mb-4".to_string(),
                            on_dismiss: move |_| dispatch(AppAction::SetError(None)),
                            "{message}"
                        }
                    }
                    {children}
                }
            }
        }
    }
}
