// src/ui/layout/sidebar.rs - Navigation sidebar, desktop and mobile variants

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::ui::router::{nav, Route};

/// Sidebar component props
#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Whether the sidebar is collapsed on desktop
    pub collapsed: bool,
    /// Whether the mobile menu is open
    pub mobile_open: bool,
    /// Callback for closing mobile menu
    pub on_close: Callback<()>,
}

/// Main sidebar component
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let current_route = use_route::<Route>();
    let routes = nav::primary_routes();
    let on_close = props.on_close;

    rsx! {
        // Desktop sidebar
        div {
            class: format!(
                "hidden lg:flex lg:flex-col lg:fixed lg:inset-y-0 lg:z-30 lg:transition-all lg:duration-200 lg:ease-in-out {}",
                if props.collapsed { "lg:w-16" } else { "lg:w-64" }
            ),
            div {
                class: "flex flex-col flex-grow bg-white dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700 pt-20 pb-4 overflow-y-auto",
                nav {
                    class: "flex-1 px-2 space-y-1",
                    aria_label: "Main",
                    for route in routes.iter() {
                        NavigationItem {
                            key: "{route}",
                            route: route.clone(),
                            collapsed: props.collapsed,
                            current_route: current_route.clone()
                        }
                    }
                }
            }
        }

        // Mobile sidebar
        if props.mobile_open {
            div {
                class: "lg:hidden fixed inset-0 z-50 flex",

                div {
                    class: "fixed inset-0 bg-gray-600/75",
                    onclick: move |_| on_close.call(()),
                }

                div {
                    class: "relative flex flex-col flex-1 max-w-xs w-64 bg-white dark:bg-gray-800",

                    div {
                        class: "absolute top-0 right-0 -mr-12 pt-2",
                        button {
                            r#type: "button",
                            class: "ml-1 flex items-center justify-center h-10 w-10 rounded-full focus:outline-none focus:ring-2 focus:ring-inset focus:ring-white",
                            onclick: move |_| on_close.call(()),
                            span { class: "sr-only", "Close sidebar" }
                            svg {
                                class: "h-6 w-6 text-white",
                                xmlns: "http://www.w3.org/2000/svg",
                                fill: "none",
                                view_box: "0 0 24 24",
                                stroke: "currentColor",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    stroke_width: "2",
                                    d: "M6 18L18 6M6 6l12 12"
                                }
                            }
                        }
                    }

                    div {
                        class: "flex-1 h-0 pt-5 pb-4 overflow-y-auto",
                        nav {
                            class: "px-2 space-y-1",
                            for route in routes.iter() {
                                NavigationItem {
                                    key: "{route}",
                                    route: route.clone(),
                                    collapsed: false,
                                    current_route: current_route.clone(),
                                    on_click: on_close
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One sidebar link; collapsed shows the icon only
#[component]
fn NavigationItem(
    route: Route,
    collapsed: bool,
    current_route: Route,
    #[props(default = None)] on_click: Option<Callback<()>>,
) -> Element {
    let is_active = nav::is_active_route(&current_route, &route);
    let label = nav::route_title(&route);
    let icon = nav::route_icon(&route);

    rsx! {
        Link {
            to: route.clone(),
            class: format!(
                "group flex items-center px-2 py-2 text-sm font-medium rounded-md {} {}",
                if is_active {
                    "bg-blue-50 dark:bg-blue-900/30 border-r-4 border-blue-600 text-blue-700 dark:text-blue-200"
                } else {
                    "text-gray-600 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-700 hover:text-gray-900"
                },
                if collapsed { "justify-center" } else { "" }
            ),
            title: if collapsed { label } else { "" },
            onclick: move |_| {
                if let Some(callback) = &on_click {
                    callback.call(());
                }
            },
            span {
                class: format!("text-lg {}", if collapsed { "" } else { "mr-3" }),
                aria_hidden: "true",
                "{icon}"
            }
            if !collapsed {
                span { class: "flex-1", "{label}" }
            }
        }
    }
}
