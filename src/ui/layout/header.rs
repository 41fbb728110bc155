// src/ui/layout/header.rs - Top bar with branding, page title, theme toggle and sign-out

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::session::Theme;
use crate::ui::{
    router::{nav, Route},
    state::{auth::use_logout, ui::use_theme},
};

/// Header component props
#[derive(Props, Clone, PartialEq)]
pub struct HeaderProps {
    /// Callback for mobile menu toggle
    pub on_menu_toggle: Callback<()>,
    /// Callback for sidebar toggle
    pub on_sidebar_toggle: Callback<()>,
}

/// Main header component
#[component]
pub fn Header(props: HeaderProps) -> Element {
    let logout = use_logout();
    let (theme, toggle_theme) = use_theme();
    let route = use_route::<Route>();
    let title = nav::route_title(&route);

    let left_side_mobile_button = rsx! {
        button {
            r#type: "button",
            class: "inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-gray-500 hover:bg-gray-100 dark:hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-inset focus:ring-blue-500 lg:hidden",
            onclick: move |_| props.on_menu_toggle.call(()),
            span { class: "sr-only", "Open main menu" }
            svg {
                class: "h-6 w-6",
                xmlns: "http://www.w3.org/2000/svg",
                fill: "none",
                view_box: "0 0 24 24",
                stroke: "currentColor",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "M4 6h16M4 12h16M4 18h16"
                }
            }
        }
    };

    let left_side_desktop_sidebar_toggle = rsx! {
        button {
            r#type: "button",
            class: "hidden lg:inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-gray-500 hover:bg-gray-100 dark:hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-inset focus:ring-blue-500 mr-4",
            onclick: move |_| props.on_sidebar_toggle.call(()),
            span { class: "sr-only", "Toggle sidebar" }
            svg {
                class: "h-5 w-5",
                xmlns: "http://www.w3.org/2000/svg",
                fill: "none",
                view_box: "0 0 24 24",
                stroke: "currentColor",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "M4 6h16M4 12h8m-8 6h16"
                }
            }
        }
    };

    let left_side_logo = rsx! {
        Link {
            to: Route::Dashboard {},
            class: "flex items-center",
            div {
                class: "h-8 w-8 bg-blue-600 rounded-lg flex items-center justify-center",
                span { class: "text-white font-bold text-sm", "OD" }
            }
            span {
                class: "ml-2 text-xl font-bold text-gray-900 dark:text-gray-100 hidden sm:block",
                "Order Dashboard"
            }
        }
    };

    let right_side = rsx! {
        div {
            class: "flex items-center gap-2",
            button {
                r#type: "button",
                class: "p-2 rounded-md text-gray-500 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-blue-500",
                title: if theme == Theme::Dark { "Switch to light mode" } else { "Switch to dark mode" },
                onclick: move |_| toggle_theme(()),
                span { class: "sr-only", "Toggle theme" }
                if theme == Theme::Dark { "☀️" } else { "🌙" }
            }
            button {
                r#type: "button",
                class: "inline-flex items-center px-3 py-2 text-sm font-medium rounded-md text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-blue-500",
                onclick: move |_| logout(()),
                "Sign out"
            }
        }
    };

    rsx! {
        header {
            class: "bg-white dark:bg-gray-800 shadow-sm border-b border-gray-200 dark:border-gray-700 fixed w-full top-0 z-40",
            div {
                class: "px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex justify-between items-center h-16",
                    div {
                        class: "flex items-center",
                        {left_side_mobile_button}
                        {left_side_desktop_sidebar_toggle}
                        {left_side_logo}
                        span {
                            class: "hidden md:block ml-6 pl-6 border-l border-gray-200 dark:border-gray-700 text-sm font-medium text-gray-500 dark:text-gray-400",
                            "{title}"
                        }
                    }
                    {right_side}
                }
            }
        }
    }
}
