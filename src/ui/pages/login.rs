// src/ui/pages/login.rs - Bearer token sign-in

use dioxus::prelude::*;

use crate::ui::{
    components::{Alert, Button, Tone},
    services::use_services,
    state::auth::use_sign_in,
};
use crate::table::ButtonVariant;

/// Login page component. The router leaves this page on its own once the
/// session turns authenticated.
#[component]
pub fn Login() -> Element {
    let services = use_services();
    let (sign_in, mut failure) = use_sign_in();

    let mut token = use_signal(String::new);
    let mut reveal = use_signal(|| false);
    let mut form_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let backend = services.api.api_url("");

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        form_error.set(None);
        failure.set(None);

        let value = token().trim().to_string();
        if value.is_empty() {
            form_error.set(Some("Token is required".to_string()));
            return;
        }

        submitting.set(true);
        sign_in(value);
    };

    // A stored failure ends the attempt
    let busy = submitting() && failure().is_none();
    let error = form_error().or_else(|| failure());

    rsx! {
        div {
            class: "max-w-md w-full space-y-8",

            div {
                class: "text-center",
                div {
                    class: "mx-auto h-16 w-16 bg-blue-600 rounded-xl flex items-center justify-center mb-4",
                    span { class: "text-white text-2xl font-bold", "OD" }
                }
                h2 {
                    class: "text-3xl font-extrabold text-gray-900 dark:text-gray-100",
                    "Sign in to Order Dashboard"
                }
                p {
                    class: "mt-2 text-sm text-gray-600 dark:text-gray-400",
                    "Paste the API access token issued for your account."
                }
            }

            form {
                class: "mt-8 space-y-6",
                onsubmit: handle_submit,

                if let Some(message) = error {
                    Alert { tone: Tone::Red, title: "Sign-in failed".to_string(), "{message}" }
                }

                div {
                    label {
                        r#for: "token",
                        class: "block text-sm font-medium text-gray-700 dark:text-gray-200",
                        "Access token"
                    }
                    div {
                        class: "mt-1 flex rounded-md shadow-sm",
                        input {
                            id: "token",
                            name: "token",
                            r#type: if reveal() { "text" } else { "password" },
                            autocomplete: "off",
                            required: true,
                            class: "block w-full rounded-l-md border border-gray-300 px-3 py-2 font-mono text-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500 dark:bg-gray-800 dark:border-gray-600 dark:text-gray-100",
                            placeholder: "eyJhbGciOi...",
                            value: "{token}",
                            oninput: move |e| token.set(e.value()),
                        }
                        button {
                            r#type: "button",
                            class: "rounded-r-md border border-l-0 border-gray-300 px-3 text-sm text-gray-600 hover:bg-gray-50 dark:border-gray-600 dark:text-gray-300 dark:hover:bg-gray-700",
                            onclick: move |_| reveal.toggle(),
                            if reveal() { "Hide" } else { "Show" }
                        }
                    }
                    p {
                        class: "mt-2 text-xs text-gray-500 dark:text-gray-400",
                        "Requests go to {backend}"
                    }
                }

                Button {
                    button_type: "submit".to_string(),
                    variant: ButtonVariant::Primary,
                    class: "w-full".to_string(),
                    loading: busy,
                    "Sign in"
                }
            }
        }
    }
}
