// src/ui/app.rs - Root component: services, global state, theme and routing

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use futures::channel::mpsc::{self, UnboundedReceiver};
use futures::StreamExt;

use crate::api::ChannelUnauthorizedHandler;
use crate::config::AppConfig;
use crate::error::Result;
use crate::platform::create_providers;
use crate::session::Theme;
use crate::ui::{
    components::ErrorPanel,
    router::Route,
    services::AppServices,
    state::{use_app_dispatch, use_app_state, AppAction, AppStateProvider},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Receiving end of the 401 notifications raised by the API client. Taken
/// once by [`SessionWatcher`].
#[derive(Clone, Default)]
struct SessionEvents(Rc<RefCell<Option<UnboundedReceiver<()>>>>);

impl SessionEvents {
    fn take(&self) -> Option<UnboundedReceiver<()>> {
        self.0.borrow_mut().take()
    }
}

/// Builds the services over the platform providers, wired so that a 401
/// from any request reaches the session watcher
fn bootstrap(config: AppConfig) -> Result<(AppServices, SessionEvents)> {
    let providers = create_providers()?;
    let (tx, rx) = mpsc::unbounded();
    let services = AppServices::build(
        config,
        providers,
        Arc::new(ChannelUnauthorizedHandler::new(tx)),
    );
    Ok((services, SessionEvents(Rc::new(RefCell::new(Some(rx))))))
}

/// Main application component. Configuration comes from the launch context
/// when the host provides one, defaults otherwise.
#[component]
pub fn App() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();

    let boot = use_hook(move || match bootstrap(config) {
        Ok((services, events)) => {
            tracing::info!(api = %services.api.api_url(""), "Services ready");
            provide_context(services);
            provide_context(events);
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to start services");
            Err(e.to_string())
        }
    });

    rsx! {
        document::Script { src: TAILWIND_CDN }
        document::Script { "tailwind.config = {{ darkMode: 'class' }};" }

        {match boot {
            Ok(()) => rsx! {
                AppStateProvider {
                    ThemeRoot {
                        SessionWatcher {}
                        Router::<Route> {}
                    }
                }
            },
            Err(message) => rsx! {
                div {
                    class: "min-h-screen flex items-center justify-center bg-gray-50 p-8",
                    div { class: "max-w-lg w-full", ErrorPanel { message } }
                }
            },
        }}
    }
}

/// Applies the `dark` class for Tailwind's class-based dark mode
#[component]
fn ThemeRoot(children: Element) -> Element {
    let theme = use_app_state().theme;

    rsx! {
        div {
            class: if theme == Theme::Dark { "dark" } else { "" },
            div {
                class: "min-h-screen bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-gray-100",
                {children}
            }
        }
    }
}

/// Signs the session out whenever the backend rejects the token. The API
/// client has already dropped the stored token by then; the router guard
/// does the redirect once the state says signed out.
#[component]
fn SessionWatcher() -> Element {
    let events = use_context::<SessionEvents>();
    let dispatch = use_app_dispatch();

    use_future(move || {
        let events = events.clone();
        async move {
            let Some(mut receiver) = events.take() else {
                return;
            };
            while receiver.next().await.is_some() {
                dispatch(AppAction::SignedOut);
            }
        }
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bootstrap_wires_the_configured_backend() {
        let mut config = AppConfig::default();
        config.api.base_url = "https://orders.example.com".to_string();

        let (services, events) = bootstrap(config).unwrap();
        assert!(services
            .api
            .api_url("/orders")
            .starts_with("https://orders.example.com"));
        assert!(events.take().is_some());
    }

    #[test]
    fn session_events_are_taken_once() {
        let (_tx, rx) = mpsc::unbounded::<()>();
        let events = SessionEvents(Rc::new(RefCell::new(Some(rx))));
        let shared = events.clone();
        assert!(events.take().is_some());
        assert!(shared.take().is_none());
    }
}
