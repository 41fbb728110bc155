// src/ui/state.rs - Application state management and context

use dioxus::prelude::*;

use crate::session::Theme;
use crate::ui::services::use_services;

/// Application state context that provides global state to all components
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppStateContext {
    /// Stored session has been read; until then auth is unknown
    pub session_ready: bool,
    pub authenticated: bool,
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    pub mobile_menu_open: bool,
    pub error_message: Option<String>,
}

/// Actions that can be performed on the application state
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SessionLoaded {
        authenticated: bool,
        theme: Theme,
        sidebar_collapsed: bool,
    },
    SetAuthenticated(bool),
    /// Token rejected or removed; also closes transient UI
    SignedOut,
    SetTheme(Theme),
    ToggleTheme,
    ToggleSidebar,
    SetSidebarCollapsed(bool),
    ToggleMobileMenu,
    SetMobileMenuOpen(bool),
    SetError(Option<String>),
}

/// State reducer function
pub fn app_state_reducer(state: &AppStateContext, action: AppAction) -> AppStateContext {
    let mut new_state = state.clone();

    match action {
        AppAction::SessionLoaded {
            authenticated,
            theme,
            sidebar_collapsed,
        } => {
            new_state.session_ready = true;
            new_state.authenticated = authenticated;
            new_state.theme = theme;
            new_state.sidebar_collapsed = sidebar_collapsed;
        }
        AppAction::SetAuthenticated(authenticated) => {
            new_state.authenticated = authenticated;
        }
        AppAction::SignedOut => {
            new_state.authenticated = false;
            new_state.mobile_menu_open = false;
            new_state.error_message = None;
        }
        AppAction::SetTheme(theme) => {
            new_state.theme = theme;
        }
        AppAction::ToggleTheme => {
            new_state.theme = new_state.theme.toggled();
        }
        AppAction::ToggleSidebar => {
            new_state.sidebar_collapsed = !new_state.sidebar_collapsed;
        }
        AppAction::SetSidebarCollapsed(collapsed) => {
            new_state.sidebar_collapsed = collapsed;
        }
        AppAction::ToggleMobileMenu => {
            new_state.mobile_menu_open = !new_state.mobile_menu_open;
        }
        AppAction::SetMobileMenuOpen(open) => {
            new_state.mobile_menu_open = open;
        }
        AppAction::SetError(error) => {
            new_state.error_message = error;
        }
    }

    new_state
}

/// Application state provider component. Reads the stored session once on
/// mount and writes theme and sidebar changes back to it.
#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let services = use_services();
    let mut state = use_signal(AppStateContext::default);

    let get_state = use_callback(move |_: ()| state());

    let dispatch = use_callback({
        let session = services.session.clone();
        move |action: AppAction| {
            let before = state.peek().clone();
            let after = app_state_reducer(&before, action);

            if after.theme != before.theme && before.session_ready {
                let session = session.clone();
                let theme = after.theme;
                spawn(async move {
                    if let Err(e) = session.set_theme(theme).await {
                        tracing::warn!(error = %e, "Failed to persist theme");
                    }
                });
            }
            if after.sidebar_collapsed != before.sidebar_collapsed && before.session_ready {
                let session = session.clone();
                let collapsed = after.sidebar_collapsed;
                spawn(async move {
                    if let Err(e) = session.set_sidebar_collapsed(collapsed).await {
                        tracing::warn!(error = %e, "Failed to persist sidebar state");
                    }
                });
            }

            if after != before {
                state.set(after);
            }
        }
    });

    use_context_provider(|| get_state);
    use_context_provider(|| dispatch);

    use_future(move || {
        let session = services.session.clone();
        async move {
            if let Err(e) = session.load().await {
                tracing::error!(error = %e, "Failed to read stored session");
            }
            let theme = session.theme().await;
            let sidebar_collapsed = session.sidebar_collapsed().await;
            tracing::debug!(
                authenticated = session.is_authenticated(),
                theme = %theme,
                "Session restored"
            );
            dispatch(AppAction::SessionLoaded {
                authenticated: session.is_authenticated(),
                theme,
                sidebar_collapsed,
            });
        }
    });

    rsx! {
        {children}
    }
}

/// Hook to access the current application state
pub fn use_app_state() -> AppStateContext {
    let get_state = use_context::<Callback<(), AppStateContext>>();
    get_state(())
}

/// Hook to dispatch actions to the application state
pub fn use_app_dispatch() -> Callback<AppAction> {
    use_context::<Callback<AppAction>>()
}

/// Authentication helper hooks
pub mod auth {
    use super::*;
    use crate::error::Result;

    /// Stores a bearer token and marks the session authenticated. The signal
    /// holds the last failure for the login form.
    pub fn use_sign_in() -> (Callback<String, ()>, Signal<Option<String>>) {
        let services = use_services();
        let dispatch = use_app_dispatch();
        let mut failure = use_signal(|| None::<String>);

        let sign_in = use_callback(move |token: String| {
            let session = services.session.clone();
            spawn(async move {
                let stored: Result<()> = session.set_token(token).await;
                match stored {
                    Ok(()) => {
                        tracing::info!("Signed in");
                        failure.set(None);
                        dispatch(AppAction::SetAuthenticated(true));
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Sign-in rejected");
                        failure.set(Some(e.message));
                    }
                }
            });
        });

        (sign_in, failure)
    }

    /// Hook for logout functionality
    pub fn use_logout() -> Callback<(), ()> {
        let services = use_services();
        let dispatch = use_app_dispatch();

        use_callback(move |_| {
            let session = services.session.clone();
            spawn(async move {
                if let Err(e) = session.clear_token().await {
                    tracing::error!(error = %e, "Failed to clear stored token");
                }
                tracing::info!("Signed out");
                dispatch(AppAction::SignedOut);
            });
        })
    }

    /// Hook to check if user is authenticated
    pub fn use_is_authenticated() -> bool {
        use_app_state().authenticated
    }
}

/// UI state helper hooks
pub mod ui {
    use super::*;

    /// Hook for sidebar state management
    pub fn use_sidebar() -> (bool, Callback<(), ()>) {
        let state = use_app_state();
        let dispatch = use_app_dispatch();

        let toggle = use_callback(move |_| dispatch(AppAction::ToggleSidebar));

        (state.sidebar_collapsed, toggle)
    }

    /// Hook for mobile menu state management
    pub fn use_mobile_menu() -> (bool, Callback<(), ()>, Callback<bool, ()>) {
        let state = use_app_state();
        let dispatch = use_app_dispatch();

        let toggle = use_callback(move |_| dispatch(AppAction::ToggleMobileMenu));
        let set_open = use_callback(move |open: bool| dispatch(AppAction::SetMobileMenuOpen(open)));

        (state.mobile_menu_open, toggle, set_open)
    }

    pub fn use_theme() -> (Theme, Callback<(), ()>) {
        let state = use_app_state();
        let dispatch = use_app_dispatch();

        let toggle = use_callback(move |_| dispatch(AppAction::ToggleTheme));

        (state.theme, toggle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_state() {
        let state = AppStateContext::default();
        assert!(!state.session_ready);
        assert!(!state.authenticated);
        assert_eq!(state.theme, Theme::Light);
        assert!(state.error_message.is_none());
        assert!(!state.sidebar_collapsed);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_session_loaded() {
        let state = app_state_reducer(
            &AppStateContext::default(),
            AppAction::SessionLoaded {
                authenticated: true,
                theme: Theme::Dark,
                sidebar_collapsed: true,
            },
        );
        assert!(state.session_ready);
        assert!(state.authenticated);
        assert_eq!(state.theme, Theme::Dark);
        assert!(state.sidebar_collapsed);
    }

    #[test]
    fn test_app_state_reducer() {
        let initial_state = AppStateContext::default();

        let new_state = app_state_reducer(&initial_state, AppAction::ToggleSidebar);
        assert!(new_state.sidebar_collapsed);

        let new_state = app_state_reducer(&new_state, AppAction::ToggleTheme);
        assert_eq!(new_state.theme, Theme::Dark);

        let error_msg = "Test error".to_string();
        let new_state = app_state_reducer(&initial_state, AppAction::SetError(Some(error_msg.clone())));
        assert_eq!(new_state.error_message, Some(error_msg));
    }

    #[test]
    fn test_signed_out_keeps_preferences() {
        let signed_in = AppStateContext {
            session_ready: true,
            authenticated: true,
            theme: Theme::Dark,
            sidebar_collapsed: true,
            mobile_menu_open: true,
            error_message: Some("stale".into()),
        };

        let state = app_state_reducer(&signed_in, AppAction::SignedOut);
        assert!(!state.authenticated);
        assert!(!state.mobile_menu_open);
        assert!(state.error_message.is_none());
        assert!(state.session_ready);
        assert_eq!(state.theme, Theme::Dark);
        assert!(state.sidebar_collapsed);
    }
}
