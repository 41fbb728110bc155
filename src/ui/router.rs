// src/ui/router.rs
use crate::ui::{
    layout::Layout,
    pages::{
        Dashboard as DashboardPage, Inventory as InventoryPage, Login as LoginPage,
        NotFound as NotFoundPage, OrderDetail as OrderDetailPage, Orders as OrdersPage,
        Payments as PaymentsPage,
    },
    state::use_app_state,
};
use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

#[derive(Clone,Routable,Debug,PartialEq)]
#[rustfmt::skip]
pub enum Route{
    #[route("/login")]
    Login{},
    #[route("/")]
    Home{},
    #[route("/dashboard")]
    Dashboard{},
    #[route("/orders")]
    Orders{},
    #[route("/orders/:id")]
    OrderDetail{id:String},
    #[route("/payments")]
    Payments{},
    #[route("/inventory")]
    Inventory{},
    #[route("/:..segments")]
    NotFound{segments:Vec<String>},
}

#[component]
pub fn Login() -> Element {
    let app_state = use_app_state();
    let navigator = use_navigator();

    if app_state.authenticated {
        navigator.replace(Route::Dashboard {});
    }

    rsx! {
        div{
            class:"min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900 py-12 px-4 sm:px-6 lg:px-8",
            LoginPage{}
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        AuthenticatedLayout{
            DashboardPage{}
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        AuthenticatedLayout{
            DashboardPage{}
        }
    }
}

#[component]
pub fn Orders() -> Element {
    rsx! {
        AuthenticatedLayout{
            OrdersPage{}
        }
    }
}

#[component]
pub fn OrderDetail(id: String) -> Element {
    rsx! {
        AuthenticatedLayout{
            OrderDetailPage{
                key: "{id}",
                order_id: id.clone()
            }
        }
    }
}

#[component]
pub fn Payments() -> Element {
    rsx! {
        AuthenticatedLayout{
            PaymentsPage{}
        }
    }
}

#[component]
pub fn Inventory() -> Element {
    rsx! {
        AuthenticatedLayout{
            InventoryPage{}
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div{
            class:"min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900",
            NotFoundPage{path:path}
        }
    }
}

/// Renders `children` inside the app chrome once the stored session is known
/// to hold a token; otherwise sends the user to the login route.
#[component]
pub fn AuthenticatedLayout(children: Element) -> Element {
    let app_state = use_app_state();
    let navigator = use_navigator();

    if !app_state.session_ready {
        return rsx! {
            div{class:"min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900",
                div{class:"animate-spin rounded-full h-16 w-16 border-b-2 border-blue-600"}
            }
        };
    }

    if app_state.authenticated {
        rsx! {
            Layout{
                {children}
            }
        }
    } else {
        navigator.push(Route::Login {});
        rsx! {
            div{class:"min-h-screen flex flex-col items-center justify-center bg-gray-50 dark:bg-gray-900",
                div{class:"animate-spin rounded-full h-32 w-32 border-b-2 border-blue-600"}
                p{class:"mt-4 text-gray-600","Redirecting to login..."}
            }
        }
    }
}

pub mod nav {
    use super::*;

    /// Entries of the sidebar, in display order
    pub fn primary_routes() -> Vec<Route> {
        vec![
            Route::Dashboard {},
            Route::Orders {},
            Route::Payments {},
            Route::Inventory {},
        ]
    }

    /// Order detail pages highlight the Orders entry
    pub fn is_active_route(current: &Route, target: &Route) -> bool {
        match (current, target) {
            (Route::OrderDetail { .. }, Route::Orders { .. }) => true,
            (Route::Home { .. }, Route::Dashboard { .. }) => true,
            _ => std::mem::discriminant(current) == std::mem::discriminant(target),
        }
    }

    pub fn route_title(route: &Route) -> &'static str {
        match route {
            Route::Login { .. } => "Login",
            Route::Home { .. } => "Home",
            Route::Dashboard { .. } => "Dashboard",
            Route::Orders { .. } => "Orders",
            Route::OrderDetail { .. } => "Order Details",
            Route::Payments { .. } => "Payments",
            Route::Inventory { .. } => "Inventory",
            Route::NotFound { .. } => "Not Found",
        }
    }

    pub fn route_icon(route: &Route) -> &'static str {
        match route {
            Route::Login { .. } => "🔐",
            Route::Home { .. } => "🏠",
            Route::Dashboard { .. } => "📊",
            Route::Orders { .. } => "🛒",
            Route::OrderDetail { .. } => "📄",
            Route::Payments { .. } => "💳",
            Route::Inventory { .. } => "📦",
            Route::NotFound { .. } => "❓",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_equality() {
        let route1 = Route::Dashboard {};
        let route2 = Route::Dashboard {};
        assert_eq!(route1, route2);
        assert_ne!(
            Route::OrderDetail { id: "a".into() },
            Route::OrderDetail { id: "b".into() }
        );
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Orders {}.to_string(), "/orders");
        assert_eq!(
            Route::OrderDetail { id: "ord-1".into() }.to_string(),
            "/orders/ord-1"
        );
        assert_eq!(
            "/orders/ord-1".parse::<Route>().ok(),
            Some(Route::OrderDetail { id: "ord-1".into() })
        );
    }

    #[test]
    fn test_route_title() {
        assert_eq!(nav::route_title(&Route::Dashboard {}), "Dashboard");
        assert_eq!(nav::route_title(&Route::Payments {}), "Payments");
    }

    #[test]
    fn test_route_icon() {
        assert_eq!(nav::route_icon(&Route::Dashboard {}), "📊");
        assert_eq!(nav::route_icon(&Route::Inventory {}), "📦");
    }

    #[test]
    fn test_active_route() {
        let detail = Route::OrderDetail { id: "x".into() };
        assert!(nav::is_active_route(&detail, &Route::Orders {}));
        assert!(!nav::is_active_route(&detail, &Route::Payments {}));
        assert!(nav::is_active_route(&Route::Inventory {}, &Route::Inventory {}));
    }
}
