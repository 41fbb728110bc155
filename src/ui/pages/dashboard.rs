// src/ui/pages/dashboard.rs - Headline metrics, backend health and the latest orders

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::model::{recent_orders, DashboardMetrics, HealthReport, Order, OrderFilters};
use crate::table::{CellValue, Column};
use crate::ui::{
    components::{
        Alert, Card, DataTable, ErrorPanel, OrderStatusBadge, StatCard, Tone,
    },
    pages::PageWrapper,
    router::Route,
    services::{use_remote, use_services, Remote},
};
use crate::utils::{format_currency, format_datetime, format_percent, short_id};

const RECENT_ORDER_COUNT: usize = 5;

/// Main dashboard component
#[component]
pub fn Dashboard() -> Element {
    let services = use_services();
    let polling = services.config.polling.clone();
    let navigator = use_navigator();

    let metrics = {
        let api = services.api.clone();
        use_remote(
            Some(Duration::from_secs(polling.dashboard_secs)),
            move || {
                let api = api.clone();
                async move { api.dashboard_metrics().await }
            },
        )
    };

    let orders = {
        let api = services.api.clone();
        use_remote(
            Some(Duration::from_secs(polling.dashboard_secs)),
            move || {
                let api = api.clone();
                async move { api.list_orders(&OrderFilters::default()).await }
            },
        )
    };

    let health = {
        let api = services.api.clone();
        use_remote(
            Some(Duration::from_secs(polling.health_secs)),
            move || {
                let api = api.clone();
                async move { api.health().await }
            },
        )
    };

    let columns = use_hook(recent_order_columns);

    let order_list = orders.value().unwrap_or_default();
    let figures = headline_figures(metrics.value(), &order_list);
    let latest = recent_orders(&order_list, RECENT_ORDER_COUNT);

    let page_actions = rsx! {
        button {
            r#type: "button",
            class: "inline-flex items-center px-4 py-2 border border-gray-300 dark:border-gray-600 shadow-sm text-sm font-medium rounded-md text-gray-700 dark:text-gray-200 bg-white dark:bg-gray-800 hover:bg-gray-50 dark:hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500",
            onclick: move |_| {
                metrics.reload();
                orders.reload();
                health.reload();
            },
            "Refresh"
        }
    };

    rsx! {
        PageWrapper {
            title: "Dashboard".to_string(),
            subtitle: Some("Orders, payments and stock at a glance".to_string()),
            actions: Some(page_actions),

            HealthBanner { health }

            div {
                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6",
                StatCard {
                    label: "Total orders".to_string(),
                    value: figures.total_orders.to_string(),
                    icon: "🛒".to_string(),
                    tone: Tone::Blue,
                }
                StatCard {
                    label: "Revenue".to_string(),
                    value: format_currency(figures.total_revenue),
                    icon: "💰".to_string(),
                    tone: Tone::Green,
                }
                StatCard {
                    label: "Conversion rate".to_string(),
                    value: figures.conversion_rate.map(format_percent).unwrap_or_else(|| "-".to_string()),
                    icon: "📈".to_string(),
                    tone: Tone::Indigo,
                    hint: Some("Completed orders".to_string()),
                }
                StatCard {
                    label: "Pending orders".to_string(),
                    value: figures.pending_orders.to_string(),
                    icon: "⏳".to_string(),
                    tone: Tone::Yellow,
                }
            }

            Card {
                title: "Recent orders".to_string(),
                actions: rsx! {
                    Link {
                        to: Route::Orders {},
                        class: "text-sm font-medium text-blue-600 hover:text-blue-500 dark:text-blue-400",
                        "View all"
                    }
                },
                if let Some(message) = orders.error_message().filter(|_| order_list.is_empty()) {
                    ErrorPanel { message, on_retry: move |_| orders.reload() }
                } else {
                    DataTable::<Order> {
                        data: latest,
                        columns: columns.clone(),
                        loading: orders.is_initial_load(),
                        empty_message: Some("No orders yet".to_string()),
                        caption: Some("Most recent orders".to_string()),
                        on_row_click: move |order: Order| {
                            navigator.push(Route::OrderDetail { id: order.order_id });
                        },
                    }
                }
            }
        }
    }
}

/// Figures from the metrics endpoint, filled in from the order list when the
/// endpoint is unavailable or leaves the conversion rate out
fn headline_figures(metrics: Option<DashboardMetrics>, orders: &[Order]) -> DashboardMetrics {
    let computed = DashboardMetrics::from_orders(orders);
    match metrics {
        Some(mut reported) => {
            if reported.conversion_rate.is_none() {
                reported.conversion_rate = computed.conversion_rate;
            }
            reported
        }
        None => computed,
    }
}

fn recent_order_columns() -> Vec<Column<Order>> {
    vec![
        Column::field("orderId", "Order")
            .render(|o: &Order| rsx! { span { class: "font-mono", title: "{o.order_id}", "{short_id(&o.order_id)}" } }),
        Column::field("customerId", "Customer"),
        Column::field("status", "Status")
            .render(|o: &Order| rsx! { OrderStatusBadge { status: o.status } }),
        Column::derived("total", "Total", |o: &Order| CellValue::from(o.total_amount))
            .class("text-right")
            .render(|o: &Order| rsx! { "{format_currency(o.total_amount)}" }),
        Column::field("createdAt", "Created")
            .render(|o: &Order| rsx! { "{format_datetime(&o.created_at)}" }),
    ]
}

/// Backend status line; component details show only when something is down
#[component]
fn HealthBanner(health: Remote<HealthReport>) -> Element {
    let report = health.value();
    let error = health.error_message();

    match (report, error) {
        (Some(report), _) if report.is_up() => rsx! {
            Alert {
                tone: Tone::Green,
                title: "All systems operational".to_string(),
                ""
            }
        },
        (Some(report), _) => {
            let down: Vec<(String, String)> = report
                .component_statuses()
                .into_iter()
                .filter(|(_, status)| !status.eq_ignore_ascii_case("UP"))
                .collect();
            rsx! {
                Alert {
                    tone: Tone::Yellow,
                    title: format!("Backend status: {}", report.status),
                    if let Some(error) = &report.error {
                        p { class: "mb-1", "{error}" }
                    }
                    ul {
                        class: "list-disc pl-5",
                        for (name, status) in down {
                            li { key: "{name}", "{name}: {status}" }
                        }
                    }
                }
            }
        }
        (None, Some(message)) => rsx! {
            Alert {
                tone: Tone::Red,
                title: "Backend unreachable".to_string(),
                "{message}"
            }
        },
        (None, None) => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::model::OrderStatus;

    fn order(id: &str, status: OrderStatus, total: f64) -> Order {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Order {
            order_id: id.to_string(),
            customer_id: "cust-1".to_string(),
            status,
            items: Vec::new(),
            total_amount: total,
            payment_status: None,
            inventory_status: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn figures_fall_back_to_the_order_list() {
        let orders = vec![
            order("a", OrderStatus::Completed, 10.0),
            order("b", OrderStatus::Pending, 5.0),
        ];
        let figures = headline_figures(None, &orders);
        assert_eq!(figures.total_orders, 2);
        assert_eq!(figures.pending_orders, 1);
        assert_eq!(figures.conversion_rate, Some(50.0));
    }

    #[test]
    fn reported_figures_win_but_gain_a_conversion_rate() {
        let reported = DashboardMetrics {
            total_orders: 100,
            total_revenue: 1000.0,
            pending_orders: 3,
            conversion_rate: None,
        };
        let orders = vec![order("a", OrderStatus::Completed, 10.0)];
        let figures = headline_figures(Some(reported), &orders);
        assert_eq!(figures.total_orders, 100);
        assert_eq!(figures.conversion_rate, Some(100.0));
    }
}
