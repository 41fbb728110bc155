// src/ui/pages/order_detail.rs - One order: header, items, status changes, payment and timeline

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::model::{event, Order, OrderEvent, OrderItem, OrderStatus, Payment};
use crate::table::{ButtonVariant, CellValue, Column};
use crate::ui::{
    components::{
        Alert, Button, Card, ConfirmDialog, DataTable, ErrorPanel, InventoryStatusBadge,
        OrderStatusBadge, PaymentStatusBadge, Spinner, Tone,
    },
    pages::PageWrapper,
    router::Route,
    services::{use_remote, use_services, Remote},
};
use crate::utils::{format_currency, format_datetime};

#[component]
pub fn OrderDetail(order_id: String) -> Element {
    let services = use_services();
    let refresh = Some(Duration::from_secs(services.config.polling.orders_secs));

    let mut updating = use_signal(|| false);
    let mut confirm_cancel = use_signal(|| false);
    let mut notice = use_signal(|| None::<(Tone, String)>);

    let order = {
        let api = services.api.clone();
        let id = order_id.clone();
        use_remote(refresh, move || {
            let api = api.clone();
            let id = id.clone();
            async move { api.get_order(&id).await }
        })
    };

    let events = {
        let api = services.api.clone();
        let id = order_id.clone();
        use_remote(refresh, move || {
            let api = api.clone();
            let id = id.clone();
            async move { api.order_events(&id).await.map(event::timeline) }
        })
    };

    let payment = {
        let api = services.api.clone();
        let id = order_id.clone();
        use_remote(refresh, move || {
            let api = api.clone();
            let id = id.clone();
            async move { api.payment_for_order(&id).await }
        })
    };

    let item_columns = use_hook(order_item_columns);

    let change_status = {
        let api = services.api.clone();
        let id = order_id.clone();
        move |evt: FormEvent| {
            let Some(status) = OrderStatus::parse(&evt.value()) else {
                return;
            };
            let api = api.clone();
            let id = id.clone();
            updating.set(true);
            spawn(async move {
                match api.update_order_status(&id, status).await {
                    Ok(updated) => {
                        tracing::info!(order_id = %id, status = %updated.status, "Order status updated");
                        notice.set(Some((Tone::Green, format!("Status changed to {}", updated.status.label()))));
                    }
                    Err(e) => notice.set(Some((Tone::Red, e.message()))),
                }
                updating.set(false);
                order.reload();
                events.reload();
            });
        }
    };

    let cancel = {
        let api = services.api.clone();
        let id = order_id.clone();
        move |reason: Option<String>| {
            let api = api.clone();
            let id = id.clone();
            updating.set(true);
            spawn(async move {
                match api.cancel_order(&id, reason.as_deref()).await {
                    Ok(()) => notice.set(Some((Tone::Green, "Order cancelled".to_string()))),
                    Err(e) => notice.set(Some((Tone::Red, e.message()))),
                }
                updating.set(false);
                confirm_cancel.set(false);
                order.reload();
                events.reload();
            });
        }
    };

    let Some(current) = order.value() else {
        return match order.error_message() {
            Some(message) => rsx! {
                PageWrapper {
                    title: "Order details".to_string(),
                    BackLink {}
                    ErrorPanel { message, on_retry: move |_| order.reload() }
                }
            },
            None => rsx! {
                div { class: "flex justify-center py-24", Spinner { size: "xl".to_string() } }
            },
        };
    };

    let page_actions = rsx! {
        Button {
            variant: ButtonVariant::Danger,
            disabled: !current.status.can_cancel() || updating(),
            onclick: move |_| confirm_cancel.set(true),
            "Cancel order"
        }
    };

    rsx! {
        PageWrapper {
            title: format!("Order {}", current.order_id),
            subtitle: Some(format!("Customer {}", current.customer_id)),
            actions: Some(page_actions),

            BackLink {}

            if let Some((tone, message)) = notice() {
                Alert { tone, on_dismiss: move |_| notice.set(None), "{message}" }
            }

            OrderSummary {
                order: current.clone(),
                updating: updating(),
                on_status_change: change_status,
            }

            Card {
                title: "Items".to_string(),
                DataTable::<OrderItem> {
                    data: current.items.clone(),
                    columns: item_columns.clone(),
                    empty_message: Some("This order has no items".to_string()),
                    caption: Some("Order items".to_string()),
                }
            }

            div {
                class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                PaymentCard { payment }
                Timeline { events }
            }
        }

        ConfirmDialog {
            open: confirm_cancel(),
            title: "Cancel order".to_string(),
            message: format!("Cancel order {}? This cannot be undone.", current.order_id),
            confirm_label: "Cancel order".to_string(),
            cancel_label: "Keep".to_string(),
            danger: true,
            with_reason: true,
            busy: updating(),
            on_confirm: cancel,
            on_cancel: move |_| confirm_cancel.set(false),
        }
    }
}

#[component]
fn BackLink() -> Element {
    rsx! {
        Link {
            to: Route::Orders {},
            class: "inline-flex items-center text-sm font-medium text-blue-600 hover:text-blue-500 dark:text-blue-400",
            "← Back to orders"
        }
    }
}

#[component]
fn OrderSummary(order: Order, updating: bool, on_status_change: EventHandler<FormEvent>) -> Element {
    rsx! {
        Card {
            title: "Summary".to_string(),
            dl {
                class: "grid grid-cols-1 sm:grid-cols-3 gap-x-4 gap-y-6",
                div {
                    dt { class: "text-sm font-medium text-gray-500 dark:text-gray-400", "Status" }
                    dd {
                        class: "mt-1 flex items-center gap-3",
                        OrderStatusBadge { status: order.status }
                        label { r#for: "order-status", class: "sr-only", "Change status" }
                        select {
                            id: "order-status",
                            class: "text-sm border-gray-300 rounded-md dark:bg-gray-900 dark:border-gray-600",
                            disabled: updating || order.status.is_terminal(),
                            value: "{order.status.as_str()}",
                            onchange: move |evt| on_status_change.call(evt),
                            for status in OrderStatus::ALL {
                                option {
                                    key: "{status.as_str()}",
                                    value: "{status.as_str()}",
                                    selected: status == order.status,
                                    "{status.label()}"
                                }
                            }
                        }
                        if updating {
                            Spinner { size: "sm".to_string() }
                        }
                    }
                }
                div {
                    dt { class: "text-sm font-medium text-gray-500 dark:text-gray-400", "Total" }
                    dd { class: "mt-1 text-lg font-semibold", "{format_currency(order.total_amount)}" }
                }
                div {
                    dt { class: "text-sm font-medium text-gray-500 dark:text-gray-400", "Items" }
                    dd { class: "mt-1 text-lg", "{order.item_count()}" }
                }
                div {
                    dt { class: "text-sm font-medium text-gray-500 dark:text-gray-400", "Payment" }
                    dd {
                        class: "mt-1",
                        {match order.payment_status {
                            Some(status) => rsx! { PaymentStatusBadge { status } },
                            None => rsx! { span { class: "text-sm text-gray-400", "-" } },
                        }}
                    }
                }
                div {
                    dt { class: "text-sm font-medium text-gray-500 dark:text-gray-400", "Inventory" }
                    dd {
                        class: "mt-1",
                        {match order.inventory_status {
                            Some(status) => rsx! { InventoryStatusBadge { status } },
                            None => rsx! { span { class: "text-sm text-gray-400", "-" } },
                        }}
                    }
                }
                div {
                    dt { class: "text-sm font-medium text-gray-500 dark:text-gray-400", "Created / updated" }
                    dd {
                        class: "mt-1 text-sm",
                        "{format_datetime(&order.created_at)}"
                        br {}
                        "{format_datetime(&order.updated_at)}"
                    }
                }
            }
        }
    }
}

/// Payment attached to the order; a 404 means none has been created yet
#[component]
fn PaymentCard(payment: Remote<Payment>) -> Element {
    let body = match (payment.value(), payment.error.read().clone()) {
        (Some(p), _) => rsx! {
            dl {
                class: "space-y-3 text-sm",
                div { class: "flex justify-between",
                    dt { class: "text-gray-500", "Status" }
                    dd { PaymentStatusBadge { status: p.status } }
                }
                div { class: "flex justify-between",
                    dt { class: "text-gray-500", "Amount" }
                    dd { "{format_currency(p.amount)}" }
                }
                div { class: "flex justify-between",
                    dt { class: "text-gray-500", "Method" }
                    dd { "{p.payment_method}" }
                }
                div { class: "flex justify-between",
                    dt { class: "text-gray-500", "Attempt" }
                    dd { "{p.attempt()}" }
                }
                if let Some(reason) = &p.failure_reason {
                    div { class: "flex justify-between",
                        dt { class: "text-gray-500", "Failure" }
                        dd { class: "text-red-600", "{reason}" }
                    }
                }
            }
        },
        (None, Some(e)) if e.status() == 404 => rsx! {
            p { class: "text-sm text-gray-500", "No payment has been created for this order yet." }
        },
        (None, Some(e)) => rsx! {
            p { class: "text-sm text-red-600", role: "alert", "{e.message()}" }
        },
        (None, None) => rsx! { Spinner {} },
    };

    rsx! {
        Card { title: "Payment".to_string(), {body} }
    }
}

#[component]
fn Timeline(events: Remote<Vec<OrderEvent>>) -> Element {
    let list = events.value().unwrap_or_default();

    let body = if let Some(message) = events.error_message().filter(|_| list.is_empty()) {
        rsx! { p { class: "text-sm text-red-600", role: "alert", "{message}" } }
    } else if list.is_empty() {
        if events.is_initial_load() {
            rsx! { Spinner {} }
        } else {
            rsx! { p { class: "text-sm text-gray-500", "No events recorded" } }
        }
    } else {
        let entries = list.iter().enumerate().map(|(i, event)| {
            let details = event.data_summary();
            rsx! {
                li {
                    key: "{i}",
                    class: "relative pl-6 pb-6 border-l border-gray-200 dark:border-gray-700 last:pb-0",
                    span { class: "absolute -left-1.5 top-1 h-3 w-3 rounded-full bg-blue-600" }
                    p { class: "text-sm font-medium text-gray-900 dark:text-gray-100", "{event.title()}" }
                    p { class: "text-xs text-gray-500", "{format_datetime(&event.timestamp)}" }
                    if !details.is_empty() {
                        ul {
                            class: "mt-1 text-xs text-gray-600 dark:text-gray-300 font-mono",
                            for line in details {
                                li { "{line}" }
                            }
                        }
                    }
                }
            }
        });
        rsx! { ol { class: "ml-2", {entries} } }
    };

    rsx! {
        Card { title: "Timeline".to_string(), {body} }
    }
}

fn order_item_columns() -> Vec<Column<OrderItem>> {
    vec![
        Column::field("productId", "Product").class("font-mono"),
        Column::field("productName", "Name"),
        Column::field("quantity", "Qty").class("text-right"),
        Column::derived("unitPrice", "Unit price", |i: &OrderItem| CellValue::from(i.unit_price))
            .class("text-right")
            .render(|i: &OrderItem| rsx! { "{format_currency(i.unit_price)}" }),
        Column::derived("totalPrice", "Total", |i: &OrderItem| CellValue::from(i.total_price))
            .class("text-right")
            .render(|i: &OrderItem| rsx! { "{format_currency(i.total_price)}" }),
    ]
}
