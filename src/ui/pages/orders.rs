// src/ui/pages/orders.rs - Order list with filters, bulk cancel and order creation

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::config::ValidationError;
use crate::model::{CreateOrderRequest, Order, OrderFilters, OrderItemRequest, OrderStatus};
use crate::table::{
    clamp_page, sort_rows, ButtonVariant, CellValue, Column, PageInfo, RowAction, SortChange,
    SortDirection, SortState,
};
use crate::ui::{
    components::{
        Alert, Button, ConfirmDialog, DataTable, FormField, Input, Modal, ModalSize,
        OrderStatusBadge, TablePagination, Tone,
    },
    pages::{PageWrapper, SearchInput, StatusFilter},
    router::Route,
    services::{use_remote, use_services},
};
use crate::utils::{format_currency, format_datetime, short_id};

/// Orders waiting for a cancel confirmation
#[derive(Debug, Clone, PartialEq)]
enum CancelTarget {
    One(String),
    Selected(Vec<String>),
}

impl CancelTarget {
    fn ids(&self) -> Vec<String> {
        match self {
            Self::One(id) => vec![id.clone()],
            Self::Selected(ids) => ids.clone(),
        }
    }
}

#[component]
pub fn Orders() -> Element {
    let services = use_services();
    let navigator = use_navigator();

    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(String::new);
    let mut sort_by = use_signal(|| Some("createdAt".to_string()));
    let mut sort_direction = use_signal(|| Some(SortDirection::Desc));
    let mut page = use_signal(|| 1usize);
    let mut page_size = use_signal(|| services.config.table.default_page_size);
    let mut selected = use_signal(Vec::<String>::new);
    let mut cancel_target = use_signal(|| None::<CancelTarget>);
    let mut cancelling = use_signal(|| false);
    let mut create_open = use_signal(|| false);
    let mut notice = use_signal(|| None::<(Tone, String)>);

    let orders = {
        let api = services.api.clone();
        use_remote(
            Some(Duration::from_secs(services.config.polling.orders_secs)),
            move || {
                let api = api.clone();
                let filters = match OrderStatus::parse(&status_filter()) {
                    Some(status) => OrderFilters::default().with_status(status),
                    None => OrderFilters::default(),
                };
                async move { api.list_orders(&filters).await }
            },
        )
    };

    let columns = use_hook(order_columns);

    let actions = use_hook(|| {
        vec![
            RowAction::new("View", move |order: &Order| {
                navigator.push(Route::OrderDetail {
                    id: order.order_id.clone(),
                });
            })
            .icon("👁"),
            RowAction::new("Cancel", move |order: &Order| {
                let mut target = cancel_target;
                target.set(Some(CancelTarget::One(order.order_id.clone())));
            })
            .variant(ButtonVariant::Danger)
            .disabled_when(|order: &Order| !order.status.can_cancel()),
        ]
    });

    let all_orders = orders.value().unwrap_or_default();
    let sort = SortState::from_parts(sort_by().as_deref(), sort_direction());
    let visible = visible_orders(&all_orders, &search(), &columns, sort.as_ref());

    let info = PageInfo::new(page(), page_size(), visible.len());
    let current_page = clamp_page(info.page, info.total_pages());
    let info = PageInfo::new(current_page, info.page_size, info.total);
    let (start, end) = info.bounds();
    let page_rows = visible[start..end].to_vec();

    let pagination = TablePagination {
        page: current_page,
        page_size: info.page_size,
        total: info.total,
        on_page_change: EventHandler::new(move |p: usize| page.set(p)),
        on_page_size_change: EventHandler::new(move |size: usize| {
            page_size.set(size);
            page.set(1);
        }),
    };

    let selection = selected();
    let (cancellable, skipped) = cancellable_selection(&all_orders, &selection);

    let confirm_cancel = {
        let api = services.api.clone();
        move |reason: Option<String>| {
            let Some(target) = cancel_target() else {
                return;
            };
            let api = api.clone();
            cancelling.set(true);
            spawn(async move {
                let ids = target.ids();
                let mut failures = Vec::new();
                for id in &ids {
                    if let Err(e) = api.cancel_order(id, reason.as_deref()).await {
                        tracing::warn!(order_id = %id, error = %e, "Cancel failed");
                        failures.push(format!("{}: {}", short_id(id), e.message()));
                    }
                }

                let cancelled = ids.len() - failures.len();
                let message = if failures.is_empty() {
                    (Tone::Green, format!("{} order(s) cancelled", cancelled))
                } else {
                    (
                        Tone::Red,
                        format!(
                            "{} of {} cancellations failed. {}",
                            failures.len(),
                            ids.len(),
                            failures.join("; ")
                        ),
                    )
                };
                notice.set(Some(message));
                if matches!(target, CancelTarget::Selected(_)) {
                    selected.set(Vec::new());
                }
                cancelling.set(false);
                cancel_target.set(None);
                orders.reload();
            });
        }
    };

    let status_options: Vec<(String, String)> = OrderStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    let cancel_message = match cancel_target() {
        Some(CancelTarget::One(id)) => format!("Cancel order {}? This cannot be undone.", short_id(&id)),
        Some(CancelTarget::Selected(ids)) => format!(
            "Cancel {} selected order(s)? This cannot be undone.",
            ids.len()
        ),
        None => String::new(),
    };

    let page_actions = rsx! {
        Button {
            variant: ButtonVariant::Primary,
            onclick: move |_| create_open.set(true),
            "New order"
        }
    };

    rsx! {
        PageWrapper {
            title: "Orders".to_string(),
            subtitle: Some("Every order and where it is in the pipeline".to_string()),
            actions: Some(page_actions),

            if let Some((tone, message)) = notice() {
                Alert {
                    tone,
                    on_dismiss: move |_| notice.set(None),
                    "{message}"
                }
            }

            div {
                class: "flex flex-col sm:flex-row sm:items-center gap-3",
                SearchInput {
                    value: search(),
                    placeholder: "Search by order or customer id".to_string(),
                    on_change: move |term: String| {
                        search.set(term);
                        page.set(1);
                    },
                }
                StatusFilter {
                    value: status_filter(),
                    options: status_options,
                    on_change: move |code: String| {
                        status_filter.set(code);
                        selected.set(Vec::new());
                        page.set(1);
                    },
                }
                if !selection.is_empty() {
                    div {
                        class: "flex items-center gap-3 sm:ml-auto",
                        span {
                            class: "text-sm text-gray-600 dark:text-gray-300",
                            "{selection.len()} selected"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            size: "sm".to_string(),
                            disabled: cancellable.is_empty(),
                            onclick: {
                                let ids = cancellable.clone();
                                move |_| cancel_target.set(Some(CancelTarget::Selected(ids.clone())))
                            },
                            if skipped > 0 {
                                "Cancel {cancellable.len()} ({skipped} final)"
                            } else {
                                "Cancel selected"
                            }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: "sm".to_string(),
                            onclick: move |_| selected.set(Vec::new()),
                            "Clear"
                        }
                    }
                }
            }

            DataTable::<Order> {
                data: page_rows,
                columns: columns.clone(),
                actions: actions.clone(),
                selectable: true,
                selected_rows: selection.clone(),
                on_selection_change: move |keys: Vec<String>| selected.set(keys),
                sort_by: sort_by(),
                sort_direction: sort_direction(),
                on_sort: move |change: SortChange| {
                    sort_by.set(change.direction.map(|_| change.column.clone()));
                    sort_direction.set(change.direction);
                },
                pagination: Some(pagination),
                loading: orders.is_initial_load(),
                error_message: orders.error_message(),
                empty_message: Some(if search().is_empty() {
                    "No orders found".to_string()
                } else {
                    format!("No orders match \"{}\"", search())
                }),
                on_row_click: move |order: Order| {
                    navigator.push(Route::OrderDetail { id: order.order_id });
                },
                caption: Some("Orders".to_string()),
            }
        }

        ConfirmDialog {
            open: cancel_target().is_some(),
            title: "Cancel orders".to_string(),
            message: cancel_message,
            confirm_label: "Cancel orders".to_string(),
            cancel_label: "Keep".to_string(),
            danger: true,
            with_reason: true,
            busy: cancelling(),
            on_confirm: confirm_cancel,
            on_cancel: move |_| cancel_target.set(None),
        }

        CreateOrderModal {
            open: create_open(),
            on_close: move |_| create_open.set(false),
            on_created: move |order: Order| {
                create_open.set(false);
                notice.set(Some((Tone::Green, format!("Order {} created", short_id(&order.order_id)))));
                orders.reload();
            },
        }
    }
}

fn order_columns() -> Vec<Column<Order>> {
    vec![
        Column::field("orderId", "Order")
            .sortable()
            .render(|o: &Order| rsx! { span { class: "font-mono", title: "{o.order_id}", "{short_id(&o.order_id)}" } }),
        Column::field("customerId", "Customer").sortable(),
        Column::field("status", "Status")
            .sortable()
            .render(|o: &Order| rsx! { OrderStatusBadge { status: o.status } }),
        Column::field("itemCount", "Items").sortable().class("text-right"),
        Column::derived("totalAmount", "Total", |o: &Order| CellValue::from(o.total_amount))
            .sortable()
            .class("text-right")
            .render(|o: &Order| rsx! { "{format_currency(o.total_amount)}" }),
        Column::field("createdAt", "Created")
            .sortable()
            .render(|o: &Order| rsx! { "{format_datetime(&o.created_at)}" }),
    ]
}

/// Search applied to the whole list, then sorted, so pages cut through the
/// sorted result
fn visible_orders(
    orders: &[Order],
    search: &str,
    columns: &[Column<Order>],
    sort: Option<&SortState>,
) -> Vec<Order> {
    let matching: Vec<Order> = orders
        .iter()
        .filter(|o| o.matches_search(search))
        .cloned()
        .collect();
    sort_rows(&matching, columns, sort)
}

/// Selected ids that can still be cancelled, and how many selected orders
/// are already final
fn cancellable_selection(orders: &[Order], selected: &[String]) -> (Vec<String>, usize) {
    let mut cancellable = Vec::new();
    let mut skipped = 0;
    for id in selected {
        match orders.iter().find(|o| &o.order_id == id) {
            Some(order) if order.status.can_cancel() => cancellable.push(id.clone()),
            Some(_) => skipped += 1,
            None => {}
        }
    }
    (cancellable, skipped)
}

/// One editable line of the create-order form; numbers stay text until submit
#[derive(Debug, Clone, PartialEq)]
struct ItemDraft {
    product_id: String,
    product_name: String,
    quantity: String,
    price: String,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            product_name: String::new(),
            quantity: "1".to_string(),
            price: "0".to_string(),
        }
    }
}

/// Turns the form into a request, or the list of problems with it
fn build_request(
    customer_id: &str,
    drafts: &[ItemDraft],
) -> Result<CreateOrderRequest, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut items = Vec::with_capacity(drafts.len());

    for (i, draft) in drafts.iter().enumerate() {
        let quantity = match draft.quantity.trim().parse::<u32>() {
            Ok(q) => q,
            Err(_) => {
                errors.push(ValidationError::new(
                    format!("items[{}].quantity", i),
                    "quantity must be a whole number",
                ));
                0
            }
        };
        let price = match draft.price.trim().replace(',', ".").parse::<f64>() {
            Ok(p) => p,
            Err(_) => {
                errors.push(ValidationError::new(
                    format!("items[{}].price", i),
                    "price must be a number",
                ));
                0.0
            }
        };
        items.push(OrderItemRequest {
            product_id: draft.product_id.trim().to_string(),
            product_name: draft.product_name.trim().to_string(),
            quantity,
            price,
        });
    }

    let request = CreateOrderRequest {
        customer_id: customer_id.trim().to_string(),
        items,
    };

    if errors.is_empty() {
        errors = request.validate();
    }

    if errors.is_empty() {
        Ok(request)
    } else {
        Err(errors)
    }
}

fn field_error(errors: &[ValidationError], key: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.key == key)
        .map(|e| e.message.clone())
}

#[component]
fn CreateOrderModal(open: bool, on_close: EventHandler<()>, on_created: EventHandler<Order>) -> Element {
    let services = use_services();
    let mut customer_id = use_signal(String::new);
    let mut drafts = use_signal(|| vec![ItemDraft::default()]);
    let mut errors = use_signal(Vec::<ValidationError>::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let mut reset = move || {
        customer_id.set(String::new());
        drafts.set(vec![ItemDraft::default()]);
        errors.set(Vec::new());
        submit_error.set(None);
    };

    let submit = move |_| {
        submit_error.set(None);
        let request = match build_request(&customer_id.peek(), &drafts.peek()) {
            Ok(request) => request,
            Err(problems) => {
                errors.set(problems);
                return;
            }
        };
        errors.set(Vec::new());
        submitting.set(true);

        let api = services.api.clone();
        spawn(async move {
            match api.create_order(&request).await {
                Ok(order) => {
                    tracing::info!(order_id = %order.order_id, "Order created");
                    reset();
                    on_created.call(order);
                }
                Err(e) => submit_error.set(Some(e.message())),
            }
            submitting.set(false);
        });
    };

    let draft_total = drafts
        .read()
        .iter()
        .map(|d| {
            let quantity = d.quantity.trim().parse::<f64>().unwrap_or(0.0);
            let price = d.price.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0);
            quantity * price
        })
        .sum::<f64>();

    let problems = errors();
    let items_error = field_error(&problems, "items");
    let rows = drafts().into_iter().enumerate().map(|(i, draft)| {
        let mut drafts = drafts;
        let product_error = field_error(&problems, &format!("items[{}].productId", i));
        let quantity_error = field_error(&problems, &format!("items[{}].quantity", i));
        let price_error = field_error(&problems, &format!("items[{}].price", i));
        let removable = drafts.read().len() > 1;
        // Column labels only above the first line
        let label = |text: &str| if i == 0 { text.to_string() } else { String::new() };

        rsx! {
            div {
                key: "{i}",
                class: "grid grid-cols-12 gap-2 items-start",
                FormField {
                    class: "col-span-3".to_string(),
                    label: label("Product id"),
                    id: format!("product-id-{}", i),
                    required: true,
                    error: product_error,
                    Input {
                        id: format!("product-id-{}", i),
                        value: draft.product_id.clone(),
                        oninput: move |evt: FormEvent| drafts.write()[i].product_id = evt.value(),
                    }
                }
                FormField {
                    class: "col-span-4".to_string(),
                    label: label("Name"),
                    id: format!("product-name-{}", i),
                    Input {
                        id: format!("product-name-{}", i),
                        value: draft.product_name.clone(),
                        oninput: move |evt: FormEvent| drafts.write()[i].product_name = evt.value(),
                    }
                }
                FormField {
                    class: "col-span-2".to_string(),
                    label: label("Qty"),
                    id: format!("quantity-{}", i),
                    error: quantity_error,
                    Input {
                        id: format!("quantity-{}", i),
                        input_type: "number".to_string(),
                        value: draft.quantity.clone(),
                        oninput: move |evt: FormEvent| drafts.write()[i].quantity = evt.value(),
                    }
                }
                FormField {
                    class: "col-span-2".to_string(),
                    label: label("Price"),
                    id: format!("price-{}", i),
                    error: price_error,
                    Input {
                        id: format!("price-{}", i),
                        input_type: "number".to_string(),
                        step: Some("0.01".to_string()),
                        value: draft.price.clone(),
                        oninput: move |evt: FormEvent| drafts.write()[i].price = evt.value(),
                    }
                }
                div {
                    class: if i == 0 { "col-span-1 pt-6" } else { "col-span-1" },
                    button {
                        r#type: "button",
                        class: "p-2 text-gray-400 hover:text-red-600 disabled:opacity-30",
                        disabled: !removable,
                        aria_label: "Remove item",
                        onclick: move |_| {
                            drafts.write().remove(i);
                        },
                        "✕"
                    }
                }
            }
        }
    });

    rsx! {
        Modal {
            open,
            on_open_change: move |now_open: bool| {
                if !now_open {
                    reset();
                    on_close.call(());
                }
            },
            title: "New order".to_string(),
            size: ModalSize::Large,
            prevent_close: submitting(),
            footer: rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: submitting(),
                    onclick: move |_| {
                        reset();
                        on_close.call(());
                    },
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    loading: submitting(),
                    onclick: submit,
                    "Create order"
                }
            },

            div {
                class: "space-y-4",
                if let Some(message) = submit_error() {
                    Alert { tone: Tone::Red, "{message}" }
                }
                FormField {
                    label: "Customer id".to_string(),
                    id: "customer-id".to_string(),
                    required: true,
                    error: field_error(&problems, "customerId"),
                    Input {
                        id: "customer-id".to_string(),
                        value: customer_id(),
                        oninput: move |evt: FormEvent| customer_id.set(evt.value()),
                    }
                }
                div {
                    class: "space-y-2",
                    {rows}
                    if let Some(message) = items_error {
                        p { class: "text-sm text-red-600", role: "alert", "{message}" }
                    }
                }
                div {
                    class: "flex items-center justify-between",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: "sm".to_string(),
                        onclick: move |_| drafts.write().push(ItemDraft::default()),
                        "+ Add item"
                    }
                    span {
                        class: "text-sm font-medium text-gray-700 dark:text-gray-200",
                        "Total: {format_currency(draft_total)}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn order(id: &str, customer: &str, status: OrderStatus, total: f64, day: u32) -> Order {
        let ts = Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap();
        Order {
            order_id: id.to_string(),
            customer_id: customer.to_string(),
            status,
            items: Vec::new(),
            total_amount: total,
            payment_status: None,
            inventory_status: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order("ord-1", "alice", OrderStatus::Pending, 30.0, 1),
            order("ord-2", "bob", OrderStatus::Completed, 10.0, 2),
            order("ord-3", "ALICE-2", OrderStatus::Confirmed, 20.0, 3),
        ]
    }

    #[test]
    fn search_then_sort_covers_the_whole_list() {
        let columns = order_columns();
        let sort = SortState::new("totalAmount", SortDirection::Asc);
        let rows = visible_orders(&sample(), "alice", &columns, Some(&sort));
        let ids: Vec<&str> = rows.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, vec!["ord-3", "ord-1"]);
    }

    #[test]
    fn unsorted_keeps_backend_order() {
        let rows = visible_orders(&sample(), "", &order_columns(), None);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].order_id, "ord-1");
    }

    #[test]
    fn final_orders_are_left_out_of_bulk_cancel() {
        let selected = vec!["ord-1".to_string(), "ord-2".to_string(), "gone".to_string()];
        let (cancellable, skipped) = cancellable_selection(&sample(), &selected);
        assert_eq!(cancellable, vec!["ord-1".to_string()]);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn draft_becomes_a_request() {
        let drafts = vec![ItemDraft {
            product_id: " p-1 ".to_string(),
            product_name: "Widget".to_string(),
            quantity: "2".to_string(),
            price: "9,90".to_string(),
        }];
        let request = build_request("cust-1", &drafts).unwrap();
        assert_eq!(request.customer_id, "cust-1");
        assert_eq!(request.items[0].product_id, "p-1");
        assert_eq!(request.items[0].quantity, 2);
        assert!((request.total() - 19.8).abs() < 1e-9);
    }

    #[test]
    fn unparsable_numbers_are_reported_per_item() {
        let drafts = vec![ItemDraft {
            product_id: "p-1".to_string(),
            product_name: String::new(),
            quantity: "two".to_string(),
            price: "abc".to_string(),
        }];
        let errors = build_request("cust-1", &drafts).unwrap_err();
        assert!(field_error(&errors, "items[0].quantity").is_some());
        assert!(field_error(&errors, "items[0].price").is_some());
    }

    #[test]
    fn missing_customer_fails_validation() {
        let errors = build_request("  ", &[ItemDraft {
            product_id: "p".to_string(),
            ..ItemDraft::default()
        }])
        .unwrap_err();
        assert!(field_error(&errors, "customerId").is_some());
    }
}
