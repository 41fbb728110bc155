// src/ui/pages/payments.rs - Payment list, summary cards and retries

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::model::{Payment, PaymentFilters, PaymentStatus, PaymentSummary};
use crate::table::{clamp_page, ButtonVariant, CellValue, Column, PageInfo, RowAction};
use crate::ui::{
    components::{Alert, DataTable, PaymentStatusBadge, StatCard, TablePagination, Tone},
    pages::{PageWrapper, SearchInput, StatusFilter},
    router::Route,
    services::{use_remote, use_services},
};
use crate::utils::{format_currency, format_datetime, format_percent, short_id};

#[component]
pub fn Payments() -> Element {
    let services = use_services();
    let navigator = use_navigator();

    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut page_size = use_signal(|| services.config.table.default_page_size);
    let mut notice = use_signal(|| None::<(Tone, String)>);
    let retrying = use_signal(Vec::<String>::new);

    let payments = {
        let api = services.api.clone();
        use_remote(
            Some(Duration::from_secs(services.config.polling.payments_secs)),
            move || {
                let api = api.clone();
                let filters = match PaymentStatus::parse(&status_filter()) {
                    Some(status) => PaymentFilters::default().with_status(status),
                    None => PaymentFilters::default(),
                };
                async move { api.list_payments(&filters).await }
            },
        )
    };

    let columns = use_hook(payment_columns);

    let in_flight = retrying();
    let actions = {
        let api = services.api.clone();
        vec![
            RowAction::new("Retry", move |payment: &Payment| {
                let api = api.clone();
                let id = payment.payment_id.clone();
                let mut retrying = retrying;
                let mut notice = notice;
                retrying.write().push(id.clone());
                spawn(async move {
                    match api.retry_payment(&id).await {
                        Ok(updated) => {
                            tracing::info!(payment_id = %id, status = %updated.status.as_str(), "Payment retried");
                            notice.set(Some((
                                Tone::Green,
                                format!("Payment {} resubmitted ({})", short_id(&id), updated.status.label()),
                            )));
                        }
                        Err(e) => notice.set(Some((Tone::Red, e.message()))),
                    }
                    retrying.write().retain(|r| r != &id);
                    payments.reload();
                });
            })
            .icon("↻")
            .variant(ButtonVariant::Primary)
            .disabled_when(move |payment: &Payment| {
                !payment.can_retry() || in_flight.contains(&payment.payment_id)
            }),
            RowAction::new("Order", move |payment: &Payment| {
                navigator.push(Route::OrderDetail {
                    id: payment.order_id.clone(),
                });
            })
            .variant(ButtonVariant::Ghost),
        ]
    };

    let all = payments.value().unwrap_or_default();
    let summary = PaymentSummary::from_payments(&all);
    let term = search();
    let visible: Vec<Payment> = all.into_iter().filter(|p| p.matches_search(&term)).collect();

    let info = PageInfo::new(page(), page_size(), visible.len());
    let info = PageInfo::new(clamp_page(info.page, info.total_pages()), info.page_size, info.total);
    let (start, end) = info.bounds();
    let page_rows = visible[start..end].to_vec();

    let status_options: Vec<(String, String)> = PaymentStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    rsx! {
        PageWrapper {
            title: "Payments".to_string(),
            subtitle: Some("Charges for every order, with retries for failures".to_string()),

            if let Some((tone, message)) = notice() {
                Alert { tone, on_dismiss: move |_| notice.set(None), "{message}" }
            }

            div {
                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6",
                StatCard {
                    label: "Approved amount".to_string(),
                    value: format_currency(summary.approved_amount),
                    icon: "✅".to_string(),
                    tone: Tone::Green,
                }
                StatCard {
                    label: "Pending".to_string(),
                    value: summary.pending_count.to_string(),
                    icon: "⏳".to_string(),
                    tone: Tone::Yellow,
                }
                StatCard {
                    label: "Failed".to_string(),
                    value: summary.failed_count.to_string(),
                    icon: "❌".to_string(),
                    tone: Tone::Red,
                }
                StatCard {
                    label: "Success rate".to_string(),
                    value: format_percent(summary.success_rate),
                    icon: "📈".to_string(),
                    tone: Tone::Indigo,
                }
            }

            div {
                class: "flex flex-col sm:flex-row sm:items-center gap-3",
                SearchInput {
                    value: term.clone(),
                    placeholder: "Search by payment or order id".to_string(),
                    on_change: move |value: String| {
                        search.set(value);
                        page.set(1);
                    },
                }
                StatusFilter {
                    value: status_filter(),
                    options: status_options,
                    on_change: move |code: String| {
                        status_filter.set(code);
                        page.set(1);
                    },
                }
            }

            DataTable::<Payment> {
                data: page_rows,
                columns: columns.clone(),
                actions,
                pagination: Some(TablePagination {
                    page: info.page,
                    page_size: info.page_size,
                    total: info.total,
                    on_page_change: EventHandler::new(move |p: usize| page.set(p)),
                    on_page_size_change: EventHandler::new(move |size: usize| {
                        page_size.set(size);
                        page.set(1);
                    }),
                }),
                loading: payments.is_initial_load(),
                error_message: payments.error_message(),
                empty_message: Some("No payments found".to_string()),
                caption: Some("Payments".to_string()),
            }
        }
    }
}

fn payment_columns() -> Vec<Column<Payment>> {
    vec![
        Column::field("paymentId", "Payment")
            .sortable()
            .render(|p: &Payment| rsx! { span { class: "font-mono", title: "{p.payment_id}", "{short_id(&p.payment_id)}" } }),
        Column::field("orderId", "Order")
            .sortable()
            .render(|p: &Payment| rsx! { span { class: "font-mono", title: "{p.order_id}", "{short_id(&p.order_id)}" } }),
        Column::derived("amount", "Amount", |p: &Payment| CellValue::from(p.amount))
            .sortable()
            .class("text-right")
            .render(|p: &Payment| rsx! { "{format_currency(p.amount)}" }),
        Column::field("status", "Status")
            .sortable()
            .render(|p: &Payment| rsx! {
                PaymentStatusBadge { status: p.status }
                if let Some(reason) = &p.failure_reason {
                    span { class: "ml-2 text-xs text-red-600", title: "{reason}", "ⓘ" }
                }
            }),
        Column::field("paymentMethod", "Method"),
        Column::derived("attempt", "Attempt", |p: &Payment| CellValue::from(p.attempt()))
            .sortable()
            .class("text-right"),
        Column::field("createdAt", "Created")
            .sortable()
            .render(|p: &Payment| rsx! { "{format_datetime(&p.created_at)}" }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::payment::tests::payment;

    #[test]
    fn attempt_column_is_one_based() {
        let columns = payment_columns();
        let attempt = columns.iter().find(|c| c.key == "attempt").unwrap();
        let mut p = payment("pay-1", "FAILED", 10.0);
        p.retry_count = 2;
        assert_eq!(attempt.value(&p), CellValue::from(3u32));
    }

    #[test]
    fn retry_is_offered_only_for_failures() {
        assert!(payment("a", "FAILED", 1.0).can_retry());
        assert!(payment("b", "DECLINED", 1.0).can_retry());
        assert!(!payment("c", "APPROVED", 1.0).can_retry());
        assert!(!payment("d", "PENDING", 1.0).can_retry());
    }
}
