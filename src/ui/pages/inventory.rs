// src/ui/pages/inventory.rs - Stock levels with derived stock status

use std::time::Duration;

use dioxus::prelude::*;

use crate::model::{InventoryItem, InventorySummary, StockStatus};
use crate::table::{clamp_page, CellValue, Column, PageInfo};
use crate::ui::{
    components::{DataTable, StatCard, StockBadge, TablePagination, Tone},
    pages::{PageWrapper, SearchInput},
    services::{use_remote, use_services},
};
use crate::utils::{format_datetime, format_percent};

#[component]
pub fn Inventory() -> Element {
    let services = use_services();
    let threshold = services.config.table.low_stock_threshold;

    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut page_size = use_signal(|| services.config.table.default_page_size);

    let inventory = {
        let api = services.api.clone();
        use_remote(
            Some(Duration::from_secs(services.config.polling.inventory_secs)),
            move || {
                let api = api.clone();
                async move { api.list_inventory().await }
            },
        )
    };

    let columns = use_hook(|| inventory_columns(threshold));

    let items = inventory.value().unwrap_or_default();
    let summary = InventorySummary::from_items(&items, threshold);
    let term = search();
    let visible: Vec<InventoryItem> = items
        .into_iter()
        .filter(|item| item.matches_search(&term))
        .collect();

    let info = PageInfo::new(page(), page_size(), visible.len());
    let info = PageInfo::new(clamp_page(info.page, info.total_pages()), info.page_size, info.total);
    let (start, end) = info.bounds();
    let page_rows = visible[start..end].to_vec();

    rsx! {
        PageWrapper {
            title: "Inventory".to_string(),
            subtitle: Some(format!(
                "Low stock at or below {} of total quantity",
                format_percent(threshold * 100.0)
            )),

            div {
                class: "grid grid-cols-1 sm:grid-cols-3 gap-6",
                StatCard {
                    label: "Products".to_string(),
                    value: summary.products.to_string(),
                    icon: "📦".to_string(),
                    tone: Tone::Blue,
                }
                StatCard {
                    label: "Out of stock".to_string(),
                    value: summary.out_of_stock.to_string(),
                    icon: "⛔".to_string(),
                    tone: Tone::Red,
                }
                StatCard {
                    label: "Low stock".to_string(),
                    value: summary.low_stock.to_string(),
                    icon: "⚠️".to_string(),
                    tone: Tone::Yellow,
                }
            }

            SearchInput {
                value: term.clone(),
                placeholder: "Search by product id or name".to_string(),
                on_change: move |value: String| {
                    search.set(value);
                    page.set(1);
                },
            }

            DataTable::<InventoryItem> {
                data: page_rows,
                columns: columns.clone(),
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
                loading: inventory.is_initial_load(),
                error_message: inventory.error_message(),
                empty_message: Some("No products found".to_string()),
                caption: Some("Inventory".to_string()),
            }
        }
    }
}

/// Sort rank of a stock status: the most urgent first when ascending
fn stock_rank(status: StockStatus) -> i64 {
    match status {
        StockStatus::OutOfStock => 0,
        StockStatus::LowStock => 1,
        StockStatus::InStock => 2,
    }
}

fn inventory_columns(threshold: f64) -> Vec<Column<InventoryItem>> {
    vec![
        Column::field("productId", "Product").sortable().class("font-mono"),
        Column::field("productName", "Name").sortable(),
        Column::field("availableQuantity", "Available").sortable().class("text-right"),
        Column::field("reservedQuantity", "Reserved").sortable().class("text-right"),
        Column::field("totalQuantity", "Total").sortable().class("text-right"),
        Column::field("availability", "Availability")
            .sortable()
            .render(|item: &InventoryItem| {
                let percent = item.availability_percent();
                let bar = format!("width: {:.0}%", percent.clamp(0.0, 100.0));
                rsx! {
                    div {
                        class: "flex items-center gap-2",
                        div {
                            class: "w-24 h-2 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden",
                            div {
                                class: "h-2 bg-blue-600",
                                style: "{bar}",
                            }
                        }
                        span { class: "text-xs", "{format_percent(percent)}" }
                    }
                }
            }),
        Column::derived("stockStatus", "Stock", move |item: &InventoryItem| {
            CellValue::from(stock_rank(item.stock_status(threshold)))
        })
        .sortable()
        .render(move |item: &InventoryItem| rsx! { StockBadge { status: item.stock_status(threshold) } }),
        Column::field("lastUpdated", "Updated")
            .sortable()
            .render(|item: &InventoryItem| rsx! { "{format_datetime(&item.last_updated)}" }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgent_stock_sorts_first() {
        assert!(stock_rank(StockStatus::OutOfStock) < stock_rank(StockStatus::LowStock));
        assert!(stock_rank(StockStatus::LowStock) < stock_rank(StockStatus::InStock));
    }

    #[test]
    fn columns_use_the_configured_threshold() {
        let item: InventoryItem = serde_json::from_value(serde_json::json!({
            "productId": "p-1",
            "productName": "Widget",
            "availableQuantity": 5,
            "reservedQuantity": 50,
            "totalQuantity": 55,
            "lastUpdated": "2024-03-07T09:05:00"
        }))
        .unwrap();

        let strict = inventory_columns(0.05);
        let stock = strict.iter().find(|c| c.key == "stockStatus").unwrap();
        assert_eq!(stock.value(&item), CellValue::from(2i64));

        let default = inventory_columns(0.2);
        let stock = default.iter().find(|c| c.key == "stockStatus").unwrap();
        assert_eq!(stock.value(&item), CellValue::from(1i64));
    }
}
