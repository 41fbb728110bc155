// src/ui/components/status.rs - Badge colours for the domain statuses

use dioxus::prelude::*;

use crate::model::{InventoryStatus, OrderStatus, PaymentStatus, StockStatus};

use super::Badge;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Gray,
    Blue,
    Indigo,
    Green,
    Yellow,
    Red,
}

impl Tone {
    pub fn classes(&self) -> &'static str {
        match self {
            Self::Gray => "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-200",
            Self::Blue => "bg-blue-100 text-blue-800 dark:bg-blue-900/40 dark:text-blue-200",
            Self::Indigo => "bg-indigo-100 text-indigo-800 dark:bg-indigo-900/40 dark:text-indigo-200",
            Self::Green => "bg-green-100 text-green-800 dark:bg-green-900/40 dark:text-green-200",
            Self::Yellow => "bg-yellow-100 text-yellow-800 dark:bg-yellow-900/40 dark:text-yellow-200",
            Self::Red => "bg-red-100 text-red-800 dark:bg-red-900/40 dark:text-red-200",
        }
    }
}

pub fn order_tone(status: OrderStatus) -> Tone {
    match status {
        OrderStatus::Pending => Tone::Yellow,
        OrderStatus::InventoryReserved | OrderStatus::PaymentProcessing => Tone::Blue,
        OrderStatus::PaymentApproved | OrderStatus::Confirmed => Tone::Indigo,
        OrderStatus::Completed => Tone::Green,
        OrderStatus::InventoryReservationFailed
        | OrderStatus::PaymentFailed
        | OrderStatus::Failed => Tone::Red,
        OrderStatus::Cancelled | OrderStatus::Unknown => Tone::Gray,
    }
}

pub fn payment_tone(status: PaymentStatus) -> Tone {
    match status {
        PaymentStatus::Approved => Tone::Green,
        PaymentStatus::Pending | PaymentStatus::Processing => Tone::Yellow,
        PaymentStatus::Declined | PaymentStatus::Failed => Tone::Red,
        PaymentStatus::Refunded => Tone::Blue,
        PaymentStatus::Cancelled | PaymentStatus::Unknown => Tone::Gray,
    }
}

pub fn inventory_tone(status: InventoryStatus) -> Tone {
    match status {
        InventoryStatus::Available | InventoryStatus::Confirmed => Tone::Green,
        InventoryStatus::Reserved => Tone::Blue,
        InventoryStatus::LowStock => Tone::Yellow,
        InventoryStatus::OutOfStock => Tone::Red,
        InventoryStatus::Released | InventoryStatus::Unknown => Tone::Gray,
    }
}

pub fn stock_tone(status: StockStatus) -> Tone {
    match status {
        StockStatus::InStock => Tone::Green,
        StockStatus::LowStock => Tone::Yellow,
        StockStatus::OutOfStock => Tone::Red,
    }
}

#[component]
pub fn OrderStatusBadge(status: OrderStatus) -> Element {
    rsx! { Badge { tone: order_tone(status), "{status.label()}" } }
}

#[component]
pub fn PaymentStatusBadge(status: PaymentStatus) -> Element {
    rsx! { Badge { tone: payment_tone(status), "{status.label()}" } }
}

#[component]
pub fn InventoryStatusBadge(status: InventoryStatus) -> Element {
    rsx! { Badge { tone: inventory_tone(status), "{status.label()}" } }
}

#[component]
pub fn StockBadge(status: StockStatus) -> Element {
    rsx! { Badge { tone: stock_tone(status), "{status.label()}" } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_red() {
        assert_eq!(order_tone(OrderStatus::PaymentFailed), Tone::Red);
        assert_eq!(order_tone(OrderStatus::InventoryReservationFailed), Tone::Red);
        assert_eq!(payment_tone(PaymentStatus::Declined), Tone::Red);
        assert_eq!(stock_tone(StockStatus::OutOfStock), Tone::Red);
    }

    #[test]
    fn terminal_success_is_green() {
        assert_eq!(order_tone(OrderStatus::Completed), Tone::Green);
        assert_eq!(payment_tone(PaymentStatus::Approved), Tone::Green);
        assert_eq!(order_tone(OrderStatus::Cancelled), Tone::Gray);
    }
}
