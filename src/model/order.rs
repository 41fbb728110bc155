// src/model/order.rs - Orders, order items and order creation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::inventory::InventoryStatus;
use super::payment::PaymentStatus;
use super::timestamp;
use crate::config::ValidationError;
use crate::table::{CellValue, TableRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    InventoryReserved,
    InventoryReservationFailed,
    PaymentProcessing,
    PaymentApproved,
    PaymentFailed,
    Confirmed,
    Cancelled,
    Completed,
    Failed,
    /// A status this build does not know about
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 10] = [
        Self::Pending,
        Self::InventoryReserved,
        Self::InventoryReservationFailed,
        Self::PaymentProcessing,
        Self::PaymentApproved,
        Self::PaymentFailed,
        Self::Confirmed,
        Self::Cancelled,
        Self::Completed,
        Self::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InventoryReserved => "INVENTORY_RESERVED",
            Self::InventoryReservationFailed => "INVENTORY_RESERVATION_FAILED",
            Self::PaymentProcessing => "PAYMENT_PROCESSING",
            Self::PaymentApproved => "PAYMENT_APPROVED",
            Self::PaymentFailed => "PAYMENT_FAILED",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InventoryReserved => "Inventory reserved",
            Self::InventoryReservationFailed => "Reservation failed",
            Self::PaymentProcessing => "Payment processing",
            Self::PaymentApproved => "Payment approved",
            Self::PaymentFailed => "Payment failed",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// CANCELLED, COMPLETED and FAILED are final
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed | Self::Failed)
    }

    pub fn can_cancel(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

impl OrderItem {
    /// quantity × unit price; the backend's `totalPrice` is not checked against it
    pub fn expected_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

impl TableRecord for OrderItem {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "productId" | "id" => CellValue::text(&self.product_id),
            "productName" => CellValue::text(&self.product_name),
            "quantity" => self.quantity.into(),
            "unitPrice" => self.unit_price.into(),
            "totalPrice" => self.total_price.into(),
            _ => CellValue::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_status: Option<InventoryStatus>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Case-insensitive match on order id or customer id
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.order_id.to_lowercase().contains(&term)
            || self.customer_id.to_lowercase().contains(&term)
    }
}

impl TableRecord for Order {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "orderId" | "id" => CellValue::text(&self.order_id),
            "customerId" => CellValue::text(&self.customer_id),
            "status" => CellValue::text(self.status.label()),
            "items" | "itemCount" => self.item_count().into(),
            "totalAmount" => self.total_amount.into(),
            "paymentStatus" => self.payment_status.map(|s| s.label()).into(),
            "inventoryStatus" => self.inventory_status.map(|s| s.label()).into(),
            "createdAt" => self.created_at.into(),
            "updatedAt" => self.updated_at.into(),
            _ => CellValue::Empty,
        }
    }
}

/// Body of `PUT /orders/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
}

/// Body of `POST /orders`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub items: Vec<OrderItemRequest>,
}

impl CreateOrderRequest {
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.quantity as f64 * i.price)
            .sum()
    }

    /// Client-side checks run before the request is sent
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.customer_id.trim().is_empty() {
            errors.push(ValidationError::new("customerId", "customer id is required"));
        }

        if self.items.is_empty() {
            errors.push(ValidationError::new("items", "at least one item is required"));
        }

        for (i, item) in self.items.iter().enumerate() {
            if item.product_id.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("items[{}].productId", i),
                    "product id is required",
                ));
            }
            if item.quantity < 1 {
                errors.push(ValidationError::new(
                    format!("items[{}].quantity", i),
                    "quantity must be at least 1",
                ));
            }
            if item.price.is_nan() || item.price < 0.0 {
                errors.push(ValidationError::new(
                    format!("items[{}].price", i),
                    "price must not be negative",
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_json(status: &str) -> serde_json::Value {
        json!({
            "orderId": "ord-1",
            "customerId": "cust-9",
            "status": status,
            "items": [
                {"productId": "p1", "productName": "Mouse", "quantity": 2, "unitPrice": 50.0, "totalPrice": 100.0}
            ],
            "totalAmount": 100.0,
            "paymentStatus": "APPROVED",
            "createdAt": "2024-03-07T09:05:00",
            "updatedAt": "2024-03-07T10:00:00Z"
        })
    }

    #[test]
    fn decodes_backend_order() {
        let order: Order = serde_json::from_value(order_json("PAYMENT_APPROVED")).unwrap();
        assert_eq!(order.status, OrderStatus::PaymentApproved);
        assert_eq!(order.payment_status, Some(PaymentStatus::Approved));
        assert_eq!(order.inventory_status, None);
        assert_eq!(order.items[0].expected_total(), 100.0);
        assert_eq!(order.item_count(), 2);
    }

    #[test]
    fn unknown_status_does_not_break_a_list() {
        let list = json!([order_json("SHIPPED"), order_json("PENDING")]);
        let orders: Vec<Order> = serde_json::from_value(list).unwrap();
        assert_eq!(orders[0].status, OrderStatus::Unknown);
        assert_eq!(orders[1].status, OrderStatus::Pending);
    }

    #[test]
    fn terminal_orders_cannot_be_cancelled() {
        for status in OrderStatus::ALL {
            let terminal = matches!(
                status,
                OrderStatus::Cancelled | OrderStatus::Completed | OrderStatus::Failed
            );
            assert_eq!(status.can_cancel(), !terminal, "{}", status);
        }
        assert_eq!(OrderStatus::parse("CONFIRMED"), Some(OrderStatus::Confirmed));
        assert_eq!(OrderStatus::parse("nope"), None);
    }

    #[test]
    fn search_is_case_insensitive() {
        let order: Order = serde_json::from_value(order_json("PENDING")).unwrap();
        assert!(order.matches_search("ORD-"));
        assert!(order.matches_search("Cust-9"));
        assert!(order.matches_search(""));
        assert!(!order.matches_search("zzz"));
    }

    #[test]
    fn create_request_validation() {
        let mut request = CreateOrderRequest::default();
        let errors = request.validate();
        let keys: Vec<_> = errors.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["customerId", "items"]);

        request.customer_id = "cust-1".to_string();
        request.items.push(OrderItemRequest {
            product_id: String::new(),
            product_name: "Keyboard".to_string(),
            quantity: 0,
            price: -1.0,
        });
        assert_eq!(request.validate().len(), 3);

        request.items[0] = OrderItemRequest {
            product_id: "p1".to_string(),
            product_name: "Keyboard".to_string(),
            quantity: 3,
            price: 10.0,
        };
        assert!(request.validate().is_empty());
        assert_eq!(request.total(), 30.0);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["customerId"], "cust-1");
        assert_eq!(body["items"][0]["productId"], "p1");
    }
}
