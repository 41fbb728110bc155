// src/model/mod.rs - Records exchanged with the order backend

pub mod dashboard;
pub mod event;
pub mod filters;
pub mod health;
pub mod inventory;
pub mod order;
pub mod payment;
pub mod timestamp;

pub use dashboard::{recent_orders, DashboardMetrics};
pub use event::OrderEvent;
pub use filters::{OrderFilters, PaymentFilters};
pub use health::{HealthReport, ReportedAt};
pub use inventory::{
    InventoryItem, InventoryStatus, InventorySummary, StockStatus, DEFAULT_LOW_STOCK_THRESHOLD,
};
pub use order::{
    CreateOrderRequest, Order, OrderItem, OrderItemRequest, OrderStatus, UpdateStatusRequest,
};
pub use payment::{Payment, PaymentStatus, PaymentSummary};
