// src/model/dashboard.rs - Headline metrics for the dashboard

use serde::{Deserialize, Serialize};

use super::order::{Order, OrderStatus};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardMetrics {
    pub total_orders: u64,
    pub total_revenue: f64,
    pub pending_orders: u64,
    /// Completed share of all orders, in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
}

impl DashboardMetrics {
    /// Same figures computed from an order list, for backends without the
    /// metrics endpoint
    pub fn from_orders(orders: &[Order]) -> Self {
        let total = orders.len() as u64;
        let completed = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .count() as f64;

        Self {
            total_orders: total,
            total_revenue: orders.iter().map(|o| o.total_amount).sum(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count() as u64,
            conversion_rate: Some(if total == 0 {
                0.0
            } else {
                completed / total as f64 * 100.0
            }),
        }
    }
}

/// The `limit` most recently created orders, newest first
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<Order> {
    let mut recent = orders.to_vec();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(limit);
    recent
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(id: &str, status: &str, amount: f64, created: &str) -> Order {
        serde_json::from_value(json!({
            "orderId": id,
            "customerId": "c",
            "status": status,
            "totalAmount": amount,
            "createdAt": created,
            "updatedAt": created
        }))
        .unwrap()
    }

    #[test]
    fn derives_metrics_from_orders() {
        let orders = vec![
            order("1", "COMPLETED", 100.0, "2024-03-01T10:00:00"),
            order("2", "PENDING", 50.0, "2024-03-02T10:00:00"),
            order("3", "PENDING", 25.0, "2024-03-03T10:00:00"),
            order("4", "CANCELLED", 25.0, "2024-03-04T10:00:00"),
        ];
        let metrics = DashboardMetrics::from_orders(&orders);
        assert_eq!(metrics.total_orders, 4);
        assert_eq!(metrics.total_revenue, 200.0);
        assert_eq!(metrics.pending_orders, 2);
        assert_eq!(metrics.conversion_rate, Some(25.0));

        assert_eq!(
            DashboardMetrics::from_orders(&[]).conversion_rate,
            Some(0.0)
        );
    }

    #[test]
    fn partial_metrics_payload() {
        let metrics: DashboardMetrics =
            serde_json::from_value(json!({"totalOrders": 7, "totalRevenue": 12.5})).unwrap();
        assert_eq!(metrics.total_orders, 7);
        assert_eq!(metrics.pending_orders, 0);
        assert_eq!(metrics.conversion_rate, None);
    }

    #[test]
    fn recent_orders_are_newest_first() {
        let orders = vec![
            order("old", "PENDING", 1.0, "2024-01-01T00:00:00"),
            order("new", "PENDING", 1.0, "2024-03-01T00:00:00"),
            order("mid", "PENDING", 1.0, "2024-02-01T00:00:00"),
        ];
        let ids: Vec<_> = recent_orders(&orders, 2)
            .into_iter()
            .map(|o| o.order_id)
            .collect();
        assert_eq!(ids, vec!["new", "mid"]);
    }
}
