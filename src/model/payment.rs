// src/model/payment.rs - Payments and payment summaries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::timestamp;
use crate::table::{CellValue, TableRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Approved,
    Declined,
    Failed,
    Cancelled,
    Refunded,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 7] = [
        Self::Pending,
        Self::Processing,
        Self::Approved,
        Self::Declined,
        Self::Failed,
        Self::Cancelled,
        Self::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Approved => "APPROVED",
            Self::Declined => "DECLINED",
            Self::Failed => "FAILED",
            Self::Cancelled => "CANCELLED",
            Self::Refunded => "REFUNDED",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Approved => "Approved",
            Self::Declined => "Declined",
            Self::Failed => "Failed",
            Self::Cancelled => "Cancelled",
            Self::Refunded => "Refunded",
            Self::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Only failed or declined payments may be resubmitted
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Failed | Self::Declined)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: String,
    pub order_id: String,
    pub amount: f64,
    pub status: PaymentStatus,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub retry_count: u32,
    #[serde(default)]
    pub correlation_id: String,
}

impl Payment {
    pub fn can_retry(&self) -> bool {
        self.status.is_retryable()
    }

    /// 1-based attempt number shown in the table
    pub fn attempt(&self) -> u32 {
        self.retry_count + 1
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.payment_id.to_lowercase().contains(&term)
            || self.order_id.to_lowercase().contains(&term)
    }
}

impl TableRecord for Payment {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "paymentId" | "id" => CellValue::text(&self.payment_id),
            "orderId" => CellValue::text(&self.order_id),
            "amount" => self.amount.into(),
            "status" => CellValue::text(self.status.label()),
            "paymentMethod" => CellValue::text(&self.payment_method),
            "gatewayTransactionId" => self.gateway_transaction_id.clone().into(),
            "failureReason" => self.failure_reason.clone().into(),
            "errorCode" => self.error_code.clone().into(),
            "attempt" => self.attempt().into(),
            "retryCount" => self.retry_count.into(),
            "createdAt" => self.created_at.into(),
            "processedAt" => self.processed_at.into(),
            "updatedAt" => self.updated_at.into(),
            _ => CellValue::Empty,
        }
    }
}

/// Figures for the cards above the payments table
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaymentSummary {
    pub approved_amount: f64,
    pub pending_count: usize,
    pub failed_count: usize,
    /// Approved share in percent; 0 for an empty list
    pub success_rate: f64,
}

impl PaymentSummary {
    pub fn from_payments(payments: &[Payment]) -> Self {
        let approved: Vec<&Payment> = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Approved)
            .collect();

        let success_rate = if payments.is_empty() {
            0.0
        } else {
            approved.len() as f64 / payments.len() as f64 * 100.0
        };

        Self {
            approved_amount: approved.iter().map(|p| p.amount).sum(),
            pending_count: payments.iter().filter(|p| p.status.is_pending()).count(),
            failed_count: payments.iter().filter(|p| p.can_retry()).count(),
            success_rate,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub fn payment(id: &str, status: &str, amount: f64) -> Payment {
        serde_json::from_value(json!({
            "paymentId": id,
            "orderId": format!("ord-{}", id),
            "amount": amount,
            "status": status,
            "paymentMethod": "CREDIT_CARD",
            "createdAt": "2024-03-07T09:05:00",
            "updatedAt": "2024-03-07T09:06:00",
            "retryCount": 1,
            "correlationId": "c-1"
        }))
        .unwrap()
    }

    #[test]
    fn retry_only_for_failed_or_declined() {
        for status in PaymentStatus::ALL {
            let expected = matches!(status, PaymentStatus::Failed | PaymentStatus::Declined);
            assert_eq!(status.is_retryable(), expected, "{}", status);
        }
        assert!(!PaymentStatus::Unknown.is_retryable());
    }

    #[test]
    fn decodes_optional_fields() {
        let p = payment("p1", "DECLINED", 10.0);
        assert!(p.processed_at.is_none());
        assert!(p.failure_reason.is_none());
        assert_eq!(p.attempt(), 2);
        assert!(p.can_retry());
        assert!(p.matches_search("ORD-P1"));
    }

    #[test]
    fn summary_figures() {
        let payments = vec![
            payment("1", "APPROVED", 100.0),
            payment("2", "APPROVED", 50.5),
            payment("3", "PENDING", 10.0),
            payment("4", "PROCESSING", 10.0),
            payment("5", "FAILED", 10.0),
            payment("6", "DECLINED", 10.0),
            payment("7", "REFUNDED", 10.0),
            payment("8", "CHARGEBACK", 10.0),
        ];
        let summary = PaymentSummary::from_payments(&payments);
        assert_eq!(summary.approved_amount, 150.5);
        assert_eq!(summary.pending_count, 2);
        assert_eq!(summary.failed_count, 2);
        assert_eq!(summary.success_rate, 25.0);

        assert_eq!(PaymentSummary::from_payments(&[]).success_rate, 0.0);
    }
}
