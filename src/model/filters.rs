// src/model/filters.rs - List filters and their query-string encoding

use super::order::OrderStatus;
use super::payment::PaymentStatus;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderFilters {
    pub status: Vec<OrderStatus>,
    pub customer_id: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub page: Option<usize>,
    pub size: Option<usize>,
}

impl OrderFilters {
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status.push(status);
        self
    }

    /// Unset fields are omitted; each status repeats the `status` key
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = self
            .status
            .iter()
            .map(|s| ("status", s.as_str().to_string()))
            .collect();

        push_text(&mut pairs, "customerId", &self.customer_id);
        push_text(&mut pairs, "dateFrom", &self.date_from);
        push_text(&mut pairs, "dateTo", &self.date_to);
        push_number(&mut pairs, "minAmount", self.min_amount);
        push_number(&mut pairs, "maxAmount", self.max_amount);
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }

        pairs
    }

    pub fn to_query_string(&self) -> String {
        encode_query(&self.to_query_pairs())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentFilters {
    pub status: Vec<PaymentStatus>,
    pub order_id: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl PaymentFilters {
    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status.push(status);
        self
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = self
            .status
            .iter()
            .map(|s| ("status", s.as_str().to_string()))
            .collect();

        push_text(&mut pairs, "orderId", &self.order_id);
        push_text(&mut pairs, "dateFrom", &self.date_from);
        push_text(&mut pairs, "dateTo", &self.date_to);
        push_number(&mut pairs, "minAmount", self.min_amount);
        push_number(&mut pairs, "maxAmount", self.max_amount);

        pairs
    }

    pub fn to_query_string(&self) -> String {
        encode_query(&self.to_query_pairs())
    }
}

fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        pairs.push((key, value.to_string()));
    }
}

fn push_number(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<f64>) {
    if let Some(value) = value.filter(|v| v.is_finite()) {
        pairs.push((key, value.to_string()));
    }
}

/// `?a=1&b=x%20y`, or an empty string when there are no pairs
pub fn encode_query(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }

    let encoded: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("?{}", encoded.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_have_no_query() {
        assert_eq!(OrderFilters::default().to_query_string(), "");
        assert_eq!(PaymentFilters::default().to_query_string(), "");
    }

    #[test]
    fn order_filters_encode_in_order() {
        let filters = OrderFilters {
            customer_id: Some("cust 1".to_string()),
            min_amount: Some(100.0),
            max_amount: Some(250.5),
            page: Some(2),
            size: Some(25),
            ..OrderFilters::default()
        }
        .with_status(OrderStatus::Pending)
        .with_status(OrderStatus::Confirmed);

        assert_eq!(
            filters.to_query_string(),
            "?status=PENDING&status=CONFIRMED&customerId=cust%201&minAmount=100&maxAmount=250.5&page=2&size=25"
        );
    }

    #[test]
    fn blank_text_is_omitted() {
        let filters = PaymentFilters {
            order_id: Some("  ".to_string()),
            date_from: Some("2024-03-01".to_string()),
            ..PaymentFilters::default()
        }
        .with_status(PaymentStatus::Failed);

        assert_eq!(
            filters.to_query_pairs(),
            vec![
                ("status", "FAILED".to_string()),
                ("dateFrom", "2024-03-01".to_string())
            ]
        );
    }
}
