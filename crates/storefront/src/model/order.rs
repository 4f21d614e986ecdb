/// Represents an order in the admin back-office.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait
/// in [`order_actor`](crate::order_actor).
///
/// - Creation parameters ([`OrderCreate`])
/// - Update parameters ([`OrderUpdate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
use crate::model::{CartItem, Rupiah};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    PendingPayment,
    Paid,
    Processing,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::PendingPayment,
        OrderStatus::Paid,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::PendingPayment => "PENDING_PAYMENT",
            OrderStatus::Paid => "PAID",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Position along the fulfilment path. `None` for `Cancelled`.
    fn rank(self) -> Option<u8> {
        match self {
            OrderStatus::PendingPayment => Some(0),
            OrderStatus::Paid => Some(1),
            OrderStatus::Processing => Some(2),
            OrderStatus::Shipped => Some(3),
            OrderStatus::Completed => Some(4),
            OrderStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Whether moving from `self` to `next` goes against the fulfilment path:
    /// a lower rank, or leaving a terminal status.
    ///
    /// Only used for logging; status changes are never rejected.
    pub fn is_backward(self, next: OrderStatus) -> bool {
        if self == next {
            return false;
        }
        if self.is_terminal() {
            return true;
        }
        match (self.rank(), next.rank()) {
            (Some(from), Some(to)) => to < from,
            _ => false,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct ParseOrderStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseOrderStatusError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminOrder {
    pub id: OrderId,
    /// Human-facing code, `ORD-YYYYMMDD-NNNN`.
    pub order_code: String,
    pub customer_name: String,
    pub phone: String,
    pub total: Rupiah,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub courier: String,
    pub items: Vec<CartItem>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_name: String,
    pub phone: String,
    pub total: Rupiah,
    pub courier: String,
    pub items: Vec<CartItem>,
    /// Defaults to now.
    pub created_at: Option<DateTime<Utc>>,
}

/// Contact corrections made from the order detail page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub customer_name: Option<String>,
    pub phone: Option<String>,
}

impl AdminOrder {
    /// Builds a new order in `PENDING_PAYMENT`.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        let created_at = params.created_at.unwrap_or_else(Utc::now);
        Self {
            order_code: order_code(&id, &created_at),
            id,
            customer_name: params.customer_name,
            phone: params.phone,
            total: params.total,
            status: OrderStatus::PendingPayment,
            created_at,
            courier: params.courier,
            items: params.items,
        }
    }
}

fn order_code(id: &OrderId, created_at: &DateTime<Utc>) -> String {
    format!("ORD-{}-{:04}", created_at.format("%Y%m%d"), id.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_round_trips_through_text() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert_eq!("shipped".parse::<OrderStatus>(), Ok(OrderStatus::Shipped));
        assert!("REFUNDED".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_backward_detection() {
        use OrderStatus::*;
        assert!(!PendingPayment.is_backward(Paid));
        assert!(!Shipped.is_backward(Cancelled));
        assert!(Shipped.is_backward(Paid));
        assert!(Completed.is_backward(PendingPayment));
        assert!(Cancelled.is_backward(Processing));
        assert!(!Paid.is_backward(Paid));
    }

    #[test]
    fn test_new_order_code_and_status() {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap();
        let order = AdminOrder::new(
            OrderId(12),
            OrderCreate {
                customer_name: "Ayu Lestari".to_string(),
                phone: "081234567890".to_string(),
                total: Rupiah(695000),
                courier: "jne-reg".to_string(),
                items: Vec::new(),
                created_at: Some(created_at),
            },
        );
        assert_eq!(order.order_code, "ORD-20240309-0012");
        assert_eq!(order.status, OrderStatus::PendingPayment);
    }
}
