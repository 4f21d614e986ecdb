//! [`ActorEntity`] implementation for [`AdminOrder`].
//!
//! Status changes are unchecked: an operator may move an order
//! from any status to any other, including backwards. Backward moves are only
//! logged.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::model::{AdminOrder, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use tracing::{info, warn};

#[async_trait]
impl ActorEntity for AdminOrder {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(AdminOrder::new(id, params))
    }

    /// Applies contact corrections. Blank names are rejected.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), OrderError> {
        if let Some(name) = update.customer_name {
            if name.trim().is_empty() {
                return Err(OrderError::ValidationError(
                    "customer name is required".to_string(),
                ));
            }
            self.customer_name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::UpdateStatus(next) => {
                let previous = self.status;
                if previous.is_backward(next) {
                    warn!(order_code = %self.order_code, from = %previous, to = %next, "Backward status change");
                }
                self.status = next;
                Ok(OrderActionResult::UpdateStatus(previous))
            }
            OrderAction::VerifyPayment { approved } => {
                if self.status != OrderStatus::PendingPayment {
                    return Err(OrderError::PaymentNotPending(self.status));
                }
                self.status = if approved {
                    OrderStatus::Paid
                } else {
                    OrderStatus::Cancelled
                };
                info!(order_code = %self.order_code, approved, "Payment verified");
                Ok(OrderActionResult::VerifyPayment(self.status))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rupiah;

    fn order() -> AdminOrder {
        AdminOrder::from_create_params(
            OrderId(1),
            OrderCreate {
                customer_name: "Nadia".to_string(),
                phone: "0812".to_string(),
                total: Rupiah(100000),
                courier: "jne-reg".to_string(),
                items: Vec::new(),
                created_at: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_any_status_to_any_status() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let mut o = order();
                o.status = from;
                let result = o
                    .handle_action(OrderAction::UpdateStatus(to), &())
                    .await
                    .unwrap();
                assert_eq!(result, OrderActionResult::UpdateStatus(from));
                assert_eq!(o.status, to);
            }
        }
    }

    #[tokio::test]
    async fn test_verify_payment_outcomes() {
        let mut approved = order();
        let result = approved
            .handle_action(OrderAction::VerifyPayment { approved: true }, &())
            .await
            .unwrap();
        assert_eq!(result, OrderActionResult::VerifyPayment(OrderStatus::Paid));

        let mut rejected = order();
        rejected
            .handle_action(OrderAction::VerifyPayment { approved: false }, &())
            .await
            .unwrap();
        assert_eq!(rejected.status, OrderStatus::Cancelled);

        let err = approved
            .handle_action(OrderAction::VerifyPayment { approved: true }, &())
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::PaymentNotPending(OrderStatus::Paid));
    }

    #[tokio::test]
    async fn test_blank_rename_rejected() {
        let mut o = order();
        let err = o
            .on_update(
                OrderUpdate {
                    customer_name: Some("  ".to_string()),
                    phone: Some("0899".to_string()),
                },
                &(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::ValidationError(_)));
        assert_eq!(o.customer_name, "Nadia");
        assert_eq!(o.phone, "0812");
    }
}
