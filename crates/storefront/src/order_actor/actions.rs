//! Custom actions for the Order actor.

use crate::model::OrderStatus;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Overwrites the status. Any status may follow any other.
    UpdateStatus(OrderStatus),
    /// Outcome of checking a transfer receipt: approved moves the order to
    /// `PAID`, rejected to `CANCELLED`.
    VerifyPayment { approved: bool },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// Status before the change.
    UpdateStatus(OrderStatus),
    /// Status after verification.
    VerifyPayment(OrderStatus),
}
