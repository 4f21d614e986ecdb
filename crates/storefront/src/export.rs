//! CSV downloads for the admin order and inventory tables.

use crate::model::{AdminOrder, InventoryItem};
use std::fmt::Write;

const ORDER_HEADER: [&str; 8] = [
    "order_code",
    "customer_name",
    "phone",
    "courier",
    "status",
    "total",
    "items",
    "created_at",
];

const INVENTORY_HEADER: [&str; 6] = [
    "product_name",
    "current_stock",
    "reserved_stock",
    "available_stock",
    "reorder_point",
    "tier",
];

pub fn orders_csv(orders: &[AdminOrder]) -> String {
    let mut out = String::new();
    push_row(&mut out, ORDER_HEADER.iter().map(|h| h.to_string()));
    for order in orders {
        let units: u64 = order.items.iter().map(|line| u64::from(line.quantity)).sum();
        push_row(
            &mut out,
            [
                order.order_code.clone(),
                order.customer_name.clone(),
                order.phone.clone(),
                order.courier.clone(),
                order.status.to_string(),
                order.total.amount().to_string(),
                units.to_string(),
                order.created_at.to_rfc3339(),
            ],
        );
    }
    out
}

pub fn inventory_csv(items: &[InventoryItem]) -> String {
    let mut out = String::new();
    push_row(&mut out, INVENTORY_HEADER.iter().map(|h| h.to_string()));
    for item in items {
        push_row(
            &mut out,
            [
                item.product_name.clone(),
                item.current_stock.to_string(),
                item.reserved_stock.to_string(),
                item.available_stock().to_string(),
                item.reorder_point.to_string(),
                item.tier().to_string(),
            ],
        );
    }
    out
}

fn push_row(out: &mut String, fields: impl IntoIterator<Item = String>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, &field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        let _ = write!(out, "\"{}\"", field.replace('"', "\"\""));
    } else {
        out.push_str(field);
    }
}
