// ============================================================================
// ORDER - Pedidos del cliente
// ============================================================================

use serde::Deserialize;
use crate::models::common::{RawId, RawNumber};
use crate::utils::format::format_date;

/// Estado de un pedido. El mapeo desde el string crudo es total: estados
/// desconocidos caen en Unknown y se renderizan igual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
    Unknown,
}

impl OrderStatus {
    pub fn from_raw(raw: &str) -> OrderStatus {
        match raw.trim().to_lowercase().as_str() {
            "processing" | "pending" | "confirmed" => OrderStatus::Processing,
            "shipped" | "in_transit" | "in-transit" => OrderStatus::Shipped,
            "delivered" | "completed" => OrderStatus::Delivered,
            "cancelled" | "canceled" => OrderStatus::Cancelled,
            "refunded" => OrderStatus::Refunded,
            _ => OrderStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
            OrderStatus::Unknown => "—",
        }
    }

    /// Clase CSS del badge de estado
    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "status-processing",
            OrderStatus::Shipped => "status-shipped",
            OrderStatus::Delivered => "status-delivered",
            OrderStatus::Cancelled => "status-cancelled",
            OrderStatus::Refunded => "status-refunded",
            OrderStatus::Unknown => "status-unknown",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOrder {
    #[serde(default)]
    pub id: RawId,
    #[serde(default, alias = "orderNumber", alias = "order_number")]
    pub number: String,
    #[serde(default, alias = "createdAt", alias = "placed_at", alias = "created_at")]
    pub placed_at: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total: RawNumber,
    #[serde(default, alias = "itemCount", alias = "items_count")]
    pub item_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub number: String,
    /// String de display ya formateada
    pub placed_at: String,
    pub status: OrderStatus,
    pub total_cents: i64,
    pub item_count: i64,
}

impl Order {
    pub fn from_raw(raw: &RawOrder) -> Order {
        Order {
            id: raw.id.canonical(),
            number: raw.number.trim().to_string(),
            placed_at: format_date(&raw.placed_at),
            status: OrderStatus::from_raw(&raw.status),
            total_cents: raw.total.as_cents(),
            item_count: raw.item_count.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_total() {
        assert_eq!(OrderStatus::from_raw("Shipped"), OrderStatus::Shipped);
        assert_eq!(OrderStatus::from_raw("in_transit"), OrderStatus::Shipped);
        assert_eq!(OrderStatus::from_raw("CANCELED"), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::from_raw("weird_state"), OrderStatus::Unknown);
        assert_eq!(OrderStatus::from_raw(""), OrderStatus::Unknown);
    }

    #[test]
    fn unknown_status_still_renders() {
        let raw: RawOrder =
            serde_json::from_str(r#"{"id":7,"status":"teleported"}"#).unwrap();
        let order = Order::from_raw(&raw);
        assert_eq!(order.status, OrderStatus::Unknown);
        assert!(!order.status.label().is_empty());
        assert!(!order.status.css_class().is_empty());
    }

    #[test]
    fn order_normalizes_both_spellings_and_missing_count() {
        let snake: RawOrder = serde_json::from_str(
            r#"{"id":"9","order_number":"VL-1042","created_at":"2026-02-01T09:00:00Z","status":"delivered","total":"64.50","items_count":3}"#,
        )
        .unwrap();
        let camel: RawOrder = serde_json::from_str(
            r#"{"id":9,"orderNumber":"VL-1042","createdAt":"2026-02-01T09:00:00Z","status":"delivered","total":64.5,"itemCount":3}"#,
        )
        .unwrap();
        assert_eq!(Order::from_raw(&snake), Order::from_raw(&camel));

        let bare: RawOrder = serde_json::from_str(r#"{"id":1}"#).unwrap();
        let order = Order::from_raw(&bare);
        assert_eq!(order.item_count, 0);
        assert_eq!(order.total_cents, 0);
        assert_eq!(order.placed_at, "");
    }
}
