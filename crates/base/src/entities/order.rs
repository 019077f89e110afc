use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type OrderId = u64;

/// Free-form label describing the current state of an order. The store
/// imposes no enumerated set and no transition rules.
pub type OrderStatus = String;

pub const DEFAULT_ORDER_STATUS: &str = "CREATED";

pub type OrderItemName = String;
pub type OrderItemQuantity = u32;
pub type OrderItemPrice = Decimal;

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct OrderItem {
    pub name: OrderItemName,
    pub quantity: OrderItemQuantity,
    pub price: OrderItemPrice,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BasicOrderProperties {
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl Default for BasicOrderProperties {
    fn default() -> Self {
        Self {
            status: String::from(DEFAULT_ORDER_STATUS),
            items: Vec::new(),
        }
    }
}

impl AsRef<BasicOrderProperties> for BasicOrderProperties {
    fn as_ref(&self) -> &BasicOrderProperties {
        self
    }
}
