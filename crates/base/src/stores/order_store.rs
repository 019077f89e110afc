use crate::entities::order::{OrderId, OrderStatus};
use crate::entities::Item;
use anyhow::Result;

/// Contract of an order store shared between concurrent callers. Lookups
/// return owned records; a missing order is `None`, never an error.
pub trait BasicOrderStore {
    type OrderProperties;

    fn create_order(
        &self,
        properties: Self::OrderProperties,
    ) -> Result<Item<OrderId, Self::OrderProperties>>;

    fn get_order_by_id(
        &self,
        order_id: OrderId,
    ) -> Result<Option<Item<OrderId, Self::OrderProperties>>>;

    fn get_all_orders(&self) -> Result<Vec<Item<OrderId, Self::OrderProperties>>>;

    fn update_order_status(
        &self,
        order_id: OrderId,
        new_status: OrderStatus,
    ) -> Result<Option<Item<OrderId, Self::OrderProperties>>>;
}
