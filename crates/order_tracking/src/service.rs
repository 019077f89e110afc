use anyhow::Result;

use base::entities::order::{BasicOrderProperties, OrderId, OrderStatus};
use base::entities::Item;
use base::helpers::{order_total, total_quantity};
use base::stores::order_store::BasicOrderStore;

use crate::stores::OrderTrackingStatistics;

pub trait OrderTracking {
    /// Stores a new order and returns it with its assigned id.
    fn register_order<S>(
        store: &S,
        statistics: &mut OrderTrackingStatistics,
        properties: S::OrderProperties,
    ) -> Result<Item<OrderId, S::OrderProperties>>
    where
        S: BasicOrderStore,
        S::OrderProperties: AsRef<BasicOrderProperties>;

    fn change_order_status<S>(
        store: &S,
        statistics: &mut OrderTrackingStatistics,
        order_id: OrderId,
        new_status: OrderStatus,
    ) -> Result<Option<Item<OrderId, S::OrderProperties>>>
    where
        S: BasicOrderStore,
        S::OrderProperties: AsRef<BasicOrderProperties>;

    fn find_order_by_id<S>(
        store: &S,
        statistics: &mut OrderTrackingStatistics,
        order_id: OrderId,
    ) -> Result<Option<Item<OrderId, S::OrderProperties>>>
    where
        S: BasicOrderStore;

    fn get_tracked_orders<S>(store: &S) -> Result<Vec<Item<OrderId, S::OrderProperties>>>
    where
        S: BasicOrderStore;
}

#[derive(Default)]
pub struct OrderTrackingImpl;

impl OrderTrackingImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderTracking for OrderTrackingImpl {
    fn register_order<S>(
        store: &S,
        statistics: &mut OrderTrackingStatistics,
        properties: S::OrderProperties,
    ) -> Result<Item<OrderId, S::OrderProperties>>
    where
        S: BasicOrderStore,
        S::OrderProperties: AsRef<BasicOrderProperties>,
    {
        let new_order = store.create_order(properties)?;

        statistics.number_of_registered_orders += 1;

        let props = new_order.props.as_ref();
        log::debug!(
            "registered an order with an id {}: status {}, {} items for the total of {}",
            new_order.id,
            props.status,
            total_quantity(&props.items),
            order_total(&props.items)
        );

        Ok(new_order)
    }

    fn change_order_status<S>(
        store: &S,
        statistics: &mut OrderTrackingStatistics,
        order_id: OrderId,
        new_status: OrderStatus,
    ) -> Result<Option<Item<OrderId, S::OrderProperties>>>
    where
        S: BasicOrderStore,
        S::OrderProperties: AsRef<BasicOrderProperties>,
    {
        let updated_order = store.update_order_status(order_id, new_status)?;

        match &updated_order {
            None => {
                statistics.number_of_not_found_lookups += 1;
                log::debug!("an order with an id {} doesn't exist", order_id);
            }
            Some(order) => {
                statistics.number_of_status_updates += 1;
                log::debug!(
                    "changed the status of an order with an id {} to {}",
                    order.id,
                    order.props.as_ref().status
                );
            }
        }

        Ok(updated_order)
    }

    fn find_order_by_id<S>(
        store: &S,
        statistics: &mut OrderTrackingStatistics,
        order_id: OrderId,
    ) -> Result<Option<Item<OrderId, S::OrderProperties>>>
    where
        S: BasicOrderStore,
    {
        let order = store.get_order_by_id(order_id)?;

        if order.is_none() {
            statistics.number_of_not_found_lookups += 1;
            log::debug!("an order with an id {} doesn't exist", order_id);
        }

        Ok(order)
    }

    fn get_tracked_orders<S>(store: &S) -> Result<Vec<Item<OrderId, S::OrderProperties>>>
    where
        S: BasicOrderStore,
    {
        store.get_all_orders()
    }
}
