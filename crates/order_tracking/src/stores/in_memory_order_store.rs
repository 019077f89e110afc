use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::Result;

use base::entities::order::{BasicOrderProperties, OrderId, OrderStatus};
use base::entities::Item;
use base::stores::order_store::BasicOrderStore;

#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<Vec<Item<OrderId, BasicOrderProperties>>>,
    last_order_id: AtomicU64,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Default::default()
    }

    fn orders(&self) -> MutexGuard<'_, Vec<Item<OrderId, BasicOrderProperties>>> {
        // no operation leaves the collection in a partial state, so a lock
        // poisoned by a panicking caller is safe to reuse
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BasicOrderStore for InMemoryOrderStore {
    type OrderProperties = BasicOrderProperties;

    fn create_order(
        &self,
        properties: Self::OrderProperties,
    ) -> Result<Item<OrderId, Self::OrderProperties>> {
        // fetch_add returns the previous value; ids start from 1
        let id = self.last_order_id.fetch_add(1, Ordering::SeqCst) + 1;

        let new_order = Item { id, props: properties };

        self.orders().push(new_order.clone());

        Ok(new_order)
    }

    fn get_order_by_id(
        &self,
        order_id: OrderId,
    ) -> Result<Option<Item<OrderId, Self::OrderProperties>>> {
        Ok(self
            .orders()
            .iter()
            .find(|order| order.id == order_id)
            .cloned())
    }

    fn get_all_orders(&self) -> Result<Vec<Item<OrderId, Self::OrderProperties>>> {
        Ok(self.orders().clone())
    }

    fn update_order_status(
        &self,
        order_id: OrderId,
        new_status: OrderStatus,
    ) -> Result<Option<Item<OrderId, Self::OrderProperties>>> {
        let mut orders = self.orders();

        match orders.iter_mut().find(|order| order.id == order_id) {
            None => Ok(None),
            Some(order) => {
                order.props.status = new_status;
                Ok(Some(order.clone()))
            }
        }
    }
}
