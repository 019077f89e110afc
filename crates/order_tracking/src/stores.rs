pub mod in_memory_order_store;

pub type TrackingStatisticNumber = u32;

#[derive(Default)]
pub struct OrderTrackingStatistics {
    pub number_of_registered_orders: TrackingStatisticNumber,
    pub number_of_status_updates: TrackingStatisticNumber,
    pub number_of_not_found_lookups: TrackingStatisticNumber,
}
