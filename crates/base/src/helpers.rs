use rust_decimal::Decimal;

use crate::entities::order::{OrderItem, OrderItemQuantity};
use crate::entities::SIGNIFICANT_DECIMAL_PLACES;

pub type OrderTotal = Decimal;

pub fn order_total(items: &[OrderItem]) -> OrderTotal {
    let total: Decimal = items
        .iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum();

    total.round_dp(SIGNIFICANT_DECIMAL_PLACES)
}

pub fn total_quantity(items: &[OrderItem]) -> OrderItemQuantity {
    items.iter().map(|item| item.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    #[allow(non_snake_case)]
    fn order_total__several_items__should_sum_prices_by_quantities() {
        let items = vec![
            OrderItem {
                name: String::from("keyboard"),
                quantity: 2,
                price: dec!(49.99),
            },
            OrderItem {
                name: String::from("mouse"),
                quantity: 1,
                price: dec!(25.50),
            },
        ];

        assert_eq!(order_total(&items), dec!(125.48));
    }

    #[test]
    #[allow(non_snake_case)]
    fn order_total__no_items__should_return_zero() {
        assert_eq!(order_total(&[]), dec!(0));
    }

    #[test]
    #[allow(non_snake_case)]
    fn total_quantity__several_items__should_sum_quantities() {
        let items = vec![
            OrderItem {
                name: String::from("keyboard"),
                quantity: 2,
                price: dec!(49.99),
            },
            OrderItem {
                name: String::from("monitor"),
                quantity: 3,
                price: dec!(179.90),
            },
        ];

        assert_eq!(total_quantity(&items), 5);
    }
}
