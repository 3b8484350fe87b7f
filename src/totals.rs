//! Totals
//!
//! Derived cart values. These are pure functions over the line-item
//! collection, recomputed on demand rather than cached on the store.

use rust_decimal::Decimal;

use crate::items::CartLineItem;

/// Sum of quantities across all line items, saturating at `u64::MAX`.
pub fn total_items(items: &[CartLineItem]) -> u64 {
    items
        .iter()
        .fold(0, |acc, item| acc.saturating_add(item.quantity))
}

/// Sum of `price * quantity` across all line items.
///
/// Saturates at [`Decimal::MAX`] when an extreme price and quantity
/// overflow the decimal range; derived reads never fail.
pub fn cart_total(items: &[CartLineItem]) -> Decimal {
    items.iter().fold(Decimal::ZERO, |acc, item| {
        acc.saturating_add(item.price.saturating_mul(Decimal::from(item.quantity)))
    })
}

/// Formats a monetary amount with exactly two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use crate::products::Product;

    use super::*;

    fn line_item(id: &str, price: Decimal, quantity: u64) -> CartLineItem {
        let mut item = CartLineItem::from(&Product::new(id, id.to_uppercase(), price));
        item.quantity = quantity;
        item
    }

    #[test]
    fn totals_of_empty_cart() {
        assert_eq!(total_items(&[]), 0);
        assert_eq!(cart_total(&[]), Decimal::ZERO);
        assert_eq!(format_amount(cart_total(&[])), "0.00");
    }

    #[test]
    fn totals_sum_over_quantities() {
        let items = [
            line_item("a", Decimal::new(1050, 2), 2),
            line_item("b", Decimal::new(399, 2), 3),
        ];

        assert_eq!(total_items(&items), 5);
        assert_eq!(cart_total(&items), Decimal::new(3297, 2));
        assert_eq!(format_amount(cart_total(&items)), "32.97");
    }

    #[test]
    fn format_pads_whole_amounts() {
        assert_eq!(format_amount(Decimal::from(20)), "20.00");
    }

    #[test]
    fn extreme_amounts_saturate_instead_of_panicking() {
        let items = [
            line_item("a", Decimal::MAX, u64::MAX),
            line_item("b", Decimal::MAX, 2),
        ];

        assert_eq!(cart_total(&items), Decimal::MAX);
        assert_eq!(total_items(&items), u64::MAX);
    }
}
