//! Finance and analytics figures for the admin section.

use std::collections::BTreeMap;

use crate::store::ShopStore;
use crate::types::{Order, OrderStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FinanceSummary {
    /// Confirmed, shipped and delivered orders.
    pub revenue: u64,
    pub pending: u64,
    pub cancelled: u64,
    pub orders_by_status: Vec<(OrderStatus, usize)>,
}

pub fn finance(orders: &[Order]) -> FinanceSummary {
    let mut summary = FinanceSummary::default();
    for o in orders {
        match o.status {
            s if s.is_settled() => summary.revenue = summary.revenue.saturating_add(o.total),
            OrderStatus::Pending => summary.pending = summary.pending.saturating_add(o.total),
            OrderStatus::Cancelled => {
                summary.cancelled = summary.cancelled.saturating_add(o.total)
            }
            _ => {}
        }
    }
    summary.orders_by_status = OrderStatus::ALL
        .iter()
        .map(|s| (*s, orders.iter().filter(|o| o.status == *s).count()))
        .collect();
    summary
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSales {
    pub product_id: u64,
    pub name: String,
    pub units: u32,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Analytics {
    pub order_count: usize,
    pub average_order_value: u64,
    pub top_products: Vec<ProductSales>,
    /// Units sold per category name. Lines whose product has since been
    /// deleted are counted under "—".
    pub units_by_category: Vec<(String, u32)>,
}

/// Figures over every order that was not cancelled.
pub fn analytics(store: &ShopStore, top: usize) -> Analytics {
    let live: Vec<&Order> = store
        .orders()
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .collect();

    let total = live.iter().map(|o| o.total).fold(0, u64::saturating_add);
    let average_order_value = if live.is_empty() {
        0
    } else {
        total / live.len() as u64
    };

    let mut by_product: BTreeMap<u64, ProductSales> = BTreeMap::new();
    for line in live.iter().flat_map(|o| o.lines.iter()) {
        let entry = by_product
            .entry(line.product_id)
            .or_insert_with(|| ProductSales {
                product_id: line.product_id,
                name: line.name.clone(),
                units: 0,
                amount: 0,
            });
        entry.units = entry.units.saturating_add(line.quantity);
        entry.amount = entry.amount.saturating_add(line.total());
    }

    let mut by_category: BTreeMap<String, u32> = BTreeMap::new();
    for sales in by_product.values() {
        let category = store
            .product(sales.product_id)
            .ok()
            .and_then(|p| store.category(p.category_id).ok())
            .map_or_else(|| "—".to_string(), |c| c.name.clone());
        let units = by_category.entry(category).or_default();
        *units = units.saturating_add(sales.units);
    }

    let mut top_products: Vec<ProductSales> = by_product.into_values().collect();
    top_products.sort_by(|a, b| b.units.cmp(&a.units).then(a.product_id.cmp(&b.product_id)));
    top_products.truncate(top);

    let mut units_by_category: Vec<(String, u32)> = by_category.into_iter().collect();
    units_by_category.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Analytics {
        order_count: live.len(),
        average_order_value,
        top_products,
        units_by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;
    use chrono::Utc;

    #[test]
    fn empty_store_reports_zeroes() {
        let store = ShopStore::new();
        let f = finance(store.orders());
        assert_eq!(f.revenue, 0);
        assert_eq!(f.orders_by_status.len(), OrderStatus::ALL.len());
        assert_eq!(analytics(&store, 5), Analytics::default());
    }

    #[test]
    fn demo_store_figures() {
        let store = seed::demo(Utc::now());
        let f = finance(store.orders());
        // 2 x 120 000 + 1 x 35 000, delivered.
        assert_eq!(f.revenue, 275_000);
        assert_eq!(f.pending, 0);

        let a = analytics(&store, 1);
        assert_eq!(a.order_count, 1);
        assert_eq!(a.average_order_value, 275_000);
        assert_eq!(a.top_products.len(), 1);
        assert_eq!(a.top_products[0].units, 2);
        assert_eq!(
            a.units_by_category,
            vec![("Cà phê".to_string(), 2), ("Dụng cụ".to_string(), 1)]
        );
    }
}
