use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::storage::{load_json, save_json, Storage, CART_KEY};
use crate::types::{OrderLine, Product};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<OrderLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(storage: &dyn Storage) -> Self {
        load_json(storage, CART_KEY).unwrap_or_default()
    }

    pub fn save(&self, storage: &mut dyn Storage) {
        save_json(storage, CART_KEY, self);
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .map(OrderLine::total)
            .fold(0, u64::saturating_add)
    }

    pub fn quantity_of(&self, product_id: u64) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map_or(0, |l| l.quantity)
    }

    /// Add `quantity` units, merging with an existing line. The price is
    /// refreshed from `product` so the cart shows the current price.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }
        let wanted = self
            .quantity_of(product.id)
            .checked_add(quantity)
            .filter(|wanted| *wanted <= product.stock)
            .ok_or_else(|| CartError::ExceedsStock {
                name: product.name.clone(),
                available: product.stock,
            })?;

        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => {
                line.quantity = wanted;
                line.unit_price = product.price;
                line.name = product.name.clone();
            }
            None => self.lines.push(OrderLine {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.price,
                quantity,
            }),
        }
        Ok(())
    }

    /// Set a line's quantity; zero removes the line.
    pub fn set_quantity(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove(product.id);
        }
        if quantity > product.stock {
            return Err(CartError::ExceedsStock {
                name: product.name.clone(),
                available: product.stock,
            });
        }
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
            .ok_or(CartError::NotInCart(product.id))?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn remove(&mut self, product_id: u64) -> Result<(), CartError> {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() == before {
            return Err(CartError::NotInCart(product_id));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn product(id: u64, price: u64, stock: u32) -> Product {
        Product {
            id,
            category_id: 1,
            name: format!("P{id}"),
            description: String::new(),
            price,
            stock,
        }
    }

    #[test]
    fn add_merges_lines_and_totals() {
        let mut cart = Cart::new();
        let a = product(1, 100_000, 5);
        let b = product(2, 25_000, 5);
        cart.add(&a, 2).unwrap();
        cart.add(&b, 1).unwrap();
        cart.add(&a, 1).unwrap();

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.quantity_of(1), 3);
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.subtotal(), 325_000);
    }

    #[test]
    fn add_respects_stock_across_calls() {
        let mut cart = Cart::new();
        let a = product(1, 10, 2);
        cart.add(&a, 2).unwrap();
        assert_eq!(
            cart.add(&a, 1),
            Err(CartError::ExceedsStock {
                name: "P1".to_string(),
                available: 2
            })
        );
        assert_eq!(cart.add(&a, 0), Err(CartError::ZeroQuantity));
    }

    #[test]
    fn add_of_huge_quantity_is_refused_not_wrapped() {
        let mut cart = Cart::new();
        let a = product(1, 10, 5);
        cart.add(&a, 1).unwrap();
        assert_eq!(
            cart.add(&a, u32::MAX),
            Err(CartError::ExceedsStock {
                name: "P1".to_string(),
                available: 5
            })
        );
        assert_eq!(cart.quantity_of(1), 1);
    }

    #[test]
    fn subtotal_saturates_instead_of_panicking() {
        let mut cart = Cart::new();
        cart.add(&product(1, 10_000_000_000_000_000_000, 2), 2).unwrap();
        assert_eq!(cart.subtotal(), u64::MAX);
    }

    #[test]
    fn set_quantity_zero_removes() {
        let mut cart = Cart::new();
        let a = product(1, 10, 9);
        cart.add(&a, 1).unwrap();
        cart.set_quantity(&a, 4).unwrap();
        assert_eq!(cart.quantity_of(1), 4);
        cart.set_quantity(&a, 0).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.remove(1), Err(CartError::NotInCart(1)));
    }

    #[test]
    fn persists_through_storage() {
        let mut storage = MemoryStorage::new();
        let mut cart = Cart::new();
        cart.add(&product(3, 50, 1), 1).unwrap();
        cart.save(&mut storage);
        assert_eq!(Cart::load(&storage), cart);
    }
}
