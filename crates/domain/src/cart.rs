//! Cart — the customer's pending service bookings and their running total.
//!
//! The cart is a plain value ([`CartState`]) changed only through
//! [`CartAction`]s fed to the pure [`CartState::reduce`] transition. Holding
//! the current state and notifying views is the job of the application layer.

use serde::{Deserialize, Serialize};

use crate::error::{ServiceBayError, ValidationError};
use crate::id::ItemId;
use crate::price::Price;

/// A single booked service slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub price: Price,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl CartItem {
    /// Create a builder for constructing a [`CartItem`].
    #[must_use]
    pub fn builder() -> CartItemBuilder {
        CartItemBuilder::default()
    }

    /// `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceBayError::Validation`] when the title is blank.
    pub fn validate(&self) -> Result<(), ServiceBayError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`CartItem`].
#[derive(Debug, Default)]
pub struct CartItemBuilder {
    id: Option<String>,
    title: Option<String>,
    date: Option<String>,
    time: Option<String>,
    price: Option<String>,
    quantity: Option<u32>,
}

impl CartItemBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Formatted price string, e.g. `"₹299"`.
    #[must_use]
    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Consume the builder, validate, and return a [`CartItem`].
    ///
    /// # Errors
    ///
    /// Returns [`ServiceBayError::Validation`] if the id or title is missing,
    /// the price does not parse, or the quantity is zero.
    pub fn build(self) -> Result<CartItem, ServiceBayError> {
        let item = CartItem {
            id: ItemId::new(self.id.unwrap_or_default())?,
            title: self.title.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            time: self.time.unwrap_or_default(),
            price: Price::parse(&self.price.unwrap_or_default())?,
            quantity: self.quantity.unwrap_or(1),
        };
        if item.quantity == 0 {
            return Err(ValidationError::ZeroQuantity.into());
        }
        item.validate()?;
        Ok(item)
    }
}

/// A mutation request for the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartAction {
    /// Insert an item; an existing id is replaced in place.
    Add(CartItem),
    /// Remove the item with this id, if present.
    Remove { id: ItemId },
    /// Set the quantity of an item; `0` removes it.
    UpdateQuantity { id: ItemId, quantity: u32 },
    /// Empty the cart.
    Clear,
}

/// Snapshot of the cart.
///
/// Fields are private so the total can only be produced by [`Self::reduce`],
/// keeping `total == Σ price × quantity` and id uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartState {
    items: Vec<CartItem>,
    total: Price,
}

impl CartState {
    /// The empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn total(&self) -> Price {
        self.total
    }

    /// Number of distinct bookings (what the cart badge shows).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all items.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Pure state transition: the state after applying `action`.
    #[must_use]
    pub fn reduce(&self, action: CartAction) -> Self {
        let mut items = self.items.clone();

        match action {
            CartAction::Add(item) => {
                let item = CartItem {
                    quantity: item.quantity.max(1),
                    ..item
                };
                if let Some(existing) = items.iter_mut().find(|it| it.id == item.id) {
                    let quantity = existing.quantity;
                    *existing = CartItem { quantity, ..item };
                } else {
                    items.push(item);
                }
            }
            CartAction::Remove { id } => {
                items.retain(|item| item.id != id);
            }
            CartAction::UpdateQuantity { id, quantity: 0 } => {
                items.retain(|item| item.id != id);
            }
            CartAction::UpdateQuantity { id, quantity } => {
                if let Some(existing) = items.iter_mut().find(|it| it.id == id) {
                    existing.quantity = quantity;
                }
            }
            CartAction::Clear => items.clear(),
        }

        Self::from_items(items)
    }

    fn from_items(items: Vec<CartItem>) -> Self {
        let total = items.iter().map(CartItem::line_total).sum();
        Self { items, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: &str, price: &str) -> CartItem {
        CartItem::builder()
            .id(id)
            .title(format!("Service {id}"))
            .date("2026-10-20")
            .time("10:00 AM - 1:00 PM")
            .price(price)
            .build()
            .unwrap()
    }

    fn id(raw: &str) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    #[test]
    fn should_start_empty_with_zero_total() {
        let cart = CartState::empty();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn should_total_two_items() {
        let cart = CartState::empty()
            .reduce(CartAction::Add(item("a", "₹299")))
            .reduce(CartAction::Add(item("b", "₹199")));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total().to_string(), "₹498");
    }

    #[test]
    fn should_keep_insertion_order() {
        let cart = CartState::empty()
            .reduce(CartAction::Add(item("b", "₹1")))
            .reduce(CartAction::Add(item("a", "₹1")))
            .reduce(CartAction::Add(item("c", "₹1")));

        let ids: Vec<&str> = cart.items().iter().map(|it| it.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn should_merge_duplicate_id_in_place() {
        let mut renamed = item("a", "₹349");
        renamed.title = "Salon for Women (premium)".to_string();

        let cart = CartState::empty()
            .reduce(CartAction::Add(item("a", "₹299")))
            .reduce(CartAction::Add(item("b", "₹199")))
            .reduce(CartAction::Add(renamed));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].id.as_str(), "a");
        assert_eq!(cart.items()[0].title, "Salon for Women (premium)");
        assert_eq!(cart.total().to_string(), "₹548");
    }

    #[test]
    fn should_be_idempotent_when_same_item_added_twice() {
        let once = CartState::empty().reduce(CartAction::Add(item("a", "₹299")));
        let twice = once.reduce(CartAction::Add(item("a", "₹299")));
        assert_eq!(once, twice);
    }

    #[test]
    fn should_keep_quantity_when_duplicate_added() {
        let cart = CartState::empty()
            .reduce(CartAction::Add(item("a", "₹100")))
            .reduce(CartAction::UpdateQuantity {
                id: id("a"),
                quantity: 3,
            })
            .reduce(CartAction::Add(item("a", "₹100")));

        assert_eq!(cart.get(&id("a")).unwrap().quantity, 3);
        assert_eq!(cart.total(), Price::from_rupees(300));
    }

    #[test]
    fn should_remove_item_and_recompute_total() {
        let cart = CartState::empty()
            .reduce(CartAction::Add(item("a", "₹299")))
            .reduce(CartAction::Add(item("b", "₹199")))
            .reduce(CartAction::Remove { id: id("a") });

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Price::from_rupees(199));
    }

    #[test]
    fn should_leave_state_unchanged_when_removing_unknown_id() {
        let cart = CartState::empty().reduce(CartAction::Add(item("a", "₹299")));
        let after = cart.reduce(CartAction::Remove { id: id("missing") });
        assert_eq!(cart, after);
    }

    #[test]
    fn should_clear_non_empty_cart() {
        let cart = CartState::empty()
            .reduce(CartAction::Add(item("a", "₹299")))
            .reduce(CartAction::Clear);

        assert!(cart.items().is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn should_update_quantity_and_total() {
        let cart = CartState::empty()
            .reduce(CartAction::Add(item("a", "₹299")))
            .reduce(CartAction::UpdateQuantity {
                id: id("a"),
                quantity: 2,
            });

        assert_eq!(cart.unit_count(), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total().to_string(), "₹598");
    }

    #[test]
    fn should_remove_item_when_quantity_set_to_zero() {
        let cart = CartState::empty()
            .reduce(CartAction::Add(item("a", "₹299")))
            .reduce(CartAction::UpdateQuantity {
                id: id("a"),
                quantity: 0,
            });

        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn should_ignore_quantity_update_for_unknown_id() {
        let cart = CartState::empty().reduce(CartAction::Add(item("a", "₹299")));
        let after = cart.reduce(CartAction::UpdateQuantity {
            id: id("zzz"),
            quantity: 5,
        });
        assert_eq!(cart, after);
    }

    #[test]
    fn should_reject_item_without_title() {
        let result = CartItem::builder().id("a").price("₹1").build();
        assert!(matches!(
            result,
            Err(ServiceBayError::Validation(ValidationError::EmptyTitle))
        ));
    }

    #[test]
    fn should_reject_item_with_bad_price() {
        let result = CartItem::builder().id("a").title("x").price("abc").build();
        assert!(matches!(
            result,
            Err(ServiceBayError::Validation(ValidationError::InvalidPrice(_)))
        ));
    }

    #[test]
    fn should_deserialize_tagged_actions() {
        let action: CartAction =
            serde_json::from_str(r#"{"type":"remove","id":"a"}"#).unwrap();
        assert_eq!(action, CartAction::Remove { id: id("a") });

        let action: CartAction = serde_json::from_str(r#"{"type":"clear"}"#).unwrap();
        assert_eq!(action, CartAction::Clear);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8, u16),
        Remove(u8),
        Quantity(u8, u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..6, 0u16..5000).prop_map(|(id, price)| Op::Add(id, price)),
            (0u8..6).prop_map(Op::Remove),
            (0u8..6, 0u8..4).prop_map(|(id, qty)| Op::Quantity(id, qty)),
        ]
    }

    proptest! {
        #[test]
        fn total_always_matches_items(ops in prop::collection::vec(op(), 0..40)) {
            let mut cart = CartState::empty();
            for op in ops {
                let action = match op {
                    Op::Add(n, price) => CartAction::Add(item(&n.to_string(), &format!("₹{price}"))),
                    Op::Remove(n) => CartAction::Remove { id: id(&n.to_string()) },
                    Op::Quantity(n, qty) => CartAction::UpdateQuantity {
                        id: id(&n.to_string()),
                        quantity: u32::from(qty),
                    },
                };
                cart = cart.reduce(action);

                let expected: Price = cart.items().iter().map(CartItem::line_total).sum();
                prop_assert_eq!(cart.total(), expected);

                let mut ids: Vec<&ItemId> = cart.items().iter().map(|it| &it.id).collect();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), cart.len());
                prop_assert!(cart.items().iter().all(|it| it.quantity > 0));
            }
        }
    }
}
