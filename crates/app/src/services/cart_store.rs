//! Cart store — the single, injected holder of the current [`CartState`].

use tokio::sync::watch;

use servicebay_domain::cart::{CartAction, CartItem, CartState};
use servicebay_domain::id::ItemId;

/// State container for the cart.
///
/// Mutations are synchronous and go through [`CartState::reduce`]. Views
/// [`subscribe`](Self::subscribe) to a `watch` channel and are woken only when
/// a mutation actually changed the state.
pub struct CartStore {
    state: watch::Sender<CartState>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(CartState::empty());
        Self { state }
    }

    /// Apply `action` and return the resulting snapshot.
    pub fn dispatch(&self, action: CartAction) -> CartState {
        tracing::debug!(?action, "cart dispatch");
        self.state.send_if_modified(|current| {
            let next = current.reduce(action);
            if next == *current {
                false
            } else {
                *current = next;
                true
            }
        });
        self.snapshot()
    }

    pub fn add(&self, item: CartItem) -> CartState {
        self.dispatch(CartAction::Add(item))
    }

    pub fn remove(&self, id: ItemId) -> CartState {
        self.dispatch(CartAction::Remove { id })
    }

    pub fn update_quantity(&self, id: ItemId, quantity: u32) -> CartState {
        self.dispatch(CartAction::UpdateQuantity { id, quantity })
    }

    pub fn clear(&self) -> CartState {
        self.dispatch(CartAction::Clear)
    }

    /// Current cart contents.
    #[must_use]
    pub fn snapshot(&self) -> CartState {
        self.state.borrow().clone()
    }

    /// Number of bookings in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// Receiver that observes every change to the cart.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn should_start_empty() {
        let store = CartStore::new();
        assert!(store.is_empty());
        assert!(store.snapshot().total().is_zero());
    }

    #[test]
    fn should_add_items_and_total_them() {
        let store = CartStore::new();
        store.add(item("a", "₹299"));
        let state = store.add(item("b", "₹199"));

        assert_eq!(store.len(), 2);
        assert_eq!(state.total().to_string(), "₹498");
    }

    #[test]
    fn should_remove_and_update_quantity() {
        let store = CartStore::new();
        store.add(item("a", "₹299"));
        store.add(item("b", "₹199"));

        store.update_quantity(id("b"), 2);
        let state = store.remove(id("a"));

        assert_eq!(state.len(), 1);
        assert_eq!(state.total().to_string(), "₹398");
    }

    #[test]
    fn should_clear_cart() {
        let store = CartStore::new();
        store.add(item("a", "₹299"));
        let state = store.clear();
        assert!(state.is_empty());
        assert!(state.total().is_zero());
    }

    #[tokio::test]
    async fn should_notify_subscribers_on_change() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        store.add(item("a", "₹299"));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().len(), 1);
    }

    #[test]
    fn should_not_notify_when_state_unchanged() {
        let store = CartStore::new();
        store.add(item("a", "₹299"));
        let rx = store.subscribe();

        store.remove(id("missing"));

        assert!(!rx.has_changed().unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn should_notify_every_subscriber() {
        let store = CartStore::new();
        let rx1 = store.subscribe();
        let rx2 = store.subscribe();

        store.add(item("a", "₹1"));

        assert!(rx1.has_changed().unwrap());
        assert!(rx2.has_changed().unwrap());
    }
}
