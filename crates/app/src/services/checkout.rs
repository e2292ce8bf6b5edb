//! Checkout flow — order summary and (simulated) payment.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use servicebay_domain::cart::CartItem;
use servicebay_domain::payment::{CardDetails, PaymentReceipt, PaymentRequest};
use servicebay_domain::price::Price;
use servicebay_domain::route::Route;

use super::cart_store::CartStore;
use super::notifications::NotificationCenter;
use crate::ports::PaymentGateway;

pub const PAYMENT_SUCCEEDED: &str = "Payment successful! Your services have been booked.";
pub const PAYMENT_FAILED: &str = "Payment failed. Please try again.";

/// What the checkout page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub items: Vec<CartItem>,
    pub total: Price,
    /// A payment is in flight; the pay button is disabled.
    pub processing: bool,
}

/// Result of entering the checkout page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutEntry {
    /// Nothing to check out; go elsewhere and render nothing.
    Redirect(Route),
    Ready(CheckoutSummary),
}

/// Result of a payment attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Charged; the cart has been cleared.
    Paid(PaymentReceipt),
    /// The gateway failed; the cart is untouched.
    Declined,
    /// A card field was blank; nothing was charged.
    InvalidCard,
    /// The cart was empty when payment was requested.
    EmptyCart,
    /// Another payment is still being processed.
    InProgress,
}

impl PaymentOutcome {
    /// Where the customer goes next.
    #[must_use]
    pub fn next_route(&self) -> Route {
        match self {
            Self::Paid(_) => Route::Home,
            Self::EmptyCart => Route::Cart,
            Self::Declined | Self::InvalidCard | Self::InProgress => Route::Checkout,
        }
    }
}

/// Clears the processing flag when the payment attempt ends, however it ends.
struct ProcessingGuard<'a>(&'a AtomicBool);

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Checkout use-case over the shared cart.
pub struct CheckoutFlow<P> {
    gateway: P,
    cart: Arc<CartStore>,
    notifications: Arc<NotificationCenter>,
    processing: AtomicBool,
}

impl<P: PaymentGateway> CheckoutFlow<P> {
    pub fn new(gateway: P, cart: Arc<CartStore>, notifications: Arc<NotificationCenter>) -> Self {
        Self {
            gateway,
            cart,
            notifications,
            processing: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::Acquire)
    }

    /// Enter the checkout page: redirect to the cart when it is empty.
    #[must_use]
    pub fn enter(&self) -> CheckoutEntry {
        let cart = self.cart.snapshot();
        if cart.is_empty() {
            return CheckoutEntry::Redirect(Route::Cart);
        }
        CheckoutEntry::Ready(CheckoutSummary {
            items: cart.items().to_vec(),
            total: cart.total(),
            processing: self.is_processing(),
        })
    }

    /// Pay for everything in the cart.
    ///
    /// Success removes the charged items and queues a success toast; a gateway failure
    /// queues an error toast and keeps the cart.
    pub async fn pay(&self, card: CardDetails) -> PaymentOutcome {
        let cart = self.cart.snapshot();
        if cart.is_empty() {
            return PaymentOutcome::EmptyCart;
        }
        if let Err(err) = card.validate() {
            self.notifications.error(err.to_string());
            return PaymentOutcome::InvalidCard;
        }
        if self
            .processing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("payment already in progress");
            return PaymentOutcome::InProgress;
        }
        let _processing = ProcessingGuard(&self.processing);

        let request = PaymentRequest {
            amount: cart.total(),
            item_count: cart.len(),
            card_last4: card.last4(),
        };
        tracing::info!(amount = %request.amount, items = request.item_count, "charging");

        match self.gateway.charge(&request).await {
            Ok(receipt) => {
                // Only what was charged leaves the cart; later bookings stay.
                for item in cart.items() {
                    self.cart.remove(item.id.clone());
                }
                tracing::info!(reference = %receipt.reference, amount = %receipt.amount, "payment succeeded");
                self.notifications.success(PAYMENT_SUCCEEDED);
                PaymentOutcome::Paid(receipt)
            }
            Err(err) => {
                tracing::warn!(error = ?err, "payment failed");
                self.notifications.error(PAYMENT_FAILED);
                PaymentOutcome::Declined
            }
        }
    }
}
