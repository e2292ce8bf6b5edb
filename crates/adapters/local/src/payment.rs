//! Simulated payment gateway.
//!
//! No money moves: the gateway waits for a configured delay and then issues a
//! receipt (or declines when told to).

use std::future::Future;
use std::time::Duration;

use servicebay_app::ports::PaymentGateway;
use servicebay_domain::error::ServiceBayError;
use servicebay_domain::payment::{PaymentReceipt, PaymentRequest};
use servicebay_domain::time::now;

use crate::error::LocalAdapterError;

/// Processing time used when none is configured.
pub const DEFAULT_PAYMENT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct SimulatedPaymentGateway {
    delay: Duration,
    decline: bool,
}

impl Default for SimulatedPaymentGateway {
    fn default() -> Self {
        Self::new(DEFAULT_PAYMENT_DELAY)
    }
}

impl SimulatedPaymentGateway {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            decline: false,
        }
    }

    /// Gateway that fails every charge after the delay.
    #[must_use]
    pub fn declining(delay: Duration) -> Self {
        Self {
            delay,
            decline: true,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl PaymentGateway for SimulatedPaymentGateway {
    fn charge(
        &self,
        request: &PaymentRequest,
    ) -> impl Future<Output = Result<PaymentReceipt, ServiceBayError>> + Send {
        let delay = self.delay;
        let decline = self.decline;
        let request = request.clone();
        async move {
            tracing::debug!(amount = %request.amount, delay_ms = delay.as_millis(), "processing payment");
            tokio::time::sleep(delay).await;
            if decline {
                return Err(LocalAdapterError::Declined.into());
            }
            Ok(PaymentReceipt {
                reference: uuid::Uuid::new_v4(),
                amount: request.amount,
                card_last4: request.card_last4,
                paid_at: now(),
            })
        }
    }
}
