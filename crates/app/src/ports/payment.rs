//! Payment port — the gateway that would charge the customer's card.

use std::future::Future;

use servicebay_domain::error::ServiceBayError;
use servicebay_domain::payment::{PaymentReceipt, PaymentRequest};

/// Charges a payment request.
pub trait PaymentGateway {
    fn charge(
        &self,
        request: &PaymentRequest,
    ) -> impl Future<Output = Result<PaymentReceipt, ServiceBayError>> + Send;
}
