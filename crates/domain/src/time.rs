//! Time and date helpers.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// UTC timestamp used for session expiry and payment receipts.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Today's date in the server's local timezone (bookings are local dates).
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
