//! Server-Sent Events (SSE) stream of cart snapshots.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::WatchStream;

use super::cart::CartBody;
use crate::state::{AppState, Ports};

/// `GET /api/cart/stream` — the current cart, then every change to it.
///
/// Each snapshot is sent as a JSON `data:` frame with event name `cart`.
/// Rapid changes may be coalesced; the latest snapshot always arrives.
pub async fn cart_stream<P: Ports>(
    State(state): State<AppState<P>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let snapshots = WatchStream::new(state.cart.subscribe()).filter_map(|cart| {
        match serde_json::to_string(&CartBody::from(&cart)) {
            Ok(json) => Some(Ok(Event::default().event("cart").data(json))),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize cart for SSE stream");
                None
            }
        }
    });

    Sse::new(snapshots).keep_alive(KeepAlive::default())
}
