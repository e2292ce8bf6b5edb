//! JSON handlers for pending toasts.
//!
//! Listing does not drain the queue; the next rendered page still shows them.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;

use servicebay_domain::notification::NotificationKind;

use crate::state::{AppState, Ports};

#[derive(Debug, Serialize)]
pub struct ToastBody {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
}

/// `GET /api/notifications`
pub async fn list<P: Ports>(State(state): State<AppState<P>>) -> Json<Vec<ToastBody>> {
    let toasts = state
        .notifications
        .pending()
        .into_iter()
        .map(|toast| ToastBody {
            id: toast.id,
            kind: toast.notification.kind,
            message: toast.notification.message,
        })
        .collect();
    Json(toasts)
}

/// `DELETE /api/notifications/{id}`
pub async fn dismiss<P: Ports>(
    State(state): State<AppState<P>>,
    Path(id): Path<u32>,
) -> StatusCode {
    state.notifications.dismiss(id);
    StatusCode::NO_CONTENT
}
