//! JSON handler for the current session.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use servicebay_domain::time::Timestamp;

use crate::state::{AppState, Ports};

#[derive(Debug, Serialize)]
pub struct SessionBody {
    pub signed_in: bool,
    pub email: Option<String>,
    pub expires_at: Option<Timestamp>,
}

/// `GET /api/session` — expired sessions read as signed out.
pub async fn show<P: Ports>(State(state): State<AppState<P>>) -> Json<SessionBody> {
    let body = match state.navigation.session() {
        Some(session) => SessionBody {
            signed_in: true,
            email: session.user.email,
            expires_at: session.expires_at,
        },
        None => SessionBody {
            signed_in: false,
            email: None,
            expires_at: None,
        },
    };
    Json(body)
}
