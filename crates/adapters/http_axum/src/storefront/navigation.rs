//! Forms posted from the navigation bar, its dialogs and the mobile menu.
//!
//! Every handler redirects back to the page the form was posted from
//! (`return_to`), except a successful search.

use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;

use servicebay_domain::error::ValidationError;
use servicebay_domain::location::{Coordinates, LocationChoice};
use servicebay_domain::session::Credentials;

use super::views::safe_return_to;
use crate::state::{AppState, Ports};

/// Hidden field carried by every chrome form.
#[derive(Debug, Deserialize)]
pub struct ReturnForm {
    pub return_to: Option<String>,
}

impl ReturnForm {
    fn redirect(&self) -> Redirect {
        Redirect::to(&safe_return_to(self.return_to.as_deref()))
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
    pub return_to: Option<String>,
}

/// `POST /search` — go to the results page; a blank query stays put.
pub async fn search<P: Ports>(
    State(state): State<AppState<P>>,
    Form(form): Form<SearchForm>,
) -> Redirect {
    match state.navigation.submit_search(&form.q) {
        Some(route) => Redirect::to(&route.path()),
        None => Redirect::to(&safe_return_to(form.return_to.as_deref())),
    }
}

/// `POST /menu/toggle`
pub async fn toggle_menu<P: Ports>(
    State(state): State<AppState<P>>,
    Form(form): Form<ReturnForm>,
) -> Redirect {
    state.navigation.toggle_mobile_menu();
    form.redirect()
}

/// `POST /location/open`
pub async fn open_location<P: Ports>(
    State(state): State<AppState<P>>,
    Form(form): Form<ReturnForm>,
) -> Redirect {
    state.navigation.open_location_picker();
    form.redirect()
}

/// `POST /location/close`
pub async fn close_location<P: Ports>(
    State(state): State<AppState<P>>,
    Form(form): Form<ReturnForm>,
) -> Redirect {
    state.navigation.close_location_picker();
    form.redirect()
}

/// `POST /location/detect` — restart the geolocation lookup in the background.
pub async fn detect_location<P: Ports>(
    State(state): State<AppState<P>>,
    Form(form): Form<ReturnForm>,
) -> Redirect {
    state.navigation.detect_location();
    form.redirect()
}

#[derive(Debug, Deserialize)]
pub struct LocationForm {
    #[serde(default)]
    pub address: String,
    /// Optional; blank when the address was typed in.
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub return_to: Option<String>,
}

impl LocationForm {
    fn choice(&self) -> Result<LocationChoice, ValidationError> {
        let lat = self.lat.as_deref().map(str::trim).filter(|v| !v.is_empty());
        let lon = self.lon.as_deref().map(str::trim).filter(|v| !v.is_empty());
        let coordinates = match (lat, lon) {
            (Some(lat), Some(lon)) => {
                let invalid = || ValidationError::InvalidCoordinates {
                    lat: lat.to_string(),
                    lon: lon.to_string(),
                };
                let lat = lat.parse().map_err(|_| invalid())?;
                let lon = lon.parse().map_err(|_| invalid())?;
                Some(Coordinates::new(lat, lon)?)
            }
            _ => None,
        };
        LocationChoice::new(self.address.as_str(), coordinates)
    }
}

/// `POST /location` — apply a location picked in the dialog.
pub async fn select_location<P: Ports>(
    State(state): State<AppState<P>>,
    Form(form): Form<LocationForm>,
) -> Redirect {
    match form.choice() {
        Ok(choice) => state.navigation.select_location(choice).await,
        Err(err) => {
            state.notifications.error(err.to_string());
        }
    }
    Redirect::to(&safe_return_to(form.return_to.as_deref()))
}

/// `POST /auth/open`
pub async fn open_auth<P: Ports>(
    State(state): State<AppState<P>>,
    Form(form): Form<ReturnForm>,
) -> Redirect {
    state.navigation.open_auth_dialog();
    form.redirect()
}

/// `POST /auth/close`
pub async fn close_auth<P: Ports>(
    State(state): State<AppState<P>>,
    Form(form): Form<ReturnForm>,
) -> Redirect {
    state.navigation.close_auth_dialog();
    form.redirect()
}

#[derive(Debug, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub return_to: Option<String>,
}

/// `POST /auth/sign-in` — outcome is reported through a toast.
pub async fn sign_in<P: Ports>(
    State(state): State<AppState<P>>,
    Form(form): Form<SignInForm>,
) -> Redirect {
    match Credentials::new(form.email.as_str(), form.password.as_str()) {
        Ok(credentials) => {
            state.navigation.sign_in(credentials).await;
        }
        Err(err) => {
            state.notifications.error(err.to_string());
        }
    }
    Redirect::to(&safe_return_to(form.return_to.as_deref()))
}

/// `POST /auth/sign-out`
pub async fn sign_out<P: Ports>(
    State(state): State<AppState<P>>,
    Form(form): Form<ReturnForm>,
) -> Redirect {
    state.navigation.sign_out().await;
    form.redirect()
}
