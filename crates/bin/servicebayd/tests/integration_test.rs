//! End-to-end smoke tests for the full servicebayd stack.
//!
//! Each test wires the demo catalog, local adapters, real services and the
//! real axum router, then exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::path::PathBuf;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use servicebay_adapter_http_axum::router;
use servicebay_adapter_http_axum::state::{AppState, Ports};
use servicebay_adapter_local::{
    FixedPositionSource, InMemoryAuthProvider, JsonFilePreferenceStore, SimulatedPaymentGateway,
    StaticCatalog,
};
use servicebay_app::ports::ReverseGeocoder;
use servicebay_domain::error::ServiceBayError;
use servicebay_domain::location::Coordinates;
use tower::ServiceExt;

struct CoordinatesGeocoder;

impl ReverseGeocoder for CoordinatesGeocoder {
    async fn reverse(&self, coordinates: Coordinates) -> Result<String, ServiceBayError> {
        Ok(format!("Near {:.2}, {:.2}", coordinates.lat, coordinates.lon))
    }
}

struct DemoPorts;

impl Ports for DemoPorts {
    type Catalog = StaticCatalog;
    type Auth = InMemoryAuthProvider;
    type Position = FixedPositionSource;
    type Geocoder = CoordinatesGeocoder;
    type Preferences = JsonFilePreferenceStore;
    type Payment = SimulatedPaymentGateway;
}

fn preferences_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("servicebayd-{}-{name}", std::process::id()))
        .join("preferences.json")
}

/// Build a fully-wired state with no detectable position.
fn state_with(preferences: PathBuf, position: Option<Coordinates>) -> AppState<DemoPorts> {
    AppState::new(
        StaticCatalog::demo().expect("demo catalog should seed"),
        InMemoryAuthProvider::new([("demo@servicebay.local", "demo1234")]),
        FixedPositionSource::new(position),
        CoordinatesGeocoder,
        JsonFilePreferenceStore::new(preferences),
        SimulatedPaymentGateway::new(Duration::from_millis(10)),
    )
}

fn app(name: &str) -> (AppState<DemoPorts>, Router) {
    let state = state_with(preferences_path(name), None);
    let app = router::build(state.clone());
    (state, app)
}

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

async fn text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&text(response).await).unwrap()
}

fn tomorrow() -> String {
    servicebay_domain::time::today()
        .succ_opt()
        .unwrap()
        .format("%Y-%m-%d")
        .to_string()
}

async fn book(app: &Router, listing: &str) -> Response<Body> {
    let body = format!("date={}&time=10%3A00+AM+-+1%3A00+PM", tomorrow());
    send(app, form(&format!("/services/{listing}/book"), &body)).await
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (_, app) = app("health");

    let resp = send(&app, get("/health")).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Browse and book
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_home_page_with_demo_catalog() {
    let (_, app) = app("home");

    let resp = send(&app, get("/")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = text(resp).await;
    assert!(body.contains("Salon for Women"));
    assert!(body.contains("Electrician"));
    assert!(body.contains("Select Location"));
}

#[tokio::test]
async fn should_book_two_services_and_total_them() {
    let (state, app) = app("total");

    let resp = book(&app, "1").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/cart");
    book(&app, "2").await;

    let cart = json(send(&app, get("/api/cart")).await).await;
    assert_eq!(cart["total"], "₹498");
    assert_eq!(cart["item_count"], 2);
    assert_eq!(state.cart.len(), 2);

    let page = text(send(&app, get("/cart")).await).await;
    assert!(page.contains("₹498"));
    assert!(page.contains("Salon for Women added to cart!"));
}

#[tokio::test]
async fn should_merge_repeated_booking_of_same_slot() {
    let (state, app) = app("merge");

    book(&app, "1").await;
    book(&app, "1").await;

    assert_eq!(state.cart.len(), 1);
}

// ---------------------------------------------------------------------------
// Checkout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_redirect_empty_checkout_to_cart() {
    let (_, app) = app("empty-checkout");

    let resp = send(&app, get("/checkout")).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/cart");
    assert!(text(resp).await.is_empty());
}

#[tokio::test]
async fn should_pay_and_clear_cart_then_go_home() {
    let (state, app) = app("pay");
    book(&app, "1").await;
    book(&app, "2").await;

    let summary = text(send(&app, get("/checkout")).await).await;
    assert!(summary.contains("₹498"));

    let resp = send(
        &app,
        form("/checkout/pay", "number=4111+1111+1111+1111&expiry=12%2F30&cvv=123"),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    assert!(state.cart.is_empty());
    assert!(!state.checkout.is_processing());

    let cart = json(send(&app, get("/api/cart")).await).await;
    assert_eq!(cart["item_count"], 0);
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_sign_out_without_session() {
    let (_, app) = app("sign-out");

    let resp = send(&app, form("/auth/sign-out", "return_to=%2F")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let session = json(send(&app, get("/api/session")).await).await;
    assert_eq!(session["signed_in"], false);
    assert!(session["email"].is_null());
    assert!(!text(send(&app, get("/")).await).await.contains("demo@servicebay.local"));
}

#[tokio::test]
async fn should_sign_in_with_demo_account() {
    let (state, app) = app("sign-in");
    state.navigation.mount().await;

    send(
        &app,
        form(
            "/auth/sign-in",
            "email=demo%40servicebay.local&password=demo1234&return_to=%2F",
        ),
    )
    .await;

    let session = json(send(&app, get("/api/session")).await).await;
    assert_eq!(session["signed_in"], true);
    assert_eq!(session["email"], "demo@servicebay.local");
    state.navigation.teardown();
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_restore_selected_location_after_restart() {
    let path = preferences_path("restart");
    let _ = std::fs::remove_file(&path);

    let first = state_with(path.clone(), None);
    let app = router::build(first.clone());
    send(
        &app,
        form("/location", "address=Indiranagar%2C+Bengaluru&return_to=%2F"),
    )
    .await;
    first.navigation.teardown();

    let second = state_with(path.clone(), None);
    second.navigation.mount().await;

    assert_eq!(second.navigation.view().location_label, "Indiranagar, Bengaluru");
    second.navigation.teardown();
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn should_detect_location_on_mount() {
    let path = preferences_path("detect");
    let _ = std::fs::remove_file(&path);
    let state = state_with(path.clone(), Some(Coordinates::new(12.9716, 77.5946).unwrap()));

    state.navigation.mount().await;
    for _ in 0..100 {
        if !state.navigation.is_detecting() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(state.navigation.view().location_label, "Near 12.97, 77.59");
    state.navigation.teardown();
    let _ = std::fs::remove_file(&path);
}
