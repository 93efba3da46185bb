//! End-to-end smoke tests for the full bombillad stack.
//!
//! Each test spins up the complete application (stub bulb handles behind the
//! real registry, real service, real axum router) and exercises the HTTP
//! layer via `tower::ServiceExt::oneshot` — no TCP port is bound and no real
//! bulb is contacted.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use bombilla_adapter_http_axum::router;
use bombilla_adapter_http_axum::state::AppState;
use bombilla_app::ports::{LightConnector, LightHandle};
use bombilla_app::registry::LightRegistry;
use bombilla_app::service::LightService;
use bombilla_domain::address::LightAddress;
use bombilla_domain::command::LightCommand;
use bombilla_domain::error::DeviceError;

/// Bulb stand-in that records every command it receives.
#[derive(Clone, Default)]
struct FakeBulb {
    calls: Arc<Mutex<Vec<LightCommand>>>,
}

impl FakeBulb {
    fn calls(&self) -> Vec<LightCommand> {
        self.calls.lock().unwrap().clone()
    }
}

impl LightHandle for FakeBulb {
    async fn apply(&self, command: &LightCommand) -> Result<(), DeviceError> {
        self.calls.lock().unwrap().push(*command);
        Ok(())
    }
}

/// Connector that hands out pre-built [`FakeBulb`]s for known addresses and
/// refuses everything else.
struct FakeConnector {
    bulbs: Vec<(LightAddress, FakeBulb)>,
}

impl LightConnector for FakeConnector {
    type Handle = FakeBulb;

    async fn connect(&self, address: &LightAddress) -> Result<FakeBulb, DeviceError> {
        self.bulbs
            .iter()
            .find(|(known, _)| known == address)
            .map(|(_, bulb)| bulb.clone())
            .ok_or_else(|| DeviceError::new(address.clone(), "no route to host"))
    }
}

/// Build a fully-wired router over the given bulbs, running the real
/// startup registration path.
async fn app(bulbs: Vec<(&str, FakeBulb)>, configured: &[&str]) -> axum::Router {
    let connector = FakeConnector {
        bulbs: bulbs
            .into_iter()
            .map(|(address, bulb)| (LightAddress::new(address), bulb))
            .collect(),
    };
    let addresses: Vec<LightAddress> = configured
        .iter()
        .copied()
        .map(LightAddress::from)
        .collect();

    let registry = LightRegistry::connect(&connector, &addresses).await;
    router::build(AppState::new(LightService::new(registry)))
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app(vec![], &[])
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Startup registration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_register_only_reachable_bulbs() {
    let reachable = FakeBulb::default();
    let app = app(
        vec![("172.20.10.5", reachable)],
        &["172.20.10.5", "172.20.10.4"],
    )
    .await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/lights")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, serde_json::json!(["172.20.10.5"]));
}

// ---------------------------------------------------------------------------
// Command surface
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_turn_every_bulb_on_and_off() {
    let a = FakeBulb::default();
    let b = FakeBulb::default();
    let app = app(
        vec![("172.20.10.5", a.clone()), ("172.20.10.4", b.clone())],
        &["172.20.10.5", "172.20.10.4"],
    )
    .await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/on")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        serde_json::json!({"status": "bombillas encendidas"})
    );

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/off")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        serde_json::json!({"status": "bombillas apagadas"})
    );

    assert_eq!(a.calls(), vec![LightCommand::TurnOn, LightCommand::TurnOff]);
    assert_eq!(b.calls(), vec![LightCommand::TurnOn, LightCommand::TurnOff]);
}

#[tokio::test]
async fn should_change_brightness_on_every_registered_bulb() {
    let a = FakeBulb::default();
    let b = FakeBulb::default();
    let app = app(
        vec![("172.20.10.5", a.clone()), ("172.20.10.4", b.clone())],
        &["172.20.10.5", "172.20.10.4"],
    )
    .await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/brightness")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"brightness": 50}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        serde_json::json!({"status": "brillo cambiado a 50"})
    );
    assert_eq!(a.calls().len(), 1);
    assert_eq!(b.calls().len(), 1);
}

#[tokio::test]
async fn should_change_color_on_every_registered_bulb() {
    let a = FakeBulb::default();
    let app = app(vec![("172.20.10.5", a.clone())], &["172.20.10.5"]).await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cambiar_color")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"hue": 200, "saturation": 60}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        serde_json::json!({"status": "color cambiado a hue 200, saturación 60"})
    );
    assert_eq!(a.calls().len(), 1);
}

#[tokio::test]
async fn should_answer_every_endpoint_normally_when_no_bulb_connected() {
    let app = app(vec![], &["172.20.10.5", "172.20.10.4"]).await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/on")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        serde_json::json!({"status": "bombillas encendidas"})
    );

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/brightness")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"brightness": 75}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        serde_json::json!({"status": "brillo cambiado a 75"})
    );
}

#[tokio::test]
async fn should_reject_out_of_range_brightness() {
    let a = FakeBulb::default();
    let app = app(vec![("172.20.10.5", a.clone())], &["172.20.10.5"]).await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/brightness")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"brightness": 101}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(a.calls().is_empty());
}
