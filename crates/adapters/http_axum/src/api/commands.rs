//! JSON handlers for the four broadcast command endpoints.
//!
//! Every endpoint applies one command to all registered bulbs and replies
//! with a `status` confirmation. Bulbs that rejected the command are listed
//! in a `failures` array (omitted when everything succeeded); a device
//! failure never turns into an HTTP-level error.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use bombilla_app::ports::LightHandle;
use bombilla_app::service::BroadcastOutcome;
use bombilla_domain::command::{BrightnessCommand, ColorCommand, LightCommand};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /cambiar_color`.
#[derive(Deserialize)]
pub struct ColorRequest {
    pub hue: u16,
    pub saturation: u8,
}

/// Request body for `POST /brightness`.
#[derive(Deserialize)]
pub struct BrightnessRequest {
    pub brightness: u8,
}

/// Status payload returned by every command endpoint.
#[derive(Serialize)]
pub struct CommandResponse {
    /// Confirmation text.
    pub status: String,
    /// Bulbs that did not accept the command; omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailureDetail>,
}

/// One bulb that did not accept the command.
#[derive(Serialize)]
pub struct FailureDetail {
    pub address: String,
    pub error: String,
}

impl CommandResponse {
    fn from_outcome(status: impl Into<String>, outcome: BroadcastOutcome) -> Self {
        Self {
            status: status.into(),
            failures: outcome
                .failures
                .into_iter()
                .map(|err| FailureDetail {
                    address: err.address.to_string(),
                    error: err.reason,
                })
                .collect(),
        }
    }
}

/// `POST /on`
pub async fn turn_on<H>(
    State(state): State<AppState<H>>,
) -> Result<Json<CommandResponse>, ApiError>
where
    H: LightHandle + Send + Sync + 'static,
{
    let outcome = state.light_service.broadcast(&LightCommand::TurnOn).await?;
    Ok(Json(CommandResponse::from_outcome(
        "bombillas encendidas",
        outcome,
    )))
}

/// `POST /off`
pub async fn turn_off<H>(
    State(state): State<AppState<H>>,
) -> Result<Json<CommandResponse>, ApiError>
where
    H: LightHandle + Send + Sync + 'static,
{
    let outcome = state
        .light_service
        .broadcast(&LightCommand::TurnOff)
        .await?;
    Ok(Json(CommandResponse::from_outcome(
        "bombillas apagadas",
        outcome,
    )))
}

/// `POST /cambiar_color`
pub async fn set_color<H>(
    State(state): State<AppState<H>>,
    Json(req): Json<ColorRequest>,
) -> Result<Json<CommandResponse>, ApiError>
where
    H: LightHandle + Send + Sync + 'static,
{
    let command = LightCommand::SetColor(ColorCommand {
        hue: req.hue,
        saturation: req.saturation,
    });
    let outcome = state.light_service.broadcast(&command).await?;
    Ok(Json(CommandResponse::from_outcome(
        format!(
            "color cambiado a hue {}, saturación {}",
            req.hue, req.saturation
        ),
        outcome,
    )))
}

/// `POST /brightness`
pub async fn set_brightness<H>(
    State(state): State<AppState<H>>,
    Json(req): Json<BrightnessRequest>,
) -> Result<Json<CommandResponse>, ApiError>
where
    H: LightHandle + Send + Sync + 'static,
{
    let command = LightCommand::SetBrightness(BrightnessCommand {
        brightness: req.brightness,
    });
    let outcome = state.light_service.broadcast(&command).await?;
    Ok(Json(CommandResponse::from_outcome(
        format!("brillo cambiado a {}", req.brightness),
        outcome,
    )))
}
