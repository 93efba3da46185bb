//! # bombilla-adapter-tapo
//!
//! Vendor adapter for TP-Link Tapo color bulbs, built on the
//! [tapo](https://docs.rs/tapo) client.
//!
//! ## Responsibilities
//! - Authenticate a shared Tapo cloud account session once
//! - Establish one [`TapoLight`] handle per configured address (L530
//!   handshake and session setup are owned by the `tapo` crate)
//! - Translate [`LightCommand`]s into the vendor calls (`on`, `off`,
//!   `set_hue_saturation`, `set_brightness`)
//!
//! ## Dependency rule
//! Implements the `bombilla-app` ports; nothing above this crate ever sees a
//! `tapo` type.

use tapo::{ApiClient, ColorLightHandler};

use bombilla_app::ports::{LightConnector, LightHandle};
use bombilla_domain::address::LightAddress;
use bombilla_domain::command::LightCommand;
use bombilla_domain::error::DeviceError;

/// Connector backed by a shared Tapo cloud account.
///
/// The account credentials are held once; each [`connect`](LightConnector::connect)
/// clones the client to run the per-device handshake.
#[derive(Clone)]
pub struct TapoConnector {
    client: ApiClient,
}

impl TapoConnector {
    /// Create a connector from the Tapo account credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            client: ApiClient::new(username, password),
        }
    }
}

impl LightConnector for TapoConnector {
    type Handle = TapoLight;

    async fn connect(&self, address: &LightAddress) -> Result<TapoLight, DeviceError> {
        tracing::debug!(address = %address, "establishing L530 session");
        let handler = self
            .client
            .clone()
            .l530(address.as_str())
            .await
            .map_err(|err| DeviceError::new(address.clone(), err))?;
        Ok(TapoLight {
            address: address.clone(),
            handler,
        })
    }
}

/// Handle bound to one connected L530 bulb.
pub struct TapoLight {
    address: LightAddress,
    handler: ColorLightHandler,
}

impl LightHandle for TapoLight {
    async fn apply(&self, command: &LightCommand) -> Result<(), DeviceError> {
        match command {
            LightCommand::TurnOn => self.handler.on().await,
            LightCommand::TurnOff => self.handler.off().await,
            LightCommand::SetColor(color) => {
                self.handler
                    .set_hue_saturation(color.hue, color.saturation)
                    .await
            }
            LightCommand::SetBrightness(brightness) => {
                self.handler.set_brightness(brightness.brightness).await
            }
        }
        .map_err(|err| DeviceError::new(self.address.clone(), err))
    }
}
