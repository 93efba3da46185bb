//! Common error types used across the workspace.
//!
//! Each layer works with typed errors and converts via `#[from]`; no stringly
//! variants at the domain boundary. Vendor client failures are carried as a
//! [`DeviceError`] tagged with the address of the bulb that produced them.

use crate::address::LightAddress;

/// Base error enum for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum BombillaError {
    /// A command parameter was outside the range the bulbs accept.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The vendor client reported a failure for one bulb.
    #[error(transparent)]
    Device(#[from] DeviceError),
}

/// Command parameter outside the device's accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Hue must be within `1..=360`.
    #[error("hue {0} is out of range (expected 1..=360)")]
    HueOutOfRange(u16),

    /// Saturation must be within `1..=100`.
    #[error("saturation {0} is out of range (expected 1..=100)")]
    SaturationOutOfRange(u8),

    /// Brightness must be within `1..=100`.
    #[error("brightness {0} is out of range (expected 1..=100)")]
    BrightnessOutOfRange(u8),
}

/// Failure reported by the vendor client for a single bulb.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("device {address}: {reason}")]
pub struct DeviceError {
    /// Address of the bulb that failed.
    pub address: LightAddress,
    /// Human-readable failure description from the vendor client.
    pub reason: String,
}

impl DeviceError {
    /// Build a device error from any displayable vendor failure.
    pub fn new(address: LightAddress, reason: impl ToString) -> Self {
        Self {
            address,
            reason: reason.to_string(),
        }
    }
}
