//! Commands a bulb accepts, with the parameter ranges the device enforces.
//!
//! The accepted ranges are the L530 hardware ranges: hue `1..=360`,
//! saturation and brightness `1..=100`. Values outside them are rejected
//! here instead of being silently forwarded to the vendor client.

use crate::error::ValidationError;

/// Hue/saturation change for every registered bulb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCommand {
    /// Hue in degrees, `1..=360`.
    pub hue: u16,
    /// Saturation percentage, `1..=100`.
    pub saturation: u8,
}

impl ColorCommand {
    /// Check both parameters against the accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when hue or saturation is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=360).contains(&self.hue) {
            return Err(ValidationError::HueOutOfRange(self.hue));
        }
        if !(1..=100).contains(&self.saturation) {
            return Err(ValidationError::SaturationOutOfRange(self.saturation));
        }
        Ok(())
    }
}

/// Brightness change for every registered bulb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessCommand {
    /// Brightness percentage, `1..=100`.
    pub brightness: u8,
}

impl BrightnessCommand {
    /// Check the brightness level against the accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BrightnessOutOfRange`] when out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=100).contains(&self.brightness) {
            return Err(ValidationError::BrightnessOutOfRange(self.brightness));
        }
        Ok(())
    }
}

/// One operation applied uniformly to every registered bulb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCommand {
    /// Turn the bulb on.
    TurnOn,
    /// Turn the bulb off.
    TurnOff,
    /// Set hue and saturation.
    SetColor(ColorCommand),
    /// Set the brightness level.
    SetBrightness(BrightnessCommand),
}

impl LightCommand {
    /// Short name used in log fields.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::TurnOn => "turn_on",
            Self::TurnOff => "turn_off",
            Self::SetColor(_) => "set_color",
            Self::SetBrightness(_) => "set_brightness",
        }
    }

    /// Validate the command parameters, if it carries any.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a parameter is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::TurnOn | Self::TurnOff => Ok(()),
            Self::SetColor(color) => color.validate(),
            Self::SetBrightness(brightness) => brightness.validate(),
        }
    }
}
