//! Light address — the network identifier a bulb is registered under.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Network address (an IP on the local network) of one bulb.
///
/// Addresses come from configuration, act as the registry key, and never
/// change at runtime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LightAddress(String);

impl LightAddress {
    /// Wrap an address string.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LightAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for LightAddress {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for LightAddress {
    fn from(address: String) -> Self {
        Self(address)
    }
}
