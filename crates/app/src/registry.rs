//! Light registry — one-time, best-effort registration of configured bulbs.

use std::collections::BTreeMap;

use bombilla_domain::address::LightAddress;

use crate::ports::{LightConnector, LightHandle};

/// Read-only-after-init mapping from bulb address to connected handle.
///
/// Populated exactly once at startup by [`LightRegistry::connect`] and never
/// mutated afterwards: no locking discipline is needed, concurrent readers
/// are safe by construction.
pub struct LightRegistry<H> {
    lights: BTreeMap<LightAddress, H>,
}

impl<H: LightHandle> LightRegistry<H> {
    /// Connect every configured address, skipping the ones that fail.
    ///
    /// Addresses are attempted in order. A failed connection is logged and
    /// the address is left out of the registry; it never aborts the
    /// remaining attempts. An empty result is valid — the server still
    /// starts and every broadcast becomes a no-op.
    pub async fn connect<C>(connector: &C, addresses: &[LightAddress]) -> Self
    where
        C: LightConnector<Handle = H>,
    {
        let mut lights = BTreeMap::new();
        for address in addresses {
            match connector.connect(address).await {
                Ok(handle) => {
                    tracing::info!(address = %address, "connected to bulb");
                    lights.insert(address.clone(), handle);
                }
                Err(err) => {
                    tracing::warn!(address = %address, error = %err, "could not connect to bulb, skipping");
                }
            }
        }
        Self { lights }
    }
}

impl<H> LightRegistry<H> {
    /// Number of registered bulbs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether no bulb could be registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Whether `address` is registered.
    #[must_use]
    pub fn contains(&self, address: &LightAddress) -> bool {
        self.lights.contains_key(address)
    }

    /// The registered addresses, in order.
    #[must_use]
    pub fn addresses(&self) -> Vec<LightAddress> {
        self.lights.keys().cloned().collect()
    }

    /// Iterate over `(address, handle)` pairs, in address order.
    pub fn iter(&self) -> impl Iterator<Item = (&LightAddress, &H)> {
        self.lights.iter()
    }
}

impl<H> FromIterator<(LightAddress, H)> for LightRegistry<H> {
    fn from_iter<I: IntoIterator<Item = (LightAddress, H)>>(iter: I) -> Self {
        Self {
            lights: iter.into_iter().collect(),
        }
    }
}
