//! Light service — applies one command uniformly to all registered bulbs.

use futures::future;

use bombilla_domain::command::LightCommand;
use bombilla_domain::error::{BombillaError, DeviceError};

use crate::ports::LightHandle;
use crate::registry::LightRegistry;

/// Result of one broadcast over the registry.
///
/// A broadcast always runs to completion: every registered bulb is attempted
/// and per-device failures are collected instead of aborting the fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastOutcome {
    /// How many bulbs the command was sent to.
    pub attempted: usize,
    /// The bulbs that did not accept the command.
    pub failures: Vec<DeviceError>,
}

impl BroadcastOutcome {
    /// Whether every attempted bulb accepted the command.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// How many bulbs accepted the command.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.attempted - self.failures.len()
    }
}

/// Application service broadcasting commands over the read-only registry.
pub struct LightService<H> {
    registry: LightRegistry<H>,
}

impl<H: LightHandle> LightService<H> {
    /// Create a new service over an initialised registry.
    pub fn new(registry: LightRegistry<H>) -> Self {
        Self { registry }
    }

    /// The registry this service broadcasts over.
    #[must_use]
    pub fn registry(&self) -> &LightRegistry<H> {
        &self.registry
    }

    /// Validate the command, then fan it out to every registered bulb.
    ///
    /// The per-bulb calls run concurrently and may complete in any order;
    /// the method returns once all of them have settled. An empty registry
    /// yields a complete outcome with zero attempts.
    ///
    /// # Errors
    ///
    /// Returns [`BombillaError::Validation`] when a command parameter is out
    /// of range. Per-device failures do not error — they are collected in
    /// the [`BroadcastOutcome`].
    #[tracing::instrument(skip(self, command), fields(command = command.name()))]
    pub async fn broadcast(
        &self,
        command: &LightCommand,
    ) -> Result<BroadcastOutcome, BombillaError> {
        command.validate()?;

        let calls = self.registry.iter().map(|(address, handle)| async move {
            (address, handle.apply(command).await)
        });
        let settled = future::join_all(calls).await;

        let attempted = settled.len();
        let mut failures = Vec::new();
        for (address, result) in settled {
            if let Err(err) = result {
                tracing::warn!(address = %address, error = %err, "bulb rejected command");
                // tag the failure with the address the bulb is registered
                // under, not whatever the handle reports
                failures.push(DeviceError {
                    address: address.clone(),
                    reason: err.reason,
                });
            }
        }

        tracing::debug!(attempted, failed = failures.len(), "broadcast settled");
        Ok(BroadcastOutcome {
            attempted,
            failures,
        })
    }
}
