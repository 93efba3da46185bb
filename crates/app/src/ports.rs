//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the vendor
//! client. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

use std::future::Future;

use bombilla_domain::address::LightAddress;
use bombilla_domain::command::LightCommand;
use bombilla_domain::error::DeviceError;

/// Capability object bound to one connected bulb.
///
/// Implementations live in adapter crates (e.g. `adapter_tapo`) and own the
/// vendor session for their bulb. Calls may suspend on network IO; the
/// registry never invokes two commands on the same handle at once from a
/// single broadcast.
pub trait LightHandle: Send + Sync {
    /// Apply one command to this bulb.
    fn apply(
        &self,
        command: &LightCommand,
    ) -> impl Future<Output = Result<(), DeviceError>> + Send;
}

/// Factory that establishes a [`LightHandle`] for a configured address.
///
/// Called once per address during startup registration. A failed connection
/// is reported per-address and never aborts the other attempts.
pub trait LightConnector: Send + Sync {
    /// Concrete handle type produced by this connector.
    type Handle: LightHandle;

    /// Attempt to connect to the bulb at `address`.
    fn connect(
        &self,
        address: &LightAddress,
    ) -> impl Future<Output = Result<Self::Handle, DeviceError>> + Send;
}
