//! SMSR - supplemental MSR access mediation
//!
//! Decides whether a user-space request to read or write a model-specific
//! register may reach the privileged access primitive.
//!
//! # Architecture
//! - [`Whitelist`]: immutable per-generation table of vetted registers,
//!   built once and published through a one-time barrier
//! - [`authorize`]: default-deny decision for a single request
//! - [`MsrGate`]: caller-side wrapper enforcing decisions in front of a
//!   [`RawMsrAccess`] primitive
//!
//! # Guarantees
//! - Unlisted addresses are always denied
//! - Writes require an explicit read-write entry
//! - Lookups are O(1) and lock-free once the table is published

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod address;
pub mod arch;
pub mod config;
pub mod entry;
pub mod error;
pub mod gate;
pub mod mediator;
pub mod tables;
pub mod whitelist;

pub use address::{AddressError, RegisterAddress};
pub use arch::ArchId;
pub use config::{ArchSelection, SmsrConfig};
pub use entry::{AccessMode, WhitelistEntry};
pub use error::{BuildError, BuildResult, GateError, GateResult, HardwareError};
pub use gate::{MsrGate, RawMsrAccess};
pub use mediator::{authorize, authorize_raw, AccessDecision, AccessRequest, DenialReason};
pub use whitelist::Whitelist;

/// Process-wide active whitelist
static ACTIVE: spin::Once<Whitelist> = spin::Once::new();

/// Build and publish the whitelist for `arch`
///
/// Runs the build at most once. Readers only ever observe a fully built
/// table. Asking again for the same architecture returns the published
/// table; asking for another one fails.
pub fn init(arch: ArchId) -> BuildResult<&'static Whitelist> {
    let whitelist = ACTIVE.try_call_once(|| match Whitelist::build(arch) {
        Ok(whitelist) => {
            let name = tables::source_for(arch).map_or("custom", |source| source.name);
            log::info!(
                "SMSR: {} ({}) whitelist active, {} registers ({} writable)",
                name,
                arch,
                whitelist.len(),
                whitelist.writable().count()
            );
            Ok(whitelist)
        }
        Err(err) => {
            log::error!("SMSR: {}", err);
            Err(err)
        }
    })?;

    if whitelist.arch() != arch {
        return Err(BuildError::AlreadyInitialized {
            active: whitelist.arch(),
            requested: arch,
        });
    }
    Ok(whitelist)
}

/// Initialize from the configured [`ArchSelection`]
pub fn init_from_config() -> BuildResult<&'static Whitelist> {
    let arch = config::config().selection.resolve().map_err(|err| {
        log::error!("SMSR: {}", err);
        err
    })?;
    init(arch)
}

/// The published whitelist, if initialization succeeded
pub fn active() -> Option<&'static Whitelist> {
    ACTIVE.get()
}

/// Authorize against the published whitelist
///
/// Denies everything as unknown until [`init`] has succeeded.
pub fn authorize_active(request: AccessRequest) -> AccessDecision {
    match active() {
        Some(whitelist) => authorize(whitelist, request),
        None => AccessDecision::Denied(DenialReason::UnknownRegister),
    }
}


#[cfg(all(test, feature = "arch-062d"))]
mod tests {
    use super::*;
    use crate::test_log::{capture_logs, logged};

    // sole user of the process-wide globals in this test binary
    #[test]
    fn test_init_from_config() {
        capture_logs();
        config::configure(SmsrConfig::fixed(ArchId::SANDY_BRIDGE_EP));
        let whitelist = init_from_config().unwrap();
        assert_eq!(whitelist.arch(), ArchId::SANDY_BRIDGE_EP);
        assert!(core::ptr::eq(whitelist, active().unwrap()));

        let pmc0 = AccessRequest::write(RegisterAddress::from_const(0x0C1));
        assert!(authorize_active(pmc0).is_permitted());

        assert!(logged(
            "INFO SMSR: Sandy Bridge-EP (06_2DH) whitelist active, 49 registers (32 writable)"
        ));
    }
}
