//! Access mediator
//!
//! Turns an access request into a decision against the active whitelist.
//! Default-deny: an address that is not listed is never accessible, and a
//! write needs an explicit read-write entry.
//!
//! Every call re-authorizes from scratch. Nothing is cached between
//! requests and the whitelist is never touched.

use core::fmt;

use crate::address::RegisterAddress;
use crate::entry::{AccessMode, WhitelistEntry};
use crate::whitelist::Whitelist;

/// One requested register access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRequest {
    pub address: RegisterAddress,
    /// `ReadWrite` asks for a write
    pub mode: AccessMode,
}

impl AccessRequest {
    pub const fn new(address: RegisterAddress, mode: AccessMode) -> Self {
        Self { address, mode }
    }

    pub const fn read(address: RegisterAddress) -> Self {
        Self::new(address, AccessMode::ReadOnly)
    }

    pub const fn write(address: RegisterAddress) -> Self {
        Self::new(address, AccessMode::ReadWrite)
    }
}

/// Why a request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenialReason {
    /// Address not listed (or the sentinel)
    UnknownRegister,
    /// Write requested on a read-only entry
    InsufficientPermission,
}

impl DenialReason {
    /// Errno for the transport layer
    pub fn errno(&self) -> i32 {
        match self {
            DenialReason::UnknownRegister => 13,       // EACCES
            DenialReason::InsufficientPermission => 1, // EPERM
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::UnknownRegister => write!(f, "register not whitelisted"),
            DenialReason::InsufficientPermission => write!(f, "register is read-only"),
        }
    }
}

/// Outcome of [`authorize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Carries the resolved entry; use its address for the raw access
    Permitted(WhitelistEntry),
    Denied(DenialReason),
}

impl AccessDecision {
    pub fn is_permitted(&self) -> bool {
        matches!(self, AccessDecision::Permitted(_))
    }

    pub fn entry(&self) -> Option<&WhitelistEntry> {
        match self {
            AccessDecision::Permitted(entry) => Some(entry),
            AccessDecision::Denied(_) => None,
        }
    }

    pub fn denial(&self) -> Option<DenialReason> {
        match self {
            AccessDecision::Permitted(_) => None,
            AccessDecision::Denied(reason) => Some(*reason),
        }
    }

    /// `Result` view for `?` propagation
    pub fn into_result(self) -> Result<WhitelistEntry, DenialReason> {
        match self {
            AccessDecision::Permitted(entry) => Ok(entry),
            AccessDecision::Denied(reason) => Err(reason),
        }
    }
}

/// Decide whether `request` may reach the raw access primitive
///
/// O(1), lock-free, no side effects.
pub fn authorize(whitelist: &Whitelist, request: AccessRequest) -> AccessDecision {
    if request.address.is_sentinel() {
        return AccessDecision::Denied(DenialReason::UnknownRegister);
    }

    let entry = match whitelist.lookup(request.address) {
        Some(entry) => entry,
        None => return AccessDecision::Denied(DenialReason::UnknownRegister),
    };

    if entry.mode().permits(request.mode) {
        AccessDecision::Permitted(entry)
    } else {
        AccessDecision::Denied(DenialReason::InsufficientPermission)
    }
}

/// Authorize an unvalidated address straight from the transport layer
///
/// Values wider than 12 bits are denied as unknown, never masked.
pub fn authorize_raw(whitelist: &Whitelist, raw: u32, mode: AccessMode) -> AccessDecision {
    match RegisterAddress::new(raw) {
        Ok(address) => authorize(whitelist, AccessRequest::new(address, mode)),
        Err(_) => AccessDecision::Denied(DenialReason::UnknownRegister),
    }
}
