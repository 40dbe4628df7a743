//! Error types
//!
//! Build errors are startup-fatal. Per-request denials are not errors at
//! all: they travel as data inside [`crate::AccessDecision`].

use core::fmt;

use crate::address::RegisterAddress;
use crate::arch::ArchId;
use crate::mediator::DenialReason;

/// Result of building or publishing a whitelist
pub type BuildResult<T> = core::result::Result<T, BuildError>;

/// Whitelist construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No table compiled in for this architecture
    UnsupportedArchitecture(ArchId),
    /// Two entries share one address
    MalformedWhitelist {
        address: RegisterAddress,
        first: &'static str,
        second: &'static str,
    },
    /// Table lists the sentinel address as a real register
    SentinelEntry { name: &'static str },
    /// CPUID detection was requested but gave no answer
    DetectionFailed,
    /// A different generation's table is already published
    AlreadyInitialized { active: ArchId, requested: ArchId },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::UnsupportedArchitecture(arch) => {
                write!(f, "no MSR whitelist for architecture {}", arch)
            }
            BuildError::MalformedWhitelist {
                address,
                first,
                second,
            } => write!(
                f,
                "malformed whitelist: {} and {} both claim address {}",
                first, second, address
            ),
            BuildError::SentinelEntry { name } => {
                write!(f, "malformed whitelist: {} uses the sentinel address", name)
            }
            BuildError::DetectionFailed => write!(f, "unable to identify CPU family/model"),
            BuildError::AlreadyInitialized { active, requested } => write!(
                f,
                "whitelist for {} already active, cannot switch to {}",
                active, requested
            ),
        }
    }
}

/// Caller-side hardware fault reported by the raw access primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareError {
    /// The instruction faulted (#GP)
    GeneralProtection,
    /// Target CPU is offline or unreachable
    Unavailable,
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareError::GeneralProtection => write!(f, "general protection fault"),
            HardwareError::Unavailable => write!(f, "CPU unavailable"),
        }
    }
}

/// Failures seen through [`crate::gate::MsrGate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    Denied(DenialReason),
    Hardware(HardwareError),
}

pub type GateResult<T> = core::result::Result<T, GateError>;

impl GateError {
    /// Errno for the transport layer
    pub fn errno(&self) -> i32 {
        match self {
            GateError::Denied(reason) => reason.errno(),
            GateError::Hardware(HardwareError::GeneralProtection) => 5, // EIO
            GateError::Hardware(HardwareError::Unavailable) => 6,       // ENXIO
        }
    }
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::Denied(reason) => write!(f, "access denied: {}", reason),
            GateError::Hardware(err) => write!(f, "hardware error: {}", err),
        }
    }
}

impl From<DenialReason> for GateError {
    fn from(reason: DenialReason) -> Self {
        GateError::Denied(reason)
    }
}

impl From<HardwareError> for GateError {
    fn from(err: HardwareError) -> Self {
        GateError::Hardware(err)
    }
}
