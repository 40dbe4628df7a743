//! Whitelist selection configuration
//!
//! Set once before [`crate::init_from_config`]; later calls are ignored.

use crate::arch::ArchId;
use crate::error::{BuildError, BuildResult};

/// How the active generation is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchSelection {
    /// Ask CPUID for family/model
    Detect,
    /// Use this identifier regardless of the running CPU
    Fixed(ArchId),
}

impl ArchSelection {
    pub fn resolve(&self) -> BuildResult<ArchId> {
        self.resolve_with(ArchId::detect)
    }

    /// `detect` is only consulted for [`ArchSelection::Detect`]
    fn resolve_with(&self, detect: impl FnOnce() -> Option<ArchId>) -> BuildResult<ArchId> {
        match self {
            ArchSelection::Detect => detect().ok_or(BuildError::DetectionFailed),
            ArchSelection::Fixed(arch) => Ok(*arch),
        }
    }
}

/// SMSR configuration
#[derive(Debug, Clone, Copy)]
pub struct SmsrConfig {
    pub selection: ArchSelection,
}

impl SmsrConfig {
    pub const fn default() -> Self {
        Self {
            selection: ArchSelection::Detect,
        }
    }

    pub const fn fixed(arch: ArchId) -> Self {
        Self {
            selection: ArchSelection::Fixed(arch),
        }
    }
}

static SMSR_CONFIG: spin::Once<SmsrConfig> = spin::Once::new();

pub fn configure(config: SmsrConfig) {
    SMSR_CONFIG.call_once(|| config);
}

pub fn config() -> &'static SmsrConfig {
    static DEFAULT_CONFIG: SmsrConfig = SmsrConfig::default();
    SMSR_CONFIG.get().unwrap_or(&DEFAULT_CONFIG)
}
