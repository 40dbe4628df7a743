//! Architecture identifiers
//!
//! A whitelist is only meaningful for the processor generation it was
//! vetted against. Generations are keyed by CPUID display family/model.

use core::fmt;

/// CPU family/model pair selecting one compiled-in table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArchId {
    pub family: u8,
    pub model: u8,
}

impl ArchId {
    /// Sandy Bridge-EP (TLCC2 machines)
    pub const SANDY_BRIDGE_EP: ArchId = ArchId::new(0x06, 0x2D);

    pub const fn new(family: u8, model: u8) -> Self {
        Self { family, model }
    }

    /// Identify the processor we are running on.
    ///
    /// Returns `None` when CPUID leaf 1 is unavailable or on non-x86 targets.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    pub fn detect() -> Option<Self> {
        let cpuid = raw_cpuid::CpuId::new();
        let info = cpuid.get_feature_info()?;
        let arch = Self::new(info.family_id(), info.model_id());
        log::debug!("SMSR: detected CPU {}", arch);
        Some(arch)
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    pub fn detect() -> Option<Self> {
        None
    }
}

impl fmt::Display for ArchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // same notation as the SDM tables: 06_2DH
        write!(f, "{:02X}_{:02X}H", self.family, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ArchId::SANDY_BRIDGE_EP), "06_2DH");
        assert_eq!(format!("{}", ArchId::new(0x17, 0x31)), "17_31H");
    }

    #[test]
    fn test_detect_is_stable() {
        assert_eq!(ArchId::detect(), ArchId::detect());
    }
}
