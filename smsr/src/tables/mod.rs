//! Compiled-in whitelist tables
//!
//! Each supported generation contributes one immutable entry slice. Which
//! generations are compiled in is decided by cargo features.

use crate::arch::ArchId;
use crate::entry::WhitelistEntry;

#[cfg(feature = "arch-062d")]
pub mod sandy_bridge_ep;

/// A named source table for one generation
#[derive(Debug, Clone, Copy)]
pub struct TableSource {
    pub arch: ArchId,
    pub name: &'static str,
    pub entries: &'static [WhitelistEntry],
}

/// Every table compiled into this build
pub static TABLES: &[TableSource] = &[
    #[cfg(feature = "arch-062d")]
    TableSource {
        arch: ArchId::SANDY_BRIDGE_EP,
        name: "Sandy Bridge-EP",
        entries: &sandy_bridge_ep::ENTRIES,
    },
];

/// Source table for `arch`, if one is compiled in
pub fn source_for(arch: ArchId) -> Option<&'static TableSource> {
    TABLES.iter().find(|t| t.arch == arch)
}

/// Architectures with a compiled-in table
pub fn supported() -> impl Iterator<Item = ArchId> {
    TABLES.iter().map(|t| t.arch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_unique_arches() {
        for (i, a) in TABLES.iter().enumerate() {
            for b in &TABLES[i + 1..] {
                assert_ne!(a.arch, b.arch, "{} registered twice", a.arch);
            }
        }
    }

    #[cfg(feature = "arch-062d")]
    #[test]
    fn test_sandy_bridge_registered() {
        let source = source_for(ArchId::SANDY_BRIDGE_EP).unwrap();
        assert_eq!(source.entries.len(), 49);
        assert_eq!(source.name, "Sandy Bridge-EP");
        assert!(supported().any(|a| a == ArchId::SANDY_BRIDGE_EP));
    }

    #[test]
    fn test_unknown_arch() {
        assert!(source_for(ArchId::new(0x17, 0x31)).is_none());
    }
}
