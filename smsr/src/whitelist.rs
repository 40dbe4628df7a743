//! Whitelist table
//!
//! Immutable, generation-specific mapping from register address to the
//! widest permitted access.
//!
//! # Lookup
//! Addresses are 12 bits wide, so a dense slot array indexed by address
//! resolves every lookup in O(1) without hashing. Entries keep their source
//! order for listing and diagnostics.
//!
//! # Validation
//! Construction fails on duplicate addresses and on tables that list the
//! sentinel address. A broken table never becomes usable.

use alloc::boxed::Box;
use alloc::vec;
use core::fmt;

use crate::address::{RegisterAddress, ADDRESS_SPACE};
use crate::arch::ArchId;
use crate::entry::WhitelistEntry;
use crate::error::{BuildError, BuildResult};
use crate::tables;

/// Marks an address with no entry.
const NO_SLOT: u16 = u16::MAX;

/// The active set of permitted registers for one generation
#[derive(Clone)]
pub struct Whitelist {
    arch: ArchId,
    entries: Box<[WhitelistEntry]>,
    /// address -> position in `entries`
    slots: Box<[u16]>,
}

impl Whitelist {
    /// Build the compiled-in table for `arch`
    pub fn build(arch: ArchId) -> BuildResult<Self> {
        let source = tables::source_for(arch).ok_or(BuildError::UnsupportedArchitecture(arch))?;
        Self::from_entries(arch, source.entries)
    }

    /// Build from an explicit entry list, validating it
    pub fn from_entries(arch: ArchId, entries: &[WhitelistEntry]) -> BuildResult<Self> {
        let mut slots = vec![NO_SLOT; ADDRESS_SPACE].into_boxed_slice();

        for (i, entry) in entries.iter().enumerate() {
            if entry.is_sentinel() {
                return Err(BuildError::SentinelEntry { name: entry.name() });
            }

            let slot = &mut slots[entry.address().slot()];
            if *slot != NO_SLOT {
                return Err(BuildError::MalformedWhitelist {
                    address: entry.address(),
                    first: entries[*slot as usize].name(),
                    second: entry.name(),
                });
            }
            // at most ADDRESS_SPACE - 1 distinct non-sentinel addresses
            *slot = i as u16;
        }

        Ok(Self {
            arch,
            entries: entries.into(),
            slots,
        })
    }

    pub fn arch(&self) -> ArchId {
        self.arch
    }

    /// Entry listed at `address`. The sentinel address never matches.
    #[inline]
    pub fn lookup(&self, address: RegisterAddress) -> Option<WhitelistEntry> {
        match self.slots[address.slot()] {
            NO_SLOT => None,
            i => Some(self.entries[i as usize]),
        }
    }

    /// Like [`Whitelist::lookup`], falling back to the sentinel entry.
    pub fn lookup_or_sentinel(&self, address: RegisterAddress) -> WhitelistEntry {
        self.lookup(address).unwrap_or(WhitelistEntry::SENTINEL)
    }

    pub fn contains(&self, address: RegisterAddress) -> bool {
        self.slots[address.slot()] != NO_SLOT
    }

    /// Diagnostic lookup by symbolic name
    pub fn by_name(&self, name: &str) -> Option<WhitelistEntry> {
        self.entries.iter().find(|e| e.name() == name).copied()
    }

    /// Entries in source order
    pub fn entries(&self) -> &[WhitelistEntry] {
        &self.entries
    }

    /// Entries user space may write
    pub fn writable(&self) -> impl Iterator<Item = &WhitelistEntry> + '_ {
        self.entries.iter().filter(|e| e.mode().is_write())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Whitelist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Whitelist")
            .field("arch", &self.arch)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
