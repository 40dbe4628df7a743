//! Whitelist entries
//!
//! One entry per vetted register: a diagnostic name, the address and the
//! widest access user space may be granted.

use core::fmt;

use crate::address::{AddressError, RegisterAddress, MAX_ADDRESS};

/// Bit carrying the permission in the packed legacy encoding.
pub const PACKED_PERM_OFFSET: u32 = 15;

const PACKED_RW: u32 = 1 << PACKED_PERM_OFFSET;
const PACKED_VALID_BITS: u32 = MAX_ADDRESS as u32 | PACKED_RW;

/// Access mode
///
/// For an entry this is the widest access allowed. For a request it is the
/// direction asked for: `ReadWrite` means "write".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    ReadOnly,
    ReadWrite,
}

impl AccessMode {
    pub const fn is_write(&self) -> bool {
        matches!(self, AccessMode::ReadWrite)
    }

    /// Whether an entry with this mode covers a request for `requested`
    pub const fn permits(&self, requested: AccessMode) -> bool {
        match requested {
            AccessMode::ReadOnly => true,
            AccessMode::ReadWrite => self.is_write(),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            AccessMode::ReadOnly => "ro",
            AccessMode::ReadWrite => "rw",
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Packed-encoding decode errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackedError {
    /// Bits outside the address field and the permission bit are set
    ReservedBits(u32),
    Address(AddressError),
}

impl fmt::Display for PackedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackedError::ReservedBits(raw) => {
                write!(f, "packed entry {:#x} has reserved bits set", raw)
            }
            PackedError::Address(err) => write!(f, "packed entry: {}", err),
        }
    }
}

/// A single whitelisted register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitelistEntry {
    name: &'static str,
    address: RegisterAddress,
    mode: AccessMode,
}

impl WhitelistEntry {
    /// Safe default returned for unlisted addresses. Never a match target.
    pub const SENTINEL: WhitelistEntry = WhitelistEntry {
        name: "NO_SUCH_SMSR",
        address: RegisterAddress::SENTINEL,
        mode: AccessMode::ReadOnly,
    };

    pub const fn new(name: &'static str, address: RegisterAddress, mode: AccessMode) -> Self {
        Self {
            name,
            address,
            mode,
        }
    }

    pub const fn ro(name: &'static str, address: u16) -> Self {
        Self::new(name, RegisterAddress::from_const(address), AccessMode::ReadOnly)
    }

    pub const fn rw(name: &'static str, address: u16) -> Self {
        Self::new(name, RegisterAddress::from_const(address), AccessMode::ReadWrite)
    }

    /// Decode the legacy packed layout: address in bits 0-11, permission in
    /// bit 15 (0 = ro, 1 = rw). Every other bit must be clear.
    pub fn from_packed(name: &'static str, packed: u32) -> Result<Self, PackedError> {
        if packed & !PACKED_VALID_BITS != 0 {
            return Err(PackedError::ReservedBits(packed));
        }
        let address =
            RegisterAddress::new(packed & MAX_ADDRESS as u32).map_err(PackedError::Address)?;
        let mode = if packed & PACKED_RW != 0 {
            AccessMode::ReadWrite
        } else {
            AccessMode::ReadOnly
        };
        Ok(Self::new(name, address, mode))
    }

    /// Inverse of [`WhitelistEntry::from_packed`].
    pub const fn to_packed(&self) -> u32 {
        let perm = if self.mode.is_write() { PACKED_RW } else { 0 };
        self.address.as_u32() | perm
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn address(&self) -> RegisterAddress {
        self.address
    }

    pub const fn mode(&self) -> AccessMode {
        self.mode
    }

    pub const fn is_sentinel(&self) -> bool {
        self.address.is_sentinel()
    }
}

impl fmt::Display for WhitelistEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<28} {} {}", self.name, self.address, self.mode)
    }
}
