//! MSR addresses
//!
//! Whitelisted registers live in the low 12 bits of the MSR index space.
//! Anything wider is rejected at construction, never masked down.

use core::fmt;

/// Highest representable register address.
pub const MAX_ADDRESS: u16 = 0xFFF;

/// Number of distinct register addresses.
pub const ADDRESS_SPACE: usize = MAX_ADDRESS as usize + 1;

/// Address construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    /// Value does not fit in 12 bits
    OutOfRange(u32),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::OutOfRange(raw) => {
                write!(f, "MSR address {:#x} exceeds {:#05x}", raw, MAX_ADDRESS)
            }
        }
    }
}

/// A 12-bit MSR address (0x000..=0xFFF)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct RegisterAddress(u16);

impl RegisterAddress {
    /// Address of the "no such register" sentinel.
    pub const SENTINEL: RegisterAddress = RegisterAddress(0x000);

    pub const fn new(raw: u32) -> Result<Self, AddressError> {
        if raw > MAX_ADDRESS as u32 {
            Err(AddressError::OutOfRange(raw))
        } else {
            Ok(RegisterAddress(raw as u16))
        }
    }

    /// Const constructor for table data.
    ///
    /// Panics at compile time when used in a const context with a value
    /// wider than 12 bits.
    pub const fn from_const(raw: u16) -> Self {
        assert!(raw <= MAX_ADDRESS, "MSR address wider than 12 bits");
        RegisterAddress(raw)
    }

    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Index usable with `rdmsr`/`wrmsr`.
    pub const fn as_u32(&self) -> u32 {
        self.0 as u32
    }

    pub const fn is_sentinel(&self) -> bool {
        self.0 == Self::SENTINEL.0
    }

    pub(crate) const fn slot(&self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u32> for RegisterAddress {
    type Error = AddressError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        RegisterAddress::new(raw)
    }
}

impl From<RegisterAddress> for u32 {
    fn from(addr: RegisterAddress) -> Self {
        addr.as_u32()
    }
}

impl fmt::Display for RegisterAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds() {
        assert_eq!(RegisterAddress::new(0).unwrap().as_u16(), 0);
        assert_eq!(RegisterAddress::new(0xFFF).unwrap().as_u16(), 0xFFF);
        assert_eq!(
            RegisterAddress::new(0x1000),
            Err(AddressError::OutOfRange(0x1000))
        );
        assert_eq!(
            RegisterAddress::try_from(0xC000_0080),
            Err(AddressError::OutOfRange(0xC000_0080))
        );
    }

    #[test]
    fn test_sentinel() {
        assert!(RegisterAddress::SENTINEL.is_sentinel());
        assert!(!RegisterAddress::from_const(0x0C1).is_sentinel());
    }

    #[test]
    fn test_display() {
        let addr = RegisterAddress::from_const(0x0C1);
        assert_eq!(format!("{}", addr), "0x0C1");
        assert_eq!(u32::from(addr), 0xC1);
    }
}
