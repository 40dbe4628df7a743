//! Caller-side gate in front of the raw MSR primitive
//!
//! The privileged `rdmsr`/`wrmsr` path (instruction, hypervisor call or
//! device file) is supplied by the embedder through [`RawMsrAccess`].
//! [`MsrGate`] authorizes every single call before reaching it, and only
//! ever hands it the address taken from the matched whitelist entry.

use crate::address::RegisterAddress;
use crate::entry::{AccessMode, WhitelistEntry};
use crate::error::{GateError, GateResult, HardwareError};
use crate::mediator::{authorize, authorize_raw, AccessDecision, AccessRequest};
use crate::whitelist::Whitelist;

/// Raw register access primitive
pub trait RawMsrAccess {
    fn read(&mut self, address: RegisterAddress) -> Result<u64, HardwareError>;
    fn write(&mut self, address: RegisterAddress, value: u64) -> Result<(), HardwareError>;
}

/// Whitelist-enforcing wrapper around a [`RawMsrAccess`]
pub struct MsrGate<'w, A> {
    whitelist: &'w Whitelist,
    raw: A,
}

impl<'w, A: RawMsrAccess> MsrGate<'w, A> {
    pub fn new(whitelist: &'w Whitelist, raw: A) -> Self {
        Self { whitelist, raw }
    }

    pub fn whitelist(&self) -> &'w Whitelist {
        self.whitelist
    }

    /// Give back the primitive
    pub fn into_inner(self) -> A {
        self.raw
    }

    pub fn read(&mut self, address: RegisterAddress) -> GateResult<u64> {
        let entry = Self::check(authorize(self.whitelist, AccessRequest::read(address)), address)?;
        self.read_entry(entry)
    }

    pub fn write(&mut self, address: RegisterAddress, value: u64) -> GateResult<()> {
        let entry = Self::check(authorize(self.whitelist, AccessRequest::write(address)), address)?;
        self.write_entry(entry, value)
    }

    /// Read with an unvalidated address from the transport layer
    pub fn read_raw(&mut self, raw: u32) -> GateResult<u64> {
        let entry = Self::check_raw(authorize_raw(self.whitelist, raw, AccessMode::ReadOnly), raw)?;
        self.read_entry(entry)
    }

    /// Write with an unvalidated address from the transport layer
    pub fn write_raw(&mut self, raw: u32, value: u64) -> GateResult<()> {
        let entry = Self::check_raw(authorize_raw(self.whitelist, raw, AccessMode::ReadWrite), raw)?;
        self.write_entry(entry, value)
    }

    fn read_entry(&mut self, entry: WhitelistEntry) -> GateResult<u64> {
        self.raw.read(entry.address()).map_err(|err| {
            log::warn!("SMSR: read {} ({}) failed: {}", entry.address(), entry.name(), err);
            GateError::Hardware(err)
        })
    }

    fn write_entry(&mut self, entry: WhitelistEntry, value: u64) -> GateResult<()> {
        self.raw.write(entry.address(), value).map_err(|err| {
            log::warn!("SMSR: write {} ({}) failed: {}", entry.address(), entry.name(), err);
            GateError::Hardware(err)
        })
    }

    fn check(decision: AccessDecision, address: RegisterAddress) -> GateResult<WhitelistEntry> {
        decision.into_result().map_err(|reason| {
            log::debug!("SMSR: {} denied: {}", address, reason);
            GateError::Denied(reason)
        })
    }

    fn check_raw(decision: AccessDecision, raw: u32) -> GateResult<WhitelistEntry> {
        decision.into_result().map_err(|reason| {
            log::debug!("SMSR: {:#x} denied: {}", raw, reason);
            GateError::Denied(reason)
        })
    }
}
