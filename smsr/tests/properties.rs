//! Property tests over the whole 12-bit address space

use proptest::prelude::*;
use static_assertions::{assert_impl_all, const_assert_eq};

use smsr::address::ADDRESS_SPACE;
use smsr::{
    authorize, authorize_raw, AccessDecision, AccessMode, AccessRequest, ArchId, BuildError,
    DenialReason, RegisterAddress, Whitelist, WhitelistEntry,
};

assert_impl_all!(Whitelist: Send, Sync, Clone);
assert_impl_all!(AccessDecision: Send, Sync, Copy);
const_assert_eq!(ADDRESS_SPACE, 4096);
const_assert_eq!(core::mem::size_of::<RegisterAddress>(), 2);

const TEST_ARCH: ArchId = ArchId::new(0x06, 0xFF);

fn any_mode() -> impl Strategy<Value = AccessMode> {
    prop_oneof![Just(AccessMode::ReadOnly), Just(AccessMode::ReadWrite)]
}

/// Random table with unique, non-sentinel addresses
fn any_table() -> impl Strategy<Value = Vec<WhitelistEntry>> {
    prop::collection::btree_map(1u16..=0xFFF, any::<bool>(), 0..64).prop_map(|map| {
        map.into_iter()
            .map(|(raw, rw)| {
                let address = RegisterAddress::from_const(raw);
                let mode = if rw { AccessMode::ReadWrite } else { AccessMode::ReadOnly };
                WhitelistEntry::new("GENERATED", address, mode)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn decision_matches_table(table in any_table(), raw in 0u16..=0xFFF, mode in any_mode()) {
        let wl = Whitelist::from_entries(TEST_ARCH, &table).unwrap();
        let address = RegisterAddress::from_const(raw);
        let decision = authorize(&wl, AccessRequest::new(address, mode));

        match table.iter().find(|e| e.address() == address) {
            None => prop_assert_eq!(decision, AccessDecision::Denied(DenialReason::UnknownRegister)),
            Some(entry) if entry.mode() == AccessMode::ReadOnly && mode == AccessMode::ReadWrite => {
                prop_assert_eq!(decision, AccessDecision::Denied(DenialReason::InsufficientPermission))
            }
            Some(entry) => prop_assert_eq!(decision, AccessDecision::Permitted(*entry)),
        }
    }

    #[test]
    fn sentinel_never_permitted(table in any_table(), mode in any_mode()) {
        let wl = Whitelist::from_entries(TEST_ARCH, &table).unwrap();
        let decision = authorize(&wl, AccessRequest::new(RegisterAddress::SENTINEL, mode));
        prop_assert_eq!(decision, AccessDecision::Denied(DenialReason::UnknownRegister));
    }

    #[test]
    fn wide_addresses_denied(raw in 0x1000u32.., mode in any_mode()) {
        let wl = Whitelist::from_entries(TEST_ARCH, &[WhitelistEntry::rw("X", 0x0C1)]).unwrap();
        prop_assert_eq!(
            authorize_raw(&wl, raw, mode),
            AccessDecision::Denied(DenialReason::UnknownRegister)
        );
    }

    #[test]
    fn duplicate_never_builds(table in any_table(), pick in any::<prop::sample::Index>(), rw in any::<bool>()) {
        prop_assume!(!table.is_empty());
        let victim = table[pick.index(table.len())];
        let mode = if rw { AccessMode::ReadWrite } else { AccessMode::ReadOnly };

        let mut broken = table.clone();
        broken.push(WhitelistEntry::new("DUPLICATE", victim.address(), mode));

        let is_malformed = matches!(
            Whitelist::from_entries(TEST_ARCH, &broken),
            Err(BuildError::MalformedWhitelist { address, .. }) if address == victim.address()
        );
        prop_assert!(is_malformed);
    }

    #[test]
    fn lookup_hits_every_listed_address(table in any_table()) {
        let wl = Whitelist::from_entries(TEST_ARCH, &table).unwrap();
        prop_assert_eq!(wl.len(), table.len());
        for entry in &table {
            prop_assert_eq!(wl.lookup(entry.address()), Some(*entry));
        }
    }
}
