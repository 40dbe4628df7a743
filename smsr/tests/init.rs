//! Process-wide initialization and concurrent readers
//!
//! Everything touching the global table lives in one test: the table can
//! only be published once per process.

#![cfg(feature = "arch-062d")]

use std::thread;

use smsr::{
    AccessDecision, AccessRequest, ArchId, BuildError, DenialReason, RegisterAddress,
};

#[test]
fn publish_once_then_share() {
    let pmc0 = AccessRequest::write(RegisterAddress::from_const(0x0C1));

    // nothing published yet: default deny
    assert!(smsr::active().is_none());
    assert_eq!(
        smsr::authorize_active(pmc0),
        AccessDecision::Denied(DenialReason::UnknownRegister)
    );

    // unsupported generation leaves nothing behind
    let unknown = ArchId::new(0x06, 0x3F);
    assert_eq!(
        smsr::init(unknown).unwrap_err(),
        BuildError::UnsupportedArchitecture(unknown)
    );
    assert!(smsr::active().is_none());

    let wl = smsr::init(ArchId::SANDY_BRIDGE_EP).unwrap();
    assert_eq!(wl.arch(), ArchId::SANDY_BRIDGE_EP);
    assert!(std::ptr::eq(wl, smsr::active().unwrap()));

    // same generation again: same table
    assert!(std::ptr::eq(wl, smsr::init(ArchId::SANDY_BRIDGE_EP).unwrap()));
    // no swapping generations
    assert_eq!(
        smsr::init(unknown).unwrap_err(),
        BuildError::AlreadyInitialized {
            active: ArchId::SANDY_BRIDGE_EP,
            requested: unknown,
        }
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(move || {
                for _ in 0..1000 {
                    assert!(smsr::authorize_active(pmc0).is_permitted());
                    let ro = AccessRequest::write(RegisterAddress::from_const(0x017));
                    assert_eq!(
                        smsr::authorize_active(ro).denial(),
                        Some(DenialReason::InsufficientPermission)
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
