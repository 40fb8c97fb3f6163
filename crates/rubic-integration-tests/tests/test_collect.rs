//! # Fee Collection Integration Tests
//!
//! Integrator and platform withdrawals after real requests: who may collect,
//! where the funds go, and that a collected entry reads zero afterwards.

mod common;

use common::*;
use rubic_access::AccessError;
use rubic_bridge::{BridgeError, CallContext, ErrorKind, TransferError};
use rubic_config::IntegratorFeeInfo;
use rubic_core::{Address, Amount, Asset, Ppm};

const INTEGRATOR_FIXED_FEE: Amount = FIXED_CRYPTO_FEE + 228;

/// A fixture with an active integrator and one request already processed
/// through it.
fn after_integrator_request() -> Fixture {
    let mut f = Fixture::new();
    f.fund_swapper();
    f.bridge
        .set_integrator_info(
            owner(),
            integrator_wallet(),
            IntegratorFeeInfo {
                active: true,
                token_fee_rate: Ppm::new(60_000),
                platform_fixed_share: Ppm::new(800_000),
                platform_token_share: Ppm::new(400_000),
                fixed_fee_amount: INTEGRATOR_FIXED_FEE,
            },
        )
        .unwrap();
    f.call_bridge(&with_integrator(integrator_wallet()), None)
        .unwrap();
    f
}

fn ctx(caller: Address) -> CallContext {
    CallContext::new(caller)
}

// ---------------------------------------------------------------------------
// 1. Integrator token fees
// ---------------------------------------------------------------------------

#[test]
fn collect_integrator_fee_by_integrator() {
    let mut f = after_integrator_request();
    let expected = f
        .bridge
        .available_integrator_token_fee(swap_token(), integrator_wallet());
    assert!(expected > 0);

    let paid = f
        .bridge
        .collect_integrator_fee(
            &mut f.assets,
            &ctx(integrator_wallet()),
            Asset::Token(swap_token()),
        )
        .unwrap();

    assert_eq!(paid, expected);
    assert_eq!(
        f.balance(Asset::Token(swap_token()), integrator_wallet()),
        expected
    );
    assert_eq!(
        f.bridge
            .available_integrator_token_fee(swap_token(), integrator_wallet()),
        0
    );
    // The platform share stays on the bridge.
    assert_eq!(
        f.balance(Asset::Token(swap_token()), bridge_address()),
        f.bridge.available_rubic_token_fee(swap_token())
    );
}

#[test]
fn collect_integrator_fee_by_manager() {
    let mut f = after_integrator_request();
    f.bridge.grant_manager(owner(), manager()).unwrap();
    let expected = f
        .bridge
        .available_integrator_token_fee(swap_token(), integrator_wallet());

    let paid = f
        .bridge
        .collect_integrator_fee_for(
            &mut f.assets,
            &ctx(manager()),
            integrator_wallet(),
            Asset::Token(swap_token()),
        )
        .unwrap();

    assert_eq!(paid, expected);
    assert_eq!(
        f.balance(Asset::Token(swap_token()), integrator_wallet()),
        expected
    );
    assert_eq!(f.balance(Asset::Token(swap_token()), manager()), 0);
}

#[test]
fn collect_integrator_fee_for_requires_manager() {
    let mut f = after_integrator_request();
    let err = f
        .bridge
        .collect_integrator_fee_for(
            &mut f.assets,
            &ctx(swapper()),
            integrator_wallet(),
            Asset::Token(swap_token()),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        BridgeError::Access(AccessError::NotAManager(who)) if who == swapper()
    ));
    assert_eq!(err.kind(), ErrorKind::AccessDenied);
}

#[test]
fn collecting_twice_pays_nothing_the_second_time() {
    let mut f = after_integrator_request();
    let token = Asset::Token(swap_token());
    let first = f
        .bridge
        .collect_integrator_fee(&mut f.assets, &ctx(integrator_wallet()), token)
        .unwrap();
    let second = f
        .bridge
        .collect_integrator_fee(&mut f.assets, &ctx(integrator_wallet()), token)
        .unwrap();
    assert!(first > 0);
    assert_eq!(second, 0);
    assert_eq!(f.balance(token, integrator_wallet()), first);
}

#[test]
fn rejected_payout_keeps_the_entry() {
    let mut f = after_integrator_request();
    let token = Asset::Token(swap_token());
    let expected = f
        .bridge
        .available_integrator_token_fee(swap_token(), integrator_wallet());
    f.assets.reject_incoming(integrator_wallet());

    let err = f
        .bridge
        .collect_integrator_fee(&mut f.assets, &ctx(integrator_wallet()), token)
        .unwrap_err();
    assert!(matches!(
        err,
        BridgeError::TransferFailed(TransferError::Rejected { .. })
    ));
    assert_eq!(err.kind(), ErrorKind::ExternalFailure);
    assert_eq!(
        f.bridge
            .available_integrator_token_fee(swap_token(), integrator_wallet()),
        expected
    );
}

// ---------------------------------------------------------------------------
// 2. Platform token fees
// ---------------------------------------------------------------------------

#[test]
fn collect_rubic_fee() {
    let mut f = after_integrator_request();
    f.bridge.grant_manager(owner(), manager()).unwrap();
    let expected = f.bridge.available_rubic_token_fee(swap_token());

    let err = f
        .bridge
        .collect_rubic_fee(&mut f.assets, &ctx(manager()), swap_token(), manager())
        .unwrap_err();
    assert!(matches!(
        err,
        BridgeError::Access(AccessError::NotAnAdmin(who)) if who == manager()
    ));

    let paid = f
        .bridge
        .collect_rubic_fee(&mut f.assets, &ctx(owner()), swap_token(), owner())
        .unwrap();
    assert_eq!(paid, expected);
    assert_eq!(f.balance(Asset::Token(swap_token()), owner()), expected);
    assert_eq!(f.bridge.available_rubic_token_fee(swap_token()), 0);
}

#[test]
fn collecting_everything_empties_the_bridge_token_balance() {
    let mut f = after_integrator_request();
    let token = Asset::Token(swap_token());
    f.bridge
        .collect_integrator_fee(&mut f.assets, &ctx(integrator_wallet()), token)
        .unwrap();
    f.bridge
        .collect_rubic_fee(&mut f.assets, &ctx(owner()), swap_token(), owner())
        .unwrap();
    assert_eq!(f.balance(token, bridge_address()), 0);
}

// ---------------------------------------------------------------------------
// 3. Native fees
// ---------------------------------------------------------------------------

#[test]
fn collect_integrator_crypto_fee() {
    let mut f = after_integrator_request();
    let split = f
        .bridge
        .quote_crypto_fee(Some(integrator_wallet()))
        .unwrap();
    assert_eq!(
        f.bridge.available_integrator_crypto_fee(integrator_wallet()),
        split.integrator
    );

    let before = f.balance(Asset::Native, integrator_wallet());
    let paid = f
        .bridge
        .collect_integrator_fee(
            &mut f.assets,
            &ctx(integrator_wallet()),
            Asset::from_address(Address::ZERO),
        )
        .unwrap();

    assert_eq!(paid, split.integrator);
    assert_eq!(
        f.balance(Asset::Native, integrator_wallet()) - before,
        split.integrator
    );
    assert_eq!(
        f.bridge.available_integrator_crypto_fee(integrator_wallet()),
        0
    );
    assert_eq!(f.balance(Asset::Native, bridge_address()), split.platform);
}

#[test]
fn collect_integrator_crypto_fee_by_manager() {
    let mut f = after_integrator_request();
    f.bridge.grant_manager(owner(), manager()).unwrap();
    let expected = f.bridge.available_integrator_crypto_fee(integrator_wallet());
    let paid = f
        .bridge
        .collect_integrator_crypto_fee_for(&mut f.assets, &ctx(manager()), integrator_wallet())
        .unwrap();
    assert_eq!(paid, expected);
    assert_eq!(f.balance(Asset::Native, integrator_wallet()), expected);
}

#[test]
fn collect_rubic_crypto_fee() {
    let mut f = after_integrator_request();
    let expected = f.bridge.available_rubic_crypto_fee();
    assert_eq!(expected, INTEGRATOR_FIXED_FEE * 8 / 10);

    let to = Address::from_low_u64(0xfee);
    let paid = f
        .bridge
        .collect_rubic_crypto_fee(&mut f.assets, &ctx(owner()), to)
        .unwrap();
    assert_eq!(paid, expected);
    assert_eq!(f.balance(Asset::Native, to), expected);
    assert_eq!(f.bridge.available_rubic_crypto_fee(), 0);

    let err = f
        .bridge
        .collect_rubic_crypto_fee(&mut f.assets, &ctx(integrator_wallet()), to)
        .unwrap_err();
    assert!(matches!(err, BridgeError::Access(AccessError::NotAnAdmin(_))));
}

#[test]
fn platform_crypto_fee_via_token_selector() {
    let mut f = after_integrator_request();
    let expected = f.bridge.available_rubic_crypto_fee();
    let to = Address::from_low_u64(0xfee);
    let paid = f
        .bridge
        .collect_rubic_fee(&mut f.assets, &ctx(owner()), Address::ZERO, to)
        .unwrap();
    assert_eq!(paid, expected);
    assert_eq!(f.balance(Asset::Native, to), expected);
}

#[test]
fn collecting_nothing_succeeds() {
    let mut f = Fixture::new();
    let stranger = Address::from_low_u64(0x99);
    let paid = f
        .bridge
        .collect_integrator_crypto_fee(&mut f.assets, &ctx(stranger))
        .unwrap();
    assert_eq!(paid, 0);
    assert_eq!(f.balance(Asset::Native, stranger), 0);
}
