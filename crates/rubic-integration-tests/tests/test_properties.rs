//! # Ledger Invariants Under Random Operation Sequences
//!
//! Any interleaving of requests and withdrawals, failed ones included,
//! keeps the fee ledger backed one-to-one by the bridge's own balances and
//! never creates or destroys value.

mod common;

use common::*;
use proptest::prelude::*;
use rubic_bridge::CallContext;
use rubic_config::IntegratorFeeInfo;
use rubic_core::{Address, Amount, Asset, Ppm};

#[derive(Debug, Clone)]
enum Op {
    Request {
        amount: Amount,
        integrator: bool,
        excess: Amount,
    },
    CollectIntegrator {
        native: bool,
    },
    CollectRubic {
        native: bool,
    },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (
            MIN_TOKEN_AMOUNT / 2..=3 * ETHER,
            any::<bool>(),
            prop_oneof![Just(0), 1..ETHER],
        )
            .prop_map(|(amount, integrator, excess)| Op::Request {
                amount,
                integrator,
                excess,
            }),
        1 => any::<bool>().prop_map(|native| Op::CollectIntegrator { native }),
        1 => any::<bool>().prop_map(|native| Op::CollectRubic { native }),
    ]
}

fn holders() -> [Address; 5] {
    [
        owner(),
        swapper(),
        integrator_wallet(),
        bridge_address(),
        dex_address(),
    ]
}

fn total_held(f: &Fixture, asset: Asset) -> Amount {
    holders().iter().map(|h| f.balance(asset, *h)).sum()
}

fn fixture() -> Fixture {
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
                fixed_fee_amount: FIXED_CRYPTO_FEE + 228,
            },
        )
        .unwrap();
    f
}

fn apply(f: &mut Fixture, op: &Op) -> bool {
    match op {
        Op::Request {
            amount,
            integrator,
            excess,
        } => {
            let request = rubic_bridge::CrossChainRequest {
                src_amount: *amount,
                dst_min_output_amount: 0,
                ..if *integrator {
                    with_integrator(integrator_wallet())
                } else {
                    default_request()
                }
            };
            let fixed = match f.bridge.quote_crypto_fee(request.integrator()) {
                Ok(split) => split.total,
                Err(_) => return false,
            };
            f.call_bridge(&request, Some(fixed + excess)).is_ok()
        }
        Op::CollectIntegrator { native } => {
            let asset = if *native {
                Asset::Native
            } else {
                Asset::Token(swap_token())
            };
            f.bridge
                .collect_integrator_fee(
                    &mut f.assets,
                    &CallContext::new(integrator_wallet()),
                    asset,
                )
                .is_ok()
        }
        Op::CollectRubic { native } => {
            let ctx = CallContext::new(owner());
            if *native {
                f.bridge
                    .collect_rubic_crypto_fee(&mut f.assets, &ctx, owner())
                    .is_ok()
            } else {
                f.bridge
                    .collect_rubic_fee(&mut f.assets, &ctx, swap_token(), owner())
                    .is_ok()
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The bridge holds exactly what the ledger owes, per asset.
    #[test]
    fn ledger_is_backed_by_bridge_balances(ops in prop::collection::vec(op(), 1..12)) {
        let mut f = fixture();
        let native_supply = total_held(&f, Asset::Native);
        let token_supply = total_held(&f, Asset::Token(swap_token()));
        let mut sent = 0usize;

        for op in &ops {
            let ok = apply(&mut f, op);
            if ok && matches!(op, Op::Request { .. }) {
                sent += 1;
            }

            let ledger = &f.bridge.state().ledger;
            prop_assert_eq!(
                f.balance(Asset::Token(swap_token()), bridge_address()),
                ledger.total(Asset::Token(swap_token()))
            );
            prop_assert_eq!(
                f.balance(Asset::Native, bridge_address()),
                ledger.total(Asset::Native)
            );
            prop_assert_eq!(total_held(&f, Asset::Native), native_supply);
            prop_assert_eq!(total_held(&f, Asset::Token(swap_token())), token_supply);
        }
        prop_assert_eq!(f.bridge.events().len(), sent);
    }

    /// The swapper is charged exactly `src_amount` per accepted request.
    #[test]
    fn swapper_pays_exactly_src_amount(amount in MIN_TOKEN_AMOUNT..=3 * ETHER, integrator in any::<bool>()) {
        let mut f = fixture();
        let before = f.balance(Asset::Token(swap_token()), swapper());
        let op = Op::Request { amount, integrator, excess: 0 };
        prop_assert!(apply(&mut f, &op));
        prop_assert_eq!(
            before - f.balance(Asset::Token(swap_token()), swapper()),
            amount
        );
    }
}
