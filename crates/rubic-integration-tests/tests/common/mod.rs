//! Shared deployment fixture for the scenario tests.
//!
//! Mirrors a freshly deployed bridge: one whitelisted fixed-price DEX, two
//! tokens bounded to `[MIN_TOKEN_AMOUNT, MAX_TOKEN_AMOUNT]`, a platform fee
//! of `RUBIC_PLATFORM_FEE` and a fixed native fee of `FIXED_CRYPTO_FEE`.

#![allow(dead_code)]

use rubic_bridge::mock::{FixedPriceDex, InMemoryAssets};
use rubic_bridge::{AssetLedger, Bridge, BridgeError, CallContext, CrossChainRequest};
use rubic_config::{BridgeConfig, TokenBoundsEntry};
use rubic_core::{Address, Amount, Asset, Ppm, RequestSent};
use tracing_subscriber::EnvFilter;

pub const ETHER: Amount = 1_000_000_000_000_000_000;
pub const FIXED_CRYPTO_FEE: Amount = ETHER / 1_000;
pub const MIN_TOKEN_AMOUNT: Amount = ETHER / 1_000;
pub const MAX_TOKEN_AMOUNT: Amount = 100 * ETHER;
pub const DEFAULT_AMOUNT_IN: Amount = ETHER;
pub const RUBIC_PLATFORM_FEE: Ppm = Ppm::new(30_000);
pub const DEX_PRICE: Amount = 100;
pub const DEFAULT_PROVIDER_NAME: &str = "native:test";
pub const DST_CHAIN_ID: u64 = 228;

pub fn owner() -> Address {
    Address::from_low_u64(0x01)
}
pub fn swapper() -> Address {
    Address::from_low_u64(0x02)
}
pub fn integrator_wallet() -> Address {
    Address::from_low_u64(0x03)
}
pub fn manager() -> Address {
    Address::from_low_u64(0x04)
}
pub fn bridge_address() -> Address {
    Address::from_low_u64(0xb0)
}
pub fn dex_address() -> Address {
    Address::from_low_u64(0xd0)
}
pub fn transit_token() -> Address {
    Address::from_low_u64(0x1000)
}
pub fn swap_token() -> Address {
    Address::from_low_u64(0x2000)
}

/// Route `tracing` output through the test harness. `RUST_LOG` controls
/// verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn deployment_config() -> BridgeConfig {
    let mut config = BridgeConfig::new(owner());
    config.fixed_crypto_fee = FIXED_CRYPTO_FEE;
    config.platform_fee = RUBIC_PLATFORM_FEE;
    config.routers = vec![dex_address()];
    config.token_bounds = [transit_token(), swap_token()]
        .into_iter()
        .map(|token| TokenBoundsEntry {
            token,
            min: MIN_TOKEN_AMOUNT,
            max: MAX_TOKEN_AMOUNT,
        })
        .collect();
    config
}

pub struct Fixture {
    pub bridge: Bridge,
    pub assets: InMemoryAssets,
    pub dex: FixedPriceDex,
}

impl Fixture {
    pub fn new() -> Self {
        init_tracing();
        let bridge = Bridge::new(bridge_address(), &deployment_config())
            .expect("fixture configuration is valid");
        let mut assets = InMemoryAssets::new();
        assets.mint(Asset::Token(transit_token()), dex_address(), 1_000_000 * ETHER);
        assets.mint(Asset::Native, owner(), 100 * ETHER);
        assets.mint(Asset::Native, swapper(), 100 * ETHER);
        Self {
            bridge,
            assets,
            dex: FixedPriceDex::new(dex_address(), DEX_PRICE),
        }
    }

    /// Give the swapper 10 tokens and approve the bridge without limit.
    pub fn fund_swapper(&mut self) {
        self.assets
            .mint(Asset::Token(swap_token()), swapper(), 10 * ETHER);
        self.assets
            .approve(swap_token(), swapper(), bridge_address(), Amount::MAX);
    }

    pub fn balance(&self, asset: Asset, holder: Address) -> Amount {
        self.assets.balance_of(asset, holder)
    }

    /// Send `request` from the swapper through the fixture DEX. `value`
    /// defaults to the quoted fixed fee.
    pub fn call_bridge(
        &mut self,
        request: &CrossChainRequest,
        value: Option<Amount>,
    ) -> Result<RequestSent, BridgeError> {
        let value = match value {
            Some(v) => v,
            None => self.bridge.quote_crypto_fee(request.integrator())?.total,
        };
        self.bridge.cross_chain_with_swap(
            &mut self.assets,
            &mut self.dex,
            &CallContext::with_value(swapper(), value),
            request,
            DEFAULT_PROVIDER_NAME,
        )
    }
}

pub fn default_request() -> CrossChainRequest {
    CrossChainRequest {
        src_token: swap_token(),
        dst_token: transit_token(),
        integrator: None,
        recipient: owner(),
        src_amount: DEFAULT_AMOUNT_IN,
        dst_min_output_amount: MIN_TOKEN_AMOUNT,
        dst_chain_id: DST_CHAIN_ID,
        router: dex_address(),
    }
}

pub fn with_integrator(integrator: Address) -> CrossChainRequest {
    CrossChainRequest {
        integrator: Some(integrator),
        ..default_request()
    }
}
