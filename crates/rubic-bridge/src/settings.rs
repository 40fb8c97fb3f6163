//! # Role and Configuration Operations
//!
//! Public entry points for administration. Each resolves the caller's role
//! grant first, then delegates to the owning component. None of them touch
//! assets.

use rubic_access::AccessError;
use rubic_config::{AmountBounds, IntegratorFeeInfo};
use rubic_core::{Address, Amount, Ppm};
use rubic_fees::{FeeEngine, FixedFeeSplit, GrossQuote, TokenFeeSplit};

use crate::bridge::Bridge;
use crate::error::BridgeError;

// ── Roles ────────────────────────────────────────────────────────────

impl Bridge {
    pub fn admin(&self) -> Address {
        self.state.roles.admin()
    }

    pub fn pending_admin(&self) -> Option<Address> {
        self.state.roles.pending_admin()
    }

    pub fn is_manager(&self, who: Address) -> bool {
        self.state.roles.is_manager(who)
    }

    /// Propose `new_admin`. Emits `InitAdminTransfer`.
    pub fn transfer_admin(&mut self, caller: Address, new_admin: Address) -> Result<(), BridgeError> {
        self.transact_local(|b| {
            let grant = b.state.roles.require_admin(caller)?;
            let event = b.state.roles.transfer_admin(&grant, new_admin)?;
            b.emit(event);
            Ok(())
        })
    }

    /// Accept a pending admin transfer. Emits `AcceptAdmin`.
    pub fn accept_admin(&mut self, caller: Address) -> Result<(), BridgeError> {
        self.transact_local(|b| {
            let event = b.state.roles.accept_admin(caller)?;
            b.emit(event);
            Ok(())
        })
    }

    pub fn grant_manager(&mut self, caller: Address, who: Address) -> Result<bool, BridgeError> {
        self.transact_local(|b| {
            let grant = b.state.roles.require_admin(caller)?;
            if who.is_zero() {
                return Err(AccessError::InvalidAddress(who).into());
            }
            Ok(b.state.roles.grant_manager(&grant, who))
        })
    }

    pub fn revoke_manager(&mut self, caller: Address, who: Address) -> Result<bool, BridgeError> {
        self.transact_local(|b| {
            let grant = b.state.roles.require_admin(caller)?;
            Ok(b.state.roles.revoke_manager(&grant, who))
        })
    }
}

// ── Router whitelist ─────────────────────────────────────────────────

impl Bridge {
    pub fn available_routers(&self) -> &[Address] {
        self.state.routers.list()
    }

    pub fn is_router_available(&self, router: &Address) -> bool {
        self.state.routers.contains(router)
    }

    pub fn add_available_routers(
        &mut self,
        caller: Address,
        routers: &[Address],
    ) -> Result<usize, BridgeError> {
        self.transact_local(|b| {
            let grant = b.state.roles.require_manager(caller)?;
            Ok(b.state.routers.add_many(&grant, routers.iter().copied())?)
        })
    }

    pub fn remove_available_routers(
        &mut self,
        caller: Address,
        routers: &[Address],
    ) -> Result<usize, BridgeError> {
        self.transact_local(|b| {
            let grant = b.state.roles.require_manager(caller)?;
            Ok(b.state.routers.remove_many(&grant, routers.iter().copied()))
        })
    }
}

// ── Token bounds ─────────────────────────────────────────────────────

impl Bridge {
    pub fn min_token_amount(&self, token: &Address) -> Amount {
        self.state.bounds.min(token)
    }

    pub fn max_token_amount(&self, token: &Address) -> Amount {
        self.state.bounds.max(token)
    }

    pub fn token_bounds(&self, token: &Address) -> AmountBounds {
        self.state.bounds.bounds(token)
    }

    pub fn set_min_token_amount(
        &mut self,
        caller: Address,
        token: Address,
        min: Amount,
    ) -> Result<(), BridgeError> {
        self.transact_local(|b| {
            let grant = b.state.roles.require_manager(caller)?;
            Ok(b.state.bounds.set_min(&grant, token, min)?)
        })
    }

    pub fn set_max_token_amount(
        &mut self,
        caller: Address,
        token: Address,
        max: Amount,
    ) -> Result<(), BridgeError> {
        self.transact_local(|b| {
            let grant = b.state.roles.require_manager(caller)?;
            Ok(b.state.bounds.set_max(&grant, token, max)?)
        })
    }
}

// ── Platform fees ────────────────────────────────────────────────────

impl Bridge {
    pub fn platform_fee(&self) -> Ppm {
        self.state.platform.fee_rate()
    }

    pub fn max_platform_fee(&self) -> Ppm {
        self.state.platform.max_fee_rate()
    }

    pub fn fixed_crypto_fee(&self) -> Amount {
        self.state.platform.fixed_crypto_fee()
    }

    pub fn set_platform_fee(&mut self, caller: Address, rate: Ppm) -> Result<(), BridgeError> {
        self.transact_local(|b| {
            let grant = b.state.roles.require_manager(caller)?;
            Ok(b.state.platform.set_fee_rate(&grant, rate)?)
        })
    }

    pub fn set_max_platform_fee(&mut self, caller: Address, max: Ppm) -> Result<(), BridgeError> {
        self.transact_local(|b| {
            let grant = b.state.roles.require_admin(caller)?;
            Ok(b.state.platform.set_max_fee_rate(&grant, max)?)
        })
    }

    pub fn set_fixed_crypto_fee(&mut self, caller: Address, fee: Amount) -> Result<(), BridgeError> {
        self.transact_local(|b| {
            let grant = b.state.roles.require_manager(caller)?;
            b.state.platform.set_fixed_crypto_fee(&grant, fee);
            Ok(())
        })
    }
}

// ── Integrators and quotes ───────────────────────────────────────────

impl Bridge {
    pub fn integrator_fee_info(&self, integrator: &Address) -> IntegratorFeeInfo {
        self.state.integrators.get(integrator)
    }

    pub fn set_integrator_info(
        &mut self,
        caller: Address,
        integrator: Address,
        info: IntegratorFeeInfo,
    ) -> Result<(), BridgeError> {
        self.transact_local(|b| {
            let grant = b.state.roles.require_manager(caller)?;
            Ok(b.state.integrators.set_info(&grant, integrator, info)?)
        })
    }

    pub(crate) fn fee_engine(&self, integrator: Option<Address>) -> FeeEngine<'_> {
        FeeEngine::for_request(&self.state.platform, &self.state.integrators, integrator)
    }

    /// Token fee a request of `amount_with_fee` would pay.
    pub fn quote_token_fee(
        &self,
        integrator: Option<Address>,
        amount_with_fee: Amount,
    ) -> Result<TokenFeeSplit, BridgeError> {
        Ok(self.fee_engine(integrator).token_fee(amount_with_fee)?)
    }

    /// Gross amount to send so that at least `net` reaches the swap.
    pub fn quote_gross_amount(
        &self,
        integrator: Option<Address>,
        net: Amount,
    ) -> Result<GrossQuote, BridgeError> {
        Ok(self.fee_engine(integrator).gross_up(net)?)
    }

    /// Native value a request must attach.
    pub fn quote_crypto_fee(&self, integrator: Option<Address>) -> Result<FixedFeeSplit, BridgeError> {
        Ok(self.fee_engine(integrator).fixed_fee()?)
    }
}
