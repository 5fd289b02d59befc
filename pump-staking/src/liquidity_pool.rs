multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::contexts::base::StorageCache;
use crate::errors::*;

use super::storage;

#[multiversx_sc::module]
pub trait LiquidityPoolModule: storage::StorageModule + crate::utils::UtilsModule {
    fn pool_add_stake(&self, amount: &BigUint, storage_cache: &mut StorageCache<Self>) {
        let new_total_staking = &storage_cache.total_staking + amount;

        // unbounded until the owner sets a cap
        require!(
            !self.staking_cap_set().get() || new_total_staking <= self.staking_cap().get(),
            ERROR_STAKING_CAP_EXCEEDED
        );

        storage_cache.total_staking = new_total_staking;
        storage_cache.pending_stake += amount;
    }

    /// Takes `amount` out of the instant pool first and the pending stake
    /// for the remainder. Returns the fee kept by the protocol.
    fn pool_remove_instant(
        &self,
        amount: &BigUint,
        storage_cache: &mut StorageCache<Self>,
    ) -> BigUint {
        require!(
            &storage_cache.instant_pool + &storage_cache.pending_stake >= *amount,
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        if storage_cache.instant_pool >= *amount {
            storage_cache.instant_pool -= amount;
        } else {
            let from_pending = amount - &storage_cache.instant_pool;
            storage_cache.instant_pool = BigUint::zero();
            storage_cache.pending_stake -= &from_pending;
        }

        storage_cache.total_staking -= amount;

        let fee = self.calculate_split(amount, self.instant_unstake_fee().get());
        storage_cache.collected_fee += &fee;

        fee
    }

    fn get_ls_payment(&self) -> BigUint {
        let payment = self.call_value().single_esdt();

        require!(
            payment.token_identifier == self.ls_token().get_token_id(),
            ERROR_BAD_PAYMENT_TOKEN
        );
        require!(payment.amount > BigUint::zero(), ERROR_ZERO_AMOUNT);

        payment.amount.clone()
    }

    fn mint_ls_token(&self, to: &ManagedAddress, amount: &BigUint) {
        require!(!self.ls_token().is_empty(), ERROR_LS_TOKEN_NOT_SET);
        self.ls_token().mint_and_send(to, amount.clone());
    }

    fn burn_ls_token(&self, amount: &BigUint) {
        self.ls_token().burn(amount);
    }
}
