use crate::{
    contexts::base::StorageCache,
    errors::{ERROR_INSUFFICIENT_INSTANT_POOL, ERROR_ZERO_AMOUNT},
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ManageModule:
    crate::access_control::AccessControlModule
    + crate::events::EventsModule
    + crate::storage::StorageModule
{
    #[endpoint(withdraw)]
    fn withdraw(&self) {
        let operator = self.require_operator();
        let mut storage_cache = StorageCache::new(self);

        let amount = self.take_pending_stake(&mut storage_cache, &operator);

        self.emit_ledger_update_event(&storage_cache);
        drop(storage_cache);

        self.send_egld_if_not_zero(&operator, &amount);
    }

    #[payable("EGLD")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let operator = self.require_operator();
        let payment = self.call_value().egld().clone_value();
        require!(payment > BigUint::zero(), ERROR_ZERO_AMOUNT);

        let mut storage_cache = StorageCache::new(self);
        self.add_claimable(&mut storage_cache, &operator, &payment);

        self.emit_ledger_update_event(&storage_cache);
    }

    /// Settles both directions in one call: pays out the pending stake and
    /// books the attached EGLD as claimable.
    #[payable("EGLD")]
    #[endpoint(withdrawAndDeposit)]
    fn withdraw_and_deposit(&self) {
        let operator = self.require_operator();
        let payment = self.call_value().egld().clone_value();

        let mut storage_cache = StorageCache::new(self);

        let amount = self.take_pending_stake(&mut storage_cache, &operator);
        self.add_claimable(&mut storage_cache, &operator, &payment);

        self.emit_ledger_update_event(&storage_cache);
        drop(storage_cache);

        self.send_egld_if_not_zero(&operator, &amount);
    }

    #[payable("EGLD")]
    #[endpoint(depositToInstantPool)]
    fn deposit_to_instant_pool(&self) {
        let operator = self.require_operator();
        let payment = self.call_value().egld().clone_value();
        require!(payment > BigUint::zero(), ERROR_ZERO_AMOUNT);

        let mut storage_cache = StorageCache::new(self);
        storage_cache.instant_pool += &payment;

        self.deposit_instant_pool_event(&operator, &payment);
        self.emit_ledger_update_event(&storage_cache);
    }

    #[endpoint(withdrawFromInstantPool)]
    fn withdraw_from_instant_pool(&self, amount: BigUint) {
        let operator = self.require_operator();
        require!(amount > BigUint::zero(), ERROR_ZERO_AMOUNT);

        let mut storage_cache = StorageCache::new(self);
        require!(
            storage_cache.instant_pool >= amount,
            ERROR_INSUFFICIENT_INSTANT_POOL
        );

        storage_cache.instant_pool -= &amount;

        self.withdraw_instant_pool_event(&operator, &amount);
        self.emit_ledger_update_event(&storage_cache);
        drop(storage_cache);

        self.tx().to(&operator).egld(&amount).transfer();
    }

    #[endpoint(collectFee)]
    fn collect_fee(&self) {
        let owner = self.require_owner();
        let mut storage_cache = StorageCache::new(self);

        let amount = core::mem::replace(&mut storage_cache.collected_fee, BigUint::zero());

        self.fee_collected_event(&amount);
        self.emit_ledger_update_event(&storage_cache);
        drop(storage_cache);

        self.send_egld_if_not_zero(&owner, &amount);
    }

    fn take_pending_stake(
        &self,
        storage_cache: &mut StorageCache<Self>,
        operator: &ManagedAddress,
    ) -> BigUint {
        let amount = core::mem::replace(&mut storage_cache.pending_stake, BigUint::zero());
        self.admin_withdraw_event(operator, &amount);
        amount
    }

    fn add_claimable(
        &self,
        storage_cache: &mut StorageCache<Self>,
        operator: &ManagedAddress,
        amount: &BigUint,
    ) {
        storage_cache.total_claimable += amount;
        self.admin_deposit_event(operator, amount);
    }

    fn send_egld_if_not_zero(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount > BigUint::zero() {
            self.tx().to(to).egld(amount).transfer();
        }
    }
}
