use crate::contexts::base::StorageCache;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[type_abi]
#[derive(TopEncode)]
pub struct LedgerSnapshotEvent<M: ManagedTypeApi> {
    caller: ManagedAddress<M>,
    total_staking: BigUint<M>,
    pending_stake: BigUint<M>,
    total_requested: BigUint<M>,
    total_claimable: BigUint<M>,
    instant_pool: BigUint<M>,
    collected_fee: BigUint<M>,
    block: u64,
    epoch: u64,
    timestamp: u64,
}

#[multiversx_sc::module]
pub trait EventsModule: crate::storage::StorageModule {
    fn emit_ledger_update_event(&self, storage_cache: &StorageCache<Self>) {
        let caller = self.blockchain().get_caller();
        self.ledger_update_event(&LedgerSnapshotEvent {
            caller,
            total_staking: storage_cache.total_staking.clone(),
            pending_stake: storage_cache.pending_stake.clone(),
            total_requested: storage_cache.total_requested.clone(),
            total_claimable: storage_cache.total_claimable.clone(),
            instant_pool: storage_cache.instant_pool.clone(),
            collected_fee: storage_cache.collected_fee.clone(),
            block: self.blockchain().get_block_nonce(),
            epoch: self.blockchain().get_block_epoch(),
            timestamp: self.blockchain().get_block_timestamp(),
        })
    }

    #[event("ledger_update")]
    fn ledger_update_event(&self, #[indexed] snapshot: &LedgerSnapshotEvent<Self::Api>);

    #[event("stake")]
    fn stake_event(&self, #[indexed] caller: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("unstake_request")]
    fn unstake_request_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] slot: u8,
    );

    #[event("unstake_instant")]
    fn unstake_instant_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] fee: &BigUint,
    );

    #[event("claim_slot")]
    fn claim_slot_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] slot: u8,
    );

    #[event("admin_withdraw")]
    fn admin_withdraw_event(&self, #[indexed] operator: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("admin_deposit")]
    fn admin_deposit_event(&self, #[indexed] operator: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("deposit_instant_pool")]
    fn deposit_instant_pool_event(
        &self,
        #[indexed] operator: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("withdraw_instant_pool")]
    fn withdraw_instant_pool_event(
        &self,
        #[indexed] operator: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("fee_collected")]
    fn fee_collected_event(&self, #[indexed] amount: &BigUint);

    #[event("set_stake_asset_cap")]
    fn set_stake_asset_cap_event(&self, #[indexed] old_cap: &BigUint, #[indexed] new_cap: &BigUint);

    #[event("set_instant_unstake_fee")]
    fn set_instant_unstake_fee_event(&self, #[indexed] old_fee: u64, #[indexed] new_fee: u64);

    #[event("set_allow_normal_unstake")]
    fn set_allow_normal_unstake_event(&self, #[indexed] old_value: bool, #[indexed] new_value: bool);

    #[event("set_allow_instant_unstake")]
    fn set_allow_instant_unstake_event(
        &self,
        #[indexed] old_value: bool,
        #[indexed] new_value: bool,
    );

    #[event("set_allow_claim")]
    fn set_allow_claim_event(&self, #[indexed] old_value: bool, #[indexed] new_value: bool);

    #[event("set_operator")]
    fn set_operator_event(
        &self,
        #[indexed] old_operator: &ManagedAddress,
        #[indexed] new_operator: &ManagedAddress,
    );

    #[event("ownership_transfer_started")]
    fn ownership_transfer_started_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] pending_owner: &ManagedAddress,
    );

    #[event("ownership_transferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    #[event("paused")]
    fn paused_event(&self, #[indexed] account: &ManagedAddress);

    #[event("unpaused")]
    fn unpaused_event(&self, #[indexed] account: &ManagedAddress);
}
