multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::UNBONDING_PERIOD_SECONDS;

/// One queued unstake: the amount waiting in a slot and the time of the last
/// request that landed there.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct PendingUnstake<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    pub request_timestamp: u64,
}

impl<M: ManagedTypeApi> PendingUnstake<M> {
    pub fn new(amount: BigUint<M>, request_timestamp: u64) -> Self {
        PendingUnstake {
            amount,
            request_timestamp,
        }
    }

    pub fn claimable_timestamp(&self) -> u64 {
        self.request_timestamp + UNBONDING_PERIOD_SECONDS
    }

    pub fn is_claimable(&self, current_timestamp: u64) -> bool {
        current_timestamp >= self.claimable_timestamp()
    }
}

#[type_abi]
#[derive(
    ManagedVecItem, TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug,
)]
pub struct UnstakeSlotInfo<M: ManagedTypeApi> {
    pub slot: u8,
    pub amount: BigUint<M>,
    pub claimable_timestamp: u64,
}
