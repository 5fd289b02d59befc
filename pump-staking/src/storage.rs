use crate::structs::PendingUnstake;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    #[view(owner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(pendingOwner)]
    #[storage_mapper("pendingOwner")]
    fn pending_owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(operator)]
    #[storage_mapper("operator")]
    fn operator(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(paused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[view(getLsTokenId)]
    #[storage_mapper("lsTokenId")]
    fn ls_token(&self) -> FungibleTokenMapper<Self::Api>;

    #[view(allowNormalUnstake)]
    #[storage_mapper("allowNormalUnstake")]
    fn allow_normal_unstake(&self) -> SingleValueMapper<bool>;

    #[view(allowInstantUnstake)]
    #[storage_mapper("allowInstantUnstake")]
    fn allow_instant_unstake(&self) -> SingleValueMapper<bool>;

    #[view(allowClaim)]
    #[storage_mapper("allowClaim")]
    fn allow_claim(&self) -> SingleValueMapper<bool>;

    #[view(totalStakingCap)]
    #[storage_mapper("stakingCap")]
    fn staking_cap(&self) -> SingleValueMapper<BigUint>;

    #[view(isStakingCapSet)]
    #[storage_mapper("stakingCapSet")]
    fn staking_cap_set(&self) -> SingleValueMapper<bool>;

    #[view(instantUnstakeFee)]
    #[storage_mapper("instantUnstakeFee")]
    fn instant_unstake_fee(&self) -> SingleValueMapper<u64>;

    #[view(totalStakingAmount)]
    #[storage_mapper("totalStaking")]
    fn total_staking(&self) -> SingleValueMapper<BigUint>;

    #[view(pendingStakeAmount)]
    #[storage_mapper("pendingStake")]
    fn pending_stake(&self) -> SingleValueMapper<BigUint>;

    #[view(totalRequestedAmount)]
    #[storage_mapper("totalRequested")]
    fn total_requested(&self) -> SingleValueMapper<BigUint>;

    #[view(totalClaimableAmount)]
    #[storage_mapper("totalClaimable")]
    fn total_claimable(&self) -> SingleValueMapper<BigUint>;

    #[view(instantPoolAmount)]
    #[storage_mapper("instantPool")]
    fn instant_pool(&self) -> SingleValueMapper<BigUint>;

    #[view(collectedFee)]
    #[storage_mapper("collectedFee")]
    fn collected_fee(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("pendingUnstake")]
    fn pending_unstake(
        &self,
        holder: &ManagedAddress,
        slot: u8,
    ) -> SingleValueMapper<PendingUnstake<Self::Api>>;
}
