use crate::{
    errors::{ERROR_FEE_TOO_HIGH, ERROR_LS_TOKEN_ALREADY_SET},
    MAX_PERCENTAGE,
};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[multiversx_sc::module]
pub trait ConfigModule:
    crate::storage::StorageModule
    + crate::access_control::AccessControlModule
    + crate::events::EventsModule
    + multiversx_sc_modules::default_issue_callbacks::DefaultIssueCallbacksModule
{
    #[payable("EGLD")]
    #[endpoint(registerLsToken)]
    fn register_ls_token(
        &self,
        token_display_name: ManagedBuffer,
        token_ticker: ManagedBuffer,
        num_decimals: usize,
    ) {
        self.require_owner();
        require!(self.ls_token().is_empty(), ERROR_LS_TOKEN_ALREADY_SET);

        let payment_amount = self.call_value().egld().clone_value();
        self.ls_token().issue_and_set_all_roles(
            payment_amount,
            token_display_name,
            token_ticker,
            num_decimals,
            None,
        );
    }

    #[endpoint(setAllowNormalUnstake)]
    fn set_allow_normal_unstake(&self, allow: bool) {
        self.require_owner();

        let old_value = self.allow_normal_unstake().get();
        self.allow_normal_unstake().set(allow);
        self.set_allow_normal_unstake_event(old_value, allow);
    }

    #[endpoint(setAllowInstantUnstake)]
    fn set_allow_instant_unstake(&self, allow: bool) {
        self.require_owner();

        let old_value = self.allow_instant_unstake().get();
        self.allow_instant_unstake().set(allow);
        self.set_allow_instant_unstake_event(old_value, allow);
    }

    #[endpoint(setAllowClaim)]
    fn set_allow_claim(&self, allow: bool) {
        self.require_owner();

        let old_value = self.allow_claim().get();
        self.allow_claim().set(allow);
        self.set_allow_claim_event(old_value, allow);
    }

    #[endpoint(setStakeAssetCap)]
    fn set_stake_asset_cap(&self, cap: BigUint) {
        self.require_owner();

        let old_cap = self.staking_cap().get();
        self.staking_cap().set(&cap);
        self.staking_cap_set().set(true);
        self.set_stake_asset_cap_event(&old_cap, &cap);
    }

    #[endpoint(setInstantUnstakeFee)]
    fn set_instant_unstake_fee(&self, fee_bps: u64) {
        self.require_owner();
        require!(fee_bps <= MAX_PERCENTAGE, ERROR_FEE_TOO_HIGH);

        let old_fee = self.instant_unstake_fee().get();
        self.instant_unstake_fee().set(fee_bps);
        self.set_instant_unstake_fee_event(old_fee, fee_bps);
    }
}
