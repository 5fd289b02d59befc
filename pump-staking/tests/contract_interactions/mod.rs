use crate::contract_setup::{PumpStakingContractSetup, LS_TOKEN_ID, PUMP_STAKING_ADDRESS};
use crate::utils::*;

use multiversx_sc::types::{BigUint, TestAddress, TestTokenIdentifier};
use multiversx_sc_scenario::{
    api::StaticApi, imports::ExpectError, DebugApi, ScenarioTxWhitebox,
};

use pump_staking::access_control::AccessControlModule;
use pump_staking::config::ConfigModule;
use pump_staking::manage::ManageModule;
use pump_staking::storage::StorageModule;
use pump_staking::unstake_queue::UnstakeQueueModule;
use pump_staking::views::ViewsModule;
use pump_staking::PumpStaking;

pub enum Payment {
    None,
    Egld(BigUint<StaticApi>),
    Esdt(TestTokenIdentifier<'static>, BigUint<StaticApi>),
}

impl PumpStakingContractSetup {
    fn execute<F>(&mut self, caller: &TestAddress, payment: Payment, error: Option<&[u8]>, f: F)
    where
        F: FnOnce(pump_staking::ContractObj<DebugApi>),
    {
        let tx = self.world.tx().from(*caller).to(PUMP_STAKING_ADDRESS);

        match (payment, error) {
            (Payment::None, None) => {
                tx.whitebox(pump_staking::contract_obj, f);
            }
            (Payment::None, Some(error)) => {
                tx.returns(ExpectError(4, bytes_to_str(error)))
                    .whitebox(pump_staking::contract_obj, f);
            }
            (Payment::Egld(amount), None) => {
                tx.egld(amount).whitebox(pump_staking::contract_obj, f);
            }
            (Payment::Egld(amount), Some(error)) => {
                tx.egld(amount)
                    .returns(ExpectError(4, bytes_to_str(error)))
                    .whitebox(pump_staking::contract_obj, f);
            }
            (Payment::Esdt(token, amount), None) => {
                let token_id = token.to_token_identifier();
                tx.single_esdt(&token_id, 0, &amount)
                    .whitebox(pump_staking::contract_obj, f);
            }
            (Payment::Esdt(token, amount), Some(error)) => {
                let token_id = token.to_token_identifier();
                tx.single_esdt(&token_id, 0, &amount)
                    .returns(ExpectError(4, bytes_to_str(error)))
                    .whitebox(pump_staking::contract_obj, f);
            }
        }
    }

    // Staker endpoints

    pub fn stake(&mut self, caller: &TestAddress, amount: BigUint<StaticApi>) {
        self.execute(caller, Payment::Egld(amount), None, |sc| sc.stake());
    }

    pub fn stake_error(&mut self, caller: &TestAddress, amount: BigUint<StaticApi>, error: &[u8]) {
        self.execute(caller, Payment::Egld(amount), Some(error), |sc| sc.stake());
    }

    pub fn unstake_request(&mut self, caller: &TestAddress, amount: BigUint<StaticApi>) {
        self.execute(caller, Payment::Esdt(LS_TOKEN_ID, amount), None, |sc| {
            sc.unstake_request()
        });
    }

    pub fn unstake_request_error(
        &mut self,
        caller: &TestAddress,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.execute(
            caller,
            Payment::Esdt(LS_TOKEN_ID, amount),
            Some(error),
            |sc| sc.unstake_request(),
        );
    }

    pub fn unstake_instant(&mut self, caller: &TestAddress, amount: BigUint<StaticApi>) {
        self.execute(caller, Payment::Esdt(LS_TOKEN_ID, amount), None, |sc| {
            sc.unstake_instant()
        });
    }

    pub fn unstake_instant_error(
        &mut self,
        caller: &TestAddress,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.execute(
            caller,
            Payment::Esdt(LS_TOKEN_ID, amount),
            Some(error),
            |sc| sc.unstake_instant(),
        );
    }

    pub fn unstake_with_token_error(
        &mut self,
        caller: &TestAddress,
        token: TestTokenIdentifier<'static>,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.execute(caller, Payment::Esdt(token, amount), Some(error), |sc| {
            sc.unstake_request()
        });
    }

    pub fn claim_slot(&mut self, caller: &TestAddress, slot: u8) {
        self.execute(caller, Payment::None, None, |sc| sc.claim_slot(slot));
    }

    pub fn claim_slot_error(&mut self, caller: &TestAddress, slot: u8, error: &[u8]) {
        self.execute(caller, Payment::None, Some(error), |sc| sc.claim_slot(slot));
    }

    pub fn claim_all(&mut self, caller: &TestAddress) {
        self.execute(caller, Payment::None, None, |sc| sc.claim_all());
    }

    pub fn claim_all_error(&mut self, caller: &TestAddress, error: &[u8]) {
        self.execute(caller, Payment::None, Some(error), |sc| sc.claim_all());
    }

    // Operator endpoints

    pub fn operator_withdraw(&mut self, caller: &TestAddress) {
        self.execute(caller, Payment::None, None, |sc| sc.withdraw());
    }

    pub fn operator_withdraw_error(&mut self, caller: &TestAddress, error: &[u8]) {
        self.execute(caller, Payment::None, Some(error), |sc| sc.withdraw());
    }

    pub fn operator_deposit(&mut self, caller: &TestAddress, amount: BigUint<StaticApi>) {
        self.execute(caller, Payment::Egld(amount), None, |sc| sc.deposit());
    }

    pub fn operator_deposit_error(
        &mut self,
        caller: &TestAddress,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.execute(caller, Payment::Egld(amount), Some(error), |sc| {
            sc.deposit()
        });
    }

    pub fn withdraw_and_deposit(&mut self, caller: &TestAddress, amount: BigUint<StaticApi>) {
        self.execute(caller, Payment::Egld(amount), None, |sc| {
            sc.withdraw_and_deposit()
        });
    }

    pub fn withdraw_and_deposit_error(
        &mut self,
        caller: &TestAddress,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.execute(caller, Payment::Egld(amount), Some(error), |sc| {
            sc.withdraw_and_deposit()
        });
    }

    pub fn deposit_to_instant_pool(&mut self, caller: &TestAddress, amount: BigUint<StaticApi>) {
        self.execute(caller, Payment::Egld(amount), None, |sc| {
            sc.deposit_to_instant_pool()
        });
    }

    pub fn deposit_to_instant_pool_error(
        &mut self,
        caller: &TestAddress,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.execute(caller, Payment::Egld(amount), Some(error), |sc| {
            sc.deposit_to_instant_pool()
        });
    }

    pub fn withdraw_from_instant_pool(&mut self, caller: &TestAddress, amount: u128) {
        self.execute(caller, Payment::None, None, |sc| {
            sc.withdraw_from_instant_pool(BigUint::from(amount))
        });
    }

    pub fn withdraw_from_instant_pool_error(
        &mut self,
        caller: &TestAddress,
        amount: u128,
        error: &[u8],
    ) {
        self.execute(caller, Payment::None, Some(error), |sc| {
            sc.withdraw_from_instant_pool(BigUint::from(amount))
        });
    }

    // Owner endpoints

    pub fn collect_fee(&mut self, caller: &TestAddress) {
        self.execute(caller, Payment::None, None, |sc| sc.collect_fee());
    }

    pub fn collect_fee_error(&mut self, caller: &TestAddress, error: &[u8]) {
        self.execute(caller, Payment::None, Some(error), |sc| sc.collect_fee());
    }

    pub fn set_allow_normal_unstake(&mut self, caller: &TestAddress, allow: bool) {
        self.execute(caller, Payment::None, None, |sc| {
            sc.set_allow_normal_unstake(allow)
        });
    }

    pub fn set_allow_instant_unstake(&mut self, caller: &TestAddress, allow: bool) {
        self.execute(caller, Payment::None, None, |sc| {
            sc.set_allow_instant_unstake(allow)
        });
    }

    pub fn set_allow_claim(&mut self, caller: &TestAddress, allow: bool) {
        self.execute(caller, Payment::None, None, |sc| sc.set_allow_claim(allow));
    }

    pub fn set_allow_claim_error(&mut self, caller: &TestAddress, allow: bool, error: &[u8]) {
        self.execute(caller, Payment::None, Some(error), |sc| {
            sc.set_allow_claim(allow)
        });
    }

    pub fn set_stake_asset_cap(&mut self, caller: &TestAddress, cap: u128) {
        self.execute(caller, Payment::None, None, |sc| {
            sc.set_stake_asset_cap(BigUint::from(cap))
        });
    }

    pub fn set_stake_asset_cap_error(&mut self, caller: &TestAddress, cap: u128, error: &[u8]) {
        self.execute(caller, Payment::None, Some(error), |sc| {
            sc.set_stake_asset_cap(BigUint::from(cap))
        });
    }

    pub fn set_instant_unstake_fee(&mut self, caller: &TestAddress, fee_bps: u64) {
        self.execute(caller, Payment::None, None, |sc| {
            sc.set_instant_unstake_fee(fee_bps)
        });
    }

    pub fn set_instant_unstake_fee_error(
        &mut self,
        caller: &TestAddress,
        fee_bps: u64,
        error: &[u8],
    ) {
        self.execute(caller, Payment::None, Some(error), |sc| {
            sc.set_instant_unstake_fee(fee_bps)
        });
    }

    pub fn set_operator(&mut self, caller: &TestAddress, operator: &TestAddress) {
        let operator = *operator;
        self.execute(caller, Payment::None, None, |sc| {
            sc.set_operator(operator.to_managed_address())
        });
    }

    pub fn set_operator_error(&mut self, caller: &TestAddress, operator: &TestAddress, error: &[u8]) {
        let operator = *operator;
        self.execute(caller, Payment::None, Some(error), |sc| {
            sc.set_operator(operator.to_managed_address())
        });
    }

    pub fn pause(&mut self, caller: &TestAddress) {
        self.execute(caller, Payment::None, None, |sc| sc.pause());
    }

    pub fn pause_error(&mut self, caller: &TestAddress, error: &[u8]) {
        self.execute(caller, Payment::None, Some(error), |sc| sc.pause());
    }

    pub fn unpause(&mut self, caller: &TestAddress) {
        self.execute(caller, Payment::None, None, |sc| sc.unpause());
    }

    pub fn unpause_error(&mut self, caller: &TestAddress, error: &[u8]) {
        self.execute(caller, Payment::None, Some(error), |sc| sc.unpause());
    }

    pub fn transfer_ownership(&mut self, caller: &TestAddress, new_owner: &TestAddress) {
        let new_owner = *new_owner;
        self.execute(caller, Payment::None, None, |sc| {
            sc.transfer_ownership(new_owner.to_managed_address())
        });
    }

    pub fn transfer_ownership_error(
        &mut self,
        caller: &TestAddress,
        new_owner: &TestAddress,
        error: &[u8],
    ) {
        let new_owner = *new_owner;
        self.execute(caller, Payment::None, Some(error), |sc| {
            sc.transfer_ownership(new_owner.to_managed_address())
        });
    }

    pub fn accept_ownership(&mut self, caller: &TestAddress) {
        self.execute(caller, Payment::None, None, |sc| sc.accept_ownership());
    }

    pub fn accept_ownership_error(&mut self, caller: &TestAddress, error: &[u8]) {
        self.execute(caller, Payment::None, Some(error), |sc| {
            sc.accept_ownership()
        });
    }

    // Checks

    pub fn check_contract_storage(
        &mut self,
        total_staking: u128,
        pending_stake: u128,
        total_requested: u128,
        total_claimable: u128,
        instant_pool: u128,
        collected_fee: u128,
    ) {
        self.world
            .query()
            .to(PUMP_STAKING_ADDRESS)
            .whitebox(pump_staking::contract_obj, |sc| {
                assert_eq!(sc.total_staking().get(), BigUint::from(total_staking));
                assert_eq!(sc.pending_stake().get(), BigUint::from(pending_stake));
                assert_eq!(sc.total_requested().get(), BigUint::from(total_requested));
                assert_eq!(sc.total_claimable().get(), BigUint::from(total_claimable));
                assert_eq!(sc.instant_pool().get(), BigUint::from(instant_pool));
                assert_eq!(sc.collected_fee().get(), BigUint::from(collected_fee));
            });
    }

    pub fn check_staking_and_requested(&mut self, total_staking: u128, total_requested: u128) {
        self.world
            .query()
            .to(PUMP_STAKING_ADDRESS)
            .whitebox(pump_staking::contract_obj, |sc| {
                assert_eq!(sc.total_staking().get(), BigUint::from(total_staking));
                assert_eq!(sc.total_requested().get(), BigUint::from(total_requested));
            });
    }

    pub fn check_pending_unstake(&mut self, holder: &TestAddress, slot: u8, amount: u128) {
        let holder = *holder;
        self.world
            .query()
            .to(PUMP_STAKING_ADDRESS)
            .whitebox(pump_staking::contract_obj, |sc| {
                assert_eq!(
                    sc.pending_unstake_amount(holder.to_managed_address(), slot),
                    BigUint::from(amount)
                );
            });
    }

    pub fn check_claimable_timestamp(&mut self, holder: &TestAddress, slot: u8, timestamp: u64) {
        let holder = *holder;
        self.world
            .query()
            .to(PUMP_STAKING_ADDRESS)
            .whitebox(pump_staking::contract_obj, |sc| {
                assert_eq!(
                    sc.get_claimable_timestamp(holder.to_managed_address(), slot),
                    timestamp
                );
            });
    }

    pub fn check_pending_unstake_slots(&mut self, holder: &TestAddress, expected_slots: &[u8]) {
        let holder = *holder;
        let expected_slots = expected_slots.to_vec();
        self.world
            .query()
            .to(PUMP_STAKING_ADDRESS)
            .whitebox(pump_staking::contract_obj, |sc| {
                let pending = sc.get_pending_unstakes(holder.to_managed_address());
                let slots: Vec<u8> = pending.iter().map(|info| info.slot).collect();
                assert_eq!(slots, expected_slots);
            });
    }

    pub fn check_roles(&mut self, owner: &TestAddress, operator: &TestAddress) {
        let owner = *owner;
        let operator = *operator;
        self.world
            .query()
            .to(PUMP_STAKING_ADDRESS)
            .whitebox(pump_staking::contract_obj, |sc| {
                assert_eq!(sc.owner().get(), owner.to_managed_address());
                assert_eq!(sc.operator().get(), operator.to_managed_address());
            });
    }

    pub fn check_pending_owner(&mut self, pending_owner: Option<&TestAddress>) {
        let pending_owner = pending_owner.copied();
        self.world
            .query()
            .to(PUMP_STAKING_ADDRESS)
            .whitebox(pump_staking::contract_obj, |sc| match pending_owner {
                Some(address) => {
                    assert_eq!(sc.pending_owner().get(), address.to_managed_address())
                }
                None => assert!(sc.pending_owner().is_empty()),
            });
    }

    pub fn check_paused(&mut self, paused: bool) {
        self.world
            .query()
            .to(PUMP_STAKING_ADDRESS)
            .whitebox(pump_staking::contract_obj, |sc| {
                assert_eq!(sc.paused().get(), paused);
            });
    }

    pub fn check_instant_unstake_fee(&mut self, fee_bps: u64) {
        self.world
            .query()
            .to(PUMP_STAKING_ADDRESS)
            .whitebox(pump_staking::contract_obj, |sc| {
                assert_eq!(sc.instant_unstake_fee().get(), fee_bps);
            });
    }

    pub fn check_staking_cap(&mut self, cap: Option<u128>) {
        self.world
            .query()
            .to(PUMP_STAKING_ADDRESS)
            .whitebox(pump_staking::contract_obj, |sc| match cap {
                Some(cap) => {
                    assert!(sc.staking_cap_set().get());
                    assert_eq!(sc.staking_cap().get(), BigUint::from(cap));
                }
                None => assert!(!sc.staking_cap_set().get()),
            });
    }

    pub fn check_user_egld_balance(&mut self, user: &TestAddress, amount: BigUint<StaticApi>) {
        self.world.check_account(*user).balance(amount);
    }

    pub fn check_user_ls_balance(&mut self, user: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .check_account(*user)
            .esdt_balance(LS_TOKEN_ID, amount);
    }

    pub fn check_contract_egld_balance(&mut self, amount: BigUint<StaticApi>) {
        self.world.check_account(PUMP_STAKING_ADDRESS).balance(amount);
    }
}
