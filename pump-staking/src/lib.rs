#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub const SLOT_COUNT: u64 = 10;
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SLOT_OFFSET_SECONDS: u64 = 18 * 3_600;
pub const SLOT_OFFSET_DAYS: u64 = SLOT_OFFSET_SECONDS / SECONDS_PER_DAY; // UTC+18 in whole days
pub const UNBONDING_PERIOD_SECONDS: u64 = 7 * SECONDS_PER_DAY;
pub const MAX_PERCENTAGE: u64 = 10_000; // 100%
pub const DEFAULT_INSTANT_UNSTAKE_FEE: u64 = 300; // 3%

pub mod access_control;
pub mod config;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod liquidity_pool;
pub mod manage;
pub mod storage;
pub mod structs;
pub mod unstake_queue;
pub mod utils;
pub mod views;

use crate::errors::*;

use contexts::base::*;

#[multiversx_sc::contract]
pub trait PumpStaking:
    access_control::AccessControlModule
    + config::ConfigModule
    + events::EventsModule
    + liquidity_pool::LiquidityPoolModule
    + manage::ManageModule
    + storage::StorageModule
    + unstake_queue::UnstakeQueueModule
    + utils::UtilsModule
    + views::ViewsModule
    + multiversx_sc_modules::default_issue_callbacks::DefaultIssueCallbacksModule
{
    #[init]
    fn init(&self, ls_token: OptionalValue<TokenIdentifier>) {
        self.owner().set(self.blockchain().get_caller());
        self.instant_unstake_fee().set(DEFAULT_INSTANT_UNSTAKE_FEE);

        if let OptionalValue::Some(token_id) = ls_token {
            require!(token_id.is_valid_esdt_identifier(), ERROR_INVALID_LS_TOKEN);
            self.ls_token().set_token_id(token_id);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("EGLD")]
    #[endpoint(stake)]
    fn stake(&self) {
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld().clone_value();
        require!(payment > BigUint::zero(), ERROR_ZERO_AMOUNT);

        let mut storage_cache = StorageCache::new(self);
        self.pool_add_stake(&payment, &mut storage_cache);

        self.stake_event(&caller, &payment);
        self.emit_ledger_update_event(&storage_cache);
        drop(storage_cache);

        self.mint_ls_token(&caller, &payment);
    }

    #[payable("*")]
    #[endpoint(unstakeRequest)]
    fn unstake_request(&self) {
        require!(
            self.allow_normal_unstake().get(),
            ERROR_NORMAL_UNSTAKE_DISABLED
        );

        let caller = self.blockchain().get_caller();
        let amount = self.get_ls_payment();
        let current_timestamp = self.blockchain().get_block_timestamp();

        let mut storage_cache = StorageCache::new(self);
        let slot = self.enqueue_unstake(&mut storage_cache, &caller, &amount, current_timestamp);

        self.unstake_request_event(&caller, &amount, slot);
        self.emit_ledger_update_event(&storage_cache);
        drop(storage_cache);

        self.burn_ls_token(&amount);
    }

    #[payable("*")]
    #[endpoint(unstakeInstant)]
    fn unstake_instant(&self) {
        require!(
            self.allow_instant_unstake().get(),
            ERROR_INSTANT_UNSTAKE_DISABLED
        );

        let caller = self.blockchain().get_caller();
        let amount = self.get_ls_payment();

        let mut storage_cache = StorageCache::new(self);
        let fee = self.pool_remove_instant(&amount, &mut storage_cache);
        let to_send = &amount - &fee;

        self.unstake_instant_event(&caller, &amount, &fee);
        self.emit_ledger_update_event(&storage_cache);
        drop(storage_cache);

        self.burn_ls_token(&amount);
        if to_send > BigUint::zero() {
            self.tx().to(&caller).egld(&to_send).transfer();
        }
    }
}
