multiversx_sc::imports!();

use crate::{contexts::base::StorageCache, errors::*, structs::PendingUnstake, SLOT_COUNT};

#[multiversx_sc::module]
pub trait UnstakeQueueModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::utils::UtilsModule
{
    #[endpoint(claimSlot)]
    fn claim_slot(&self, slot: u8) {
        require!(self.allow_claim().get(), ERROR_CLAIM_DISABLED);
        require!((slot as u64) < SLOT_COUNT, ERROR_INVALID_SLOT);

        let caller = self.blockchain().get_caller();
        let current_timestamp = self.blockchain().get_block_timestamp();
        let mut storage_cache = StorageCache::new(self);

        let entry_mapper = self.pending_unstake(&caller, slot);
        require!(!entry_mapper.is_empty(), ERROR_NO_PENDING_UNSTAKE);

        let entry = entry_mapper.get();
        require!(
            entry.is_claimable(current_timestamp),
            ERROR_CLAIMABLE_TIME_NOT_REACHED
        );

        self.dequeue_claimed(&mut storage_cache, &entry.amount);
        entry_mapper.clear();

        self.claim_slot_event(&caller, &entry.amount, slot);
        self.emit_ledger_update_event(&storage_cache);
        drop(storage_cache);

        self.tx().to(&caller).egld(&entry.amount).transfer();
    }

    #[endpoint(claimAll)]
    fn claim_all(&self) {
        require!(self.allow_claim().get(), ERROR_CLAIM_DISABLED);

        let caller = self.blockchain().get_caller();
        let current_timestamp = self.blockchain().get_block_timestamp();
        let mut storage_cache = StorageCache::new(self);

        let mut has_pending = false;
        let mut to_send = BigUint::zero();

        for slot in 0..SLOT_COUNT as u8 {
            let entry_mapper = self.pending_unstake(&caller, slot);
            if entry_mapper.is_empty() {
                continue;
            }

            has_pending = true;

            let entry = entry_mapper.get();
            if !entry.is_claimable(current_timestamp) {
                continue;
            }

            self.dequeue_claimed(&mut storage_cache, &entry.amount);
            entry_mapper.clear();

            self.claim_slot_event(&caller, &entry.amount, slot);
            to_send += entry.amount;
        }

        require!(has_pending, ERROR_NO_PENDING_UNSTAKE);
        require!(to_send > BigUint::zero(), ERROR_CLAIMABLE_TIME_NOT_REACHED);

        self.emit_ledger_update_event(&storage_cache);
        drop(storage_cache);

        self.tx().to(&caller).egld(&to_send).transfer();
    }

    /// Queues `amount` for `holder` in the slot of `current_timestamp`.
    /// A slot still holding an entry from an earlier day blocks the request;
    /// an entry from the same day is topped up.
    fn enqueue_unstake(
        &self,
        storage_cache: &mut StorageCache<Self>,
        holder: &ManagedAddress,
        amount: &BigUint,
        current_timestamp: u64,
    ) -> u8 {
        let slot = self.date_slot(current_timestamp);
        let entry_mapper = self.pending_unstake(holder, slot);

        let queued_amount = if entry_mapper.is_empty() {
            amount.clone()
        } else {
            let entry = entry_mapper.get();
            require!(
                self.shifted_day(entry.request_timestamp) == self.shifted_day(current_timestamp),
                ERROR_CLAIM_PREVIOUS_UNSTAKE
            );
            entry.amount + amount
        };

        entry_mapper.set(PendingUnstake::new(queued_amount, current_timestamp));

        storage_cache.total_staking -= amount;
        storage_cache.total_requested += amount;

        slot
    }

    fn dequeue_claimed(&self, storage_cache: &mut StorageCache<Self>, amount: &BigUint) {
        require!(
            storage_cache.total_claimable >= *amount,
            ERROR_INSUFFICIENT_CLAIMABLE
        );

        storage_cache.total_claimable -= amount;
        storage_cache.total_requested -= amount;
    }
}
