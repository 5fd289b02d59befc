use crate::{structs::UnstakeSlotInfo, SLOT_COUNT};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[multiversx_sc::module]
pub trait ViewsModule: crate::storage::StorageModule + crate::utils::UtilsModule {
    #[view(dateSlot)]
    fn get_date_slot(&self, timestamp: u64) -> u8 {
        self.date_slot(timestamp)
    }

    #[view(pendingUnstakeAmount)]
    fn pending_unstake_amount(&self, holder: ManagedAddress, slot: u8) -> BigUint {
        let entry_mapper = self.pending_unstake(&holder, slot);
        if entry_mapper.is_empty() {
            return BigUint::zero();
        }

        entry_mapper.get().amount
    }

    /// Zero when the slot holds nothing.
    #[view(getClaimableTimestamp)]
    fn get_claimable_timestamp(&self, holder: ManagedAddress, slot: u8) -> u64 {
        let entry_mapper = self.pending_unstake(&holder, slot);
        if entry_mapper.is_empty() {
            return 0;
        }

        entry_mapper.get().claimable_timestamp()
    }

    #[view(getPendingUnstakes)]
    fn get_pending_unstakes(
        &self,
        holder: ManagedAddress,
    ) -> ManagedVec<UnstakeSlotInfo<Self::Api>> {
        let mut result = ManagedVec::new();

        for slot in 0..SLOT_COUNT as u8 {
            let entry_mapper = self.pending_unstake(&holder, slot);
            if entry_mapper.is_empty() {
                continue;
            }

            let entry = entry_mapper.get();
            result.push(UnstakeSlotInfo {
                slot,
                claimable_timestamp: entry.claimable_timestamp(),
                amount: entry.amount,
            });
        }

        result
    }
}
