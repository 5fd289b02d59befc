use crate::{MAX_PERCENTAGE, SECONDS_PER_DAY, SLOT_COUNT, SLOT_OFFSET_DAYS};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait UtilsModule {
    /// Day index on the UTC+18 clock. The offset is counted in whole days,
    /// so bucket boundaries stay on UTC midnight.
    fn shifted_day(&self, timestamp: u64) -> u64 {
        timestamp / SECONDS_PER_DAY + SLOT_OFFSET_DAYS
    }

    /// Rotating daily bucket used to group unstake requests. Repeats every
    /// `SLOT_COUNT` days.
    fn date_slot(&self, timestamp: u64) -> u8 {
        (self.shifted_day(timestamp) % SLOT_COUNT) as u8
    }

    fn calculate_split(&self, total_amount: &BigUint, cut_bps: u64) -> BigUint {
        total_amount * &BigUint::from(cut_bps) / MAX_PERCENTAGE
    }
}
