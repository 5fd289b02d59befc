multiversx_sc::imports!();

pub struct StorageCache<'a, C>
where
    C: crate::storage::StorageModule,
{
    sc_ref: &'a C,
    pub total_staking: BigUint<C::Api>,
    pub pending_stake: BigUint<C::Api>,
    pub total_requested: BigUint<C::Api>,
    pub total_claimable: BigUint<C::Api>,
    pub instant_pool: BigUint<C::Api>,
    pub collected_fee: BigUint<C::Api>,
}

impl<'a, C> StorageCache<'a, C>
where
    C: crate::storage::StorageModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        StorageCache {
            total_staking: sc_ref.total_staking().get(),
            pending_stake: sc_ref.pending_stake().get(),
            total_requested: sc_ref.total_requested().get(),
            total_claimable: sc_ref.total_claimable().get(),
            instant_pool: sc_ref.instant_pool().get(),
            collected_fee: sc_ref.collected_fee().get(),
            sc_ref,
        }
    }
}

impl<C> Drop for StorageCache<'_, C>
where
    C: crate::storage::StorageModule,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.total_staking().set(&self.total_staking);
        self.sc_ref.pending_stake().set(&self.pending_stake);
        self.sc_ref.total_requested().set(&self.total_requested);
        self.sc_ref.total_claimable().set(&self.total_claimable);
        self.sc_ref.instant_pool().set(&self.instant_pool);
        self.sc_ref.collected_fee().set(&self.collected_fee);
    }
}
