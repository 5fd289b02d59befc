use crate::errors::{
    ERROR_NOT_OPERATOR, ERROR_NOT_OWNER, ERROR_NOT_PAUSED, ERROR_NOT_PENDING_OWNER, ERROR_PAUSED,
};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Owner and operator roles live in contract storage so that ownership can
/// move in two steps. The protocol-level SC owner is only the deployer.
#[multiversx_sc::module]
pub trait AccessControlModule:
    crate::storage::StorageModule + crate::events::EventsModule
{
    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        let caller = self.require_owner();

        self.pending_owner().set(&new_owner);
        self.ownership_transfer_started_event(&caller, &new_owner);
    }

    #[endpoint(acceptOwnership)]
    fn accept_ownership(&self) {
        let caller = self.blockchain().get_caller();
        let pending_owner_mapper = self.pending_owner();

        require!(
            !pending_owner_mapper.is_empty() && pending_owner_mapper.get() == caller,
            ERROR_NOT_PENDING_OWNER
        );

        let previous_owner = self.owner().get();
        self.owner().set(&caller);
        pending_owner_mapper.clear();

        self.ownership_transferred_event(&previous_owner, &caller);
    }

    #[endpoint(setOperator)]
    fn set_operator(&self, new_operator: ManagedAddress) {
        self.require_owner();

        let operator_mapper = self.operator();
        let old_operator = if operator_mapper.is_empty() {
            ManagedAddress::zero()
        } else {
            operator_mapper.get()
        };
        operator_mapper.set(&new_operator);

        self.set_operator_event(&old_operator, &new_operator);
    }

    #[endpoint(pause)]
    fn pause(&self) {
        let caller = self.require_owner();
        self.require_not_paused();

        self.paused().set(true);
        self.paused_event(&caller);
    }

    #[endpoint(unpause)]
    fn unpause(&self) {
        let caller = self.require_owner();
        require!(self.paused().get(), ERROR_NOT_PAUSED);

        self.paused().set(false);
        self.unpaused_event(&caller);
    }

    fn require_owner(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERROR_NOT_OWNER);
        caller
    }

    fn require_operator(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        let operator_mapper = self.operator();
        require!(
            !operator_mapper.is_empty() && operator_mapper.get() == caller,
            ERROR_NOT_OPERATOR
        );
        caller
    }

    #[inline]
    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERROR_PAUSED);
    }
}
