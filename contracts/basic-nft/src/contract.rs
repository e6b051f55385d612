//! NFT - ownership, approvals and minting

use soroban_sdk::{contractimpl, log, panic_with_error, Address, Env, String};
use crate::storage::{self, NFTStorageKey};
use crate::{errors, events, BasicNft, BasicNftArgs, BasicNftClient, NonFungibleToken};

#[contractimpl]
impl NonFungibleToken for BasicNft {

    fn __constructor(e: &Env, name: String, symbol: String, uri: String) {
        e.storage().instance().set(&NFTStorageKey::Name, &name);
        e.storage().instance().set(&NFTStorageKey::Symbol, &symbol);
        e.storage().instance().set(&NFTStorageKey::URI, &uri);
        storage::extend_instance(e);
    }

    fn mint(e: &Env, to: Address) -> u64 {
        to.require_auth();

        let token_id = storage::token_counter(e);
        let Some(next_token_id) = token_id.checked_add(1) else {
            panic_with_error!(e, errors::NonFungibleTokenError::TokenIDsAreDepleted);
        };

        storage::set_owner(e, token_id, &to);
        increase_balance(e, &to);
        storage::set_token_counter(e, next_token_id);

        log!(e, "minted token {} to {}", token_id, to);
        events::Mint { to, token_id }.publish(e);

        token_id
    }

    fn transfer(e: &Env, from: Address, to: Address, token_id: u64) {
        from.require_auth();

        if Self::owner_of(e, token_id) != from {
            panic_with_error!(e, errors::NonFungibleTokenError::IncorrectOwner);
        }

        update(e, &from, &to, token_id);
    }

    fn transfer_from(e: &Env, spender: Address, from: Address, to: Address, token_id: u64) {
        spender.require_auth();

        let owner = Self::owner_of(e, token_id);
        if owner != from {
            panic_with_error!(e, errors::NonFungibleTokenError::IncorrectOwner);
        }

        let authorized = spender == owner
            || storage::approved(e, token_id).is_some_and(|approved| approved == spender)
            || storage::is_approved_for_all(e, &owner, &spender);
        if !authorized {
            panic_with_error!(e, errors::NonFungibleTokenError::InsufficientApproval);
        }

        update(e, &from, &to, token_id);
    }

    fn approve(e: &Env, approver: Address, approved: Address, token_id: u64, live_until_ledger: u32) {
        approver.require_auth();

        if Self::owner_of(e, token_id) != approver {
            panic_with_error!(e, errors::NonFungibleTokenError::InvalidApprover);
        }

        storage::set_approval(e, token_id, &approved, live_until_ledger);

        events::Approve { approver, token_id, approved, live_until_ledger }.publish(e);
    }

    fn approve_for_all(e: &Env, owner: Address, operator: Address, live_until_ledger: u32) {
        owner.require_auth();

        storage::set_approval_for_all(e, &owner, &operator, live_until_ledger);

        events::ApproveForAll { owner, operator, live_until_ledger }.publish(e);
    }

    fn get_approved(e: &Env, token_id: u64) -> Option<Address> {
        Self::owner_of(e, token_id);
        storage::approved(e, token_id)
    }

    fn is_approved_for_all(e: &Env, owner: Address, operator: Address) -> bool {
        storage::is_approved_for_all(e, &owner, &operator)
    }

    fn balance(e: &Env, owner: Address) -> u32 {
        storage::balance(e, &owner)
    }

    fn owner_of(e: &Env, token_id: u64) -> Address {
        storage::owner(e, token_id)
            .unwrap_or_else(|| panic_with_error!(e, errors::NonFungibleTokenError::NonExistentToken))
    }

    fn token_counter(e: &Env) -> u64 {
        storage::token_counter(e)
    }

    fn name(e: &Env) -> String {
        e.storage()
            .instance()
            .get(&NFTStorageKey::Name)
            .unwrap_or_else(|| panic_with_error!(e, errors::NonFungibleTokenError::UnsetMetadata))
    }

    fn symbol(e: &Env) -> String {
        e.storage()
            .instance()
            .get(&NFTStorageKey::Symbol)
            .unwrap_or_else(|| panic_with_error!(e, errors::NonFungibleTokenError::UnsetMetadata))
    }

    fn token_uri(e: &Env, token_id: u64) -> String {
        Self::owner_of(e, token_id);
        e.storage()
            .instance()
            .get(&NFTStorageKey::URI)
            .unwrap_or_else(|| panic_with_error!(e, errors::NonFungibleTokenError::UnsetMetadata))
    }

}

/// Moves `token_id` from `from` to `to`, dropping any per-token approval.
fn update(e: &Env, from: &Address, to: &Address, token_id: u64) {
    storage::clear_approval(e, token_id);

    let Some(from_balance) = storage::balance(e, from).checked_sub(1) else {
        panic_with_error!(e, errors::NonFungibleTokenError::MathOverflow);
    };
    storage::set_balance(e, from, from_balance);
    increase_balance(e, to);
    storage::set_owner(e, token_id, to);

    log!(e, "token {} moved from {} to {}", token_id, from.clone(), to.clone());
    events::Transfer { from: from.clone(), to: to.clone(), token_id }.publish(e);
}

fn increase_balance(e: &Env, owner: &Address) {
    let Some(balance) = storage::balance(e, owner).checked_add(1) else {
        panic_with_error!(e, errors::NonFungibleTokenError::MathOverflow);
    };
    storage::set_balance(e, owner, balance);
}
