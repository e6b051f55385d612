//! Calls into the token registry of a listed token.

use soroban_sdk::{contractclient, Address, Env};

/// The part of the non-fungible token interface the marketplace relies on.
#[allow(dead_code)]
#[contractclient(name = "NftClient")]
pub trait NonFungibleTokenInterface {
    fn owner_of(e: Env, token_id: u64) -> Address;

    fn get_approved(e: Env, token_id: u64) -> Option<Address>;

    fn is_approved_for_all(e: Env, owner: Address, operator: Address) -> bool;

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, token_id: u64);
}

/// Whether the marketplace may move `token_id` on behalf of `owner`.
pub fn marketplace_is_approved(e: &Env, nft: &NftClient, owner: &Address, token_id: u64) -> bool {
    let marketplace = e.current_contract_address();
    nft.get_approved(&token_id).is_some_and(|approved| approved == marketplace)
        || nft.is_approved_for_all(owner, &marketplace)
}
