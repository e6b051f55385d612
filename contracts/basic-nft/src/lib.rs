#![no_std]

use soroban_sdk::{contract, contractmeta, Address, Env, String};

contractmeta!(key = "Description", val = "Basic NFT");

mod contract;
mod storage;

#[cfg(test)]
mod test;
pub mod errors;
pub mod events;

pub use errors::NonFungibleTokenError;

#[contract]
pub struct BasicNft;

pub trait NonFungibleToken {

    fn __constructor(e: &Env, name: String, symbol: String, uri: String);

    /// Mints the next token to `to`.
    ///
    /// Token ids are assigned sequentially, starting at 0.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `to` - Account of the token's owner.
    ///
    /// # Returns
    ///
    /// The id of the freshly minted token.
    ///
    /// # Errors
    ///
    /// * [`NonFungibleTokenError::TokenIDsAreDepleted`] - When every possible
    ///   `token_id` is already in use.
    ///
    /// # Events
    ///
    /// * topics - `["mint", to: Address]`
    /// * data - `[token_id: u64]`
    fn mint(e: &Env, to: Address) -> u64;

    /// Transfers `token_id` token from `from` to `to`.
    ///
    /// WARNING: Note that the caller is responsible to confirm that the
    /// recipient is capable of receiving the `Non-Fungible` or else the NFT
    /// may be permanently lost.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `from` - Account of the sender.
    /// * `to` - Account of the recipient.
    /// * `token_id` - Token id as a number.
    ///
    /// # Errors
    ///
    /// * [`NonFungibleTokenError::NonExistentToken`] - When the token does not exist.
    /// * [`NonFungibleTokenError::IncorrectOwner`] - When `from` is not the owner.
    ///
    /// # Events
    ///
    /// * topics - `["transfer", from: Address, to: Address]`
    /// * data - `[token_id: u64]`
    fn transfer(e: &Env, from: Address, to: Address, token_id: u64);

    /// Transfers `token_id` token from `from` to `to` on behalf of `spender`.
    ///
    /// The spender must be the owner, the approved address of the token, or
    /// an operator approved for all of the owner's tokens. Any approval on
    /// the token is cleared.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `spender` - Account authorized to move the token.
    /// * `from` - Account of the sender.
    /// * `to` - Account of the recipient.
    /// * `token_id` - Token id as a number.
    ///
    /// # Errors
    ///
    /// * [`NonFungibleTokenError::NonExistentToken`] - When the token does not exist.
    /// * [`NonFungibleTokenError::IncorrectOwner`] - When `from` is not the owner.
    /// * [`NonFungibleTokenError::InsufficientApproval`] - When `spender` holds no approval.
    ///
    /// # Events
    ///
    /// * topics - `["transfer", from: Address, to: Address]`
    /// * data - `[token_id: u64]`
    fn transfer_from(e: &Env, spender: Address, from: Address, to: Address, token_id: u64);

    /// Gives `approved` permission to transfer `token_id`.
    ///
    /// Only one address can be approved at a time; a new approval replaces
    /// the previous one. Passing `live_until_ledger = 0` revokes it.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `approver` - The owner of the token.
    /// * `approved` - Account allowed to transfer the token.
    /// * `token_id` - Token id as a number.
    /// * `live_until_ledger` - Last ledger on which the approval is valid.
    ///
    /// # Errors
    ///
    /// * [`NonFungibleTokenError::NonExistentToken`] - When the token does not exist.
    /// * [`NonFungibleTokenError::InvalidApprover`] - When `approver` is not the owner.
    /// * [`NonFungibleTokenError::InvalidLiveUntilLedger`] - When the ledger is in the past.
    ///
    /// # Events
    ///
    /// * topics - `["approve", approver: Address, token_id: u64]`
    /// * data - `[approved: Address, live_until_ledger: u32]`
    fn approve(e: &Env, approver: Address, approved: Address, token_id: u64, live_until_ledger: u32);

    /// Approves or revokes `operator` for every token of `owner`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `owner` - Account owning the tokens.
    /// * `operator` - Account allowed to transfer any of them.
    /// * `live_until_ledger` - Last ledger on which the approval is valid, `0` revokes.
    ///
    /// # Events
    ///
    /// * topics - `["approve_for_all", owner: Address]`
    /// * data - `[operator: Address, live_until_ledger: u32]`
    fn approve_for_all(e: &Env, owner: Address, operator: Address, live_until_ledger: u32);

    /// Returns the approved address for `token_id`, if any and still live.
    fn get_approved(e: &Env, token_id: u64) -> Option<Address>;

    /// Returns whether `operator` may transfer every token of `owner`.
    fn is_approved_for_all(e: &Env, owner: Address, operator: Address) -> bool;

    /// Returns the number of tokens in `owner`'s account.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `owner` - Account of the token's owner.
    fn balance(e: &Env, owner: Address) -> u32;

    /// Returns the address of the owner of the given `token_id`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `token_id` - Token id as a number.
    ///
    /// # Notes
    ///
    /// If the token does not exist, this function is expected to panic.
    fn owner_of(e: &Env, token_id: u64) -> Address;

    /// Returns the id the next minted token will receive.
    fn token_counter(e: &Env) -> u64;

    /// Returns the token collection name.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    fn name(e: &Env) -> String;

    /// Returns the token collection symbol.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    fn symbol(e: &Env) -> String;

    /// Returns the Uniform Resource Identifier (URI) for `token_id` token.
    ///
    /// Every token of the collection shares the URI set at construction.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `token_id` - Token id as a number.
    ///
    /// # Notes
    ///
    /// If the token does not exist, this function is expected to panic.
    fn token_uri(e: &Env, token_id: u64) -> String;
}
