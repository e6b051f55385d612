#![no_std]

use soroban_sdk::{contract, contractmeta, Address, Env};

contractmeta!(key = "Description", val = "NFT Marketplace");

mod contract;
mod guard;
mod nft;
mod storage;

pub mod errors;
pub mod events;

pub use errors::MarketplaceError;
pub use storage::Listing;

#[contract]
pub struct NftMarketplace;

pub trait Marketplace {

    fn __constructor(e: &Env, payment_token: Address);

    /// List `token_id` of `nft_contract` for sale at `price`.
    ///
    /// The token stays with the seller; the marketplace must have been
    /// approved on `nft_contract` so it can move the token when sold.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `seller` - Current owner of the token.
    /// * `nft_contract` - Address of the token registry.
    /// * `token_id` - Token id as a number.
    /// * `price` - Asking price in the smallest unit of the payment token.
    ///
    /// # Errors
    ///
    /// * [`MarketplaceError::AlreadyListed`] - When a listing already exists.
    /// * [`MarketplaceError::NotOwner`] - When `seller` does not own the token.
    /// * [`MarketplaceError::PriceMustBeAboveZero`] - When `price` is not positive.
    /// * [`MarketplaceError::NotApprovedForMarketplace`] - When the marketplace
    ///   may not transfer the token.
    ///
    /// # Events
    ///
    /// * topics - `["item_listed", seller: Address, nft_contract: Address]`
    /// * data - `[token_id: u64, price: i128]`
    fn list_item(e: &Env, seller: Address, nft_contract: Address, token_id: u64, price: i128);

    /// Change the price of an active listing.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `seller` - Owner of the token and of the listing.
    /// * `nft_contract` - Address of the token registry.
    /// * `token_id` - Token id as a number.
    /// * `new_price` - New asking price.
    ///
    /// # Errors
    ///
    /// * [`MarketplaceError::NotOwner`] - When `seller` does not own the token
    ///   or did not create the listing.
    /// * [`MarketplaceError::ItemNotAlreadyListed`] - When there is no listing.
    /// * [`MarketplaceError::PriceMustBeAboveZero`] - When `new_price` is not positive.
    ///
    /// # Events
    ///
    /// * topics - `["item_listed", seller: Address, nft_contract: Address]`
    /// * data - `[token_id: u64, price: i128]`
    fn update_item(e: &Env, seller: Address, nft_contract: Address, token_id: u64, new_price: i128);

    /// Remove an active listing.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `seller` - Owner of the token and of the listing.
    /// * `nft_contract` - Address of the token registry.
    /// * `token_id` - Token id as a number.
    ///
    /// # Errors
    ///
    /// * [`MarketplaceError::NotOwner`] - When `seller` does not own the token
    ///   or did not create the listing.
    /// * [`MarketplaceError::ItemNotAlreadyListed`] - When there is no listing.
    ///
    /// # Events
    ///
    /// * topics - `["item_cancelled", seller: Address, nft_contract: Address]`
    /// * data - `[token_id: u64]`
    fn cancel_item(e: &Env, seller: Address, nft_contract: Address, token_id: u64);

    /// Buy a listed token.
    ///
    /// `payment` is the most the buyer agrees to spend; exactly the listing
    /// price is charged and credited to the seller's proceeds. The token is
    /// transferred from the seller to `buyer`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `buyer` - Account paying for and receiving the token.
    /// * `nft_contract` - Address of the token registry.
    /// * `token_id` - Token id as a number.
    /// * `payment` - Amount offered, in the smallest unit of the payment token.
    ///
    /// # Errors
    ///
    /// * [`MarketplaceError::ItemNotAlreadyListed`] - When there is no listing.
    /// * [`MarketplaceError::PriceNotMet`] - When `payment` is below the price.
    /// * [`MarketplaceError::ReentrantCall`] - When called back during a sale.
    ///
    /// # Events
    ///
    /// * topics - `["item_bought", buyer: Address, nft_contract: Address]`
    /// * data - `[token_id: u64, price: i128]`
    fn buy_item(e: &Env, buyer: Address, nft_contract: Address, token_id: u64, payment: i128);

    /// Pay out everything `seller` earned from sales.
    ///
    /// # Returns
    ///
    /// The amount transferred.
    ///
    /// # Errors
    ///
    /// * [`MarketplaceError::NoProceeds`] - When there is nothing to withdraw.
    ///
    /// # Events
    ///
    /// * topics - `["proceeds_withdrawn", seller: Address]`
    /// * data - `[amount: i128]`
    fn withdraw_proceeds(e: &Env, seller: Address) -> i128;

    /// Returns the active listing of `token_id`, `None` when it is not listed.
    fn get_specific_listing(e: &Env, nft_contract: Address, token_id: u64) -> Option<Listing>;

    /// Returns the proceeds `seller` can withdraw.
    fn get_seller_earned_money(e: &Env, seller: Address) -> i128;

    /// Returns the token contract payments are made in.
    fn payment_token(e: &Env) -> Address;
}
