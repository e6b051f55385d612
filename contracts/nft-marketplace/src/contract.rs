//! Marketplace - listings, sales and seller proceeds

use soroban_sdk::{contractimpl, log, panic_with_error, token, Address, Env};
use crate::errors::MarketplaceError;
use crate::nft::{self, NftClient};
use crate::storage::{self, Listing};
use crate::{events, guard, Marketplace, NftMarketplace, NftMarketplaceArgs, NftMarketplaceClient};

#[contractimpl]
impl Marketplace for NftMarketplace {

    fn __constructor(e: &Env, payment_token: Address) {
        storage::set_payment_token(e, &payment_token);
    }

    fn list_item(e: &Env, seller: Address, nft_contract: Address, token_id: u64, price: i128) {
        seller.require_auth();

        let nft = NftClient::new(e, &nft_contract);
        let owner = nft.owner_of(&token_id);

        // a listing whose seller no longer owns the token is stale and gets replaced
        if storage::listing(e, &nft_contract, token_id).is_some_and(|listing| listing.seller == owner) {
            panic_with_error!(e, MarketplaceError::AlreadyListed);
        }
        if owner != seller {
            panic_with_error!(e, MarketplaceError::NotOwner);
        }
        require_positive(e, price);
        if !nft::marketplace_is_approved(e, &nft, &seller, token_id) {
            panic_with_error!(e, MarketplaceError::NotApprovedForMarketplace);
        }

        storage::set_listing(e, &nft_contract, token_id, &Listing { seller: seller.clone(), price });

        log!(e, "listed token {} at {}", token_id, price);
        events::ItemListed { seller, nft_contract, token_id, price }.publish(e);
    }

    fn update_item(e: &Env, seller: Address, nft_contract: Address, token_id: u64, new_price: i128) {
        seller.require_auth();

        let mut listing = seller_listing(e, &seller, &nft_contract, token_id);
        require_positive(e, new_price);

        listing.price = new_price;
        storage::set_listing(e, &nft_contract, token_id, &listing);

        log!(e, "updated token {} to {}", token_id, new_price);
        events::ItemListed { seller, nft_contract, token_id, price: new_price }.publish(e);
    }

    fn cancel_item(e: &Env, seller: Address, nft_contract: Address, token_id: u64) {
        seller.require_auth();

        seller_listing(e, &seller, &nft_contract, token_id);
        storage::remove_listing(e, &nft_contract, token_id);

        log!(e, "cancelled listing of token {}", token_id);
        events::ItemCancelled { seller, nft_contract, token_id }.publish(e);
    }

    fn buy_item(e: &Env, buyer: Address, nft_contract: Address, token_id: u64, payment: i128) {
        buyer.require_auth();

        guard::non_reentrant(e, || {
            let Some(listing) = storage::listing(e, &nft_contract, token_id) else {
                panic_with_error!(e, MarketplaceError::ItemNotAlreadyListed);
            };
            if payment < listing.price {
                panic_with_error!(e, MarketplaceError::PriceNotMet);
            }

            // effects before any call leaves this contract
            storage::remove_listing(e, &nft_contract, token_id);
            let Some(earned) = storage::proceeds(e, &listing.seller).checked_add(listing.price) else {
                panic_with_error!(e, MarketplaceError::MathOverflow);
            };
            storage::set_proceeds(e, &listing.seller, earned);

            let marketplace = e.current_contract_address();
            payment_client(e).transfer(&buyer, &marketplace, &listing.price);
            NftClient::new(e, &nft_contract).transfer_from(&marketplace, &listing.seller, &buyer, &token_id);

            log!(e, "sold token {} for {}", token_id, listing.price);
            events::ItemBought { buyer, nft_contract, token_id, price: listing.price }.publish(e);
        })
    }

    fn withdraw_proceeds(e: &Env, seller: Address) -> i128 {
        seller.require_auth();

        guard::non_reentrant(e, || {
            let amount = storage::proceeds(e, &seller);
            if amount <= 0 {
                panic_with_error!(e, MarketplaceError::NoProceeds);
            }

            storage::set_proceeds(e, &seller, 0);
            payment_client(e).transfer(&e.current_contract_address(), &seller, &amount);

            log!(e, "withdrew {}", amount);
            events::ProceedsWithdrawn { seller, amount }.publish(e);

            amount
        })
    }

    fn get_specific_listing(e: &Env, nft_contract: Address, token_id: u64) -> Option<Listing> {
        storage::listing(e, &nft_contract, token_id)
    }

    fn get_seller_earned_money(e: &Env, seller: Address) -> i128 {
        storage::proceeds(e, &seller)
    }

    fn payment_token(e: &Env) -> Address {
        storage::payment_token(e)
            .unwrap_or_else(|| panic_with_error!(e, MarketplaceError::UnsetPaymentToken))
    }

}

fn payment_client<'a>(e: &Env) -> token::Client<'a> {
    token::Client::new(e, &NftMarketplace::payment_token(e))
}

fn require_positive(e: &Env, price: i128) {
    if price <= 0 {
        panic_with_error!(e, MarketplaceError::PriceMustBeAboveZero);
    }
}

fn require_token_owner(e: &Env, nft: &NftClient, seller: &Address, token_id: u64) {
    if nft.owner_of(&token_id) != *seller {
        panic_with_error!(e, MarketplaceError::NotOwner);
    }
}

/// Loads the listing `seller` is allowed to modify.
///
/// Token ownership is checked first: a non-owner gets `NotOwner` whether or
/// not the token is listed.
fn seller_listing(e: &Env, seller: &Address, nft_contract: &Address, token_id: u64) -> Listing {
    require_token_owner(e, &NftClient::new(e, nft_contract), seller, token_id);

    let Some(listing) = storage::listing(e, nft_contract, token_id) else {
        panic_with_error!(e, MarketplaceError::ItemNotAlreadyListed);
    };
    if listing.seller != *seller {
        panic_with_error!(e, MarketplaceError::NotOwner);
    }
    listing
}
