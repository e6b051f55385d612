use soroban_sdk::{contracttype, Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;
pub const LISTING_EXTEND_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const LISTING_TTL_THRESHOLD: u32 = LISTING_EXTEND_AMOUNT - DAY_IN_LEDGERS;
pub const PROCEEDS_EXTEND_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PROCEEDS_TTL_THRESHOLD: u32 = PROCEEDS_EXTEND_AMOUNT - DAY_IN_LEDGERS;
pub const INSTANCE_EXTEND_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_EXTEND_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
pub enum DataKey {
    PaymentToken,
    Entered,
    Listing(Address /* nft_contract */, u64 /* token_id */),
    Proceeds(Address /* seller */),
}

/// An active sale offer. Only exists while the token is listed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub seller: Address,
    pub price: i128,
}

pub fn listing(e: &Env, nft_contract: &Address, token_id: u64) -> Option<Listing> {
    e.storage()
        .persistent()
        .get(&DataKey::Listing(nft_contract.clone(), token_id))
}

pub fn set_listing(e: &Env, nft_contract: &Address, token_id: u64, listing: &Listing) {
    let key = DataKey::Listing(nft_contract.clone(), token_id);
    e.storage().persistent().set(&key, listing);
    extend_instance(e);
    e.storage()
        .persistent()
        .extend_ttl(&key, LISTING_TTL_THRESHOLD, LISTING_EXTEND_AMOUNT);
}

pub fn remove_listing(e: &Env, nft_contract: &Address, token_id: u64) {
    e.storage()
        .persistent()
        .remove(&DataKey::Listing(nft_contract.clone(), token_id));
}

pub fn proceeds(e: &Env, seller: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Proceeds(seller.clone()))
        .unwrap_or(0)
}

pub fn set_proceeds(e: &Env, seller: &Address, amount: i128) {
    let key = DataKey::Proceeds(seller.clone());
    if amount == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, PROCEEDS_TTL_THRESHOLD, PROCEEDS_EXTEND_AMOUNT);
}

pub fn payment_token(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::PaymentToken)
}

pub fn set_payment_token(e: &Env, payment_token: &Address) {
    e.storage().instance().set(&DataKey::PaymentToken, payment_token);
    extend_instance(e);
}

/// Keeps the contract instance, with the payment token, alive.
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_EXTEND_AMOUNT);
}
