use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::errors::NonFungibleTokenError;

const DAY_IN_LEDGERS: u32 = 17_280;
pub const TOKEN_EXTEND_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const TOKEN_TTL_THRESHOLD: u32 = TOKEN_EXTEND_AMOUNT - DAY_IN_LEDGERS;
pub const INSTANCE_EXTEND_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_EXTEND_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
pub enum NFTStorageKey {
    Owner(u64),
    Balance(Address),
    Approval(u64),
    ApprovalForAll(Address /* owner */, Address /* operator */),
    TokenCounter,
    Name,
    Symbol,
    URI,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalData {
    pub approved: Address,
    pub live_until_ledger: u32,
}

pub fn owner(e: &Env, token_id: u64) -> Option<Address> {
    let key = NFTStorageKey::Owner(token_id);
    let owner = e.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, TOKEN_TTL_THRESHOLD, TOKEN_EXTEND_AMOUNT);
    }
    owner
}

pub fn set_owner(e: &Env, token_id: u64, owner: &Address) {
    let key = NFTStorageKey::Owner(token_id);
    e.storage().persistent().set(&key, owner);
    e.storage()
        .persistent()
        .extend_ttl(&key, TOKEN_TTL_THRESHOLD, TOKEN_EXTEND_AMOUNT);
}

pub fn balance(e: &Env, owner: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&NFTStorageKey::Balance(owner.clone()))
        .unwrap_or(0)
}

pub fn set_balance(e: &Env, owner: &Address, balance: u32) {
    let key = NFTStorageKey::Balance(owner.clone());
    e.storage().persistent().set(&key, &balance);
    e.storage()
        .persistent()
        .extend_ttl(&key, TOKEN_TTL_THRESHOLD, TOKEN_EXTEND_AMOUNT);
}

/// Approvals live in temporary storage and expire with their entry, so the
/// entry TTL is aligned with `live_until_ledger`.
pub fn set_approval(e: &Env, token_id: u64, approved: &Address, live_until_ledger: u32) {
    let key = NFTStorageKey::Approval(token_id);

    if live_until_ledger == 0 {
        e.storage().temporary().remove(&key);
        return;
    }

    let current_ledger = e.ledger().sequence();
    check_live_until_ledger(e, current_ledger, live_until_ledger);

    let data = ApprovalData { approved: approved.clone(), live_until_ledger };
    e.storage().temporary().set(&key, &data);

    let live_for = live_until_ledger - current_ledger;
    e.storage().temporary().extend_ttl(&key, live_for, live_for);
}

/// Approvals cannot outlive the longest TTL a temporary entry may get.
fn check_live_until_ledger(e: &Env, current_ledger: u32, live_until_ledger: u32) {
    if live_until_ledger < current_ledger || live_until_ledger > e.ledger().max_live_until_ledger() {
        panic_with_error!(e, NonFungibleTokenError::InvalidLiveUntilLedger);
    }
}

pub fn approved(e: &Env, token_id: u64) -> Option<Address> {
    e.storage()
        .temporary()
        .get::<_, ApprovalData>(&NFTStorageKey::Approval(token_id))
        .filter(|data| data.live_until_ledger >= e.ledger().sequence())
        .map(|data| data.approved)
}

pub fn clear_approval(e: &Env, token_id: u64) {
    e.storage().temporary().remove(&NFTStorageKey::Approval(token_id));
}

pub fn set_approval_for_all(e: &Env, owner: &Address, operator: &Address, live_until_ledger: u32) {
    let key = NFTStorageKey::ApprovalForAll(owner.clone(), operator.clone());

    if live_until_ledger == 0 {
        e.storage().temporary().remove(&key);
        return;
    }

    let current_ledger = e.ledger().sequence();
    check_live_until_ledger(e, current_ledger, live_until_ledger);

    e.storage().temporary().set(&key, &live_until_ledger);

    let live_for = live_until_ledger - current_ledger;
    e.storage().temporary().extend_ttl(&key, live_for, live_for);
}

pub fn is_approved_for_all(e: &Env, owner: &Address, operator: &Address) -> bool {
    e.storage()
        .temporary()
        .get::<_, u32>(&NFTStorageKey::ApprovalForAll(owner.clone(), operator.clone()))
        .is_some_and(|live_until_ledger| live_until_ledger >= e.ledger().sequence())
}

pub fn token_counter(e: &Env) -> u64 {
    e.storage().instance().get(&NFTStorageKey::TokenCounter).unwrap_or(0)
}

pub fn set_token_counter(e: &Env, counter: u64) {
    e.storage().instance().set(&NFTStorageKey::TokenCounter, &counter);
    extend_instance(e);
}

/// Keeps the contract instance, with its metadata and counter, alive.
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_EXTEND_AMOUNT);
}
