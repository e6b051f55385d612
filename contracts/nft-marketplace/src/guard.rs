//! Reentrancy lock for entry points that call out to other contracts.
//!
//! The flag lives in instance storage. A failed invocation rolls back every
//! write, so a panic between `enter` and `leave` cannot leave it set.

use soroban_sdk::{panic_with_error, Env};

use crate::errors::MarketplaceError;
use crate::storage::DataKey;

pub fn enter(e: &Env) {
    let entered: bool = e.storage().instance().get(&DataKey::Entered).unwrap_or(false);
    if entered {
        panic_with_error!(e, MarketplaceError::ReentrantCall);
    }
    e.storage().instance().set(&DataKey::Entered, &true);
}

pub fn leave(e: &Env) {
    e.storage().instance().remove(&DataKey::Entered);
}

/// Runs `f` with the lock held.
pub fn non_reentrant<T>(e: &Env, f: impl FnOnce() -> T) -> T {
    enter(e);
    let result = f();
    leave(e);
    result
}
