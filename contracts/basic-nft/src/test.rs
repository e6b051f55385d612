extern crate std;

use soroban_sdk::{testutils::{storage::Instance as _, Address as _, Ledger}, Address, Env, Error, String};
use crate::{errors::NonFungibleTokenError, storage, BasicNft, BasicNftClient};

fn create_client<'a>(e: &Env) -> BasicNftClient<'a> {
    let address = e.register(
        BasicNft,
        (
            &String::from_str(e, "Dogie"),
            &String::from_str(e, "DOG"),
            &String::from_str(e, "ipfs://bafybeig37ioir76s7mg5oobetncojcm3c3hxasyd4rvid4jqhy4gkaheg4/?filename=0-PUG.json"),
        ),
    );
    BasicNftClient::new(e, &address)
}

#[test]
fn test_metadata() {
    let e = Env::default();
    e.mock_all_auths();

    let client = create_client(&e);

    assert_eq!(client.name(), String::from_str(&e, "Dogie"));
    assert_eq!(client.symbol(), String::from_str(&e, "DOG"));
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let e = Env::default();
    e.mock_all_auths();

    let client = create_client(&e);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);

    assert_eq!(client.token_counter(), 0);
    assert_eq!(client.mint(&alice), 0);
    assert_eq!(client.mint(&bob), 1);
    assert_eq!(client.mint(&alice), 2);

    assert_eq!(client.owner_of(&0), alice);
    assert_eq!(client.owner_of(&1), bob);
    assert_eq!(client.balance(&alice), 2);
    assert_eq!(client.balance(&bob), 1);
    assert_eq!(client.token_counter(), 3);
}

#[test]
fn test_owner_of_unknown_token() {
    let e = Env::default();
    e.mock_all_auths();

    let client = create_client(&e);

    assert_eq!(client.try_owner_of(&7), Err(Ok(Error::from_contract_error(NonFungibleTokenError::NonExistentToken as u32))));
    assert_eq!(client.try_token_uri(&7), Err(Ok(Error::from_contract_error(NonFungibleTokenError::NonExistentToken as u32))));
}

#[test]
fn test_token_uri_is_shared() {
    let e = Env::default();
    e.mock_all_auths();

    let client = create_client(&e);
    let alice = Address::generate(&e);
    client.mint(&alice);
    client.mint(&alice);

    assert_eq!(client.token_uri(&0), client.token_uri(&1));
}

#[test]
fn test_transfer() {
    let e = Env::default();
    e.mock_all_auths();

    let client = create_client(&e);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    let token_id = client.mint(&alice);

    assert_eq!(
        client.try_transfer(&bob, &alice, &token_id),
        Err(Ok(Error::from_contract_error(NonFungibleTokenError::IncorrectOwner as u32)))
    );

    client.transfer(&alice, &bob, &token_id);

    assert_eq!(client.owner_of(&token_id), bob);
    assert_eq!(client.balance(&alice), 0);
    assert_eq!(client.balance(&bob), 1);
}

#[test]
fn test_approve_requires_owner() {
    let e = Env::default();
    e.mock_all_auths();

    let client = create_client(&e);
    let alice = Address::generate(&e);
    let mallory = Address::generate(&e);
    let token_id = client.mint(&alice);

    assert_eq!(
        client.try_approve(&mallory, &mallory, &token_id, &1000),
        Err(Ok(Error::from_contract_error(NonFungibleTokenError::InvalidApprover as u32)))
    );
    assert_eq!(client.get_approved(&token_id), None);
}

#[test]
fn test_transfer_from_with_approval_clears_it() {
    let e = Env::default();
    e.mock_all_auths();

    let client = create_client(&e);
    let alice = Address::generate(&e);
    let market = Address::generate(&e);
    let bob = Address::generate(&e);
    let token_id = client.mint(&alice);

    assert_eq!(
        client.try_transfer_from(&market, &alice, &bob, &token_id),
        Err(Ok(Error::from_contract_error(NonFungibleTokenError::InsufficientApproval as u32)))
    );

    client.approve(&alice, &market, &token_id, &1000);
    assert_eq!(client.get_approved(&token_id), Some(market.clone()));

    client.transfer_from(&market, &alice, &bob, &token_id);

    assert_eq!(client.owner_of(&token_id), bob);
    assert_eq!(client.get_approved(&token_id), None);

    // approval did not follow the token to its new owner
    assert_eq!(
        client.try_transfer_from(&market, &bob, &alice, &token_id),
        Err(Ok(Error::from_contract_error(NonFungibleTokenError::InsufficientApproval as u32)))
    );
}

#[test]
fn test_transfer_from_wrong_owner() {
    let e = Env::default();
    e.mock_all_auths();

    let client = create_client(&e);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    let token_id = client.mint(&alice);
    client.approve(&alice, &bob, &token_id, &1000);

    assert_eq!(
        client.try_transfer_from(&bob, &bob, &bob, &token_id),
        Err(Ok(Error::from_contract_error(NonFungibleTokenError::IncorrectOwner as u32)))
    );
}

#[test]
fn test_approval_expires() {
    let e = Env::default();
    e.mock_all_auths();

    let client = create_client(&e);
    let alice = Address::generate(&e);
    let market = Address::generate(&e);
    let token_id = client.mint(&alice);

    client.approve(&alice, &market, &token_id, &10);
    assert_eq!(client.get_approved(&token_id), Some(market.clone()));

    e.ledger().with_mut(|li| li.sequence_number = 11);
    assert_eq!(client.get_approved(&token_id), None);

    assert_eq!(
        client.try_approve(&alice, &market, &token_id, &5),
        Err(Ok(Error::from_contract_error(NonFungibleTokenError::InvalidLiveUntilLedger as u32)))
    );
}

#[test]
fn test_approve_zero_revokes() {
    let e = Env::default();
    e.mock_all_auths();

    let client = create_client(&e);
    let alice = Address::generate(&e);
    let market = Address::generate(&e);
    let token_id = client.mint(&alice);

    client.approve(&alice, &market, &token_id, &1000);
    client.approve(&alice, &market, &token_id, &0);

    assert_eq!(client.get_approved(&token_id), None);
}

#[test]
fn test_operator_can_transfer_every_token() {
    let e = Env::default();
    e.mock_all_auths();

    let client = create_client(&e);
    let alice = Address::generate(&e);
    let operator = Address::generate(&e);
    let bob = Address::generate(&e);
    let first = client.mint(&alice);
    let second = client.mint(&alice);

    assert!(!client.is_approved_for_all(&alice, &operator));
    client.approve_for_all(&alice, &operator, &1000);
    assert!(client.is_approved_for_all(&alice, &operator));

    client.transfer_from(&operator, &alice, &bob, &first);
    client.transfer_from(&operator, &alice, &bob, &second);

    assert_eq!(client.balance(&bob), 2);

    client.approve_for_all(&alice, &operator, &0);
    assert!(!client.is_approved_for_all(&alice, &operator));
}

#[test]
fn test_approval_beyond_max_ttl_rejected() {
    let e = Env::default();
    e.mock_all_auths();

    let client = create_client(&e);
    let alice = Address::generate(&e);
    let market = Address::generate(&e);
    let token_id = client.mint(&alice);

    assert_eq!(
        client.try_approve(&alice, &market, &token_id, &u32::MAX),
        Err(Ok(Error::from_contract_error(NonFungibleTokenError::InvalidLiveUntilLedger as u32)))
    );
    assert_eq!(
        client.try_approve_for_all(&alice, &market, &u32::MAX),
        Err(Ok(Error::from_contract_error(NonFungibleTokenError::InvalidLiveUntilLedger as u32)))
    );

    let max_live_until = e.ledger().max_live_until_ledger();
    client.approve(&alice, &market, &token_id, &max_live_until);
    assert_eq!(client.get_approved(&token_id), Some(market));
}

#[test]
fn test_instance_ttl_extended_on_mint() {
    let e = Env::default();
    e.mock_all_auths();

    let client = create_client(&e);
    let ttl = e.as_contract(&client.address, || e.storage().instance().get_ttl());
    assert!(ttl > storage::INSTANCE_TTL_THRESHOLD);

    e.ledger().with_mut(|li| li.sequence_number += storage::INSTANCE_EXTEND_AMOUNT - 10);
    client.mint(&Address::generate(&e));

    let ttl = e.as_contract(&client.address, || e.storage().instance().get_ttl());
    assert!(ttl > storage::INSTANCE_TTL_THRESHOLD);
    assert_eq!(client.name(), String::from_str(&e, "Dogie"));
}
