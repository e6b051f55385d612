use soroban_sdk::{contractevent, Address};

/// Published on listing and again on every price update.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemListed {
    #[topic]
    pub seller: Address,
    #[topic]
    pub nft_contract: Address,
    pub token_id: u64,
    pub price: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemCancelled {
    #[topic]
    pub seller: Address,
    #[topic]
    pub nft_contract: Address,
    pub token_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemBought {
    #[topic]
    pub buyer: Address,
    #[topic]
    pub nft_contract: Address,
    pub token_id: u64,
    pub price: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProceedsWithdrawn {
    #[topic]
    pub seller: Address,
    pub amount: i128,
}
