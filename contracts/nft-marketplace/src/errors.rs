use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketplaceError {
    /// Listing and update prices must be strictly positive.
    PriceMustBeAboveZero = 1,
    /// The marketplace is neither the token's approved address nor an
    /// operator of the seller.
    NotApprovedForMarketplace = 2,
    AlreadyListed = 3,
    /// No active listing for the token.
    ItemNotAlreadyListed = 4,
    /// The caller does not own the token or the listing.
    NotOwner = 5,
    /// The offered payment is below the listing price.
    PriceNotMet = 6,
    NoProceeds = 7,
    /// Indicates overflow when crediting proceeds.
    MathOverflow = 8,
    /// A guarded entry point was entered again before returning.
    ReentrantCall = 9,
    UnsetPaymentToken = 10,
}
