use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug)]
pub struct SaleConfiguredEvent {
    pub tx_limit: u32,
    pub supply_limit: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SaleActiveChangedEvent {
    pub active: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct BaseUriChangedEvent {
    pub base_uri: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PurchasedEvent {
    pub buyer: Address,
    pub quantity: u32,
    pub payment: i128,
    pub first_token_id: u64,
    pub total_supply: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ReservedEvent {
    pub recipient: Address,
    pub quantity: u32,
    pub first_token_id: u64,
    pub total_supply: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct WithdrawnEvent {
    pub admin: Address,
    pub admin_share: i128,
    pub payout: Address,
    pub payout_share: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AdminTransferredEvent {
    pub previous_admin: Address,
    pub new_admin: Address,
}
