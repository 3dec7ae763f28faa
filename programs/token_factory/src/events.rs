use anchor_lang::prelude::*;

#[event]
pub struct TokenCreated {
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub initial_purchase: Option<u64>,
}

#[event]
pub struct TokenGraduated {
    pub mint: Pubkey,
    pub raydium_pool_id: Pubkey,
    pub graduation_fee: u64,
    /// Last reported market cap, 0 if the trading program never reported one
    pub market_cap: u64,
}

#[event]
pub struct TokenStatusChanged {
    pub mint: Pubkey,
    pub is_active: bool,
}
