use anchor_lang::prelude::*;

use crate::{
    allocation::TokenAllocation, constants::GRADUATION_MARKET_CAP_THRESHOLD,
    error::TokenFactoryError,
};

/// Per-mint record, PDA at `[TOKEN_DATA_SEED, mint]`
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct TokenData {
    pub mint: Pubkey,
    pub creator: Pubkey,
    /// Platform authority allowed to graduate and toggle the token
    pub admin: Pubkey,
    #[max_len(32)]
    pub name: String,
    #[max_len(10)]
    pub symbol: String,
    #[max_len(200)]
    pub uri: String,
    pub total_supply: u64,
    pub bonding_curve_supply: u64,
    pub burning_reserve: u64,
    pub created_at: i64,
    pub updated_at: i64,
    pub is_active: bool,

    // Trading data, absent until the trading program reports
    pub current_price: Option<u64>,
    pub market_cap: Option<u64>,
    pub total_volume: Option<u64>,
    pub holder_count: Option<u32>,
    pub transactions_count: Option<u64>,

    // Graduation data
    pub graduation_eligible: bool,
    pub graduated: bool,
    pub graduation_date: Option<i64>,
    pub raydium_pool_id: Option<Pubkey>,
    pub graduation_fee: Option<u64>,

    // Initial purchase data
    pub initial_purchase_amount: Option<u64>,
    pub initial_tokens_purchased: Option<u64>,

    pub bump: u8,
}

/// Immutable identity of a token, fixed at creation
pub struct TokenIdentity {
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub admin: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

/// Absolute market snapshot pushed by the trading program
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradingSnapshot {
    pub current_price: u64,
    pub market_cap: u64,
    pub total_volume: u64,
    pub holder_count: u32,
    pub transactions_count: u64,
}

impl TokenData {
    pub fn new(identity: TokenIdentity, allocation: &TokenAllocation, now: i64, bump: u8) -> Self {
        Self {
            mint: identity.mint,
            creator: identity.creator,
            admin: identity.admin,
            name: identity.name,
            symbol: identity.symbol,
            uri: identity.uri,
            total_supply: allocation.total_supply,
            bonding_curve_supply: allocation.bonding_curve_supply,
            burning_reserve: allocation.burning_reserve,
            created_at: now,
            updated_at: now,
            is_active: true,
            current_price: None,
            market_cap: None,
            total_volume: None,
            holder_count: None,
            transactions_count: None,
            graduation_eligible: false,
            graduated: false,
            graduation_date: None,
            raydium_pool_id: None,
            graduation_fee: None,
            initial_purchase_amount: allocation.initial_purchase.map(|p| p.lamports),
            initial_tokens_purchased: allocation.initial_purchase.map(|p| p.tokens),
            bump,
        }
    }

    /// Overwrite telemetry with `snapshot`.
    ///
    /// Returns true when this update made the token eligible for graduation.
    /// Eligibility is a latch: a lower market cap later never clears it.
    pub fn apply_trading_snapshot(&mut self, snapshot: &TradingSnapshot, now: i64) -> bool {
        self.current_price = Some(snapshot.current_price);
        self.market_cap = Some(snapshot.market_cap);
        self.total_volume = Some(snapshot.total_volume);
        self.holder_count = Some(snapshot.holder_count);
        self.transactions_count = Some(snapshot.transactions_count);
        self.updated_at = now;

        let reached = !self.graduation_eligible
            && snapshot.market_cap >= GRADUATION_MARKET_CAP_THRESHOLD;
        if reached {
            self.graduation_eligible = true;
        }
        reached
    }

    /// One-way transition to graduated. The record is untouched on error.
    pub fn graduate(
        &mut self,
        raydium_pool_id: Pubkey,
        graduation_fee: u64,
        now: i64,
    ) -> Result<()> {
        require!(!self.graduated, TokenFactoryError::AlreadyGraduated);
        require!(
            self.graduation_eligible,
            TokenFactoryError::NotEligibleForGraduation
        );

        self.graduated = true;
        self.graduation_date = Some(now);
        self.raydium_pool_id = Some(raydium_pool_id);
        self.graduation_fee = Some(graduation_fee);
        self.updated_at = now;

        Ok(())
    }

    pub fn set_active(&mut self, is_active: bool, now: i64) {
        self.is_active = is_active;
        self.updated_at = now;
    }

    /// Market cap snapshot reported with graduation
    pub fn market_cap_or_zero(&self) -> u64 {
        self.market_cap.unwrap_or(0)
    }
}
