#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod allocation;
pub mod constants;
pub mod error;
pub mod events;
pub mod instruction_builder;
pub mod instructions;
pub mod pricing;
pub mod state;
#[cfg(all(test, feature = "test-sbf"))]
mod tests;
pub mod token_validate;

use instructions::*;

declare_id!("42rpTtP3um1xQPMReFwfQf3DcRJYZ1YpFmgUfm5rgz8q");

#[program]
pub mod token_factory {
    use super::*;

    /// Create a fixed-supply token and its record
    pub fn create_token(
        ctx: Context<CreateToken>,
        name: String,
        symbol: String,
        uri: String,
        initial_purchase_amount: Option<u64>,
    ) -> Result<()> {
        instructions::create_token(ctx, name, symbol, uri, initial_purchase_amount)
    }

    /// Refresh market telemetry (trading authority only)
    pub fn update_trading_data(
        ctx: Context<UpdateTradingData>,
        current_price: u64,
        market_cap: u64,
        total_volume: u64,
        holder_count: u32,
        transactions_count: u64,
    ) -> Result<()> {
        instructions::update_trading_data(
            ctx,
            current_price,
            market_cap,
            total_volume,
            holder_count,
            transactions_count,
        )
    }

    /// Mark a token as migrated to a Raydium pool
    pub fn graduate_token(
        ctx: Context<GraduateToken>,
        raydium_pool_id: Pubkey,
        graduation_fee: u64,
    ) -> Result<()> {
        instructions::graduate_token(ctx, raydium_pool_id, graduation_fee)
    }

    /// Soft enable or disable a token
    pub fn set_token_active(ctx: Context<SetTokenActive>, is_active: bool) -> Result<()> {
        instructions::set_token_active(ctx, is_active)
    }
}
