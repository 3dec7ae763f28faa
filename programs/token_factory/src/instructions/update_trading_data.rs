use anchor_lang::prelude::*;

use crate::{
    constants::{TOKEN_DATA_SEED, TRADING_AUTHORITY},
    error::TokenFactoryError,
    state::{TokenData, TradingSnapshot},
};

#[derive(Accounts)]
pub struct UpdateTradingData<'info> {
    #[account(
        mut,
        seeds = [TOKEN_DATA_SEED, token_data.mint.as_ref()],
        bump = token_data.bump,
    )]
    pub token_data: Account<'info, TokenData>,

    /// Fixed at deployment, not stored per token
    #[account(address = TRADING_AUTHORITY @ TokenFactoryError::Unauthorized)]
    pub trading_authority: Signer<'info>,
}

pub fn update_trading_data(
    ctx: Context<UpdateTradingData>,
    current_price: u64,
    market_cap: u64,
    total_volume: u64,
    holder_count: u32,
    transactions_count: u64,
) -> Result<()> {
    let token_data = &mut ctx.accounts.token_data;
    let now = Clock::get()?.unix_timestamp;

    let snapshot = TradingSnapshot {
        current_price,
        market_cap,
        total_volume,
        holder_count,
        transactions_count,
    };

    if token_data.apply_trading_snapshot(&snapshot, now) {
        msg!(
            "Token {} eligible for graduation at market cap {}",
            token_data.mint,
            market_cap
        );
    }

    Ok(())
}
