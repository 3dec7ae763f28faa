//! Graduate a token to Raydium
//!
//! Terminal transition: the bonding curve phase ends and the record keeps
//! the pool the liquidity migrated to.

use anchor_lang::prelude::*;

use crate::{
    constants::TOKEN_DATA_SEED, error::TokenFactoryError, events::TokenGraduated,
    state::TokenData,
};

#[derive(Accounts)]
pub struct GraduateToken<'info> {
    #[account(
        mut,
        seeds = [TOKEN_DATA_SEED, token_data.mint.as_ref()],
        bump = token_data.bump,
        has_one = admin @ TokenFactoryError::Unauthorized,
    )]
    pub token_data: Account<'info, TokenData>,

    /// Must be the admin stored on the record
    pub admin: Signer<'info>,
}

pub fn graduate_token(
    ctx: Context<GraduateToken>,
    raydium_pool_id: Pubkey,
    graduation_fee: u64,
) -> Result<()> {
    let token_data = &mut ctx.accounts.token_data;
    let now = Clock::get()?.unix_timestamp;

    token_data.graduate(raydium_pool_id, graduation_fee, now)?;

    emit!(TokenGraduated {
        mint: token_data.mint,
        raydium_pool_id,
        graduation_fee,
        market_cap: token_data.market_cap_or_zero(),
    });

    Ok(())
}
