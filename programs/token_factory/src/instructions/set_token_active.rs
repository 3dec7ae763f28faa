use anchor_lang::prelude::*;

use crate::{
    constants::TOKEN_DATA_SEED, error::TokenFactoryError, events::TokenStatusChanged,
    state::TokenData,
};

#[derive(Accounts)]
pub struct SetTokenActive<'info> {
    #[account(
        mut,
        seeds = [TOKEN_DATA_SEED, token_data.mint.as_ref()],
        bump = token_data.bump,
        has_one = admin @ TokenFactoryError::Unauthorized,
    )]
    pub token_data: Account<'info, TokenData>,

    pub admin: Signer<'info>,
}

pub fn set_token_active(ctx: Context<SetTokenActive>, is_active: bool) -> Result<()> {
    let token_data = &mut ctx.accounts.token_data;
    token_data.set_active(is_active, Clock::get()?.unix_timestamp);

    emit!(TokenStatusChanged {
        mint: token_data.mint,
        is_active,
    });

    Ok(())
}
