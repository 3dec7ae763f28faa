use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{
        mint_to, set_authority, spl_token::instruction::AuthorityType, Mint, MintTo,
        SetAuthority, Token, TokenAccount,
    },
};

use crate::{
    allocation::TokenAllocation,
    constants::{
        BURNING_WALLET, MINT_AUTHORITY_SEED, PLATFORM_ADMIN, TOKEN_DATA_SEED, TOKEN_DECIMALS,
    },
    error::TokenFactoryError,
    events::TokenCreated,
    pricing::FixedRatePricer,
    state::{TokenData, TokenIdentity},
    token_validate::validate_token,
};

/// Admin, burn and creator token accounts are all created here, so the
/// creator can be neither `PLATFORM_ADMIN` nor `BURNING_WALLET`: the shared
/// associated token account would already be in use.
#[derive(Accounts)]
pub struct CreateToken<'info> {
    /// Token creator, pays for every account and for the day-one purchase
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Platform admin, receives the bonding curve allocation and purchase lamports
    /// CHECK: Pinned to PLATFORM_ADMIN, only used as a key and lamport destination
    #[account(mut, address = PLATFORM_ADMIN @ TokenFactoryError::Unauthorized)]
    pub admin: UncheckedAccount<'info>,

    /// Owner of the burn token account
    /// CHECK: Pinned to BURNING_WALLET, only used as a key
    #[account(address = BURNING_WALLET @ TokenFactoryError::Unauthorized)]
    pub burning_wallet: UncheckedAccount<'info>,

    /// Program-wide mint authority, revoked once the supply is minted
    /// CHECK: PDA without data, only signs CPIs
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// New token mint (fresh keypair)
    #[account(
        init,
        signer,
        payer = creator,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = mint_authority,
    )]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        space = 8 + TokenData::INIT_SPACE,
        seeds = [TOKEN_DATA_SEED, mint.key().as_ref()],
        bump,
    )]
    pub token_data: Box<Account<'info, TokenData>>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = mint,
        associated_token::authority = admin,
    )]
    pub admin_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = mint,
        associated_token::authority = burning_wallet,
    )]
    pub burning_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = mint,
        associated_token::authority = creator,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreateToken<'info> {
    fn mint_to_account(
        &self,
        to: &Account<'info, TokenAccount>,
        amount: u64,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.mint.to_account_info(),
                    to: to.to_account_info(),
                    authority: self.mint_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )
    }

    fn revoke_mint_authority(&self, signer_seeds: &[&[&[u8]]]) -> Result<()> {
        set_authority(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                SetAuthority {
                    account_or_mint: self.mint.to_account_info(),
                    current_authority: self.mint_authority.to_account_info(),
                },
                signer_seeds,
            ),
            AuthorityType::MintTokens,
            None,
        )
    }

    fn pay_admin(&self, lamports: u64) -> Result<()> {
        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.creator.to_account_info(),
                    to: self.admin.to_account_info(),
                },
            ),
            lamports,
        )
    }
}

pub fn create_token(
    ctx: Context<CreateToken>,
    name: String,
    symbol: String,
    uri: String,
    initial_purchase_amount: Option<u64>,
) -> Result<()> {
    validate_token(&name, &symbol, &uri, initial_purchase_amount)?;

    let allocation =
        TokenAllocation::new(initial_purchase_amount, &FixedRatePricer::launch_rate())?;

    if let Some(purchase) = allocation.initial_purchase {
        ctx.accounts.pay_admin(purchase.lamports)?;
        msg!(
            "Initial purchase: {} lamports for {} tokens",
            purchase.lamports,
            purchase.tokens
        );
    }

    let mint_authority_seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED, &[ctx.bumps.mint_authority]];
    let signer_seeds = &[mint_authority_seeds];

    let accounts = &ctx.accounts;
    accounts.mint_to_account(&accounts.admin_token_account, allocation.admin_amount, signer_seeds)?;
    accounts.mint_to_account(
        &accounts.burning_token_account,
        allocation.burning_reserve,
        signer_seeds,
    )?;
    accounts.mint_to_account(
        &accounts.creator_token_account,
        allocation.creator_amount,
        signer_seeds,
    )?;

    // No further minting, the supply is fixed
    accounts.revoke_mint_authority(signer_seeds)?;

    let mint = ctx.accounts.mint.key();
    let creator = ctx.accounts.creator.key();
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts.token_data.set_inner(TokenData::new(
        TokenIdentity {
            mint,
            creator,
            admin: ctx.accounts.admin.key(),
            name: name.clone(),
            symbol: symbol.clone(),
            uri,
        },
        &allocation,
        now,
        ctx.bumps.token_data,
    ));

    msg!("Created token {} ({})", symbol, mint);

    emit!(TokenCreated {
        mint,
        creator,
        name,
        symbol,
        total_supply: allocation.total_supply,
        initial_purchase: initial_purchase_amount,
    });

    Ok(())
}
