//! Supply split applied at creation
//!
//! The whole supply is minted once: the burn reserve goes to the burn
//! wallet and the bonding curve allocation is shared between the admin
//! (curve inventory) and the creator (day-one purchase, if any).

use anchor_lang::prelude::*;

use crate::{
    constants::{BONDING_CURVE_ALLOCATION, BURNING_ALLOCATION, TOTAL_SUPPLY},
    error::TokenFactoryError,
    pricing::InitialPurchasePricer,
};

/// Day-one purchase made by the creator at creation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitialPurchase {
    /// Lamports paid by the creator
    pub lamports: u64,
    /// Tokens carved out of the bonding curve allocation
    pub tokens: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAllocation {
    pub total_supply: u64,
    pub bonding_curve_supply: u64,
    pub burning_reserve: u64,
    /// Minted to the admin token account
    pub admin_amount: u64,
    /// Minted to the creator token account
    pub creator_amount: u64,
    pub initial_purchase: Option<InitialPurchase>,
}

impl TokenAllocation {
    pub fn new(
        initial_purchase_amount: Option<u64>,
        pricer: &impl InitialPurchasePricer,
    ) -> Result<Self> {
        let initial_purchase = match initial_purchase_amount {
            Some(lamports) => {
                require!(lamports > 0, TokenFactoryError::InvalidPurchaseAmount);
                let tokens = pricer.quote_tokens(lamports)?;
                require!(
                    tokens > 0 && tokens <= BONDING_CURVE_ALLOCATION,
                    TokenFactoryError::InvalidPurchaseAmount
                );
                Some(InitialPurchase { lamports, tokens })
            }
            None => None,
        };

        let creator_amount = initial_purchase.map_or(0, |purchase| purchase.tokens);
        let admin_amount = BONDING_CURVE_ALLOCATION
            .checked_sub(creator_amount)
            .ok_or(TokenFactoryError::MathOverflow)?;

        let allocation = Self {
            total_supply: TOTAL_SUPPLY,
            bonding_curve_supply: BONDING_CURVE_ALLOCATION,
            burning_reserve: BURNING_ALLOCATION,
            admin_amount,
            creator_amount,
            initial_purchase,
        };
        debug_assert_eq!(allocation.minted_total(), Some(TOTAL_SUPPLY));

        Ok(allocation)
    }

    /// Sum of every amount that gets minted
    pub fn minted_total(&self) -> Option<u64> {
        self.admin_amount
            .checked_add(self.creator_amount)?
            .checked_add(self.burning_reserve)
    }
}
