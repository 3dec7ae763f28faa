//! Day-one purchase pricing
//!
//! Converting a SOL amount into tokens belongs to the bonding curve, which
//! lives in the trading program. Creation only needs a quote, so the rate is
//! kept behind a trait and the program ships the launch rate.

use anchor_lang::prelude::*;

use crate::{
    constants::{INITIAL_TOKENS_PER_SOL, LAMPORTS_PER_SOL},
    error::TokenFactoryError,
};

pub trait InitialPurchasePricer {
    /// Tokens (base units) bought for `lamports`
    fn quote_tokens(&self, lamports: u64) -> Result<u64>;
}

/// Flat rate quote: `lamports * tokens_per_sol / LAMPORTS_PER_SOL`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedRatePricer {
    pub tokens_per_sol: u64,
}

impl FixedRatePricer {
    pub const fn launch_rate() -> Self {
        Self {
            tokens_per_sol: INITIAL_TOKENS_PER_SOL,
        }
    }
}

impl Default for FixedRatePricer {
    fn default() -> Self {
        Self::launch_rate()
    }
}

impl InitialPurchasePricer for FixedRatePricer {
    fn quote_tokens(&self, lamports: u64) -> Result<u64> {
        let tokens = (lamports as u128)
            .checked_mul(self.tokens_per_sol as u128)
            .ok_or(TokenFactoryError::MathOverflow)?
            / LAMPORTS_PER_SOL as u128;

        u64::try_from(tokens).map_err(|_| error!(TokenFactoryError::MathOverflow))
    }
}
