use anchor_lang::{prelude::*, Event};
use anchor_spl::token::{Mint, TokenAccount};
use base64::Engine;
use solana_sdk::{signature::Keypair, signer::SeedDerivable};

use crate::{
    constants::{PLATFORM_ADMIN_PRIVATE_KEY, TRADING_AUTHORITY_PRIVATE_KEY},
    TestApp,
};

const PROGRAM_DATA_LOG_PREFIX: &str = "Program data: ";

/// Zero when the account is missing or isn't a token account
pub async fn get_token_balance(app: &mut TestApp, token_account: Pubkey) -> u64 {
    match app.get_account_data::<TokenAccount>(token_account).await {
        Ok(account) => account.amount,
        Err(_) => 0,
    }
}

pub async fn get_mint(app: &mut TestApp, mint: Pubkey) -> Mint {
    app.get_account_data::<Mint>(mint)
        .await
        .expect("Mint account missing")
}

/// Localnet signer matching the program's trading authority
pub fn trading_authority_keypair() -> Keypair {
    Keypair::from_seed(&TRADING_AUTHORITY_PRIVATE_KEY).expect("Invalid trading authority seed")
}

/// Localnet signer matching the program's platform admin
pub fn platform_admin_keypair() -> Keypair {
    Keypair::from_seed(&PLATFORM_ADMIN_PRIVATE_KEY).expect("Invalid platform admin seed")
}

/// First `emit!`ted event of type `E` found in the transaction logs
pub fn find_event<E: Event>(logs: &[String]) -> Option<E> {
    logs.iter()
        .filter_map(|log| log.strip_prefix(PROGRAM_DATA_LOG_PREFIX))
        .filter_map(|data| base64::engine::general_purpose::STANDARD.decode(data).ok())
        .find_map(|bytes| {
            let mut payload = bytes.strip_prefix(E::DISCRIMINATOR)?;
            E::deserialize(&mut payload).ok()
        })
}
