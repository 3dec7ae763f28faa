pub mod graduate_token;

use anchor_lang::prelude::Pubkey;
use solana_sdk::{compute_budget::ComputeBudgetInstruction, signature::Keypair};
use token_factory_test_utils::{
    constants::{CREATE_TOKEN_COMPUTE_UNITS, DEFAULT_WALLET_LAMPORTS, TOKEN_FACTORY_PROGRAM_PATH},
    helpers::{platform_admin_keypair, trading_authority_keypair},
    keypair_pubkey, to_sdk_instruction, BanksClientError, TestApp,
};

use crate::{
    constants::{BURNING_WALLET, PLATFORM_ADMIN},
    instruction_builder::{CreateTokenAddresses, InstructionBuilder},
};

/// Token created by the test payer
pub struct LaunchedToken {
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub admin: Keypair,
    pub addresses: CreateTokenAddresses,
}

impl LaunchedToken {
    pub fn admin_pubkey(&self) -> Pubkey {
        keypair_pubkey(&self.admin)
    }
}

/// Bank with the program loaded and the platform admin funded
pub async fn start() -> TestApp {
    let mut app = TestApp::new_with_program(crate::id(), TOKEN_FACTORY_PROGRAM_PATH).await;

    // Admin must exist before it can take a small lamport transfer
    app.fund_account(&PLATFORM_ADMIN, DEFAULT_WALLET_LAMPORTS)
        .await
        .unwrap();

    app
}

/// Send `create_token` signed by the payer (creator) and a fresh mint keypair,
/// naming `admin` and `burning_wallet` as given. Returns the program logs.
pub async fn try_create_token_with_wallets(
    app: &mut TestApp,
    admin: &Pubkey,
    burning_wallet: &Pubkey,
    name: &str,
    symbol: &str,
    uri: &str,
    initial_purchase_amount: Option<u64>,
) -> (Result<Vec<String>, BanksClientError>, Pubkey, CreateTokenAddresses) {
    let creator = app.payer_pubkey();
    let mint = Keypair::new();

    let (instruction, addresses) = InstructionBuilder::create_token(
        &creator,
        admin,
        burning_wallet,
        &keypair_pubkey(&mint),
        name,
        symbol,
        uri,
        initial_purchase_amount,
    );

    let result = app
        .process_instructions_with_logs(
            vec![
                ComputeBudgetInstruction::set_compute_unit_limit(CREATE_TOKEN_COMPUTE_UNITS),
                to_sdk_instruction(instruction),
            ],
            &[&mint],
        )
        .await;

    (result, keypair_pubkey(&mint), addresses)
}

/// `create_token` with the platform wallets
pub async fn try_create_token(
    app: &mut TestApp,
    name: &str,
    symbol: &str,
    uri: &str,
    initial_purchase_amount: Option<u64>,
) -> (Result<Vec<String>, BanksClientError>, LaunchedToken) {
    let (result, mint, addresses) = try_create_token_with_wallets(
        app,
        &PLATFORM_ADMIN,
        &BURNING_WALLET,
        name,
        symbol,
        uri,
        initial_purchase_amount,
    )
    .await;

    let token = LaunchedToken {
        mint,
        creator: app.payer_pubkey(),
        admin: platform_admin_keypair(),
        addresses,
    };
    (result, token)
}

pub async fn create_doge(app: &mut TestApp, initial_purchase_amount: Option<u64>) -> LaunchedToken {
    let (result, token) =
        try_create_token(app, "Doge", "DOGE", "ipfs://x", initial_purchase_amount).await;
    result.unwrap();
    token
}

pub async fn push_trading_data(
    app: &mut TestApp,
    mint: &Pubkey,
    market_cap: u64,
) -> Result<(), BanksClientError> {
    let trading_authority = trading_authority_keypair();
    let instruction = InstructionBuilder::update_trading_data(
        &keypair_pubkey(&trading_authority),
        mint,
        1_000,
        market_cap,
        5_000_000,
        42,
        120,
    );
    app.process_instruction_as_signer(to_sdk_instruction(instruction), &trading_authority)
        .await
}
