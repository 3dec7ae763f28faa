use anchor_lang::prelude::Pubkey;
use solana_sdk::signature::Keypair;
use token_factory_test_utils::{
    assert_anchor_error, helpers::find_event, keypair_pubkey, to_sdk_instruction,
};

use crate::{
    constants::GRADUATION_MARKET_CAP_THRESHOLD,
    error::TokenFactoryError,
    events::TokenGraduated,
    instruction_builder::InstructionBuilder,
    state::TokenData,
    tests::{create_doge, push_trading_data, start},
};

const GRADUATION_FEE: u64 = 6_000_000_000;

#[tokio::test]
async fn test_graduate_token_success() {
    let mut app = start().await;
    let token = create_doge(&mut app, None).await;
    let pool = Pubkey::new_unique();

    push_trading_data(&mut app, &token.mint, 70_000_000_000)
        .await
        .unwrap();

    let instruction = InstructionBuilder::graduate_token(
        &token.admin_pubkey(),
        &token.mint,
        pool,
        GRADUATION_FEE,
    );
    let logs = app
        .process_instructions_with_logs(vec![to_sdk_instruction(instruction)], &[&token.admin])
        .await
        .unwrap();

    // Event carries the last reported market cap
    let event: TokenGraduated = find_event(&logs).expect("TokenGraduated not emitted");
    assert_eq!(event.mint, token.mint);
    assert_eq!(event.raydium_pool_id, pool);
    assert_eq!(event.graduation_fee, GRADUATION_FEE);
    assert_eq!(event.market_cap, 70_000_000_000);

    let record: TokenData = app
        .get_account_data(token.addresses.token_data)
        .await
        .unwrap();
    assert!(record.graduated);
    assert_eq!(record.raydium_pool_id, Some(pool));
    assert_eq!(record.graduation_fee, Some(GRADUATION_FEE));
    assert_eq!(record.graduation_date, Some(record.updated_at));
}

#[tokio::test]
async fn test_graduate_token_fails_already_graduated() {
    let mut app = start().await;
    let token = create_doge(&mut app, None).await;
    let pool = Pubkey::new_unique();

    push_trading_data(&mut app, &token.mint, GRADUATION_MARKET_CAP_THRESHOLD)
        .await
        .unwrap();

    let instruction = InstructionBuilder::graduate_token(
        &token.admin_pubkey(),
        &token.mint,
        pool,
        GRADUATION_FEE,
    );
    app.process_instruction_as_signer(to_sdk_instruction(instruction), &token.admin)
        .await
        .unwrap();

    let instruction = InstructionBuilder::graduate_token(
        &token.admin_pubkey(),
        &token.mint,
        Pubkey::new_unique(),
        GRADUATION_FEE + 1,
    );
    let result = app
        .process_instruction_as_signer(to_sdk_instruction(instruction), &token.admin)
        .await;
    assert_anchor_error(result, TokenFactoryError::AlreadyGraduated);

    // First graduation stands
    let record: TokenData = app
        .get_account_data(token.addresses.token_data)
        .await
        .unwrap();
    assert_eq!(record.raydium_pool_id, Some(pool));
    assert_eq!(record.graduation_fee, Some(GRADUATION_FEE));
}

#[tokio::test]
async fn test_graduate_token_fails_not_eligible() {
    let mut app = start().await;
    let token = create_doge(&mut app, None).await;

    push_trading_data(&mut app, &token.mint, GRADUATION_MARKET_CAP_THRESHOLD - 1)
        .await
        .unwrap();

    let instruction = InstructionBuilder::graduate_token(
        &token.admin_pubkey(),
        &token.mint,
        Pubkey::new_unique(),
        GRADUATION_FEE,
    );
    let result = app
        .process_instruction_as_signer(to_sdk_instruction(instruction), &token.admin)
        .await;
    assert_anchor_error(result, TokenFactoryError::NotEligibleForGraduation);

    let record: TokenData = app
        .get_account_data(token.addresses.token_data)
        .await
        .unwrap();
    assert!(!record.graduated);
    assert_eq!(record.raydium_pool_id, None);
}

#[tokio::test]
async fn test_graduate_token_fails_wrong_admin() {
    let mut app = start().await;
    let token = create_doge(&mut app, None).await;
    let impostor = Keypair::new();

    push_trading_data(&mut app, &token.mint, GRADUATION_MARKET_CAP_THRESHOLD)
        .await
        .unwrap();

    let instruction = InstructionBuilder::graduate_token(
        &keypair_pubkey(&impostor),
        &token.mint,
        Pubkey::new_unique(),
        GRADUATION_FEE,
    );
    let result = app
        .process_instruction_as_signer(to_sdk_instruction(instruction), &impostor)
        .await;
    assert_anchor_error(result, TokenFactoryError::Unauthorized);
}

#[tokio::test]
async fn test_graduated_token_accepts_trading_data() {
    let mut app = start().await;
    let token = create_doge(&mut app, None).await;

    push_trading_data(&mut app, &token.mint, GRADUATION_MARKET_CAP_THRESHOLD)
        .await
        .unwrap();
    let instruction = InstructionBuilder::graduate_token(
        &token.admin_pubkey(),
        &token.mint,
        Pubkey::new_unique(),
        GRADUATION_FEE,
    );
    app.process_instruction_as_signer(to_sdk_instruction(instruction), &token.admin)
        .await
        .unwrap();

    push_trading_data(&mut app, &token.mint, 90_000_000_000)
        .await
        .unwrap();

    let record: TokenData = app
        .get_account_data(token.addresses.token_data)
        .await
        .unwrap();
    assert!(record.graduated);
    assert_eq!(record.market_cap, Some(90_000_000_000));
}
