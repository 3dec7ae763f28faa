/// Token creation parameter validation
///
/// Limits are byte lengths of the UTF-8 encoding, matching the space reserved
/// in `TokenData`. Oversized values are rejected, never truncated.
use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH},
    error::TokenFactoryError,
};

/// Validate a day-one purchase amount
///
/// # Returns
/// * `Ok(())` when no purchase was requested or the amount is positive
/// * `Err(TokenFactoryError::InvalidPurchaseAmount)` for an explicit zero
pub fn validate_purchase_amount(initial_purchase_amount: Option<u64>) -> Result<()> {
    if let Some(lamports) = initial_purchase_amount {
        require!(lamports > 0, TokenFactoryError::InvalidPurchaseAmount);
    }
    Ok(())
}

/// Validate token creation parameters
///
/// Checks run in a fixed order (name, symbol, uri, purchase) so the first
/// violated limit is the one reported.
pub fn validate_token(
    name: &str,
    symbol: &str,
    uri: &str,
    initial_purchase_amount: Option<u64>,
) -> Result<()> {
    require!(
        name.len() <= MAX_NAME_LENGTH,
        TokenFactoryError::NameTooLong
    );

    require!(
        symbol.len() <= MAX_SYMBOL_LENGTH,
        TokenFactoryError::SymbolTooLong
    );

    require!(uri.len() <= MAX_URI_LENGTH, TokenFactoryError::UriTooLong);

    validate_purchase_amount(initial_purchase_amount)?;

    Ok(())
}

#[cfg(test)]
fn error_code(result: Result<()>) -> u32 {
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => err.error_code_number,
        other => panic!("expected an anchor error, got {other:?}"),
    }
}

#[test]
fn test_valid_parameters() {
    assert!(validate_token("Doge", "DOGE", "ipfs://x", None).is_ok());
    assert!(validate_token("Doge", "DOGE", "ipfs://x", Some(1)).is_ok());

    // Limits are inclusive
    let name = "n".repeat(MAX_NAME_LENGTH);
    let symbol = "S".repeat(MAX_SYMBOL_LENGTH);
    let uri = "u".repeat(MAX_URI_LENGTH);
    assert!(validate_token(&name, &symbol, &uri, None).is_ok());

    // Empty strings are not rejected
    assert!(validate_token("", "", "", None).is_ok());
}

#[test]
fn test_name_too_long() {
    let name = "n".repeat(MAX_NAME_LENGTH + 1);
    assert_eq!(
        error_code(validate_token(&name, "DOGE", "ipfs://x", None)),
        u32::from(TokenFactoryError::NameTooLong)
    );
}

#[test]
fn test_symbol_too_long() {
    assert_eq!(
        error_code(validate_token("Doge", "DOGEDOGEDOG", "ipfs://x", None)),
        u32::from(TokenFactoryError::SymbolTooLong)
    );
}

#[test]
fn test_uri_too_long() {
    let uri = format!("ipfs://{}", "x".repeat(MAX_URI_LENGTH));
    assert_eq!(
        error_code(validate_token("Doge", "DOGE", &uri, None)),
        u32::from(TokenFactoryError::UriTooLong)
    );
}

#[test]
fn test_length_is_measured_in_bytes() {
    // 11 characters, 44 bytes
    let name = "🐶".repeat(11);
    assert_eq!(
        error_code(validate_token(&name, "DOGE", "ipfs://x", None)),
        u32::from(TokenFactoryError::NameTooLong)
    );
}

#[test]
fn test_first_violation_wins() {
    let name = "n".repeat(MAX_NAME_LENGTH + 1);
    let symbol = "S".repeat(MAX_SYMBOL_LENGTH + 1);
    assert_eq!(
        error_code(validate_token(&name, &symbol, "ipfs://x", Some(0))),
        u32::from(TokenFactoryError::NameTooLong)
    );
    assert_eq!(
        error_code(validate_token("Doge", &symbol, "ipfs://x", Some(0))),
        u32::from(TokenFactoryError::SymbolTooLong)
    );
}

#[test]
fn test_zero_purchase_rejected() {
    assert_eq!(
        error_code(validate_token("Doge", "DOGE", "ipfs://x", Some(0))),
        u32::from(TokenFactoryError::InvalidPurchaseAmount)
    );
}
