use anchor_lang::prelude::*;

// Errors
#[error_code]
pub enum TokenFactoryError {
    #[msg("Token name is too long (max 32 characters)")]
    NameTooLong,
    #[msg("Token symbol is too long (max 10 characters)")]
    SymbolTooLong,
    #[msg("Token URI is too long (max 200 characters)")]
    UriTooLong,
    #[msg("Invalid purchase amount")]
    InvalidPurchaseAmount,
    #[msg("Token is not eligible for graduation")]
    NotEligibleForGraduation,
    #[msg("Token has already graduated")]
    AlreadyGraduated,
    #[msg("Signer is not allowed to perform this operation")]
    Unauthorized,
    #[msg("Math operation resulted in overflow")]
    MathOverflow,
}
