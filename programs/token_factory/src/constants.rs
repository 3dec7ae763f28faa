use anchor_lang::prelude::*;

pub const TOKEN_DATA_SEED: &[u8] = b"token_data";
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

pub const TOKEN_DECIMALS: u8 = 9;
pub const DECIMALS_FACTOR: u64 = 10u64.pow(TOKEN_DECIMALS as u32);

/// 1B tokens in base units
pub const TOTAL_SUPPLY: u64 = 1_000_000_000 * DECIMALS_FACTOR;
/// 80% reserved for bonding curve trading
pub const BONDING_CURVE_ALLOCATION: u64 = TOTAL_SUPPLY / 100 * 80;
/// 20% sent to the burn wallet
pub const BURNING_ALLOCATION: u64 = TOTAL_SUPPLY - BONDING_CURVE_ALLOCATION;

const _: () = assert!(BONDING_CURVE_ALLOCATION + BURNING_ALLOCATION == TOTAL_SUPPLY);

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;

/// $69K expressed in micro-dollars, the unit the trading program reports market cap in
pub const GRADUATION_MARKET_CAP_THRESHOLD: u64 = 69_000_000_000;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
/// Launch rate for day-one purchases: 1M tokens per SOL
pub const INITIAL_TOKENS_PER_SOL: u64 = 1_000_000 * DECIMALS_FACTOR;

// TODO: swap the three keys below for the production platform keys before mainnet deploy

/// Only signer allowed to push trading telemetry
pub const TRADING_AUTHORITY: Pubkey =
    anchor_lang::solana_program::pubkey!("GRHLUPNB3ceCgJMaScqaxzKMEZCPixFsicRE7a33vgJw");

/// Receives the bonding curve allocation and day-one lamports, stored as the record admin
pub const PLATFORM_ADMIN: Pubkey =
    anchor_lang::solana_program::pubkey!("vBh3zCrM4xqWJiQNFufGUVhTPGen664WTMA74cMUBfC");

/// Owner of every burn token account
pub const BURNING_WALLET: Pubkey =
    anchor_lang::solana_program::pubkey!("AdwfaCjFWm939rS1HF5hAaPh2NEa9vWkRKb7EgeQhgBx");
