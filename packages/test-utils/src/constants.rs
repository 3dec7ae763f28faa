pub const TOKEN_FACTORY_PROGRAM_PATH: &str = "../../target/deploy/token_factory.so";

/// Lamports handed to every test wallet
pub const DEFAULT_WALLET_LAMPORTS: u64 = 10_000_000_000;

/// Compute budget large enough for mint + three associated accounts
pub const CREATE_TOKEN_COMPUTE_UNITS: u32 = 400_000;

// Localnet secret key behind the program's TRADING_AUTHORITY
// (GRHLUPNB3ceCgJMaScqaxzKMEZCPixFsicRE7a33vgJw).
pub const TRADING_AUTHORITY_PRIVATE_KEY: [u8; 32] = [
    218, 13, 244, 227, 174, 117, 192, 197, 172, 48, 118, 237, 9, 141, 183, 53, 114, 99, 143, 11,
    34, 107, 142, 83, 170, 130, 38, 65, 241, 74, 121, 213,
];

// Localnet secret key behind the program's PLATFORM_ADMIN
// (vBh3zCrM4xqWJiQNFufGUVhTPGen664WTMA74cMUBfC).
pub const PLATFORM_ADMIN_PRIVATE_KEY: [u8; 32] = [
    199, 18, 148, 243, 13, 29, 70, 140, 108, 245, 18, 61, 147, 145, 233, 9, 95, 125, 145, 167,
    248, 209, 30, 53, 238, 137, 225, 201, 54, 251, 37, 77,
];
