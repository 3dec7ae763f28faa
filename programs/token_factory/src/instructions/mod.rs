pub mod create_token;
pub mod graduate_token;
pub mod set_token_active;
pub mod update_trading_data;

pub use create_token::*;
pub use graduate_token::*;
pub use set_token_active::*;
pub use update_trading_data::*;
