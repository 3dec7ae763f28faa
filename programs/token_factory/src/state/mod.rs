pub mod token_data;

pub use token_data::*;
