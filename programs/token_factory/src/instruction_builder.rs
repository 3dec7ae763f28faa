use anchor_lang::{
    prelude::*, solana_program::instruction::Instruction, system_program, InstructionData,
};
use anchor_spl::associated_token::spl_associated_token_account;

use crate::constants::{MINT_AUTHORITY_SEED, TOKEN_DATA_SEED};

pub struct InstructionBuilder;

/// Record address of `mint`, computable without any lookup
pub fn find_token_data_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_DATA_SEED, mint.as_ref()], &crate::id())
}

pub fn find_mint_authority_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_AUTHORITY_SEED], &crate::id())
}

/// Addresses touched by `create_token`
pub struct CreateTokenAddresses {
    pub token_data: Pubkey,
    pub admin_token_account: Pubkey,
    pub burning_token_account: Pubkey,
    pub creator_token_account: Pubkey,
}

impl CreateTokenAddresses {
    pub fn derive(
        mint: &Pubkey,
        creator: &Pubkey,
        admin: &Pubkey,
        burning_wallet: &Pubkey,
    ) -> Self {
        let ata = |owner: &Pubkey| {
            spl_associated_token_account::get_associated_token_address(owner, mint)
        };

        Self {
            token_data: find_token_data_address(mint).0,
            admin_token_account: ata(admin),
            burning_token_account: ata(burning_wallet),
            creator_token_account: ata(creator),
        }
    }
}

impl InstructionBuilder {
    #[allow(clippy::too_many_arguments)]
    pub fn create_token(
        creator: &Pubkey,
        admin: &Pubkey,
        burning_wallet: &Pubkey,
        mint: &Pubkey,
        name: &str,
        symbol: &str,
        uri: &str,
        initial_purchase_amount: Option<u64>,
    ) -> (Instruction, CreateTokenAddresses) {
        let program_id = crate::id();
        let addresses = CreateTokenAddresses::derive(mint, creator, admin, burning_wallet);

        let accounts = crate::accounts::CreateToken {
            creator: *creator,
            admin: *admin,
            burning_wallet: *burning_wallet,
            mint_authority: find_mint_authority_address().0,
            mint: *mint,
            token_data: addresses.token_data,
            admin_token_account: addresses.admin_token_account,
            burning_token_account: addresses.burning_token_account,
            creator_token_account: addresses.creator_token_account,
            token_program: anchor_spl::token::ID,
            associated_token_program: spl_associated_token_account::id(),
            system_program: system_program::ID,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
        };

        let instruction = Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::CreateToken {
                name: name.to_string(),
                symbol: symbol.to_string(),
                uri: uri.to_string(),
                initial_purchase_amount,
            }
            .data(),
        };

        (instruction, addresses)
    }

    pub fn update_trading_data(
        trading_authority: &Pubkey,
        mint: &Pubkey,
        current_price: u64,
        market_cap: u64,
        total_volume: u64,
        holder_count: u32,
        transactions_count: u64,
    ) -> Instruction {
        let accounts = crate::accounts::UpdateTradingData {
            token_data: find_token_data_address(mint).0,
            trading_authority: *trading_authority,
        };

        Instruction {
            program_id: crate::id(),
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::UpdateTradingData {
                current_price,
                market_cap,
                total_volume,
                holder_count,
                transactions_count,
            }
            .data(),
        }
    }

    pub fn graduate_token(
        admin: &Pubkey,
        mint: &Pubkey,
        raydium_pool_id: Pubkey,
        graduation_fee: u64,
    ) -> Instruction {
        let accounts = crate::accounts::GraduateToken {
            token_data: find_token_data_address(mint).0,
            admin: *admin,
        };

        Instruction {
            program_id: crate::id(),
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::GraduateToken {
                raydium_pool_id,
                graduation_fee,
            }
            .data(),
        }
    }

    pub fn set_token_active(admin: &Pubkey, mint: &Pubkey, is_active: bool) -> Instruction {
        let accounts = crate::accounts::SetTokenActive {
            token_data: find_token_data_address(mint).0,
            admin: *admin,
        };

        Instruction {
            program_id: crate::id(),
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::SetTokenActive { is_active }.data(),
        }
    }
}
