pub mod constants;
pub mod helpers;

use anchor_lang::prelude::*;
use solana_program_test::*;
use solana_sdk::{
    hash::Hash,
    instruction::{AccountMeta, Instruction as SdkInstruction},
    pubkey::Pubkey as SdkPubkey,
    signature::Keypair,
    signer::Signer,
    system_instruction,
    transaction::Transaction,
};
use std::fs;

pub use constants::*;
pub use solana_program_test::BanksClientError;

pub struct TestApp {
    pub context: ProgramTestContext,
}

fn to_sdk_pubkey(address: &Pubkey) -> SdkPubkey {
    SdkPubkey::new_from_array(address.to_bytes())
}

impl TestApp {
    /// Start a bank with the program loaded from the specified path
    pub async fn new_with_program(program_id: Pubkey, program_path: &str) -> Self {
        let program_data = fs::read(program_path)
            .expect("Failed to read program file. Make sure to run 'anchor build' first");

        let mut program_test = ProgramTest::default();
        program_test.add_account(
            to_sdk_pubkey(&program_id),
            solana_sdk::account::Account {
                lamports: 1_000_000,
                data: program_data,
                owner: solana_sdk::bpf_loader::id(),
                executable: true,
                rent_epoch: 0,
            },
        );

        Self {
            context: program_test.start_with_context().await,
        }
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.context.payer.pubkey().to_bytes())
    }

    /// Fetch a fresh blockhash so an identical transaction is not deduplicated
    pub async fn refresh_blockhash(&mut self) -> Hash {
        let blockhash = self
            .context
            .get_new_latest_blockhash()
            .await
            .expect("Failed to fetch a new blockhash");
        self.context.last_blockhash = blockhash;
        blockhash
    }

    pub async fn process_instruction(
        &mut self,
        instruction: SdkInstruction,
    ) -> std::result::Result<(), BanksClientError> {
        self.process_instructions(vec![instruction]).await
    }

    pub async fn process_instructions(
        &mut self,
        instructions: Vec<SdkInstruction>,
    ) -> std::result::Result<(), BanksClientError> {
        self.process_instructions_with_signers(instructions, &[]).await
    }

    fn signed_transaction(
        &self,
        instructions: &[SdkInstruction],
        signers: &[&Keypair],
    ) -> Transaction {
        let mut all_signers: Vec<&Keypair> = vec![&self.context.payer];
        all_signers.extend_from_slice(signers);

        Transaction::new_signed_with_payer(
            instructions,
            Some(&self.context.payer.pubkey()),
            all_signers.as_slice(),
            self.context.last_blockhash,
        )
    }

    /// Payer funds the fee, `signer` signs as well
    pub async fn process_instruction_as_signer(
        &mut self,
        instruction: SdkInstruction,
        signer: &Keypair,
    ) -> std::result::Result<(), BanksClientError> {
        self.process_instructions_with_signers(vec![instruction], &[signer])
            .await
    }

    pub async fn process_instructions_with_signers(
        &mut self,
        instructions: Vec<SdkInstruction>,
        signers: &[&Keypair],
    ) -> std::result::Result<(), BanksClientError> {
        let transaction = self.signed_transaction(&instructions, signers);

        self.context
            .banks_client
            .process_transaction(transaction)
            .await
    }

    /// Like `process_instructions_with_signers`, returning the program logs
    pub async fn process_instructions_with_logs(
        &mut self,
        instructions: Vec<SdkInstruction>,
        signers: &[&Keypair],
    ) -> std::result::Result<Vec<String>, BanksClientError> {
        let transaction = self.signed_transaction(&instructions, signers);

        let outcome = self
            .context
            .banks_client
            .process_transaction_with_metadata(transaction)
            .await?;
        outcome.result.map_err(BanksClientError::TransactionError)?;

        Ok(outcome
            .metadata
            .map(|metadata| metadata.log_messages)
            .unwrap_or_default())
    }

    /// Move lamports from the payer to `to`
    pub async fn fund_account(
        &mut self,
        to: &Pubkey,
        lamports: u64,
    ) -> std::result::Result<(), BanksClientError> {
        let instruction = system_instruction::transfer(
            &self.context.payer.pubkey(),
            &to_sdk_pubkey(to),
            lamports,
        );
        self.process_instruction(instruction).await
    }

    pub async fn get_account_data<T: anchor_lang::AccountDeserialize>(
        &mut self,
        address: Pubkey,
    ) -> Result<T> {
        let account = self
            .get_account(address)
            .await
            .ok_or(anchor_lang::error::ErrorCode::AccountNotInitialized)?;
        T::try_deserialize(&mut account.data.as_slice())
    }

    pub async fn get_account(&mut self, address: Pubkey) -> Option<solana_sdk::account::Account> {
        self.context
            .banks_client
            .get_account(to_sdk_pubkey(&address))
            .await
            .unwrap()
    }

    pub async fn get_balance(&mut self, address: Pubkey) -> u64 {
        self.context
            .banks_client
            .get_balance(to_sdk_pubkey(&address))
            .await
            .unwrap()
    }
}

/// Utility to convert Anchor Instruction to SDK Instruction
pub fn to_sdk_instruction(
    instruction: anchor_lang::solana_program::instruction::Instruction,
) -> SdkInstruction {
    SdkInstruction {
        program_id: to_sdk_pubkey(&instruction.program_id),
        accounts: instruction
            .accounts
            .iter()
            .map(|acc| AccountMeta {
                pubkey: to_sdk_pubkey(&acc.pubkey),
                is_signer: acc.is_signer,
                is_writable: acc.is_writable,
            })
            .collect(),
        data: instruction.data,
    }
}

/// Keypair's address as an anchor Pubkey
pub fn keypair_pubkey(keypair: &Keypair) -> Pubkey {
    Pubkey::new_from_array(keypair.pubkey().to_bytes())
}

/// Assert a failed transaction carries the given anchor error code
pub fn assert_anchor_error<T: std::fmt::Debug, E: Into<u32>>(
    result: std::result::Result<T, BanksClientError>,
    error: E,
) {
    let code: u32 = error.into();
    let message = result
        .expect_err("Transaction should have failed")
        .to_string();
    assert!(
        message.contains(&format!("{code:x}")),
        "expected error code {code:#x}, got: {message}"
    );
}
