#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine};
use solana_program_test::{BanksClientError, ProgramTest, ProgramTestBanksClientExt};
use solana_sdk::program_pack::Pack;
use spl_token::state::{Account as TokenAccount, Mint};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, ProgramTestContext};
pub use solana_sdk::{
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};
pub use sss_one::{error::StablecoinError, events::Event, state::StablecoinConfig};

// Shared instruction builders
pub mod ixn;

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(sss_one::ID)
}

pub fn token_program_id() -> Pubkey {
    spl_token::id()
}

pub fn system_program_id() -> Pubkey {
    Pubkey::new_from_array(pinocchio_system::ID)
}

pub fn program_test() -> ProgramTest {
    let deploy_dir = format!("{}/target/deploy", env!("CARGO_MANIFEST_DIR"));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("sss_one.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.set_compute_max_units(400_000);
    pt.add_upgradeable_program_to_genesis("sss_one", &program_id());
    pt
}

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

/// Signs with the payer plus `signers` and submits on a fresh blockhash.
pub async fn send(
    ctx: &mut ProgramTestContext,
    ixs: &[Instruction],
    signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    refresh_blockhash(ctx).await;
    let mut all: Vec<&Keypair> = vec![&ctx.payer];
    all.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&ctx.payer.pubkey()),
        &all,
        ctx.last_blockhash,
    );
    ctx.banks_client.process_transaction(tx).await
}

/// Like [`send`], but simulates first and returns the program logs.
pub async fn send_with_logs(
    ctx: &mut ProgramTestContext,
    ixs: &[Instruction],
    signers: &[&Keypair],
) -> Vec<String> {
    refresh_blockhash(ctx).await;
    let mut all: Vec<&Keypair> = vec![&ctx.payer];
    all.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&ctx.payer.pubkey()),
        &all,
        ctx.last_blockhash,
    );

    let sim = ctx.banks_client.simulate_transaction(tx.clone()).await.unwrap();
    let logs = sim.simulation_details.unwrap().logs;
    assert!(matches!(sim.result, Some(Ok(()))), "simulation failed: {:#?}", logs);

    ctx.banks_client.process_transaction(tx).await.unwrap();
    logs
}

/// The log line `sol_log_data` writes for `event`.
pub fn event_log_line(event: &Event) -> String {
    let mut buf = [0u8; sss_one::helpers::MAX_EVENT_LEN];
    let len = event.encode(&mut buf).unwrap();
    format!("Program data: {}", STANDARD.encode(&buf[..len]))
}

pub fn assert_event_logged(logs: &[String], event: &Event) {
    let line = event_log_line(event);
    assert!(
        logs.iter().any(|l| l == &line),
        "missing {:?}\nlogs: {:#?}",
        event,
        logs
    );
}

pub fn assert_custom_error(res: Result<(), BanksClientError>, expected: StablecoinError) {
    let err = res.expect_err("transaction should fail").unwrap();
    assert_eq!(
        err,
        TransactionError::InstructionError(0, InstructionError::Custom(expected.code())),
        "expected {:?}",
        expected
    );
}

pub fn assert_instruction_error(res: Result<(), BanksClientError>, expected: InstructionError) {
    let err = res.expect_err("transaction should fail").unwrap();
    assert_eq!(err, TransactionError::InstructionError(0, expected));
}

pub struct Stablecoin {
    pub config: Keypair,
    pub mint: Keypair,
    pub mint_authority: Pubkey,
}

impl Stablecoin {
    pub fn new() -> Self {
        let config = Keypair::new();
        let (mint_authority, _) = ixn::find_mint_authority(&config.pubkey());
        Self {
            config,
            mint: Keypair::new(),
            mint_authority,
        }
    }

    pub fn config(&self) -> Pubkey {
        self.config.pubkey()
    }

    pub fn mint(&self) -> Pubkey {
        self.mint.pubkey()
    }
}

/// Runs Initialize with the payer as authority (and every role).
pub async fn setup_stablecoin(ctx: &mut ProgramTestContext) -> Stablecoin {
    let coin = Stablecoin::new();
    let ix = ixn::initialize(
        &coin.config(),
        &coin.mint(),
        &ctx.payer.pubkey(),
        6,
        "Test USD",
        "TUSD",
        "https://example.com/tusd.json",
    );
    send(ctx, &[ix], &[&coin.config, &coin.mint]).await.unwrap();
    coin
}

pub async fn create_token_account(
    ctx: &mut ProgramTestContext,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Pubkey {
    let account = Keypair::new();
    let rent = ctx.banks_client.get_rent().await.unwrap();
    let create = system_instruction::create_account(
        &ctx.payer.pubkey(),
        &account.pubkey(),
        rent.minimum_balance(TokenAccount::LEN),
        TokenAccount::LEN as u64,
        &token_program_id(),
    );
    let init = ixn::initialize_token_account(&account.pubkey(), mint, owner);
    send(ctx, &[create, init], &[&account]).await.unwrap();
    account.pubkey()
}

pub async fn read_config(ctx: &mut ProgramTestContext, config: &Pubkey) -> StablecoinConfig {
    let account = ctx
        .banks_client
        .get_account(*config)
        .await
        .unwrap()
        .expect("config account exists");
    assert_eq!(account.owner, program_id());
    *StablecoinConfig::load(&account.data).unwrap()
}

pub async fn token_account(ctx: &mut ProgramTestContext, key: &Pubkey) -> TokenAccount {
    TokenAccount::unpack(&account_data(ctx, key).await).unwrap()
}

pub async fn token_amount(ctx: &mut ProgramTestContext, key: &Pubkey) -> u64 {
    token_account(ctx, key).await.amount
}

pub async fn is_frozen(ctx: &mut ProgramTestContext, key: &Pubkey) -> bool {
    token_account(ctx, key).await.is_frozen()
}

pub async fn mint_state(ctx: &mut ProgramTestContext, mint: &Pubkey) -> Mint {
    Mint::unpack(&account_data(ctx, mint).await).unwrap()
}

pub async fn mint_supply(ctx: &mut ProgramTestContext, mint: &Pubkey) -> u64 {
    mint_state(ctx, mint).await.supply
}

async fn account_data(ctx: &mut ProgramTestContext, key: &Pubkey) -> Vec<u8> {
    ctx.banks_client
        .get_account(*key)
        .await
        .unwrap()
        .expect("account exists")
        .data
}
