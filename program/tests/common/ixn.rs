use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use super::{program_id, system_program_id, token_program_id};

pub fn find_mint_authority(config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"mint_authority", config.as_ref()], &program_id())
}

fn push_str(data: &mut Vec<u8>, s: &str) {
    data.push(s.len() as u8);
    data.extend_from_slice(s.as_bytes());
}

fn with_amount(disc: u8, amount: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(9);
    data.push(disc);
    data.extend_from_slice(&amount.to_le_bytes());
    data
}

fn with_key(disc: u8, key: &Pubkey) -> Vec<u8> {
    let mut data = Vec::with_capacity(33);
    data.push(disc);
    data.extend_from_slice(key.as_ref());
    data
}

pub fn initialize(
    config: &Pubkey,
    mint: &Pubkey,
    authority: &Pubkey,
    decimals: u8,
    name: &str,
    symbol: &str,
    uri: &str,
) -> Instruction {
    let (mint_authority, _) = find_mint_authority(config);
    let mut data = vec![0u8, decimals];
    push_str(&mut data, name);
    push_str(&mut data, symbol);
    push_str(&mut data, uri);
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*config, true),
            AccountMeta::new(*mint, true),
            AccountMeta::new_readonly(mint_authority, false),
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(token_program_id(), false),
            AccountMeta::new_readonly(system_program_id(), false),
        ],
        data,
    }
}

pub fn mint(
    config: &Pubkey,
    mint: &Pubkey,
    recipient_token: &Pubkey,
    recipient: &Pubkey,
    minter: &Pubkey,
    amount: u64,
) -> Instruction {
    let (mint_authority, _) = find_mint_authority(config);
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*config, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(mint_authority, false),
            AccountMeta::new(*recipient_token, false),
            AccountMeta::new_readonly(*recipient, false),
            AccountMeta::new_readonly(*minter, true),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
        data: with_amount(1, amount),
    }
}

pub fn burn(
    config: &Pubkey,
    mint: &Pubkey,
    token_account: &Pubkey,
    burner: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*config, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new(*token_account, false),
            AccountMeta::new_readonly(*burner, true),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
        data: with_amount(3, amount),
    }
}

fn freeze_or_thaw(
    disc: u8,
    config: &Pubkey,
    mint: &Pubkey,
    token_account: &Pubkey,
    freezer: &Pubkey,
) -> Instruction {
    let (mint_authority, _) = find_mint_authority(config);
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(*config, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(*token_account, false),
            AccountMeta::new_readonly(*freezer, true),
            AccountMeta::new_readonly(mint_authority, false),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
        data: vec![disc],
    }
}

pub fn freeze_account(
    config: &Pubkey,
    mint: &Pubkey,
    token_account: &Pubkey,
    freezer: &Pubkey,
) -> Instruction {
    freeze_or_thaw(5, config, mint, token_account, freezer)
}

pub fn thaw_account(
    config: &Pubkey,
    mint: &Pubkey,
    token_account: &Pubkey,
    freezer: &Pubkey,
) -> Instruction {
    freeze_or_thaw(6, config, mint, token_account, freezer)
}

fn config_and_signer(disc_data: Vec<u8>, config: &Pubkey, signer: &Pubkey) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*config, false),
            AccountMeta::new_readonly(*signer, true),
        ],
        data: disc_data,
    }
}

pub fn pause(config: &Pubkey, pauser: &Pubkey) -> Instruction {
    config_and_signer(vec![7], config, pauser)
}

pub fn unpause(config: &Pubkey, pauser: &Pubkey) -> Instruction {
    config_and_signer(vec![8], config, pauser)
}

pub fn set_minter(config: &Pubkey, authority: &Pubkey, new_minter: &Pubkey) -> Instruction {
    config_and_signer(with_key(2, new_minter), config, authority)
}

pub fn set_burner(config: &Pubkey, authority: &Pubkey, new_burner: &Pubkey) -> Instruction {
    config_and_signer(with_key(4, new_burner), config, authority)
}

pub fn transfer_authority(
    config: &Pubkey,
    authority: &Pubkey,
    new_authority: &Pubkey,
) -> Instruction {
    config_and_signer(with_key(9, new_authority), config, authority)
}

pub fn set_pauser(config: &Pubkey, authority: &Pubkey, new_pauser: &Pubkey) -> Instruction {
    config_and_signer(with_key(10, new_pauser), config, authority)
}

pub fn initialize_token_account(account: &Pubkey, mint: &Pubkey, owner: &Pubkey) -> Instruction {
    spl_token::instruction::initialize_account3(&spl_token::id(), account, mint, owner).unwrap()
}
