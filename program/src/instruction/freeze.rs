use pinocchio::{
    account_info::AccountInfo,
    instruction::Signer,
    program_error::ProgramError,
    pubkey,
    ProgramResult,
};
use pinocchio_token::{
    instructions::{FreezeAccount, ThawAccount},
    state::TokenAccount,
};

use crate::{
    error::{to_program_error, StablecoinError},
    events::Event,
    helpers::{check_mint_authority, mint_authority_seeds, require_program, require_writable},
    state::{Role, StablecoinConfig},
};

pub fn process_freeze_account(accounts: &[AccountInfo]) -> ProgramResult {
    set_frozen(accounts, true)
}

pub fn process_thaw_account(accounts: &[AccountInfo]) -> ProgramResult {
    set_frozen(accounts, false)
}

fn set_frozen(accounts: &[AccountInfo], freeze: bool) -> ProgramResult {
    let [
        config_info,
        mint_info,
        token_account_info,
        freezer_info,
        mint_authority_info,
        token_program,
        _rest @ ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    StablecoinConfig::check_account(config_info)?;
    require_writable(token_account_info)?;
    require_program(token_program, &pinocchio_token::ID)?;

    let data = config_info.try_borrow_data()?;
    let config = StablecoinConfig::load(&data)?;

    config.require_active().map_err(to_program_error)?;
    config
        .check_role(Role::Authority, freezer_info.key(), freezer_info.is_signer())
        .map_err(to_program_error)?;
    if mint_info.key() != &config.mint {
        return Err(ProgramError::InvalidAccountData);
    }
    check_mint_authority(mint_authority_info, config_info.key(), config.mint_authority_bump)?;

    {
        let token_account = TokenAccount::from_account_info(token_account_info)?;
        if token_account.mint() != &config.mint {
            return Err(ProgramError::InvalidAccountData);
        }
        match (freeze, token_account.is_frozen()) {
            (true, true) => return Err(StablecoinError::AccountFrozen.into()),
            (false, false) => return Err(StablecoinError::AccountNotFrozen.into()),
            _ => {}
        }
    }

    let bump = [config.mint_authority_bump];
    let seeds = mint_authority_seeds(config_info.key(), &bump);
    let signer = Signer::from(&seeds[..]);

    if freeze {
        FreezeAccount {
            account: token_account_info,
            mint: mint_info,
            freeze_authority: mint_authority_info,
        }
        .invoke_signed(&[signer])?;

        Event::AccountFrozen {
            account: token_account_info.key(),
        }
        .emit()?;
        pinocchio::msg!("Account frozen:");
    } else {
        ThawAccount {
            account: token_account_info,
            mint: mint_info,
            freeze_authority: mint_authority_info,
        }
        .invoke_signed(&[signer])?;

        Event::AccountThawed {
            account: token_account_info.key(),
        }
        .emit()?;
        pinocchio::msg!("Account thawed:");
    }
    pubkey::log(token_account_info.key());

    Ok(())
}
