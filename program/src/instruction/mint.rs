use pinocchio::{
    account_info::AccountInfo,
    instruction::Signer,
    program_error::ProgramError,
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_token::instructions::MintTo;

use crate::{
    error::{to_program_error, StablecoinError},
    events::Event,
    helpers::{check_mint_authority, mint_authority_seeds, require_program, require_writable},
    state::{Role, StablecoinConfig},
};

pub fn process_mint(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let [
        config_info,
        mint_info,
        mint_authority_info,
        recipient_token_info,
        recipient_info,
        minter_info,
        token_program,
        _rest @ ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    StablecoinConfig::check_account(config_info)?;
    require_writable(config_info)?;
    require_program(token_program, &pinocchio_token::ID)?;

    let mut data = config_info.try_borrow_mut_data()?;
    let config = StablecoinConfig::load_mut(&mut data)?;

    config.require_active().map_err(to_program_error)?;
    config
        .check_role(Role::Minter, minter_info.key(), minter_info.is_signer())
        .map_err(to_program_error)?;
    if amount == 0 {
        return Err(StablecoinError::InvalidAmount.into());
    }
    if mint_info.key() != &config.mint {
        return Err(ProgramError::InvalidAccountData);
    }
    check_mint_authority(mint_authority_info, config_info.key(), config.mint_authority_bump)?;

    // supply is recorded first; a failed CPI rolls the whole instruction back
    let new_supply = config.record_mint(amount).map_err(to_program_error)?;

    let bump = [config.mint_authority_bump];
    let seeds = mint_authority_seeds(config_info.key(), &bump);
    MintTo {
        mint: mint_info,
        account: recipient_token_info,
        mint_authority: mint_authority_info,
        amount,
    }
    .invoke_signed(&[Signer::from(&seeds[..])])?;

    Event::TokensMinted {
        recipient: recipient_info.key(),
        amount,
        new_supply,
    }
    .emit()?;

    log!("Minted {} tokens, supply now {}", amount, new_supply);
    Ok(())
}
