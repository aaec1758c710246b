use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey, ProgramResult};

use crate::{
    error::to_program_error,
    events::Event,
    helpers::require_writable,
    state::{Role, StablecoinConfig},
};

pub fn process_pause(accounts: &[AccountInfo]) -> ProgramResult {
    set_paused(accounts, true)
}

pub fn process_unpause(accounts: &[AccountInfo]) -> ProgramResult {
    set_paused(accounts, false)
}

fn set_paused(accounts: &[AccountInfo], pause: bool) -> ProgramResult {
    let [config_info, pauser_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    StablecoinConfig::check_account(config_info)?;
    require_writable(config_info)?;

    let mut data = config_info.try_borrow_mut_data()?;
    let config = StablecoinConfig::load_mut(&mut data)?;

    config.require_initialized().map_err(to_program_error)?;
    config
        .check_role(Role::Pauser, pauser_info.key(), pauser_info.is_signer())
        .map_err(to_program_error)?;

    if pause {
        config.pause().map_err(to_program_error)?;
        Event::ProgramPaused {
            authority: pauser_info.key(),
        }
        .emit()?;
        pinocchio::msg!("Program paused by:");
    } else {
        config.unpause().map_err(to_program_error)?;
        Event::ProgramUnpaused {
            authority: pauser_info.key(),
        }
        .emit()?;
        pinocchio::msg!("Program unpaused by:");
    }
    pubkey::log(pauser_info.key());

    Ok(())
}
