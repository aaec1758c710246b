use pinocchio::{
    account_info::AccountInfo,
    msg,
    program_error::ProgramError,
    pubkey::{self, Pubkey},
    ProgramResult,
};

use crate::{
    error::to_program_error,
    events::Event,
    helpers::require_writable,
    state::{Role, StablecoinConfig},
};

/// SetMinter, SetBurner, SetPauser and TransferAuthority: the master authority
/// replaces one role key. Allowed while paused.
pub fn process_set_role(accounts: &[AccountInfo], role: Role, new_key: Pubkey) -> ProgramResult {
    let [config_info, authority_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    StablecoinConfig::check_account(config_info)?;
    require_writable(config_info)?;

    let mut data = config_info.try_borrow_mut_data()?;
    let config = StablecoinConfig::load_mut(&mut data)?;

    config.require_initialized().map_err(to_program_error)?;
    config
        .check_role(Role::Authority, authority_info.key(), authority_info.is_signer())
        .map_err(to_program_error)?;

    config.set_role(role, new_key);

    let (event, label) = match role {
        Role::Authority => (
            Event::AuthorityTransferred {
                new_authority: &new_key,
            },
            "Authority transferred to:",
        ),
        Role::Minter => (
            Event::MinterUpdated {
                new_minter: &new_key,
            },
            "Minter updated to:",
        ),
        Role::Burner => (
            Event::BurnerUpdated {
                new_burner: &new_key,
            },
            "Burner updated to:",
        ),
        Role::Pauser => (
            Event::PauserUpdated {
                new_pauser: &new_key,
            },
            "Pauser updated to:",
        ),
    };
    event.emit()?;

    msg!(label);
    pubkey::log(&new_key);
    Ok(())
}
