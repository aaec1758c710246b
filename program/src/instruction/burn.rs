use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;
use pinocchio_token::{instructions::Burn, state::TokenAccount};

use crate::{
    error::{to_program_error, StablecoinError},
    events::Event,
    helpers::{require_program, require_writable},
    state::{Role, StablecoinConfig},
};

pub fn process_burn(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let [
        config_info,
        mint_info,
        token_account_info,
        burner_info,
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
        .check_role(Role::Burner, burner_info.key(), burner_info.is_signer())
        .map_err(to_program_error)?;
    if amount == 0 {
        return Err(StablecoinError::InvalidAmount.into());
    }
    if mint_info.key() != &config.mint {
        return Err(ProgramError::InvalidAccountData);
    }

    // token account borrow must end before the CPI
    {
        let token_account = TokenAccount::from_account_info(token_account_info)?;
        if token_account.mint() != &config.mint {
            return Err(ProgramError::InvalidAccountData);
        }
        if token_account.is_frozen() {
            return Err(StablecoinError::AccountFrozen.into());
        }
        if token_account.amount() < amount {
            return Err(StablecoinError::InsufficientBalance.into());
        }
    }

    let new_supply = config.record_burn(amount).map_err(to_program_error)?;

    // burner signs as owner or delegate of the token account
    Burn {
        account: token_account_info,
        mint: mint_info,
        authority: burner_info,
        amount,
    }
    .invoke()?;

    Event::TokensBurned {
        from: token_account_info.key(),
        amount,
        new_supply,
    }
    .emit()?;

    log!("Burned {} tokens, supply now {}", amount, new_supply);
    Ok(())
}
