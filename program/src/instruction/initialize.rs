use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::CreateAccount;
use pinocchio_token::{instructions::InitializeMint2, state::Mint};

use crate::{
    error::{to_program_error, StablecoinError},
    events::Event,
    helpers::{
        find_mint_authority, require_program, require_signer, require_uninitialized,
        require_writable, PayloadReader,
    },
    state::{ConfigParams, StablecoinConfig},
};

/// Payload: decimals u8 | name str | symbol str | uri str
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeArgs<'a> {
    pub decimals: u8,
    pub name: &'a str,
    pub symbol: &'a str,
    pub uri: &'a str,
}

impl<'a> InitializeArgs<'a> {
    pub fn read(reader: &mut PayloadReader<'a>) -> Result<Self, ProgramError> {
        Ok(Self {
            decimals: reader.read_u8()?,
            name: reader.read_str()?,
            symbol: reader.read_str()?,
            uri: reader.read_str()?,
        })
    }
}

pub fn process_initialize(accounts: &[AccountInfo], args: InitializeArgs) -> ProgramResult {
    let [
        config_info,
        mint_info,
        mint_authority_info,
        authority_info,
        token_program,
        system_program,
        _rest @ ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(authority_info)?;
    require_signer(config_info)?;
    require_signer(mint_info)?;
    require_writable(authority_info)?;
    require_writable(config_info)?;
    require_writable(mint_info)?;
    require_program(token_program, &pinocchio_token::ID)?;
    require_program(system_program, &pinocchio_system::ID)?;

    StablecoinConfig::validate_metadata(args.name, args.symbol, args.uri)
        .map_err(to_program_error)?;

    // a config we already own can only have come from an earlier Initialize
    if config_info.is_owned_by(&crate::ID) {
        let data = config_info.try_borrow_data()?;
        return match StablecoinConfig::load(&data) {
            Ok(config) if config.is_initialized() => Err(StablecoinError::AlreadyInitialized.into()),
            _ => Err(ProgramError::AccountAlreadyInitialized),
        };
    }
    require_uninitialized(config_info)?;
    require_uninitialized(mint_info)?;

    let (expected_authority, bump) = find_mint_authority(config_info.key());
    if mint_authority_info.key() != &expected_authority {
        return Err(ProgramError::InvalidSeeds);
    }

    let rent = Rent::get()?;

    CreateAccount {
        from: authority_info,
        to: config_info,
        lamports: rent.minimum_balance(StablecoinConfig::LEN),
        space: StablecoinConfig::LEN as u64,
        owner: &crate::ID,
    }
    .invoke()?;

    CreateAccount {
        from: authority_info,
        to: mint_info,
        lamports: rent.minimum_balance(Mint::LEN),
        space: Mint::LEN as u64,
        owner: &pinocchio_token::ID,
    }
    .invoke()?;

    // the PDA holds both mint and freeze authority
    InitializeMint2 {
        mint: mint_info,
        decimals: args.decimals,
        mint_authority: mint_authority_info.key(),
        freeze_authority: Some(mint_authority_info.key()),
    }
    .invoke()?;

    {
        let mut data = config_info.try_borrow_mut_data()?;
        let config = StablecoinConfig::load_mut(&mut data)?;
        config
            .initialize(&ConfigParams {
                decimals: args.decimals,
                name: args.name,
                symbol: args.symbol,
                uri: args.uri,
                mint: *mint_info.key(),
                authority: *authority_info.key(),
                mint_authority_bump: bump,
            })
            .map_err(to_program_error)?;
    }

    Event::StablecoinInitialized {
        name: args.name,
        symbol: args.symbol,
        decimals: args.decimals,
        mint: mint_info.key(),
        authority: authority_info.key(),
    }
    .emit()?;

    log!("SSS-1 Stablecoin initialized: {}", args.symbol);
    Ok(())
}
