use pinocchio::{
    account_info::AccountInfo,
    instruction::Seed,
    program_error::ProgramError,
    pubkey::{create_program_address, find_program_address, Pubkey},
    ProgramResult,
};

use crate::helpers::constant::MINT_AUTHORITY_SEED;

/// Canonical mint-authority PDA for a config account.
pub fn find_mint_authority(config: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[MINT_AUTHORITY_SEED, config.as_ref()], &crate::ID)
}

/// Checks the passed mint authority against the bump stored in the config.
pub fn check_mint_authority(
    mint_authority_info: &AccountInfo,
    config: &Pubkey,
    bump: u8,
) -> ProgramResult {
    let expected = create_program_address(
        &[MINT_AUTHORITY_SEED, config.as_ref(), &[bump]],
        &crate::ID,
    )
    .map_err(|_| ProgramError::InvalidSeeds)?;

    if mint_authority_info.key() != &expected {
        return Err(ProgramError::InvalidSeeds);
    }
    Ok(())
}

/// Signer seeds for CPIs where the mint authority PDA signs.
pub fn mint_authority_seeds<'a>(config: &'a Pubkey, bump: &'a [u8; 1]) -> [Seed<'a>; 3] {
    [
        Seed::from(MINT_AUTHORITY_SEED),
        Seed::from(config.as_ref()),
        Seed::from(&bump[..]),
    ]
}
