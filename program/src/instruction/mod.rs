use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use shank::ShankInstruction;

use crate::helpers::PayloadReader;

pub mod authority;
pub use authority::*;

pub mod burn;
pub use burn::*;

pub mod freeze;
pub use freeze::*;

pub mod initialize;
pub use initialize::*;

pub mod mint;
pub use mint::*;

pub mod pause;
pub use pause::*;

#[cfg(feature = "std")]
pub mod wire;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum StablecoinInstruction {
    /// Create the config and mint accounts and initialize the mint
    #[account(0, writable, signer, name = "config", desc = "New stablecoin config account")]
    #[account(1, writable, signer, name = "mint", desc = "New SPL mint account")]
    #[account(2, name = "mint_authority", desc = "PDA [\"mint_authority\", config]")]
    #[account(3, writable, signer, name = "authority", desc = "Master authority and rent payer")]
    #[account(4, name = "token_program", desc = "SPL Token program")]
    #[account(5, name = "system_program", desc = "System program")]
    Initialize,

    #[account(0, writable, name = "config", desc = "Stablecoin config")]
    #[account(1, writable, name = "mint", desc = "Stablecoin mint")]
    #[account(2, name = "mint_authority", desc = "Mint authority PDA")]
    #[account(3, writable, name = "recipient_token_account", desc = "Token account receiving the tokens")]
    #[account(4, name = "recipient", desc = "Owner of the recipient token account")]
    #[account(5, signer, name = "minter", desc = "Configured minter")]
    #[account(6, name = "token_program", desc = "SPL Token program")]
    Mint,

    #[account(0, writable, name = "config", desc = "Stablecoin config")]
    #[account(1, signer, name = "authority", desc = "Master authority")]
    SetMinter,

    #[account(0, writable, name = "config", desc = "Stablecoin config")]
    #[account(1, writable, name = "mint", desc = "Stablecoin mint")]
    #[account(2, writable, name = "token_account", desc = "Token account to burn from")]
    #[account(3, signer, name = "burner", desc = "Configured burner, owner or delegate of the token account")]
    #[account(4, name = "token_program", desc = "SPL Token program")]
    Burn,

    #[account(0, writable, name = "config", desc = "Stablecoin config")]
    #[account(1, signer, name = "authority", desc = "Master authority")]
    SetBurner,

    #[account(0, name = "config", desc = "Stablecoin config")]
    #[account(1, name = "mint", desc = "Stablecoin mint")]
    #[account(2, writable, name = "token_account", desc = "Token account to freeze")]
    #[account(3, signer, name = "freezer", desc = "Master authority")]
    #[account(4, name = "mint_authority", desc = "Mint authority PDA, the freeze authority")]
    #[account(5, name = "token_program", desc = "SPL Token program")]
    FreezeAccount,

    #[account(0, name = "config", desc = "Stablecoin config")]
    #[account(1, name = "mint", desc = "Stablecoin mint")]
    #[account(2, writable, name = "token_account", desc = "Token account to thaw")]
    #[account(3, signer, name = "freezer", desc = "Master authority")]
    #[account(4, name = "mint_authority", desc = "Mint authority PDA, the freeze authority")]
    #[account(5, name = "token_program", desc = "SPL Token program")]
    ThawAccount,

    #[account(0, writable, name = "config", desc = "Stablecoin config")]
    #[account(1, signer, name = "pauser", desc = "Configured pauser")]
    Pause,

    #[account(0, writable, name = "config", desc = "Stablecoin config")]
    #[account(1, signer, name = "pauser", desc = "Configured pauser")]
    Unpause,

    #[account(0, writable, name = "config", desc = "Stablecoin config")]
    #[account(1, signer, name = "authority", desc = "Current master authority")]
    TransferAuthority,

    #[account(0, writable, name = "config", desc = "Stablecoin config")]
    #[account(1, signer, name = "authority", desc = "Master authority")]
    SetPauser,
}

impl TryFrom<&u8> for StablecoinInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(StablecoinInstruction::Initialize),
            1 => Ok(StablecoinInstruction::Mint),
            2 => Ok(StablecoinInstruction::SetMinter),
            3 => Ok(StablecoinInstruction::Burn),
            4 => Ok(StablecoinInstruction::SetBurner),
            5 => Ok(StablecoinInstruction::FreezeAccount),
            6 => Ok(StablecoinInstruction::ThawAccount),
            7 => Ok(StablecoinInstruction::Pause),
            8 => Ok(StablecoinInstruction::Unpause),
            9 => Ok(StablecoinInstruction::TransferAuthority),
            10 => Ok(StablecoinInstruction::SetPauser),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// An instruction with its payload decoded. Strings borrow from the instruction data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodedInstruction<'a> {
    Initialize(InitializeArgs<'a>),
    Mint { amount: u64 },
    SetMinter { new_minter: Pubkey },
    Burn { amount: u64 },
    SetBurner { new_burner: Pubkey },
    FreezeAccount,
    ThawAccount,
    Pause,
    Unpause,
    TransferAuthority { new_authority: Pubkey },
    SetPauser { new_pauser: Pubkey },
}

impl<'a> DecodedInstruction<'a> {
    /// `[discriminator, payload..]`; the payload must be consumed exactly.
    pub fn unpack(data: &'a [u8]) -> Result<Self, ProgramError> {
        let (disc, payload) = data
            .split_first()
            .ok_or(ProgramError::InvalidInstructionData)?;

        let mut reader = PayloadReader::new(payload);
        let ix = match StablecoinInstruction::try_from(disc)? {
            StablecoinInstruction::Initialize => {
                DecodedInstruction::Initialize(InitializeArgs::read(&mut reader)?)
            }
            StablecoinInstruction::Mint => DecodedInstruction::Mint {
                amount: reader.read_u64()?,
            },
            StablecoinInstruction::SetMinter => DecodedInstruction::SetMinter {
                new_minter: reader.read_pubkey()?,
            },
            StablecoinInstruction::Burn => DecodedInstruction::Burn {
                amount: reader.read_u64()?,
            },
            StablecoinInstruction::SetBurner => DecodedInstruction::SetBurner {
                new_burner: reader.read_pubkey()?,
            },
            StablecoinInstruction::FreezeAccount => DecodedInstruction::FreezeAccount,
            StablecoinInstruction::ThawAccount => DecodedInstruction::ThawAccount,
            StablecoinInstruction::Pause => DecodedInstruction::Pause,
            StablecoinInstruction::Unpause => DecodedInstruction::Unpause,
            StablecoinInstruction::TransferAuthority => DecodedInstruction::TransferAuthority {
                new_authority: reader.read_pubkey()?,
            },
            StablecoinInstruction::SetPauser => DecodedInstruction::SetPauser {
                new_pauser: reader.read_pubkey()?,
            },
        };
        reader.finish()?;
        Ok(ix)
    }
}
