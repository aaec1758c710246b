//! Program events.
//!
//! Each event is written to the transaction log with `sol_log_data` as a single
//! slice: a one-byte tag followed by the fields (pubkeys as 32 bytes, integers
//! little-endian, strings as `u8` length + bytes).

use pinocchio::{log::sol_log_data, program_error::ProgramError, pubkey::Pubkey, ProgramResult};

use crate::helpers::{ByteWriter, MAX_EVENT_LEN};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTag {
    StablecoinInitialized,
    TokensMinted,
    MinterUpdated,
    TokensBurned,
    BurnerUpdated,
    AccountFrozen,
    AccountThawed,
    ProgramPaused,
    ProgramUnpaused,
    AuthorityTransferred,
    PauserUpdated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    StablecoinInitialized {
        name: &'a str,
        symbol: &'a str,
        decimals: u8,
        mint: &'a Pubkey,
        authority: &'a Pubkey,
    },
    TokensMinted {
        recipient: &'a Pubkey,
        amount: u64,
        new_supply: u64,
    },
    MinterUpdated {
        new_minter: &'a Pubkey,
    },
    TokensBurned {
        from: &'a Pubkey,
        amount: u64,
        new_supply: u64,
    },
    BurnerUpdated {
        new_burner: &'a Pubkey,
    },
    AccountFrozen {
        account: &'a Pubkey,
    },
    AccountThawed {
        account: &'a Pubkey,
    },
    ProgramPaused {
        authority: &'a Pubkey,
    },
    ProgramUnpaused {
        authority: &'a Pubkey,
    },
    AuthorityTransferred {
        new_authority: &'a Pubkey,
    },
    PauserUpdated {
        new_pauser: &'a Pubkey,
    },
}

impl Event<'_> {
    pub fn tag(&self) -> EventTag {
        match self {
            Event::StablecoinInitialized { .. } => EventTag::StablecoinInitialized,
            Event::TokensMinted { .. } => EventTag::TokensMinted,
            Event::MinterUpdated { .. } => EventTag::MinterUpdated,
            Event::TokensBurned { .. } => EventTag::TokensBurned,
            Event::BurnerUpdated { .. } => EventTag::BurnerUpdated,
            Event::AccountFrozen { .. } => EventTag::AccountFrozen,
            Event::AccountThawed { .. } => EventTag::AccountThawed,
            Event::ProgramPaused { .. } => EventTag::ProgramPaused,
            Event::ProgramUnpaused { .. } => EventTag::ProgramUnpaused,
            Event::AuthorityTransferred { .. } => EventTag::AuthorityTransferred,
            Event::PauserUpdated { .. } => EventTag::PauserUpdated,
        }
    }

    /// Writes the event into `buf` and returns the encoded length.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, ProgramError> {
        let mut w = ByteWriter::new(buf);
        w.write_u8(self.tag() as u8)?;

        match *self {
            Event::StablecoinInitialized {
                name,
                symbol,
                decimals,
                mint,
                authority,
            } => {
                w.write_str(name)?;
                w.write_str(symbol)?;
                w.write_u8(decimals)?;
                w.write_pubkey(mint)?;
                w.write_pubkey(authority)?;
            }
            Event::TokensMinted {
                recipient: key,
                amount,
                new_supply,
            }
            | Event::TokensBurned {
                from: key,
                amount,
                new_supply,
            } => {
                w.write_pubkey(key)?;
                w.write_u64(amount)?;
                w.write_u64(new_supply)?;
            }
            Event::MinterUpdated { new_minter: key }
            | Event::BurnerUpdated { new_burner: key }
            | Event::AccountFrozen { account: key }
            | Event::AccountThawed { account: key }
            | Event::ProgramPaused { authority: key }
            | Event::ProgramUnpaused { authority: key }
            | Event::AuthorityTransferred { new_authority: key }
            | Event::PauserUpdated { new_pauser: key } => {
                w.write_pubkey(key)?;
            }
        }

        Ok(w.len())
    }

    pub fn emit(&self) -> ProgramResult {
        let mut buf = [0u8; MAX_EVENT_LEN];
        let len = self.encode(&mut buf)?;
        sol_log_data(&[&buf[..len]]);
        Ok(())
    }
}
