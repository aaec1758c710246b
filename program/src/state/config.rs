use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey, ProgramResult};
use shank::ShankAccount;

use crate::{
    error::StablecoinError,
    helpers::{require_owner, MAX_NAME_LEN, MAX_SYMBOL_LEN, MAX_URI_LEN},
    state::Role,
};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Uninitialized = 0,
    Config = 1,
}

/// Configuration account of one SSS-1 stablecoin.
///
/// Every field is a byte or a byte array so the struct has alignment 1 and can
/// be cast straight from account data. Integers are stored little-endian.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ShankAccount)]
pub struct StablecoinConfig {
    discriminator: u8,
    pub decimals: u8,
    is_paused: u8,
    initialized: u8,
    name_len: u8,
    symbol_len: u8,
    uri_len: u8,
    /// Bump of the mint authority PDA
    pub mint_authority_bump: u8,
    name: [u8; 32],   // MAX_NAME_LEN; shank needs a literal length
    symbol: [u8; 10], // MAX_SYMBOL_LEN
    uri: [u8; 200],   // MAX_URI_LEN
    pub mint: Pubkey,
    pub authority: Pubkey,
    pub minter: Pubkey,
    pub burner: Pubkey,
    pub pauser: Pubkey,
    total_supply: [u8; 8],
}

/// Values written by `Initialize`.
pub struct ConfigParams<'a> {
    pub decimals: u8,
    pub name: &'a str,
    pub symbol: &'a str,
    pub uri: &'a str,
    pub mint: Pubkey,
    pub authority: Pubkey,
    pub mint_authority_bump: u8,
}

impl StablecoinConfig {
    pub const LEN: usize = core::mem::size_of::<StablecoinConfig>();

    pub const fn zeroed() -> Self {
        Self {
            discriminator: AccountKind::Uninitialized as u8,
            decimals: 0,
            is_paused: 0,
            initialized: 0,
            name_len: 0,
            symbol_len: 0,
            uri_len: 0,
            mint_authority_bump: 0,
            name: [0; MAX_NAME_LEN],
            symbol: [0; MAX_SYMBOL_LEN],
            uri: [0; MAX_URI_LEN],
            mint: [0; 32],
            authority: [0; 32],
            minter: [0; 32],
            burner: [0; 32],
            pauser: [0; 32],
            total_supply: [0; 8],
        }
    }

    // ---- account access ----

    /// Owner and size checks for a config passed to any instruction after `Initialize`.
    pub fn check_account(info: &AccountInfo) -> ProgramResult {
        require_owner(info, &crate::ID)?;
        if info.data_len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(())
    }

    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        // alignment 1 and every bit pattern is a valid value
        Ok(unsafe { &*(data.as_ptr() as *const Self) })
    }

    pub fn load_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    // ---- initialization ----

    pub fn validate_metadata(name: &str, symbol: &str, uri: &str) -> Result<(), StablecoinError> {
        if name.len() > MAX_NAME_LEN {
            return Err(StablecoinError::NameTooLong);
        }
        if symbol.len() > MAX_SYMBOL_LEN {
            return Err(StablecoinError::SymbolTooLong);
        }
        if uri.len() > MAX_URI_LEN {
            return Err(StablecoinError::UriTooLong);
        }
        if name.is_empty() || symbol.is_empty() {
            return Err(StablecoinError::InvalidMetadata);
        }
        Ok(())
    }

    /// Fills a fresh config. Minter, burner and pauser start out as the authority.
    pub fn initialize(&mut self, params: &ConfigParams) -> Result<(), StablecoinError> {
        if self.is_initialized() {
            return Err(StablecoinError::AlreadyInitialized);
        }
        Self::validate_metadata(params.name, params.symbol, params.uri)?;

        *self = Self::zeroed();
        self.discriminator = AccountKind::Config as u8;
        self.decimals = params.decimals;
        self.mint_authority_bump = params.mint_authority_bump;

        self.name_len = params.name.len() as u8;
        self.name[..params.name.len()].copy_from_slice(params.name.as_bytes());
        self.symbol_len = params.symbol.len() as u8;
        self.symbol[..params.symbol.len()].copy_from_slice(params.symbol.as_bytes());
        self.uri_len = params.uri.len() as u8;
        self.uri[..params.uri.len()].copy_from_slice(params.uri.as_bytes());

        self.mint = params.mint;
        self.authority = params.authority;
        self.minter = params.authority;
        self.burner = params.authority;
        self.pauser = params.authority;
        self.initialized = 1;
        Ok(())
    }

    // ---- metadata ----

    pub fn kind(&self) -> AccountKind {
        match self.discriminator {
            1 => AccountKind::Config,
            _ => AccountKind::Uninitialized,
        }
    }

    pub fn name(&self) -> &str {
        utf8_prefix(&self.name, self.name_len)
    }

    pub fn symbol(&self) -> &str {
        utf8_prefix(&self.symbol, self.symbol_len)
    }

    pub fn uri(&self) -> &str {
        utf8_prefix(&self.uri, self.uri_len)
    }

    // ---- lifecycle ----

    pub fn is_initialized(&self) -> bool {
        self.initialized != 0 && self.kind() == AccountKind::Config
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused != 0
    }

    pub fn require_initialized(&self) -> Result<(), StablecoinError> {
        if !self.is_initialized() {
            return Err(StablecoinError::NotInitialized);
        }
        Ok(())
    }

    /// Token movements need a live, unpaused stablecoin. The pause check comes first.
    pub fn require_active(&self) -> Result<(), StablecoinError> {
        if self.is_paused() {
            return Err(StablecoinError::ProgramPaused);
        }
        self.require_initialized()
    }

    pub fn pause(&mut self) -> Result<(), StablecoinError> {
        if self.is_paused() {
            return Err(StablecoinError::AlreadyPaused);
        }
        self.is_paused = 1;
        Ok(())
    }

    pub fn unpause(&mut self) -> Result<(), StablecoinError> {
        if !self.is_paused() {
            return Err(StablecoinError::NotPaused);
        }
        self.is_paused = 0;
        Ok(())
    }

    // ---- roles ----

    pub fn role(&self, role: Role) -> &Pubkey {
        match role {
            Role::Authority => &self.authority,
            Role::Minter => &self.minter,
            Role::Burner => &self.burner,
            Role::Pauser => &self.pauser,
        }
    }

    pub fn set_role(&mut self, role: Role, key: Pubkey) {
        match role {
            Role::Authority => self.authority = key,
            Role::Minter => self.minter = key,
            Role::Burner => self.burner = key,
            Role::Pauser => self.pauser = key,
        }
    }

    /// The caller must have signed and hold `role`.
    pub fn check_role(&self, role: Role, key: &Pubkey, is_signer: bool) -> Result<(), StablecoinError> {
        if !is_signer || self.role(role) != key {
            return Err(role.unauthorized());
        }
        Ok(())
    }

    // ---- supply ----

    pub fn total_supply(&self) -> u64 {
        u64::from_le_bytes(self.total_supply)
    }

    /// Returns the new supply.
    pub fn record_mint(&mut self, amount: u64) -> Result<u64, StablecoinError> {
        let supply = self
            .total_supply()
            .checked_add(amount)
            .ok_or(StablecoinError::Overflow)?;
        self.total_supply = supply.to_le_bytes();
        Ok(supply)
    }

    /// Returns the new supply.
    pub fn record_burn(&mut self, amount: u64) -> Result<u64, StablecoinError> {
        let supply = self
            .total_supply()
            .checked_sub(amount)
            .ok_or(StablecoinError::Underflow)?;
        self.total_supply = supply.to_le_bytes();
        Ok(supply)
    }
}

fn utf8_prefix(bytes: &[u8], len: u8) -> &str {
    let end = (len as usize).min(bytes.len());
    core::str::from_utf8(&bytes[..end]).unwrap_or("")
}
