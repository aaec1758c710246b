use pinocchio::program_error::ProgramError;

/// Custom error codes start here so clients decode them the same way as
/// other framework-built programs.
pub const ERROR_CODE_OFFSET: u32 = 6000;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StablecoinError {
    NotInitialized,
    AlreadyInitialized,
    ProgramPaused,
    AlreadyPaused,
    NotPaused,
    UnauthorizedAuthority,
    UnauthorizedMinter,
    UnauthorizedBurner,
    UnauthorizedPauser,
    AccountFrozen,
    AccountNotFrozen,
    InvalidAmount,
    InsufficientBalance,
    Overflow,
    Underflow,
    InvalidMetadata,
    NameTooLong,
    SymbolTooLong,
    UriTooLong,
}

impl StablecoinError {
    const ALL: [StablecoinError; 19] = [
        StablecoinError::NotInitialized,
        StablecoinError::AlreadyInitialized,
        StablecoinError::ProgramPaused,
        StablecoinError::AlreadyPaused,
        StablecoinError::NotPaused,
        StablecoinError::UnauthorizedAuthority,
        StablecoinError::UnauthorizedMinter,
        StablecoinError::UnauthorizedBurner,
        StablecoinError::UnauthorizedPauser,
        StablecoinError::AccountFrozen,
        StablecoinError::AccountNotFrozen,
        StablecoinError::InvalidAmount,
        StablecoinError::InsufficientBalance,
        StablecoinError::Overflow,
        StablecoinError::Underflow,
        StablecoinError::InvalidMetadata,
        StablecoinError::NameTooLong,
        StablecoinError::SymbolTooLong,
        StablecoinError::UriTooLong,
    ];

    pub const fn code(self) -> u32 {
        ERROR_CODE_OFFSET + self as u32
    }

    pub const fn message(self) -> &'static str {
        match self {
            StablecoinError::NotInitialized => "Program is not initialized",
            StablecoinError::AlreadyInitialized => "Program is already initialized",
            StablecoinError::ProgramPaused => "Program is paused",
            StablecoinError::AlreadyPaused => "Program is already paused",
            StablecoinError::NotPaused => "Program is not paused",
            StablecoinError::UnauthorizedAuthority => "Unauthorized: Not a valid authority",
            StablecoinError::UnauthorizedMinter => "Unauthorized: Not a valid minter",
            StablecoinError::UnauthorizedBurner => "Unauthorized: Not a valid burner",
            StablecoinError::UnauthorizedPauser => "Unauthorized: Not a valid pauser",
            StablecoinError::AccountFrozen => "Account is frozen",
            StablecoinError::AccountNotFrozen => "Account is not frozen",
            StablecoinError::InvalidAmount => "Invalid amount",
            StablecoinError::InsufficientBalance => "Insufficient balance",
            StablecoinError::Overflow => "Math overflow",
            StablecoinError::Underflow => "Math underflow",
            StablecoinError::InvalidMetadata => "Invalid metadata",
            StablecoinError::NameTooLong => "Token name too long",
            StablecoinError::SymbolTooLong => "Token symbol too long",
            StablecoinError::UriTooLong => "Token URI too long",
        }
    }

    /// Reverse of [`StablecoinError::code`], used when logging a failed instruction.
    pub fn from_code(code: u32) -> Option<Self> {
        let index = code.checked_sub(ERROR_CODE_OFFSET)? as usize;
        Self::ALL.get(index).copied()
    }
}

impl From<StablecoinError> for ProgramError {
    fn from(err: StablecoinError) -> Self {
        ProgramError::Custom(err.code())
    }
}

// map internal errors to standard program error
pub fn to_program_error(err: StablecoinError) -> ProgramError {
    err.into()
}
