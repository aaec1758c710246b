use crate::error::StablecoinError;

/// The keys a config stores, one per privileged operation.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Master authority: manages the other roles and freezes accounts
    Authority,
    Minter,
    Burner,
    Pauser,
}

impl Role {
    /// Error returned when the signer does not hold this role.
    pub const fn unauthorized(self) -> StablecoinError {
        match self {
            Role::Authority => StablecoinError::UnauthorizedAuthority,
            Role::Minter => StablecoinError::UnauthorizedMinter,
            Role::Burner => StablecoinError::UnauthorizedBurner,
            Role::Pauser => StablecoinError::UnauthorizedPauser,
        }
    }
}
