/// Seed prefix of the PDA that acts as mint and freeze authority.
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_URI_LEN: usize = 200;

// tag + name + symbol + decimals + mint + authority
pub const MAX_EVENT_LEN: usize = 1 + (1 + MAX_NAME_LEN) + (1 + MAX_SYMBOL_LEN) + 1 + 32 + 32;
