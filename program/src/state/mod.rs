pub mod config; // StablecoinConfig, AccountKind
pub mod role;   // Role

// Re-export the types so everyone can `use crate::state::{...}`.
pub use config::{AccountKind, ConfigParams, StablecoinConfig};
pub use role::Role;
