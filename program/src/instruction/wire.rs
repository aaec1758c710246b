//! Bincode wire decoding for host (std) builds.
//!
//! Host tooling can submit instructions as a bincode-encoded [`WireInstruction`]
//! (fixed-width integers, no trailing bytes). The entrypoint tries this first and
//! falls back to the discriminator format when decoding fails.

use bincode::Options;
use serde::{Deserialize, Serialize};

use crate::instruction::{DecodedInstruction, InitializeArgs};

pub type WirePubkey = [u8; 32];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireInstruction {
    Initialize {
        decimals: u8,
        name: String,
        symbol: String,
        uri: String,
    },
    Mint(u64),
    SetMinter(WirePubkey),
    Burn(u64),
    SetBurner(WirePubkey),
    FreezeAccount,
    ThawAccount,
    Pause,
    Unpause,
    TransferAuthority(WirePubkey),
    SetPauser(WirePubkey),
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

impl WireInstruction {
    pub fn decode(data: &[u8]) -> Option<Self> {
        options().deserialize(data).ok()
    }

    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        options().serialize(self)
    }

    pub fn as_decoded(&self) -> DecodedInstruction<'_> {
        match self {
            WireInstruction::Initialize {
                decimals,
                name,
                symbol,
                uri,
            } => DecodedInstruction::Initialize(InitializeArgs {
                decimals: *decimals,
                name,
                symbol,
                uri,
            }),
            WireInstruction::Mint(amount) => DecodedInstruction::Mint { amount: *amount },
            WireInstruction::SetMinter(key) => DecodedInstruction::SetMinter { new_minter: *key },
            WireInstruction::Burn(amount) => DecodedInstruction::Burn { amount: *amount },
            WireInstruction::SetBurner(key) => DecodedInstruction::SetBurner { new_burner: *key },
            WireInstruction::FreezeAccount => DecodedInstruction::FreezeAccount,
            WireInstruction::ThawAccount => DecodedInstruction::ThawAccount,
            WireInstruction::Pause => DecodedInstruction::Pause,
            WireInstruction::Unpause => DecodedInstruction::Unpause,
            WireInstruction::TransferAuthority(key) => {
                DecodedInstruction::TransferAuthority { new_authority: *key }
            }
            WireInstruction::SetPauser(key) => DecodedInstruction::SetPauser { new_pauser: *key },
        }
    }
}
