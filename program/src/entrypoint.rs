use crate::{
    error::StablecoinError,
    instruction::{self, DecodedInstruction},
    state::Role,
};
use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};
use pinocchio_log::log;

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if program_id != &crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    // Host builds also accept the bincode wire encoding
    #[cfg(feature = "std")]
    {
        if let Some(wire_ix) = instruction::wire::WireInstruction::decode(instruction_data) {
            return dispatch(accounts, wire_ix.as_decoded()).inspect_err(log_error);
        }
    }

    let ix = DecodedInstruction::unpack(instruction_data)?;
    dispatch(accounts, ix).inspect_err(log_error)
}

fn dispatch(accounts: &[AccountInfo], ix: DecodedInstruction) -> ProgramResult {
    match ix {
        // --------------------------------------------------------------------
        // Initialization
        // --------------------------------------------------------------------
        DecodedInstruction::Initialize(args) => {
            msg!("Instruction: Initialize");
            instruction::process_initialize(accounts, args)
        }

        // --------------------------------------------------------------------
        // Supply
        // --------------------------------------------------------------------
        DecodedInstruction::Mint { amount } => {
            msg!("Instruction: Mint");
            instruction::process_mint(accounts, amount)
        }
        DecodedInstruction::Burn { amount } => {
            msg!("Instruction: Burn");
            instruction::process_burn(accounts, amount)
        }

        // --------------------------------------------------------------------
        // Freeze / thaw
        // --------------------------------------------------------------------
        DecodedInstruction::FreezeAccount => {
            msg!("Instruction: FreezeAccount");
            instruction::process_freeze_account(accounts)
        }
        DecodedInstruction::ThawAccount => {
            msg!("Instruction: ThawAccount");
            instruction::process_thaw_account(accounts)
        }

        // --------------------------------------------------------------------
        // Pause
        // --------------------------------------------------------------------
        DecodedInstruction::Pause => {
            msg!("Instruction: Pause");
            instruction::process_pause(accounts)
        }
        DecodedInstruction::Unpause => {
            msg!("Instruction: Unpause");
            instruction::process_unpause(accounts)
        }

        // --------------------------------------------------------------------
        // Roles
        // --------------------------------------------------------------------
        DecodedInstruction::SetMinter { new_minter } => {
            msg!("Instruction: SetMinter");
            instruction::process_set_role(accounts, Role::Minter, new_minter)
        }
        DecodedInstruction::SetBurner { new_burner } => {
            msg!("Instruction: SetBurner");
            instruction::process_set_role(accounts, Role::Burner, new_burner)
        }
        DecodedInstruction::SetPauser { new_pauser } => {
            msg!("Instruction: SetPauser");
            instruction::process_set_role(accounts, Role::Pauser, new_pauser)
        }
        DecodedInstruction::TransferAuthority { new_authority } => {
            msg!("Instruction: TransferAuthority");
            instruction::process_set_role(accounts, Role::Authority, new_authority)
        }
    }
}

fn log_error(err: &ProgramError) {
    if let ProgramError::Custom(code) = err {
        if let Some(err) = StablecoinError::from_code(*code) {
            log!("Error: {}", err.message());
        }
    }
}
