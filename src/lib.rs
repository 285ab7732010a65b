//! Decoder, renderer, and register-model simulator for a subset of the
//! 8086 instruction set.

pub mod decoder;
pub mod executor;
pub mod instruction;

use decoder::{DecodeError, Decoder};
use instruction::Instruction;

/// Decodes a byte slice into a vector of 8086 instructions.
///
/// Processes bytes sequentially, stopping silently when the remaining
/// bytes cannot hold a whole instruction. An unclassifiable opcode byte
/// aborts the run.
pub fn disassemble(bytes: &[u8]) -> Result<Vec<Instruction>, DecodeError> {
    Decoder::new(bytes).decode_all()
}
