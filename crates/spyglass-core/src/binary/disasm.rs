//! Pull-style disassembler over a single function body's bytecode.
//!
//! The cursor yields one [`Instruction`] at a time. Iteration ends at the
//! `end` opcode, at any opcode outside the interpreted subset, or when an
//! immediate runs off the code slice; none of these are distinguished from
//! plain exhaustion.

use crate::binary::leb128::{self, Cursor};
use crate::binary::opcode::Opcode;

/// One decoded instruction, tagged with the immediate shape its opcode
/// carries. Only the control-flow, variable-access, call, and `i32.const`
/// forms carry immediates here; the remaining opcode families terminate the
/// instruction stream instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Unreachable,
    Nop,
    Block { block_type: i8 },
    Loop { block_type: i8 },
    If { block_type: i8 },
    Else,
    Return,
    Drop,
    Select,
    GetLocal { local_index: u32 },
    SetLocal { local_index: u32 },
    TeeLocal { local_index: u32 },
    GetGlobal { global_index: u32 },
    SetGlobal { global_index: u32 },
    Call { function_index: u32 },
    CallIndirect { type_index: u32, reserved: u8 },
    I32Const { value: i32 },
}

impl Instruction {
    /// The opcode this instruction was decoded from.
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Unreachable => Opcode::Unreachable,
            Instruction::Nop => Opcode::Nop,
            Instruction::Block { .. } => Opcode::Block,
            Instruction::Loop { .. } => Opcode::Loop,
            Instruction::If { .. } => Opcode::If,
            Instruction::Else => Opcode::Else,
            Instruction::Return => Opcode::Return,
            Instruction::Drop => Opcode::Drop,
            Instruction::Select => Opcode::Select,
            Instruction::GetLocal { .. } => Opcode::GetLocal,
            Instruction::SetLocal { .. } => Opcode::SetLocal,
            Instruction::TeeLocal { .. } => Opcode::TeeLocal,
            Instruction::GetGlobal { .. } => Opcode::GetGlobal,
            Instruction::SetGlobal { .. } => Opcode::SetGlobal,
            Instruction::Call { .. } => Opcode::Call,
            Instruction::CallIndirect { .. } => Opcode::CallIndirect,
            Instruction::I32Const { .. } => Opcode::I32Const,
        }
    }

    /// Canonical display name of the underlying opcode.
    pub fn name(&self) -> &'static str {
        self.opcode().name()
    }
}

/// A disassembly cursor over a borrowed code slice.
///
/// Construction does no parsing; each [`next_instruction`](Disasm::next_instruction)
/// call advances past exactly one opcode and its immediate. Dropping the
/// cursor never touches the underlying buffer.
#[derive(Debug, Clone)]
pub struct Disasm<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Disasm<'a> {
    /// Position the cursor at the start of `code`.
    pub fn new(code: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(code),
        }
    }

    /// Byte offset of the next undecoded instruction.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Decode the next instruction, or `None` when the stream ends.
    pub fn next_instruction(&mut self) -> Option<Instruction> {
        let byte = self.cursor.read_byte().ok()?;
        let opcode = Opcode::from_byte(byte)?;
        let c = &mut self.cursor;

        let instruction = match opcode {
            Opcode::End => return None,

            Opcode::Unreachable => Instruction::Unreachable,
            Opcode::Nop => Instruction::Nop,
            Opcode::Else => Instruction::Else,
            Opcode::Return => Instruction::Return,
            Opcode::Drop => Instruction::Drop,
            Opcode::Select => Instruction::Select,

            Opcode::Block => Instruction::Block {
                block_type: leb128::decode_i7(c).ok()?,
            },
            Opcode::Loop => Instruction::Loop {
                block_type: leb128::decode_i7(c).ok()?,
            },
            Opcode::If => Instruction::If {
                block_type: leb128::decode_i7(c).ok()?,
            },

            Opcode::GetLocal => Instruction::GetLocal {
                local_index: leb128::decode_u32(c).ok()?,
            },
            Opcode::SetLocal => Instruction::SetLocal {
                local_index: leb128::decode_u32(c).ok()?,
            },
            Opcode::TeeLocal => Instruction::TeeLocal {
                local_index: leb128::decode_u32(c).ok()?,
            },

            Opcode::GetGlobal => Instruction::GetGlobal {
                global_index: leb128::decode_u32(c).ok()?,
            },
            Opcode::SetGlobal => Instruction::SetGlobal {
                global_index: leb128::decode_u32(c).ok()?,
            },

            Opcode::Call => Instruction::Call {
                function_index: leb128::decode_u32(c).ok()?,
            },
            Opcode::CallIndirect => Instruction::CallIndirect {
                type_index: leb128::decode_u32(c).ok()?,
                reserved: leb128::decode_u7(c).ok()?,
            },

            Opcode::I32Const => Instruction::I32Const {
                value: leb128::decode_i32(c).ok()?,
            },

            // Arithmetic, comparison, conversion, and memory opcodes carry no
            // immediate-decoding logic here and end the sequence.
            _ => return None,
        };

        Some(instruction)
    }
}

impl Iterator for Disasm<'_> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        self.next_instruction()
    }
}
