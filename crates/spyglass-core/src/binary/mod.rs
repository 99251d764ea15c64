//! WebAssembly MVP binary format decoding.

pub mod disasm;
pub mod entry;
pub mod leb128;
pub mod module;
pub mod opcode;
pub mod section;
