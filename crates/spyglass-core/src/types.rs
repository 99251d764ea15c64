//! Core type definitions for the WebAssembly MVP binary format.
//!
//! The MVP encodes type constructors as small negative signed 7-bit values
//! and the category of an imported or exported symbol as a single byte.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// The MVP bounds a function type to this many parameters; the type section
/// decoder rejects declarations above it.
pub const MAX_FUNC_PARAMS: usize = 10;

/// Value types, encoded as signed 7-bit type constructor codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    I32,
    I64,
    F32,
    F64,
    AnyFunc,
    Func,
    EmptyBlock,
}

impl ValueType {
    /// The signed type constructor code for this value type.
    pub fn code(self) -> i8 {
        match self {
            ValueType::I32 => -0x01,
            ValueType::I64 => -0x02,
            ValueType::F32 => -0x03,
            ValueType::F64 => -0x04,
            ValueType::AnyFunc => -0x10,
            ValueType::Func => -0x20,
            ValueType::EmptyBlock => -0x40,
        }
    }

    /// Decode a value type from its signed type constructor code.
    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            -0x01 => Some(ValueType::I32),
            -0x02 => Some(ValueType::I64),
            -0x03 => Some(ValueType::F32),
            -0x04 => Some(ValueType::F64),
            -0x10 => Some(ValueType::AnyFunc),
            -0x20 => Some(ValueType::Func),
            -0x40 => Some(ValueType::EmptyBlock),
            _ => None,
        }
    }

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::I32 => "i32",
            ValueType::I64 => "i64",
            ValueType::F32 => "f32",
            ValueType::F64 => "f64",
            ValueType::AnyFunc => "anyfunc",
            ValueType::Func => "func",
            ValueType::EmptyBlock => "empty block_type",
        }
    }
}

/// Display name for a raw type constructor code, `"unknown"` out of range.
pub fn type_constructor_name(code: i8) -> &'static str {
    match ValueType::from_code(code) {
        Some(ty) => ty.name(),
        None => "unknown",
    }
}

/// The category of an imported or exported symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExternalKind {
    Function = 0,
    Table = 1,
    Memory = 2,
    Global = 3,
}

impl ExternalKind {
    /// Try to construct an `ExternalKind` from its encoding byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(ExternalKind::Function),
            1 => Some(ExternalKind::Table),
            2 => Some(ExternalKind::Memory),
            3 => Some(ExternalKind::Global),
            _ => None,
        }
    }

    /// Human-readable name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ExternalKind::Function => "function",
            ExternalKind::Table => "table",
            ExternalKind::Memory => "memory",
            ExternalKind::Global => "global",
        }
    }
}

/// Display name for a raw external kind byte, `"unknown"` out of range.
pub fn external_kind_name(byte: u8) -> &'static str {
    match ExternalKind::from_byte(byte) {
        Some(kind) => kind.name(),
        None => "unknown",
    }
}

/// Size constraints for memories and tables: an initial count and, when the
/// flags byte is 1, a maximum count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizableLimits {
    pub flags: u8,
    pub initial: u32,
    pub maximum: Option<u32>,
}

/// An imported global's descriptor: a type constructor code and mutability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalType {
    pub content_type: u8,
    pub mutability: bool,
}

/// An imported memory's descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryType {
    pub limits: ResizableLimits,
}

/// An imported table's descriptor: an element type code and limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableType {
    pub elem_type: i8,
    pub limits: ResizableLimits,
}

/// A function signature: the raw form code (expected to encode `func`),
/// parameter types, and at most one result type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncType {
    pub form: i8,
    pub params: Vec<ValueType>,
    pub result: Option<ValueType>,
}

/// One run of identically-typed locals in a function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalEntry {
    pub count: u32,
    pub value_type: ValueType,
}
