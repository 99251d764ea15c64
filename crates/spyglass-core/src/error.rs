//! Error types for binary decoding.
//!
//! All errors carry byte offsets into the original binary and structured context,
//! enabling precise diagnostic messages.

use core::fmt;

/// The byte offset into the WASM binary where an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteOffset(pub usize);

/// Contextual information about what was being decoded when the error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeContext {
    /// Decoding the WASM magic number.
    Magic,
    /// Decoding the WASM version number.
    Version,
    /// Decoding a section header (id + payload length).
    SectionHeader,
    /// Decoding a custom section's name.
    CustomName,
    /// Framing a section body against the declared payload length.
    SectionBody { id: u8 },
    /// Decoding a LEB128 value.
    Leb128,
    /// Decoding a type section entry.
    TypeSection,
    /// Decoding an import section entry.
    ImportSection,
    /// Decoding an export section entry.
    ExportSection,
    /// Decoding a function section entry.
    FunctionSection,
    /// Decoding a code section entry.
    CodeSection,
    /// Decoding a data section entry.
    DataSection,
}

impl fmt::Display for DecodeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeContext::Magic => write!(f, "WASM magic number"),
            DecodeContext::Version => write!(f, "WASM version"),
            DecodeContext::SectionHeader => write!(f, "section header"),
            DecodeContext::CustomName => write!(f, "custom section name"),
            DecodeContext::SectionBody { id } => write!(f, "section body (id={id})"),
            DecodeContext::Leb128 => write!(f, "LEB128 value"),
            DecodeContext::TypeSection => write!(f, "type section"),
            DecodeContext::ImportSection => write!(f, "import section"),
            DecodeContext::ExportSection => write!(f, "export section"),
            DecodeContext::FunctionSection => write!(f, "function section"),
            DecodeContext::CodeSection => write!(f, "code section"),
            DecodeContext::DataSection => write!(f, "data section"),
        }
    }
}

/// Errors that can occur during binary decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// Byte offset into the binary where the error was detected.
    pub offset: ByteOffset,
    /// What was being decoded.
    pub context: DecodeContext,
    /// The specific error kind.
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    /// Replace the context, keeping offset and kind. Used by callers that know
    /// more about what was being decoded than the primitive that failed.
    pub(crate) fn in_context(mut self, context: DecodeContext) -> Self {
        self.context = context;
        self
    }

    /// Replace the reported offset, keeping context and kind.
    pub(crate) fn at_offset(mut self, offset: usize) -> Self {
        self.offset = ByteOffset(offset);
        self
    }
}

/// Specific categories of decode errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Unexpected end of input.
    UnexpectedEof,
    /// Invalid magic number (expected `\0asm`).
    InvalidMagic,
    /// LEB128 encoding exceeds the maximum number of bytes for the target type.
    Leb128TooLong,
    /// Section payload extends beyond the end of the binary.
    SectionOverflow,
    /// Unknown external kind byte in an import or export entry.
    UnknownExternalKind { found: u8 },
    /// Unknown value type code.
    UnknownValueType { found: i8 },
    /// A function type declares more parameters than the format allows.
    TooManyParams { count: u32 },
    /// A function body's local declarations run past its declared body size.
    LocalsExceedBodySize { body_size: u32 },
    /// A data segment's offset expression has no terminating `end` opcode.
    OffsetExprUnterminated,
    /// A name string is not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "decode error at byte {}: {}: {}",
            self.offset.0, self.context, self.kind
        )
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErrorKind::UnexpectedEof => write!(f, "unexpected end of input"),
            DecodeErrorKind::InvalidMagic => write!(f, "invalid magic number (expected \\0asm)"),
            DecodeErrorKind::Leb128TooLong => write!(f, "LEB128 encoding too long"),
            DecodeErrorKind::SectionOverflow => {
                write!(f, "section extends beyond end of binary")
            }
            DecodeErrorKind::UnknownExternalKind { found } => {
                write!(f, "unknown external kind {found:#04x}")
            }
            DecodeErrorKind::UnknownValueType { found } => {
                write!(f, "unknown value type {found}")
            }
            DecodeErrorKind::TooManyParams { count } => {
                write!(f, "function type declares {count} parameters")
            }
            DecodeErrorKind::LocalsExceedBodySize { body_size } => {
                write!(
                    f,
                    "local declarations run past the declared body size ({body_size} bytes)"
                )
            }
            DecodeErrorKind::OffsetExprUnterminated => {
                write!(f, "data segment offset expression has no end opcode")
            }
            DecodeErrorKind::InvalidUtf8 => write!(f, "name is not valid UTF-8"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

// For no_std with core::error::Error (stabilized in Rust 1.81+)
#[cfg(not(feature = "std"))]
impl core::error::Error for DecodeError {}
