//! Per-section entry decoding.
//!
//! Each decoder reads a leading entry count and then exactly that many
//! entries. Declared counts and sizes are never trusted: every read is
//! bounds-checked against the bytes actually remaining, so a section
//! claiming more entries than the buffer holds fails at the first read past
//! the end instead of over-allocating up front.

#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::binary::leb128::{self, Cursor};
use crate::binary::opcode::Opcode;
use crate::error::{ByteOffset, DecodeContext, DecodeError, DecodeErrorKind};
use crate::types::{
    ExternalKind, FuncType, GlobalType, LocalEntry, MemoryType, ResizableLimits, TableType,
    ValueType, MAX_FUNC_PARAMS,
};

/// One imported symbol. The kind-specific descriptor (type index, limits,
/// global type) is decoded for bounds validation and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    pub module: String,
    pub field: String,
    pub kind: ExternalKind,
}

/// One exported symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    pub field: String,
    pub kind: ExternalKind,
    pub index: u32,
}

/// One function body: its declared size, local declarations, and a borrowed
/// view of the bytecode that follows them. The view's lifetime is tied to
/// the module's input buffer; nothing is copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBody<'a> {
    pub body_size: u32,
    pub locals: Vec<LocalEntry>,
    pub code: &'a [u8],
}

/// One linear-memory data segment. The offset constant-expression preceding
/// the payload is skipped as an opaque byte run; the payload itself is
/// copied out of the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSegment {
    pub index: u32,
    pub size: u32,
    pub data: Vec<u8>,
}

/// Read a LEB128-length-prefixed name string.
pub(crate) fn read_name(cursor: &mut Cursor<'_>, context: DecodeContext) -> Result<String, DecodeError> {
    let len = leb128::decode_u32(cursor).map_err(|e| e.in_context(context))?;
    let start = cursor.position();
    let bytes = cursor
        .read_bytes(len as usize)
        .map_err(|e| e.in_context(context))?;
    String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError {
        offset: ByteOffset(start),
        context,
        kind: DecodeErrorKind::InvalidUtf8,
    })
}

fn read_value_type(cursor: &mut Cursor<'_>, context: DecodeContext) -> Result<ValueType, DecodeError> {
    let start = cursor.position();
    let code = leb128::decode_i7(cursor).map_err(|e| e.in_context(context))?;
    ValueType::from_code(code).ok_or(DecodeError {
        offset: ByteOffset(start),
        context,
        kind: DecodeErrorKind::UnknownValueType { found: code },
    })
}

fn parse_resizable_limits(cursor: &mut Cursor<'_>) -> Result<ResizableLimits, DecodeError> {
    let flags = leb128::decode_u7(cursor)?;
    let initial = leb128::decode_u32(cursor)?;
    let maximum = if flags == 1 {
        Some(leb128::decode_u32(cursor)?)
    } else {
        None
    };
    Ok(ResizableLimits {
        flags,
        initial,
        maximum,
    })
}

fn parse_global_type(cursor: &mut Cursor<'_>) -> Result<GlobalType, DecodeError> {
    let content_type = leb128::decode_u7(cursor)?;
    let mutability = leb128::decode_u7(cursor)?;
    Ok(GlobalType {
        content_type,
        mutability: mutability == 1,
    })
}

fn parse_memory_type(cursor: &mut Cursor<'_>) -> Result<MemoryType, DecodeError> {
    Ok(MemoryType {
        limits: parse_resizable_limits(cursor)?,
    })
}

fn parse_table_type(cursor: &mut Cursor<'_>) -> Result<TableType, DecodeError> {
    let elem_type = leb128::decode_i7(cursor)?;
    let limits = parse_resizable_limits(cursor)?;
    Ok(TableType { elem_type, limits })
}

/// Decode the type section: function signatures.
pub fn parse_type_entries(cursor: &mut Cursor<'_>) -> Result<Vec<FuncType>, DecodeError> {
    const CTX: DecodeContext = DecodeContext::TypeSection;

    let count = leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;
    let mut entries = Vec::new();

    for _ in 0..count {
        let form = leb128::decode_i7(cursor).map_err(|e| e.in_context(CTX))?;

        let param_count_offset = cursor.position();
        let param_count = leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;
        if param_count as usize > MAX_FUNC_PARAMS {
            return Err(DecodeError {
                offset: ByteOffset(param_count_offset),
                context: CTX,
                kind: DecodeErrorKind::TooManyParams { count: param_count },
            });
        }

        let mut params = Vec::with_capacity(param_count as usize);
        for _ in 0..param_count {
            params.push(read_value_type(cursor, CTX)?);
        }

        let return_count = leb128::decode_u7(cursor).map_err(|e| e.in_context(CTX))?;
        let result = if return_count > 0 {
            Some(read_value_type(cursor, CTX)?)
        } else {
            None
        };

        entries.push(FuncType {
            form,
            params,
            result,
        });
    }

    Ok(entries)
}

/// Decode the import section: named symbols with kind-specific descriptors.
pub fn parse_import_entries(cursor: &mut Cursor<'_>) -> Result<Vec<ImportEntry>, DecodeError> {
    const CTX: DecodeContext = DecodeContext::ImportSection;

    let count = leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;
    let mut entries = Vec::new();

    for _ in 0..count {
        let module = read_name(cursor, CTX)?;
        let field = read_name(cursor, CTX)?;

        let kind_offset = cursor.position();
        let kind_byte = cursor.read_byte().map_err(|e| e.in_context(CTX))?;
        let kind = ExternalKind::from_byte(kind_byte).ok_or(DecodeError {
            offset: ByteOffset(kind_offset),
            context: CTX,
            kind: DecodeErrorKind::UnknownExternalKind { found: kind_byte },
        })?;

        // The descriptor is length-validated but not retained.
        match kind {
            ExternalKind::Function => {
                let _type_index =
                    leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;
            }
            ExternalKind::Global => {
                parse_global_type(cursor).map_err(|e| e.in_context(CTX))?;
            }
            ExternalKind::Memory => {
                parse_memory_type(cursor).map_err(|e| e.in_context(CTX))?;
            }
            ExternalKind::Table => {
                parse_table_type(cursor).map_err(|e| e.in_context(CTX))?;
            }
        }

        entries.push(ImportEntry {
            module,
            field,
            kind,
        });
    }

    Ok(entries)
}

/// Decode the export section.
pub fn parse_export_entries(cursor: &mut Cursor<'_>) -> Result<Vec<ExportEntry>, DecodeError> {
    const CTX: DecodeContext = DecodeContext::ExportSection;

    let count = leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;
    let mut entries = Vec::new();

    for _ in 0..count {
        let field = read_name(cursor, CTX)?;

        let kind_offset = cursor.position();
        let kind_byte = cursor.read_byte().map_err(|e| e.in_context(CTX))?;
        let kind = ExternalKind::from_byte(kind_byte).ok_or(DecodeError {
            offset: ByteOffset(kind_offset),
            context: CTX,
            kind: DecodeErrorKind::UnknownExternalKind { found: kind_byte },
        })?;

        let index = leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;

        entries.push(ExportEntry { field, kind, index });
    }

    Ok(entries)
}

/// Decode the function section: one type index per declared function.
pub fn parse_function_entries(cursor: &mut Cursor<'_>) -> Result<Vec<u32>, DecodeError> {
    const CTX: DecodeContext = DecodeContext::FunctionSection;

    let count = leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;
    let mut entries = Vec::new();

    for _ in 0..count {
        entries.push(leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?);
    }

    Ok(entries)
}

/// Decode the code section: function bodies.
///
/// The local declarations and the bytecode view are both measured from the
/// position immediately after the body-size field; the view is whatever the
/// declared body size leaves after the locals.
pub fn parse_code_entries<'a>(
    cursor: &mut Cursor<'a>,
) -> Result<Vec<FunctionBody<'a>>, DecodeError> {
    const CTX: DecodeContext = DecodeContext::CodeSection;

    let count = leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;
    let mut entries = Vec::new();

    for _ in 0..count {
        let body_size = leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;
        let body_start = cursor.position();

        let local_count = leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;
        let mut locals = Vec::new();
        for _ in 0..local_count {
            let repeat = leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;
            let value_type = read_value_type(cursor, CTX)?;
            locals.push(LocalEntry {
                count: repeat,
                value_type,
            });
        }

        let locals_len = cursor.position() - body_start;
        let Some(code_len) = (body_size as usize).checked_sub(locals_len) else {
            return Err(DecodeError {
                offset: ByteOffset(cursor.position()),
                context: CTX,
                kind: DecodeErrorKind::LocalsExceedBodySize { body_size },
            });
        };

        let code = cursor
            .read_bytes(code_len)
            .map_err(|e| e.in_context(CTX))?;

        entries.push(FunctionBody {
            body_size,
            locals,
            code,
        });
    }

    Ok(entries)
}

/// Decode the data section: linear-memory initializer segments.
pub fn parse_data_entries(cursor: &mut Cursor<'_>) -> Result<Vec<DataSegment>, DecodeError> {
    const CTX: DecodeContext = DecodeContext::DataSection;

    let count = leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;
    let mut entries = Vec::new();

    for _ in 0..count {
        let index = leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;

        // The offset constant-expression is opaque here; skip up to and
        // including its terminating end opcode.
        let expr_offset = cursor.position();
        let terminator = cursor
            .remaining()
            .iter()
            .position(|&b| b == Opcode::End as u8)
            .ok_or(DecodeError {
                offset: ByteOffset(expr_offset),
                context: CTX,
                kind: DecodeErrorKind::OffsetExprUnterminated,
            })?;
        cursor
            .advance(terminator + 1)
            .map_err(|e| e.in_context(CTX))?;

        let size = leb128::decode_u32(cursor).map_err(|e| e.in_context(CTX))?;
        let data = cursor
            .read_bytes(size as usize)
            .map_err(|e| e.in_context(CTX))?
            .to_vec();

        entries.push(DataSegment { index, size, data });
    }

    Ok(entries)
}
