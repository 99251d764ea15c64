//! Section framing and dispatch.
//!
//! Sections are the top-level organizational unit of a WASM binary: a 7-bit
//! id, a declared payload length, and a payload whose structure depends on
//! the id. The declared length is authoritative for stream framing — the
//! cursor always advances by exactly `payload_len` past the header fields,
//! whatever the entry decoder consumed.

#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::binary::entry::{
    self, DataSegment, ExportEntry, FunctionBody, ImportEntry,
};
use crate::binary::leb128::{self, Cursor};
use crate::error::{ByteOffset, DecodeContext, DecodeError, DecodeErrorKind};
use crate::types::FuncType;

/// WASM MVP section identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SectionId {
    Custom = 0,
    Type = 1,
    Import = 2,
    Function = 3,
    Table = 4,
    Memory = 5,
    Global = 6,
    Export = 7,
    Start = 8,
    Element = 9,
    Code = 10,
    Data = 11,
}

impl SectionId {
    /// Try to construct a `SectionId` from a raw byte value.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(SectionId::Custom),
            1 => Some(SectionId::Type),
            2 => Some(SectionId::Import),
            3 => Some(SectionId::Function),
            4 => Some(SectionId::Table),
            5 => Some(SectionId::Memory),
            6 => Some(SectionId::Global),
            7 => Some(SectionId::Export),
            8 => Some(SectionId::Start),
            9 => Some(SectionId::Element),
            10 => Some(SectionId::Code),
            11 => Some(SectionId::Data),
            _ => None,
        }
    }

    /// Human-readable name for this section.
    pub fn name(self) -> &'static str {
        match self {
            SectionId::Custom => "custom",
            SectionId::Type => "type",
            SectionId::Import => "import",
            SectionId::Function => "function",
            SectionId::Table => "table",
            SectionId::Memory => "memory",
            SectionId::Global => "global",
            SectionId::Export => "export",
            SectionId::Start => "start",
            SectionId::Element => "element",
            SectionId::Code => "code",
            SectionId::Data => "data",
        }
    }
}

/// Display name for a raw section id byte, `"unknown"` out of range.
pub fn section_name(byte: u8) -> &'static str {
    match SectionId::from_byte(byte) {
        Some(id) => id.name(),
        None => "unknown",
    }
}

/// The decoded entries of one section, typed by section kind.
///
/// Sections this decoder does not interpret (table, memory, global, start,
/// element, custom, and unassigned ids) carry no entries; their payload is
/// skipped by the declared length.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionPayload<'a> {
    Types(Vec<FuncType>),
    Imports(Vec<ImportEntry>),
    Exports(Vec<ExportEntry>),
    Functions(Vec<u32>),
    Code(Vec<FunctionBody<'a>>),
    Data(Vec<DataSegment>),
    Opaque,
}

impl SectionPayload<'_> {
    /// Number of decoded entries; zero for uninterpreted payloads.
    pub fn entry_count(&self) -> usize {
        match self {
            SectionPayload::Types(entries) => entries.len(),
            SectionPayload::Imports(entries) => entries.len(),
            SectionPayload::Exports(entries) => entries.len(),
            SectionPayload::Functions(entries) => entries.len(),
            SectionPayload::Code(entries) => entries.len(),
            SectionPayload::Data(entries) => entries.len(),
            SectionPayload::Opaque => 0,
        }
    }
}

/// One decoded section.
///
/// `id` is kept raw: unassigned ids (12 and above) are tolerated and carried
/// through with an uninterpreted payload rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    /// The raw section id byte.
    pub id: u8,
    /// The declared payload length from the section header.
    pub payload_len: u32,
    /// Byte offset of the payload within the original binary.
    pub offset: usize,
    /// The section's name; present only for custom sections.
    pub name: Option<String>,
    /// The decoded entries.
    pub payload: SectionPayload<'a>,
}

impl Section<'_> {
    /// The recognized section kind, if the raw id maps to one.
    pub fn kind(&self) -> Option<SectionId> {
        SectionId::from_byte(self.id)
    }

    /// Display name for this section's id.
    pub fn id_name(&self) -> &'static str {
        section_name(self.id)
    }
}

/// The WASM binary magic number `\0asm`, as a little-endian u32.
pub const WASM_MAGIC: u32 = 0x6D73_6100;

/// Decode the 8-byte preamble, returning `(magic, version)`.
///
/// The magic must match; the version is recorded verbatim and left to the
/// caller (this decoder does not validate it).
pub fn parse_preamble(cursor: &mut Cursor<'_>) -> Result<(u32, u32), DecodeError> {
    let magic_bytes = cursor.read_bytes(4).map_err(|_| DecodeError {
        offset: ByteOffset(0),
        context: DecodeContext::Magic,
        kind: DecodeErrorKind::UnexpectedEof,
    })?;
    let magic = u32::from_le_bytes([magic_bytes[0], magic_bytes[1], magic_bytes[2], magic_bytes[3]]);

    if magic != WASM_MAGIC {
        return Err(DecodeError {
            offset: ByteOffset(0),
            context: DecodeContext::Magic,
            kind: DecodeErrorKind::InvalidMagic,
        });
    }

    let version_bytes = cursor.read_bytes(4).map_err(|_| DecodeError {
        offset: ByteOffset(4),
        context: DecodeContext::Version,
        kind: DecodeErrorKind::UnexpectedEof,
    })?;
    let version = u32::from_le_bytes([
        version_bytes[0],
        version_bytes[1],
        version_bytes[2],
        version_bytes[3],
    ]);

    Ok((magic, version))
}

/// Parse one section from a cursor positioned at its id byte.
///
/// Entry decoding runs on its own cursor bounded by the whole remaining
/// buffer; afterwards the caller's cursor advances by exactly the declared
/// payload length. A payload length that would overrun the buffer fails the
/// section before any entry is decoded.
pub fn parse_section<'a>(cursor: &mut Cursor<'a>) -> Result<Section<'a>, DecodeError> {
    let header_offset = cursor.position();

    let id = leb128::decode_u7(cursor)
        .map_err(|e| e.in_context(DecodeContext::SectionHeader))?;
    let payload_len = leb128::decode_u32(cursor)
        .map_err(|e| e.in_context(DecodeContext::SectionHeader))?;
    let payload_offset = cursor.position();

    if payload_len as usize > cursor.remaining().len() {
        return Err(DecodeError {
            offset: ByteOffset(header_offset),
            context: DecodeContext::SectionHeader,
            kind: DecodeErrorKind::SectionOverflow,
        });
    }

    // Custom sections carry a length-prefixed name at the start of the
    // payload. It is read on a forked cursor: the payload length already
    // covers it, so the framing below must not advance past it twice.
    let name = if SectionId::from_byte(id) == Some(SectionId::Custom) {
        let mut peek = cursor.clone();
        Some(entry::read_name(&mut peek, DecodeContext::CustomName)?)
    } else {
        None
    };

    let mut body = cursor.clone();
    let payload = match SectionId::from_byte(id) {
        Some(SectionId::Type) => SectionPayload::Types(entry::parse_type_entries(&mut body)?),
        Some(SectionId::Import) => {
            SectionPayload::Imports(entry::parse_import_entries(&mut body)?)
        }
        Some(SectionId::Export) => {
            SectionPayload::Exports(entry::parse_export_entries(&mut body)?)
        }
        Some(SectionId::Function) => {
            SectionPayload::Functions(entry::parse_function_entries(&mut body)?)
        }
        Some(SectionId::Code) => SectionPayload::Code(entry::parse_code_entries(&mut body)?),
        Some(SectionId::Data) => SectionPayload::Data(entry::parse_data_entries(&mut body)?),
        _ => SectionPayload::Opaque,
    };

    cursor
        .advance(payload_len as usize)
        .map_err(|e| e.in_context(DecodeContext::SectionBody { id }))?;

    Ok(Section {
        id,
        payload_len,
        offset: payload_offset,
        name,
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preamble_minimal() {
        let data = [0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(&data);
        let (magic, version) = parse_preamble(&mut cursor).unwrap();
        assert_eq!(magic, WASM_MAGIC);
        assert_eq!(version, 1);
        assert!(cursor.is_empty());
    }

    #[test]
    fn reject_bad_magic() {
        let data = [0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(&data);
        let err = parse_preamble(&mut cursor).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::InvalidMagic);
    }

    #[test]
    fn version_is_not_validated() {
        let data = [0x00, 0x61, 0x73, 0x6D, 0x07, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(&data);
        let (_, version) = parse_preamble(&mut cursor).unwrap();
        assert_eq!(version, 7);
    }

    #[test]
    fn reject_truncated_preamble() {
        let data = [0x00, 0x61];
        let mut cursor = Cursor::new(&data);
        let err = parse_preamble(&mut cursor).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::UnexpectedEof);
        assert_eq!(err.context, DecodeContext::Magic);
    }

    #[test]
    fn empty_type_section() {
        // id=1, payload_len=1, payload = count 0
        let data = [0x01, 0x01, 0x00];
        let mut cursor = Cursor::new(&data);
        let section = parse_section(&mut cursor).unwrap();
        assert_eq!(section.kind(), Some(SectionId::Type));
        assert_eq!(section.payload_len, 1);
        assert_eq!(section.payload, SectionPayload::Types(Vec::new()));
        assert!(cursor.is_empty());
    }

    #[test]
    fn custom_section_name() {
        // id=0, payload_len=6, name "name" + 1 opaque byte
        let data = [0x00, 0x06, 0x04, b'n', b'a', b'm', b'e', 0xAA];
        let mut cursor = Cursor::new(&data);
        let section = parse_section(&mut cursor).unwrap();
        assert_eq!(section.kind(), Some(SectionId::Custom));
        assert_eq!(section.name.as_deref(), Some("name"));
        assert_eq!(section.payload, SectionPayload::Opaque);
        // The declared payload length covers the name; the cursor lands
        // exactly past the section.
        assert!(cursor.is_empty());
    }

    #[test]
    fn inert_section_ids_fall_through() {
        // memory section: 1 memory, flags=0 initial=1 — not interpreted
        let data = [0x05, 0x03, 0x01, 0x00, 0x01];
        let mut cursor = Cursor::new(&data);
        let section = parse_section(&mut cursor).unwrap();
        assert_eq!(section.kind(), Some(SectionId::Memory));
        assert_eq!(section.payload, SectionPayload::Opaque);
        assert_eq!(section.payload.entry_count(), 0);
        assert!(cursor.is_empty());
    }

    #[test]
    fn unassigned_id_is_tolerated() {
        let data = [0x2A, 0x02, 0xAA, 0xBB];
        let mut cursor = Cursor::new(&data);
        let section = parse_section(&mut cursor).unwrap();
        assert_eq!(section.id, 0x2A);
        assert_eq!(section.kind(), None);
        assert_eq!(section.id_name(), "unknown");
        assert!(cursor.is_empty());
    }

    #[test]
    fn payload_len_is_authoritative_for_framing() {
        // Type section whose payload_len (5) exceeds what the single
        // nullary signature occupies (4); the extra byte is skipped.
        let data = [
            0x01, 0x05, // header
            0x01, 0x60, 0x00, 0x00, // one () -> () signature
            0xCC, // slack inside the declared payload
            0x2A, // next byte after the section
        ];
        let mut cursor = Cursor::new(&data);
        let section = parse_section(&mut cursor).unwrap();
        assert_eq!(section.payload.entry_count(), 1);
        assert_eq!(cursor.remaining(), &[0x2A]);
    }

    #[test]
    fn reject_payload_len_overflow() {
        // Section claims 255 bytes, none follow.
        let data = [0x01, 0xFF, 0x01];
        let mut cursor = Cursor::new(&data);
        let err = parse_section(&mut cursor).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::SectionOverflow);
    }

    #[test]
    fn section_name_lookup() {
        assert_eq!(section_name(0), "custom");
        assert_eq!(section_name(11), "data");
        assert_eq!(section_name(12), "unknown");
        assert_eq!(section_name(0xFF), "unknown");
    }
}
