//! Top-level WASM module decoding.
//!
//! Produces a [`Module`] — a decoded but not validated representation of a
//! WASM binary. Entries that view bytecode (function bodies) borrow from the
//! input buffer, so a `Module` cannot outlive the bytes it was decoded from.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::binary::entry::{DataSegment, ExportEntry, FunctionBody, ImportEntry};
use crate::binary::leb128::Cursor;
use crate::binary::section::{self, Section, SectionId, SectionPayload};
use crate::error::DecodeError;
use crate::types::FuncType;

/// A decoded WASM module: the verbatim header fields and all sections in the
/// order they appeared.
#[derive(Debug)]
pub struct Module<'a> {
    /// The magic number, always `\0asm` once decoding succeeds.
    pub magic: u32,
    /// The version field, recorded verbatim and not validated.
    pub version: u32,
    /// All sections in stream order.
    pub sections: Vec<Section<'a>>,
}

impl<'a> Module<'a> {
    /// Decode a WASM binary into a `Module`.
    ///
    /// Fails on a short or mismatched preamble and on any section that does
    /// not decode; every failure drops whatever was decoded so far.
    pub fn decode(bytes: &'a [u8]) -> Result<Self, DecodeError> {
        let mut cursor = Cursor::new(bytes);

        let (magic, version) = section::parse_preamble(&mut cursor)?;

        let mut sections = Vec::new();
        while !cursor.is_empty() {
            sections.push(section::parse_section(&mut cursor)?);
        }

        Ok(Module {
            magic,
            version,
            sections,
        })
    }

    /// Get the first section with the given kind, if present.
    pub fn section(&self, id: SectionId) -> Option<&Section<'a>> {
        self.sections.iter().find(|s| s.kind() == Some(id))
    }

    /// Iterate over all sections with the given kind.
    pub fn sections_by_kind(&self, id: SectionId) -> impl Iterator<Item = &Section<'a>> {
        self.sections.iter().filter(move |s| s.kind() == Some(id))
    }

    /// Iterate over all custom sections.
    pub fn custom_sections(&self) -> impl Iterator<Item = &Section<'a>> {
        self.sections_by_kind(SectionId::Custom)
    }

    /// Function signatures from the first type section.
    pub fn types(&self) -> &[FuncType] {
        match self.section(SectionId::Type) {
            Some(Section {
                payload: SectionPayload::Types(entries),
                ..
            }) => entries,
            _ => &[],
        }
    }

    /// Imported symbols from the first import section.
    pub fn imports(&self) -> &[ImportEntry] {
        match self.section(SectionId::Import) {
            Some(Section {
                payload: SectionPayload::Imports(entries),
                ..
            }) => entries,
            _ => &[],
        }
    }

    /// Exported symbols from the first export section.
    pub fn exports(&self) -> &[ExportEntry] {
        match self.section(SectionId::Export) {
            Some(Section {
                payload: SectionPayload::Exports(entries),
                ..
            }) => entries,
            _ => &[],
        }
    }

    /// Per-function type indices from the first function section.
    pub fn function_type_indices(&self) -> &[u32] {
        match self.section(SectionId::Function) {
            Some(Section {
                payload: SectionPayload::Functions(entries),
                ..
            }) => entries,
            _ => &[],
        }
    }

    /// Function bodies from the first code section.
    pub fn code(&self) -> &[FunctionBody<'a>] {
        match self.section(SectionId::Code) {
            Some(Section {
                payload: SectionPayload::Code(entries),
                ..
            }) => entries,
            _ => &[],
        }
    }

    /// Data segments from the first data section.
    pub fn data(&self) -> &[DataSegment] {
        match self.section(SectionId::Data) {
            Some(Section {
                payload: SectionPayload::Data(entries),
                ..
            }) => entries,
            _ => &[],
        }
    }
}
