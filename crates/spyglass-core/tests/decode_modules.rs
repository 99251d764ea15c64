//! Whole-module decoding over the hand-assembled fixtures.

use spyglass_core::binary::disasm::{Disasm, Instruction};
use spyglass_core::binary::leb128::{self, Cursor};
use spyglass_core::binary::module::Module;
use spyglass_core::binary::section::SectionId;
use spyglass_core::types::{ExternalKind, ValueType};

#[test]
fn empty_module_has_no_sections() {
    let bytes = spyglass_testdata::empty_module();
    let module = Module::decode(&bytes).unwrap();
    assert!(module.sections.is_empty());
}

#[test]
fn add_module_decodes_end_to_end() {
    let bytes = spyglass_testdata::add_module();
    let module = Module::decode(&bytes).unwrap();

    assert_eq!(module.sections.len(), 4);
    assert_eq!(module.types().len(), 1);
    assert_eq!(module.types()[0].params, [ValueType::I32, ValueType::I32]);
    assert_eq!(module.types()[0].result, Some(ValueType::I32));
    assert_eq!(module.function_type_indices(), [0]);

    let exports = module.exports();
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0].field, "add");
    assert_eq!(exports[0].kind, ExternalKind::Function);
    assert_eq!(exports[0].index, 0);

    // Disassemble the one body straight out of the borrowed code view.
    let body = &module.code()[0];
    let instructions: Vec<_> = Disasm::new(body.code).collect();
    assert_eq!(
        instructions,
        [
            Instruction::GetLocal { local_index: 0 },
            Instruction::GetLocal { local_index: 1 },
        ]
    );
}

#[test]
fn memory_module_data_segment() {
    let bytes = spyglass_testdata::memory_module();
    let module = Module::decode(&bytes).unwrap();

    assert!(module.section(SectionId::Memory).is_some());
    let data = module.data();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].index, 0);
    assert_eq!(data[0].size, 2);
    assert_eq!(data[0].data, b"hi");
}

#[test]
fn import_module_entry() {
    let bytes = spyglass_testdata::import_module();
    let module = Module::decode(&bytes).unwrap();

    let imports = module.imports();
    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].module, "env");
    assert_eq!(imports[0].field, "f");
    assert_eq!(imports[0].kind, ExternalKind::Function);
}

#[test]
fn leb128_roundtrip_selected_values() {
    // 1-, 2-, 3-, 4-, and 5-byte encodings.
    for value in [0u32, 1, 127, 128, 16384, 624485, 1 << 27, u32::MAX] {
        let encoded = spyglass_testdata::encode_u32(value);
        let mut cursor = Cursor::new(&encoded);
        assert_eq!(leb128::decode_u32(&mut cursor).unwrap(), value);
        assert_eq!(cursor.position(), encoded.len(), "value {value}");
    }

    for value in [0i32, 1, -1, 42, -128, 624485, -624485, i32::MIN, i32::MAX] {
        let encoded = spyglass_testdata::encode_i32(value);
        let mut cursor = Cursor::new(&encoded);
        assert_eq!(leb128::decode_i32(&mut cursor).unwrap(), value);
        assert_eq!(cursor.position(), encoded.len(), "value {value}");
    }
}

#[test]
fn mutated_fixture_never_decodes_out_of_bounds() {
    // Truncations of a valid module must either decode or fail cleanly.
    let bytes = spyglass_testdata::add_module();
    for len in 0..bytes.len() {
        let _ = Module::decode(&bytes[..len]);
    }
}
