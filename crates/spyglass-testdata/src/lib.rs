//! Hand-assembled WASM binaries and canonical LEB128 encoders for tests.
//!
//! The decoder crate is decode-only, so the encoders live here: round-trip
//! tests need a canonical encoding to feed the decoder, and fixtures are
//! easier to audit when built from labeled pieces than pasted as opaque
//! hex dumps.

/// The 8-byte preamble: `\0asm`, version 1.
pub const PREAMBLE: [u8; 8] = [0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];

/// Encode a u32 as canonical unsigned LEB128.
pub fn encode_u32(mut value: u32) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

/// Encode an i32 as canonical signed LEB128.
pub fn encode_i32(mut value: i32) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        let sign_clear = byte & 0x40 == 0;
        if (value == 0 && sign_clear) || (value == -1 && !sign_clear) {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

/// Frame a section: id byte, payload length, payload.
pub fn section(id: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = vec![id];
    out.extend(encode_u32(payload.len() as u32));
    out.extend_from_slice(payload);
    out
}

/// A module consisting of the preamble and the given sections.
pub fn module(sections: &[Vec<u8>]) -> Vec<u8> {
    let mut out = PREAMBLE.to_vec();
    for s in sections {
        out.extend_from_slice(s);
    }
    out
}

/// The minimal module: preamble only, no sections.
pub fn empty_module() -> Vec<u8> {
    PREAMBLE.to_vec()
}

/// A module exporting `add: (i32, i32) -> i32` implemented as
/// `get_local 0; get_local 1; i32.add; end`.
pub fn add_module() -> Vec<u8> {
    module(&[
        // type: one signature (i32, i32) -> i32
        section(1, &[0x01, 0x60, 0x02, 0x7F, 0x7F, 0x01, 0x7F]),
        // function: one function using type 0
        section(3, &[0x01, 0x00]),
        // export: "add" -> function 0
        section(7, &[0x01, 0x03, b'a', b'd', b'd', 0x00, 0x00]),
        // code: one body, no locals
        section(10, &[0x01, 0x07, 0x00, 0x20, 0x00, 0x20, 0x01, 0x6A, 0x0B]),
    ])
}

/// A module with one memory and a data segment writing `"hi"` at offset 8.
pub fn memory_module() -> Vec<u8> {
    module(&[
        // memory: one memory, flags=0, initial=1 page
        section(5, &[0x01, 0x00, 0x01]),
        // data: segment for memory 0, offset expr `i32.const 8; end`
        section(11, &[0x01, 0x00, 0x41, 0x08, 0x0B, 0x02, b'h', b'i']),
    ])
}

/// A module importing `env.f` (function, type 0) next to a local signature.
pub fn import_module() -> Vec<u8> {
    module(&[
        // type: one signature () -> ()
        section(1, &[0x01, 0x60, 0x00, 0x00]),
        // import: "env"."f" function with type index 0
        section(2, &[0x01, 0x03, b'e', b'n', b'v', 0x01, b'f', 0x00, 0x00]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_carry_the_preamble() {
        for bytes in [empty_module(), add_module(), memory_module(), import_module()] {
            assert!(bytes.len() >= 8);
            assert_eq!(&bytes[..4], b"\0asm");
            assert_eq!(&bytes[4..8], &[0x01, 0x00, 0x00, 0x00]);
        }
    }

    #[test]
    fn encode_u32_known_values() {
        assert_eq!(encode_u32(0), [0x00]);
        assert_eq!(encode_u32(127), [0x7F]);
        assert_eq!(encode_u32(128), [0x80, 0x01]);
        assert_eq!(encode_u32(624485), [0xE5, 0x8E, 0x26]);
        assert_eq!(encode_u32(u32::MAX), [0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
    }

    #[test]
    fn encode_i32_known_values() {
        assert_eq!(encode_i32(0), [0x00]);
        assert_eq!(encode_i32(42), [0x2A]);
        assert_eq!(encode_i32(-1), [0x7F]);
        assert_eq!(encode_i32(-128), [0x80, 0x7F]);
        assert_eq!(encode_i32(i32::MIN), [0x80, 0x80, 0x80, 0x80, 0x78]);
        assert_eq!(encode_i32(i32::MAX), [0xFF, 0xFF, 0xFF, 0xFF, 0x07]);
    }

    #[test]
    fn section_framing() {
        let s = section(1, &[0xAA, 0xBB]);
        assert_eq!(s, [0x01, 0x02, 0xAA, 0xBB]);
    }
}
