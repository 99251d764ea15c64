//! The MVP single-byte opcode enumeration.
//!
//! Covers the control flow, parametric, variable access, memory access,
//! numeric, and conversion instruction families. The disassembler interprets
//! only a subset; the full table exists so every opcode has a display name.

macro_rules! opcodes {
    ($($variant:ident = $byte:literal => $name:literal,)*) => {
        /// A decoded opcode byte.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum Opcode {
            $($variant = $byte,)*
        }

        impl Opcode {
            /// Try to construct an `Opcode` from a raw byte value.
            pub fn from_byte(byte: u8) -> Option<Self> {
                match byte {
                    $($byte => Some(Opcode::$variant),)*
                    _ => None,
                }
            }

            /// Canonical display name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Opcode::$variant => $name,)*
                }
            }
        }
    };
}

opcodes! {
    Unreachable = 0x00 => "unreachable",
    Nop = 0x01 => "nop",
    Block = 0x02 => "block",
    Loop = 0x03 => "loop",
    If = 0x04 => "if",
    Else = 0x05 => "else",
    End = 0x0B => "end",
    Br = 0x0C => "br",
    BrIf = 0x0D => "br_if",
    BrTable = 0x0E => "br_table",
    Return = 0x0F => "return",
    Call = 0x10 => "call",
    CallIndirect = 0x11 => "call_indirect",
    Drop = 0x1A => "drop",
    Select = 0x1B => "select",
    GetLocal = 0x20 => "get_local",
    SetLocal = 0x21 => "set_local",
    TeeLocal = 0x22 => "tee_local",
    GetGlobal = 0x23 => "get_global",
    SetGlobal = 0x24 => "set_global",
    I32Load = 0x28 => "i32_load",
    I64Load = 0x29 => "i64_load",
    F32Load = 0x2A => "f32_load",
    F64Load = 0x2B => "f64_load",
    I32Load8S = 0x2C => "i32_load8_s",
    I32Load8U = 0x2D => "i32_load8_u",
    I32Load16S = 0x2E => "i32_load16_s",
    I32Load16U = 0x2F => "i32_load16_u",
    I64Load8S = 0x30 => "i64_load8_s",
    I64Load8U = 0x31 => "i64_load8_u",
    I64Load16S = 0x32 => "i64_load16_s",
    I64Load16U = 0x33 => "i64_load16_u",
    I64Load32S = 0x34 => "i64_load32_s",
    I64Load32U = 0x35 => "i64_load32_u",
    I32Store = 0x36 => "i32_store",
    I64Store = 0x37 => "i64_store",
    F32Store = 0x38 => "f32_store",
    F64Store = 0x39 => "f64_store",
    I32Store8 = 0x3A => "i32_store8",
    I32Store16 = 0x3B => "i32_store16",
    I64Store8 = 0x3C => "i64_store8",
    I64Store16 = 0x3D => "i64_store16",
    I64Store32 = 0x3E => "i64_store32",
    CurrentMemory = 0x3F => "current_memory",
    GrowMemory = 0x40 => "grow_memory",
    I32Const = 0x41 => "i32_const",
    I64Const = 0x42 => "i64_const",
    F32Const = 0x43 => "f32_const",
    F64Const = 0x44 => "f64_const",
    I32Eqz = 0x45 => "i32_eqz",
    I32Eq = 0x46 => "i32_eq",
    I32Ne = 0x47 => "i32_ne",
    I32LtS = 0x48 => "i32_lt_s",
    I32LtU = 0x49 => "i32_lt_u",
    I32GtS = 0x4A => "i32_gt_s",
    I32GtU = 0x4B => "i32_gt_u",
    I32LeS = 0x4C => "i32_le_s",
    I32LeU = 0x4D => "i32_le_u",
    I32GeS = 0x4E => "i32_ge_s",
    I32GeU = 0x4F => "i32_ge_u",
    I64Eqz = 0x50 => "i64_eqz",
    I64Eq = 0x51 => "i64_eq",
    I64Ne = 0x52 => "i64_ne",
    I64LtS = 0x53 => "i64_lt_s",
    I64LtU = 0x54 => "i64_lt_u",
    I64GtS = 0x55 => "i64_gt_s",
    I64GtU = 0x56 => "i64_gt_u",
    I64LeS = 0x57 => "i64_le_s",
    I64LeU = 0x58 => "i64_le_u",
    I64GeS = 0x59 => "i64_ge_s",
    I64GeU = 0x5A => "i64_ge_u",
    F32Eq = 0x5B => "f32_eq",
    F32Ne = 0x5C => "f32_ne",
    F32Lt = 0x5D => "f32_lt",
    F32Gt = 0x5E => "f32_gt",
    F32Le = 0x5F => "f32_le",
    F32Ge = 0x60 => "f32_ge",
    F64Eq = 0x61 => "f64_eq",
    F64Ne = 0x62 => "f64_ne",
    F64Lt = 0x63 => "f64_lt",
    F64Gt = 0x64 => "f64_gt",
    F64Le = 0x65 => "f64_le",
    F64Ge = 0x66 => "f64_ge",
    I32Clz = 0x67 => "i32_clz",
    I32Ctz = 0x68 => "i32_ctz",
    I32Popcnt = 0x69 => "i32_popcnt",
    I32Add = 0x6A => "i32_add",
    I32Sub = 0x6B => "i32_sub",
    I32Mul = 0x6C => "i32_mul",
    I32DivS = 0x6D => "i32_div_s",
    I32DivU = 0x6E => "i32_div_u",
    I32RemS = 0x6F => "i32_rem_s",
    I32RemU = 0x70 => "i32_rem_u",
    I32And = 0x71 => "i32_and",
    I32Or = 0x72 => "i32_or",
    I32Xor = 0x73 => "i32_xor",
    I32Shl = 0x74 => "i32_shl",
    I32ShrS = 0x75 => "i32_shr_s",
    I32ShrU = 0x76 => "i32_shr_u",
    I32Rotl = 0x77 => "i32_rotl",
    I32Rotr = 0x78 => "i32_rotr",
    I64Clz = 0x79 => "i64_clz",
    I64Ctz = 0x7A => "i64_ctz",
    I64Popcnt = 0x7B => "i64_popcnt",
    I64Add = 0x7C => "i64_add",
    I64Sub = 0x7D => "i64_sub",
    I64Mul = 0x7E => "i64_mul",
    I64DivS = 0x7F => "i64_div_s",
    I64DivU = 0x80 => "i64_div_u",
    I64RemS = 0x81 => "i64_rem_s",
    I64RemU = 0x82 => "i64_rem_u",
    I64And = 0x83 => "i64_and",
    I64Or = 0x84 => "i64_or",
    I64Xor = 0x85 => "i64_xor",
    I64Shl = 0x86 => "i64_shl",
    I64ShrS = 0x87 => "i64_shr_s",
    I64ShrU = 0x88 => "i64_shr_u",
    I64Rotl = 0x89 => "i64_rotl",
    I64Rotr = 0x8A => "i64_rotr",
    F32Abs = 0x8B => "f32_abs",
    F32Neg = 0x8C => "f32_neg",
    F32Ceil = 0x8D => "f32_ceil",
    F32Floor = 0x8E => "f32_floor",
    F32Trunc = 0x8F => "f32_trunc",
    F32Nearest = 0x90 => "f32_nearest",
    F32Sqrt = 0x91 => "f32_sqrt",
    F32Add = 0x92 => "f32_add",
    F32Sub = 0x93 => "f32_sub",
    F32Mul = 0x94 => "f32_mul",
    F32Div = 0x95 => "f32_div",
    F32Min = 0x96 => "f32_min",
    F32Max = 0x97 => "f32_max",
    F32Copysign = 0x98 => "f32_copysign",
    F64Abs = 0x99 => "f64_abs",
    F64Neg = 0x9A => "f64_neg",
    F64Ceil = 0x9B => "f64_ceil",
    F64Floor = 0x9C => "f64_floor",
    F64Trunc = 0x9D => "f64_trunc",
    F64Nearest = 0x9E => "f64_nearest",
    F64Sqrt = 0x9F => "f64_sqrt",
    F64Add = 0xA0 => "f64_add",
    F64Sub = 0xA1 => "f64_sub",
    F64Mul = 0xA2 => "f64_mul",
    F64Div = 0xA3 => "f64_div",
    F64Min = 0xA4 => "f64_min",
    F64Max = 0xA5 => "f64_max",
    F64Copysign = 0xA6 => "f64_copysign",
    I32WrapI64 = 0xA7 => "i32_wrap_i64",
    I32TruncSF32 = 0xA8 => "i32_trunc_s_f32",
    I32TruncUF32 = 0xA9 => "i32_trunc_u_f32",
    I32TruncSF64 = 0xAA => "i32_trunc_s_f64",
    I32TruncUF64 = 0xAB => "i32_trunc_u_f64",
    I64ExtendSI32 = 0xAC => "i64_extend_s_i32",
    I64ExtendUI32 = 0xAD => "i64_extend_u_i32",
    I64TruncSF32 = 0xAE => "i64_trunc_s_f32",
    I64TruncUF32 = 0xAF => "i64_trunc_u_f32",
    I64TruncSF64 = 0xB0 => "i64_trunc_s_f64",
    I64TruncUF64 = 0xB1 => "i64_trunc_u_f64",
    F32ConvertSI32 = 0xB2 => "f32_convert_s_i32",
    F32ConvertUI32 = 0xB3 => "f32_convert_u_i32",
    F32ConvertSI64 = 0xB4 => "f32_convert_s_i64",
    F32ConvertUI64 = 0xB5 => "f32_convert_u_i64",
    F32DemoteF64 = 0xB6 => "f32_demote_f64",
    F64ConvertSI32 = 0xB7 => "f64_convert_s_i32",
    F64ConvertUI32 = 0xB8 => "f64_convert_u_i32",
    F64ConvertSI64 = 0xB9 => "f64_convert_s_i64",
    F64ConvertUI64 = 0xBA => "f64_convert_u_i64",
    F64PromoteF32 = 0xBB => "f64_promote_f32",
    I32ReinterpretF32 = 0xBC => "i32_reinterpret_f32",
    I64ReinterpretF64 = 0xBD => "i64_reinterpret_f64",
    F32ReinterpretI32 = 0xBE => "f32_reinterpret_i32",
    F64ReinterpretI64 = 0xBF => "f64_reinterpret_i64",
}

/// Display name for a raw opcode byte, `"unknown"` out of range.
pub fn opcode_name(byte: u8) -> &'static str {
    match Opcode::from_byte(byte) {
        Some(op) => op.name(),
        None => "unknown",
    }
}
