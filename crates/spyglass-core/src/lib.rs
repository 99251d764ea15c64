//! Spyglass WebAssembly binary decoder core.
//!
//! A `no_std` decoder for the WebAssembly MVP binary format: the 8-byte
//! preamble, the typed section sequence (imports, exports, signatures,
//! function bodies, data segments), and a pull-style disassembler over a
//! single function body's bytecode. Decode-only: no validation against the
//! format's typing rules, no execution, no encoder.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod binary;
pub mod error;
pub mod types;
