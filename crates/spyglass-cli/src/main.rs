//! Spyglass CLI — decode a `.wasm` binary and dump its section layout,
//! entries, and function-body disassembly.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use spyglass_core::binary::disasm::Disasm;
use spyglass_core::binary::module::Module;
use spyglass_core::binary::section::{Section, SectionId, SectionPayload};
use spyglass_core::types::type_constructor_name;

#[derive(Parser)]
#[command(name = "spyglass", version, about = "Dump WebAssembly binaries")]
struct Args {
    /// Path to the .wasm file to decode.
    file: PathBuf,

    /// Skip the per-function disassembly listing.
    #[arg(long)]
    no_disasm: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    println!("Read {} bytes from {}.", bytes.len(), args.file.display());

    let module = Module::decode(&bytes)
        .with_context(|| format!("{} is not a valid wasm binary", args.file.display()))?;

    println!("version: {}\n", module.version);
    println!("Sections:");

    for section in &module.sections {
        print_section(section, args.no_disasm);
        println!();
    }

    Ok(())
}

fn print_section(section: &Section<'_>, no_disasm: bool) {
    println!("id: {} ({})", section.id, section.id_name());
    println!("payload_len: {}", section.payload_len);

    match &section.payload {
        SectionPayload::Types(entries) => {
            println!("type entries: {}", entries.len());
            for entry in entries {
                println!(
                    "type constructor: {} param count: {}",
                    type_constructor_name(entry.form),
                    entry.params.len()
                );
            }
        }

        SectionPayload::Imports(entries) => {
            println!("import entries: {}", entries.len());
            for entry in entries {
                println!(
                    "module: {} field: {} kind: {}",
                    entry.module,
                    entry.field,
                    entry.kind.name()
                );
            }
        }

        SectionPayload::Exports(entries) => {
            println!("export entries: {}", entries.len());
            for entry in entries {
                println!("field: {} kind: {}", entry.field, entry.kind.name());
            }
        }

        SectionPayload::Functions(entries) => {
            println!("function entries: {}", entries.len());
        }

        SectionPayload::Code(entries) => {
            for (index, body) in entries.iter().enumerate() {
                println!("\nfunction #{index} length: {}", body.body_size);
                if no_disasm {
                    continue;
                }
                for instruction in Disasm::new(body.code) {
                    println!("{}", instruction.name());
                }
            }
        }

        SectionPayload::Data(entries) => {
            println!("data entries: {}", entries.len());
        }

        SectionPayload::Opaque => {
            if section.kind() == Some(SectionId::Custom) {
                if let Some(name) = &section.name {
                    println!("section name: {name}");
                }
            }
        }
    }
}
