//! Cargo build script: generates the UBX message identity tables.
mod build_core;
use crate::build_core::{
    conf::*, domain::MessageTable, errors::BuildError, gen_messages::run_messages_gen,
};

use std::fs;
use std::path::PathBuf;

// Class/id tables are declared in JSON and turned into plain Rust enums and
// `const` descriptor slices, so the runtime crate carries no parsing code for them.

//==================================================================================MAIN
fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build_core");
    println!("cargo:rerun-if-env-changed={}", MESSAGES_TABLE_ENV);

    // 1. Locate the message table.
    // Priority order:
    //   1. KORRI_UBX_MESSAGES_PATH environment variable (absolute or relative path)
    //   2. Default table shipped with the crate
    let default_table_path = PathBuf::from(MESSAGES_TABLE_PATH);

    let table_path = match std::env::var(MESSAGES_TABLE_ENV).ok().map(PathBuf::from) {
        Some(path) if path.exists() => {
            println!("cargo:warning=Using custom ubx_messages.json from {:?}", path);
            println!("cargo:rerun-if-changed={}", path.display());
            path
        }
        Some(path) => {
            println!(
                "cargo:warning=Custom message table specified but file not found: {:?}",
                path
            );
            println!("cargo:warning=Falling back to the default ubx_messages.json");
            default_table_path
        }
        None => default_table_path,
    };

    // 2. Parse and generate.
    let table_string = fs::read_to_string(&table_path).map_err(|e| BuildError::ReadFile {
        path: table_path.clone(),
        source: e,
    })?;
    let table: MessageTable = serde_json::from_str(&table_string)?;
    let buffer_messages_code = run_messages_gen(&table)?;

    // 3. Write the generated code into `OUT_DIR`.
    // `src/protocol/lookups/mod.rs` pulls it in through `include!`.
    let out_dir_str = std::env::var("OUT_DIR").map_err(|e| BuildError::OutDirErr { source: e })?;
    let messages_file_path = PathBuf::from(out_dir_str).join(OUT_DIR_MESSAGES_FILE_NAME);

    fs::write(&messages_file_path, &buffer_messages_code).map_err(|e| BuildError::WriteFile {
        path: messages_file_path,
        source: e,
    })?;

    Ok(())
}
