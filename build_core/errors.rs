//! Error set that can occur while generating code during the build step.
use std::env::VarError;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the build script (JSON parsing, table validation, code generation).
pub(crate) enum BuildError {
    /// Failed to read the `OUT_DIR` environment variable.
    #[error("[MESSAGE]:OUT_DIR error. [ERROR]:{source}")]
    OutDirErr {
        #[source]
        source: VarError,
    },

    /// Failure while parsing the message table JSON document.
    #[error("[MESSAGE]:Invalid JSON format [ERROR]:{0:?}")]
    ParseJson(#[from] serde_json::Error),

    /// Unable to read a file from disk.
    #[error("[MESSAGE]:Failed to read file [PATH]:{path} [ERROR]:{source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the generated code to disk.
    #[error("[MESSAGE]:Failed to write file [PATH]:{path} [ERROR]:{source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Formatting error while writing generated code.
    #[error("[MESSAGE]:Failed to display writeln! macro [ERROR]:{source}")]
    WritelnErr {
        #[from]
        source: std::fmt::Error,
    },

    /// A class or message value is not a valid byte literal (`0x00`..`0xFF`).
    #[error("[MESSAGE]:Invalid byte value [ENTRY]:{entry} [VALUE]:{value} [ERROR]:{source}")]
    InvalidByte {
        entry: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Two entries of the same table share a value or a generated identifier.
    #[error("[MESSAGE]:Duplicate entry [TABLE]:{table} [ENTRY]:{entry}")]
    DuplicateEntry { table: String, entry: String },

    /// A class without any message id cannot be represented as a `#[repr(u8)]` enum.
    #[error("[MESSAGE]:Class without message ids [CLASS]:{class}")]
    EmptyClass { class: String },
}
