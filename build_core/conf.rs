//! Paths and constants used during build-time code generation.
//==================================================================================CONF
/// Message table shipped with the crate (classes, ids, diagnostic labels).
pub(crate) const MESSAGES_TABLE_PATH: &str = "build_core/var/ubx_messages.json";
/// Environment variable letting firmware projects point at their own table.
pub(crate) const MESSAGES_TABLE_ENV: &str = "KORRI_UBX_MESSAGES_PATH";
/// Generated message table file name (written to `OUT_DIR`).
pub(crate) const OUT_DIR_MESSAGES_FILE_NAME: &str = "generated_messages.rs";
