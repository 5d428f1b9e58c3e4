//! Workspace for the build script: table model and code generator.
pub mod conf;
pub mod domain;
pub mod errors;
pub mod gen_messages;
pub mod name_helpers;
