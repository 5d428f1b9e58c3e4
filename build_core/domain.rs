use crate::build_core::errors::BuildError;
use crate::build_core::name_helpers::{to_pascal_case, to_screaming_snake_case};
use serde::Deserialize;

//==================================================================================MESSAGE_TABLE
// Structures to deserialize `ubx_messages.json`.
#[derive(Debug, Deserialize)]
/// Root of the message table: one entry per UBX class.
pub(crate) struct MessageTable {
    pub(crate) classes: Vec<ClassEntry>,
}

#[derive(Debug, Deserialize)]
/// A UBX message class and the message ids it groups.
pub(crate) struct ClassEntry {
    pub(crate) name: String,
    pub(crate) value: String,
    pub(crate) description: String,
    pub(crate) messages: Vec<MessageEntry>,
}

#[derive(Debug, Deserialize)]
/// A single message id inside a class.
pub(crate) struct MessageEntry {
    pub(crate) name: String,
    pub(crate) value: String,
    pub(crate) description: String,
}

impl ClassEntry {
    /// Class byte parsed from its hexadecimal literal.
    pub(crate) fn byte(&self) -> Result<u8, BuildError> {
        parse_byte(&self.name, &self.value)
    }

    /// Variant name inside `MessageClass` (`NAV` → `Nav`).
    pub(crate) fn variant_name(&self) -> String {
        to_pascal_case(&self.name)
    }

    /// Name of the per-class id enumeration (`NAV` → `NavId`).
    pub(crate) fn id_enum_name(&self) -> String {
        format!("{}Id", to_pascal_case(&self.name))
    }

    /// Name of the static descriptor slice (`NAV` → `NAV_MESSAGES`).
    pub(crate) fn messages_static_name(&self) -> String {
        format!("{}_MESSAGES", to_screaming_snake_case(&self.name))
    }
}

impl MessageEntry {
    /// Message id byte parsed from its hexadecimal literal.
    pub(crate) fn byte(&self) -> Result<u8, BuildError> {
        parse_byte(&self.name, &self.value)
    }

    /// Variant name inside the class id enumeration (`POSLLH` → `Posllh`).
    pub(crate) fn variant_name(&self) -> String {
        to_pascal_case(&self.name)
    }
}

/// Accept `0x..` hexadecimal or plain decimal literals.
fn parse_byte(entry: &str, value: &str) -> Result<u8, BuildError> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse::<u8>(),
    };

    parsed.map_err(|source| BuildError::InvalidByte {
        entry: entry.to_string(),
        value: value.to_string(),
        source,
    })
}
