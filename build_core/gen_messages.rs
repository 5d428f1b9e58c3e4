//! Generate the UBX message identity tables from `ubx_messages.json`.
//!
//! The output is included by `src/protocol/lookups/mod.rs`, which brings
//! `ClassDescriptor`, `MessageDescriptor` and `MessageId` into scope.
use super::domain::*;
use super::errors::*;
use super::name_helpers::escape_literal;

use std::collections::HashSet;
use std::fmt::Write;

/// Validate the table then emit the class enum, the per-class id enums and the descriptor tables.
pub(crate) fn run_messages_gen(table: &MessageTable) -> Result<String, BuildError> {
    validate_table(table)?;

    let mut buffer = String::new();
    generate_class_enum(table, &mut buffer)?;

    for class in &table.classes {
        generate_id_enum(class, &mut buffer)?;
        generate_descriptor_slice(class, &mut buffer)?;
    }

    generate_class_table(table, &mut buffer)?;
    Ok(buffer)
}

//==================================================================================VALIDATION
/// Reject duplicated values/identifiers and empty classes before emitting any code.
fn validate_table(table: &MessageTable) -> Result<(), BuildError> {
    let mut class_values = HashSet::new();
    let mut class_names = HashSet::new();

    for class in &table.classes {
        if !class_values.insert(class.byte()?) || !class_names.insert(class.variant_name()) {
            return Err(BuildError::DuplicateEntry {
                table: "classes".to_string(),
                entry: class.name.clone(),
            });
        }

        if class.messages.is_empty() {
            return Err(BuildError::EmptyClass {
                class: class.name.clone(),
            });
        }

        let mut id_values = HashSet::new();
        let mut id_names = HashSet::new();
        for message in &class.messages {
            if !id_values.insert(message.byte()?) || !id_names.insert(message.variant_name()) {
                return Err(BuildError::DuplicateEntry {
                    table: class.name.clone(),
                    entry: message.name.clone(),
                });
            }
        }
    }
    Ok(())
}

//==================================================================================CLASS_ENUM
fn generate_class_enum(table: &MessageTable, buffer: &mut String) -> Result<(), BuildError> {
    writeln!(buffer, "/// UBX message classes known to the identity tables.")?;
    writeln!(buffer, "#[repr(u8)]")?;
    writeln!(buffer, "#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]")?;
    writeln!(
        buffer,
        "#[cfg_attr(feature = \"defmt\", derive(defmt::Format))]"
    )?;
    writeln!(buffer, "pub enum MessageClass {{")?;
    for class in &table.classes {
        writeln!(buffer, "\t/// {}", class.description)?;
        writeln!(buffer, "\t{} = 0x{:02X},", class.variant_name(), class.byte()?)?;
    }
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;

    writeln!(buffer, "impl MessageClass {{")?;
    writeln!(buffer, "\t/// Every known class, in table order.")?;
    writeln!(
        buffer,
        "\tpub const ALL: [MessageClass; {}] = [",
        table.classes.len()
    )?;
    for class in &table.classes {
        writeln!(buffer, "\t\tMessageClass::{},", class.variant_name())?;
    }
    writeln!(buffer, "\t];")?;
    writeln!(buffer)?;

    writeln!(buffer, "\t/// Resolve a class byte; `None` for classes missing from the table.")?;
    writeln!(buffer, "\tpub const fn from_u8(value: u8) -> Option<Self> {{")?;
    writeln!(buffer, "\t\tmatch value {{")?;
    for class in &table.classes {
        writeln!(
            buffer,
            "\t\t\t0x{:02X} => Some(Self::{}),",
            class.byte()?,
            class.variant_name()
        )?;
    }
    writeln!(buffer, "\t\t\t_ => None,")?;
    writeln!(buffer, "\t\t}}")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer)?;

    writeln!(buffer, "\t/// Raw class byte as transmitted on the wire.")?;
    writeln!(buffer, "\tpub const fn as_u8(self) -> u8 {{")?;
    writeln!(buffer, "\t\tself as u8")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer)?;

    write_str_match(
        buffer,
        "Short protocol label (`NAV`, `CFG`...).",
        "name",
        table
            .classes
            .iter()
            .map(|class| (class.variant_name(), escape_literal(&class.name))),
    )?;
    write_str_match(
        buffer,
        "Human-readable description, for diagnostics only.",
        "description",
        table
            .classes
            .iter()
            .map(|class| (class.variant_name(), escape_literal(&class.description))),
    )?;

    writeln!(buffer, "\t/// Descriptors of every message id in this class.")?;
    writeln!(
        buffer,
        "\tpub const fn messages(self) -> &'static [MessageDescriptor] {{"
    )?;
    writeln!(buffer, "\t\tmatch self {{")?;
    for class in &table.classes {
        writeln!(
            buffer,
            "\t\t\tSelf::{} => {},",
            class.variant_name(),
            class.messages_static_name()
        )?;
    }
    writeln!(buffer, "\t\t}}")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;
    Ok(())
}

//==================================================================================ID_ENUMS
fn generate_id_enum(class: &ClassEntry, buffer: &mut String) -> Result<(), BuildError> {
    let enum_name = class.id_enum_name();
    let class_byte = class.byte()?;

    writeln!(buffer, "/// Message ids of the UBX-{} class.", class.name)?;
    writeln!(buffer, "#[repr(u8)]")?;
    writeln!(buffer, "#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]")?;
    writeln!(
        buffer,
        "#[cfg_attr(feature = \"defmt\", derive(defmt::Format))]"
    )?;
    writeln!(buffer, "pub enum {} {{", enum_name)?;
    for message in &class.messages {
        writeln!(buffer, "\t/// {}", message.description)?;
        writeln!(
            buffer,
            "\t{} = 0x{:02X},",
            message.variant_name(),
            message.byte()?
        )?;
    }
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;

    writeln!(buffer, "impl {} {{", enum_name)?;
    writeln!(buffer, "\t/// Class every id of this enumeration belongs to.")?;
    writeln!(
        buffer,
        "\tpub const CLASS: MessageClass = MessageClass::{};",
        class.variant_name()
    )?;
    writeln!(buffer)?;

    writeln!(buffer, "\t/// Resolve an id byte within the class.")?;
    writeln!(buffer, "\tpub const fn from_u8(value: u8) -> Option<Self> {{")?;
    writeln!(buffer, "\t\tmatch value {{")?;
    for message in &class.messages {
        writeln!(
            buffer,
            "\t\t\t0x{:02X} => Some(Self::{}),",
            message.byte()?,
            message.variant_name()
        )?;
    }
    writeln!(buffer, "\t\t\t_ => None,")?;
    writeln!(buffer, "\t\t}}")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer)?;

    writeln!(buffer, "\t/// Raw id byte as transmitted on the wire.")?;
    writeln!(buffer, "\tpub const fn as_u8(self) -> u8 {{")?;
    writeln!(buffer, "\t\tself as u8")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer)?;

    write_str_match(
        buffer,
        "Short protocol label (`POSLLH`, `MSG`...).",
        "name",
        class
            .messages
            .iter()
            .map(|message| (message.variant_name(), escape_literal(&message.name))),
    )?;
    write_str_match(
        buffer,
        "Human-readable description, for diagnostics only.",
        "description",
        class
            .messages
            .iter()
            .map(|message| (message.variant_name(), escape_literal(&message.description))),
    )?;

    writeln!(buffer, "\t/// Full (class, id) identity of this message.")?;
    writeln!(buffer, "\tpub const fn message_id(self) -> MessageId {{")?;
    writeln!(buffer, "\t\tMessageId::new(0x{:02X}, self as u8)", class_byte)?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;

    writeln!(buffer, "impl From<{}> for MessageId {{", enum_name)?;
    writeln!(buffer, "\tfn from(value: {}) -> Self {{", enum_name)?;
    writeln!(buffer, "\t\tvalue.message_id()")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;
    Ok(())
}

//==================================================================================DESCRIPTORS
fn generate_descriptor_slice(class: &ClassEntry, buffer: &mut String) -> Result<(), BuildError> {
    writeln!(buffer, "/// Descriptors of the UBX-{} message ids.", class.name)?;
    writeln!(
        buffer,
        "pub const {}: &[MessageDescriptor] = &[",
        class.messages_static_name()
    )?;
    for message in &class.messages {
        writeln!(
            buffer,
            "\tMessageDescriptor {{ id: 0x{:02X}, name: \"{}\", description: \"{}\" }},",
            message.byte()?,
            escape_literal(&message.name),
            escape_literal(&message.description)
        )?;
    }
    writeln!(buffer, "];")?;
    writeln!(buffer)?;
    Ok(())
}

fn generate_class_table(table: &MessageTable, buffer: &mut String) -> Result<(), BuildError> {
    writeln!(buffer, "/// Every known class with its message descriptors.")?;
    writeln!(buffer, "pub const CLASSES: &[ClassDescriptor] = &[")?;
    for class in &table.classes {
        writeln!(buffer, "\tClassDescriptor {{")?;
        writeln!(buffer, "\t\tclass: 0x{:02X},", class.byte()?)?;
        writeln!(buffer, "\t\tname: \"{}\",", escape_literal(&class.name))?;
        writeln!(
            buffer,
            "\t\tdescription: \"{}\",",
            escape_literal(&class.description)
        )?;
        writeln!(buffer, "\t\tmessages: {},", class.messages_static_name())?;
        writeln!(buffer, "\t}},")?;
    }
    writeln!(buffer, "];")?;
    Ok(())
}

//==================================================================================HELPERS
/// Emit `pub const fn <fn_name>(self) -> &'static str` as a match over the variants.
fn write_str_match(
    buffer: &mut String,
    doc: &str,
    fn_name: &str,
    arms: impl Iterator<Item = (String, String)>,
) -> Result<(), BuildError> {
    writeln!(buffer, "\t/// {}", doc)?;
    writeln!(buffer, "\tpub const fn {}(self) -> &'static str {{", fn_name)?;
    writeln!(buffer, "\t\tmatch self {{")?;
    for (variant, text) in arms {
        writeln!(buffer, "\t\t\tSelf::{} => \"{}\",", variant, text)?;
    }
    writeln!(buffer, "\t\t}}")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer)?;
    Ok(())
}
