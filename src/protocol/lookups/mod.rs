//! UBX message identity tables.
//!
//! `generated_messages.rs` is produced at build time from
//! `build_core/var/ubx_messages.json` and exposes:
//!
//! - [`MessageClass`] and one id enumeration per class ([`NavId`], [`CfgId`]...),
//! - `const` descriptor slices per class and the [`CLASSES`] table.
//!
//! The tables serve labelling and typed construction of [`MessageId`] only;
//! the codec never consults them to accept or reject a frame.
use crate::core::{ClassDescriptor, MessageDescriptor};
use crate::protocol::transport::message_id::MessageId;

include!(concat!(env!("OUT_DIR"), "/generated_messages.rs"));

/// Descriptor of a class byte, if the class is known.
pub fn class_descriptor(class: u8) -> Option<&'static ClassDescriptor> {
    CLASSES.iter().find(|descriptor| descriptor.class == class)
}

/// Descriptor of a (class, id) pair, if both are known.
pub fn message_descriptor(class: u8, id: u8) -> Option<&'static MessageDescriptor> {
    class_descriptor(class).and_then(|descriptor| descriptor.message(id))
}

/// Iterate over every known message identity, class by class.
pub fn known_messages() -> impl Iterator<Item = MessageId> {
    CLASSES.iter().flat_map(|class| {
        class
            .messages
            .iter()
            .map(move |message| MessageId::new(class.class, message.id))
    })
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
