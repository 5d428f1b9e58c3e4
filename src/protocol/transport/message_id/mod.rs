//! UBX message identity: the (class, id) pair carried by every frame header.
use core::fmt;

use crate::core::{ClassDescriptor, MessageDescriptor};
use crate::protocol::lookups::{self, MessageClass};

//==================================================================================MESSAGE_ID
/// Encapsulates the class and id bytes of a UBX message and exposes
/// lookups against the identity tables.
///
/// Any pair is valid: the tables only provide labels, so messages unknown to
/// this version of the crate are framed and delivered like any other.
///
/// # Example
///
/// ```
/// use korri_ubx::protocol::lookups::CfgId;
/// use korri_ubx::protocol::transport::message_id::MessageId;
///
/// let id: MessageId = CfgId::Msg.into();
/// assert_eq!(id, MessageId::new(0x06, 0x01));
/// assert!(id.is_known());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MessageId {
    class: u8,
    id: u8,
}

impl MessageId {
    /// Build an identity from raw class and id bytes.
    #[inline]
    pub const fn new(class: u8, id: u8) -> Self {
        Self { class, id }
    }

    /// Raw class byte.
    #[inline]
    pub const fn class(&self) -> u8 {
        self.class
    }

    /// Raw id byte.
    #[inline]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Typed class, when present in the tables.
    pub const fn known_class(&self) -> Option<MessageClass> {
        MessageClass::from_u8(self.class)
    }

    /// Class descriptor, when present in the tables.
    pub fn class_descriptor(&self) -> Option<&'static ClassDescriptor> {
        lookups::class_descriptor(self.class)
    }

    /// Message descriptor, when both class and id are present in the tables.
    pub fn descriptor(&self) -> Option<&'static MessageDescriptor> {
        lookups::message_descriptor(self.class, self.id)
    }

    /// Whether the pair is present in the identity tables.
    pub fn is_known(&self) -> bool {
        self.descriptor().is_some()
    }

    /// Diagnostic label (`CFG-MSG`, `CFG-0x99`, `0x99-0x01`).
    pub fn label(&self) -> MessageLabel {
        match self.class_descriptor() {
            Some(class) => MessageLabel {
                class: Some(class.name),
                message: class.message(self.id).map(|m| m.name),
                raw: *self,
            },
            None => MessageLabel {
                class: None,
                message: None,
                raw: *self,
            },
        }
    }
}

impl From<(u8, u8)> for MessageId {
    fn from((class, id): (u8, u8)) -> Self {
        Self::new(class, id)
    }
}

impl From<MessageId> for (u8, u8) {
    fn from(value: MessageId) -> Self {
        (value.class, value.id)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.label(), f)
    }
}

//==================================================================================MESSAGE_LABEL
/// Printable name of a message, resolved against the identity tables.
///
/// Unknown parts fall back to their hexadecimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLabel {
    class: Option<&'static str>,
    message: Option<&'static str>,
    raw: MessageId,
}

impl MessageLabel {
    /// Class label, if the class is known.
    pub fn class_name(&self) -> Option<&'static str> {
        self.class
    }

    /// Message label, if the id is known within its class.
    pub fn message_name(&self) -> Option<&'static str> {
        self.message
    }
}

impl fmt::Display for MessageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            Some(class) => write!(f, "{}-", class)?,
            None => write!(f, "{:#04x}-", self.raw.class)?,
        }
        match self.message {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "{:#04x}", self.raw.id),
        }
    }
}
