//! Defines the "data contract" between `build.rs` (the scribe) and the
//! runtime lookups (the reader).
//!
//! `build.rs` reads `build_core/var/ubx_messages.json` and emits `const`
//! tables made of these descriptors. Nothing here is needed to frame or
//! checksum a message: the tables only serve diagnostics and typed ids.

/// Descriptor for a single message id inside a class.
#[derive(Debug, PartialEq, Eq)]
pub struct MessageDescriptor {
    /// Id byte, second byte of the UBX header after the sync pair and class.
    pub id: u8,
    /// Short protocol label (e.g. "POSLLH").
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

/// Descriptor for a message class and all of its known ids.
#[derive(Debug, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Class byte.
    pub class: u8,
    /// Short protocol label (e.g. "NAV").
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Known ids of this class, in table order.
    pub messages: &'static [MessageDescriptor],
}

impl ClassDescriptor {
    /// Find the descriptor of `id` inside this class.
    pub fn message(&self, id: u8) -> Option<&'static MessageDescriptor> {
        self.messages.iter().find(|message| message.id == id)
    }
}
