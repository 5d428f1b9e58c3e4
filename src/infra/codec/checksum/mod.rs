//! UBX 8-bit Fletcher checksum.
//!
//! Two running sums are updated for every byte from the class byte up to the
//! last payload byte (the sync pair is excluded):
//!
//! ```text
//! CK_A = CK_A + byte   (mod 256)
//! CK_B = CK_B + CK_A   (mod 256)
//! ```

/// Running CK_A/CK_B accumulator.
///
/// # Example
///
/// ```
/// use korri_ubx::infra::codec::checksum::UbxChecksum;
///
/// // CFG-MSG poll: class, id, length (0x0000)
/// let mut checksum = UbxChecksum::new();
/// checksum.update_slice(&[0x06, 0x01, 0x00, 0x00]);
/// assert_eq!(checksum.value(), (0x07, 0x1B));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UbxChecksum {
    ck_a: u8,
    ck_b: u8,
}

impl UbxChecksum {
    /// Accumulator in its reset state.
    pub const fn new() -> Self {
        Self { ck_a: 0, ck_b: 0 }
    }

    /// Feed one checksummed byte.
    #[inline]
    pub fn update(&mut self, byte: u8) {
        self.ck_a = self.ck_a.wrapping_add(byte);
        self.ck_b = self.ck_b.wrapping_add(self.ck_a);
    }

    /// Feed a run of checksummed bytes.
    #[inline]
    pub fn update_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.update(byte);
        }
    }

    /// Reset both sums, at the start of every frame.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Current `(CK_A, CK_B)` pair.
    #[inline]
    pub const fn value(&self) -> (u8, u8) {
        (self.ck_a, self.ck_b)
    }

    /// Compare against the checksum bytes read from the wire.
    #[inline]
    pub const fn matches(&self, ck_a: u8, ck_b: u8) -> bool {
        self.ck_a == ck_a && self.ck_b == ck_b
    }
}

/// One-shot checksum over `bytes` (class, id, length and payload).
pub fn checksum(bytes: &[u8]) -> (u8, u8) {
    let mut accumulator = UbxChecksum::new();
    accumulator.update_slice(bytes);
    accumulator.value()
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
