//! Error byte reported by the capture hardware in the Boardwalk trailer

use serde::{Deserialize, Serialize};

use super::brdwlk_flags::error_bits;

/// Bit-to-text table, tested in increasing bit order. Bit 0x01 is reserved.
const ERROR_FRAGMENTS: [(u8, &str); 7] = [
    (error_bits::EMPTY_FRAME, "Empty Frame"),
    (error_bits::NO_DATA, "No Data"),
    (error_bits::TRUNCATED, "Truncated"),
    (error_bits::BAD_FC_CRC, "Bad FC CRC"),
    (error_bits::FIFO_FULL, "Fifo Full"),
    (error_bits::JUMBO_FC_FRAME, "Jumbo FC Frame"),
    (error_bits::CTRL_CHAR_INSIDE_FRAME, "Ctrl Char Inside Frame"),
];

/// Error flags from the trailer. Several flags may be set at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ErrorFlags(pub u8);

impl ErrorFlags {
    /// Create a new ErrorFlags from the raw trailer byte.
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    /// Check if a specific flag is set using a bitmask.
    pub fn has_flag(&self, flag: u8) -> bool {
        (self.0 & flag) != 0
    }

    /// Get the raw byte.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// True when no flag is set, the reserved bit included.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The capture adapter cut the frame short.
    pub fn is_truncated(&self) -> bool {
        self.has_flag(error_bits::TRUNCATED)
    }

    /// The adapter saw a bad Fibre Channel CRC. Nothing here recomputes it.
    pub fn has_bad_crc(&self) -> bool {
        self.has_flag(error_bits::BAD_FC_CRC)
    }

    /// Matched text fragments in table order.
    pub fn fragments(&self) -> Vec<&'static str> {
        ERROR_FRAGMENTS
            .iter()
            .filter(|(bit, _)| self.has_flag(*bit))
            .map(|(_, text)| *text)
            .collect()
    }

    /// Comma separated description, empty when no named flag is set.
    pub fn describe(&self) -> String {
        self.fragments().join(", ")
    }
}

impl From<u8> for ErrorFlags {
    fn from(value: u8) -> Self {
        Self(value)
    }
}
