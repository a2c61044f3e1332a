//! Constants for the Boardwalk encapsulation layout and its coded fields
//!
//! Layout of one captured frame:
//!
//! ```text
//! ┌──────────┬─────────────────────────┬──────────┬───────┬─────┐
//! │ SOF|VSAN │ Encapsulated FC frame   │ Pkt Cnt  │ Error │ EOF │
//! │ 2 bytes  │ variable                │ uint16 BE│ 1 byte│ 1 b │
//! └──────────┴─────────────────────────┴──────────┴───────┴─────┘
//! ```

/// Ethertype the capture adapter uses for Boardwalk frames.
pub const ETHERTYPE_BRDWALK: u16 = 0x88AE;

// Sizes and offsets
pub mod layout {
    pub const HEADER_LEN: usize = 2;
    pub const TRAILER_LEN: usize = 4;
    pub const MIN_FRAME_LEN: usize = HEADER_LEN + TRAILER_LEN;

    // Trailer offsets are distances back from the end of the frame
    pub const PKT_CNT_FROM_END: usize = 4;
    pub const ERROR_FROM_END: usize = 2;
    pub const EOF_FROM_END: usize = 1;

    pub const SOF_MASK: u8 = 0xF0;
    pub const SOF_SHIFT: u8 = 4;
    pub const VSAN_MASK: u16 = 0x0FFF;

    pub const MAX_PACKET_CNT: u16 = 0xFFFF;
}

// Error byte bits, in the order they are rendered
pub mod error_bits {
    pub const RESERVED: u8 = 0x01;
    pub const EMPTY_FRAME: u8 = 0x02;
    pub const NO_DATA: u8 = 0x04;
    pub const TRUNCATED: u8 = 0x08;
    pub const BAD_FC_CRC: u8 = 0x10;
    pub const FIFO_FULL: u8 = 0x20;
    pub const JUMBO_FC_FRAME: u8 = 0x40;
    pub const CTRL_CHAR_INSIDE_FRAME: u8 = 0x80;
}

// Start-of-frame delimiter codes (top nibble of byte 0)
pub mod sof {
    pub const SOFI1: u8 = 0x02;
    pub const SOFI2: u8 = 0x04;
    pub const SOFI3: u8 = 0x06;
    pub const SOFN1: u8 = 0x03;
    pub const SOFN2: u8 = 0x05;
    pub const SOFN3: u8 = 0x07;
    pub const SOFF: u8 = 0x08;
}

// End-of-frame delimiter codes (last byte of the trailer)
pub mod eof {
    pub const EOFT: u8 = 0x01;
    pub const EOFDT: u8 = 0x02;
    pub const EOFN: u8 = 0x03;
    pub const EOFA: u8 = 0x04;
}
