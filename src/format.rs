//! Boardwalk header and trailer parsing
//!
//! The 2-byte header sits at the front of the captured frame. The 4-byte
//! trailer is anchored to the end: the encapsulated Fibre Channel frame in
//! between has no length field, so `length - 4` is the only way to find it.
//!
//! ```text
//! byte 0        byte 1         ...   L-4..L-3      L-2      L-1
//! SOF(7:4)|VSAN(11:8)  VSAN(7:0)  FC frame  packet count  error    EOF
//! ```
//!
//! Both readers are pure: the same buffer always yields the same fields.

use serde::Serialize;
use tracing::trace;

use crate::types::brdwlk_flags::layout;
use crate::types::{EndOfFrame, ErrorFlags, StartOfFrame};
use crate::{DecodeError, Result};

/// Leading Boardwalk header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct BoardwalkHeader {
    /// 4-bit start-of-frame code
    pub sof_code: u8,
    /// 12-bit virtual SAN id
    pub vsan: u16,
}

/// Trailing Boardwalk metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct BoardwalkTrailer {
    pub packet_count: u16,
    pub error_flags: ErrorFlags,
    pub eof_code: u8,
}

impl BoardwalkHeader {
    /// Size of the header in bytes
    pub const HEADER_SIZE: usize = layout::HEADER_LEN;

    pub fn parse(data: &[u8]) -> Result<Self> {
        let word = parse_u16_be(data, 0, "Boardwalk header")?;
        let sof_code = (data[0] & layout::SOF_MASK) >> layout::SOF_SHIFT;
        let vsan = word & layout::VSAN_MASK;

        trace!("Parsed Boardwalk header: sof={:#x}, vsan={}", sof_code, vsan);
        Ok(Self { sof_code, vsan })
    }

    pub fn sof(&self) -> StartOfFrame {
        StartOfFrame::from_code(self.sof_code)
    }
}

impl BoardwalkTrailer {
    /// Size of the trailer in bytes
    pub const TRAILER_SIZE: usize = layout::TRAILER_LEN;

    pub fn parse(data: &[u8]) -> Result<Self> {
        let offset = Self::offset_in(data.len())?;

        let packet_count = parse_u16_be(data, offset, "Boardwalk trailer")?;
        let error_flags = ErrorFlags::new(data[data.len() - layout::ERROR_FROM_END]);
        let eof_code = data[data.len() - layout::EOF_FROM_END];

        trace!(
            "Parsed Boardwalk trailer at offset {}: pkt_cnt={}, error={:#x}, eof={:#x}",
            offset,
            packet_count,
            error_flags.value(),
            eof_code
        );
        Ok(Self { packet_count, error_flags, eof_code })
    }

    /// Offset of the trailer within a frame of `len` bytes.
    pub fn offset_in(len: usize) -> Result<usize> {
        len.checked_sub(layout::PKT_CNT_FROM_END)
            .ok_or_else(|| DecodeError::malformed_frame(len, Self::TRAILER_SIZE))
    }

    pub fn eof(&self) -> EndOfFrame {
        EndOfFrame::from_code(self.eof_code)
    }
}

/// Bounds checked big-endian u16 read
fn parse_u16_be(data: &[u8], offset: usize, context: &str) -> Result<u16> {
    if offset + 2 > data.len() {
        return Err(DecodeError::Parse {
            context: context.to_string(),
            details: format!(
                "Insufficient data for u16 at offset {} (need 2 bytes, have {})",
                offset,
                data.len().saturating_sub(offset)
            ),
        });
    }
    Ok(u16::from_be_bytes([data[offset], data[offset + 1]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sof_is_top_nibble() {
        let header = BoardwalkHeader::parse(&[0xF0, 0x00]).unwrap();
        assert_eq!(header.sof_code, 0xF);
        assert_eq!(header.vsan, 0);
        assert_eq!(header.sof(), StartOfFrame::Unknown(0xF));
    }

    #[test]
    fn vsan_is_masked_to_twelve_bits() {
        let header = BoardwalkHeader::parse(&[0x00, 0x0F]).unwrap();
        assert_eq!(header.sof_code, 0);
        assert_eq!(header.vsan, 0x00F);

        let header = BoardwalkHeader::parse(&[0x5A, 0xBC]).unwrap();
        assert_eq!(header.sof(), StartOfFrame::SOFn2);
        assert_eq!(header.vsan, 0xABC);
    }

    #[test]
    fn short_header_is_rejected() {
        assert!(matches!(BoardwalkHeader::parse(&[0x80]), Err(DecodeError::Parse { .. })));
        assert!(BoardwalkHeader::parse(&[]).is_err());
    }

    #[test]
    fn trailer_is_anchored_to_end() {
        let frame = [0x20, 0x01, 0xAA, 0xBB, 0xCC, 0x12, 0x34, 0x10, 0x03];
        let trailer = BoardwalkTrailer::parse(&frame).unwrap();
        assert_eq!(trailer.packet_count, 0x1234);
        assert_eq!(trailer.error_flags, ErrorFlags::new(0x10));
        assert_eq!(trailer.eof_code, 0x03);
        assert_eq!(trailer.eof(), EndOfFrame::EOFn);
    }

    #[test]
    fn short_trailer_never_computes_negative_offset() {
        let result = BoardwalkTrailer::parse(&[0x00, 0x01, 0x02]);
        assert_eq!(result, Err(DecodeError::malformed_frame(3, 4)));
        assert!(BoardwalkTrailer::offset_in(0).is_err());
        assert_eq!(BoardwalkTrailer::offset_in(4), Ok(0));
    }

    proptest! {
        #[test]
        fn trailer_reads_last_four_bytes(
            body in prop::collection::vec(any::<u8>(), 2..512),
            packet_count in any::<u16>(),
            error in any::<u8>(),
            eof in any::<u8>(),
        ) {
            let mut frame = body;
            frame.extend_from_slice(&packet_count.to_be_bytes());
            frame.push(error);
            frame.push(eof);

            prop_assert_eq!(BoardwalkTrailer::offset_in(frame.len()).unwrap(), frame.len() - 4);

            let trailer = BoardwalkTrailer::parse(&frame).unwrap();
            prop_assert_eq!(trailer.packet_count, packet_count);
            prop_assert_eq!(trailer.error_flags.value(), error);
            prop_assert_eq!(trailer.eof_code, eof);

            // Pure: a second read sees the same fields
            prop_assert_eq!(BoardwalkTrailer::parse(&frame).unwrap(), trailer);
            prop_assert_eq!(
                BoardwalkHeader::parse(&frame).unwrap(),
                BoardwalkHeader::parse(&frame).unwrap()
            );
        }
    }
}
