//! Structured result of dissecting one Boardwalk frame

use std::ops::Range;

use serde::Serialize;

use crate::config::DropFieldMode;
use crate::format::{BoardwalkHeader, BoardwalkTrailer};
use crate::types::brdwlk_flags::layout;
use crate::types::{
    DROP_FIELD, EOF_FIELD, ERROR_FIELD, FieldReport, PKTCNT_FIELD, SOF_FIELD, VSAN_FIELD,
};

/// Everything derived from one frame, independent of how it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardwalkRecord {
    pub frame_number: u64,
    pub frame_len: usize,
    pub header: BoardwalkHeader,
    pub trailer: BoardwalkTrailer,
    pub drop_detected: bool,
    /// Count was exactly one past the previous frame's, without wrapping
    pub count_in_sequence: bool,
    pub error_description: String,
    /// Bytes handed to the inner decoder
    pub payload: Range<usize>,
}

impl BoardwalkRecord {
    /// Offset of the trailer within the frame
    pub fn trailer_offset(&self) -> usize {
        self.frame_len - layout::TRAILER_LEN
    }

    /// Field reports in display order.
    pub fn fields(&self, drop_field: DropFieldMode) -> Vec<FieldReport> {
        let trailer_offset = self.trailer_offset();
        let mut fields = Vec::with_capacity(6);

        let sof = self.header.sof();
        let mut sof_report = FieldReport::uint(&SOF_FIELD, 0, 1, self.header.sof_code.into());
        if let Some(name) = sof.name() {
            sof_report = sof_report.with_display(name);
        }
        fields.push(sof_report);
        fields.push(FieldReport::uint(&VSAN_FIELD, 0, 2, self.header.vsan));
        fields.push(FieldReport::uint(&PKTCNT_FIELD, trailer_offset, 2, self.trailer.packet_count));

        let emit_drop = match drop_field {
            DropFieldMode::Always => true,
            DropFieldMode::OnMismatch => !self.count_in_sequence,
        };
        if emit_drop {
            fields.push(FieldReport::boolean(&DROP_FIELD, trailer_offset, self.drop_detected).hidden());
        }

        fields.push(
            FieldReport::uint(
                &ERROR_FIELD,
                trailer_offset + 2,
                1,
                self.trailer.error_flags.value().into(),
            )
            .with_display(self.error_description.clone()),
        );

        let eof = self.trailer.eof();
        let mut eof_report =
            FieldReport::uint(&EOF_FIELD, trailer_offset + 3, 1, self.trailer.eof_code.into());
        if let Some(name) = eof.name() {
            eof_report = eof_report.with_display(name);
        }
        fields.push(eof_report);

        fields
    }
}
