//! Boardwalk frame dissection.
//!
//! A [`BoardwalkDissector`] owns everything one capture session needs: the
//! settings, the packet count tracker and the decoder that receives the
//! encapsulated Fibre Channel frame. Feed it the frames of a session in capture
//! order; each call is independent apart from the tracker.
//!
//! # Example
//!
//! ```rust
//! use brdwlk::{BoardwalkDissector, DissectorConfig, PacketInfo, RecordingSink};
//!
//! let mut dissector = BoardwalkDissector::new(DissectorConfig::default()).unwrap();
//! let mut sink = RecordingSink::new();
//!
//! let frame = [0x80, 0x05, 0xAA, 0xBB, 0x00, 0x01, 0x00, 0x01];
//! let mut info = PacketInfo::new(1);
//! let record = dissector.dissect(&frame, &mut info, &mut sink).unwrap();
//!
//! assert_eq!(record.header.vsan, 5);
//! assert!(!record.drop_detected);
//! assert_eq!(info.protocol, "Boardwalk");
//! assert_eq!(sink.render_lines()[0], "SOF: 0x8 (SOFf)");
//! ```

mod handoff;
mod record;

pub use handoff::{DataDump, InnerDecoder};
pub use record::BoardwalkRecord;

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DissectorConfig;
use crate::format::{BoardwalkHeader, BoardwalkTrailer};
use crate::sequence::SequenceTracker;
use crate::sink::FieldSink;
use crate::types::PacketInfo;
use crate::types::brdwlk_flags::layout;
use crate::{DecodeError, Result};

/// Protocol column text
pub const PROTOCOL_NAME: &str = "Boardwalk";

/// Dissector shared between threads. Locking serializes frames of the session.
pub type SharedDissector = Arc<Mutex<BoardwalkDissector>>;

/// Per-session counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DissectorStats {
    pub frames: u64,
    pub drops: u64,
    pub malformed: u64,
}

/// Dissector for one capture session
pub struct BoardwalkDissector {
    config: DissectorConfig,
    tracker: SequenceTracker,
    inner: Option<Box<dyn InnerDecoder>>,
    fallback: DataDump,
    malformed: u64,
}

impl BoardwalkDissector {
    /// Dissector without an inner decoder. Payloads go to [`DataDump`].
    pub fn new(config: DissectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tracker: SequenceTracker::new(),
            inner: None,
            fallback: DataDump,
            malformed: 0,
        })
    }

    /// Dissector handing payloads to `inner`.
    pub fn with_inner<D>(config: DissectorConfig, inner: D) -> Result<Self>
    where
        D: InnerDecoder + 'static,
    {
        let mut dissector = Self::new(config)?;
        dissector.inner = Some(Box::new(inner));
        Ok(dissector)
    }

    /// Wrap the dissector for use from several threads.
    pub fn into_shared(self) -> SharedDissector {
        Arc::new(Mutex::new(self))
    }

    pub fn config(&self) -> &DissectorConfig {
        &self.config
    }

    /// Name of the decoder payloads are currently handed to.
    pub fn inner_name(&self) -> &str {
        match &self.inner {
            Some(inner) => inner.name(),
            None => self.fallback.name(),
        }
    }

    pub fn tracker(&self) -> &SequenceTracker {
        &self.tracker
    }

    pub fn stats(&self) -> DissectorStats {
        let sequence = self.tracker.stats();
        DissectorStats { frames: sequence.frames, drops: sequence.drops, malformed: self.malformed }
    }

    /// Start over as for a new capture. The inner decoder is kept.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.malformed = 0;
    }

    /// Dissect one captured frame.
    ///
    /// On success every field has been published to `sink` and the payload
    /// `[2, len)` has been handed on. A malformed frame is reported to `sink`,
    /// returned as an error and leaves the tracker untouched; the session can
    /// continue with the next frame.
    pub fn dissect(
        &mut self,
        frame: &[u8],
        info: &mut PacketInfo,
        sink: &mut dyn FieldSink,
    ) -> Result<BoardwalkRecord> {
        info.set_protocol(PROTOCOL_NAME);
        info.clear_info();

        let record = match self.decode_fields(frame, info) {
            Ok(record) => record,
            Err(err) => {
                self.malformed += 1;
                warn!("Frame {}: {}", info.frame_number, err);
                sink.malformed(info.frame_number, &err);
                return Err(err);
            }
        };

        for field in record.fields(self.config.drop_field) {
            sink.add_field(field);
        }

        let payload = &frame[record.payload.clone()];
        match self.inner.as_mut() {
            Some(inner) => inner.decode(payload, info, sink),
            None => self.fallback.decode(payload, info, sink),
        }

        Ok(record)
    }

    fn decode_fields(&mut self, frame: &[u8], info: &mut PacketInfo) -> Result<BoardwalkRecord> {
        if frame.len() < self.config.min_frame_len {
            return Err(DecodeError::malformed_frame(frame.len(), self.config.min_frame_len));
        }

        let header = BoardwalkHeader::parse(frame)?;
        let trailer = BoardwalkTrailer::parse(frame)?;

        let state = self.tracker.state();
        let count_in_sequence = !state.is_first_frame
            && state.last_packet_count.checked_add(1) == Some(trailer.packet_count);
        let drop_detected = self.tracker.observe(trailer.packet_count);

        if self.config.mark_truncated && trailer.error_flags.is_truncated() {
            info.is_truncated = true;
        }

        let error_description = trailer.error_flags.describe();
        debug!(
            "Frame {}: sof={}, vsan={}, pkt_cnt={}, drop={}, error={:#x} ({}), eof={}",
            info.frame_number,
            header.sof(),
            header.vsan,
            trailer.packet_count,
            drop_detected,
            trailer.error_flags.value(),
            error_description,
            trailer.eof()
        );

        Ok(BoardwalkRecord {
            frame_number: info.frame_number,
            frame_len: frame.len(),
            header,
            trailer,
            drop_detected,
            count_in_sequence,
            error_description,
            payload: layout::HEADER_LEN..frame.len(),
        })
    }
}

impl std::fmt::Debug for BoardwalkDissector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardwalkDissector")
            .field("config", &self.config)
            .field("tracker", &self.tracker)
            .field("inner", &self.inner_name())
            .field("malformed", &self.malformed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DropFieldMode;
    use crate::sink::{NullSink, RecordingSink};
    use crate::test_utils::{CollectingDecoder, build_frame};
    use crate::types::{FieldValue, StartOfFrame};

    fn dissect_all(dissector: &mut BoardwalkDissector, counts: &[u16]) -> Vec<bool> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let frame = build_frame(0x2, 1, &[0xAB; 8], count, 0, 0x1);
                let mut info = PacketInfo::new(i as u64 + 1);
                dissector.dissect(&frame, &mut info, &mut NullSink).unwrap().drop_detected
            })
            .collect()
    }

    #[test]
    fn end_to_end_ten_byte_frame() {
        let (decoder, payloads) = CollectingDecoder::new();
        let mut dissector =
            BoardwalkDissector::with_inner(DissectorConfig::default(), decoder).unwrap();
        let mut sink = RecordingSink::new();
        let mut info = PacketInfo::new(1);

        let frame = [0x01, 0x00, 0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01, 0x10, 0x03];
        let record = dissector.dissect(&frame, &mut info, &mut sink).unwrap();

        assert_eq!(record.header.sof_code, 0);
        assert_eq!(record.header.vsan, 0x100);
        assert_eq!(record.trailer.packet_count, 1);
        assert!(!record.drop_detected);
        assert_eq!(record.trailer.error_flags.value(), 0x10);
        assert_eq!(record.error_description, "Bad FC CRC");
        assert_eq!(record.trailer.eof_code, 3);
        assert_eq!(record.payload, 2..10);

        assert_eq!(payloads.lock().unwrap().as_slice(), &[frame[2..].to_vec()]);
        assert_eq!(dissector.inner_name(), "fc");

        assert_eq!(
            sink.render_lines(),
            vec![
                "SOF: 0x0",
                "VSAN: 256",
                "Packet Count: 1",
                "Error: 0x10 (Bad FC CRC)",
                "EOF: 0x3 (EOFn)",
            ]
        );
        assert_eq!(sink.field("brdwlk.drop").map(|f| &f.value), Some(&FieldValue::Boolean(false)));
        assert_eq!(sink.field("brdwlk.pktcnt").map(|f| f.offset), Some(6));
    }

    #[test]
    fn drops_are_detected_across_frames() {
        let mut dissector = BoardwalkDissector::new(DissectorConfig::default()).unwrap();
        let drops = dissect_all(&mut dissector, &[7, 8, 10, 11, 0xFFFF, 0, 1]);
        assert_eq!(drops, vec![false, false, true, false, true, false, false]);
        assert_eq!(dissector.stats(), DissectorStats { frames: 7, drops: 2, malformed: 0 });
    }

    #[test]
    fn malformed_frame_leaves_tracker_alone() {
        let (decoder, payloads) = CollectingDecoder::new();
        let mut dissector =
            BoardwalkDissector::with_inner(DissectorConfig::default(), decoder).unwrap();
        let mut sink = RecordingSink::new();

        let first = build_frame(0x2, 1, &[], 41, 0, 0x1);
        dissector.dissect(&first, &mut PacketInfo::new(1), &mut sink).unwrap();

        let mut info = PacketInfo::new(2);
        let err = dissector.dissect(&[0x20, 0x01, 0x00, 0x2A, 0x00], &mut info, &mut sink);
        assert_eq!(err, Err(DecodeError::malformed_frame(5, 6)));
        assert_eq!(sink.errors, vec![(2, DecodeError::malformed_frame(5, 6))]);
        assert_eq!(info.protocol, PROTOCOL_NAME);
        assert_eq!(dissector.tracker().state().last_packet_count, 41);

        let next = build_frame(0x2, 1, &[], 42, 0, 0x1);
        let record = dissector.dissect(&next, &mut PacketInfo::new(3), &mut sink).unwrap();
        assert!(!record.drop_detected);

        assert_eq!(payloads.lock().unwrap().len(), 2);
        assert_eq!(dissector.stats().malformed, 1);
    }

    #[test]
    fn header_and_trailer_only_frame_hands_off_trailer() {
        let mut dissector = BoardwalkDissector::new(DissectorConfig::default()).unwrap();
        let mut sink = RecordingSink::new();
        let frame = build_frame(0x8, 0xFFF, &[], 0, 0, 0x2);
        let record = dissector.dissect(&frame, &mut PacketInfo::new(1), &mut sink).unwrap();

        assert_eq!(record.header.sof(), StartOfFrame::SOFf);
        assert_eq!(record.header.vsan, 0xFFF);
        assert_eq!(record.payload, 2..6);
        let data = sink.field("data.data").expect("fallback consumer ran");
        assert_eq!(data.value, FieldValue::Bytes(frame[2..].to_vec()));
        assert_eq!(dissector.inner_name(), "data");
    }

    #[test]
    fn on_mismatch_mode_only_reports_breaks() {
        let config = DissectorConfig { drop_field: DropFieldMode::OnMismatch, ..Default::default() };
        let mut dissector = BoardwalkDissector::new(config).unwrap();

        let mut reported = Vec::new();
        for (i, count) in [3u16, 4, 6, 0xFFFF, 0].into_iter().enumerate() {
            let mut sink = RecordingSink::new();
            let frame = build_frame(0x2, 1, &[0x00; 4], count, 0, 0x1);
            dissector.dissect(&frame, &mut PacketInfo::new(i as u64 + 1), &mut sink).unwrap();
            reported.push(sink.field("brdwlk.drop").map(|f| f.value.clone()));
        }

        assert_eq!(
            reported,
            vec![
                Some(FieldValue::Boolean(false)),
                None,
                Some(FieldValue::Boolean(true)),
                Some(FieldValue::Boolean(true)),
                Some(FieldValue::Boolean(false)),
            ]
        );
    }

    #[test]
    fn truncated_bit_marks_packet_info_when_enabled() {
        let frame = build_frame(0x2, 1, &[0x00; 4], 1, 0x08, 0x1);

        let mut dissector = BoardwalkDissector::new(DissectorConfig::default()).unwrap();
        let mut info = PacketInfo::new(1);
        dissector.dissect(&frame, &mut info, &mut NullSink).unwrap();
        assert!(!info.is_truncated);

        let config = DissectorConfig { mark_truncated: true, ..Default::default() };
        let mut dissector = BoardwalkDissector::new(config).unwrap();
        let mut info = PacketInfo::new(1);
        dissector.dissect(&frame, &mut info, &mut NullSink).unwrap();
        assert!(info.is_truncated);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = DissectorConfig { min_frame_len: 2, ..Default::default() };
        assert!(matches!(BoardwalkDissector::new(config), Err(DecodeError::Config { .. })));
    }

    #[test]
    fn info_column_is_cleared() {
        let mut dissector = BoardwalkDissector::new(DissectorConfig::default()).unwrap();
        let mut info = PacketInfo::new(9);
        info.info.push_str("stale");
        let frame = build_frame(0x2, 1, &[], 1, 0, 0x1);
        dissector.dissect(&frame, &mut info, &mut NullSink).unwrap();
        assert!(info.info.is_empty());
        assert_eq!(info.protocol, "Boardwalk");
    }

    #[test]
    fn shared_dissector_serializes_frames() {
        let shared = BoardwalkDissector::new(DissectorConfig::default()).unwrap().into_shared();

        let handles: Vec<_> = (0..4u16)
            .map(|t| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    let frame = build_frame(0x2, t, &[], t, 0, 0x1);
                    let mut guard = shared.lock().unwrap();
                    guard.dissect(&frame, &mut PacketInfo::new(u64::from(t)), &mut NullSink).is_ok()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(shared.lock().unwrap().stats().frames, 4);
    }

    #[test]
    fn reset_restores_first_frame_behaviour() {
        let mut dissector = BoardwalkDissector::new(DissectorConfig::default()).unwrap();
        assert_eq!(dissect_all(&mut dissector, &[1, 5]), vec![false, true]);
        dissector.reset();
        assert_eq!(dissector.stats(), DissectorStats::default());
        assert_eq!(dissect_all(&mut dissector, &[9]), vec![false]);
    }
}
