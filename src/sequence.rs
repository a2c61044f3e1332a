//! Cross-frame packet count tracking for drop detection
//!
//! The capture adapter stamps every frame with a 16-bit counter that goes up by
//! one per transmitted frame and wraps from `0xFFFF` to `0x0000`. Comparing each
//! count with the previous one reveals frames lost between the adapter and the
//! capture. State belongs to one capture session and must see that session's
//! frames in capture order.

use serde::Serialize;
use tracing::{trace, warn};

use crate::types::brdwlk_flags::layout::MAX_PACKET_CNT;

/// Running state of one capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequenceState {
    /// Count carried by the previous frame. Meaningless while `is_first_frame` is set.
    pub last_packet_count: u16,
    pub is_first_frame: bool,
}

impl Default for SequenceState {
    fn default() -> Self {
        Self { last_packet_count: 0, is_first_frame: true }
    }
}

impl SequenceState {
    /// Fold one packet count into the state. Returns true when a drop is detected.
    pub fn advance(&mut self, packet_count: u16) -> bool {
        let expected = self.last_packet_count.wrapping_add(1);

        let dropped = if self.is_first_frame {
            self.is_first_frame = false;
            false
        } else if packet_count == 0 && self.last_packet_count == MAX_PACKET_CNT {
            false
        } else {
            packet_count != expected
        };

        self.last_packet_count = packet_count;
        dropped
    }
}

/// Totals for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SequenceStats {
    pub frames: u64,
    pub drops: u64,
}

/// Drop detector owned by a single capture session.
#[derive(Debug, Clone, Default)]
pub struct SequenceTracker {
    state: SequenceState,
    stats: SequenceStats,
}

impl SequenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the packet count of the next frame in capture order.
    ///
    /// Returns true when at least one frame went missing before this one.
    pub fn observe(&mut self, packet_count: u16) -> bool {
        let previous = self.state;
        let dropped = self.state.advance(packet_count);

        self.stats.frames += 1;
        if dropped {
            self.stats.drops += 1;
            warn!(
                "Packet count gap: expected {}, got {}",
                previous.last_packet_count.wrapping_add(1),
                packet_count
            );
        } else {
            trace!("Packet count {} in sequence", packet_count);
        }
        dropped
    }

    /// Forget all history, as for a new capture.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn stats(&self) -> SequenceStats {
        self.stats
    }
}
