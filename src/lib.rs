//! Decoder for the Boardwalk encapsulation used by the MDS Port Analyzer Adapter.
//!
//! The adapter tunnels captured Fibre Channel frames over Ethernet by wrapping
//! each one in a 2-byte header (start-of-frame code and VSAN) and a 4-byte
//! trailer (packet count, error flags and end-of-frame code). This crate reads
//! those fields, tracks the packet count across a capture to spot dropped
//! frames, describes the error flags, and hands the encapsulated frame to a
//! downstream decoder.
//!
//! # Features
//!
//! - **Header and trailer readers**: Bounds-checked, pure, anchored to the frame end
//! - **Drop detection**: Per-session packet count tracking with 16-bit wraparound
//! - **Error descriptions**: Hardware error flags rendered in a fixed order
//! - **Pluggable hand-off**: Inject a Fibre Channel decoder or fall back to a byte dump
//!
//! # Quick Start
//!
//! ```rust
//! use brdwlk::{BoardwalkDissector, DissectorConfig, NullSink, PacketInfo};
//!
//! # fn main() -> brdwlk::Result<()> {
//! let mut dissector = BoardwalkDissector::new(DissectorConfig::default())?;
//!
//! let frames: [&[u8]; 2] = [
//!     &[0x20, 0x0A, 0x11, 0x22, 0x00, 0x07, 0x00, 0x01],
//!     &[0x20, 0x0A, 0x33, 0x44, 0x00, 0x09, 0x10, 0x01],
//! ];
//!
//! for (i, frame) in frames.iter().enumerate() {
//!     let mut info = PacketInfo::new(i as u64 + 1);
//!     let record = dissector.dissect(frame, &mut info, &mut NullSink)?;
//!     println!("vsan {} count {} drop {}", record.header.vsan, record.trailer.packet_count, record.drop_detected);
//! }
//!
//! assert_eq!(dissector.stats().drops, 1);
//! # Ok(())
//! # }
//! ```

// Core types and error handling
mod config;
mod error;
pub mod format;
pub mod sequence;
pub mod sink;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Dissection and session processing
pub mod dissector;
pub mod stream;

// Core exports
pub use config::*;
pub use error::*;
pub use types::*;

// Dissection exports
pub use dissector::{
    BoardwalkDissector, BoardwalkRecord, DataDump, DissectorStats, InnerDecoder, SharedDissector,
};
pub use format::{BoardwalkHeader, BoardwalkTrailer};
pub use sequence::{SequenceState, SequenceStats, SequenceTracker};
pub use sink::{FieldSink, NullSink, RecordingSink};
pub use stream::DissectExt;
