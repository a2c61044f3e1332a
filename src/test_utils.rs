//! Test utilities for building Boardwalk frames and observing hand-off
//!
//! Used by the unit tests and, behind the `benchmark` feature, by the benches.

#![cfg(any(test, feature = "benchmark"))]

use std::sync::{Arc, Mutex};

use crate::dissector::InnerDecoder;
use crate::sink::FieldSink;
use crate::types::PacketInfo;

/// Assemble a captured frame from its parts.
///
/// `sof_code` is placed in the top nibble of byte 0 and `vsan` in the low 12
/// bits of bytes 0-1. The trailer follows `payload` directly.
pub fn build_frame(
    sof_code: u8,
    vsan: u16,
    payload: &[u8],
    packet_count: u16,
    error: u8,
    eof: u8,
) -> Vec<u8> {
    let word = (u16::from(sof_code & 0x0F) << 12) | (vsan & 0x0FFF);
    let mut frame = Vec::with_capacity(payload.len() + 6);
    frame.extend_from_slice(&word.to_be_bytes());
    frame.extend_from_slice(payload);
    frame.extend_from_slice(&packet_count.to_be_bytes());
    frame.push(error);
    frame.push(eof);
    frame
}

/// A run of frames with consecutive packet counts starting at `first_count`.
pub fn build_capture(first_count: u16, frames: usize, payload_len: usize) -> Vec<Vec<u8>> {
    (0..frames)
        .map(|i| {
            let count = first_count.wrapping_add(i as u16);
            build_frame(0x6, 0x00A, &vec![0x5A; payload_len], count, 0, 0x1)
        })
        .collect()
}

/// Stand-in for a Fibre Channel decoder that keeps every payload it receives.
#[derive(Debug, Clone, Default)]
pub struct CollectingDecoder {
    payloads: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl CollectingDecoder {
    /// Returns the decoder and a handle to the payloads it will collect.
    pub fn new() -> (Self, Arc<Mutex<Vec<Vec<u8>>>>) {
        let decoder = Self::default();
        let payloads = Arc::clone(&decoder.payloads);
        (decoder, payloads)
    }
}

impl InnerDecoder for CollectingDecoder {
    fn name(&self) -> &str {
        "fc"
    }

    fn decode(&mut self, payload: &[u8], _info: &mut PacketInfo, _sink: &mut dyn FieldSink) {
        if let Ok(mut payloads) = self.payloads.lock() {
            payloads.push(payload.to_vec());
        }
    }
}
