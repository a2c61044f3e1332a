//! Downstream decoders for the encapsulated Fibre Channel frame

use tracing::trace;

use crate::sink::FieldSink;
use crate::types::{DATA_FIELD, FieldReport, PacketInfo};

/// Decoder that receives the bytes following the Boardwalk header.
///
/// The payload still ends with the Boardwalk trailer; interpreting or ignoring
/// it is up to the implementation.
pub trait InnerDecoder: Send {
    /// Name the decoder is known by, e.g. `fc`
    fn name(&self) -> &str;

    /// Decode one payload. Runs synchronously; the payload is not retained.
    fn decode(&mut self, payload: &[u8], info: &mut PacketInfo, sink: &mut dyn FieldSink);
}

/// Fallback consumer that reports the payload as undissected bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataDump;

impl InnerDecoder for DataDump {
    fn name(&self) -> &str {
        "data"
    }

    fn decode(&mut self, payload: &[u8], info: &mut PacketInfo, sink: &mut dyn FieldSink) {
        trace!("Frame {}: {} undissected bytes", info.frame_number, payload.len());
        sink.add_field(
            FieldReport::bytes(&DATA_FIELD, 0, payload)
                .with_display(format!("{} bytes", payload.len())),
        );
    }
}
