//! Per-frame metadata shared between the Boardwalk dissector and the inner decoder

/// Summary columns and flags for the frame currently being decoded.
///
/// The capture source owns one of these per frame and passes it through the
/// Boardwalk dissector to whichever decoder receives the encapsulated payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PacketInfo {
    /// Position of the frame in its capture, starting at 1
    pub frame_number: u64,

    /// Protocol column
    pub protocol: String,

    /// Info column
    pub info: String,

    /// Set when the capture hardware reported the frame as truncated
    pub is_truncated: bool,
}

impl PacketInfo {
    /// Create packet info for the given frame number with empty columns
    pub fn new(frame_number: u64) -> Self {
        Self { frame_number, ..Self::default() }
    }

    pub fn set_protocol(&mut self, protocol: &str) {
        self.protocol.clear();
        self.protocol.push_str(protocol);
    }

    pub fn clear_info(&mut self) {
        self.info.clear();
    }
}
