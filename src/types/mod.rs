//! Core types for Boardwalk frame representation.
//!
//! ## Architecture
//!
//! - [`ErrorFlags`] wraps the trailer error byte and renders its description
//! - [`StartOfFrame`] and [`EndOfFrame`] map delimiter codes onto their symbolic names
//! - [`FieldDefinition`] and [`FieldReport`] describe what a sink receives per frame
//! - [`PacketInfo`] carries the summary columns shared with the inner decoder
//! - [`brdwlk_flags`] holds the layout, error bit and delimiter constants
//!
//! ## Usage Example
//!
//! ```rust
//! use brdwlk::types::{EndOfFrame, ErrorFlags, StartOfFrame};
//!
//! assert_eq!(StartOfFrame::from_code(0x6).to_string(), "SOFi3");
//! assert_eq!(EndOfFrame::from_code(0x9).to_string(), "0x09");
//! assert_eq!(ErrorFlags::new(0x18).describe(), "Truncated, Bad FC CRC");
//! ```

pub mod brdwlk_flags;
mod delimiter;
mod error_flags;
mod field;
mod frame;

// Re-export all public types
pub use brdwlk_flags::ETHERTYPE_BRDWALK;
pub use delimiter::{EndOfFrame, StartOfFrame};
pub use error_flags::ErrorFlags;
pub use field::{
    DATA_FIELD, DROP_FIELD, DisplayBase, EOF_FIELD, ERROR_FIELD, FIELD_DEFINITIONS, FieldDefinition,
    FieldKind, FieldReport, FieldValue, PKTCNT_FIELD, SOF_FIELD, VSAN_FIELD, field_by_abbrev,
};
pub use frame::PacketInfo;
