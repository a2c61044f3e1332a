//! Fibre Channel frame delimiter vocabularies carried by the Boardwalk wrapper

use std::fmt;

use serde::{Deserialize, Serialize};

/// Start-of-frame delimiter from the top nibble of the first header byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum StartOfFrame {
    SOFi1,
    SOFi2,
    SOFi3,
    SOFn1,
    SOFn2,
    SOFn3,
    SOFf,
    Unknown(u8),
}

/// End-of-frame delimiter from the last trailer byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum EndOfFrame {
    EOFt,
    EOFdt,
    EOFn,
    EOFa,
    Unknown(u8),
}

impl StartOfFrame {
    /// Map a 4-bit SOF code onto the vocabulary.
    pub fn from_code(code: u8) -> Self {
        use super::brdwlk_flags::sof;

        match code {
            sof::SOFI1 => StartOfFrame::SOFi1,
            sof::SOFI2 => StartOfFrame::SOFi2,
            sof::SOFI3 => StartOfFrame::SOFi3,
            sof::SOFN1 => StartOfFrame::SOFn1,
            sof::SOFN2 => StartOfFrame::SOFn2,
            sof::SOFN3 => StartOfFrame::SOFn3,
            sof::SOFF => StartOfFrame::SOFf,
            other => StartOfFrame::Unknown(other),
        }
    }

    /// Symbolic name, or None for codes outside the vocabulary.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            StartOfFrame::SOFi1 => Some("SOFi1"),
            StartOfFrame::SOFi2 => Some("SOFi2"),
            StartOfFrame::SOFi3 => Some("SOFi3"),
            StartOfFrame::SOFn1 => Some("SOFn1"),
            StartOfFrame::SOFn2 => Some("SOFn2"),
            StartOfFrame::SOFn3 => Some("SOFn3"),
            StartOfFrame::SOFf => Some("SOFf"),
            StartOfFrame::Unknown(_) => None,
        }
    }
}

impl EndOfFrame {
    /// Map an EOF code onto the vocabulary.
    pub fn from_code(code: u8) -> Self {
        use super::brdwlk_flags::eof;

        match code {
            eof::EOFT => EndOfFrame::EOFt,
            eof::EOFDT => EndOfFrame::EOFdt,
            eof::EOFN => EndOfFrame::EOFn,
            eof::EOFA => EndOfFrame::EOFa,
            other => EndOfFrame::Unknown(other),
        }
    }

    /// Symbolic name, or None for codes outside the vocabulary.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            EndOfFrame::EOFt => Some("EOFt"),
            EndOfFrame::EOFdt => Some("EOFdt"),
            EndOfFrame::EOFn => Some("EOFn"),
            EndOfFrame::EOFa => Some("EOFa"),
            EndOfFrame::Unknown(_) => None,
        }
    }
}

// Unknown codes render as raw hex, the way the field base displays them
impl fmt::Display for StartOfFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartOfFrame::Unknown(code) => write!(f, "{code:#04x}"),
            known => f.write_str(known.name().unwrap_or_default()),
        }
    }
}

impl fmt::Display for EndOfFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndOfFrame::Unknown(code) => write!(f, "{code:#04x}"),
            known => f.write_str(known.name().unwrap_or_default()),
        }
    }
}
