//! Field definitions and the reports the dissector publishes for each frame

use serde::{Deserialize, Serialize};

/// Value type of a registered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum FieldKind {
    UInt8,
    UInt16,
    Boolean,
    Bytes,
}

/// Numeric base used when rendering a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum DisplayBase {
    Dec,
    Hex,
}

/// Static description of one Boardwalk field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    /// Label shown next to the value
    pub label: &'static str,
    /// Filter name, e.g. `brdwlk.vsan`
    pub abbrev: &'static str,
    pub kind: FieldKind,
    pub base: DisplayBase,
    /// Bits of the covered bytes that carry the value, 0 for the whole field
    pub bitmask: u16,
}

pub const SOF_FIELD: FieldDefinition = FieldDefinition {
    label: "SOF",
    abbrev: "brdwlk.sof",
    kind: FieldKind::UInt8,
    base: DisplayBase::Hex,
    bitmask: 0xF0,
};

pub const EOF_FIELD: FieldDefinition = FieldDefinition {
    label: "EOF",
    abbrev: "brdwlk.eof",
    kind: FieldKind::UInt8,
    base: DisplayBase::Hex,
    bitmask: 0,
};

// Registered as decimal but always shown as hex next to its description
pub const ERROR_FIELD: FieldDefinition = FieldDefinition {
    label: "Error",
    abbrev: "brdwlk.error",
    kind: FieldKind::UInt8,
    base: DisplayBase::Hex,
    bitmask: 0,
};

pub const PKTCNT_FIELD: FieldDefinition = FieldDefinition {
    label: "Packet Count",
    abbrev: "brdwlk.pktcnt",
    kind: FieldKind::UInt16,
    base: DisplayBase::Dec,
    bitmask: 0,
};

pub const DROP_FIELD: FieldDefinition = FieldDefinition {
    label: "Packet Dropped",
    abbrev: "brdwlk.drop",
    kind: FieldKind::Boolean,
    base: DisplayBase::Dec,
    bitmask: 0,
};

pub const VSAN_FIELD: FieldDefinition = FieldDefinition {
    label: "VSAN",
    abbrev: "brdwlk.vsan",
    kind: FieldKind::UInt16,
    base: DisplayBase::Dec,
    bitmask: 0x0FFF,
};

/// Undissected bytes handed to the fallback consumer
pub const DATA_FIELD: FieldDefinition = FieldDefinition {
    label: "Data",
    abbrev: "data.data",
    kind: FieldKind::Bytes,
    base: DisplayBase::Hex,
    bitmask: 0,
};

/// Every Boardwalk field the dissector can publish, in registration order.
pub static FIELD_DEFINITIONS: [FieldDefinition; 6] =
    [SOF_FIELD, EOF_FIELD, ERROR_FIELD, PKTCNT_FIELD, DROP_FIELD, VSAN_FIELD];

/// Look up a field definition by filter name.
pub fn field_by_abbrev(abbrev: &str) -> Option<&'static FieldDefinition> {
    FIELD_DEFINITIONS.iter().find(|def| def.abbrev == abbrev)
}

/// Decoded value of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldValue {
    UInt(u16),
    Boolean(bool),
    Bytes(Vec<u8>),
}

/// One field of one frame, ready for a sink to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub definition: &'static FieldDefinition,
    /// Offset of the first covered byte within the captured frame
    pub offset: usize,
    pub length: usize,
    pub value: FieldValue,
    /// Text shown instead of, or next to, the raw value
    pub display: Option<String>,
    /// Hidden fields are filterable but not shown in a tree
    pub hidden: bool,
}

impl FieldReport {
    pub fn uint(
        definition: &'static FieldDefinition,
        offset: usize,
        length: usize,
        value: u16,
    ) -> Self {
        Self { definition, offset, length, value: FieldValue::UInt(value), display: None, hidden: false }
    }

    pub fn boolean(definition: &'static FieldDefinition, offset: usize, value: bool) -> Self {
        Self {
            definition,
            offset,
            length: 1,
            value: FieldValue::Boolean(value),
            display: None,
            hidden: false,
        }
    }

    pub fn bytes(definition: &'static FieldDefinition, offset: usize, value: &[u8]) -> Self {
        Self {
            definition,
            offset,
            length: value.len(),
            value: FieldValue::Bytes(value.to_vec()),
            display: None,
            hidden: false,
        }
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Single line rendering: `Label: value (display)`.
    pub fn render(&self) -> String {
        let raw = match (&self.value, self.definition.base) {
            (FieldValue::Boolean(value), _) => value.to_string(),
            (FieldValue::Bytes(value), _) => value.iter().map(|b| format!("{b:02x}")).collect(),
            (FieldValue::UInt(value), DisplayBase::Hex) => format!("{value:#x}"),
            (FieldValue::UInt(value), DisplayBase::Dec) => value.to_string(),
        };
        match &self.display {
            Some(display) => format!("{}: {} ({})", self.definition.label, raw, display),
            None => format!("{}: {}", self.definition.label, raw),
        }
    }
}
