//! Dissector settings
//!
//! Settings are plain serde structs so they can live in whatever YAML file the
//! host application already loads.
//!
//! ```rust
//! use brdwlk::{DissectorConfig, DropFieldMode};
//!
//! let config = DissectorConfig::from_yaml("drop_field: on_mismatch\nmark_truncated: true\n").unwrap();
//! assert_eq!(config.drop_field, DropFieldMode::OnMismatch);
//! assert!(config.mark_truncated);
//! assert_eq!(config.min_frame_len, 6);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::brdwlk_flags::layout::MIN_FRAME_LEN;
use crate::{DecodeError, Result};

/// When the `brdwlk.drop` field is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum DropFieldMode {
    /// On every decoded frame, true or false
    #[default]
    Always,
    /// Only when the count is not exactly one past the previous count
    OnMismatch,
}

/// Boardwalk dissector settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct DissectorConfig {
    pub drop_field: DropFieldMode,

    /// Flag the packet info as truncated when the adapter set the Truncated bit
    pub mark_truncated: bool,

    /// Shortest frame accepted, header and trailer included
    pub min_frame_len: usize,
}

impl Default for DissectorConfig {
    fn default() -> Self {
        Self { drop_field: DropFieldMode::Always, mark_truncated: false, min_frame_len: MIN_FRAME_LEN }
    }
}

impl DissectorConfig {
    /// Parse and validate settings from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        debug!("Loaded dissector config: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_frame_len < MIN_FRAME_LEN {
            return Err(DecodeError::config(format!(
                "min_frame_len {} is below the {} bytes of header and trailer",
                self.min_frame_len, MIN_FRAME_LEN
            )));
        }
        Ok(())
    }
}
