//! Stub MCP plugin for host plugin systems.
//!
//! This crate provides the lifecycle surface a host plugin loader expects:
//! a constructible plugin object exposing no-argument `load`/`unload` hooks,
//! together with version resolution that falls back to a fixed placeholder
//! when no build version was injected at compile time. The hooks perform no
//! real work yet beyond emitting a status line; actual plugin behavior will
//! be registered here once the host contract grows one.

use serde::{Deserialize, Serialize};

pub mod plugin;
pub mod version;

pub use plugin::{McpPlugin, Plugin};
pub use version::{version, FALLBACK_VERSION, VERSION};

/// Fixed identifying name of this plugin.
pub const PLUGIN_NAME: &str = "mcp-plugin";

/// Plugin operation result
pub type PluginResult<T> = std::result::Result<T, PluginError>;

/// Plugin metadata
///
/// Hosts that want machine-readable metadata instead of parsing status lines
/// can serialize this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
}

impl PluginInfo {
    /// Metadata for the plugin built from this crate.
    pub fn current() -> Self {
        Self {
            name: PLUGIN_NAME.to_string(),
            version: version().to_string(),
        }
    }

    /// Serialize the metadata to a JSON string.
    pub fn to_json(&self) -> PluginResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Plugin system errors
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Plugin I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Plugin serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_info_reports_fixed_name_and_version() {
        let info = PluginInfo::current();
        assert_eq!(info.name, PLUGIN_NAME);
        assert_eq!(info.version, VERSION);
    }

    #[test]
    fn plugin_info_serializes_both_fields() {
        let json = PluginInfo::current().to_json().unwrap();
        assert!(json.contains(PLUGIN_NAME));
        assert!(json.contains(VERSION));
    }

    #[test]
    fn plugin_error_messages_name_the_cause() {
        let error = PluginError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert!(error.to_string().contains("pipe closed"));
    }
}
