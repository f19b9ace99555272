//! Plugin lifecycle object.
//!
//! The host contract is deliberately small: the loader constructs the plugin,
//! calls `load` once when the plugin is attached and `unload` once when it is
//! detached. Neither hook takes arguments, returns a value, or fails. The
//! only observable effect of either hook is a single status line on stdout.

use std::io::{self, Write};

use log::{info, warn};

use crate::version::version;
use crate::{PluginResult, PLUGIN_NAME};

/// Host-facing lifecycle contract.
///
/// Object-safe so a host loader can hold `Box<dyn Plugin>`.
pub trait Plugin {
    /// Fixed identifying name of the plugin.
    fn name(&self) -> &str;

    /// Called by the host when the plugin is loaded.
    fn load(&self);

    /// Called by the host when the plugin is unloaded.
    fn unload(&self);
}

/// Stub plugin registered as this crate's entry point.
///
/// Holds no state beyond its fixed name; both lifecycle hooks are idempotent
/// no-ops beyond the status line they emit.
#[derive(Debug, Clone)]
pub struct McpPlugin {
    name: &'static str,
}

impl McpPlugin {
    /// Create the plugin instance.
    pub fn new() -> Self {
        Self { name: PLUGIN_NAME }
    }

    /// Write the load status line to `out`.
    ///
    /// Exactly one line, containing the plugin name and the resolved version.
    pub fn write_load_status<W: Write>(&self, out: &mut W) -> PluginResult<()> {
        writeln!(out, "Plugin '{}' version {} loaded.", self.name, version())?;
        Ok(())
    }

    /// Write the unload status line to `out`.
    ///
    /// Exactly one line, containing the plugin name.
    pub fn write_unload_status<W: Write>(&self, out: &mut W) -> PluginResult<()> {
        writeln!(out, "Plugin '{}' unloaded.", self.name)?;
        Ok(())
    }
}

impl Default for McpPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for McpPlugin {
    fn name(&self) -> &str {
        self.name
    }

    fn load(&self) {
        // The hook contract has no failure path, so a stdout write error is
        // absorbed here rather than surfaced to the host.
        if let Err(e) = self.write_load_status(&mut io::stdout()) {
            warn!("Plugin '{}' failed to emit load status: {e}", self.name);
        }
        info!("Plugin '{}' loaded", self.name);
    }

    fn unload(&self) {
        if let Err(e) = self.write_unload_status(&mut io::stdout()) {
            warn!("Plugin '{}' failed to emit unload status: {e}", self.name);
        }
        info!("Plugin '{}' unloaded", self.name);
    }
}
