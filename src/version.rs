//! Plugin version resolution.
//!
//! Release packaging injects the generated version identifier through the
//! `MCP_PLUGIN_BUILD_VERSION` environment variable at compile time. When the
//! variable is absent (local builds, or packaging that has not generated a
//! version yet) the fixed placeholder below is substituted instead. Version
//! lookup failure is never surfaced as an error.

/// Placeholder used when no build version was generated.
pub const FALLBACK_VERSION: &str = "0.0.0-unknown";

/// Resolved plugin version: the injected build version, or the placeholder.
pub const VERSION: &str = match option_env!("MCP_PLUGIN_BUILD_VERSION") {
    Some(injected) => injected,
    None => FALLBACK_VERSION,
};

/// Current plugin version string.
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_never_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn fallback_looks_like_a_version() {
        assert!(FALLBACK_VERSION.contains('.'));
        assert!(FALLBACK_VERSION.contains("unknown"));
    }
}
