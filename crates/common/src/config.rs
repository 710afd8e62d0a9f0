use serde::{Deserialize, Serialize};

/// Execution context a store instance runs in.
///
/// Interactive means a live user session with durable local storage behind
/// it: persistence and debug wiring are enabled. Non-interactive means a
/// request-scoped render pass with no per-user storage: both are disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionContext {
    Interactive,
    NonInteractive,
}

impl ExecutionContext {
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Interactive)
    }
}

/// Configuration handed to the store constructor.
///
/// The version string tags every persisted snapshot and gates snapshot
/// adoption at hydration time. It comes from the packaging metadata of the
/// build that writes the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub context: ExecutionContext,
    pub version: String,
}

impl StoreConfig {
    /// Config for a live client session: persistence and debug wiring on.
    pub fn interactive() -> Self {
        Self {
            context: ExecutionContext::Interactive,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Config for a request-scoped render pass: persistence and debug
    /// wiring off.
    pub fn non_interactive() -> Self {
        Self {
            context: ExecutionContext::NonInteractive,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the snapshot version tag (tests and migration drills).
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_enables_persistence() {
        assert!(ExecutionContext::Interactive.is_interactive());
        assert!(!ExecutionContext::NonInteractive.is_interactive());
    }

    #[test]
    fn config_version_defaults_to_package_version() {
        let config = StoreConfig::interactive();
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn config_version_override() {
        let config = StoreConfig::interactive().with_version("9.9.9");
        assert_eq!(config.version, "9.9.9");
    }
}
