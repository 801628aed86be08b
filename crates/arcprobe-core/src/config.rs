//! Engine configuration.

use std::ffi::OsString;
use std::path::PathBuf;

/// Name of the 7-Zip binary used when nothing else is configured.
pub const DEFAULT_PROGRAM: &str = "7zz";

/// Environment variable consulted by [`EngineConfig::from_env`].
pub const PROGRAM_ENV_VAR: &str = "ARCPROBE_7Z";

/// Settings for invoking the 7-Zip executable.
///
/// The configuration is passed to each engine explicitly, so two engines in
/// the same process can point at different binaries.
///
/// # Examples
///
/// ```
/// use arcprobe_core::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.program.to_str(), Some("7zz"));
///
/// let config = EngineConfig::new("/opt/7zip/7z");
/// assert_eq!(config.program.to_str(), Some("/opt/7zip/7z"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Name or path of the executable.
    pub program: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
        }
    }
}

impl EngineConfig {
    /// Creates a configuration for the given executable.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Reads the executable from `ARCPROBE_7Z`, falling back to `7zz`.
    ///
    /// An empty variable counts as unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(PROGRAM_ENV_VAR))
    }

    fn from_env_value(value: Option<OsString>) -> Self {
        value
            .filter(|v| !v.is_empty())
            .map_or_else(Self::default, Self::new)
    }
}
