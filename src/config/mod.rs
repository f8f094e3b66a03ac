//! Configuration Management
//!
//! Settings that shape option resolution but do not come from the URL.
//!
//! # Sources
//! 1. Explicit values (command-line flags, builder methods) (highest priority)
//! 2. Environment variables (`MONGO_VERSION`, `MONGO_CA_FILE`)
//! 3. Built-in defaults
//!
//! Nothing here is global: a `ResolverConfig` is built once per invocation and
//! passed by reference to the resolver.

use std::path::{Path, PathBuf};

use crate::error::{MongoUrlError, Result};
use crate::version::ServerVersion;

/// Port used when the URL omits one (or gives `0`)
pub const DEFAULT_MONGO_PORT: u16 = 27017;

/// CA bundle handed to the shell when encryption is requested
pub const DEFAULT_CA_FILE: &str = "/etc/ssl/certs/ca-certificates.crt";

/// Environment variable holding the target server version
pub const MONGO_VERSION_ENV: &str = "MONGO_VERSION";

/// Environment variable overriding the CA bundle path
pub const MONGO_CA_FILE_ENV: &str = "MONGO_CA_FILE";

/// Per-invocation resolver settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Path passed to `--tlsCAFile` / `--sslCAFile`
    pub ca_file: PathBuf,

    /// Emit `--ssl*` names even for servers that understand `--tls*`
    /// Default: false
    pub force_ssl_naming: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { ca_file: PathBuf::from(DEFAULT_CA_FILE), force_ssl_naming: false }
    }
}

impl ResolverConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with the CA bundle taken from `MONGO_CA_FILE` when it is set and non-empty
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(ca_file) = non_empty_env(MONGO_CA_FILE_ENV) {
            config.ca_file = PathBuf::from(ca_file);
        }
        config
    }

    #[must_use]
    pub fn with_ca_file(mut self, ca_file: impl Into<PathBuf>) -> Self {
        self.ca_file = ca_file.into();
        self
    }

    #[must_use]
    pub fn with_ssl_naming(mut self, force_ssl_naming: bool) -> Self {
        self.force_ssl_naming = force_ssl_naming;
        self
    }

    #[must_use]
    pub fn ca_file(&self) -> &Path {
        &self.ca_file
    }
}

/// Read and parse the server version from `MONGO_VERSION`
///
/// Fails with `MissingVersion` when the variable is unset or empty, and with
/// `InvalidVersion` when it is not a `MAJOR.MINOR.PATCH` triple.
pub fn version_from_env() -> Result<ServerVersion> {
    let raw = non_empty_env(MONGO_VERSION_ENV)
        .ok_or_else(|| MongoUrlError::missing_version(MONGO_VERSION_ENV))?;
    ServerVersion::parse(&raw)
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
