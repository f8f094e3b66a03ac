//! Option Resolver
//!
//! Ties the pieces together: check the host, pick the flag prefix from the
//! server version, classify the query and build the flag list.
//!
//! # Stateless Design
//! Every call takes its inputs explicitly (`ConnectionUrl`, `ServerVersion`,
//! `ResolverConfig`) and returns a fresh `ResolvedOptions`. Nothing is cached
//! between calls and nothing is read from the environment here.

use serde::{Deserialize, Serialize};

use crate::config::ResolverConfig;
use crate::connection::ConnectionUrl;
use crate::error::Result;
use crate::flags::{build_flags, FlagPrefix};
use crate::version::{use_tls_naming, ServerVersion};

/// Connection settings ready to hand to a shell script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOptions {
    pub host: String,

    /// Explicit port, or 27017 when the URL gives none (or `0`)
    pub port: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// WARNING: Sensitive data, do not log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Database name, empty when the URL has no path
    pub database: String,

    /// Arguments for `mongo` / `mongosh`, in order
    pub mongo_options: Vec<String>,
}

/// Resolve shell options for an already decomposed URL
///
/// Fails with `MissingHost` before any option is built if the URL has no hostname.
pub fn resolve(
    conn: &ConnectionUrl,
    version: ServerVersion,
    config: &ResolverConfig,
) -> Result<ResolvedOptions> {
    let host = conn.require_host()?.to_string();

    let use_tls = use_tls_naming(version, config.force_ssl_naming);
    let prefix = FlagPrefix::from_tls_naming(use_tls);
    log::debug!(
        "server {version} (force_ssl_naming={}) -> --{prefix}* options",
        config.force_ssl_naming
    );
    log::debug!(
        "encryption requested: {}, skip certificate validation: {}",
        conn.query.requests_encryption(),
        conn.query.skip_certificate_validation()
    );

    let mongo_options = build_flags(conn, prefix, config.ca_file())?;

    Ok(ResolvedOptions {
        host,
        port: conn.effective_port(),
        username: conn.username.clone(),
        password: conn.password.clone(),
        database: conn.database.clone(),
        mongo_options,
    })
}

/// Parse a URL and a version string, then resolve
///
/// URL errors, including a missing host, are reported before version errors.
pub fn resolve_str(url: &str, version: &str, config: &ResolverConfig) -> Result<ResolvedOptions> {
    let conn = ConnectionUrl::parse(url)?;
    conn.require_host()?;
    let version = ServerVersion::parse(version)?;
    resolve(&conn, version, config)
}
