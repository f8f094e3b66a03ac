//! Flag Builder
//!
//! Assembles the argument list for the `mongo` / `mongosh` shell. The order is
//! fixed so the output is deterministic:
//!
//! 1. `--host <host>` and `--port <port>`
//! 2. `--username <u>` / `--password <p>`, each only when present
//! 3. `--tls` (or `--ssl`) and `--tlsCAFile <ca>`, only when encryption is requested
//! 4. `--tlsAllowInvalidCertificates`, only when encryption is requested and
//!    certificate validation is skipped
//!
//! One `FlagPrefix` is chosen per run, so `--ssl*` and `--tls*` never mix.

use std::fmt;
use std::path::Path;

use crate::connection::ConnectionUrl;
use crate::error::Result;

/// Option-name family for the encryption flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagPrefix {
    /// `--tls*` names (MongoDB 4.2+)
    Tls,
    /// Legacy `--ssl*` names
    Ssl,
}

impl FlagPrefix {
    #[must_use]
    pub const fn from_tls_naming(use_tls: bool) -> Self {
        if use_tls {
            Self::Tls
        } else {
            Self::Ssl
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tls => "tls",
            Self::Ssl => "ssl",
        }
    }

    /// `--tls` / `--ssl`
    #[must_use]
    pub fn enable_flag(&self) -> String {
        format!("--{}", self.as_str())
    }

    /// `--tlsCAFile` / `--sslCAFile`
    #[must_use]
    pub fn ca_file_flag(&self) -> String {
        format!("--{}CAFile", self.as_str())
    }

    /// `--tlsAllowInvalidCertificates` / `--sslAllowInvalidCertificates`
    #[must_use]
    pub fn allow_invalid_certificates_flag(&self) -> String {
        format!("--{}AllowInvalidCertificates", self.as_str())
    }
}

impl fmt::Display for FlagPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the ordered shell flag list for a connection
///
/// Fails with `MissingHost` if the URL has no hostname.
pub fn build_flags(conn: &ConnectionUrl, prefix: FlagPrefix, ca_file: &Path) -> Result<Vec<String>> {
    let host = conn.require_host()?;

    let mut flags = vec![
        "--host".to_string(),
        host.to_string(),
        "--port".to_string(),
        conn.effective_port().to_string(),
    ];

    for (flag, value) in [("--username", &conn.username), ("--password", &conn.password)] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            flags.push(flag.to_string());
            flags.push(value.to_string());
        }
    }

    if conn.query.requests_encryption() {
        flags.push(prefix.enable_flag());
        flags.push(prefix.ca_file_flag());
        flags.push(ca_file.display().to_string());

        if conn.query.skip_certificate_validation() {
            flags.push(prefix.allow_invalid_certificates_flag());
        }
    }

    Ok(flags)
}
