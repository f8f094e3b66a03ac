//! Output Rendering
//!
//! Two renderings of `ResolvedOptions`:
//!
//! - **Shell** (default): one `name=value` line per field, meant for `eval`.
//!   Scalars are shell-quoted, absent values become `''`, and `mongo_options`
//!   is a parenthesised array of individually quoted tokens.
//! - **JSON**: `{"ok": true, "data": {...}}` on success and
//!   `{"ok": false, "error": {"code": "...", "message": "..."}}` on failure.
//!
//! Field order in shell output is fixed:
//! `host`, `port`, `username`, `password`, `database`, `mongo_options`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::MongoUrlError;
use crate::resolver::ResolvedOptions;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `name=value` lines for `eval`
    #[default]
    Shell,
    /// JSON envelope
    Json,
}

/// Quote a single value for POSIX shells
#[must_use]
pub fn shell_quote(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        return Cow::Borrowed("''");
    }
    shell_escape::unix::escape(Cow::Borrowed(value))
}

/// Render a shell array literal: `(a b 'c d')`
#[must_use]
pub fn shell_array<S: AsRef<str>>(values: &[S]) -> String {
    let quoted: Vec<Cow<'_, str>> = values.iter().map(|v| shell_quote(v.as_ref())).collect();
    format!("({})", quoted.join(" "))
}

/// Render resolved options as `eval`-able shell assignments
#[must_use]
pub fn render_shell(opts: &ResolvedOptions) -> String {
    let port = opts.port.to_string();
    let scalars: [(&str, &str); 5] = [
        ("host", opts.host.as_str()),
        ("port", port.as_str()),
        ("username", opts.username.as_deref().unwrap_or_default()),
        ("password", opts.password.as_deref().unwrap_or_default()),
        ("database", opts.database.as_str()),
    ];

    let mut out = String::new();
    for (name, value) in scalars {
        out.push_str(name);
        out.push('=');
        out.push_str(&shell_quote(value));
        out.push('\n');
    }
    out.push_str("mongo_options=");
    out.push_str(&shell_array(&opts.mongo_options));
    out.push('\n');
    out
}

/// Success envelope for resolved options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    /// Always true for success envelopes
    pub ok: bool,

    pub data: T,
}

impl<T> SuccessEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// Error envelope for resolution failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always false for error envelopes
    pub ok: bool,

    pub error: ErrorInfo,
}

impl ErrorEnvelope {
    pub fn new(error: ErrorInfo) -> Self {
        Self { ok: false, error }
    }

    /// Create error envelope from `MongoUrlError`
    pub fn from_error(err: &MongoUrlError) -> Self {
        Self::new(ErrorInfo::new(err.error_code(), err.message()))
    }
}

/// Error information structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable error code (e.g., "MISSING_HOST", "INVALID_VERSION")
    pub code: String,

    /// Human-readable error message (never contains the password)
    pub message: String,
}

impl ErrorInfo {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code: code.into(), message: message.into() }
    }
}

/// Render resolved options as a JSON success envelope
pub fn render_json(opts: &ResolvedOptions) -> serde_json::Result<String> {
    serde_json::to_string(&SuccessEnvelope::new(opts))
}

/// Render an error as a JSON error envelope
pub fn render_json_error(err: &MongoUrlError) -> serde_json::Result<String> {
    serde_json::to_string(&ErrorEnvelope::from_error(err))
}
