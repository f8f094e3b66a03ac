//! mongo-url-opts - MongoDB URL to Shell Options
//!
//! Turns a MongoDB connection URL into the variables a deployment script needs
//! to drive the `mongo` / `mongosh` shell: host, port, credentials, database
//! and a ready-made flag list.
//!
//! # Core Principles
//! - Never connects to MongoDB; this is pure string processing
//! - Explicit inputs (URL, server version, config), no global state
//! - Deterministic output: identical inputs give identical flags in the same order
//! - One naming family per run: `--tls*` for MongoDB 4.2+, `--ssl*` otherwise or on request
//!
//! # Module Organization
//! - [`error`] - Error types and handling
//! - [`version`] - Server version parsing and the TLS/SSL naming gate
//! - [`query`] - Query string classification (encryption, certificate checks)
//! - [`connection`] - URL decomposition
//! - [`flags`] - Shell flag assembly
//! - [`resolver`] - End-to-end option resolution
//! - [`config`] - Defaults and environment-backed settings
//! - [`output`] - Shell and JSON rendering

pub mod config;
pub mod connection;
pub mod error;
pub mod flags;
pub mod output;
pub mod query;
pub mod resolver;
pub mod version;

// Re-export commonly used types for convenience
pub use config::{ResolverConfig, DEFAULT_CA_FILE, DEFAULT_MONGO_PORT};
pub use connection::ConnectionUrl;
pub use error::{MongoUrlError, Result};
pub use flags::{build_flags, FlagPrefix};
pub use output::{render_json, render_shell, ErrorEnvelope, ErrorInfo, OutputFormat, SuccessEnvelope};
pub use query::{requests_encryption, skip_certificate_validation, QueryParams};
pub use resolver::{resolve, resolve_str, ResolvedOptions};
pub use version::{use_tls_naming, ServerVersion};
