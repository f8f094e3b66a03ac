//! Query Classifier
//!
//! Connection strings arrive with SSL/TLS settings spelled several ways:
//! the official `ssl` / `tls` switches, the `*AllowInvalidCertificates`
//! pair, and the tool-specific `x-sslVerify` alias. This module collects the
//! query string into a multi-valued map and answers two questions about it:
//! is encryption requested, and should certificate validation be skipped.
//!
//! All matching is case-sensitive and exact. A repeated parameter matches if
//! the expected value appears anywhere among its values.

use std::collections::HashMap;

/// Parameters that turn encryption on, checked in order
pub const ENCRYPTION_PARAMS: [&str; 2] = ["ssl", "tls"];

/// Non-standard alias; `x-sslVerify=false` disables certificate checks
pub const SSL_VERIFY_PARAM: &str = "x-sslVerify";

/// Official parameters that disable certificate checks when `true`
pub const ALLOW_INVALID_CERTIFICATES_PARAMS: [&str; 2] =
    ["sslAllowInvalidCertificates", "tlsAllowInvalidCertificates"];

/// Parsed URL query string: parameter name to every value it was given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: HashMap<String, Vec<String>>,
}

impl QueryParams {
    /// Parse a raw query string (without the leading `?`)
    ///
    /// Pairs are separated by `&` or `;`. Values are form-decoded.
    /// Parameters with an empty value are dropped.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut params: HashMap<String, Vec<String>> = HashMap::new();
        for segment in query.split(';') {
            for (name, value) in url::form_urlencoded::parse(segment.as_bytes()) {
                if value.is_empty() {
                    continue;
                }
                params.entry(name.into_owned()).or_default().push(value.into_owned());
            }
        }
        Self { params }
    }

    /// All values recorded for `name`, in the order they appeared
    #[must_use]
    pub fn values(&self, name: &str) -> &[String] {
        self.params.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// True if any value of `name` equals `expected` exactly
    #[must_use]
    pub fn has_value(&self, name: &str, expected: &str) -> bool {
        self.values(name).iter().any(|v| v == expected)
    }

    /// True if any of `names` has a value equal to `expected`
    #[must_use]
    pub fn any_has_value(&self, names: &[&str], expected: &str) -> bool {
        names.iter().any(|name| self.has_value(name, expected))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Whether `ssl=true` or `tls=true` is present
    ///
    /// Encryption is off by default; only the literal value `true` enables it.
    #[must_use]
    pub fn requests_encryption(&self) -> bool {
        self.any_has_value(&ENCRYPTION_PARAMS, "true")
    }

    /// Whether the server certificate should be accepted without validation
    ///
    /// Certificates are validated by default. `x-sslVerify=false` wins first,
    /// then either `*AllowInvalidCertificates=true` parameter.
    #[must_use]
    pub fn skip_certificate_validation(&self) -> bool {
        if self.has_value(SSL_VERIFY_PARAM, "false") {
            return true;
        }
        self.any_has_value(&ALLOW_INVALID_CERTIFICATES_PARAMS, "true")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in iter {
            params.entry(name.into()).or_default().push(value.into());
        }
        Self { params }
    }
}

/// Whether the query asks for an encrypted connection
#[must_use]
pub fn requests_encryption(query: &QueryParams) -> bool {
    query.requests_encryption()
}

/// Whether the query asks to skip certificate validation
#[must_use]
pub fn skip_certificate_validation(query: &QueryParams) -> bool {
    query.skip_certificate_validation()
}
