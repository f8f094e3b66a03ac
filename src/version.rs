//! Version Gate
//!
//! MongoDB deprecated the `--ssl*` shell options in favour of `--tls*` starting
//! with server 4.2. This module parses the declared server version and decides
//! which naming family the emitted flags use.

use std::fmt;
use std::str::FromStr;

use crate::error::{MongoUrlError, Result};

/// First server release (major, minor) that understands the `--tls*` options
pub const TLS_NAMING_SINCE: (u32, u32) = (4, 2);

/// MongoDB server version as a `MAJOR.MINOR.PATCH` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ServerVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Parse a dotted version string with exactly three numeric components
    ///
    /// Surrounding whitespace is ignored; anything else that is not a digit
    /// (signs, suffixes like `-rc0`, empty components) is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() != 3 {
            return Err(MongoUrlError::invalid_version(input));
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MongoUrlError::invalid_version(input));
            }
            *slot = part.parse().map_err(|_| MongoUrlError::invalid_version(input))?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }

    /// The (major, minor) pair used for feature gating; patch never matters
    #[must_use]
    pub const fn major_minor(&self) -> (u32, u32) {
        (self.major, self.minor)
    }
}

impl FromStr for ServerVersion {
    type Err = MongoUrlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Decide whether `--tls*` option names should be used
///
/// True only when legacy naming is not forced and the server is 4.2 or newer.
#[must_use]
pub fn use_tls_naming(version: ServerVersion, force_ssl_naming: bool) -> bool {
    !force_ssl_naming && version.major_minor() >= TLS_NAMING_SINCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_versions() {
        assert_eq!(ServerVersion::parse("4.2.0").unwrap(), ServerVersion::new(4, 2, 0));
        assert_eq!(ServerVersion::parse("100.0.0").unwrap(), ServerVersion::new(100, 0, 0));
        assert_eq!(ServerVersion::parse(" 3.6.23\n").unwrap(), ServerVersion::new(3, 6, 23));
        assert_eq!("5.0.1".parse::<ServerVersion>().unwrap(), ServerVersion::new(5, 0, 1));
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        for input in ["4.2", "4", "4.2.0.1", "", "..", "4.2."] {
            let err = ServerVersion::parse(input).unwrap_err();
            assert_eq!(err, MongoUrlError::invalid_version(input), "input {input:?}");
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for input in ["4.x.0", "4.2.0-rc0", "-4.2.0", "+4.2.0", "4. 2.0", "v4.2.0"] {
            assert!(ServerVersion::parse(input).is_err(), "input {input:?} should fail");
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(ServerVersion::parse("99999999999.0.0").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ServerVersion::new(4, 2, 1).to_string(), "4.2.1");
    }

    #[test]
    fn test_tls_naming_threshold() {
        assert!(!use_tls_naming(ServerVersion::new(4, 0, 0), false));
        assert!(!use_tls_naming(ServerVersion::new(4, 1, 99), false));
        assert!(use_tls_naming(ServerVersion::new(4, 2, 0), false));
        assert!(use_tls_naming(ServerVersion::new(5, 0, 0), false));
        assert!(use_tls_naming(ServerVersion::new(100, 0, 0), false));
        assert!(!use_tls_naming(ServerVersion::new(3, 99, 0), false));
    }

    #[test]
    fn test_minor_compared_numerically() {
        // 4.10 is newer than 4.2
        assert!(use_tls_naming(ServerVersion::new(4, 10, 0), false));
    }

    #[test]
    fn test_patch_is_ignored() {
        assert!(!use_tls_naming(ServerVersion::new(4, 1, 1000), false));
        assert!(use_tls_naming(ServerVersion::new(4, 2, 0), false));
    }

    #[test]
    fn test_override_forces_ssl_naming() {
        assert!(!use_tls_naming(ServerVersion::new(4, 2, 0), true));
        assert!(!use_tls_naming(ServerVersion::new(100, 0, 0), true));
        assert!(!use_tls_naming(ServerVersion::new(3, 6, 0), true));
    }
}
