#![allow(non_shorthand_field_patterns)]
#![doc = "Error types shared by the site configuration loader, the star badge and the CLI."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint, so the lint is disabled
//! for this module.

use std::path::{Path, PathBuf};

/// Error type returned by configuration loading, validation and export.
///
/// Instances are usually built through [`io_error`], [`Error::validation`] or
/// the `From` conversions for the serde error types.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading a site document.
    #[error("failed to read site configuration from {path:?}: {source}")]
    Io {
        /// Location of the site document.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse site configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when the site configuration violates its invariants.
    #[error("invalid site configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps serialization errors when exporting the configuration.
    #[error("failed to serialize site configuration: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// Service errors when interacting with external APIs.
    #[error("service error: {message}")]
    Service {
        /// Human readable message describing the service error.
        message: String
    }
}

impl Error {
    /// Constructs a validation error from the provided message.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a service error from the provided message.
    pub fn service<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Service {
            message: message.into()
        }
    }

    /// Formats the error for CLI output. Matches the [`std::fmt::Display`]
    /// implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the site document that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Reasons a star count could not be obtained.
///
/// None of these is fatal: the badge absorbs every variant and keeps showing
/// its placeholder.
#[derive(Debug, Clone, PartialEq, Eq, masterror::Error)]
pub enum StarFetchError {
    /// The request could not be sent or the body could not be read.
    #[error("repository metadata request failed: {message}")]
    Network {
        /// Transport level description of the failure.
        message: String
    },
    /// The API answered with a non-success status code.
    #[error("repository metadata request returned status {status}")]
    Status {
        /// HTTP status code returned by the API.
        status: u16
    },
    /// The response body is not valid JSON.
    #[error("repository metadata is not valid JSON: {message}")]
    Malformed {
        /// Decoder message describing the problem.
        message: String
    },
    /// The JSON object lacks a non-negative integer `stargazers_count`.
    #[error("repository metadata has no numeric stargazers_count")]
    MissingField
}

impl StarFetchError {
    /// Constructs a network error from the provided message.
    pub fn network<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Network {
            message: message.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, StarFetchError};

    #[test]
    fn validation_constructor_populates_message() {
        let error = Error::validation("locale 'root' is missing");
        match error {
            Error::Validation {
                ref message
            } => {
                assert_eq!(message, "locale 'root' is missing");
            }
            other => panic!("expected validation error, got {other:?}")
        }
    }

    #[test]
    fn to_display_string_matches_display() {
        let error = Error::service("rate limited");
        assert_eq!(error.to_string(), error.to_display_string());
        assert_eq!(error.to_string(), "service error: rate limited");
    }

    #[test]
    fn io_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/site.yaml");
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = super::io_error(path, io_error);

        match error {
            Error::Io {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}")
        }
    }

    #[test]
    fn serde_yaml_conversion_maps_to_parse_variant() {
        let error = serde_yaml::from_str::<usize>("not-a-number").unwrap_err();
        let mapped: Error = error.into();
        assert!(matches!(mapped, Error::Parse { .. }));
    }

    #[test]
    fn serde_json_conversion_maps_to_serialize_variant() {
        let invalid = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let mapped: Error = invalid.into();
        assert!(matches!(mapped, Error::Serialize { .. }));
    }

    #[test]
    fn star_fetch_errors_describe_their_cause() {
        assert_eq!(
            StarFetchError::Status {
                status: 403
            }
            .to_string(),
            "repository metadata request returned status 403"
        );
        assert_eq!(
            StarFetchError::network("connection reset").to_string(),
            "repository metadata request failed: connection reset"
        );
        assert!(StarFetchError::MissingField.to_string().contains("stargazers_count"));
    }
}
