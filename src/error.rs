// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
}

/// Specific error types for gallery catalog issues.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The catalog file is not valid TOML or does not match the schema.
    Malformed(String),

    /// The catalog parsed but contains no displayable item or review.
    Empty,
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Malformed(_) => "error-catalog-malformed",
            CatalogError::Empty => "error-catalog-empty",
        }
    }
}

impl Error {
    /// i18n key shown in place of the gallery when this error stops it loading.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-catalog-missing",
            Error::Config(_) => "error-catalog-malformed",
            Error::Catalog(err) => err.i18n_key(),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Malformed(msg) => write!(f, "Malformed catalog: {}", msg),
            CatalogError::Empty => write!(f, "Catalog has no images"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
