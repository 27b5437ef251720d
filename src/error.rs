//! Error handling for the sort utility

use std::io;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Could not determine line ending from first {bytes} bytes of {file}")]
    UndeterminedLineEnding { file: String, bytes: usize },

    #[error("'{locale}' is not a valid locale: {message}")]
    InvalidLocale { locale: String, message: String },

    #[error("Unknown sort approach: {name}")]
    UnknownApproach { name: String },

    #[error("Conflicting sort options: {message}")]
    ConflictingOptions { message: String },

    #[error("Unsupported option: {message}")]
    UnsupportedOption { message: String },

    #[error("Invalid numeric prefix '{text}' at line {line}")]
    NumericPrefix { text: String, line: usize },

    #[error("Invalid date or datetime '{text}' at line {line}: {message}")]
    Datetime {
        text: String,
        line: usize,
        message: String,
    },

    #[error("Invalid IP address '{text}' at line {line}")]
    InvalidAddress { text: String, line: usize },

    #[error("Invalid network '{text}' at line {line}")]
    InvalidNetwork { text: String, line: usize },

    #[error("The given file contains empty lines not preceded by a comment")]
    UnexpectedEmptyLines,

    #[error(r#"The given file is not sorted - found "{first}" before "{second}""#)]
    NotSorted { first: String, second: String },

    #[error(r#"The given file contains non-unique lines at {line1} and {line2} containing "{line}""#)]
    NotUnique {
        line1: usize,
        line2: usize,
        line: String,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::UnexpectedEmptyLines
            | SortError::NotSorted { .. }
            | SortError::NotUnique { .. } => crate::EXIT_FAILURE,

            _ => crate::SORT_FAILURE,
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(file: &str) -> Self {
        SortError::PermissionDenied {
            file: file.to_string(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    pub fn undetermined_line_ending(file: &str, bytes: usize) -> Self {
        SortError::UndeterminedLineEnding {
            file: file.to_string(),
            bytes,
        }
    }

    /// Create an invalid locale error
    pub fn invalid_locale(locale: &str, message: impl ToString) -> Self {
        SortError::InvalidLocale {
            locale: locale.to_string(),
            message: message.to_string(),
        }
    }

    pub fn unknown_approach(name: &str) -> Self {
        SortError::UnknownApproach {
            name: name.to_string(),
        }
    }

    /// Create a conflicting options error
    pub fn conflicting_options(message: &str) -> Self {
        SortError::ConflictingOptions {
            message: message.to_string(),
        }
    }

    pub fn unsupported_option(message: &str) -> Self {
        SortError::UnsupportedOption {
            message: message.to_string(),
        }
    }

    /// Create a numeric prefix error
    pub fn numeric_prefix(text: &str, line: usize) -> Self {
        SortError::NumericPrefix {
            text: text.to_string(),
            line,
        }
    }

    /// Create a datetime parse error
    pub fn datetime(text: &str, line: usize, message: impl ToString) -> Self {
        SortError::Datetime {
            text: text.to_string(),
            line,
            message: message.to_string(),
        }
    }

    /// Create an invalid IP address error
    pub fn invalid_address(text: &str, line: usize) -> Self {
        SortError::InvalidAddress {
            text: text.to_string(),
            line,
        }
    }

    /// Create an invalid CIDR network error
    pub fn invalid_network(text: &str, line: usize) -> Self {
        SortError::InvalidNetwork {
            text: text.to_string(),
            line,
        }
    }

    /// Create a not sorted error
    pub fn not_sorted(first: &str, second: &str) -> Self {
        SortError::NotSorted {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    /// Create a not unique error
    pub fn not_unique(line1: usize, line2: usize, line: &str) -> Self {
        SortError::NotUnique {
            line1,
            line2,
            line: line.to_string(),
        }
    }

    /// Create an internal error
    pub fn internal(message: &str) -> Self {
        SortError::Internal {
            message: message.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for adding context to errors
pub trait SortContext<T> {
    fn with_context<F>(self, f: F) -> SortResult<T>
    where
        F: FnOnce() -> String;

    fn with_file_context(self, filename: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_context<F>(self, f: F) -> SortResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|io_err| {
            SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", f(), io_err),
            ))
        })
    }

    fn with_file_context(self, filename: &str) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => SortError::permission_denied(filename),
            io::ErrorKind::NotFound => SortError::file_not_found(filename),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}
