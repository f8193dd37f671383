//! Error types for ICL operations.
//!
//! This module provides the [`IclError`] type for all cash letter library
//! operations and the [`Result`] convenience type, plus the structured error
//! payloads callers match on: [`FieldError`], [`FileError`],
//! [`CashLetterError`], [`BundleError`], and [`ParseError`].
//!
//! Field names (`"PayorBankRoutingNumber"`, `"recordType"`, `"RecordLength"`,
//! `"entries"`, …) and the `MSG_*` message constants are stable identifiers:
//! callers compare against them and they do not change without a version bump.

use std::fmt;
use thiserror::Error;

/// A required field is empty (or zero, for numeric fields).
pub const MSG_FIELD_INCLUSION: &str = "is a mandatory field and has an empty value";
/// A field contains characters outside the configured charset.
pub const MSG_NON_ALPHANUMERIC: &str = "has non alphanumeric characters";
/// A field contains non-digit characters.
pub const MSG_NON_NUMERIC: &str = "has non numeric characters";
/// A field must be uppercase A-Z or digits.
pub const MSG_UPPER_ALPHA: &str = "is not uppercase A-Z or 0-9";
/// A single-character enumeration holds an unknown code.
pub const MSG_INVALID_ENUM: &str = "is an invalid code";
/// A routing number is not nine digits.
pub const MSG_INVALID_ROUTING: &str = "is an invalid routing number";
/// The ABA checksum of a routing number does not verify.
pub const MSG_INVALID_ROUTING_CHECKSUM: &str = "has an invalid ABA checksum";

/// A record arrived where only a file control may appear, or the file ended
/// without one.
pub const MSG_FILE_CONTROL: &str = "none or more than one file control exists";
/// A cash letter header arrived while a cash letter was already open.
pub const MSG_CASH_LETTER_INSIDE: &str = "cash letter header found inside of a current cash letter";
/// A bundle header arrived while a bundle was already open.
pub const MSG_BUNDLE_INSIDE: &str = "bundle header found inside of a current bundle";
/// An item, addendum, or image record arrived with no open bundle or detail.
pub const MSG_BUNDLE_OUTSIDE: &str = "record found outside of a bundle";
/// A record type is not part of the permitted transitions for the current
/// parser state.
pub const MSG_RECORD_OUT_OF_PLACE: &str = "record out of place";
/// A bundle may hold check details or return details, never both.
pub const MSG_MIXED_BUNDLE: &str = "bundle cannot contain both check and return items";
/// A fixed-width record is not exactly 80 characters.
pub const MSG_RECORD_LENGTH: &str = "must be 80 characters";
/// The two-digit record prefix is not a known record type.
pub const MSG_UNKNOWN_RECORD_TYPE: &str = "received unknown record type";
/// A credit item may only appear before the first bundle of its cash letter.
pub const MSG_CREDIT_ITEM_AFTER_BUNDLE: &str = "credit item found after a bundle";
/// A control record count or total does not match the computed aggregate.
pub const MSG_CONTROL_MISMATCH: &str = "does not match the computed control value";
/// A child routing number disagrees with its ancestor header.
pub const MSG_ROUTING_MISMATCH: &str = "does not match the parent routing number";
/// A bundle holds no items.
pub const MSG_BUNDLE_ENTRIES: &str = "must have at least one item";
/// A cash letter holds no bundles.
pub const MSG_BUNDLE_COUNT: &str = "must have at least one bundle";

/// A single field's value is invalid.
///
/// `field_name` is the published field-table name (`"PayorBankRoutingNumber"`,
/// `"recordType"`, …); `msg` is one of the `MSG_*` constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Published name of the offending field.
    pub field_name: String,
    /// The offending value as parsed.
    pub value: String,
    /// Stable reason message.
    pub msg: String,
}

impl FieldError {
    pub(crate) fn new(field_name: &str, value: impl fmt::Display, msg: &str) -> Self {
        FieldError {
            field_name: field_name.to_string(),
            value: value.to_string(),
            msg: msg.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field_name, self.value, self.msg)
    }
}

impl std::error::Error for FieldError {}

/// A file-level structural or aggregate invariant is violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileError {
    /// Published name of the offending field or aggregate.
    pub field_name: String,
    /// The offending value, when one exists.
    pub value: String,
    /// Stable message code.
    pub msg: String,
    /// Expected aggregate value, for control mismatches.
    pub expected: Option<i64>,
    /// Actual aggregate value, for control mismatches.
    pub actual: Option<i64>,
}

impl FileError {
    pub(crate) fn new(field_name: &str, value: impl fmt::Display, msg: &str) -> Self {
        FileError {
            field_name: field_name.to_string(),
            value: value.to_string(),
            msg: msg.to_string(),
            expected: None,
            actual: None,
        }
    }

    pub(crate) fn mismatch(field_name: &str, expected: i64, actual: i64) -> Self {
        FileError {
            field_name: field_name.to_string(),
            value: actual.to_string(),
            msg: MSG_CONTROL_MISMATCH.to_string(),
            expected: Some(expected),
            actual: Some(actual),
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.expected, self.actual) {
            (Some(e), Some(a)) => write!(
                f,
                "file {} {} (expected {e}, got {a})",
                self.field_name, self.msg
            ),
            _ => write!(f, "file {} {} {}", self.field_name, self.value, self.msg),
        }
    }
}

impl std::error::Error for FileError {}

/// A cash-letter-level aggregate invariant is violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashLetterError {
    /// `CashLetterID` of the offending cash letter.
    pub cash_letter_id: String,
    /// Published name of the offending field or aggregate.
    pub field_name: String,
    /// Stable message code.
    pub msg: String,
    /// Expected aggregate value, for control mismatches.
    pub expected: Option<i64>,
    /// Actual aggregate value, for control mismatches.
    pub actual: Option<i64>,
}

impl CashLetterError {
    pub(crate) fn mismatch(id: &str, field_name: &str, expected: i64, actual: i64) -> Self {
        CashLetterError {
            cash_letter_id: id.to_string(),
            field_name: field_name.to_string(),
            msg: MSG_CONTROL_MISMATCH.to_string(),
            expected: Some(expected),
            actual: Some(actual),
        }
    }
}

impl fmt::Display for CashLetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.expected, self.actual) {
            (Some(e), Some(a)) => write!(
                f,
                "cash letter {} {} {} (expected {e}, got {a})",
                self.cash_letter_id, self.field_name, self.msg
            ),
            _ => write!(
                f,
                "cash letter {} {} {}",
                self.cash_letter_id, self.field_name, self.msg
            ),
        }
    }
}

impl std::error::Error for CashLetterError {}

/// A bundle-level aggregate invariant is violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleError {
    /// `BundleSequenceNumber` of the offending bundle.
    pub bundle_sequence_number: String,
    /// Published name of the offending field or aggregate (`"entries"`,
    /// `"BundleItemsCount"`, `"BundleTotalAmount"`, …).
    pub field_name: String,
    /// Stable message code.
    pub msg: String,
    /// Expected aggregate value, for control mismatches.
    pub expected: Option<i64>,
    /// Actual aggregate value, for control mismatches.
    pub actual: Option<i64>,
}

impl BundleError {
    pub(crate) fn new(seq: &str, field_name: &str, msg: &str) -> Self {
        BundleError {
            bundle_sequence_number: seq.to_string(),
            field_name: field_name.to_string(),
            msg: msg.to_string(),
            expected: None,
            actual: None,
        }
    }

    pub(crate) fn mismatch(seq: &str, field_name: &str, expected: i64, actual: i64) -> Self {
        BundleError {
            bundle_sequence_number: seq.to_string(),
            field_name: field_name.to_string(),
            msg: MSG_CONTROL_MISMATCH.to_string(),
            expected: Some(expected),
            actual: Some(actual),
        }
    }
}

impl fmt::Display for BundleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.expected, self.actual) {
            (Some(e), Some(a)) => write!(
                f,
                "bundle {} {} {} (expected {e}, got {a})",
                self.bundle_sequence_number, self.field_name, self.msg
            ),
            _ => write!(
                f,
                "bundle {} {} {}",
                self.bundle_sequence_number, self.field_name, self.msg
            ),
        }
    }
}

impl std::error::Error for BundleError {}

/// Positional wrapper around any other error, carrying the one-based record
/// number and the offending record text.
#[derive(Debug)]
pub struct ParseError {
    /// One-based record number within the input stream.
    pub line: usize,
    /// The record text as read (image blobs elided).
    pub record: String,
    /// The wrapped error.
    pub source: Box<IclError>,
}

impl ParseError {
    pub(crate) fn wrap(line: usize, record: &str, source: IclError) -> IclError {
        IclError::Parse(ParseError {
            line,
            record: record.to_string(),
            source: Box::new(source),
        })
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.source)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Error type for all cash letter library operations.
#[derive(Error, Debug)]
pub enum IclError {
    /// A single field's value is invalid.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A file-level structural or aggregate invariant is violated.
    #[error(transparent)]
    File(#[from] FileError),

    /// A cash-letter-level aggregate invariant is violated.
    #[error(transparent)]
    CashLetter(#[from] CashLetterError),

    /// A bundle-level aggregate invariant is violated.
    #[error(transparent)]
    Bundle(#[from] BundleError),

    /// Any of the above, wrapped with positional context.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An image blob or record ended before its declared length.
    #[error("truncated record: {0}")]
    Truncated(String),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IclError {
    /// The [`FieldError`] payload, if this error (or the error a
    /// [`ParseError`] wraps) is field-level.
    #[must_use]
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            IclError::Field(e) => Some(e),
            IclError::Parse(p) => p.source.field_error(),
            _ => None,
        }
    }

    /// The [`FileError`] payload, if this error (or the error a
    /// [`ParseError`] wraps) is file-level.
    #[must_use]
    pub fn file_error(&self) -> Option<&FileError> {
        match self {
            IclError::File(e) => Some(e),
            IclError::Parse(p) => p.source.file_error(),
            _ => None,
        }
    }

    /// The [`CashLetterError`] payload, if this error (or the error a
    /// [`ParseError`] wraps) is cash-letter-level.
    #[must_use]
    pub fn cash_letter_error(&self) -> Option<&CashLetterError> {
        match self {
            IclError::CashLetter(e) => Some(e),
            IclError::Parse(p) => p.source.cash_letter_error(),
            _ => None,
        }
    }

    /// The [`BundleError`] payload, if this error (or the error a
    /// [`ParseError`] wraps) is bundle-level.
    #[must_use]
    pub fn bundle_error(&self) -> Option<&BundleError> {
        match self {
            IclError::Bundle(e) => Some(e),
            IclError::Parse(p) => p.source.bundle_error(),
            _ => None,
        }
    }

    /// The [`ParseError`] wrapper, if any.
    #[must_use]
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            IclError::Parse(p) => Some(p),
            _ => None,
        }
    }
}

/// Convenience type alias for [`std::result::Result`] with [`IclError`].
pub type Result<T> = std::result::Result<T, IclError>;
