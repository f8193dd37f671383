//! File header record (type "01").
//!
//! The first record of every ICL file. Identifies the exchange parties by
//! routing number, stamps the creation date and time, and flags whether the
//! file is a test or production transmission.
//!
//! # Layout
//!
//! | Columns | Field |
//! |---|---|
//! | 0-2   | record type "01" |
//! | 2-4   | standard level |
//! | 4-5   | test file indicator |
//! | 5-14  | immediate destination routing number |
//! | 14-23 | immediate origin routing number |
//! | 23-31 | file creation date (YYYYMMDD) |
//! | 31-35 | file creation time (HHMM) |
//! | 35-36 | resend indicator |
//! | 36-54 | immediate destination name |
//! | 54-72 | immediate origin name |
//! | 72-73 | file ID modifier |
//! | 73-75 | country code |
//! | 75-79 | user field |
//! | 79-80 | companion document indicator |

use crate::encoding::Charset;
use crate::error::{FieldError, Result, MSG_INVALID_ENUM};
use crate::fields::{self, alpha_field, date_field, time_field, Columns};
use serde::{Deserialize, Serialize};

/// File header record (type "01").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileHeader {
    /// Specification level the file conforms to ("03", "30", or "35").
    pub standard_level: String,
    /// "T" for a test file, "P" for production.
    pub test_file_indicator: String,
    /// Routing number of the institution receiving the file.
    pub immediate_destination: String,
    /// Routing number of the institution sending the file.
    pub immediate_origin: String,
    /// Date the file was created, `YYYYMMDD`.
    pub file_creation_date: String,
    /// Time the file was created, `HHMM`.
    pub file_creation_time: String,
    /// "Y" when this file is a resend of an earlier transmission.
    pub resend_indicator: String,
    /// Name of the receiving institution.
    pub immediate_destination_name: String,
    /// Name of the sending institution.
    pub immediate_origin_name: String,
    /// Distinguishes files created on the same date.
    pub file_id_modifier: String,
    /// ISO country code of the origin.
    pub country_code: String,
    /// Owner-defined field.
    pub user_field: String,
    /// Companion document version indicator.
    pub companion_document_indicator: String,
}

impl FileHeader {
    /// Create an empty file header.
    #[must_use]
    pub fn new() -> Self {
        FileHeader::default()
    }

    /// Parse a file header from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    /// Field content problems are reported by [`validate`](Self::validate).
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(FileHeader {
            standard_level: c.alpha(2, 4),
            test_file_indicator: c.alpha(4, 5),
            immediate_destination: c.alpha(5, 14),
            immediate_origin: c.alpha(14, 23),
            file_creation_date: c.alpha(23, 31),
            file_creation_time: c.alpha(31, 35),
            resend_indicator: c.alpha(35, 36),
            immediate_destination_name: c.alpha(36, 54),
            immediate_origin_name: c.alpha(54, 72),
            file_id_modifier: c.alpha(72, 73),
            country_code: c.alpha(73, 75),
            user_field: c.alpha(75, 79),
            companion_document_indicator: c.alpha(79, 80),
        })
    }

    /// Validate field contents against the default strict-ASCII charset.
    ///
    /// # Errors
    ///
    /// Returns the left-most [`FieldError`].
    pub fn validate(&self) -> Result<()> {
        self.validate_with(Charset::Ascii)
    }

    /// Validate field contents with a configurable charset.
    ///
    /// # Errors
    ///
    /// Returns the left-most [`FieldError`].
    pub fn validate_with(&self, charset: Charset) -> Result<()> {
        fields::include_str("StandardLevel", &self.standard_level)?;
        fields::check_enum("StandardLevel", &self.standard_level, &["03", "30", "35"])?;
        fields::include_str("TestFileIndicator", &self.test_file_indicator)?;
        fields::check_enum("TestFileIndicator", &self.test_file_indicator, &["T", "P"])?;
        fields::include_routing("ImmediateDestination", &self.immediate_destination)?;
        fields::check_routing("ImmediateDestination", &self.immediate_destination)?;
        fields::include_routing("ImmediateOrigin", &self.immediate_origin)?;
        fields::check_routing("ImmediateOrigin", &self.immediate_origin)?;
        fields::include_date("FileCreationDate", &self.file_creation_date)?;
        fields::check_date("FileCreationDate", &self.file_creation_date)?;
        fields::include_str("FileCreationTime", &self.file_creation_time)?;
        fields::check_time("FileCreationTime", &self.file_creation_time)?;
        fields::include_str("ResendIndicator", &self.resend_indicator)?;
        fields::check_enum("ResendIndicator", &self.resend_indicator, &["Y", "N"])?;
        fields::check_alphanumeric(
            "ImmediateDestinationName",
            &self.immediate_destination_name,
            charset,
        )?;
        fields::check_alphanumeric("ImmediateOriginName", &self.immediate_origin_name, charset)?;
        fields::check_alphanumeric("FileIDModifier", &self.file_id_modifier, charset)?;
        if !self.country_code.is_empty() {
            fields::check_upper_alpha("CountryCode", &self.country_code)?;
        }
        fields::check_alphanumeric("UserField", &self.user_field, charset)?;
        if let Some(c) = self.companion_document_indicator.chars().next() {
            if !(c.is_ascii_digit() || ('A'..='J').contains(&c)) {
                return Err(FieldError::new(
                    "CompanionDocumentIndicator",
                    &self.companion_document_indicator,
                    MSG_INVALID_ENUM,
                )
                .into());
            }
        }
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("01");
        out.push_str(&alpha_field(&self.standard_level, 2));
        out.push_str(&alpha_field(&self.test_file_indicator, 1));
        out.push_str(&alpha_field(&self.immediate_destination, 9));
        out.push_str(&alpha_field(&self.immediate_origin, 9));
        out.push_str(&date_field(&self.file_creation_date));
        out.push_str(&time_field(&self.file_creation_time));
        out.push_str(&alpha_field(&self.resend_indicator, 1));
        out.push_str(&alpha_field(&self.immediate_destination_name, 18));
        out.push_str(&alpha_field(&self.immediate_origin_name, 18));
        out.push_str(&alpha_field(&self.file_id_modifier, 1));
        out.push_str(&alpha_field(&self.country_code, 2));
        out.push_str(&alpha_field(&self.user_field, 4));
        out.push_str(&alpha_field(&self.companion_document_indicator, 1));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MSG_FIELD_INCLUSION;

    const LINE: &str =
        "0135T231380104121042882201809051523NCitadel           Wells Fargo        US     ";

    fn sample() -> FileHeader {
        FileHeader {
            standard_level: "35".to_string(),
            test_file_indicator: "T".to_string(),
            immediate_destination: "231380104".to_string(),
            immediate_origin: "121042882".to_string(),
            file_creation_date: "20180905".to_string(),
            file_creation_time: "1523".to_string(),
            resend_indicator: "N".to_string(),
            immediate_destination_name: "Citadel".to_string(),
            immediate_origin_name: "Wells Fargo".to_string(),
            country_code: "US".to_string(),
            ..FileHeader::default()
        }
    }

    #[test]
    fn test_parse_file_header() {
        let line = sample().to_line();
        let fh = FileHeader::from_line(&line).unwrap();
        assert_eq!(fh.standard_level, "35");
        assert_eq!(fh.test_file_indicator, "T");
        assert_eq!(fh.immediate_destination, "231380104");
        assert_eq!(fh.immediate_origin, "121042882");
        assert_eq!(fh.file_creation_date, "20180905");
        assert_eq!(fh.file_creation_time, "1523");
        assert_eq!(fh.resend_indicator, "N");
        assert_eq!(fh.immediate_destination_name, "Citadel");
        assert_eq!(fh.immediate_origin_name, "Wells Fargo");
        assert_eq!(fh.country_code, "US");
        fh.validate().unwrap();
    }

    #[test]
    fn test_file_header_roundtrip() {
        let line = sample().to_line();
        assert_eq!(line.len(), 80);
        let parsed = FileHeader::from_line(&line).unwrap();
        assert_eq!(parsed.to_line(), line);
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_parse_known_line_shape() {
        assert_eq!(LINE.chars().count(), 80);
        let fh = FileHeader::from_line(LINE).unwrap();
        assert_eq!(fh.immediate_destination, "231380104");
        assert_eq!(fh.immediate_destination_name, "Citadel");
    }

    #[test]
    fn test_missing_origin_is_field_inclusion() {
        let mut fh = sample();
        fh.immediate_origin = String::new();
        let err = fh.validate().unwrap_err();
        let fe = err.field_error().expect("field error");
        assert_eq!(fe.field_name, "ImmediateOrigin");
        assert!(fe.msg.contains(MSG_FIELD_INCLUSION));
    }

    #[test]
    fn test_bad_standard_level() {
        let mut fh = sample();
        fh.standard_level = "99".to_string();
        let err = fh.validate().unwrap_err();
        assert_eq!(err.field_error().unwrap().field_name, "StandardLevel");
    }

    #[test]
    fn test_short_record_rejected() {
        let err = FileHeader::from_line("01 too short").unwrap_err();
        assert_eq!(err.file_error().unwrap().field_name, "RecordLength");
    }

    #[test]
    fn test_non_ascii_name_rejected() {
        let mut fh = sample();
        fh.immediate_origin_name = "®©".to_string();
        let err = fh.validate().unwrap_err();
        assert_eq!(
            err.field_error().unwrap().field_name,
            "ImmediateOriginName"
        );
        fh.validate_with(Charset::Latin1).unwrap();
    }
}
