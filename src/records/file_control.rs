//! File control record (type "99").
//!
//! The last record of every ICL file: cash letter count, total record
//! count, total item count, and the file total amount.

use crate::encoding::Charset;
use crate::error::Result;
use crate::fields::{self, alpha_field, numeric_field, Columns};
use serde::{Deserialize, Serialize};

/// File control record (type "99").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileControl {
    /// Declared number of cash letters in the file.
    pub cash_letter_count: u32,
    /// Declared number of records in the file, including this one.
    pub total_record_count: u32,
    /// Declared number of items across all cash letters.
    pub total_item_count: u32,
    /// Declared total of item amounts, in cents.
    pub file_total_amount: u64,
    /// Contact name at the origin institution.
    pub immediate_origin_contact_name: String,
    /// Contact phone number at the origin institution.
    pub immediate_origin_contact_phone_number: String,
    /// Whether credit items are included in the totals ("0", "1").
    pub credit_total_indicator: String,
    /// Reserved columns, normally blank.
    pub reserved: String,
}

impl FileControl {
    /// Create an empty file control.
    #[must_use]
    pub fn new() -> Self {
        FileControl::default()
    }

    /// Parse a file control from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(FileControl {
            cash_letter_count: c.number(2, 8) as u32,
            total_record_count: c.number(8, 16) as u32,
            total_item_count: c.number(16, 24) as u32,
            file_total_amount: c.number(24, 40),
            immediate_origin_contact_name: c.alpha(40, 54),
            immediate_origin_contact_phone_number: c.alpha(54, 64),
            credit_total_indicator: c.alpha(64, 65),
            reserved: c.alpha(65, 80),
        })
    }

    /// Validate field contents against the default strict-ASCII charset.
    ///
    /// # Errors
    ///
    /// Returns the left-most field violation.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(Charset::Ascii)
    }

    /// Validate field contents with a configurable charset.
    ///
    /// # Errors
    ///
    /// Returns the left-most field violation.
    pub fn validate_with(&self, charset: Charset) -> Result<()> {
        fields::include_number("CashLetterCount", u64::from(self.cash_letter_count))?;
        fields::include_number("TotalRecordCount", u64::from(self.total_record_count))?;
        fields::check_alphanumeric(
            "ImmediateOriginContactName",
            &self.immediate_origin_contact_name,
            charset,
        )?;
        fields::check_numeric_str(
            "ImmediateOriginContactPhoneNumber",
            &self.immediate_origin_contact_phone_number,
        )?;
        fields::check_enum(
            "CreditTotalIndicator",
            &self.credit_total_indicator,
            &["0", "1"],
        )?;
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("99");
        out.push_str(&numeric_field(u64::from(self.cash_letter_count), 6));
        out.push_str(&numeric_field(u64::from(self.total_record_count), 8));
        out.push_str(&numeric_field(u64::from(self.total_item_count), 8));
        out.push_str(&numeric_field(self.file_total_amount, 16));
        out.push_str(&alpha_field(&self.immediate_origin_contact_name, 14));
        out.push_str(&alpha_field(&self.immediate_origin_contact_phone_number, 10));
        out.push_str(&alpha_field(&self.credit_total_indicator, 1));
        out.push_str(&alpha_field(&self.reserved, 15));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MSG_FIELD_INCLUSION;

    fn sample() -> FileControl {
        FileControl {
            cash_letter_count: 1,
            total_record_count: 11,
            total_item_count: 7,
            file_total_amount: 100_000,
            immediate_origin_contact_name: "Contact Name".to_string(),
            immediate_origin_contact_phone_number: "5558675552".to_string(),
            ..FileControl::default()
        }
    }

    #[test]
    fn test_file_control_roundtrip() {
        let line = sample().to_line();
        assert_eq!(line.chars().count(), 80);
        let parsed = FileControl::from_line(&line).unwrap();
        assert_eq!(parsed, sample());
        assert_eq!(parsed.to_line(), line);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_zero_cash_letter_count_is_inclusion() {
        let mut fc = sample();
        fc.cash_letter_count = 0;
        let err = fc.validate().unwrap_err();
        let fe = err.field_error().expect("field error");
        assert_eq!(fe.field_name, "CashLetterCount");
        assert!(fe.msg.contains(MSG_FIELD_INCLUSION));
    }
}
