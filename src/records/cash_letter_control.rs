//! Cash letter control record (type "90").
//!
//! Closes a cash letter and carries its bundle count, item count, total
//! amount, and image count. Declared values are cross-checked against the
//! assembled tree by the document validator.

use crate::encoding::Charset;
use crate::error::Result;
use crate::fields::{self, alpha_field, date_field, numeric_field, Columns};
use serde::{Deserialize, Serialize};

/// Cash letter control record (type "90").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CashLetterControl {
    /// Declared number of bundles in the cash letter.
    pub bundle_count: u32,
    /// Declared number of items across all bundles.
    pub cash_letter_items_count: u32,
    /// Declared total of item amounts, in cents.
    pub cash_letter_total_amount: u64,
    /// Declared number of image records in the cash letter.
    pub cash_letter_images_count: u64,
    /// Name of the ECE institution.
    pub ece_institution_name: String,
    /// Settlement date assigned by the receiving institution, `YYYYMMDD`.
    pub settlement_date: String,
    /// Reserved columns, normally blank.
    pub reserved: String,
}

impl CashLetterControl {
    /// Create an empty cash letter control.
    #[must_use]
    pub fn new() -> Self {
        CashLetterControl::default()
    }

    /// Parse a cash letter control from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(CashLetterControl {
            bundle_count: c.number(2, 8) as u32,
            cash_letter_items_count: c.number(8, 16) as u32,
            cash_letter_total_amount: c.number(16, 30),
            cash_letter_images_count: c.number(30, 39),
            ece_institution_name: c.alpha(39, 57),
            settlement_date: c.alpha(57, 65),
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
        fields::check_alphanumeric("EceInstitutionName", &self.ece_institution_name, charset)?;
        fields::check_date("SettlementDate", &self.settlement_date)?;
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("90");
        out.push_str(&numeric_field(u64::from(self.bundle_count), 6));
        out.push_str(&numeric_field(u64::from(self.cash_letter_items_count), 8));
        out.push_str(&numeric_field(self.cash_letter_total_amount, 14));
        out.push_str(&numeric_field(self.cash_letter_images_count, 9));
        out.push_str(&alpha_field(&self.ece_institution_name, 18));
        out.push_str(&date_field(&self.settlement_date));
        out.push_str(&alpha_field(&self.reserved, 15));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CashLetterControl {
        CashLetterControl {
            bundle_count: 1,
            cash_letter_items_count: 7,
            cash_letter_total_amount: 100_000,
            cash_letter_images_count: 1,
            ece_institution_name: "Wells Fargo".to_string(),
            settlement_date: "20180905".to_string(),
            ..CashLetterControl::default()
        }
    }

    #[test]
    fn test_cash_letter_control_roundtrip() {
        let line = sample().to_line();
        assert_eq!(line.chars().count(), 80);
        let parsed = CashLetterControl::from_line(&line).unwrap();
        assert_eq!(parsed, sample());
        assert_eq!(parsed.to_line(), line);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_bad_settlement_date() {
        let mut clc = sample();
        clc.settlement_date = "20189905".to_string();
        let err = clc.validate().unwrap_err();
        assert_eq!(err.field_error().unwrap().field_name, "SettlementDate");
    }
}
