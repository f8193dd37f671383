//! Bundle control record (type "70").
//!
//! Closes a bundle and carries its item count, total amount, MICR-valid
//! total, and image count. The counts here are *declared* values; the
//! document validator cross-checks them against the bundle's actual
//! children, so a zero count parses and validates cleanly at record level
//! (an empty bundle is a structural question, not a field one).

use crate::encoding::Charset;
use crate::error::Result;
use crate::fields::{self, alpha_field, numeric_field, Columns};
use serde::{Deserialize, Serialize};

/// Bundle control record (type "70").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BundleControl {
    /// Declared number of items in the bundle.
    pub bundle_items_count: u32,
    /// Declared total of item amounts, in cents.
    pub bundle_total_amount: u64,
    /// Declared total of MICR-valid item amounts, in cents.
    pub micr_valid_total_amount: u64,
    /// Declared number of image records in the bundle.
    pub bundle_images_count: u32,
    /// Owner-defined field.
    pub user_field: String,
    /// Reserved columns, normally blank.
    pub reserved: String,
}

impl BundleControl {
    /// Create an empty bundle control.
    #[must_use]
    pub fn new() -> Self {
        BundleControl::default()
    }

    /// Parse a bundle control from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(BundleControl {
            bundle_items_count: c.number(2, 6) as u32,
            bundle_total_amount: c.number(6, 18),
            micr_valid_total_amount: c.number(18, 30),
            bundle_images_count: c.number(30, 35) as u32,
            user_field: c.alpha(35, 55),
            reserved: c.alpha(55, 80),
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
        fields::check_alphanumeric("UserField", &self.user_field, charset)?;
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("70");
        out.push_str(&numeric_field(u64::from(self.bundle_items_count), 4));
        out.push_str(&numeric_field(self.bundle_total_amount, 12));
        out.push_str(&numeric_field(self.micr_valid_total_amount, 12));
        out.push_str(&numeric_field(u64::from(self.bundle_images_count), 5));
        out.push_str(&alpha_field(&self.user_field, 20));
        out.push_str(&alpha_field(&self.reserved, 25));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BundleControl {
        BundleControl {
            bundle_items_count: 7,
            bundle_total_amount: 100_000,
            micr_valid_total_amount: 100_000,
            bundle_images_count: 1,
            ..BundleControl::default()
        }
    }

    #[test]
    fn test_bundle_control_roundtrip() {
        let line = sample().to_line();
        assert_eq!(line.chars().count(), 80);
        let parsed = BundleControl::from_line(&line).unwrap();
        assert_eq!(parsed, sample());
        assert_eq!(parsed.to_line(), line);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_empty_bundle_control_is_record_valid() {
        let bc = BundleControl::new();
        bc.validate().unwrap();
        assert_eq!(&bc.to_line()[2..6], "0000");
    }
}
