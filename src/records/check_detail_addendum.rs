//! Check detail addendum records (types "26", "27", "28").
//!
//! Addendum A carries the bank-of-first-deposit endorsement, addendum B the
//! image archive reference, and addendum C subsequent endorsements.

use crate::encoding::Charset;
use crate::error::Result;
use crate::fields::{self, alpha_field, date_field, numeric_field, Columns};
use serde::{Deserialize, Serialize};

/// Check detail addendum A record (type "26"): BOFD endorsement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckDetailAddendumA {
    /// Position of this addendum among the item's A addenda, starting at 1.
    pub record_number: u32,
    /// Routing number returns should be directed to.
    pub return_location_routing_number: String,
    /// Date of the BOFD endorsement, `YYYYMMDD`.
    pub bofd_endorsement_date: String,
    /// Item sequence number assigned by the BOFD.
    pub bofd_item_sequence_number: String,
    /// Deposit account number at the BOFD.
    pub bofd_account_number: String,
    /// Branch of the BOFD.
    pub bofd_branch_code: String,
    /// Name of the payee.
    pub payee_name: String,
    /// Whether the item was truncated at the BOFD ("Y", "N").
    pub truncation_indicator: String,
    /// Conversion applied by the BOFD.
    pub bofd_conversion_indicator: String,
    /// Correction applied by the BOFD ("0" through "4").
    pub bofd_correction_indicator: String,
    /// Owner-defined field.
    pub user_field: String,
    /// Reserved columns, normally blank.
    pub reserved: String,
}

impl CheckDetailAddendumA {
    /// Parse from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(CheckDetailAddendumA {
            record_number: c.number(2, 3) as u32,
            return_location_routing_number: c.alpha(3, 12),
            bofd_endorsement_date: c.alpha(12, 20),
            bofd_item_sequence_number: c.alpha(20, 35),
            bofd_account_number: c.alpha(35, 53),
            bofd_branch_code: c.alpha(53, 58),
            payee_name: c.alpha(58, 73),
            truncation_indicator: c.alpha(73, 74),
            bofd_conversion_indicator: c.alpha(74, 75),
            bofd_correction_indicator: c.alpha(75, 76),
            user_field: c.alpha(76, 77),
            reserved: c.alpha(77, 80),
        })
    }

    /// Validate against the default strict-ASCII charset.
    ///
    /// # Errors
    ///
    /// Returns the left-most field violation.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(Charset::Ascii)
    }

    /// Validate with a configurable charset.
    ///
    /// # Errors
    ///
    /// Returns the left-most field violation.
    pub fn validate_with(&self, charset: Charset) -> Result<()> {
        fields::include_number("RecordNumber", u64::from(self.record_number))?;
        fields::include_routing(
            "ReturnLocationRoutingNumber",
            &self.return_location_routing_number,
        )?;
        fields::check_routing(
            "ReturnLocationRoutingNumber",
            &self.return_location_routing_number,
        )?;
        fields::include_date("BOFDEndorsementDate", &self.bofd_endorsement_date)?;
        fields::check_date("BOFDEndorsementDate", &self.bofd_endorsement_date)?;
        fields::include_str("BOFDItemSequenceNumber", &self.bofd_item_sequence_number)?;
        fields::check_alphanumeric(
            "BOFDItemSequenceNumber",
            &self.bofd_item_sequence_number,
            charset,
        )?;
        fields::check_alphanumeric("BOFDAccountNumber", &self.bofd_account_number, charset)?;
        fields::check_alphanumeric("BOFDBranchCode", &self.bofd_branch_code, charset)?;
        fields::check_alphanumeric("PayeeName", &self.payee_name, charset)?;
        fields::include_str("TruncationIndicator", &self.truncation_indicator)?;
        fields::check_enum("TruncationIndicator", &self.truncation_indicator, &["Y", "N"])?;
        fields::check_numeric_str("BOFDConversionIndicator", &self.bofd_conversion_indicator)?;
        fields::check_enum(
            "BOFDCorrectionIndicator",
            &self.bofd_correction_indicator,
            &["0", "1", "2", "3", "4"],
        )?;
        fields::check_alphanumeric("UserField", &self.user_field, charset)?;
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("26");
        out.push_str(&numeric_field(u64::from(self.record_number), 1));
        out.push_str(&alpha_field(&self.return_location_routing_number, 9));
        out.push_str(&date_field(&self.bofd_endorsement_date));
        out.push_str(&alpha_field(&self.bofd_item_sequence_number, 15));
        out.push_str(&alpha_field(&self.bofd_account_number, 18));
        out.push_str(&alpha_field(&self.bofd_branch_code, 5));
        out.push_str(&alpha_field(&self.payee_name, 15));
        out.push_str(&alpha_field(&self.truncation_indicator, 1));
        out.push_str(&alpha_field(&self.bofd_conversion_indicator, 1));
        out.push_str(&alpha_field(&self.bofd_correction_indicator, 1));
        out.push_str(&alpha_field(&self.user_field, 1));
        out.push_str(&alpha_field(&self.reserved, 3));
        out
    }
}

/// Check detail addendum B record (type "27"): image archive reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckDetailAddendumB {
    /// Whether an image reference key is present ("0", "1").
    pub image_reference_key_indicator: String,
    /// Microfilm or archive sequence number for the physical item.
    pub microfilm_archive_sequence_number: String,
    /// Declared length of the image reference key.
    pub image_reference_key_length: u32,
    /// Key into the image archive.
    pub image_reference_key: String,
    /// Free-form description of the item.
    pub description: String,
    /// Owner-defined field.
    pub user_field: String,
    /// Reserved columns, normally blank.
    pub reserved: String,
}

impl CheckDetailAddendumB {
    /// Parse from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(CheckDetailAddendumB {
            image_reference_key_indicator: c.alpha(2, 3),
            microfilm_archive_sequence_number: c.alpha(3, 18),
            image_reference_key_length: c.number(18, 22) as u32,
            image_reference_key: c.alpha(22, 56),
            description: c.alpha(56, 71),
            user_field: c.alpha(71, 75),
            reserved: c.alpha(75, 80),
        })
    }

    /// Validate against the default strict-ASCII charset.
    ///
    /// # Errors
    ///
    /// Returns the left-most field violation.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(Charset::Ascii)
    }

    /// Validate with a configurable charset.
    ///
    /// # Errors
    ///
    /// Returns the left-most field violation.
    pub fn validate_with(&self, charset: Charset) -> Result<()> {
        fields::check_enum(
            "ImageReferenceKeyIndicator",
            &self.image_reference_key_indicator,
            &["0", "1"],
        )?;
        fields::include_str(
            "MicrofilmArchiveSequenceNumber",
            &self.microfilm_archive_sequence_number,
        )?;
        fields::check_alphanumeric(
            "MicrofilmArchiveSequenceNumber",
            &self.microfilm_archive_sequence_number,
            charset,
        )?;
        fields::check_alphanumeric("ImageReferenceKey", &self.image_reference_key, charset)?;
        fields::check_alphanumeric("Description", &self.description, charset)?;
        fields::check_alphanumeric("UserField", &self.user_field, charset)?;
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("27");
        out.push_str(&alpha_field(&self.image_reference_key_indicator, 1));
        out.push_str(&alpha_field(&self.microfilm_archive_sequence_number, 15));
        out.push_str(&numeric_field(u64::from(self.image_reference_key_length), 4));
        out.push_str(&alpha_field(&self.image_reference_key, 34));
        out.push_str(&alpha_field(&self.description, 15));
        out.push_str(&alpha_field(&self.user_field, 4));
        out.push_str(&alpha_field(&self.reserved, 5));
        out
    }
}

/// Check detail addendum C record (type "28"): subsequent endorsement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckDetailAddendumC {
    /// Position of this addendum among the item's C addenda, starting at 1.
    pub record_number: u32,
    /// Routing number of the endorsing bank.
    pub endorsing_bank_routing_number: String,
    /// Business date of the endorsement, `YYYYMMDD`.
    pub bofd_endorsement_business_date: String,
    /// Item sequence number assigned by the endorsing bank.
    pub endorsing_bank_item_sequence_number: String,
    /// Whether the item was truncated ("Y", "N").
    pub truncation_indicator: String,
    /// Conversion applied by the endorsing bank.
    pub endorsing_bank_conversion_indicator: String,
    /// Correction applied by the endorsing bank ("0" through "4").
    pub endorsing_bank_correction_indicator: String,
    /// Return reason if the endorsing bank returned the item.
    pub return_reason: String,
    /// Owner-defined field.
    pub user_field: String,
    /// Reserved columns, normally blank.
    pub reserved: String,
}

impl CheckDetailAddendumC {
    /// Parse from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(CheckDetailAddendumC {
            record_number: c.number(2, 4) as u32,
            endorsing_bank_routing_number: c.alpha(4, 13),
            bofd_endorsement_business_date: c.alpha(13, 21),
            endorsing_bank_item_sequence_number: c.alpha(21, 36),
            truncation_indicator: c.alpha(36, 37),
            endorsing_bank_conversion_indicator: c.alpha(37, 38),
            endorsing_bank_correction_indicator: c.alpha(38, 39),
            return_reason: c.alpha(39, 40),
            user_field: c.alpha(40, 59),
            reserved: c.alpha(59, 80),
        })
    }

    /// Validate against the default strict-ASCII charset.
    ///
    /// # Errors
    ///
    /// Returns the left-most field violation.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(Charset::Ascii)
    }

    /// Validate with a configurable charset.
    ///
    /// # Errors
    ///
    /// Returns the left-most field violation.
    pub fn validate_with(&self, charset: Charset) -> Result<()> {
        fields::include_number("RecordNumber", u64::from(self.record_number))?;
        fields::include_routing(
            "EndorsingBankRoutingNumber",
            &self.endorsing_bank_routing_number,
        )?;
        fields::check_routing(
            "EndorsingBankRoutingNumber",
            &self.endorsing_bank_routing_number,
        )?;
        fields::include_date(
            "BOFDEndorsementBusinessDate",
            &self.bofd_endorsement_business_date,
        )?;
        fields::check_date(
            "BOFDEndorsementBusinessDate",
            &self.bofd_endorsement_business_date,
        )?;
        fields::include_str(
            "EndorsingBankItemSequenceNumber",
            &self.endorsing_bank_item_sequence_number,
        )?;
        fields::check_alphanumeric(
            "EndorsingBankItemSequenceNumber",
            &self.endorsing_bank_item_sequence_number,
            charset,
        )?;
        fields::include_str("TruncationIndicator", &self.truncation_indicator)?;
        fields::check_enum("TruncationIndicator", &self.truncation_indicator, &["Y", "N"])?;
        fields::check_numeric_str(
            "EndorsingBankConversionIndicator",
            &self.endorsing_bank_conversion_indicator,
        )?;
        fields::check_enum(
            "EndorsingBankCorrectionIndicator",
            &self.endorsing_bank_correction_indicator,
            &["0", "1", "2", "3", "4"],
        )?;
        fields::check_alphanumeric("ReturnReason", &self.return_reason, charset)?;
        fields::check_alphanumeric("UserField", &self.user_field, charset)?;
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("28");
        out.push_str(&numeric_field(u64::from(self.record_number), 2));
        out.push_str(&alpha_field(&self.endorsing_bank_routing_number, 9));
        out.push_str(&date_field(&self.bofd_endorsement_business_date));
        out.push_str(&alpha_field(&self.endorsing_bank_item_sequence_number, 15));
        out.push_str(&alpha_field(&self.truncation_indicator, 1));
        out.push_str(&alpha_field(&self.endorsing_bank_conversion_indicator, 1));
        out.push_str(&alpha_field(&self.endorsing_bank_correction_indicator, 1));
        out.push_str(&alpha_field(&self.return_reason, 1));
        out.push_str(&alpha_field(&self.user_field, 19));
        out.push_str(&alpha_field(&self.reserved, 21));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MSG_FIELD_INCLUSION;

    fn sample_a() -> CheckDetailAddendumA {
        CheckDetailAddendumA {
            record_number: 1,
            return_location_routing_number: "121042882".to_string(),
            bofd_endorsement_date: "20180905".to_string(),
            bofd_item_sequence_number: "1".to_string(),
            bofd_account_number: "938383".to_string(),
            bofd_branch_code: "01".to_string(),
            payee_name: "Test Payee".to_string(),
            truncation_indicator: "Y".to_string(),
            ..CheckDetailAddendumA::default()
        }
    }

    #[test]
    fn test_addendum_a_roundtrip() {
        let line = sample_a().to_line();
        assert_eq!(line.chars().count(), 80);
        let parsed = CheckDetailAddendumA::from_line(&line).unwrap();
        assert_eq!(parsed, sample_a());
        assert_eq!(parsed.to_line(), line);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_addendum_a_missing_return_location() {
        let mut a = sample_a();
        a.return_location_routing_number = String::new();
        let err = a.validate().unwrap_err();
        let fe = err.field_error().expect("field error");
        assert_eq!(fe.field_name, "ReturnLocationRoutingNumber");
        assert!(fe.msg.contains(MSG_FIELD_INCLUSION));
    }

    fn sample_b() -> CheckDetailAddendumB {
        CheckDetailAddendumB {
            image_reference_key_indicator: "1".to_string(),
            microfilm_archive_sequence_number: "1A".to_string(),
            image_reference_key_length: 34,
            image_reference_key: "0".to_string(),
            description: "CD Addendum B".to_string(),
            ..CheckDetailAddendumB::default()
        }
    }

    #[test]
    fn test_addendum_b_roundtrip() {
        let line = sample_b().to_line();
        assert_eq!(line.chars().count(), 80);
        let parsed = CheckDetailAddendumB::from_line(&line).unwrap();
        assert_eq!(parsed, sample_b());
        assert_eq!(parsed.to_line(), line);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_addendum_b_blank_microfilm_sequence() {
        let mut b = sample_b();
        b.microfilm_archive_sequence_number = "               ".to_string();
        let err = b.validate().unwrap_err();
        let fe = err.field_error().expect("field error");
        assert_eq!(fe.field_name, "MicrofilmArchiveSequenceNumber");
        assert!(fe.msg.contains(MSG_FIELD_INCLUSION));
    }

    fn sample_c() -> CheckDetailAddendumC {
        CheckDetailAddendumC {
            record_number: 1,
            endorsing_bank_routing_number: "231380104".to_string(),
            bofd_endorsement_business_date: "20180905".to_string(),
            endorsing_bank_item_sequence_number: "1".to_string(),
            truncation_indicator: "Y".to_string(),
            ..CheckDetailAddendumC::default()
        }
    }

    #[test]
    fn test_addendum_c_roundtrip() {
        let line = sample_c().to_line();
        assert_eq!(line.chars().count(), 80);
        let parsed = CheckDetailAddendumC::from_line(&line).unwrap();
        assert_eq!(parsed, sample_c());
        assert_eq!(parsed.to_line(), line);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_addendum_c_missing_endorsing_routing() {
        let mut c = sample_c();
        c.endorsing_bank_routing_number = String::new();
        let err = c.validate().unwrap_err();
        let fe = err.field_error().expect("field error");
        assert_eq!(fe.field_name, "EndorsingBankRoutingNumber");
        assert!(fe.msg.contains(MSG_FIELD_INCLUSION));
    }
}
