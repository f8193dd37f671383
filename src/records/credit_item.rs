//! Credit item record (type "61").
//!
//! A deposit-side credit accompanying the checks of a cash letter. Credit
//! items appear after the cash letter header and before the first bundle.

use crate::encoding::Charset;
use crate::error::Result;
use crate::fields::{self, alpha_field, micr_field, numeric_field, Columns};
use serde::{Deserialize, Serialize};

/// Credit item record (type "61").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditItem {
    /// Auxiliary on-us MICR field, right-justified.
    pub auxiliary_on_us: String,
    /// External processing code from the MICR line.
    pub external_processing_code: String,
    /// Routing number of the bank the credit posts to.
    pub posting_bank_routing_number: String,
    /// On-us MICR field, right-justified.
    pub on_us: String,
    /// Credit amount in cents.
    pub item_amount: u64,
    /// Sequence number assigned by the creating institution.
    pub credit_item_sequence_number: String,
    /// Documentation type for this credit.
    pub documentation_type_indicator: String,
    /// Type of account the credit posts to.
    pub type_of_account_code: String,
    /// Source of the work the credit settles.
    pub source_work_code: String,
}

impl CreditItem {
    /// Create an empty credit item.
    #[must_use]
    pub fn new() -> Self {
        CreditItem::default()
    }

    /// Parse a credit item from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(CreditItem {
            auxiliary_on_us: c.alpha(2, 17),
            external_processing_code: c.alpha(17, 18),
            posting_bank_routing_number: c.alpha(18, 27),
            on_us: c.alpha(27, 47),
            item_amount: c.number(47, 61),
            credit_item_sequence_number: c.alpha(61, 76),
            documentation_type_indicator: c.alpha(76, 77),
            type_of_account_code: c.alpha(77, 78),
            source_work_code: c.alpha(78, 80),
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
        fields::check_alphanumeric("AuxiliaryOnUs", &self.auxiliary_on_us, charset)?;
        fields::check_alphanumeric(
            "ExternalProcessingCode",
            &self.external_processing_code,
            charset,
        )?;
        fields::include_routing("PostingBankRoutingNumber", &self.posting_bank_routing_number)?;
        fields::check_routing("PostingBankRoutingNumber", &self.posting_bank_routing_number)?;
        fields::check_alphanumeric("OnUs", &self.on_us, charset)?;
        fields::include_number("ItemAmount", self.item_amount)?;
        fields::include_str("CreditItemSequenceNumber", &self.credit_item_sequence_number)?;
        fields::check_alphanumeric(
            "CreditItemSequenceNumber",
            &self.credit_item_sequence_number,
            charset,
        )?;
        fields::check_enum(
            "DocumentationTypeIndicator",
            &self.documentation_type_indicator,
            &[
                "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "Z",
            ],
        )?;
        fields::check_enum(
            "TypeOfAccountCode",
            &self.type_of_account_code,
            &["0", "1", "2", "3"],
        )?;
        fields::check_numeric_str("SourceWorkCode", &self.source_work_code)?;
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("61");
        out.push_str(&micr_field(&self.auxiliary_on_us, 15));
        out.push_str(&alpha_field(&self.external_processing_code, 1));
        out.push_str(&alpha_field(&self.posting_bank_routing_number, 9));
        out.push_str(&micr_field(&self.on_us, 20));
        out.push_str(&numeric_field(self.item_amount, 14));
        out.push_str(&alpha_field(&self.credit_item_sequence_number, 15));
        out.push_str(&alpha_field(&self.documentation_type_indicator, 1));
        out.push_str(&alpha_field(&self.type_of_account_code, 1));
        out.push_str(&alpha_field(&self.source_work_code, 2));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MSG_FIELD_INCLUSION;

    fn sample() -> CreditItem {
        CreditItem {
            auxiliary_on_us: "123456789".to_string(),
            posting_bank_routing_number: "031300012".to_string(),
            on_us: "5558881".to_string(),
            item_amount: 100_000,
            credit_item_sequence_number: "1".to_string(),
            documentation_type_indicator: "G".to_string(),
            type_of_account_code: "1".to_string(),
            source_work_code: "01".to_string(),
            ..CreditItem::default()
        }
    }

    #[test]
    fn test_credit_item_roundtrip() {
        let line = sample().to_line();
        assert_eq!(line.chars().count(), 80);
        let parsed = CreditItem::from_line(&line).unwrap();
        assert_eq!(parsed, sample());
        assert_eq!(parsed.to_line(), line);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_missing_posting_bank_routing() {
        let mut ci = sample();
        ci.posting_bank_routing_number = String::new();
        let err = ci.validate().unwrap_err();
        let fe = err.field_error().expect("field error");
        assert_eq!(fe.field_name, "PostingBankRoutingNumber");
        assert!(fe.msg.contains(MSG_FIELD_INCLUSION));
    }

    #[test]
    fn test_zero_amount_is_inclusion() {
        let mut ci = sample();
        ci.item_amount = 0;
        let err = ci.validate().unwrap_err();
        assert_eq!(err.field_error().unwrap().field_name, "ItemAmount");
    }
}
