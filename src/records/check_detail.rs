//! Check detail record (type "25").
//!
//! The line item for a single forward-presented check: MICR line fields,
//! the item amount in cents, and the sequence number the ECE institution
//! assigned. A check detail owns its addenda and image views; the
//! `addendum_count` and `image_view_count` columns are cross-checked against
//! the attached children by the document validator.

use crate::encoding::Charset;
use crate::error::Result;
use crate::fields::{self, alpha_field, micr_field, numeric_field, Columns};
use crate::records::check_detail_addendum::{
    CheckDetailAddendumA, CheckDetailAddendumB, CheckDetailAddendumC,
};
use crate::records::image_view::ImageView;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Check detail record (type "25") and its attached children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckDetail {
    /// Auxiliary on-us MICR field, right-justified.
    pub auxiliary_on_us: String,
    /// External processing code from the MICR line.
    pub external_processing_code: String,
    /// First eight digits of the payor bank routing number.
    pub payor_bank_routing_number: String,
    /// Check digit of the payor bank routing number.
    pub payor_bank_check_digit: String,
    /// On-us MICR field (account and check number), right-justified.
    pub on_us: String,
    /// Item amount in cents.
    pub item_amount: u64,
    /// Sequence number assigned by the ECE institution.
    pub ece_institution_item_sequence_number: String,
    /// Documentation type for this item.
    pub documentation_type_indicator: String,
    /// Whether the payor bank accepts returns electronically.
    pub return_acceptance_indicator: String,
    /// Whether the MICR line was read without repair ("1" through "4").
    pub micr_valid_indicator: String,
    /// Whether the bank of first deposit is identified ("Y", "N", "U").
    pub bofd_indicator: String,
    /// Number of addendum A records attached to this item.
    pub addendum_count: u32,
    /// Number of image views attached to this item.
    pub image_view_count: u32,
    /// Correction indicator ("0" through "4").
    pub correction_indicator: String,
    /// Archive type for the physical item.
    pub archive_type_indicator: String,
    /// Attached addendum A records (BOFD endorsements).
    pub check_detail_addendum_a: SmallVec<[CheckDetailAddendumA; 2]>,
    /// Attached addendum B records (image reference keys).
    pub check_detail_addendum_b: SmallVec<[CheckDetailAddendumB; 2]>,
    /// Attached addendum C records (subsequent endorsements).
    pub check_detail_addendum_c: SmallVec<[CheckDetailAddendumC; 2]>,
    /// Attached image view triplets, in insertion order.
    pub image_views: SmallVec<[ImageView; 2]>,
}

impl CheckDetail {
    /// Create an empty check detail.
    #[must_use]
    pub fn new() -> Self {
        CheckDetail::default()
    }

    /// Parse a check detail from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(CheckDetail {
            auxiliary_on_us: c.alpha(2, 15),
            external_processing_code: c.alpha(15, 16),
            payor_bank_routing_number: c.alpha(16, 24),
            payor_bank_check_digit: c.alpha(24, 25),
            on_us: c.alpha(25, 45),
            item_amount: c.number(45, 55),
            ece_institution_item_sequence_number: c.alpha(55, 70),
            documentation_type_indicator: c.alpha(70, 71),
            return_acceptance_indicator: c.alpha(71, 72),
            micr_valid_indicator: c.alpha(72, 73),
            bofd_indicator: c.alpha(73, 74),
            addendum_count: c.number(74, 76) as u32,
            image_view_count: c.number(76, 78) as u32,
            correction_indicator: c.alpha(78, 79),
            archive_type_indicator: c.alpha(79, 80),
            ..CheckDetail::default()
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
        fields::include_str("PayorBankRoutingNumber", &self.payor_bank_routing_number)?;
        fields::check_routing_prefix("PayorBankRoutingNumber", &self.payor_bank_routing_number)?;
        fields::check_numeric_str("PayorBankCheckDigit", &self.payor_bank_check_digit)?;
        fields::check_alphanumeric("OnUs", &self.on_us, charset)?;
        fields::include_number("ItemAmount", self.item_amount)?;
        fields::include_str(
            "EceInstitutionItemSequenceNumber",
            &self.ece_institution_item_sequence_number,
        )?;
        fields::check_alphanumeric(
            "EceInstitutionItemSequenceNumber",
            &self.ece_institution_item_sequence_number,
            charset,
        )?;
        fields::check_enum(
            "DocumentationTypeIndicator",
            &self.documentation_type_indicator,
            &[
                "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "Z",
            ],
        )?;
        fields::check_alphanumeric(
            "ReturnAcceptanceIndicator",
            &self.return_acceptance_indicator,
            charset,
        )?;
        fields::check_enum(
            "MICRValidIndicator",
            &self.micr_valid_indicator,
            &["1", "2", "3", "4"],
        )?;
        fields::include_str("BOFDIndicator", &self.bofd_indicator)?;
        fields::check_enum("BOFDIndicator", &self.bofd_indicator, &["Y", "N", "U"])?;
        fields::check_enum(
            "CorrectionIndicator",
            &self.correction_indicator,
            &["0", "1", "2", "3", "4"],
        )?;
        fields::check_enum(
            "ArchiveTypeIndicator",
            &self.archive_type_indicator,
            &["A", "B", "D", "F", "M"],
        )?;
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("25");
        out.push_str(&micr_field(&self.auxiliary_on_us, 13));
        out.push_str(&alpha_field(&self.external_processing_code, 1));
        out.push_str(&alpha_field(&self.payor_bank_routing_number, 8));
        out.push_str(&alpha_field(&self.payor_bank_check_digit, 1));
        out.push_str(&micr_field(&self.on_us, 20));
        out.push_str(&numeric_field(self.item_amount, 10));
        out.push_str(&alpha_field(&self.ece_institution_item_sequence_number, 15));
        out.push_str(&alpha_field(&self.documentation_type_indicator, 1));
        out.push_str(&alpha_field(&self.return_acceptance_indicator, 1));
        out.push_str(&alpha_field(&self.micr_valid_indicator, 1));
        out.push_str(&alpha_field(&self.bofd_indicator, 1));
        out.push_str(&numeric_field(u64::from(self.addendum_count), 2));
        out.push_str(&numeric_field(u64::from(self.image_view_count), 2));
        out.push_str(&alpha_field(&self.correction_indicator, 1));
        out.push_str(&alpha_field(&self.archive_type_indicator, 1));
        out
    }

    crate::define_addendum_accessors!(
        check_detail_addendum_a,
        add_check_detail_addendum_a,
        check_detail_addenda_a,
        CheckDetailAddendumA
    );
    crate::define_addendum_accessors!(
        check_detail_addendum_b,
        add_check_detail_addendum_b,
        check_detail_addenda_b,
        CheckDetailAddendumB
    );
    crate::define_addendum_accessors!(
        check_detail_addendum_c,
        add_check_detail_addendum_c,
        check_detail_addenda_c,
        CheckDetailAddendumC
    );

    /// Attach an image view triplet to this item.
    pub fn add_image_view(&mut self, view: ImageView) {
        self.image_views.push(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MSG_FIELD_INCLUSION;

    fn sample() -> CheckDetail {
        CheckDetail {
            auxiliary_on_us: "123456789".to_string(),
            payor_bank_routing_number: "03130010".to_string(),
            payor_bank_check_digit: "4".to_string(),
            on_us: "5558881".to_string(),
            item_amount: 100_000,
            ece_institution_item_sequence_number: "1".to_string(),
            documentation_type_indicator: "G".to_string(),
            bofd_indicator: "Y".to_string(),
            addendum_count: 0,
            image_view_count: 0,
            correction_indicator: "0".to_string(),
            ..CheckDetail::default()
        }
    }

    #[test]
    fn test_check_detail_roundtrip() {
        let line = sample().to_line();
        assert_eq!(line.chars().count(), 80);
        let parsed = CheckDetail::from_line(&line).unwrap();
        assert_eq!(parsed, sample());
        assert_eq!(parsed.to_line(), line);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_micr_fields_right_justify() {
        let line = sample().to_line();
        // columns 2..15 hold the auxiliary on-us, right-justified
        assert_eq!(&line[2..15], "    123456789");
        // columns 25..45 hold the on-us, right-justified
        assert_eq!(&line[25..45], "             5558881");
    }

    #[test]
    fn test_missing_payor_routing_is_inclusion() {
        let mut cd = sample();
        cd.payor_bank_routing_number = String::new();
        let err = cd.validate().unwrap_err();
        let fe = err.field_error().expect("field error");
        assert_eq!(fe.field_name, "PayorBankRoutingNumber");
        assert!(fe.msg.contains(MSG_FIELD_INCLUSION));
    }

    #[test]
    fn test_zero_amount_is_inclusion() {
        let mut cd = sample();
        cd.item_amount = 0;
        let err = cd.validate().unwrap_err();
        assert_eq!(err.field_error().unwrap().field_name, "ItemAmount");
    }

    #[test]
    fn test_bad_bofd_indicator() {
        let mut cd = sample();
        cd.bofd_indicator = "Q".to_string();
        let err = cd.validate().unwrap_err();
        assert_eq!(err.field_error().unwrap().field_name, "BOFDIndicator");
    }

    #[test]
    fn test_addendum_accessors() {
        let mut cd = sample();
        cd.add_check_detail_addendum_a(CheckDetailAddendumA::default());
        assert_eq!(cd.check_detail_addenda_a().len(), 1);
    }
}
