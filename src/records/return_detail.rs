//! Return detail record (type "31").
//!
//! The line item for a single returned check. Mirrors the check detail but
//! carries the return reason, the business date of the forward bundle the
//! item originally travelled in, and how many times the item has been
//! returned.

use crate::encoding::Charset;
use crate::error::Result;
use crate::fields::{self, alpha_field, date_field, micr_field, numeric_field, Columns};
use crate::records::image_view::ImageView;
use crate::records::return_detail_addendum::{
    ReturnDetailAddendumA, ReturnDetailAddendumB, ReturnDetailAddendumC, ReturnDetailAddendumD,
};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Return detail record (type "31") and its attached children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReturnDetail {
    /// First eight digits of the payor bank routing number.
    pub payor_bank_routing_number: String,
    /// Check digit of the payor bank routing number.
    pub payor_bank_check_digit: String,
    /// On-us MICR field, right-justified.
    pub on_us: String,
    /// Item amount in cents.
    pub item_amount: u64,
    /// Reason the item is being returned ("A" through "Z", "1" through "9").
    pub return_reason: String,
    /// Number of addendum A records attached to this item.
    pub addendum_count: u32,
    /// Number of image views attached to this item.
    pub image_view_count: u32,
    /// Documentation type for this item.
    pub documentation_type_indicator: String,
    /// Business date of the forward bundle this item came from, `YYYYMMDD`.
    pub forward_bundle_business_date: String,
    /// Sequence number assigned by the ECE institution.
    pub ece_institution_item_sequence_number: String,
    /// External processing code from the MICR line.
    pub external_processing_code: String,
    /// Whether notification rather than the item itself is returned.
    pub return_notification_indicator: String,
    /// Archive type for the physical item.
    pub archive_type_indicator: String,
    /// How many times this item has been returned ("0" through "9").
    pub times_returned: String,
    /// Owner-defined field.
    pub user_field: String,
    /// Attached addendum A records.
    pub return_detail_addendum_a: SmallVec<[ReturnDetailAddendumA; 2]>,
    /// Attached addendum B records.
    pub return_detail_addendum_b: SmallVec<[ReturnDetailAddendumB; 2]>,
    /// Attached addendum C records.
    pub return_detail_addendum_c: SmallVec<[ReturnDetailAddendumC; 2]>,
    /// Attached addendum D records.
    pub return_detail_addendum_d: SmallVec<[ReturnDetailAddendumD; 2]>,
    /// Attached image view triplets, in insertion order.
    pub image_views: SmallVec<[ImageView; 2]>,
}

impl ReturnDetail {
    /// Create an empty return detail.
    #[must_use]
    pub fn new() -> Self {
        ReturnDetail::default()
    }

    /// Parse a return detail from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(ReturnDetail {
            payor_bank_routing_number: c.alpha(2, 10),
            payor_bank_check_digit: c.alpha(10, 11),
            on_us: c.alpha(11, 31),
            item_amount: c.number(31, 41),
            return_reason: c.alpha(41, 42),
            addendum_count: c.number(42, 44) as u32,
            image_view_count: c.number(44, 46) as u32,
            documentation_type_indicator: c.alpha(46, 47),
            forward_bundle_business_date: c.alpha(47, 55),
            ece_institution_item_sequence_number: c.alpha(55, 70),
            external_processing_code: c.alpha(70, 71),
            return_notification_indicator: c.alpha(71, 72),
            archive_type_indicator: c.alpha(72, 73),
            times_returned: c.alpha(73, 74),
            user_field: c.alpha(74, 80),
            ..ReturnDetail::default()
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
        fields::include_str("PayorBankRoutingNumber", &self.payor_bank_routing_number)?;
        fields::check_routing_prefix("PayorBankRoutingNumber", &self.payor_bank_routing_number)?;
        fields::check_numeric_str("PayorBankCheckDigit", &self.payor_bank_check_digit)?;
        fields::check_alphanumeric("OnUs", &self.on_us, charset)?;
        fields::include_number("ItemAmount", self.item_amount)?;
        fields::include_str("ReturnReason", &self.return_reason)?;
        fields::check_upper_alpha("ReturnReason", &self.return_reason)?;
        fields::check_enum(
            "DocumentationTypeIndicator",
            &self.documentation_type_indicator,
            &[
                "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "Z",
            ],
        )?;
        fields::check_date(
            "ForwardBundleBusinessDate",
            &self.forward_bundle_business_date,
        )?;
        fields::include_str(
            "EceInstitutionItemSequenceNumber",
            &self.ece_institution_item_sequence_number,
        )?;
        fields::check_alphanumeric(
            "EceInstitutionItemSequenceNumber",
            &self.ece_institution_item_sequence_number,
            charset,
        )?;
        fields::check_alphanumeric(
            "ExternalProcessingCode",
            &self.external_processing_code,
            charset,
        )?;
        fields::check_enum(
            "ReturnNotificationIndicator",
            &self.return_notification_indicator,
            &["1", "2"],
        )?;
        fields::check_enum(
            "ArchiveTypeIndicator",
            &self.archive_type_indicator,
            &["A", "B", "D", "F", "M"],
        )?;
        fields::check_numeric_str("TimesReturned", &self.times_returned)?;
        fields::check_alphanumeric("UserField", &self.user_field, charset)?;
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("31");
        out.push_str(&alpha_field(&self.payor_bank_routing_number, 8));
        out.push_str(&alpha_field(&self.payor_bank_check_digit, 1));
        out.push_str(&micr_field(&self.on_us, 20));
        out.push_str(&numeric_field(self.item_amount, 10));
        out.push_str(&alpha_field(&self.return_reason, 1));
        out.push_str(&numeric_field(u64::from(self.addendum_count), 2));
        out.push_str(&numeric_field(u64::from(self.image_view_count), 2));
        out.push_str(&alpha_field(&self.documentation_type_indicator, 1));
        out.push_str(&date_field(&self.forward_bundle_business_date));
        out.push_str(&alpha_field(&self.ece_institution_item_sequence_number, 15));
        out.push_str(&alpha_field(&self.external_processing_code, 1));
        out.push_str(&alpha_field(&self.return_notification_indicator, 1));
        out.push_str(&alpha_field(&self.archive_type_indicator, 1));
        out.push_str(&alpha_field(&self.times_returned, 1));
        out.push_str(&alpha_field(&self.user_field, 6));
        out
    }

    crate::define_addendum_accessors!(
        return_detail_addendum_a,
        add_return_detail_addendum_a,
        return_detail_addenda_a,
        ReturnDetailAddendumA
    );
    crate::define_addendum_accessors!(
        return_detail_addendum_b,
        add_return_detail_addendum_b,
        return_detail_addenda_b,
        ReturnDetailAddendumB
    );
    crate::define_addendum_accessors!(
        return_detail_addendum_c,
        add_return_detail_addendum_c,
        return_detail_addenda_c,
        ReturnDetailAddendumC
    );
    crate::define_addendum_accessors!(
        return_detail_addendum_d,
        add_return_detail_addendum_d,
        return_detail_addenda_d,
        ReturnDetailAddendumD
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

    fn sample() -> ReturnDetail {
        ReturnDetail {
            payor_bank_routing_number: "03130010".to_string(),
            payor_bank_check_digit: "4".to_string(),
            on_us: "5558881".to_string(),
            item_amount: 100_000,
            return_reason: "A".to_string(),
            forward_bundle_business_date: "20180905".to_string(),
            ece_institution_item_sequence_number: "1".to_string(),
            times_returned: "0".to_string(),
            ..ReturnDetail::default()
        }
    }

    #[test]
    fn test_return_detail_roundtrip() {
        let line = sample().to_line();
        assert_eq!(line.chars().count(), 80);
        let parsed = ReturnDetail::from_line(&line).unwrap();
        assert_eq!(parsed, sample());
        assert_eq!(parsed.to_line(), line);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_missing_payor_routing_is_inclusion() {
        let mut rd = sample();
        rd.payor_bank_routing_number = String::new();
        let err = rd.validate().unwrap_err();
        let fe = err.field_error().expect("field error");
        assert_eq!(fe.field_name, "PayorBankRoutingNumber");
        assert!(fe.msg.contains(MSG_FIELD_INCLUSION));
    }

    #[test]
    fn test_missing_return_reason() {
        let mut rd = sample();
        rd.return_reason = String::new();
        let err = rd.validate().unwrap_err();
        assert_eq!(err.field_error().unwrap().field_name, "ReturnReason");
    }

    #[test]
    fn test_lowercase_return_reason_rejected() {
        let mut rd = sample();
        rd.return_reason = "a".to_string();
        let err = rd.validate().unwrap_err();
        assert_eq!(err.field_error().unwrap().field_name, "ReturnReason");
    }

    #[test]
    fn test_addendum_accessors() {
        let mut rd = sample();
        rd.add_return_detail_addendum_d(ReturnDetailAddendumD::default());
        assert_eq!(rd.return_detail_addenda_d().len(), 1);
    }
}
