//! Cash letter header record (type "10").
//!
//! Opens a cash letter: the unit of exchange between an ECE institution and
//! the destination institution. Carries the collection type, both routing
//! numbers, business and creation dates, and the cash letter identifier that
//! control records and diagnostics refer back to.

use crate::encoding::Charset;
use crate::error::Result;
use crate::fields::{self, alpha_field, date_field, time_field, Columns};
use serde::{Deserialize, Serialize};

/// Collection type codes accepted on cash letter and bundle headers.
pub(crate) const COLLECTION_TYPES: &[&str] = &[
    "00", "01", "02", "03", "04", "05", "06", "10", "20", "99",
];

/// Cash letter header record (type "10").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CashLetterHeader {
    /// Collection type ("01" forward presentment, "03" return, …).
    pub collection_type_indicator: String,
    /// Routing number of the institution receiving the cash letter.
    pub destination_routing_number: String,
    /// Routing number of the ECE institution creating the cash letter.
    pub ece_institution_routing_number: String,
    /// Business date of the cash letter, `YYYYMMDD`.
    pub cash_letter_business_date: String,
    /// Creation date of the cash letter, `YYYYMMDD`.
    pub cash_letter_creation_date: String,
    /// Creation time of the cash letter, `HHMM`.
    pub cash_letter_creation_time: String,
    /// "I" when the cash letter carries images, "E" when electronic only,
    /// "F" for fields only.
    pub record_type_indicator: String,
    /// Documentation type carried by items in this cash letter.
    pub documentation_type_indicator: String,
    /// Identifier assigned by the creating institution.
    pub cash_letter_id: String,
    /// Contact name at the originator.
    pub originator_contact_name: String,
    /// Contact phone number at the originator.
    pub originator_contact_phone_number: String,
    /// Federal Reserve work type.
    pub fed_work_type: String,
    /// "R" when the cash letter carries returns.
    pub returns_indicator: String,
    /// Owner-defined field.
    pub user_field: String,
}

impl CashLetterHeader {
    /// Create an empty cash letter header.
    #[must_use]
    pub fn new() -> Self {
        CashLetterHeader::default()
    }

    /// Parse a cash letter header from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(CashLetterHeader {
            collection_type_indicator: c.alpha(2, 4),
            destination_routing_number: c.alpha(4, 13),
            ece_institution_routing_number: c.alpha(13, 22),
            cash_letter_business_date: c.alpha(22, 30),
            cash_letter_creation_date: c.alpha(30, 38),
            cash_letter_creation_time: c.alpha(38, 42),
            record_type_indicator: c.alpha(42, 43),
            documentation_type_indicator: c.alpha(43, 44),
            cash_letter_id: c.alpha(44, 52),
            originator_contact_name: c.alpha(52, 66),
            originator_contact_phone_number: c.alpha(66, 76),
            fed_work_type: c.alpha(76, 77),
            returns_indicator: c.alpha(77, 78),
            user_field: c.alpha(78, 80),
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
        fields::include_str("CollectionTypeIndicator", &self.collection_type_indicator)?;
        fields::check_enum(
            "CollectionTypeIndicator",
            &self.collection_type_indicator,
            COLLECTION_TYPES,
        )?;
        fields::include_routing("DestinationRoutingNumber", &self.destination_routing_number)?;
        fields::check_routing("DestinationRoutingNumber", &self.destination_routing_number)?;
        fields::include_routing(
            "EceInstitutionRoutingNumber",
            &self.ece_institution_routing_number,
        )?;
        fields::check_routing(
            "EceInstitutionRoutingNumber",
            &self.ece_institution_routing_number,
        )?;
        fields::include_date("CashLetterBusinessDate", &self.cash_letter_business_date)?;
        fields::check_date("CashLetterBusinessDate", &self.cash_letter_business_date)?;
        fields::include_date("CashLetterCreationDate", &self.cash_letter_creation_date)?;
        fields::check_date("CashLetterCreationDate", &self.cash_letter_creation_date)?;
        fields::include_str("CashLetterCreationTime", &self.cash_letter_creation_time)?;
        fields::check_time("CashLetterCreationTime", &self.cash_letter_creation_time)?;
        fields::include_str("RecordTypeIndicator", &self.record_type_indicator)?;
        fields::check_enum(
            "RecordTypeIndicator",
            &self.record_type_indicator,
            &["E", "I", "F"],
        )?;
        fields::check_enum(
            "DocumentationTypeIndicator",
            &self.documentation_type_indicator,
            &[
                "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "Z",
            ],
        )?;
        fields::check_alphanumeric("CashLetterID", &self.cash_letter_id, charset)?;
        fields::check_alphanumeric(
            "OriginatorContactName",
            &self.originator_contact_name,
            charset,
        )?;
        fields::check_numeric_str(
            "OriginatorContactPhoneNumber",
            &self.originator_contact_phone_number,
        )?;
        fields::check_alphanumeric("FedWorkType", &self.fed_work_type, charset)?;
        fields::check_enum("ReturnsIndicator", &self.returns_indicator, &["E", "R", "J", "N"])?;
        fields::check_alphanumeric("UserField", &self.user_field, charset)?;
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("10");
        out.push_str(&alpha_field(&self.collection_type_indicator, 2));
        out.push_str(&alpha_field(&self.destination_routing_number, 9));
        out.push_str(&alpha_field(&self.ece_institution_routing_number, 9));
        out.push_str(&date_field(&self.cash_letter_business_date));
        out.push_str(&date_field(&self.cash_letter_creation_date));
        out.push_str(&time_field(&self.cash_letter_creation_time));
        out.push_str(&alpha_field(&self.record_type_indicator, 1));
        out.push_str(&alpha_field(&self.documentation_type_indicator, 1));
        out.push_str(&alpha_field(&self.cash_letter_id, 8));
        out.push_str(&alpha_field(&self.originator_contact_name, 14));
        out.push_str(&alpha_field(&self.originator_contact_phone_number, 10));
        out.push_str(&alpha_field(&self.fed_work_type, 1));
        out.push_str(&alpha_field(&self.returns_indicator, 1));
        out.push_str(&alpha_field(&self.user_field, 2));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MSG_FIELD_INCLUSION;

    fn sample() -> CashLetterHeader {
        CashLetterHeader {
            collection_type_indicator: "01".to_string(),
            destination_routing_number: "231380104".to_string(),
            ece_institution_routing_number: "121042882".to_string(),
            cash_letter_business_date: "20180905".to_string(),
            cash_letter_creation_date: "20180905".to_string(),
            cash_letter_creation_time: "1523".to_string(),
            record_type_indicator: "I".to_string(),
            documentation_type_indicator: "G".to_string(),
            cash_letter_id: "A1".to_string(),
            originator_contact_name: "Contact Name".to_string(),
            originator_contact_phone_number: "5558675552".to_string(),
            fed_work_type: String::new(),
            returns_indicator: String::new(),
            user_field: String::new(),
        }
    }

    #[test]
    fn test_cash_letter_header_roundtrip() {
        let line = sample().to_line();
        assert_eq!(line.chars().count(), 80);
        let parsed = CashLetterHeader::from_line(&line).unwrap();
        assert_eq!(parsed, sample());
        assert_eq!(parsed.to_line(), line);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_missing_destination_routing() {
        let mut clh = sample();
        clh.destination_routing_number = String::new();
        let err = clh.validate().unwrap_err();
        let fe = err.field_error().expect("field error");
        assert_eq!(fe.field_name, "DestinationRoutingNumber");
        assert!(fe.msg.contains(MSG_FIELD_INCLUSION));
    }

    #[test]
    fn test_zero_routing_is_inclusion_error() {
        let mut clh = sample();
        clh.ece_institution_routing_number = "000000000".to_string();
        let err = clh.validate().unwrap_err();
        let fe = err.field_error().expect("field error");
        assert_eq!(fe.field_name, "EceInstitutionRoutingNumber");
        assert!(fe.msg.contains(MSG_FIELD_INCLUSION));
    }

    #[test]
    fn test_bad_record_type_indicator() {
        let mut clh = sample();
        clh.record_type_indicator = "Q".to_string();
        let err = clh.validate().unwrap_err();
        assert_eq!(err.field_error().unwrap().field_name, "RecordTypeIndicator");
    }

    #[test]
    fn test_phone_number_must_be_numeric() {
        let mut clh = sample();
        clh.originator_contact_phone_number = "555-867-55".to_string();
        let err = clh.validate().unwrap_err();
        assert_eq!(
            err.field_error().unwrap().field_name,
            "OriginatorContactPhoneNumber"
        );
    }
}
