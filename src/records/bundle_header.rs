//! Bundle header record (type "20").
//!
//! Opens a bundle, the sub-batch inside a cash letter. All items in a bundle
//! are of one kind: forward check details or return details.

use crate::encoding::Charset;
use crate::error::Result;
use crate::fields::{self, alpha_field, date_field, Columns};
use serde::{Deserialize, Serialize};

use super::cash_letter_header::COLLECTION_TYPES;

/// Bundle header record (type "20").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BundleHeader {
    /// Collection type; normally matches the parent cash letter.
    pub collection_type_indicator: String,
    /// Routing number of the institution receiving the bundle.
    pub destination_routing_number: String,
    /// Routing number of the ECE institution creating the bundle.
    pub ece_institution_routing_number: String,
    /// Business date of the bundle, `YYYYMMDD`.
    pub bundle_business_date: String,
    /// Creation date of the bundle, `YYYYMMDD`.
    pub bundle_creation_date: String,
    /// Identifier assigned by the creating institution.
    pub bundle_id: String,
    /// Sequence number of the bundle within its cash letter.
    pub bundle_sequence_number: String,
    /// Capture cycle the bundle belongs to.
    pub cycle_number: String,
    /// Routing number returns should be directed to.
    pub return_location_routing_number: String,
    /// Owner-defined field.
    pub user_field: String,
    /// Reserved columns, normally blank.
    pub reserved: String,
}

impl BundleHeader {
    /// Create an empty bundle header.
    #[must_use]
    pub fn new() -> Self {
        BundleHeader::default()
    }

    /// Parse a bundle header from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(BundleHeader {
            collection_type_indicator: c.alpha(2, 4),
            destination_routing_number: c.alpha(4, 13),
            ece_institution_routing_number: c.alpha(13, 22),
            bundle_business_date: c.alpha(22, 30),
            bundle_creation_date: c.alpha(30, 38),
            bundle_id: c.alpha(38, 48),
            bundle_sequence_number: c.alpha(48, 52),
            cycle_number: c.alpha(52, 54),
            return_location_routing_number: c.alpha(54, 63),
            user_field: c.alpha(63, 68),
            reserved: c.alpha(68, 80),
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
        fields::include_date("BundleBusinessDate", &self.bundle_business_date)?;
        fields::check_date("BundleBusinessDate", &self.bundle_business_date)?;
        fields::include_date("BundleCreationDate", &self.bundle_creation_date)?;
        fields::check_date("BundleCreationDate", &self.bundle_creation_date)?;
        fields::check_alphanumeric("BundleID", &self.bundle_id, charset)?;
        fields::check_numeric_str("BundleSequenceNumber", &self.bundle_sequence_number)?;
        fields::check_alphanumeric("CycleNumber", &self.cycle_number, charset)?;
        fields::check_routing(
            "ReturnLocationRoutingNumber",
            &self.return_location_routing_number,
        )?;
        fields::check_alphanumeric("UserField", &self.user_field, charset)?;
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("20");
        out.push_str(&alpha_field(&self.collection_type_indicator, 2));
        out.push_str(&alpha_field(&self.destination_routing_number, 9));
        out.push_str(&alpha_field(&self.ece_institution_routing_number, 9));
        out.push_str(&date_field(&self.bundle_business_date));
        out.push_str(&date_field(&self.bundle_creation_date));
        out.push_str(&alpha_field(&self.bundle_id, 10));
        out.push_str(&alpha_field(&self.bundle_sequence_number, 4));
        out.push_str(&alpha_field(&self.cycle_number, 2));
        out.push_str(&alpha_field(&self.return_location_routing_number, 9));
        out.push_str(&alpha_field(&self.user_field, 5));
        out.push_str(&alpha_field(&self.reserved, 12));
        out
    }
}
