//! Image view records (types "50", "52", "54") and the triplet that groups
//! them.
//!
//! One check side is described by an ordered triple: an [`ImageViewDetail`]
//! with format and security metadata, an [`ImageViewData`] carrying the
//! binary image, and an optional [`ImageViewAnalysis`] with quality and
//! usability scores. The detail record always precedes its data and analysis
//! siblings on the wire.
//!
//! The image data record is the one variable-length record in the format:
//! an 80-column prefix whose last seven columns declare the byte length of
//! the binary blob that immediately follows.

use crate::encoding::Charset;
use crate::error::{FileError, IclError, Result, MSG_NON_NUMERIC};
use crate::fields::{self, alpha_field, date_field, numeric_field, Columns};
use serde::{Deserialize, Serialize};

/// Column range of the image data length within the "52" prefix.
pub(crate) const IMAGE_LENGTH_START: usize = 73;
pub(crate) const IMAGE_LENGTH_END: usize = 80;

/// One image view of a check side: detail, data, optional analysis.
///
/// The parser fills `data` and `analysis` as the matching records arrive;
/// a freshly opened view holds only its detail record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageView {
    /// The image view detail record ("50").
    pub detail: ImageViewDetail,
    /// The image view data record ("52"), once seen.
    pub data: Option<ImageViewData>,
    /// The image view analysis record ("54"), if present.
    pub analysis: Option<ImageViewAnalysis>,
}

impl ImageView {
    /// Open a view from its detail record.
    #[must_use]
    pub fn new(detail: ImageViewDetail) -> Self {
        ImageView {
            detail,
            data: None,
            analysis: None,
        }
    }
}

/// Image view detail record (type "50").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageViewDetail {
    /// Whether image data is present for this view ("0" through "3").
    pub image_indicator: String,
    /// Routing number of the institution that created the image.
    pub image_creator_routing_number: String,
    /// Date the image was created, `YYYYMMDD`.
    pub image_creator_date: String,
    /// Image format ("00" TIFF 6, "01" IOCA FS 11, …).
    pub image_view_format_indicator: String,
    /// Compression algorithm ("00" Group 4, "01" JPEG, "02" ABIC, …).
    pub image_view_compression_algorithm: String,
    /// Declared size of the image data, in bytes.
    pub image_view_data_size: u64,
    /// Which side of the check this view shows ("0" front, "1" back).
    pub view_side_indicator: String,
    /// What the view depicts ("00" full view, "01" partial, …).
    pub view_descriptor: String,
    /// Whether a digital signature covers the image ("0", "1").
    pub digital_signature_indicator: String,
    /// Digital signature method, when one is present.
    pub digital_signature_method: String,
    /// Security key size in bytes.
    pub security_key_size: u64,
    /// Offset of protected data within the image.
    pub protected_data_start: u64,
    /// Length of protected data within the image.
    pub protected_data_length: u64,
    /// Whether the image can be recreated from archive ("0", "1").
    pub image_recreate_indicator: String,
    /// Owner-defined field.
    pub user_field: String,
    /// Override indicator for image condition.
    pub override_indicator: String,
    /// Reserved columns, normally blank.
    pub reserved: String,
}

impl ImageViewDetail {
    /// Parse from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(ImageViewDetail {
            image_indicator: c.alpha(2, 3),
            image_creator_routing_number: c.alpha(3, 12),
            image_creator_date: c.alpha(12, 20),
            image_view_format_indicator: c.alpha(20, 22),
            image_view_compression_algorithm: c.alpha(22, 24),
            image_view_data_size: c.number(24, 31),
            view_side_indicator: c.alpha(31, 32),
            view_descriptor: c.alpha(32, 34),
            digital_signature_indicator: c.alpha(34, 35),
            digital_signature_method: c.alpha(35, 37),
            security_key_size: c.number(37, 42),
            protected_data_start: c.number(42, 49),
            protected_data_length: c.number(49, 56),
            image_recreate_indicator: c.alpha(56, 57),
            user_field: c.alpha(57, 65),
            override_indicator: c.alpha(65, 66),
            reserved: c.alpha(66, 80),
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
        fields::include_str("ImageIndicator", &self.image_indicator)?;
        fields::check_enum("ImageIndicator", &self.image_indicator, &["0", "1", "2", "3"])?;
        fields::include_routing(
            "ImageCreatorRoutingNumber",
            &self.image_creator_routing_number,
        )?;
        fields::check_routing(
            "ImageCreatorRoutingNumber",
            &self.image_creator_routing_number,
        )?;
        fields::include_date("ImageCreatorDate", &self.image_creator_date)?;
        fields::check_date("ImageCreatorDate", &self.image_creator_date)?;
        fields::check_numeric_str(
            "ImageViewFormatIndicator",
            &self.image_view_format_indicator,
        )?;
        fields::check_numeric_str(
            "ImageViewCompressionAlgorithm",
            &self.image_view_compression_algorithm,
        )?;
        fields::check_enum("ViewSideIndicator", &self.view_side_indicator, &["0", "1"])?;
        fields::include_str("ViewDescriptor", &self.view_descriptor)?;
        fields::check_numeric_str("ViewDescriptor", &self.view_descriptor)?;
        fields::check_enum(
            "DigitalSignatureIndicator",
            &self.digital_signature_indicator,
            &["0", "1"],
        )?;
        fields::check_numeric_str("DigitalSignatureMethod", &self.digital_signature_method)?;
        fields::check_enum(
            "ImageRecreateIndicator",
            &self.image_recreate_indicator,
            &["0", "1"],
        )?;
        fields::check_alphanumeric("UserField", &self.user_field, charset)?;
        fields::check_alphanumeric("OverrideIndicator", &self.override_indicator, charset)?;
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("50");
        out.push_str(&alpha_field(&self.image_indicator, 1));
        out.push_str(&alpha_field(&self.image_creator_routing_number, 9));
        out.push_str(&date_field(&self.image_creator_date));
        out.push_str(&alpha_field(&self.image_view_format_indicator, 2));
        out.push_str(&alpha_field(&self.image_view_compression_algorithm, 2));
        out.push_str(&numeric_field(self.image_view_data_size, 7));
        out.push_str(&alpha_field(&self.view_side_indicator, 1));
        out.push_str(&alpha_field(&self.view_descriptor, 2));
        out.push_str(&alpha_field(&self.digital_signature_indicator, 1));
        out.push_str(&alpha_field(&self.digital_signature_method, 2));
        out.push_str(&numeric_field(self.security_key_size, 5));
        out.push_str(&numeric_field(self.protected_data_start, 7));
        out.push_str(&numeric_field(self.protected_data_length, 7));
        out.push_str(&alpha_field(&self.image_recreate_indicator, 1));
        out.push_str(&alpha_field(&self.user_field, 8));
        out.push_str(&alpha_field(&self.override_indicator, 1));
        out.push_str(&alpha_field(&self.reserved, 14));
        out
    }
}

/// Image view data record (type "52"), the variable-length image carrier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageViewData {
    /// Routing number of the ECE institution.
    pub ece_institution_routing_number: String,
    /// Business date of the bundle this item travels in, `YYYYMMDD`.
    pub bundle_business_date: String,
    /// Capture cycle the item belongs to.
    pub cycle_number: String,
    /// Sequence number assigned by the ECE institution.
    pub ece_institution_item_sequence_number: String,
    /// Security originator, when the image is protected.
    pub security_originator_name: String,
    /// Corner the clipping coordinates are measured from ("0" through "4").
    pub clipping_origin: String,
    /// Horizontal clipping coordinate one.
    pub clipping_coordinate_h1: String,
    /// Horizontal clipping coordinate two.
    pub clipping_coordinate_h2: String,
    /// Vertical clipping coordinate one.
    pub clipping_coordinate_v1: String,
    /// Vertical clipping coordinate two.
    pub clipping_coordinate_v2: String,
    /// Owner-defined field.
    pub user_field: String,
    /// The binary image. Serialized length is derived from this buffer; in
    /// JSON it appears base64-encoded under the `imageData` key.
    #[serde(with = "crate::json::base64_bytes")]
    pub image_data: Vec<u8>,
}

impl ImageViewData {
    /// Parse from an 80-column prefix and the already-extracted image blob.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the prefix is not 80 columns.
    pub fn from_prefix(prefix: &str, image_data: Vec<u8>) -> Result<Self> {
        let c = Columns::fixed(prefix)?;
        Ok(ImageViewData {
            ece_institution_routing_number: c.alpha(2, 11),
            bundle_business_date: c.alpha(11, 19),
            cycle_number: c.alpha(19, 21),
            ece_institution_item_sequence_number: c.alpha(21, 36),
            security_originator_name: c.alpha(36, 52),
            clipping_origin: c.alpha(52, 53),
            clipping_coordinate_h1: c.alpha(53, 57),
            clipping_coordinate_h2: c.alpha(57, 61),
            clipping_coordinate_v1: c.alpha(61, 65),
            clipping_coordinate_v2: c.alpha(65, 69),
            user_field: c.alpha(69, 73),
            image_data,
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
        fields::check_alphanumeric("CycleNumber", &self.cycle_number, charset)?;
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
            "SecurityOriginatorName",
            &self.security_originator_name,
            charset,
        )?;
        fields::check_enum(
            "ClippingOrigin",
            &self.clipping_origin,
            &["0", "1", "2", "3", "4"],
        )?;
        fields::check_numeric_str("ClippingCoordinateH1", &self.clipping_coordinate_h1)?;
        fields::check_numeric_str("ClippingCoordinateH2", &self.clipping_coordinate_h2)?;
        fields::check_numeric_str("ClippingCoordinateV1", &self.clipping_coordinate_v1)?;
        fields::check_numeric_str("ClippingCoordinateV2", &self.clipping_coordinate_v2)?;
        fields::check_alphanumeric("UserField", &self.user_field, charset)?;
        Ok(())
    }

    /// Serialize the 80-column prefix; the image length columns are derived
    /// from the current `image_data` buffer.
    #[must_use]
    pub fn to_line_prefix(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("52");
        out.push_str(&alpha_field(&self.ece_institution_routing_number, 9));
        out.push_str(&date_field(&self.bundle_business_date));
        out.push_str(&alpha_field(&self.cycle_number, 2));
        out.push_str(&alpha_field(&self.ece_institution_item_sequence_number, 15));
        out.push_str(&alpha_field(&self.security_originator_name, 16));
        out.push_str(&alpha_field(&self.clipping_origin, 1));
        out.push_str(&alpha_field(&self.clipping_coordinate_h1, 4));
        out.push_str(&alpha_field(&self.clipping_coordinate_h2, 4));
        out.push_str(&alpha_field(&self.clipping_coordinate_v1, 4));
        out.push_str(&alpha_field(&self.clipping_coordinate_v2, 4));
        out.push_str(&alpha_field(&self.user_field, 4));
        out.push_str(&numeric_field(self.image_data.len() as u64, 7));
        out
    }

    /// Serialize the full record: prefix plus raw image bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.to_line_prefix().into_bytes();
        out.extend_from_slice(&self.image_data);
        out
    }
}

/// Extract the declared image byte length from a raw "52" prefix.
///
/// Used by the lexer to know how many opaque bytes follow the prefix.
pub(crate) fn image_data_length(prefix: &[u8]) -> Result<usize> {
    let window = prefix
        .get(IMAGE_LENGTH_START..IMAGE_LENGTH_END)
        .ok_or_else(|| {
            IclError::from(FileError::new(
                "RecordLength",
                prefix.len(),
                crate::error::MSG_RECORD_LENGTH,
            ))
        })?;
    let mut length = 0usize;
    for &b in window {
        if !b.is_ascii_digit() {
            return Err(FileError::new(
                "ImageDataLength",
                String::from_utf8_lossy(window),
                MSG_NON_NUMERIC,
            )
            .into());
        }
        length = length * 10 + usize::from(b - b'0');
    }
    Ok(length)
}

/// Image view analysis record (type "54"): quality and usability scores.
///
/// Every score is a single digit: 0 undetermined, 1 the condition is
/// present/usable, 2 it is not.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageViewAnalysis {
    /// Overall image quality.
    pub global_image_quality: u32,
    /// Overall image usability.
    pub global_image_usability: u32,
    /// Whether the image is out of focus.
    pub image_out_of_focus: u32,
    /// Whether horizontal streaks are present.
    pub horizontal_streaks_present: u32,
    /// Whether the image is smaller than the minimum size.
    pub below_minimum_image_size: u32,
    /// Whether the image exceeds the maximum size.
    pub exceeds_maximum_image_size: u32,
    /// Reserved columns, normally blank.
    pub reserved: String,
    /// Usability of the signature area.
    pub signature_usability: u32,
    /// Usability of the payor bank routing number area.
    pub payor_bank_routing_number_usability: u32,
    /// Usability of the routing check digit area.
    pub payor_bank_check_digit_usability: u32,
    /// Usability of the on-us area.
    pub on_us_usability: u32,
    /// Usability of the auxiliary on-us area.
    pub auxiliary_on_us_usability: u32,
    /// Usability of the external processing code area.
    pub external_processing_code_usability: u32,
    /// Usability of the written amount area.
    pub written_amount_usability: u32,
    /// Usability of the numeric amount area.
    pub numeric_amount_usability: u32,
    /// Usability of the payor name and address area.
    pub payor_name_address_usability: u32,
    /// Usability of the date area.
    pub date_usability: u32,
    /// Usability of the payee area.
    pub payee_usability: u32,
    /// Usability of the memo line area.
    pub memo_line_usability: u32,
    /// Usability of the payor bank name area.
    pub payor_bank_name_usability: u32,
    /// Usability of the payee endorsement area.
    pub payee_endorsement_usability: u32,
    /// Usability of the BOFD endorsement area.
    pub bofd_endorsement_usability: u32,
    /// Usability of the transit endorsement area.
    pub transit_endorsement_usability: u32,
    /// Owner-defined field.
    pub user_field: String,
    /// Reserved columns, normally blank.
    pub reserved_two: String,
}

impl ImageViewAnalysis {
    /// Parse from one 80-column record.
    ///
    /// # Errors
    ///
    /// Returns a `RecordLength` error when the record is not 80 columns.
    pub fn from_line(record: &str) -> Result<Self> {
        let c = Columns::fixed(record)?;
        Ok(ImageViewAnalysis {
            global_image_quality: c.number(2, 3) as u32,
            global_image_usability: c.number(3, 4) as u32,
            image_out_of_focus: c.number(4, 5) as u32,
            horizontal_streaks_present: c.number(5, 6) as u32,
            below_minimum_image_size: c.number(6, 7) as u32,
            exceeds_maximum_image_size: c.number(7, 8) as u32,
            reserved: c.alpha(8, 21),
            signature_usability: c.number(21, 22) as u32,
            payor_bank_routing_number_usability: c.number(22, 23) as u32,
            payor_bank_check_digit_usability: c.number(23, 24) as u32,
            on_us_usability: c.number(24, 25) as u32,
            auxiliary_on_us_usability: c.number(25, 26) as u32,
            external_processing_code_usability: c.number(26, 27) as u32,
            written_amount_usability: c.number(27, 28) as u32,
            numeric_amount_usability: c.number(28, 29) as u32,
            payor_name_address_usability: c.number(29, 30) as u32,
            date_usability: c.number(30, 31) as u32,
            payee_usability: c.number(31, 32) as u32,
            memo_line_usability: c.number(32, 33) as u32,
            payor_bank_name_usability: c.number(33, 34) as u32,
            payee_endorsement_usability: c.number(34, 35) as u32,
            bofd_endorsement_usability: c.number(35, 36) as u32,
            transit_endorsement_usability: c.number(36, 37) as u32,
            user_field: c.alpha(37, 57),
            reserved_two: c.alpha(57, 80),
        })
    }

    /// Validate field contents.
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
        fields::check_enum_number("GlobalImageQuality", u64::from(self.global_image_quality), 2)?;
        fields::check_enum_number(
            "GlobalImageUsability",
            u64::from(self.global_image_usability),
            2,
        )?;
        fields::check_enum_number("ImageOutOfFocus", u64::from(self.image_out_of_focus), 2)?;
        fields::check_enum_number(
            "HorizontalStreaksPresent",
            u64::from(self.horizontal_streaks_present),
            2,
        )?;
        fields::check_enum_number(
            "BelowMinimumImageSize",
            u64::from(self.below_minimum_image_size),
            2,
        )?;
        fields::check_enum_number(
            "ExceedsMaximumImageSize",
            u64::from(self.exceeds_maximum_image_size),
            2,
        )?;
        for (name, value) in [
            ("SignatureUsability", self.signature_usability),
            (
                "PayorBankRoutingNumberUsability",
                self.payor_bank_routing_number_usability,
            ),
            (
                "PayorBankCheckDigitUsability",
                self.payor_bank_check_digit_usability,
            ),
            ("OnUsUsability", self.on_us_usability),
            ("AuxiliaryOnUsUsability", self.auxiliary_on_us_usability),
            (
                "ExternalProcessingCodeUsability",
                self.external_processing_code_usability,
            ),
            ("WrittenAmountUsability", self.written_amount_usability),
            ("NumericAmountUsability", self.numeric_amount_usability),
            ("PayorNameAddressUsability", self.payor_name_address_usability),
            ("DateUsability", self.date_usability),
            ("PayeeUsability", self.payee_usability),
            ("MemoLineUsability", self.memo_line_usability),
            ("PayorBankNameUsability", self.payor_bank_name_usability),
            ("PayeeEndorsementUsability", self.payee_endorsement_usability),
            ("BOFDEndorsementUsability", self.bofd_endorsement_usability),
            (
                "TransitEndorsementUsability",
                self.transit_endorsement_usability,
            ),
        ] {
            fields::check_enum_number(name, u64::from(value), 2)?;
        }
        fields::check_alphanumeric("UserField", &self.user_field, charset)?;
        Ok(())
    }

    /// Serialize to one 80-column record.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(80);
        out.push_str("54");
        out.push_str(&numeric_field(u64::from(self.global_image_quality), 1));
        out.push_str(&numeric_field(u64::from(self.global_image_usability), 1));
        out.push_str(&numeric_field(u64::from(self.image_out_of_focus), 1));
        out.push_str(&numeric_field(u64::from(self.horizontal_streaks_present), 1));
        out.push_str(&numeric_field(u64::from(self.below_minimum_image_size), 1));
        out.push_str(&numeric_field(u64::from(self.exceeds_maximum_image_size), 1));
        out.push_str(&alpha_field(&self.reserved, 13));
        out.push_str(&numeric_field(u64::from(self.signature_usability), 1));
        out.push_str(&numeric_field(
            u64::from(self.payor_bank_routing_number_usability),
            1,
        ));
        out.push_str(&numeric_field(
            u64::from(self.payor_bank_check_digit_usability),
            1,
        ));
        out.push_str(&numeric_field(u64::from(self.on_us_usability), 1));
        out.push_str(&numeric_field(u64::from(self.auxiliary_on_us_usability), 1));
        out.push_str(&numeric_field(
            u64::from(self.external_processing_code_usability),
            1,
        ));
        out.push_str(&numeric_field(u64::from(self.written_amount_usability), 1));
        out.push_str(&numeric_field(u64::from(self.numeric_amount_usability), 1));
        out.push_str(&numeric_field(
            u64::from(self.payor_name_address_usability),
            1,
        ));
        out.push_str(&numeric_field(u64::from(self.date_usability), 1));
        out.push_str(&numeric_field(u64::from(self.payee_usability), 1));
        out.push_str(&numeric_field(u64::from(self.memo_line_usability), 1));
        out.push_str(&numeric_field(u64::from(self.payor_bank_name_usability), 1));
        out.push_str(&numeric_field(
            u64::from(self.payee_endorsement_usability),
            1,
        ));
        out.push_str(&numeric_field(u64::from(self.bofd_endorsement_usability), 1));
        out.push_str(&numeric_field(
            u64::from(self.transit_endorsement_usability),
            1,
        ));
        out.push_str(&alpha_field(&self.user_field, 20));
        out.push_str(&alpha_field(&self.reserved_two, 23));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MSG_FIELD_INCLUSION, MSG_INVALID_ENUM};

    fn sample_detail() -> ImageViewDetail {
        ImageViewDetail {
            image_indicator: "1".to_string(),
            image_creator_routing_number: "031300012".to_string(),
            image_creator_date: "20180905".to_string(),
            image_view_format_indicator: "00".to_string(),
            image_view_compression_algorithm: "00".to_string(),
            image_view_data_size: 0,
            view_side_indicator: "0".to_string(),
            view_descriptor: "00".to_string(),
            digital_signature_indicator: "0".to_string(),
            ..ImageViewDetail::default()
        }
    }

    #[test]
    fn test_detail_roundtrip() {
        let line = sample_detail().to_line();
        assert_eq!(line.chars().count(), 80);
        let parsed = ImageViewDetail::from_line(&line).unwrap();
        assert_eq!(parsed, sample_detail());
        assert_eq!(parsed.to_line(), line);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_detail_missing_view_descriptor() {
        let mut d = sample_detail();
        d.view_descriptor = String::new();
        let err = d.validate().unwrap_err();
        let fe = err.field_error().expect("field error");
        assert_eq!(fe.field_name, "ViewDescriptor");
        assert!(fe.msg.contains(MSG_FIELD_INCLUSION));
    }

    fn sample_data() -> ImageViewData {
        ImageViewData {
            ece_institution_routing_number: "121042882".to_string(),
            bundle_business_date: "20180905".to_string(),
            cycle_number: "01".to_string(),
            ece_institution_item_sequence_number: "1".to_string(),
            image_data: b"hello, world".to_vec(),
            ..ImageViewData::default()
        }
    }

    #[test]
    fn test_data_prefix_declares_blob_length() {
        let data = sample_data();
        let prefix = data.to_line_prefix();
        assert_eq!(prefix.chars().count(), 80);
        assert_eq!(&prefix[IMAGE_LENGTH_START..IMAGE_LENGTH_END], "0000012");
        let declared = image_data_length(prefix.as_bytes()).unwrap();
        assert_eq!(declared, 12);
    }

    #[test]
    fn test_data_roundtrip() {
        let data = sample_data();
        let bytes = data.to_bytes();
        assert_eq!(bytes.len(), 92);
        let prefix = String::from_utf8(bytes[..80].to_vec()).unwrap();
        let parsed = ImageViewData::from_prefix(&prefix, bytes[80..].to_vec()).unwrap();
        assert_eq!(parsed, data);
        assert_eq!(parsed.to_bytes(), bytes);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_data_zero_routing_is_inclusion() {
        let mut data = sample_data();
        data.ece_institution_routing_number = "000000000".to_string();
        let err = data.validate().unwrap_err();
        let fe = err.field_error().expect("field error");
        assert_eq!(fe.field_name, "EceInstitutionRoutingNumber");
        assert!(fe.msg.contains(MSG_FIELD_INCLUSION));
    }

    #[test]
    fn test_garbage_length_rejected() {
        let mut prefix = sample_data().to_line_prefix().into_bytes();
        prefix[75] = b'X';
        let err = image_data_length(&prefix).unwrap_err();
        assert_eq!(err.file_error().unwrap().field_name, "ImageDataLength");
    }

    #[test]
    fn test_analysis_roundtrip() {
        let a = ImageViewAnalysis {
            global_image_quality: 2,
            global_image_usability: 2,
            image_out_of_focus: 1,
            ..ImageViewAnalysis::default()
        };
        let line = a.to_line();
        assert_eq!(line.chars().count(), 80);
        let parsed = ImageViewAnalysis::from_line(&line).unwrap();
        assert_eq!(parsed, a);
        assert_eq!(parsed.to_line(), line);
        parsed.validate().unwrap();
    }

    #[test]
    fn test_analysis_quality_out_of_range() {
        let a = ImageViewAnalysis {
            global_image_quality: 9,
            ..ImageViewAnalysis::default()
        };
        let err = a.validate().unwrap_err();
        let fe = err.field_error().expect("field error");
        assert_eq!(fe.field_name, "GlobalImageQuality");
        assert!(fe.msg.contains(MSG_INVALID_ENUM));
    }
}
