//! Mock record and file builders shared by the integration suites.
//!
//! Every mock validates cleanly on its own; tests mutate single fields to
//! provoke specific errors.

#![allow(dead_code)]

use cashletter::{
    Bundle, BundleHeader, CashLetter, CashLetterHeader, CheckDetail, CheckDetailAddendumA,
    CreditItem, File, FileHeader, ImageView, ImageViewAnalysis, ImageViewData, ImageViewDetail,
    ReturnDetail, ReturnDetailAddendumA, Writer,
};

pub fn mock_file_header() -> FileHeader {
    FileHeader {
        standard_level: "35".to_string(),
        test_file_indicator: "T".to_string(),
        immediate_destination: "231380104".to_string(),
        immediate_origin: "121042882".to_string(),
        file_creation_date: "20180905".to_string(),
        file_creation_time: "1523".to_string(),
        resend_indicator: "N".to_string(),
        immediate_destination_name: "Citadel".to_string(),
        immediate_origin_name: "Wells Fargo".to_string(),
        country_code: "US".to_string(),
        ..FileHeader::default()
    }
}

pub fn mock_cash_letter_header() -> CashLetterHeader {
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
        ..CashLetterHeader::default()
    }
}

pub fn mock_bundle_header() -> BundleHeader {
    BundleHeader {
        collection_type_indicator: "01".to_string(),
        destination_routing_number: "231380104".to_string(),
        ece_institution_routing_number: "121042882".to_string(),
        bundle_business_date: "20180905".to_string(),
        bundle_creation_date: "20180905".to_string(),
        bundle_id: "9999".to_string(),
        bundle_sequence_number: "1".to_string(),
        cycle_number: "01".to_string(),
        ..BundleHeader::default()
    }
}

pub fn mock_check_detail() -> CheckDetail {
    CheckDetail {
        auxiliary_on_us: "123456789".to_string(),
        payor_bank_routing_number: "03130001".to_string(),
        payor_bank_check_digit: "2".to_string(),
        on_us: "5558881".to_string(),
        item_amount: 100_000,
        ece_institution_item_sequence_number: "1".to_string(),
        documentation_type_indicator: "G".to_string(),
        micr_valid_indicator: "1".to_string(),
        bofd_indicator: "Y".to_string(),
        correction_indicator: "0".to_string(),
        ..CheckDetail::default()
    }
}

pub fn mock_check_detail_addendum_a() -> CheckDetailAddendumA {
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

pub fn mock_return_detail() -> ReturnDetail {
    ReturnDetail {
        payor_bank_routing_number: "03130001".to_string(),
        payor_bank_check_digit: "2".to_string(),
        on_us: "5558881".to_string(),
        item_amount: 100_000,
        return_reason: "A".to_string(),
        forward_bundle_business_date: "20180905".to_string(),
        ece_institution_item_sequence_number: "1".to_string(),
        times_returned: "0".to_string(),
        ..ReturnDetail::default()
    }
}

pub fn mock_return_detail_addendum_a() -> ReturnDetailAddendumA {
    ReturnDetailAddendumA {
        record_number: 1,
        return_location_routing_number: "121042882".to_string(),
        bofd_endorsement_date: "20180905".to_string(),
        bofd_item_sequence_number: "1".to_string(),
        truncation_indicator: "Y".to_string(),
        ..ReturnDetailAddendumA::default()
    }
}

pub fn mock_image_view_detail() -> ImageViewDetail {
    ImageViewDetail {
        image_indicator: "1".to_string(),
        image_creator_routing_number: "031300012".to_string(),
        image_creator_date: "20180905".to_string(),
        image_view_format_indicator: "00".to_string(),
        image_view_compression_algorithm: "00".to_string(),
        view_side_indicator: "0".to_string(),
        view_descriptor: "00".to_string(),
        digital_signature_indicator: "0".to_string(),
        ..ImageViewDetail::default()
    }
}

pub fn mock_image_view_data(payload: &[u8]) -> ImageViewData {
    ImageViewData {
        ece_institution_routing_number: "121042882".to_string(),
        bundle_business_date: "20180905".to_string(),
        cycle_number: "01".to_string(),
        ece_institution_item_sequence_number: "1".to_string(),
        image_data: payload.to_vec(),
        ..ImageViewData::default()
    }
}

pub fn mock_image_view_analysis() -> ImageViewAnalysis {
    ImageViewAnalysis {
        global_image_quality: 2,
        global_image_usability: 2,
        image_out_of_focus: 1,
        ..ImageViewAnalysis::default()
    }
}

pub fn mock_credit_item() -> CreditItem {
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

/// A complete forward-presentment file: one cash letter, one bundle, one
/// check with an addendum A and a full image view triplet.
pub fn mock_check_file(payload: &[u8]) -> File {
    let mut check = mock_check_detail();
    check.add_check_detail_addendum_a(mock_check_detail_addendum_a());
    check.addendum_count = 1;
    let mut view = ImageView::new(mock_image_view_detail());
    view.data = Some(mock_image_view_data(payload));
    view.analysis = Some(mock_image_view_analysis());
    check.add_image_view(view);
    check.image_view_count = 1;

    let mut bundle = Bundle::new(mock_bundle_header());
    bundle.add_check_detail(check);

    let mut cash_letter = CashLetter::new(mock_cash_letter_header());
    cash_letter.add_bundle(bundle);

    let mut file = File::new(mock_file_header());
    file.add_cash_letter(cash_letter);
    file.recompute_controls();
    file
}

/// A returns file: one cash letter, one bundle, one return detail with an
/// addendum A.
pub fn mock_return_file() -> File {
    let mut ret = mock_return_detail();
    ret.add_return_detail_addendum_a(mock_return_detail_addendum_a());
    ret.addendum_count = 1;

    let mut header = mock_bundle_header();
    header.collection_type_indicator = "03".to_string();
    let mut bundle = Bundle::new(header);
    bundle.add_return_detail(ret);

    let mut cl_header = mock_cash_letter_header();
    cl_header.collection_type_indicator = "03".to_string();
    cl_header.returns_indicator = "R".to_string();
    let mut cash_letter = CashLetter::new(cl_header);
    cash_letter.add_bundle(bundle);

    let mut file = File::new(mock_file_header());
    file.add_cash_letter(cash_letter);
    file.recompute_controls();
    file
}

/// Serialize a file to bytes with default options.
pub fn write_bytes(file: &File) -> Vec<u8> {
    let mut buffer = Vec::new();
    Writer::new(&mut buffer).write(file).unwrap();
    buffer
}
