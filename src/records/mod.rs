//! Per-record-type data structures for the X9.100-187 record set.
//!
//! Every record module follows the same shape: a struct whose fields mirror
//! the published field table, a `from_line` constructor that windows the
//! 80-column record, a `validate` (and `validate_with` for a relaxed
//! [`Charset`](crate::Charset)) that reports the left-most field violation,
//! and a `to_line` that re-serializes at the same column offsets. For
//! well-formed input, `to_line(from_line(x)) == x`.
//!
//! The image data record ("52") is the one variable-length type: its
//! 80-column prefix declares the byte length of the binary blob that follows.

pub mod bundle_control;
pub mod bundle_header;
pub mod cash_letter_control;
pub mod cash_letter_header;
pub mod check_detail;
pub mod check_detail_addendum;
pub mod credit_item;
pub mod file_control;
pub mod file_header;
pub mod image_view;
pub mod return_detail;
pub mod return_detail_addendum;

pub use bundle_control::BundleControl;
pub use bundle_header::BundleHeader;
pub use cash_letter_control::CashLetterControl;
pub use cash_letter_header::CashLetterHeader;
pub use check_detail::CheckDetail;
pub use check_detail_addendum::{CheckDetailAddendumA, CheckDetailAddendumB, CheckDetailAddendumC};
pub use credit_item::CreditItem;
pub use file_control::FileControl;
pub use file_header::FileHeader;
pub use image_view::{ImageView, ImageViewAnalysis, ImageViewData, ImageViewDetail};
pub use return_detail::ReturnDetail;
pub use return_detail_addendum::{
    ReturnDetailAddendumA, ReturnDetailAddendumB, ReturnDetailAddendumC, ReturnDetailAddendumD,
};

/// Two-digit record type codes.
pub mod codes {
    /// File header record.
    pub const FILE_HEADER: &str = "01";
    /// Cash letter header record.
    pub const CASH_LETTER_HEADER: &str = "10";
    /// Bundle header record.
    pub const BUNDLE_HEADER: &str = "20";
    /// Check detail record.
    pub const CHECK_DETAIL: &str = "25";
    /// Check detail addendum A record.
    pub const CHECK_DETAIL_ADDENDUM_A: &str = "26";
    /// Check detail addendum B record.
    pub const CHECK_DETAIL_ADDENDUM_B: &str = "27";
    /// Check detail addendum C record.
    pub const CHECK_DETAIL_ADDENDUM_C: &str = "28";
    /// Return detail record.
    pub const RETURN_DETAIL: &str = "31";
    /// Return detail addendum A record.
    pub const RETURN_DETAIL_ADDENDUM_A: &str = "32";
    /// Return detail addendum B record.
    pub const RETURN_DETAIL_ADDENDUM_B: &str = "33";
    /// Return detail addendum C record.
    pub const RETURN_DETAIL_ADDENDUM_C: &str = "34";
    /// Return detail addendum D record.
    pub const RETURN_DETAIL_ADDENDUM_D: &str = "35";
    /// Image view detail record.
    pub const IMAGE_VIEW_DETAIL: &str = "50";
    /// Image view data record (variable length).
    pub const IMAGE_VIEW_DATA: &str = "52";
    /// Image view analysis record.
    pub const IMAGE_VIEW_ANALYSIS: &str = "54";
    /// Credit item record.
    pub const CREDIT_ITEM: &str = "61";
    /// Bundle control record.
    pub const BUNDLE_CONTROL: &str = "70";
    /// Cash letter control record.
    pub const CASH_LETTER_CONTROL: &str = "90";
    /// File control record.
    pub const FILE_CONTROL: &str = "99";

    /// Whether a two-digit prefix names a known record type.
    #[must_use]
    pub fn is_known(code: &str) -> bool {
        matches!(
            code,
            FILE_HEADER
                | CASH_LETTER_HEADER
                | BUNDLE_HEADER
                | CHECK_DETAIL
                | CHECK_DETAIL_ADDENDUM_A
                | CHECK_DETAIL_ADDENDUM_B
                | CHECK_DETAIL_ADDENDUM_C
                | RETURN_DETAIL
                | RETURN_DETAIL_ADDENDUM_A
                | RETURN_DETAIL_ADDENDUM_B
                | RETURN_DETAIL_ADDENDUM_C
                | RETURN_DETAIL_ADDENDUM_D
                | IMAGE_VIEW_DETAIL
                | IMAGE_VIEW_DATA
                | IMAGE_VIEW_ANALYSIS
                | CREDIT_ITEM
                | BUNDLE_CONTROL
                | CASH_LETTER_CONTROL
                | FILE_CONTROL
        )
    }
}
