//! The ICL document tree: [`File`], [`CashLetter`], and [`Bundle`].
//!
//! A file owns exactly one header and one control record plus an ordered
//! sequence of cash letters; a cash letter owns its credit items and
//! bundles; a bundle owns check details *or* return details, never both.
//! Detail records own their addenda and image views, so the whole document
//! is a single owned tree with no sharing.
//!
//! Control records carry *declared* counts and totals. The writer never
//! recomputes them; call [`File::recompute_controls`] to rebuild every
//! control record from its siblings, and [`File::validate`] to cross-check
//! declared values against the assembled tree.
//!
//! # Examples
//!
//! ```ignore
//! use cashletter::{File, CashLetter, Bundle};
//!
//! let mut file = File::new(header);
//! let mut cash_letter = CashLetter::new(cl_header);
//! let mut bundle = Bundle::new(b_header);
//! bundle.add_check_detail(check);
//! cash_letter.add_bundle(bundle);
//! file.add_cash_letter(cash_letter);
//! file.recompute_controls();
//! file.validate()?;
//! ```

use crate::error::Result;
use crate::records::{
    BundleControl, BundleHeader, CashLetterControl, CashLetterHeader, CheckDetail, CreditItem,
    FileControl, FileHeader, ReturnDetail,
};
use crate::validation::{self, ValidateOpts};
use serde::{Deserialize, Serialize};

/// A complete ICL document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct File {
    /// The file header record ("01").
    pub header: FileHeader,
    /// Cash letters in file order.
    pub cash_letters: Vec<CashLetter>,
    /// The file control record ("99").
    pub control: FileControl,
}

impl File {
    /// Create a file from its header, with no cash letters and an empty
    /// control record.
    #[must_use]
    pub fn new(header: FileHeader) -> Self {
        File {
            header,
            cash_letters: Vec::new(),
            control: FileControl::new(),
        }
    }

    /// Append a cash letter.
    pub fn add_cash_letter(&mut self, cash_letter: CashLetter) {
        self.cash_letters.push(cash_letter);
    }

    /// Cross-check every aggregate invariant of the assembled tree, leaves
    /// first, with default options.
    ///
    /// # Errors
    ///
    /// Returns the most local violation: bundle-level errors before
    /// cash-letter-level before file-level.
    pub fn validate(&self) -> Result<()> {
        validation::validate_file(self, &ValidateOpts::default())
    }

    /// Cross-check aggregate invariants with explicit options.
    ///
    /// # Errors
    ///
    /// Returns the most local violation.
    pub fn validate_with(&self, opts: &ValidateOpts) -> Result<()> {
        validation::validate_file(self, opts)
    }

    /// Rebuild every control record in the tree from its siblings: bundle
    /// controls from their items, cash letter controls from their bundles,
    /// and the file control from the cash letters.
    pub fn recompute_controls(&mut self) {
        for cash_letter in &mut self.cash_letters {
            cash_letter.recompute_controls();
        }
        self.control.cash_letter_count = self.cash_letters.len() as u32;
        self.control.total_record_count = self.record_count() as u32;
        self.control.total_item_count = self
            .cash_letters
            .iter()
            .map(|cl| cl.item_count() as u32)
            .sum();
        self.control.file_total_amount =
            self.cash_letters.iter().map(CashLetter::total_amount).sum();
    }

    /// Total number of records this file serializes to, file header and
    /// control included.
    #[must_use]
    pub fn record_count(&self) -> usize {
        2 + self
            .cash_letters
            .iter()
            .map(CashLetter::record_count)
            .sum::<usize>()
    }
}

/// A batch of bundles exchanged between two institutions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CashLetter {
    /// The cash letter header record ("10").
    pub header: CashLetterHeader,
    /// Credit items, all of which precede the first bundle on the wire.
    pub credit_items: Vec<CreditItem>,
    /// Bundles in cash letter order.
    pub bundles: Vec<Bundle>,
    /// The cash letter control record ("90").
    pub control: CashLetterControl,
}

impl CashLetter {
    /// Create a cash letter from its header.
    #[must_use]
    pub fn new(header: CashLetterHeader) -> Self {
        CashLetter {
            header,
            credit_items: Vec::new(),
            bundles: Vec::new(),
            control: CashLetterControl::new(),
        }
    }

    /// Append a bundle.
    pub fn add_bundle(&mut self, bundle: Bundle) {
        self.bundles.push(bundle);
    }

    /// Append a credit item.
    pub fn add_credit_item(&mut self, credit_item: CreditItem) {
        self.credit_items.push(credit_item);
    }

    /// Number of check and return details across all bundles.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.bundles.iter().map(Bundle::item_count).sum()
    }

    /// Sum of item amounts across all bundles, in cents.
    #[must_use]
    pub fn total_amount(&self) -> u64 {
        self.bundles.iter().map(Bundle::total_amount).sum()
    }

    /// Number of image view records across all bundles.
    #[must_use]
    pub fn image_record_count(&self) -> usize {
        self.bundles.iter().map(Bundle::image_record_count).sum()
    }

    /// Rebuild the bundle controls and this cash letter's control record.
    pub fn recompute_controls(&mut self) {
        for bundle in &mut self.bundles {
            bundle.recompute_control();
        }
        self.control.bundle_count = self.bundles.len() as u32;
        self.control.cash_letter_items_count = self.item_count() as u32;
        self.control.cash_letter_total_amount = self.total_amount();
        self.control.cash_letter_images_count = self.image_record_count() as u64;
    }

    pub(crate) fn record_count(&self) -> usize {
        2 + self.credit_items.len()
            + self.bundles.iter().map(Bundle::record_count).sum::<usize>()
    }
}

/// A sub-batch of homogeneous items within a cash letter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bundle {
    /// The bundle header record ("20").
    pub header: BundleHeader,
    /// Forward check details; empty when the bundle carries returns.
    pub checks: Vec<CheckDetail>,
    /// Return details; empty when the bundle carries forward items.
    pub returns: Vec<ReturnDetail>,
    /// The bundle control record ("70").
    pub control: BundleControl,
}

impl Bundle {
    /// Create a bundle from its header.
    #[must_use]
    pub fn new(header: BundleHeader) -> Self {
        Bundle {
            header,
            checks: Vec::new(),
            returns: Vec::new(),
            control: BundleControl::new(),
        }
    }

    /// Append a check detail.
    pub fn add_check_detail(&mut self, check: CheckDetail) {
        self.checks.push(check);
    }

    /// Append a return detail.
    pub fn add_return_detail(&mut self, ret: ReturnDetail) {
        self.returns.push(ret);
    }

    /// Forward check details in this bundle.
    #[must_use]
    pub fn get_checks(&self) -> &[CheckDetail] {
        &self.checks
    }

    /// Return details in this bundle.
    #[must_use]
    pub fn get_returns(&self) -> &[ReturnDetail] {
        &self.returns
    }

    /// Number of items in this bundle.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.checks.len() + self.returns.len()
    }

    /// Sum of item amounts, in cents.
    #[must_use]
    pub fn total_amount(&self) -> u64 {
        self.checks.iter().map(|c| c.item_amount).sum::<u64>()
            + self.returns.iter().map(|r| r.item_amount).sum::<u64>()
    }

    /// Sum of item amounts for items whose MICR line read clean, in cents.
    #[must_use]
    pub fn micr_valid_total_amount(&self) -> u64 {
        self.checks
            .iter()
            .filter(|c| c.micr_valid_indicator == "1")
            .map(|c| c.item_amount)
            .sum()
    }

    /// Number of image view records ("50", "52", "54") in this bundle.
    #[must_use]
    pub fn image_record_count(&self) -> usize {
        let views = self
            .checks
            .iter()
            .flat_map(|c| c.image_views.iter())
            .chain(self.returns.iter().flat_map(|r| r.image_views.iter()));
        views
            .map(|v| 1 + usize::from(v.data.is_some()) + usize::from(v.analysis.is_some()))
            .sum()
    }

    /// Rebuild this bundle's control record from its items.
    pub fn recompute_control(&mut self) {
        self.control.bundle_items_count = self.item_count() as u32;
        self.control.bundle_total_amount = self.total_amount();
        self.control.micr_valid_total_amount = self.micr_valid_total_amount();
        self.control.bundle_images_count = self.image_record_count() as u32;
    }

    pub(crate) fn record_count(&self) -> usize {
        let check_records: usize = self
            .checks
            .iter()
            .map(|c| {
                1 + c.check_detail_addendum_a.len()
                    + c.check_detail_addendum_b.len()
                    + c.check_detail_addendum_c.len()
            })
            .sum();
        let return_records: usize = self
            .returns
            .iter()
            .map(|r| {
                1 + r.return_detail_addendum_a.len()
                    + r.return_detail_addendum_b.len()
                    + r.return_detail_addendum_c.len()
                    + r.return_detail_addendum_d.len()
            })
            .sum();
        2 + check_records + return_records + self.image_record_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::image_view::{ImageView, ImageViewData, ImageViewDetail};

    fn check(amount: u64) -> CheckDetail {
        CheckDetail {
            item_amount: amount,
            micr_valid_indicator: "1".to_string(),
            ..CheckDetail::default()
        }
    }

    #[test]
    fn test_bundle_aggregates() {
        let mut bundle = Bundle::new(BundleHeader::default());
        bundle.add_check_detail(check(100));
        bundle.add_check_detail(check(250));
        assert_eq!(bundle.item_count(), 2);
        assert_eq!(bundle.total_amount(), 350);
        assert_eq!(bundle.micr_valid_total_amount(), 350);
        // header + two details + control
        assert_eq!(bundle.record_count(), 4);
    }

    #[test]
    fn test_image_record_count_counts_triplet_members() {
        let mut cd = check(100);
        let mut view = ImageView::new(ImageViewDetail::default());
        view.data = Some(ImageViewData::default());
        cd.add_image_view(view);
        cd.add_image_view(ImageView::new(ImageViewDetail::default()));
        let mut bundle = Bundle::new(BundleHeader::default());
        bundle.add_check_detail(cd);
        // one detail+data pair and one bare detail
        assert_eq!(bundle.image_record_count(), 3);
    }

    #[test]
    fn test_recompute_controls_fills_every_level() {
        let mut bundle = Bundle::new(BundleHeader::default());
        bundle.add_check_detail(check(100));
        bundle.add_check_detail(check(200));

        let mut cash_letter = CashLetter::new(CashLetterHeader::default());
        cash_letter.add_bundle(bundle);

        let mut file = File::new(FileHeader::default());
        file.add_cash_letter(cash_letter);
        file.recompute_controls();

        let bundle = &file.cash_letters[0].bundles[0];
        assert_eq!(bundle.control.bundle_items_count, 2);
        assert_eq!(bundle.control.bundle_total_amount, 300);
        let cl = &file.cash_letters[0];
        assert_eq!(cl.control.bundle_count, 1);
        assert_eq!(cl.control.cash_letter_items_count, 2);
        assert_eq!(cl.control.cash_letter_total_amount, 300);
        assert_eq!(file.control.cash_letter_count, 1);
        assert_eq!(file.control.total_item_count, 2);
        assert_eq!(file.control.file_total_amount, 300);
        // 01 + 10 + 20 + 25 + 25 + 70 + 90 + 99
        assert_eq!(file.control.total_record_count, 8);
    }
}
