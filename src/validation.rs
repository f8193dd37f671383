//! Cross-record validation of an assembled document tree.
//!
//! Record-level field checks run during parsing; this module checks the
//! invariants that span records: declared counts and totals against
//! computed aggregates, addendum and image view counts on detail items,
//! and routing number consistency between bundle headers and their parent
//! cash letter.
//!
//! Checks run depth-first, leaves first — bundle invariants before
//! cash-letter invariants before file invariants — so the first error
//! reported is the most local one. Mismatch errors carry the computed
//! value as `expected` and the declared control value as `actual`.

use crate::error::{
    BundleError, CashLetterError, FieldError, FileError, Result, MSG_BUNDLE_COUNT,
    MSG_BUNDLE_ENTRIES, MSG_INVALID_ROUTING_CHECKSUM, MSG_MIXED_BUNDLE, MSG_ROUTING_MISMATCH,
};
use crate::fields::routing_checksum_valid;
use crate::file::{Bundle, CashLetter, File};
use crate::records::CashLetterHeader;

/// Options for document validation.
#[derive(Debug, Clone, Default)]
pub struct ValidateOpts {
    /// Verify the ABA check digit of every header routing number. Off by
    /// default: test decks routinely carry routing numbers that fail the
    /// checksum.
    pub routing_checksum: bool,
}

pub(crate) fn validate_file(file: &File, opts: &ValidateOpts) -> Result<()> {
    if opts.routing_checksum {
        validate_routing_checksums(file)?;
    }

    for cash_letter in &file.cash_letters {
        for bundle in &cash_letter.bundles {
            validate_bundle(bundle, &cash_letter.header)?;
        }
        validate_cash_letter(cash_letter)?;
    }

    for cash_letter in &file.cash_letters {
        if cash_letter.bundles.is_empty() {
            return Err(FileError::new("BundleCount", 0, MSG_BUNDLE_COUNT).into());
        }
    }

    let expected = file.cash_letters.len() as i64;
    let declared = i64::from(file.control.cash_letter_count);
    if declared != expected {
        return Err(FileError::mismatch("CashLetterCount", expected, declared).into());
    }

    // The record count is optional in some variants; zero means "absent".
    if file.control.total_record_count != 0 {
        let expected = file.record_count() as i64;
        let declared = i64::from(file.control.total_record_count);
        if declared != expected {
            return Err(FileError::mismatch("TotalRecordCount", expected, declared).into());
        }
    }

    let expected = file
        .cash_letters
        .iter()
        .map(|cl| cl.item_count() as i64)
        .sum::<i64>();
    let declared = i64::from(file.control.total_item_count);
    if declared != expected {
        return Err(FileError::mismatch("TotalItemCount", expected, declared).into());
    }

    let expected = file
        .cash_letters
        .iter()
        .map(|cl| cl.total_amount() as i64)
        .sum::<i64>();
    let declared = file.control.file_total_amount as i64;
    if declared != expected {
        return Err(FileError::mismatch("FileTotalAmount", expected, declared).into());
    }

    Ok(())
}

fn validate_bundle(bundle: &Bundle, parent: &CashLetterHeader) -> Result<()> {
    let sequence = bundle.header.bundle_sequence_number.as_str();

    if bundle.item_count() == 0 {
        return Err(BundleError::new(sequence, "entries", MSG_BUNDLE_ENTRIES).into());
    }
    if !bundle.checks.is_empty() && !bundle.returns.is_empty() {
        return Err(BundleError::new(sequence, "entries", MSG_MIXED_BUNDLE).into());
    }

    if bundle.header.destination_routing_number != parent.destination_routing_number {
        return Err(
            BundleError::new(sequence, "DestinationRoutingNumber", MSG_ROUTING_MISMATCH).into(),
        );
    }
    if bundle.header.ece_institution_routing_number != parent.ece_institution_routing_number {
        return Err(BundleError::new(
            sequence,
            "EceInstitutionRoutingNumber",
            MSG_ROUTING_MISMATCH,
        )
        .into());
    }

    for check in &bundle.checks {
        let expected = check.check_detail_addendum_a.len() as i64;
        let declared = i64::from(check.addendum_count);
        if declared != expected {
            return Err(BundleError::mismatch(sequence, "AddendumCount", expected, declared).into());
        }
        let expected = check.image_views.len() as i64;
        let declared = i64::from(check.image_view_count);
        if declared != expected {
            return Err(
                BundleError::mismatch(sequence, "ImageViewCount", expected, declared).into(),
            );
        }
    }
    for ret in &bundle.returns {
        let expected = ret.return_detail_addendum_a.len() as i64;
        let declared = i64::from(ret.addendum_count);
        if declared != expected {
            return Err(BundleError::mismatch(sequence, "AddendumCount", expected, declared).into());
        }
        let expected = ret.image_views.len() as i64;
        let declared = i64::from(ret.image_view_count);
        if declared != expected {
            return Err(
                BundleError::mismatch(sequence, "ImageViewCount", expected, declared).into(),
            );
        }
    }

    let expected = bundle.item_count() as i64;
    let declared = i64::from(bundle.control.bundle_items_count);
    if declared != expected {
        return Err(BundleError::mismatch(sequence, "BundleItemsCount", expected, declared).into());
    }

    let expected = bundle.total_amount() as i64;
    let declared = bundle.control.bundle_total_amount as i64;
    if declared != expected {
        return Err(BundleError::mismatch(sequence, "BundleTotalAmount", expected, declared).into());
    }

    let expected = bundle.image_record_count() as i64;
    let declared = i64::from(bundle.control.bundle_images_count);
    if declared != expected {
        return Err(
            BundleError::mismatch(sequence, "BundleImagesCount", expected, declared).into(),
        );
    }

    Ok(())
}

fn validate_cash_letter(cash_letter: &CashLetter) -> Result<()> {
    let id = cash_letter.header.cash_letter_id.as_str();

    let expected = cash_letter.bundles.len() as i64;
    let declared = i64::from(cash_letter.control.bundle_count);
    if declared != expected {
        return Err(CashLetterError::mismatch(id, "BundleCount", expected, declared).into());
    }

    let expected = cash_letter.item_count() as i64;
    let declared = i64::from(cash_letter.control.cash_letter_items_count);
    if declared != expected {
        return Err(
            CashLetterError::mismatch(id, "CashLetterItemsCount", expected, declared).into(),
        );
    }

    let expected = cash_letter.total_amount() as i64;
    let declared = cash_letter.control.cash_letter_total_amount as i64;
    if declared != expected {
        return Err(
            CashLetterError::mismatch(id, "CashLetterTotalAmount", expected, declared).into(),
        );
    }

    let expected = cash_letter.image_record_count() as i64;
    let declared = cash_letter.control.cash_letter_images_count as i64;
    if declared != expected {
        return Err(
            CashLetterError::mismatch(id, "CashLetterImagesCount", expected, declared).into(),
        );
    }

    Ok(())
}

fn validate_routing_checksums(file: &File) -> Result<()> {
    let check = |name: &str, value: &str| -> Result<()> {
        if !value.is_empty() && !routing_checksum_valid(value) {
            return Err(FieldError::new(name, value, MSG_INVALID_ROUTING_CHECKSUM).into());
        }
        Ok(())
    };
    check("ImmediateDestination", &file.header.immediate_destination)?;
    check("ImmediateOrigin", &file.header.immediate_origin)?;
    for cash_letter in &file.cash_letters {
        check(
            "DestinationRoutingNumber",
            &cash_letter.header.destination_routing_number,
        )?;
        check(
            "EceInstitutionRoutingNumber",
            &cash_letter.header.ece_institution_routing_number,
        )?;
        for bundle in &cash_letter.bundles {
            check(
                "DestinationRoutingNumber",
                &bundle.header.destination_routing_number,
            )?;
            check(
                "EceInstitutionRoutingNumber",
                &bundle.header.ece_institution_routing_number,
            )?;
        }
    }
    Ok(())
}
