//! Reading ICL files from byte streams.
//!
//! This module provides [`Reader`] for parsing X9.100-187 files from any
//! source that implements [`std::io::Read`].
//!
//! Each record is parsed, field-validated, and then run through the nesting
//! state machine: a file opens with "01" and closes with "99"; cash letters
//! bracket bundles; bundles bracket details; details own addenda and image
//! view triplets. A record that arrives outside its permitted position is
//! reported with a stable message code (`CashLetterInside`, `BundleInside`,
//! `BundleOutside`, …) wrapped in a [`ParseError`] carrying the one-based
//! record number.
//!
//! # Examples
//!
//! ```no_run
//! use cashletter::Reader;
//! use std::fs::File;
//!
//! let fd = File::open("BNK20180905121042882-A.icl")?;
//! let mut reader = Reader::new(fd);
//! let file = reader.read()?;
//! println!("cash letters: {}", file.cash_letters.len());
//! # Ok::<(), cashletter::IclError>(())
//! ```
//!
//! Reading from a buffer:
//!
//! ```
//! use cashletter::Reader;
//! use std::io::Cursor;
//!
//! let mut reader = Reader::new(Cursor::new(Vec::<u8>::new()));
//! assert!(reader.read().is_err()); // empty input has no file control
//! ```

use crate::encoding::{Charset, Encoding};
use crate::error::{
    BundleError, FileError, IclError, ParseError, Result, MSG_BUNDLE_ENTRIES, MSG_BUNDLE_INSIDE,
    MSG_BUNDLE_OUTSIDE, MSG_CASH_LETTER_INSIDE, MSG_CREDIT_ITEM_AFTER_BUNDLE, MSG_FILE_CONTROL,
    MSG_MIXED_BUNDLE, MSG_RECORD_LENGTH, MSG_RECORD_OUT_OF_PLACE, MSG_UNKNOWN_RECORD_TYPE,
};
use crate::file::{Bundle, CashLetter, File};
use crate::records::image_view::ImageView;
use crate::records::{
    codes, BundleControl, BundleHeader, CashLetterControl, CashLetterHeader, CheckDetail,
    CheckDetailAddendumA, CheckDetailAddendumB, CheckDetailAddendumC, CreditItem, FileControl,
    FileHeader, ImageViewAnalysis, ImageViewData, ImageViewDetail, ReturnDetail,
    ReturnDetailAddendumA, ReturnDetailAddendumB, ReturnDetailAddendumC, ReturnDetailAddendumD,
};
use crate::scanner::{Frame, RecordScanner};
use std::io::Read;

/// How the reader reacts to errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Halt on the first error (default). The partially built file stays
    /// accessible through [`Reader::file`].
    #[default]
    Strict,
    /// Accumulate errors, skip the offending records, and keep parsing.
    /// [`Reader::read`] returns the partial tree; the error list is
    /// available through [`Reader::errors`].
    Collect,
}

/// Progress through the image view triplet of the currently open detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ImagePhase {
    /// No view is open (fresh detail, or addenda closed the views).
    #[default]
    Idle,
    /// A "50" arrived; only "52" may follow within this view.
    Detail,
    /// A "52" arrived; "54", a new view, an addendum, an item, or "70".
    Data,
    /// A "54" arrived; a new view, an addendum, an item, or "70".
    Analysis,
}

/// Reader for X9.100-187 ICL files.
#[derive(Debug)]
pub struct Reader<R: Read> {
    scanner: RecordScanner<R>,
    file: File,
    mode: ParseMode,
    charset: Charset,
    errors: Vec<IclError>,
    line: usize,
    header_seen: bool,
    control_seen: bool,
    current_cash_letter: Option<usize>,
    current_bundle: Option<usize>,
    image_phase: ImagePhase,
}

impl<R: Read> Reader<R> {
    /// Create a reader over `reader` with strict mode, strict-ASCII field
    /// charset, and ASCII transport encoding.
    pub fn new(reader: R) -> Self {
        Reader {
            scanner: RecordScanner::new(reader),
            file: File::default(),
            mode: ParseMode::default(),
            charset: Charset::default(),
            errors: Vec::new(),
            line: 0,
            header_seen: false,
            control_seen: false,
            current_cash_letter: None,
            current_bundle: None,
            image_phase: ImagePhase::Idle,
        }
    }

    /// Set the error handling mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Relax the field content charset.
    #[must_use]
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Select the transport encoding (CP037 EBCDIC or ASCII).
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.scanner = self.scanner.with_encoding(encoding);
        self
    }

    /// The file as assembled so far. After a strict-mode error this holds
    /// the partial tree.
    #[must_use]
    pub fn file(&self) -> &File {
        &self.file
    }

    /// Errors accumulated in [`ParseMode::Collect`].
    #[must_use]
    pub fn errors(&self) -> &[IclError] {
        &self.errors
    }

    /// Read the whole stream into a [`File`].
    ///
    /// In strict mode the first error is returned immediately; in collect
    /// mode the partial tree is returned and the error list is available
    /// through [`Reader::errors`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] wrapping the underlying field or structure
    /// error, or a bare `FileControl` file error when the stream ends
    /// without a "99" record.
    pub fn read(&mut self) -> Result<File> {
        loop {
            let frame = match self.scanner.next_record() {
                Ok(Some(frame)) => frame,
                Ok(None) => break,
                Err(e) => {
                    if self.mode == ParseMode::Strict {
                        return Err(e);
                    }
                    self.errors.push(e);
                    break;
                },
            };
            self.line += 1;
            let (record, blob) = match frame {
                Frame::Fixed(line) => (line, None),
                Frame::Image { prefix, blob } => (prefix, Some(blob)),
            };
            if let Err(e) = self.dispatch(&record, blob) {
                let wrapped = ParseError::wrap(self.line, &record, e);
                if self.mode == ParseMode::Strict {
                    return Err(wrapped);
                }
                self.errors.push(wrapped);
            }
        }

        if !self.control_seen {
            let err = IclError::from(FileError::new("FileControl", "", MSG_FILE_CONTROL));
            if self.mode == ParseMode::Strict {
                return Err(err);
            }
            self.errors.push(err);
        }
        Ok(std::mem::take(&mut self.file))
    }

    fn dispatch(&mut self, record: &str, blob: Option<Vec<u8>>) -> Result<()> {
        if self.control_seen {
            return Err(FileError::new("FileControl", "", MSG_FILE_CONTROL).into());
        }
        if record.chars().count() != 80 {
            return Err(
                FileError::new("RecordLength", record.chars().count(), MSG_RECORD_LENGTH).into(),
            );
        }
        let code: String = record.chars().take(2).collect();
        match code.as_str() {
            codes::FILE_HEADER => self.parse_file_header(record),
            codes::CASH_LETTER_HEADER => self.parse_cash_letter_header(record),
            codes::BUNDLE_HEADER => self.parse_bundle_header(record),
            codes::CHECK_DETAIL => self.parse_check_detail(record),
            codes::CHECK_DETAIL_ADDENDUM_A => self.parse_check_detail_addendum_a(record),
            codes::CHECK_DETAIL_ADDENDUM_B => self.parse_check_detail_addendum_b(record),
            codes::CHECK_DETAIL_ADDENDUM_C => self.parse_check_detail_addendum_c(record),
            codes::RETURN_DETAIL => self.parse_return_detail(record),
            codes::RETURN_DETAIL_ADDENDUM_A => self.parse_return_detail_addendum_a(record),
            codes::RETURN_DETAIL_ADDENDUM_B => self.parse_return_detail_addendum_b(record),
            codes::RETURN_DETAIL_ADDENDUM_C => self.parse_return_detail_addendum_c(record),
            codes::RETURN_DETAIL_ADDENDUM_D => self.parse_return_detail_addendum_d(record),
            codes::IMAGE_VIEW_DETAIL => self.parse_image_view_detail(record),
            codes::IMAGE_VIEW_DATA => self.parse_image_view_data(record, blob.unwrap_or_default()),
            codes::IMAGE_VIEW_ANALYSIS => self.parse_image_view_analysis(record),
            codes::CREDIT_ITEM => self.parse_credit_item(record),
            codes::BUNDLE_CONTROL => self.parse_bundle_control(record),
            codes::CASH_LETTER_CONTROL => self.parse_cash_letter_control(record),
            codes::FILE_CONTROL => self.parse_file_control(record),
            _ => Err(FileError::new("recordType", &code, MSG_UNKNOWN_RECORD_TYPE).into()),
        }
    }

    fn parse_file_header(&mut self, record: &str) -> Result<()> {
        if self.header_seen {
            // A second "01" where only a file control may close the file.
            return Err(FileError::new("FileControl", "", MSG_FILE_CONTROL).into());
        }
        let header = FileHeader::from_line(record)?;
        header.validate_with(self.charset)?;
        self.file.header = header;
        self.header_seen = true;
        Ok(())
    }

    fn parse_cash_letter_header(&mut self, record: &str) -> Result<()> {
        let header = CashLetterHeader::from_line(record)?;
        header.validate_with(self.charset)?;
        if self.current_cash_letter.is_some() {
            return Err(FileError::new("CashLetterHeader", "", MSG_CASH_LETTER_INSIDE).into());
        }
        self.file.add_cash_letter(CashLetter::new(header));
        self.current_cash_letter = Some(self.file.cash_letters.len() - 1);
        Ok(())
    }

    fn parse_bundle_header(&mut self, record: &str) -> Result<()> {
        let header = BundleHeader::from_line(record)?;
        header.validate_with(self.charset)?;
        if self.current_bundle.is_some() {
            return Err(FileError::new("BundleHeader", "", MSG_BUNDLE_INSIDE).into());
        }
        let Some(cl) = self.open_cash_letter() else {
            return Err(FileError::new("BundleHeader", "", MSG_RECORD_OUT_OF_PLACE).into());
        };
        cl.add_bundle(Bundle::new(header));
        let index = cl.bundles.len() - 1;
        self.current_bundle = Some(index);
        self.image_phase = ImagePhase::Idle;
        Ok(())
    }

    fn parse_check_detail(&mut self, record: &str) -> Result<()> {
        let detail = CheckDetail::from_line(record)?;
        detail.validate_with(self.charset)?;
        if self.image_phase == ImagePhase::Detail {
            return Err(FileError::new("CheckDetail", "", MSG_RECORD_OUT_OF_PLACE).into());
        }
        let Some(bundle) = self.open_bundle() else {
            return Err(FileError::new("CheckDetail", "", MSG_BUNDLE_OUTSIDE).into());
        };
        if !bundle.returns.is_empty() {
            return Err(FileError::new("CheckDetail", "", MSG_MIXED_BUNDLE).into());
        }
        bundle.add_check_detail(detail);
        self.image_phase = ImagePhase::Idle;
        Ok(())
    }

    fn parse_return_detail(&mut self, record: &str) -> Result<()> {
        let detail = ReturnDetail::from_line(record)?;
        detail.validate_with(self.charset)?;
        if self.image_phase == ImagePhase::Detail {
            return Err(FileError::new("ReturnDetail", "", MSG_RECORD_OUT_OF_PLACE).into());
        }
        let Some(bundle) = self.open_bundle() else {
            return Err(FileError::new("ReturnDetail", "", MSG_BUNDLE_OUTSIDE).into());
        };
        if !bundle.checks.is_empty() {
            return Err(FileError::new("ReturnDetail", "", MSG_MIXED_BUNDLE).into());
        }
        bundle.add_return_detail(detail);
        self.image_phase = ImagePhase::Idle;
        Ok(())
    }

    /// After a "50" opens a view, only its "52" data record may follow.
    fn guard_view_complete(&self, record_name: &str) -> Result<()> {
        if self.image_phase == ImagePhase::Detail {
            return Err(FileError::new(record_name, "", MSG_RECORD_OUT_OF_PLACE).into());
        }
        Ok(())
    }

    fn parse_check_detail_addendum_a(&mut self, record: &str) -> Result<()> {
        let addendum = CheckDetailAddendumA::from_line(record)?;
        addendum.validate_with(self.charset)?;
        self.guard_view_complete("CheckDetailAddendumA")?;
        let check = self.open_check_detail("CheckDetailAddendumA")?;
        check.add_check_detail_addendum_a(addendum);
        self.image_phase = ImagePhase::Idle;
        Ok(())
    }

    fn parse_check_detail_addendum_b(&mut self, record: &str) -> Result<()> {
        let addendum = CheckDetailAddendumB::from_line(record)?;
        addendum.validate_with(self.charset)?;
        self.guard_view_complete("CheckDetailAddendumB")?;
        let check = self.open_check_detail("CheckDetailAddendumB")?;
        check.add_check_detail_addendum_b(addendum);
        self.image_phase = ImagePhase::Idle;
        Ok(())
    }

    fn parse_check_detail_addendum_c(&mut self, record: &str) -> Result<()> {
        let addendum = CheckDetailAddendumC::from_line(record)?;
        addendum.validate_with(self.charset)?;
        self.guard_view_complete("CheckDetailAddendumC")?;
        let check = self.open_check_detail("CheckDetailAddendumC")?;
        check.add_check_detail_addendum_c(addendum);
        self.image_phase = ImagePhase::Idle;
        Ok(())
    }

    fn parse_return_detail_addendum_a(&mut self, record: &str) -> Result<()> {
        let addendum = ReturnDetailAddendumA::from_line(record)?;
        addendum.validate_with(self.charset)?;
        self.guard_view_complete("ReturnDetailAddendumA")?;
        let ret = self.open_return_detail("ReturnDetailAddendumA")?;
        ret.add_return_detail_addendum_a(addendum);
        self.image_phase = ImagePhase::Idle;
        Ok(())
    }

    fn parse_return_detail_addendum_b(&mut self, record: &str) -> Result<()> {
        let addendum = ReturnDetailAddendumB::from_line(record)?;
        addendum.validate_with(self.charset)?;
        self.guard_view_complete("ReturnDetailAddendumB")?;
        let ret = self.open_return_detail("ReturnDetailAddendumB")?;
        ret.add_return_detail_addendum_b(addendum);
        self.image_phase = ImagePhase::Idle;
        Ok(())
    }

    fn parse_return_detail_addendum_c(&mut self, record: &str) -> Result<()> {
        let addendum = ReturnDetailAddendumC::from_line(record)?;
        addendum.validate_with(self.charset)?;
        self.guard_view_complete("ReturnDetailAddendumC")?;
        let ret = self.open_return_detail("ReturnDetailAddendumC")?;
        ret.add_return_detail_addendum_c(addendum);
        self.image_phase = ImagePhase::Idle;
        Ok(())
    }

    fn parse_return_detail_addendum_d(&mut self, record: &str) -> Result<()> {
        let addendum = ReturnDetailAddendumD::from_line(record)?;
        addendum.validate_with(self.charset)?;
        self.guard_view_complete("ReturnDetailAddendumD")?;
        let ret = self.open_return_detail("ReturnDetailAddendumD")?;
        ret.add_return_detail_addendum_d(addendum);
        self.image_phase = ImagePhase::Idle;
        Ok(())
    }

    fn parse_image_view_detail(&mut self, record: &str) -> Result<()> {
        let detail = ImageViewDetail::from_line(record)?;
        detail.validate_with(self.charset)?;
        if self.image_phase == ImagePhase::Detail {
            // The previous view never received its data record.
            return Err(FileError::new("ImageViewDetail", "", MSG_RECORD_OUT_OF_PLACE).into());
        }
        let Some(views) = self.open_image_views() else {
            return Err(FileError::new("ImageViewDetail", "", MSG_BUNDLE_OUTSIDE).into());
        };
        views.push(ImageView::new(detail));
        self.image_phase = ImagePhase::Detail;
        Ok(())
    }

    fn parse_image_view_data(&mut self, record: &str, blob: Vec<u8>) -> Result<()> {
        let data = ImageViewData::from_prefix(record, blob)?;
        data.validate_with(self.charset)?;
        if self.image_phase != ImagePhase::Detail {
            // With no open detail this record is outside any bundle item;
            // with one, it lacks a "50" parent or its view already has data.
            let msg = if self.open_image_views().is_none() {
                MSG_BUNDLE_OUTSIDE
            } else {
                MSG_RECORD_OUT_OF_PLACE
            };
            return Err(FileError::new("ImageViewData", "", msg).into());
        }
        let view = self
            .open_image_views()
            .and_then(|views| views.last_mut())
            .ok_or_else(|| {
                IclError::from(FileError::new("ImageViewData", "", MSG_BUNDLE_OUTSIDE))
            })?;
        view.data = Some(data);
        self.image_phase = ImagePhase::Data;
        Ok(())
    }

    fn parse_image_view_analysis(&mut self, record: &str) -> Result<()> {
        let analysis = ImageViewAnalysis::from_line(record)?;
        analysis.validate_with(self.charset)?;
        if self.image_phase != ImagePhase::Data {
            let msg = if self.open_image_views().is_none() {
                MSG_BUNDLE_OUTSIDE
            } else {
                MSG_RECORD_OUT_OF_PLACE
            };
            return Err(FileError::new("ImageViewAnalysis", "", msg).into());
        }
        let view = self
            .open_image_views()
            .and_then(|views| views.last_mut())
            .ok_or_else(|| {
                IclError::from(FileError::new("ImageViewAnalysis", "", MSG_BUNDLE_OUTSIDE))
            })?;
        view.analysis = Some(analysis);
        self.image_phase = ImagePhase::Analysis;
        Ok(())
    }

    fn parse_credit_item(&mut self, record: &str) -> Result<()> {
        let credit = CreditItem::from_line(record)?;
        credit.validate_with(self.charset)?;
        if self.current_bundle.is_some() {
            return Err(FileError::new("CreditItem", "", MSG_CREDIT_ITEM_AFTER_BUNDLE).into());
        }
        let Some(cl) = self.open_cash_letter() else {
            return Err(FileError::new("CreditItem", "", MSG_RECORD_OUT_OF_PLACE).into());
        };
        if !cl.bundles.is_empty() {
            return Err(FileError::new("CreditItem", "", MSG_CREDIT_ITEM_AFTER_BUNDLE).into());
        }
        cl.add_credit_item(credit);
        Ok(())
    }

    fn parse_bundle_control(&mut self, record: &str) -> Result<()> {
        let control = BundleControl::from_line(record)?;
        control.validate_with(self.charset)?;
        self.guard_view_complete("BundleControl")?;
        let Some(bundle) = self.open_bundle() else {
            return Err(FileError::new("BundleControl", "", MSG_BUNDLE_OUTSIDE).into());
        };
        bundle.control = control;
        let empty = bundle.item_count() == 0;
        let sequence = bundle.header.bundle_sequence_number.clone();
        self.current_bundle = None;
        self.image_phase = ImagePhase::Idle;
        if empty {
            return Err(BundleError::new(&sequence, "entries", MSG_BUNDLE_ENTRIES).into());
        }
        Ok(())
    }

    fn parse_cash_letter_control(&mut self, record: &str) -> Result<()> {
        let control = CashLetterControl::from_line(record)?;
        control.validate_with(self.charset)?;
        if self.current_bundle.is_some() {
            return Err(
                FileError::new("CashLetterControl", "", MSG_RECORD_OUT_OF_PLACE).into(),
            );
        }
        let Some(cl) = self.open_cash_letter() else {
            return Err(
                FileError::new("CashLetterControl", "", MSG_RECORD_OUT_OF_PLACE).into(),
            );
        };
        cl.control = control;
        self.current_cash_letter = None;
        Ok(())
    }

    fn parse_file_control(&mut self, record: &str) -> Result<()> {
        let control = FileControl::from_line(record)?;
        control.validate_with(self.charset)?;
        if self.current_cash_letter.is_some() || self.current_bundle.is_some() {
            return Err(FileError::new("FileControl", "", MSG_RECORD_OUT_OF_PLACE).into());
        }
        self.file.control = control;
        self.control_seen = true;
        Ok(())
    }

    // Cursor helpers. The parser holds indices into the owned tree instead
    // of references; a control record resets the matching index.

    fn open_cash_letter(&mut self) -> Option<&mut CashLetter> {
        let index = self.current_cash_letter?;
        self.file.cash_letters.get_mut(index)
    }

    fn open_bundle(&mut self) -> Option<&mut Bundle> {
        let cl_index = self.current_cash_letter?;
        let b_index = self.current_bundle?;
        self.file.cash_letters.get_mut(cl_index)?.bundles.get_mut(b_index)
    }

    fn open_check_detail(&mut self, record_name: &str) -> Result<&mut CheckDetail> {
        let outside: IclError = FileError::new(record_name, "", MSG_BUNDLE_OUTSIDE).into();
        let Some(bundle) = self.open_bundle() else {
            return Err(outside);
        };
        bundle.checks.last_mut().ok_or(outside)
    }

    fn open_return_detail(&mut self, record_name: &str) -> Result<&mut ReturnDetail> {
        let outside: IclError = FileError::new(record_name, "", MSG_BUNDLE_OUTSIDE).into();
        let Some(bundle) = self.open_bundle() else {
            return Err(outside);
        };
        bundle.returns.last_mut().ok_or(outside)
    }

    /// Image view list of the currently open detail, check or return.
    fn open_image_views(
        &mut self,
    ) -> Option<&mut smallvec::SmallVec<[ImageView; 2]>> {
        let bundle = self.open_bundle()?;
        if let Some(check) = bundle.checks.last_mut() {
            return Some(&mut check.image_views);
        }
        if let Some(ret) = bundle.returns.last_mut() {
            return Some(&mut ret.image_views);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader_from(lines: &[String]) -> Reader<Cursor<Vec<u8>>> {
        let joined = lines.join("\n") + "\n";
        Reader::new(Cursor::new(joined.into_bytes()))
    }

    fn file_header_line() -> String {
        "0135T231380104121042882201809051523NCitadel           Wells Fargo        US     "
            .to_string()
    }

    #[test]
    fn test_unknown_record_type() {
        let line =
            "1735T231380104121042882201809051523NCitadel           Wells Fargo        US     "
                .to_string();
        let mut r = reader_from(&[line]);
        let err = r.read().unwrap_err();
        let fe = err.file_error().expect("file error");
        assert_eq!(fe.field_name, "recordType");
        assert!(err.parse_error().is_some());
    }

    #[test]
    fn test_short_line_is_record_length() {
        let line = "1 line is only 70 characters ........................................!".to_string();
        let mut r = reader_from(&[line]);
        let err = r.read().unwrap_err();
        let fe = err.file_error().expect("file error");
        assert_eq!(fe.field_name, "RecordLength");
    }

    #[test]
    fn test_two_file_headers() {
        let mut r = reader_from(&[file_header_line(), file_header_line()]);
        let err = r.read().unwrap_err();
        let fe = err.file_error().expect("file error");
        assert_eq!(fe.msg, MSG_FILE_CONTROL);
        assert_eq!(err.parse_error().unwrap().line, 2);
    }

    #[test]
    fn test_eof_without_file_control() {
        let mut r = reader_from(&[file_header_line()]);
        let err = r.read().unwrap_err();
        let fe = err.file_error().expect("file error");
        assert_eq!(fe.msg, MSG_FILE_CONTROL);
    }

    #[test]
    fn test_partial_file_stays_on_reader() {
        let mut r = reader_from(&[file_header_line()]);
        assert!(r.read().is_err());
        assert_eq!(r.file().header.immediate_destination, "231380104");
    }

    #[test]
    fn test_collect_mode_accumulates() {
        let line =
            "1735T231380104121042882201809051523NCitadel           Wells Fargo        US     "
                .to_string();
        let mut r = reader_from(&[file_header_line(), line]).with_mode(ParseMode::Collect);
        let file = r.read().unwrap();
        assert_eq!(file.header.immediate_destination, "231380104");
        // unknown record type plus the missing file control
        assert_eq!(r.errors().len(), 2);
    }
}
