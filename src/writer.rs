//! Writing ICL files to byte streams.
//!
//! This module provides [`Writer`] for serializing a [`File`] tree to
//! X9.100-187 bytes on any destination implementing [`std::io::Write`].
//!
//! The writer walks the tree in canonical order — file header, then for
//! each cash letter its header, credit items, and bundles (each bundle:
//! header, items with their addenda and image views, control), then the
//! cash letter control, and finally the file control — emitting each
//! record's own serialization. Declared counts and totals are written
//! as-is; call [`File::recompute_controls`] first if they are stale.
//!
//! # Examples
//!
//! ```
//! use cashletter::{File, Writer};
//!
//! let mut file = File::default();
//! file.recompute_controls();
//! let mut buffer = Vec::new();
//! Writer::new(&mut buffer).write(&file)?;
//! assert_eq!(buffer.len(), 2 * 81); // header + control, newline framed
//! # Ok::<(), cashletter::IclError>(())
//! ```

use crate::encoding::Encoding;
use crate::error::Result;
use crate::file::{Bundle, CashLetter, File};
use crate::records::image_view::ImageView;
use std::io::Write;

/// Writer for X9.100-187 ICL files.
#[derive(Debug)]
pub struct Writer<W: Write> {
    writer: W,
    encoding: Encoding,
    records_written: usize,
}

impl<W: Write> Writer<W> {
    /// Create a writer over `writer` with ASCII transport encoding.
    pub fn new(writer: W) -> Self {
        Writer {
            writer,
            encoding: Encoding::default(),
            records_written: 0,
        }
    }

    /// Select the transport encoding (CP037 EBCDIC or ASCII).
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Serialize `file` to the underlying writer and flush.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying writer fails.
    pub fn write(&mut self, file: &File) -> Result<()> {
        self.emit_line(&file.header.to_line())?;
        for cash_letter in &file.cash_letters {
            self.write_cash_letter(cash_letter)?;
        }
        self.emit_line(&file.control.to_line())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Number of records written so far.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    fn write_cash_letter(&mut self, cash_letter: &CashLetter) -> Result<()> {
        self.emit_line(&cash_letter.header.to_line())?;
        for credit_item in &cash_letter.credit_items {
            self.emit_line(&credit_item.to_line())?;
        }
        for bundle in &cash_letter.bundles {
            self.write_bundle(bundle)?;
        }
        self.emit_line(&cash_letter.control.to_line())?;
        Ok(())
    }

    fn write_bundle(&mut self, bundle: &Bundle) -> Result<()> {
        self.emit_line(&bundle.header.to_line())?;
        for check in &bundle.checks {
            self.emit_line(&check.to_line())?;
            for addendum in &check.check_detail_addendum_a {
                self.emit_line(&addendum.to_line())?;
            }
            for addendum in &check.check_detail_addendum_b {
                self.emit_line(&addendum.to_line())?;
            }
            for addendum in &check.check_detail_addendum_c {
                self.emit_line(&addendum.to_line())?;
            }
            self.write_image_views(&check.image_views)?;
        }
        for ret in &bundle.returns {
            self.emit_line(&ret.to_line())?;
            for addendum in &ret.return_detail_addendum_a {
                self.emit_line(&addendum.to_line())?;
            }
            for addendum in &ret.return_detail_addendum_b {
                self.emit_line(&addendum.to_line())?;
            }
            for addendum in &ret.return_detail_addendum_c {
                self.emit_line(&addendum.to_line())?;
            }
            for addendum in &ret.return_detail_addendum_d {
                self.emit_line(&addendum.to_line())?;
            }
            self.write_image_views(&ret.image_views)?;
        }
        self.emit_line(&bundle.control.to_line())?;
        Ok(())
    }

    fn write_image_views(&mut self, views: &[ImageView]) -> Result<()> {
        for view in views {
            self.emit_line(&view.detail.to_line())?;
            if let Some(data) = &view.data {
                let mut record = self.encoding.encode_record(&latin1_bytes(&data.to_line_prefix()));
                record.extend_from_slice(&data.image_data);
                record.push(b'\n');
                self.writer.write_all(&record)?;
                self.records_written += 1;
            }
            if let Some(analysis) = &view.analysis {
                self.emit_line(&analysis.to_line())?;
            }
        }
        Ok(())
    }

    fn emit_line(&mut self, line: &str) -> Result<()> {
        let mut record = self.encoding.encode_record(&latin1_bytes(line));
        record.push(b'\n');
        self.writer.write_all(&record)?;
        self.records_written += 1;
        Ok(())
    }
}

/// Lossless char-to-byte encoding for Latin-1 content; anything beyond
/// Latin-1 cannot appear in a validated record and degrades to `?`.
fn latin1_bytes(line: &str) -> Vec<u8> {
    line.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}
