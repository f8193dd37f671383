#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # cashletter
//!
//! A Rust library for reading, validating, and writing ANSI X9.100-187
//! Image Cash Letter (ICL) files used for Check 21 electronic check
//! presentment.
//!
//! ## Quick Start
//!
//! ### Reading an ICL file
//!
//! ```ignore
//! use cashletter::Reader;
//! use std::fs::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fd = File::open("presentment.icl")?;
//! let mut reader = Reader::new(fd);
//! let file = reader.read()?;
//! file.validate()?;
//!
//! for cash_letter in &file.cash_letters {
//!     println!("cash letter {}", cash_letter.header.cash_letter_id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Building and writing a file
//!
//! ```ignore
//! use cashletter::{Bundle, CashLetter, File, Writer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut file = File::new(header);
//! let mut cash_letter = CashLetter::new(cl_header);
//! let mut bundle = Bundle::new(b_header);
//! bundle.add_check_detail(check);
//! cash_letter.add_bundle(bundle);
//! file.add_cash_letter(cash_letter);
//! file.recompute_controls();
//!
//! let mut buffer = Vec::new();
//! Writer::new(&mut buffer).write(&file)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`reader`] — Structural parser and nesting state machine
//! - [`writer`] — Canonical-order serialization
//! - [`scanner`] — Record framing, including variable-length image records
//! - [`records`] — The per-record-type field tables
//! - [`file`] — The document tree (`File`, `CashLetter`, `Bundle`)
//! - [`validation`] — Cross-record count, total, and routing checks
//! - [`json`] — JSON façade with base64 image payloads
//! - [`encoding`] — Field charsets and the CP037 EBCDIC transport variant
//! - [`error`] — Structured, locatable error kinds

pub mod encoding;
pub mod error;
pub mod fields;
pub mod file;
pub mod json;
pub mod macros;
pub mod records;
pub mod reader;
pub mod scanner;
pub mod validation;
pub mod writer;

pub use encoding::{Charset, Encoding};
pub use error::{
    BundleError, CashLetterError, FieldError, FileError, IclError, ParseError, Result,
};
pub use file::{Bundle, CashLetter, File};
pub use reader::{ParseMode, Reader};
pub use records::{
    BundleControl, BundleHeader, CashLetterControl, CashLetterHeader, CheckDetail,
    CheckDetailAddendumA, CheckDetailAddendumB, CheckDetailAddendumC, CreditItem, FileControl,
    FileHeader, ImageView, ImageViewAnalysis, ImageViewData, ImageViewDetail, ReturnDetail,
    ReturnDetailAddendumA, ReturnDetailAddendumB, ReturnDetailAddendumC, ReturnDetailAddendumD,
};
pub use scanner::{Frame, RecordScanner};
pub use validation::ValidateOpts;
pub use writer::Writer;
