//! Field semantic types shared by every record module.
//!
//! ICL records are 80-column fixed-width text. Each record module declares
//! its column table once and drives both `parse` and `to_line` through the
//! helpers here, so the two directions cannot drift apart:
//!
//! - alphanumeric fields are left-justified and space-padded,
//! - numeric fields are right-justified and zero-padded,
//! - MICR on-us fields are right-justified and **space**-padded,
//! - dates are `YYYYMMDD`, times are `HHMM`, and an empty date or time
//!   serializes as spaces,
//! - routing numbers are nine digits with an ABA check digit.
//!
//! Parsing is lenient about content (content problems are `validate`'s job);
//! only gross length mismatches fail at parse time.

use crate::encoding::Charset;
use crate::error::{
    FieldError, FileError, Result, MSG_FIELD_INCLUSION, MSG_INVALID_ENUM, MSG_INVALID_ROUTING,
    MSG_NON_ALPHANUMERIC, MSG_NON_NUMERIC, MSG_RECORD_LENGTH, MSG_UPPER_ALPHA,
};

/// Fixed number of columns in every non-image record, and in the prefix of an
/// image data record.
pub const RECORD_WIDTH: usize = 80;

/// A parsed 80-column window over one record, indexed by character position.
///
/// Character (not byte) indexing keeps Latin-1 content addressable at its
/// column positions.
#[derive(Debug)]
pub(crate) struct Columns {
    chars: Vec<char>,
}

impl Columns {
    /// Wrap a record, requiring exactly [`RECORD_WIDTH`] columns.
    pub(crate) fn fixed(record: &str) -> Result<Self> {
        let chars: Vec<char> = record.chars().collect();
        if chars.len() != RECORD_WIDTH {
            return Err(FileError::new("RecordLength", chars.len(), MSG_RECORD_LENGTH).into());
        }
        Ok(Columns { chars })
    }

    /// Raw text of columns `start..end`.
    pub(crate) fn text(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    /// Trimmed alphanumeric content of columns `start..end`.
    pub(crate) fn alpha(&self, start: usize, end: usize) -> String {
        self.text(start, end).trim().to_string()
    }

    /// Numeric content of columns `start..end`; blanks and garbage read as 0.
    pub(crate) fn number(&self, start: usize, end: usize) -> u64 {
        self.text(start, end).trim().parse().unwrap_or(0)
    }
}

/// Left-justify and space-pad `value` to `width` columns, truncating overflow.
#[must_use]
pub fn alpha_field(value: &str, width: usize) -> String {
    let mut out: String = value.chars().take(width).collect();
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}

/// Right-justify and zero-pad `value` to `width` columns. Overflow keeps the
/// least significant digits.
#[must_use]
pub fn numeric_field(value: u64, width: usize) -> String {
    let digits = value.to_string();
    if digits.len() >= width {
        digits[digits.len() - width..].to_string()
    } else {
        format!("{}{}", "0".repeat(width - digits.len()), digits)
    }
}

/// Right-justify and zero-pad a digit string to `width` columns.
#[must_use]
pub fn numeric_str_field(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        value.chars().skip(len - width).collect()
    } else {
        format!("{}{}", "0".repeat(width - len), value)
    }
}

/// Right-justify and **space**-pad a MICR on-us value to `width` columns.
#[must_use]
pub fn micr_field(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        value.chars().skip(len - width).collect()
    } else {
        format!("{}{}", " ".repeat(width - len), value)
    }
}

/// Serialize a `YYYYMMDD` date; an empty date becomes eight spaces.
#[must_use]
pub fn date_field(value: &str) -> String {
    if value.trim().is_empty() {
        " ".repeat(8)
    } else {
        alpha_field(value, 8)
    }
}

/// Serialize an `HHMM` time; an empty time becomes four spaces.
#[must_use]
pub fn time_field(value: &str) -> String {
    if value.trim().is_empty() {
        " ".repeat(4)
    } else {
        alpha_field(value, 4)
    }
}

/// Whether the ABA check digit of a nine-digit routing number verifies.
///
/// Weights 3, 7, 1 repeat across the nine digits; the weighted sum of a valid
/// routing number is a multiple of ten. Returns `false` for anything that is
/// not nine ASCII digits.
#[must_use]
pub fn routing_checksum_valid(routing: &str) -> bool {
    let digits: Vec<u32> = routing.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 9 || routing.chars().count() != 9 {
        return false;
    }
    const WEIGHTS: [u32; 9] = [3, 7, 1, 3, 7, 1, 3, 7, 1];
    let sum: u32 = digits.iter().zip(WEIGHTS.iter()).map(|(d, w)| d * w).sum();
    sum % 10 == 0
}

// Content checks. Each returns the first violation as a FieldError naming the
// published field name; inclusion checks run before content checks so a
// required-but-empty field reports inclusion, not charset.

pub(crate) fn include_str(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FieldError::new(name, value, MSG_FIELD_INCLUSION).into());
    }
    Ok(())
}

pub(crate) fn include_number(name: &str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(FieldError::new(name, value, MSG_FIELD_INCLUSION).into());
    }
    Ok(())
}

pub(crate) fn include_routing(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() || value.chars().all(|c| c == '0') {
        return Err(FieldError::new(name, value, MSG_FIELD_INCLUSION).into());
    }
    Ok(())
}

pub(crate) fn include_date(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() || value == "00000000" {
        return Err(FieldError::new(name, value, MSG_FIELD_INCLUSION).into());
    }
    Ok(())
}

pub(crate) fn check_alphanumeric(name: &str, value: &str, charset: Charset) -> Result<()> {
    for c in value.chars() {
        if !charset.allows(c) {
            return Err(FieldError::new(name, value, MSG_NON_ALPHANUMERIC).into());
        }
    }
    Ok(())
}

pub(crate) fn check_numeric_str(name: &str, value: &str) -> Result<()> {
    if !value.is_empty() && !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::new(name, value, MSG_NON_NUMERIC).into());
    }
    Ok(())
}

pub(crate) fn check_upper_alpha(name: &str, value: &str) -> Result<()> {
    if !value
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(FieldError::new(name, value, MSG_UPPER_ALPHA).into());
    }
    Ok(())
}

pub(crate) fn check_routing(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    if value.chars().count() != 9 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::new(name, value, MSG_INVALID_ROUTING).into());
    }
    Ok(())
}

/// Check details carry the payor routing number as eight digits plus a
/// separate check digit column.
pub(crate) fn check_routing_prefix(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    if value.chars().count() != 8 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::new(name, value, MSG_INVALID_ROUTING).into());
    }
    Ok(())
}

pub(crate) fn check_enum(name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    if !allowed.contains(&value) {
        return Err(FieldError::new(name, value, MSG_INVALID_ENUM).into());
    }
    Ok(())
}

pub(crate) fn check_enum_number(name: &str, value: u64, max: u64) -> Result<()> {
    if value > max {
        return Err(FieldError::new(name, value, MSG_INVALID_ENUM).into());
    }
    Ok(())
}

pub(crate) fn check_date(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    if value.chars().count() != 8 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::new(name, value, MSG_NON_NUMERIC).into());
    }
    let month: u32 = value[4..6].parse().unwrap_or(0);
    let day: u32 = value[6..8].parse().unwrap_or(0);
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(FieldError::new(name, value, MSG_INVALID_ENUM).into());
    }
    Ok(())
}

pub(crate) fn check_time(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    if value.chars().count() != 4 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::new(name, value, MSG_NON_NUMERIC).into());
    }
    let hour: u32 = value[0..2].parse().unwrap_or(99);
    let minute: u32 = value[2..4].parse().unwrap_or(99);
    if hour > 23 || minute > 59 {
        return Err(FieldError::new(name, value, MSG_INVALID_ENUM).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_field_pads_and_truncates() {
        assert_eq!(alpha_field("Citadel", 18), "Citadel           ");
        assert_eq!(alpha_field("overlong value", 4), "over");
        assert_eq!(alpha_field("", 3), "   ");
    }

    #[test]
    fn test_numeric_field_zero_pads() {
        assert_eq!(numeric_field(0, 4), "0000");
        assert_eq!(numeric_field(123456, 10), "0000123456");
        assert_eq!(numeric_field(123456, 4), "3456");
    }

    #[test]
    fn test_micr_field_right_justifies_with_spaces() {
        assert_eq!(micr_field("123456789", 15), "      123456789");
        assert_eq!(micr_field("", 3), "   ");
    }

    #[test]
    fn test_date_and_time_fields_blank_when_empty() {
        assert_eq!(date_field(""), "        ");
        assert_eq!(date_field("20180905"), "20180905");
        assert_eq!(time_field(""), "    ");
        assert_eq!(time_field("1523"), "1523");
    }

    #[test]
    fn test_routing_checksum() {
        assert!(routing_checksum_valid("231380104"));
        assert!(routing_checksum_valid("121042882"));
        assert!(!routing_checksum_valid("123456789"));
        assert!(!routing_checksum_valid("12345678"));
        assert!(!routing_checksum_valid("12345678X"));
    }

    #[test]
    fn test_columns_rejects_short_record() {
        let err = Columns::fixed("only seventy").unwrap_err();
        let fe = err.file_error().expect("file error");
        assert_eq!(fe.field_name, "RecordLength");
    }

    #[test]
    fn test_columns_windows() {
        let line = format!("01{}", " ".repeat(78));
        let c = Columns::fixed(&line).unwrap();
        assert_eq!(c.text(0, 2), "01");
        assert_eq!(c.alpha(2, 10), "");
        assert_eq!(c.number(2, 10), 0);
    }

    #[test]
    fn test_check_alphanumeric_charsets() {
        assert!(check_alphanumeric("PayorBankName", "Payor Bank", Charset::Ascii).is_ok());
        let err = check_alphanumeric("PayorBankName", "®©", Charset::Ascii).unwrap_err();
        assert_eq!(err.field_error().unwrap().field_name, "PayorBankName");
        assert!(check_alphanumeric("PayorBankName", "®©", Charset::Latin1).is_ok());
    }

    #[test]
    fn test_check_date_bounds() {
        assert!(check_date("BundleBusinessDate", "20180905").is_ok());
        assert!(check_date("BundleBusinessDate", "").is_ok());
        assert!(check_date("BundleBusinessDate", "20181332").is_err());
        assert!(check_date("BundleBusinessDate", "2018-9-5").is_err());
    }

    #[test]
    fn test_include_routing_rejects_zeros() {
        assert!(include_routing("EceInstitutionRoutingNumber", "000000000").is_err());
        assert!(include_routing("EceInstitutionRoutingNumber", "").is_err());
        assert!(include_routing("EceInstitutionRoutingNumber", "231380104").is_ok());
    }
}
