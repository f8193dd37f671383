//! Character handling for ICL records.
//!
//! Two independent knobs live here:
//!
//! - [`Charset`] is the **field content policy**: which characters an
//!   alphanumeric field may contain. The default is strict printable ASCII;
//!   [`Charset::Latin1`] additionally permits the printable Latin-1 range.
//! - [`Encoding`] is the **transport rendition** of the 80-column records.
//!   [`Encoding::Ebcdic`] translates record bytes through CP037 tables on
//!   the way in and out. Image blobs are opaque binary and are never
//!   translated. Record delimiters (LF) are not translated either; the
//!   supported EBCDIC variant is LF-delimited 80-column CP037 text.

use serde::{Deserialize, Serialize};

/// Permitted character set for alphanumeric field content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Charset {
    /// Printable ASCII, 0x20 through 0x7E (default).
    #[default]
    Ascii,
    /// Printable ASCII plus printable Latin-1 (0xA0 through 0xFF).
    Latin1,
}

impl Charset {
    /// Whether `c` is acceptable content for an alphanumeric field.
    #[must_use]
    pub fn allows(self, c: char) -> bool {
        match self {
            Charset::Ascii => matches!(c, '\u{20}'..='\u{7E}'),
            Charset::Latin1 => matches!(c, '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}'),
        }
    }
}

/// Transport rendition of fixed-width records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Records are ASCII (or Latin-1) text as-is (default).
    #[default]
    Ascii,
    /// Records are CP037 EBCDIC; translated to ASCII on read and back on
    /// write. Image blobs pass through untouched.
    Ebcdic,
}

impl Encoding {
    /// Translate one raw record into the internal ASCII rendition.
    #[must_use]
    pub(crate) fn decode_record(self, raw: &[u8]) -> Vec<u8> {
        match self {
            Encoding::Ascii => raw.to_vec(),
            Encoding::Ebcdic => raw.iter().map(|&b| CP037_TO_ASCII[b as usize]).collect(),
        }
    }

    /// Translate one internal ASCII record into its wire rendition.
    #[must_use]
    pub(crate) fn encode_record(self, record: &[u8]) -> Vec<u8> {
        match self {
            Encoding::Ascii => record.to_vec(),
            Encoding::Ebcdic => record.iter().map(|&b| ascii_to_cp037(b)).collect(),
        }
    }
}

/// CP037 code points for printable ASCII 0x20..=0x7E, indexed by `ascii - 0x20`.
const ASCII_TO_CP037: [u8; 95] = [
    0x40, // space
    0x5A, // !
    0x7F, // "
    0x7B, // #
    0x5B, // $
    0x6C, // %
    0x50, // &
    0x7D, // '
    0x4D, // (
    0x5D, // )
    0x5C, // *
    0x4E, // +
    0x6B, // ,
    0x60, // -
    0x4B, // .
    0x61, // /
    0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9, // 0-9
    0x7A, // :
    0x5E, // ;
    0x4C, // <
    0x7E, // =
    0x6E, // >
    0x6F, // ?
    0x7C, // @
    0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, // A-I
    0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, // J-R
    0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, // S-Z
    0xBA, // [
    0xE0, // backslash
    0xBB, // ]
    0xB0, // ^
    0x6D, // _
    0x79, // `
    0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, // a-i
    0x91, 0x92, 0x93, 0x94, 0x95, 0x96, 0x97, 0x98, 0x99, // j-r
    0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, // s-z
    0xC0, // {
    0x4F, // |
    0xD0, // }
    0xA1, // ~
];

/// Reverse table; EBCDIC bytes with no printable ASCII counterpart decode to
/// `?` and are rejected downstream by field validation.
const CP037_TO_ASCII: [u8; 256] = build_cp037_to_ascii();

const fn build_cp037_to_ascii() -> [u8; 256] {
    let mut table = [b'?'; 256];
    let mut i = 0;
    while i < ASCII_TO_CP037.len() {
        table[ASCII_TO_CP037[i] as usize] = 0x20 + i as u8;
        i += 1;
    }
    table
}

const fn ascii_to_cp037(b: u8) -> u8 {
    if b >= 0x20 && b <= 0x7E {
        ASCII_TO_CP037[(b - 0x20) as usize]
    } else {
        0x6F // '?'
    }
}
