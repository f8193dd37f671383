//! Record framing for ICL byte streams.
//!
//! [`RecordScanner`] splits an input stream into records. Every record is
//! 80 columns of text delimited by LF (an optional preceding CR is
//! tolerated), with one exception: an image view data record ("52") carries
//! a binary blob immediately after its 80-column prefix, whose byte length
//! the prefix declares in its last seven columns. The scanner reads the
//! declared number of bytes as opaque binary; no newline scan happens
//! inside a blob.
//!
//! Framing is all this layer does. Record length and record type checks
//! are the structural parser's job, so a 70-column line is surfaced to it
//! verbatim.

use crate::encoding::Encoding;
use crate::error::{IclError, Result};
use crate::records::image_view;
use std::io::{BufReader, ErrorKind, Read};

/// One framed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A fixed-width text record (usually 80 columns; the parser checks).
    Fixed(String),
    /// An image view data record: 80-column prefix plus opaque image bytes.
    Image {
        /// The decoded 80-column prefix.
        prefix: String,
        /// The raw image bytes, exactly as declared by the prefix.
        blob: Vec<u8>,
    },
}

/// Splits an ICL byte stream into framed records.
#[derive(Debug)]
pub struct RecordScanner<R: Read> {
    reader: BufReader<R>,
    encoding: Encoding,
    peeked: Option<u8>,
}

impl<R: Read> RecordScanner<R> {
    /// Create a scanner over `reader` with ASCII transport encoding.
    pub fn new(reader: R) -> Self {
        RecordScanner {
            reader: BufReader::new(reader),
            encoding: Encoding::default(),
            peeked: None,
        }
    }

    /// Select the transport encoding (CP037 EBCDIC or ASCII).
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Read the next record.
    ///
    /// Returns `Ok(None)` at a clean end of input.
    ///
    /// # Errors
    ///
    /// Returns [`IclError::Truncated`] when the stream ends inside a record
    /// prefix or a declared image blob, or [`IclError::Io`] on read failure.
    pub fn next_record(&mut self) -> Result<Option<Frame>> {
        // Skip record delimiters between records; a trailing newline at EOF
        // is a clean end of input.
        let first = loop {
            match self.read_byte()? {
                None => return Ok(None),
                Some(b'\n') | Some(b'\r') => continue,
                Some(b) => break b,
            }
        };
        let second = self.read_byte()?.ok_or_else(|| {
            IclError::Truncated("stream ended inside a record type prefix".to_string())
        })?;

        let type_code = self.encoding.decode_record(&[first, second]);
        if type_code == b"52" {
            self.read_image_record([first, second])
        } else {
            self.read_fixed_record([first, second])
        }
    }

    fn read_fixed_record(&mut self, prefix: [u8; 2]) -> Result<Option<Frame>> {
        let mut raw = vec![prefix[0], prefix[1]];
        loop {
            match self.read_byte()? {
                None | Some(b'\n') => break,
                Some(b) => raw.push(b),
            }
        }
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let decoded = self.encoding.decode_record(&raw);
        Ok(Some(Frame::Fixed(latin1_string(&decoded))))
    }

    fn read_image_record(&mut self, prefix: [u8; 2]) -> Result<Option<Frame>> {
        let mut raw = vec![0u8; 80];
        raw[0] = prefix[0];
        raw[1] = prefix[1];
        self.read_exact_or_truncated(&mut raw[2..], "image record prefix ended prematurely")?;
        let decoded = self.encoding.decode_record(&raw);
        let length = image_view::image_data_length(&decoded)?;

        let mut blob = vec![0u8; length];
        self.read_exact_or_truncated(&mut blob, "image data ended prematurely")?;

        // The record delimiter follows the blob; anything else belongs to
        // the next record.
        match self.read_byte()? {
            Some(b'\r') => match self.read_byte()? {
                Some(b'\n') | None => {},
                Some(other) => self.peeked = Some(other),
            },
            Some(b'\n') | None => {},
            Some(other) => self.peeked = Some(other),
        }

        Ok(Some(Frame::Image {
            prefix: latin1_string(&decoded),
            blob,
        }))
    }

    fn read_exact_or_truncated(&mut self, buf: &mut [u8], context: &str) -> Result<()> {
        let mut filled = 0;
        if let Some(b) = self.peeked.take() {
            if !buf.is_empty() {
                buf[0] = b;
                filled = 1;
            }
        }
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => return Err(IclError::Truncated(context.to_string())),
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(IclError::Io(e)),
            }
        }
        Ok(())
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        if let Some(b) = self.peeked.take() {
            return Ok(Some(b));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(IclError::Io(e)),
            }
        }
    }
}

/// Lossless byte-to-char decoding; keeps Latin-1 content addressable.
fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn fixed_line(code: &str) -> String {
        format!("{code}{}", " ".repeat(80 - code.len()))
    }

    #[test]
    fn test_scan_fixed_records() {
        let input = format!("{}\n{}\n", fixed_line("01"), fixed_line("99"));
        let mut scanner = RecordScanner::new(Cursor::new(input.into_bytes()));
        match scanner.next_record().unwrap().unwrap() {
            Frame::Fixed(line) => assert!(line.starts_with("01")),
            Frame::Image { .. } => panic!("expected fixed record"),
        }
        match scanner.next_record().unwrap().unwrap() {
            Frame::Fixed(line) => assert!(line.starts_with("99")),
            Frame::Image { .. } => panic!("expected fixed record"),
        }
        assert!(scanner.next_record().unwrap().is_none());
    }

    #[test]
    fn test_scan_crlf_delimiters() {
        let input = format!("{}\r\n{}\r\n", fixed_line("01"), fixed_line("99"));
        let mut scanner = RecordScanner::new(Cursor::new(input.into_bytes()));
        match scanner.next_record().unwrap().unwrap() {
            Frame::Fixed(line) => assert_eq!(line.len(), 80),
            Frame::Image { .. } => panic!("expected fixed record"),
        }
        assert!(scanner.next_record().unwrap().is_some());
        assert!(scanner.next_record().unwrap().is_none());
    }

    #[test]
    fn test_short_line_is_surfaced_not_rejected() {
        let mut scanner = RecordScanner::new(Cursor::new(b"1 only seventy\n".to_vec()));
        match scanner.next_record().unwrap().unwrap() {
            Frame::Fixed(line) => assert_eq!(line, "1 only seventy"),
            Frame::Image { .. } => panic!("expected fixed record"),
        }
    }

    #[test]
    fn test_scan_image_record_with_embedded_newline() {
        // 80-column "52" prefix declaring a 12-byte blob that contains LF.
        let mut prefix = String::from("52");
        prefix.push_str(&" ".repeat(71));
        prefix.push_str("0000012");
        assert_eq!(prefix.len(), 80);
        let mut input = prefix.clone().into_bytes();
        input.extend_from_slice(b"hello\nworld!");
        input.push(b'\n');
        input.extend_from_slice(fixed_line("99").as_bytes());
        input.push(b'\n');

        let mut scanner = RecordScanner::new(Cursor::new(input));
        match scanner.next_record().unwrap().unwrap() {
            Frame::Image { prefix: p, blob } => {
                assert_eq!(p, prefix);
                assert_eq!(blob, b"hello\nworld!");
            },
            Frame::Fixed(_) => panic!("expected image record"),
        }
        match scanner.next_record().unwrap().unwrap() {
            Frame::Fixed(line) => assert!(line.starts_with("99")),
            Frame::Image { .. } => panic!("expected fixed record"),
        }
        assert!(scanner.next_record().unwrap().is_none());
    }

    #[test]
    fn test_image_record_without_trailing_newline_keeps_next_record() {
        let mut prefix = String::from("52");
        prefix.push_str(&" ".repeat(71));
        prefix.push_str("0000003");
        let mut input = prefix.into_bytes();
        input.extend_from_slice(b"abc");
        // No delimiter after the blob; the next record starts immediately.
        input.extend_from_slice(fixed_line("99").as_bytes());

        let mut scanner = RecordScanner::new(Cursor::new(input));
        assert!(matches!(
            scanner.next_record().unwrap().unwrap(),
            Frame::Image { .. }
        ));
        match scanner.next_record().unwrap().unwrap() {
            Frame::Fixed(line) => assert!(line.starts_with("99")),
            Frame::Image { .. } => panic!("expected fixed record"),
        }
    }

    #[test]
    fn test_truncated_blob() {
        let mut prefix = String::from("52");
        prefix.push_str(&" ".repeat(71));
        prefix.push_str("0000099");
        let mut input = prefix.into_bytes();
        input.extend_from_slice(b"way too short");

        let mut scanner = RecordScanner::new(Cursor::new(input));
        let err = scanner.next_record().unwrap_err();
        assert!(matches!(err, IclError::Truncated(_)));
    }

    #[test]
    fn test_empty_input() {
        let mut scanner = RecordScanner::new(Cursor::new(Vec::<u8>::new()));
        assert!(scanner.next_record().unwrap().is_none());
    }

    #[test]
    fn test_ebcdic_fixed_record() {
        let line = fixed_line("01");
        let mut input = Encoding::Ebcdic.encode_record(line.as_bytes());
        input.push(b'\n');
        let mut scanner =
            RecordScanner::new(Cursor::new(input)).with_encoding(Encoding::Ebcdic);
        match scanner.next_record().unwrap().unwrap() {
            Frame::Fixed(decoded) => assert_eq!(decoded, line),
            Frame::Image { .. } => panic!("expected fixed record"),
        }
    }
}
