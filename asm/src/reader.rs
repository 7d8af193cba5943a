use crate::error::Error;
use std::io::{BufRead, ErrorKind};
use std::iter::FusedIterator;

/// Lazily decodes UTF-8 code points from a byte stream.
///
/// The first invalid sequence is reported once, after which the source is
/// closed and yields nothing more.
pub struct CodePoints<R> {
    input: R,
    closed: bool,
}

impl<R: BufRead> CodePoints<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            closed: false,
        }
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        loop {
            let byte = match self.input.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if byte.is_some() {
                self.input.consume(1);
            }
            return Ok(byte);
        }
    }

    fn read_char(&mut self) -> Result<Option<char>, Error> {
        let lead = match self.read_byte()? {
            Some(lead) => lead,
            None => return Ok(None),
        };
        let width = utf8_width(lead);
        if width == 0 {
            return Err(Error::InvalidCodePoint(vec![lead]));
        }

        let mut bytes = vec![lead];
        while bytes.len() < width {
            match self.read_byte()? {
                Some(cont) => {
                    bytes.push(cont);
                    if cont & 0xC0 != 0x80 {
                        return Err(Error::InvalidCodePoint(bytes));
                    }
                }
                // Truncated sequence at end of input
                None => return Err(Error::InvalidCodePoint(bytes)),
            }
        }

        // Overlong forms, surrogates and values above U+10FFFF
        match std::str::from_utf8(&bytes) {
            Ok(s) => Ok(s.chars().next()),
            Err(_) => Err(Error::InvalidCodePoint(bytes)),
        }
    }
}

impl<R: BufRead> Iterator for CodePoints<R> {
    type Item = Result<char, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed {
            return None;
        }
        match self.read_char() {
            Ok(Some(ch)) => Some(Ok(ch)),
            Ok(None) => {
                self.closed = true;
                None
            }
            Err(err) => {
                self.closed = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for CodePoints<R> {}

fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> Vec<Result<char, Error>> {
        CodePoints::new(bytes).collect()
    }

    #[test]
    fn ascii() {
        let chars: Vec<char> = decode(b"add 1").into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(chars, vec!['a', 'd', 'd', ' ', '1']);
    }

    #[test]
    fn multibyte() {
        let chars: Vec<char> = decode("aé€😀".as_bytes())
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(chars, vec!['a', 'é', '€', '😀']);
    }

    #[test]
    fn empty() {
        assert!(decode(b"").is_empty());
    }

    #[test]
    fn invalid_lead_closes_source() {
        let result = decode(b"a\xFFb");
        assert_eq!(result.len(), 2);
        assert!(matches!(result[0], Ok('a')));
        assert!(matches!(&result[1], Err(Error::InvalidCodePoint(b)) if b == &[0xFF]));
    }

    #[test]
    fn bad_continuation() {
        let result = decode(b"\xC3a");
        assert_eq!(result.len(), 1);
        assert!(matches!(&result[0], Err(Error::InvalidCodePoint(b)) if b == &[0xC3, b'a']));
    }

    #[test]
    fn truncated_sequence() {
        let result = decode(b"ok\xE2\x82");
        assert_eq!(result.len(), 3);
        assert!(matches!(&result[2], Err(Error::InvalidCodePoint(b)) if b == &[0xE2, 0x82]));
    }

    #[test]
    fn overlong_and_surrogate() {
        assert!(decode(b"\xE0\x80\xAF")[0].as_ref().is_err());
        assert!(decode(b"\xED\xA0\x80")[0].as_ref().is_err());
        assert!(decode(b"\xC0\xAF")[0].as_ref().is_err());
    }

    #[test]
    fn fused_after_end() {
        let mut points = CodePoints::new(&b"x"[..]);
        assert!(matches!(points.next(), Some(Ok('x'))));
        assert!(points.next().is_none());
        assert!(points.next().is_none());
    }
}
