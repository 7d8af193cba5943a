use crate::error::Error;
use crate::reader::CodePoints;
use std::io::BufRead;
use std::iter::FusedIterator;

const BREAKPOINTS: [char; 2] = [' ', '\n'];

/// Splits a code point stream into words at spaces and newlines.
///
/// Breakpoints are dropped. Two breakpoints in a row yield an empty word,
/// and whatever is buffered when the input ends (possibly nothing) is
/// yielded as the last word.
pub struct Words<I> {
    chars: I,
    exhausted: bool,
}

impl<I> Words<I>
where
    I: Iterator<Item = Result<char, Error>>,
{
    pub fn new(chars: I) -> Self {
        Self {
            chars,
            exhausted: false,
        }
    }
}

impl<R: BufRead> Words<CodePoints<R>> {
    pub fn from_reader(input: R) -> Self {
        Self::new(CodePoints::new(input))
    }
}

impl<I> Iterator for Words<I>
where
    I: Iterator<Item = Result<char, Error>>,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let mut buf = String::new();
        for ch in self.chars.by_ref() {
            match ch {
                Ok(ch) if BREAKPOINTS.contains(&ch) => return Some(Ok(buf)),
                Ok(ch) => buf.push(ch),
                Err(err) => {
                    self.exhausted = true;
                    return Some(Err(err));
                }
            }
        }

        self.exhausted = true;
        Some(Ok(buf))
    }
}

impl<I> FusedIterator for Words<I> where I: Iterator<Item = Result<char, Error>> {}
