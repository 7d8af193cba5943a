use color_print::cprintln;
use std::error::Error as _;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Decode errors
    #[error("Invalid code point: {0:02X?}")]
    InvalidCodePoint(Vec<u8>),

    #[error("Unrecognized token shape: `{0}`")]
    UnrecognizedToken(String),

    // Encode errors
    #[error("Unknown mnemonic: `{0}`")]
    UnknownMnemonic(String),

    #[error("Cannot parse `{0}` as 32-bit integer")]
    IntegerRange(String, #[source] ParseIntError),

    #[error("Re-defined label: `{0}`")]
    DuplicateLabel(String),

    #[error("Undefined label: `{0}`")]
    UndefinedLabel(String),

    #[error("Instruction index overflow at `{0}`")]
    IndexOverflow(String),

    // IO errors
    #[error("Failed to read input")]
    Io(#[from] std::io::Error),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbols")]
    Symbols(#[from] serde_yaml::Error),
}

impl Error {
    /// Invalid byte sequence or a word matching no token shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::InvalidCodePoint(_) | Error::UnrecognizedToken(_))
    }

    /// Token text or label name the error is about, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::UnrecognizedToken(s)
            | Error::UnknownMnemonic(s)
            | Error::IntegerRange(s, _)
            | Error::DuplicateLabel(s)
            | Error::UndefinedLabel(s)
            | Error::IndexOverflow(s) => Some(s),
            _ => None,
        }
    }

    /// Print error with the source file and the offending token
    pub fn print_diag(&self, file: &str) {
        cprintln!("<red,bold>error</>: {}", self);
        cprintln!("     <blue>--></> <underline>{}</>", file);
        if let Some(token) = self.token() {
            cprintln!("      <blue>|</>");
            cprintln!("      <blue>|</> {}", token);
            cprintln!("      <blue>|</> <red>{}</>", "^".repeat(token.chars().count().max(1)));
        }
        let mut source = self.source();
        while let Some(cause) = source {
            cprintln!("<blue,bold>cause</>: {}", cause);
            source = cause.source();
        }
    }
}
