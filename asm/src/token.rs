use crate::error::Error;
use smarch::OpKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Instruction, // add, JMP, Outnum
    Integer,     // 123
    LabelDef,    // main:
    LabelRef,    // &main
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub text: String,
    pub kind: TokenKind,
}

impl Lexeme {
    pub fn decode(text: String) -> Result<Self, Error> {
        let kind = decode(&text)?;
        Ok(Lexeme { text, kind })
    }

    /// Label name without the `:` or `&` marker.
    pub fn label(&self) -> Option<&str> {
        match self.kind {
            TokenKind::LabelDef => self.text.strip_suffix(':'),
            TokenKind::LabelRef => self.text.strip_prefix('&'),
            _ => None,
        }
    }
}

/// Classifies a raw word. Rules are tried in order, first match wins.
pub fn decode(word: &str) -> Result<TokenKind, Error> {
    if is_integer(word) {
        return Ok(TokenKind::Integer);
    }
    if is_instruction(word) {
        return Ok(TokenKind::Instruction);
    }
    if is_label_def(word) {
        return Ok(TokenKind::LabelDef);
    }
    if is_label_ref(word) {
        return Ok(TokenKind::LabelRef);
    }
    Err(Error::UnrecognizedToken(word.to_string()))
}

// The empty word passes.
fn is_integer(word: &str) -> bool {
    word.chars().all(|ch| ch.is_ascii_digit())
}

fn is_instruction(word: &str) -> bool {
    OpKind::parse(word).is_some()
}

fn is_label_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch == '_'
}

fn is_label_def(word: &str) -> bool {
    match word.strip_suffix(':') {
        Some(name) => !name.is_empty() && name.chars().all(is_label_char),
        None => false,
    }
}

fn is_label_ref(word: &str) -> bool {
    match word.strip_prefix('&') {
        Some(name) => !name.is_empty() && name.chars().all(is_label_char),
        None => false,
    }
}
