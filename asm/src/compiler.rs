use crate::error::Error;
use crate::label::Labels;
use crate::lexer::Words;
use crate::token::{Lexeme, TokenKind};
use smarch::OpKind;
use std::io::{BufReader, Read};

/// Result of one compile run. `words[i]` is the encoding of `lexemes[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub words: Vec<u32>,
    pub labels: Labels,
    pub lexemes: Vec<Lexeme>,
}

impl Assembly {
    /// Little-endian image of the words.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|word| word.to_le_bytes()).collect()
    }
}

/// Single pass compiler. Consumed by [`Compiler::run`], so the label table
/// and instruction index live exactly as long as one compilation.
pub struct Compiler {
    labels: Labels,
    // None once every u32 index has been handed out
    ino: Option<u32>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::with_labels(Labels::new())
    }

    /// Start from predefined labels. Defining one of them again is an error.
    pub fn with_labels(labels: Labels) -> Self {
        Compiler {
            labels,
            ino: Some(1),
        }
    }

    pub fn run<R: Read>(mut self, input: R) -> Result<Assembly, Error> {
        let mut words = vec![];
        let mut lexemes = vec![];

        for raw in Words::from_reader(BufReader::new(input)) {
            let lexeme = Lexeme::decode(raw?)?;
            let ino = self
                .ino
                .ok_or_else(|| Error::IndexOverflow(lexeme.text.clone()))?;
            let word = match lexeme.kind {
                TokenKind::Instruction => self.compile_instr(&lexeme.text)?,
                TokenKind::Integer => self.compile_int(&lexeme.text)?,
                TokenKind::LabelDef => self.compile_label(&lexeme, ino)?,
                TokenKind::LabelRef => self.compile_label_ref(&lexeme)?,
            };
            words.push(word);
            lexemes.push(lexeme);
            self.ino = ino.checked_add(1);
        }

        Ok(Assembly {
            words,
            labels: self.labels,
            lexemes,
        })
    }

    fn compile_instr(&self, value: &str) -> Result<u32, Error> {
        OpKind::parse(value)
            .map(OpKind::code)
            .ok_or_else(|| Error::UnknownMnemonic(value.to_string()))
    }

    fn compile_int(&self, value: &str) -> Result<u32, Error> {
        value
            .parse::<i32>()
            .map(|v| v as u32)
            .map_err(|e| Error::IntegerRange(value.to_string(), e))
    }

    fn compile_label(&mut self, lexeme: &Lexeme, ino: u32) -> Result<u32, Error> {
        let name = lexeme.label().unwrap_or(&lexeme.text);
        self.labels.define(name, ino)?;
        Ok(OpKind::NOP.code())
    }

    fn compile_label_ref(&self, lexeme: &Lexeme) -> Result<u32, Error> {
        let name = lexeme.label().unwrap_or(&lexeme.text);
        self.labels.resolve(name)
    }
}

/// Compile a program to its word sequence.
pub fn compile<R: Read>(input: R) -> Result<Vec<u32>, Error> {
    Compiler::new().run(input).map(|asm| asm.words)
}

/// Compile a program, keeping the label table and the classified tokens.
pub fn assemble<R: Read>(input: R) -> Result<Assembly, Error> {
    Compiler::new().run(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarch::{ADD, IN, JMP, LOAD, NOP};

    #[test]
    fn stream_of_instructions() {
        let words = compile("add In jMp NOP".as_bytes()).unwrap();
        assert_eq!(words, vec![ADD, IN, JMP, NOP]);
    }

    #[test]
    fn stream_of_numbers() {
        let words = compile("1 2 3 123 456".as_bytes()).unwrap();
        assert_eq!(words, vec![1, 2, 3, 123, 456]);
    }

    #[test]
    fn stream_of_labels() {
        let asm = assemble("a: b: c: d:".as_bytes()).unwrap();
        assert_eq!(asm.words, vec![NOP, NOP, NOP, NOP]);
        let expect: Labels = [("a", 1), ("b", 2), ("c", 3), ("d", 4)].into_iter().collect();
        assert_eq!(asm.labels, expect);
    }

    #[test]
    fn stream_of_label_refs() {
        let labels: Labels = [("a", 123), ("b", 456), ("c", 789), ("d", 101112)]
            .into_iter()
            .collect();
        let asm = Compiler::with_labels(labels)
            .run("&a &b &c &d".as_bytes())
            .unwrap();
        assert_eq!(asm.words, vec![123, 456, 789, 101112]);
    }

    #[test]
    fn reference_label_created_before() {
        let words = compile("add nop a: load &a jmp".as_bytes()).unwrap();
        assert_eq!(words, vec![ADD, NOP, NOP, LOAD, 3, JMP]);
    }

    #[test]
    fn predefined_label_cannot_be_redefined() {
        let labels: Labels = [("a", 7)].into_iter().collect();
        let err = Compiler::with_labels(labels)
            .run("a:".as_bytes())
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateLabel(name) if name == "a"));
    }

    #[test]
    fn lexemes_follow_words() {
        let asm = assemble("push 5 x: &x".as_bytes()).unwrap();
        assert_eq!(asm.words.len(), asm.lexemes.len());
        let kinds: Vec<_> = asm.lexemes.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Instruction,
                TokenKind::Integer,
                TokenKind::LabelDef,
                TokenKind::LabelRef
            ]
        );
    }

    #[test]
    fn unknown_mnemonic_at_encoder() {
        let err = Compiler::new().compile_instr("hoge").unwrap_err();
        assert_eq!(err.token(), Some("hoge"));
        assert!(matches!(err, Error::UnknownMnemonic(text) if text == "hoge"));
    }

    #[test]
    fn last_index_is_usable() {
        let compiler = Compiler {
            labels: Labels::new(),
            ino: Some(u32::MAX),
        };
        let asm = compiler.run("end:".as_bytes()).unwrap();
        assert_eq!(asm.labels.get("end"), Some(u32::MAX));
    }

    #[test]
    fn index_overflow() {
        let compiler = Compiler {
            labels: Labels::new(),
            ino: Some(u32::MAX),
        };
        let err = compiler.run("end: &end".as_bytes()).unwrap_err();
        assert_eq!(err.token(), Some("&end"));
        assert!(matches!(err, Error::IndexOverflow(text) if text == "&end"));
    }

    #[test]
    fn image_is_little_endian() {
        let asm = assemble("258 jmp".as_bytes()).unwrap();
        let mut expect = vec![0x02, 0x01, 0x00, 0x00];
        expect.extend_from_slice(&JMP.to_le_bytes());
        assert_eq!(asm.to_bytes(), expect);
    }
}
