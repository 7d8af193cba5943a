use crate::compiler::Assembly;
use crate::token::{Lexeme, TokenKind};
use color_print::cformat;

pub fn print_dump(asm: &Assembly) {
    println!("{}+{}", "-".repeat(20), "-".repeat(40));
    for (idx, (lexeme, word)) in asm.lexemes.iter().zip(&asm.words).enumerate() {
        // Slots are numbered like label addresses, from 1
        println!(
            "[{:04X}] {} | {}",
            idx + 1,
            word_bytes(*word),
            cformat_lexeme(lexeme, *word)
        );
    }
    println!("{}+{}", "-".repeat(20), "-".repeat(40));
    if !asm.labels.is_empty() {
        for (name, addr) in asm.labels.iter() {
            println!("{}", cformat!("<g>{:>12}</> = 0x{:04X}", name, addr));
        }
        println!("{}+{}", "-".repeat(20), "-".repeat(40));
    }
}

fn word_bytes(word: u32) -> String {
    format!(
        "{:02X} {:02X} {:02X} {:02X}",
        (word >> 24) & 0xFF,
        (word >> 16) & 0xFF,
        (word >> 8) & 0xFF,
        word & 0xFF
    )
}

fn cformat_lexeme(lexeme: &Lexeme, word: u32) -> String {
    match lexeme.kind {
        TokenKind::Instruction => cformat!("<red>{}</>", lexeme.text.to_lowercase()),
        TokenKind::Integer => cformat!("<y>{}</>", word as i32),
        TokenKind::LabelDef => cformat!("<g>{}</>", lexeme.text),
        TokenKind::LabelRef => cformat!("<g>{}</>=<y>{}</>", lexeme.text, word),
    }
}

#[test]
fn test() {
    assert_eq!(word_bytes(0x0102_0A0B), "01 02 0A 0B");
    assert_eq!(word_bytes(u32::MAX), "FF FF FF FF");
}
