pub mod compiler;
pub mod error;
pub mod label;
pub mod lexer;
pub mod reader;
pub mod token;
pub mod util;

pub use compiler::{assemble, compile, Assembly, Compiler};
pub use error::Error;
pub use label::Labels;
pub use lexer::Words;
pub use reader::CodePoints;
pub use token::{Lexeme, TokenKind};
