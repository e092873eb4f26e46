/*!
# Rust Language Module

This Rust module splits instruction lines into fields and validates
them into instructions.

*/

/// 1-based position of a line within one run; `None` when unknown.
pub type LineNumber = Option<usize>;

#[macro_use]
mod error;
mod lex;
mod line;
mod opcode;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::tokenize;
pub use lex::WHITESPACE;
pub use line::Instruction;
pub use line::Line;
pub use line::MAX_TOKENS;
pub use opcode::Opcode;

#[cfg(test)]
mod tests;
