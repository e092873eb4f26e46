use super::lex::tokenize;
use super::{Error, Opcode};
use crate::error;
use std::borrow::Cow;
use std::io::{self, Write};

/// No instruction takes more than one argument, so four fields are
/// enough to tell a well formed line from one with trailing junk.
pub const MAX_TOKENS: usize = 4;

/// ## Instruction record
///
/// The fields of one line of input. Tokens borrow from the line
/// they were split from and are kept as bytes.

#[derive(Debug, PartialEq)]
pub struct Line<'a> {
    tokens: Vec<&'a [u8]>,
}

impl<'a> Line<'a> {
    pub fn new<S: AsRef<[u8]> + ?Sized>(s: &'a S) -> Line<'a> {
        Line {
            tokens: tokenize(s.as_ref(), MAX_TOKENS),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn opcode(&self) -> Option<&'a [u8]> {
        self.tokens.first().copied()
    }

    pub fn args(&self) -> &[&'a [u8]] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    /// Validates the record. Blank lines are `Ok(None)`.
    pub fn instruction(&self) -> Result<Option<Instruction<'a>>, Error> {
        let word = match self.opcode() {
            Some(word) => word,
            None => return Ok(None),
        };
        let opcode = match Opcode::from_bytes(word) {
            Some(opcode) => opcode,
            None => {
                return Err(error!(SyntaxError; &format!(
                    "UNKNOWN INSTRUCTION {}",
                    String::from_utf8_lossy(word)
                )));
            }
        };
        let args = self.args();
        if args.len() != opcode.arity() {
            return Err(error!(IllegalArgumentCount; &format!(
                "{} EXPECTS {} ARGUMENT(S) BUT FOUND {}",
                opcode,
                opcode.arity(),
                args.len()
            )));
        }
        use Opcode::*;
        Ok(Some(match opcode {
            Push => Instruction::Push(parse_value(args[0])?),
            Pop => Instruction::Pop,
            Add => Instruction::Add,
            Sub => Instruction::Sub,
            Mul => Instruction::Mul,
            Div => Instruction::Div,
            Load => Instruction::Load(args[0]),
            Store => Instruction::Store(args[0]),
            Remove => Instruction::Remove(args[0]),
            Save => Instruction::Save(args[0]),
            List => Instruction::List,
            Print => Instruction::Print,
        }))
    }
}

impl std::fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let text: Vec<Cow<str>> = self.tokens.iter().map(|t| String::from_utf8_lossy(t)).collect();
        write!(f, "{}", text.join(" "))
    }
}

// The whole field must be the number: `12abc` is refused, not read as 12.
fn parse_value(s: &[u8]) -> Result<i32, Error> {
    match std::str::from_utf8(s).ok().and_then(|s| s.parse::<i32>().ok()) {
        Some(value) => Ok(value),
        None => Err(error!(InvalidNumber; &format!(
            "NOT A 32-BIT INTEGER: {}",
            String::from_utf8_lossy(s)
        ))),
    }
}

/// ## A validated instruction
///
/// Name arguments borrow from the line. `write_to` gives back the
/// canonical text form byte for byte, which is what the save file is
/// made of; `Display` is the same text for humans, with any bytes that
/// aren't UTF-8 replaced.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction<'a> {
    Push(i32),
    Pop,
    Add,
    Sub,
    Mul,
    Div,
    Load(&'a [u8]),
    Store(&'a [u8]),
    Remove(&'a [u8]),
    Save(&'a [u8]),
    List,
    Print,
}

impl Instruction<'_> {
    pub fn opcode(&self) -> Opcode {
        use Instruction::*;
        match self {
            Push(_) => Opcode::Push,
            Pop => Opcode::Pop,
            Add => Opcode::Add,
            Sub => Opcode::Sub,
            Mul => Opcode::Mul,
            Div => Opcode::Div,
            Load(_) => Opcode::Load,
            Store(_) => Opcode::Store,
            Remove(_) => Opcode::Remove,
            Save(_) => Opcode::Save,
            List => Opcode::List,
            Print => Opcode::Print,
        }
    }

    /// The name argument, if the instruction has one.
    pub fn name(&self) -> Option<&[u8]> {
        use Instruction::*;
        match self {
            Load(name) | Store(name) | Remove(name) | Save(name) => Some(*name),
            _ => None,
        }
    }

    /// Writes the canonical text, without a newline.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        match (self, self.name()) {
            (Instruction::Push(value), _) => write!(w, "{} {}", self.opcode(), value),
            (_, Some(name)) => {
                write!(w, "{} ", self.opcode())?;
                w.write_all(name)
            }
            _ => write!(w, "{}", self.opcode()),
        }
    }
}

impl std::fmt::Display for Instruction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Instruction::*;
        match self {
            Push(value) => write!(f, "{} {}", self.opcode(), value),
            Load(name) | Store(name) | Remove(name) | Save(name) => {
                write!(f, "{} {}", self.opcode(), String::from_utf8_lossy(name))
            }
            _ => write!(f, "{}", self.opcode()),
        }
    }
}
