/// ## Instruction names
///
/// Every line starts with one of these. The arity is exact: an
/// instruction with more or fewer arguments is a syntax error.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Add,
    Sub,
    Mul,
    Div,
    Push,
    Pop,
    Load,
    Store,
    Remove,
    Save,
    List,
    Print,
}

impl Opcode {
    pub fn from_bytes(s: &[u8]) -> Option<Opcode> {
        use Opcode::*;
        Some(match s {
            b"+" => Add,
            b"-" => Sub,
            b"*" => Mul,
            b"/" => Div,
            b"push" => Push,
            b"pop" => Pop,
            b"load" => Load,
            b"store" => Store,
            b"remove" => Remove,
            b"save" => Save,
            b"list" => List,
            b"print" => Print,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        use Opcode::*;
        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Push => "push",
            Pop => "pop",
            Load => "load",
            Store => "store",
            Remove => "remove",
            Save => "save",
            List => "list",
            Print => "print",
        }
    }

    /// Number of argument tokens following the opcode.
    pub fn arity(self) -> usize {
        use Opcode::*;
        match self {
            Push | Load | Store | Remove | Save => 1,
            Add | Sub | Mul | Div | Pop | List | Print => 0,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
