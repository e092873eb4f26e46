use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        error!(DiskIOError; &error.to_string())
    }
}

/// The four families every failure belongs to.
///
/// All of them abort the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed instruction text.
    Syntax,
    /// Operand stack or arithmetic precondition violated.
    State,
    /// Reading input or writing a save target failed.
    Io,
    /// A configured bound was exceeded.
    Limit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    IllegalArgumentCount = 3,
    InvalidNumber = 4,
    StackOverflow = 10,
    StackUnderflow = 11,
    DivisionByZero = 12,
    BadFileName = 20,
    DiskIOError = 21,
    LineBufferOverflow = 30,
    TooManyInstructions = 31,
}

impl ErrorCode {
    pub fn kind(self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            SyntaxError | IllegalArgumentCount | InvalidNumber => ErrorKind::Syntax,
            StackOverflow | StackUnderflow | DivisionByZero => ErrorKind::State,
            BadFileName | DiskIOError => ErrorKind::Io,
            LineBufferOverflow | TooManyInstructions => ErrorKind::Limit,
        }
    }

    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            SyntaxError => "SYNTAX ERROR",
            IllegalArgumentCount => "ILLEGAL ARGUMENT COUNT",
            InvalidNumber => "INVALID NUMBER",
            StackOverflow => "STACK OVERFLOW",
            StackUnderflow => "STACK UNDERFLOW",
            DivisionByZero => "DIVISION BY ZERO",
            BadFileName => "BAD FILE NAME",
            DiskIOError => "DISK I/O ERROR",
            LineBufferOverflow => "LINE BUFFER OVERFLOW",
            TooManyInstructions => "TOO MANY INSTRUCTIONS",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if suffix.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else {
            write!(f, "{} IN{}", self.code.as_str(), suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(StackUnderflow).to_string(), "STACK UNDERFLOW");
        assert_eq!(
            error!(DivisionByZero, Some(3)).to_string(),
            "DIVISION BY ZERO IN 3"
        );
        assert_eq!(
            error!(SyntaxError, Some(12); "UNKNOWN INSTRUCTION dup").to_string(),
            "SYNTAX ERROR IN 12; UNKNOWN INSTRUCTION dup"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(error!(InvalidNumber).kind(), ErrorKind::Syntax);
        assert_eq!(error!(StackOverflow).kind(), ErrorKind::State);
        assert_eq!(error!(BadFileName).kind(), ErrorKind::Io);
        assert_eq!(error!(TooManyInstructions).kind(), ErrorKind::Limit);
    }
}
